pub mod boolean;
pub mod contains;
pub mod entry_exit;
pub mod intersects;
pub mod nesting;
pub mod relationships;
pub mod traversal;
