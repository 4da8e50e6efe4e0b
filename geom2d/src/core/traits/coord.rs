use super::FuzzyOrd;
use static_aabb2d_index::IndexableNum;

/// Trait representing a signed coordinate value (e.g. `3`, `-12`, `1.5`) that can be fuzzy compared
/// and ordered.
///
/// Implemented for `i32`, `i64`, `f32`, and `f64`. Integer coordinates compare exactly, floating
/// point coordinates compare exactly unless an epsilon is supplied by the caller.
pub trait Coord:
    num_traits::Num
    + num_traits::Signed
    + num_traits::NumCast
    + num_traits::Bounded
    + FuzzyOrd
    + PartialOrd
    + std::default::Default
    + std::fmt::Debug
    + IndexableNum
    + 'static
{
    /// `true` if the coordinate type is an integer type (conversions from `f64` round).
    const IS_INTEGRAL: bool;

    /// Largest coordinate magnitude accepted for a [PolyTree](crate::polytree::PolyTree) contour.
    ///
    /// Contours are stored doubled and the exact predicates multiply coordinate differences, so
    /// integer types accept far less than their full range (`4_096` for `i32`, `2^28` for `i64`).
    const MAX_COORDINATE: Self;

    /// Addition that wraps around on integer overflow (plain addition for floating point).
    fn wrapping_add_coord(self, other: Self) -> Self;

    /// Subtraction that wraps around on integer overflow (plain subtraction for floating point).
    fn wrapping_sub_coord(self, other: Self) -> Self;

    /// Multiplication that wraps around on integer overflow (plain product for floating point).
    fn wrapping_mul_coord(self, other: Self) -> Self;

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// Convert from an `f64` value, integer types round to the nearest value.
    fn from_f64(value: f64) -> Self;

    /// Convert to an `f64` value.
    #[inline]
    fn as_f64(self) -> f64 {
        num_traits::ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    /// Smaller of two values (`self` is returned if they are equal or unordered).
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// Larger of two values (`self` is returned if they are equal or unordered).
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

macro_rules! impl_coord_int {
    ($ty:ty, $max:expr) => {
        impl Coord for $ty {
            const IS_INTEGRAL: bool = true;
            const MAX_COORDINATE: Self = $max;

            #[inline]
            fn two() -> Self {
                2
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value.round() as $ty
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn wrapping_add_coord(self, other: Self) -> Self {
                self.wrapping_add(other)
            }

            #[inline]
            fn wrapping_sub_coord(self, other: Self) -> Self {
                self.wrapping_sub(other)
            }

            #[inline]
            fn wrapping_mul_coord(self, other: Self) -> Self {
                self.wrapping_mul(other)
            }
        }
    };
}

macro_rules! impl_coord_float {
    ($ty:ty, $max:expr) => {
        impl Coord for $ty {
            const IS_INTEGRAL: bool = false;
            const MAX_COORDINATE: Self = $max;

            #[inline]
            fn two() -> Self {
                2.0
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $ty
            }

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn wrapping_add_coord(self, other: Self) -> Self {
                self + other
            }

            #[inline]
            fn wrapping_sub_coord(self, other: Self) -> Self {
                self - other
            }

            #[inline]
            fn wrapping_mul_coord(self, other: Self) -> Self {
                self * other
            }
        }
    };
}

impl_coord_int!(i32, 1 << 12);
impl_coord_int!(i64, 1 << 28);
impl_coord_float!(f32, 1.0e18);
impl_coord_float!(f64, 1.0e150);
