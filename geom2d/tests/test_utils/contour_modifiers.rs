use geom2d::core::math::Point;

/// Cycles all the point index positions forward by `n`. E.g. index 0 becomes 1, last index becomes
/// 0, etc.
pub fn cycle_start_index_forward(input: &[Point<i64>], n: usize) -> Vec<Point<i64>> {
    assert!(n > 0, "cycling forward by 0 just returns the same contour");
    assert!(
        n < input.len(),
        "cycling forward by more than the contour length is unnecessary"
    );
    input.iter().cycle().skip(n).take(input.len()).copied().collect()
}

#[derive(Debug, Clone, Copy)]
pub struct ModifiedContourState {
    pub inverted_direction: bool,
    pub cycle_position: usize,
}

impl ModifiedContourState {
    pub fn new(inverted_direction: bool, cycle_position: usize) -> Self {
        Self {
            inverted_direction,
            cycle_position,
        }
    }
}

/// Visits a contour with every start position and both directions.
#[derive(Debug, Clone)]
pub struct ModifiedContourSet<'a> {
    pub input: &'a [Point<i64>],
}

impl<'a> ModifiedContourSet<'a> {
    pub fn new(input: &'a [Point<i64>]) -> Self {
        Self { input }
    }

    pub fn accept_closure<F>(&self, visitor: &mut F)
    where
        F: FnMut(Vec<Point<i64>>, ModifiedContourState),
    {
        let mut inverted = self.input.to_vec();
        inverted.reverse();

        visitor(self.input.to_vec(), ModifiedContourState::new(false, 0));
        visitor(inverted.clone(), ModifiedContourState::new(true, 0));

        for i in 1..self.input.len() {
            visitor(
                cycle_start_index_forward(self.input, i),
                ModifiedContourState::new(false, i),
            );
            visitor(
                cycle_start_index_forward(&inverted, i),
                ModifiedContourState::new(true, i),
            );
        }
    }
}
