use num_complex::Complex64;

/// Square `size x size` grid of complex samples stored as `size` contiguous
/// lines. `at(x, y)` selects line `x`, position `y`.
///
/// The 2D transforms run their first pass over lines, then [`SampleGrid::transpose`]
/// and run the second pass over lines again. A forward spectrum is therefore
/// handed out in transposed orientation, which the inverse undoes.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    size: usize,
    data: Vec<Complex64>,
}

impl SampleGrid {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![Complex64::new(0.0, 0.0); size * size],
        }
    }

    /// Builds a grid from `size` lines of `size` samples each.
    ///
    /// # Panics
    /// If any line length differs from the number of lines.
    pub fn from_lines(lines: Vec<Vec<Complex64>>) -> Self {
        let size: usize = lines.len();
        let mut data: Vec<Complex64> = Vec::with_capacity(size * size);
        lines.into_iter().enumerate().for_each(|(i, line)| {
            assert_eq!(
                line.len(),
                size,
                "invalid line {}: len={} != size={}",
                i,
                line.len(),
                size
            );
            data.extend(line);
        });
        Self { size, data }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn line(&self, x: usize) -> &[Complex64] {
        &self.data[x * self.size..(x + 1) * self.size]
    }

    #[inline(always)]
    pub fn line_mut(&mut self, x: usize) -> &mut [Complex64] {
        let size: usize = self.size;
        &mut self.data[x * size..(x + 1) * size]
    }

    pub fn lines(&self) -> impl Iterator<Item = &[Complex64]> {
        // chunks_exact panics on 0
        self.data.chunks_exact(self.size.max(1))
    }

    pub fn lines_mut(&mut self) -> impl Iterator<Item = &mut [Complex64]> {
        self.data.chunks_exact_mut(self.size.max(1))
    }

    #[inline(always)]
    pub fn at(&self, x: usize, y: usize) -> Complex64 {
        self.data[x * self.size + y]
    }

    #[inline(always)]
    pub fn at_mut(&mut self, x: usize, y: usize) -> &mut Complex64 {
        &mut self.data[x * self.size + y]
    }

    /// Swaps line and position addressing: `res.at(x, y) == self.at(y, x)`.
    pub fn transpose(&self) -> Self {
        let size: usize = self.size;
        let mut res: SampleGrid = SampleGrid::new(size);
        for x in 0..size {
            for y in 0..size {
                *res.at_mut(x, y) = self.at(y, x);
            }
        }
        res
    }

    pub fn map<F: FnMut(Complex64) -> Complex64>(&self, f: F) -> Self {
        Self {
            size: self.size,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Largest `|F|` over the grid, 0 for an empty grid.
    pub fn max_magnitude(&self) -> f64 {
        self.data.iter().map(|c| c.norm()).fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(size: usize) -> SampleGrid {
        let mut grid: SampleGrid = SampleGrid::new(size);
        for x in 0..size {
            for y in 0..size {
                *grid.at_mut(x, y) = Complex64::new((x * size + y) as f64, -(y as f64));
            }
        }
        grid
    }

    #[test]
    fn transpose_swaps_axes() {
        let grid: SampleGrid = ramp(4);
        let t: SampleGrid = grid.transpose();
        for x in 0..4 {
            for y in 0..4 {
                assert_eq!(t.at(x, y), grid.at(y, x));
            }
        }
        assert_eq!(t.transpose(), grid);
    }

    #[test]
    fn lines_are_contiguous() {
        let grid: SampleGrid = ramp(4);
        assert_eq!(grid.line(2)[3], grid.at(2, 3));
        assert_eq!(grid.lines().count(), 4);
    }

    #[test]
    fn from_lines_roundtrips_layout() {
        let grid: SampleGrid = ramp(2);
        let lines: Vec<Vec<Complex64>> = grid.lines().map(|l| l.to_vec()).collect();
        assert_eq!(SampleGrid::from_lines(lines), grid);
    }

    #[test]
    #[should_panic]
    fn from_lines_rejects_ragged() {
        SampleGrid::from_lines(vec![vec![Complex64::new(0.0, 0.0); 2], vec![Complex64::new(0.0, 0.0); 1]]);
    }

    #[test]
    fn max_magnitude_of_empty_is_zero() {
        assert_eq!(SampleGrid::new(0).max_magnitude(), 0.0);
        assert_eq!(SampleGrid::new(0).lines().count(), 0);
        let mut grid: SampleGrid = SampleGrid::new(2);
        *grid.at_mut(1, 0) = Complex64::new(3.0, 4.0);
        assert_eq!(grid.max_magnitude(), 5.0);
    }
}
