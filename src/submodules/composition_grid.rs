use ndarray::Array1;

use super::type_lib::NumericData;

/// One composition to calculate, with its 1-based report index. C and N are
/// swept at the same mass percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub index: usize,
    pub cr: NumericData,
    pub co: NumericData,
    pub c_n: NumericData,
}

/// The 3-D composition grid of a sweep: level vectors for Cr, Co and the
/// shared C/N percentage, enumerated as a full cross product.
pub struct CompositionGrid {
    pub cr_levels: Vec<NumericData>,
    pub co_levels: Vec<NumericData>,
    pub c_n_levels: Vec<NumericData>,
}

impl CompositionGrid {
    pub fn new_equally_spaced(
        cr_range: (NumericData, NumericData, usize),
        co_range: (NumericData, NumericData, usize),
        c_n_range: (NumericData, NumericData, usize),
    ) -> Self {
        CompositionGrid {
            cr_levels: Array1::linspace(cr_range.0, cr_range.1, cr_range.2).to_vec(),
            co_levels: Array1::linspace(co_range.0, co_range.1, co_range.2).to_vec(),
            c_n_levels: Array1::linspace(c_n_range.0, c_n_range.1, c_n_range.2).to_vec(),
        }
    }

    /// The grid swept by the Fe-Cr-Co-C-N study: Cr 10-14.5 wt% in 19 levels,
    /// Co 0-5 wt% in 11 levels, C/N 0.15-0.4 wt% in 6 levels, 1254 points.
    pub fn fe_cr_co_c_n() -> Self {
        CompositionGrid::new_equally_spaced((10.0, 14.5, 19), (0.0, 5.0, 11), (0.15, 0.4, 6))
    }

    pub fn len(&self) -> usize {
        self.cr_levels.len() * self.co_levels.len() * self.c_n_levels.len()
    }

    /// Cross product in Cr-major order, indices starting at 1.
    pub fn points(&self) -> Vec<GridPoint> {
        let mut points = Vec::with_capacity(self.len());
        let mut index = 1;
        for &cr in self.cr_levels.iter() {
            for &co in self.co_levels.iter() {
                for &c_n in self.c_n_levels.iter() {
                    points.push(GridPoint { index, cr, co, c_n });
                    index += 1;
                }
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_study_grid_has_1254_points() {
        let grid = CompositionGrid::fe_cr_co_c_n();
        assert_eq!(grid.len(), 19 * 11 * 6);
        assert_eq!(grid.points().len(), 1254);
    }

    #[test]
    fn indices_increase_monotonically_from_one() {
        let grid = CompositionGrid::new_equally_spaced((10.0, 14.0, 3), (0.0, 5.0, 2), (0.15, 0.4, 2));
        let points = grid.points();
        assert_eq!(points.len(), 12);
        for (offset, point) in points.iter().enumerate() {
            assert_eq!(point.index, offset + 1);
        }
    }

    #[test]
    fn cross_product_varies_c_n_fastest() {
        let grid = CompositionGrid::new_equally_spaced((10.0, 14.0, 2), (0.0, 5.0, 2), (0.15, 0.4, 2));
        let points = grid.points();
        assert_eq!((points[0].cr, points[0].co, points[0].c_n), (10.0, 0.0, 0.15));
        assert_eq!((points[1].cr, points[1].co, points[1].c_n), (10.0, 0.0, 0.4));
        assert_eq!((points[2].cr, points[2].co, points[2].c_n), (10.0, 5.0, 0.15));
        assert_eq!((points[7].cr, points[7].co, points[7].c_n), (14.0, 5.0, 0.4));
    }
}
