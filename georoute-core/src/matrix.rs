//! Normalised travel time and distance matrices.

use serde_json::Value;

/// Pairwise travel times and distances between two point sets.
///
/// `durations[i][j]` is the travel time from source `i` to destination `j`.
/// Cells are `None` when the provider reports no route. A grid the provider
/// did not return is a single empty row, never an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Travel times indexed source by destination.
    pub durations: Vec<Vec<Option<f64>>>,
    /// Travel distances indexed source by destination.
    pub distances: Vec<Vec<Option<f64>>>,
    /// The full provider response.
    pub raw: Value,
}

impl Matrix {
    /// Build a matrix, substituting a single empty row for absent grids.
    ///
    /// # Examples
    ///
    /// ```
    /// use georoute_core::Matrix;
    /// use serde_json::json;
    ///
    /// let matrix = Matrix::from_grids(Some(vec![vec![Some(0.0)]]), None, json!({}));
    /// assert_eq!(matrix.durations, vec![vec![Some(0.0)]]);
    /// assert_eq!(matrix.distances, vec![Vec::<Option<f64>>::new()]);
    /// ```
    #[must_use]
    pub fn from_grids(
        durations: Option<Vec<Vec<Option<f64>>>>,
        distances: Option<Vec<Vec<Option<f64>>>>,
        raw: Value,
    ) -> Self {
        Self {
            durations: durations.unwrap_or_else(empty_grid),
            distances: distances.unwrap_or_else(empty_grid),
            raw,
        }
    }
}

fn empty_grid() -> Vec<Vec<Option<f64>>> {
    vec![Vec::new()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn absent_grids_become_one_empty_row() {
        let matrix = Matrix::from_grids(None, None, json!({}));
        assert_eq!(matrix.durations.len(), 1);
        assert!(matrix.durations.iter().all(Vec::is_empty));
        assert_eq!(matrix.distances.len(), 1);
        assert!(matrix.distances.iter().all(Vec::is_empty));
    }

    #[rstest]
    fn present_grids_are_kept() {
        let grid = vec![vec![Some(0.0), None], vec![Some(3.5), Some(0.0)]];
        let matrix = Matrix::from_grids(Some(grid.clone()), Some(grid.clone()), json!({}));
        assert_eq!(matrix.durations, grid);
        assert_eq!(matrix.distances, grid);
    }
}
