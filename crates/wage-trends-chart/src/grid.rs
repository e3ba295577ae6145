//! Fixed grid layout for chart dashboards

/// A fixed grid of chart cells, filled row by row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
}

impl Default for GridLayout {
    /// 5 x 4: room for the 15 rising and 5 falling trends of a dashboard
    fn default() -> Self {
        Self {
            columns: 5,
            rows: 4,
        }
    }
}

impl GridLayout {
    /// Create a grid
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Number of cells
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }

    /// Place items into cells in order.
    ///
    /// The result always has `capacity()` cells; items past the capacity
    /// are dropped and unused cells are `None`.
    pub fn place<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<Option<T>> {
        let mut cells: Vec<Option<T>> = items
            .into_iter()
            .take(self.capacity())
            .map(Some)
            .collect();
        cells.resize_with(self.capacity(), || None);
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_pads() {
        let grid = GridLayout::new(2, 2);
        assert_eq!(grid.place([1, 2, 3]), vec![Some(1), Some(2), Some(3), None]);
    }

    #[test]
    fn test_place_truncates() {
        let grid = GridLayout::default();
        let cells = grid.place(0..30);
        assert_eq!(cells.len(), 20);
        assert_eq!(cells[19], Some(19));
    }
}
