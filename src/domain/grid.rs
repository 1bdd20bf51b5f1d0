use super::Cell;
use rayon::prelude::*;

/// The Moore neighborhood: the 8 (Δrow, Δcol) offsets surrounding a cell,
/// excluding the cell itself.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Grid manages the 2D cellular automaton board.
/// Uses functional, immutable updates: every step or edit returns a new
/// grid and leaves the receiver untouched, so a retained reference always
/// sees one consistent generation.
#[derive(Clone, PartialEq, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Create a grid where each cell is independently alive with
    /// probability 0.5
    pub fn random(rows: usize, cols: usize) -> Self {
        use rand::Rng;
        let mut rng = rand::rng();

        let mut grid = Self::new(rows, cols);
        grid.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.5) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
        grid
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to the flat index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.cells[self.index(row, col)])
    }

    /// Return a new grid identical to this one except the cell at
    /// (row, col) is flipped.
    ///
    /// # Panics
    /// Panics if (row, col) is outside the grid. Callers derive
    /// coordinates from `dimensions`, so an out-of-range toggle is a bug
    /// in the caller, not a runtime condition to recover from.
    pub fn toggle(&self, row: usize, col: usize) -> Self {
        assert!(
            row < self.rows && col < self.cols,
            "toggle out of range: ({row}, {col}) on a {}x{} grid",
            self.rows,
            self.cols
        );

        let mut next = self.clone();
        let idx = self.index(row, col);
        next.cells[idx] = next.cells[idx].toggle();
        next
    }

    /// Count live neighbors at (row, col). Offsets that land outside the
    /// board are skipped: edges are hard boundaries, not a torus, and
    /// off-grid cells contribute nothing.
    fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dr, dc)| (row as i32 + dr, col as i32 + dc))
            .filter(|&(r, c)| r >= 0 && c >= 0)
            .filter_map(|(r, c)| self.get(r as usize, c as usize))
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next generation as a wholly new grid (serial).
    /// Neighbor counts read this grid's values only, never cells already
    /// written for the new generation.
    pub fn step(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[self.index(row, col)];
                current.next_state(self.live_neighbors(row, col))
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Row-parallel version of `step` using rayon. Produces exactly the
    /// same grid; only worth it above roughly 100x100 cells.
    pub fn step_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.rows)
            .into_par_iter()
            .flat_map_iter(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[self.index(row, col)];
                current.next_state(self.live_neighbors(row, col))
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Number of live cells on the board
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.cells[self.index(row, col)]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a grid with the given cells alive and everything else dead
    fn grid_with_live(rows: usize, cols: usize, live: &[(usize, usize)]) -> Grid {
        live.iter()
            .fold(Grid::new(rows, cols), |grid, &(row, col)| {
                grid.toggle(row, col)
            })
    }

    #[test]
    fn test_new_grid_is_all_dead() {
        let grid = Grid::new(5, 4);

        assert_eq!(grid.dimensions(), (5, 4));
        assert_eq!(grid.live_count(), 0);
        assert!(grid.iter_cells().all(|(_, _, cell)| !cell.is_alive()));
    }

    #[test]
    fn test_random_grid_has_both_states() {
        // 2500 independent coin flips landing all on one side is not a
        // thing that happens.
        let grid = Grid::random(50, 50);

        assert_eq!(grid.dimensions(), (50, 50));
        assert!(grid.live_count() > 0);
        assert!(grid.live_count() < 50 * 50);
    }

    #[test]
    fn test_neighbor_offsets_cover_moore_neighborhood() {
        assert_eq!(NEIGHBOR_OFFSETS.len(), 8);
        assert!(!NEIGHBOR_OFFSETS.contains(&(0, 0)));

        let mut unique = NEIGHBOR_OFFSETS.to_vec();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn test_toggle_flips_only_the_target_cell() {
        let grid = Grid::new(4, 4);
        let edited = grid.toggle(1, 2);

        assert_eq!(edited.get(1, 2), Some(Cell::Alive));
        assert_eq!(edited.live_count(), 1);

        // The input grid is untouched
        assert_eq!(grid.get(1, 2), Some(Cell::Dead));
        assert_eq!(grid.live_count(), 0);
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let grid = Grid::random(10, 10);
        assert_eq!(grid.toggle(3, 4).toggle(3, 4), grid);
    }

    #[test]
    #[should_panic(expected = "toggle out of range")]
    fn test_toggle_out_of_range_panics() {
        let _ = Grid::new(3, 3).toggle(3, 0);
    }

    #[test]
    #[should_panic(expected = "grid dimensions must be positive")]
    fn test_new_with_zero_rows_panics() {
        let _ = Grid::new(0, 5);
    }

    #[test]
    #[should_panic(expected = "grid dimensions must be positive")]
    fn test_new_with_zero_cols_panics() {
        let _ = Grid::new(5, 0);
    }

    #[test]
    fn test_live_neighbors_counts_moore_neighborhood() {
        let grid = grid_with_live(10, 10, &[(5, 4), (5, 5), (5, 6)]);

        // Center of the blinker sees its two arms
        assert_eq!(grid.live_neighbors(5, 5), 2);
        // Cells above and below the center see all three
        assert_eq!(grid.live_neighbors(4, 5), 3);
        assert_eq!(grid.live_neighbors(6, 5), 3);
    }

    #[test]
    fn test_live_neighbors_at_corner_skips_off_grid_offsets() {
        let grid = grid_with_live(6, 6, &[(0, 1), (1, 0), (1, 1)]);

        // Only three of the corner's eight offsets exist on the board
        assert_eq!(grid.live_neighbors(0, 0), 3);
    }

    #[test]
    fn test_step_all_dead_stays_all_dead() {
        let grid = Grid::new(10, 10);
        let next = grid.step();

        assert_eq!(next.dimensions(), grid.dimensions());
        assert_eq!(next.live_count(), 0);
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let grid = grid_with_live(8, 8, &[(2, 1), (2, 2), (2, 3)]);
        let snapshot = grid.clone();

        let _ = grid.step();
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = grid_with_live(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        // One step: the three-cell row becomes a three-cell column
        let vertical = horizontal.step();
        assert_eq!(vertical.live_count(), 3);
        assert_eq!(vertical.get(1, 2), Some(Cell::Alive));
        assert_eq!(vertical.get(2, 2), Some(Cell::Alive));
        assert_eq!(vertical.get(3, 2), Some(Cell::Alive));

        // Second step: back to the original row
        assert_eq!(vertical.step(), horizontal);
    }

    #[test]
    fn test_block_is_a_still_life() {
        let block = grid_with_live(10, 10, &[(5, 5), (5, 6), (6, 5), (6, 6)]);
        assert_eq!(block.step(), block);
    }

    #[test]
    fn test_lone_corner_cell_dies() {
        let grid = grid_with_live(8, 8, &[(0, 0)]);
        assert_eq!(grid.step().live_count(), 0);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // A vertical blinker hugging column 0. Flipping it would need the
        // cell at column -1; on a torus that birth lands in the far
        // column instead. Here it must simply not happen.
        let grid = grid_with_live(5, 8, &[(1, 0), (2, 0), (3, 0)]);
        let next = grid.step();

        assert_eq!(next.get(2, 0), Some(Cell::Alive));
        assert_eq!(next.get(2, 1), Some(Cell::Alive));
        assert_eq!(next.get(2, 7), Some(Cell::Dead));
        assert_eq!(next.live_count(), 2);
    }

    #[test]
    fn test_overcrowded_cells_die() {
        // Solid 3x3 block: the center has 8 neighbors, the block's edge
        // cells have 5, its corners have 3.
        let live: Vec<(usize, usize)> = (1..=3)
            .flat_map(|row| (1..=3).map(move |col| (row, col)))
            .collect();
        let grid = grid_with_live(6, 6, &live);
        let next = grid.step();

        assert_eq!(next.get(2, 2), Some(Cell::Dead));
        assert_eq!(next.get(1, 2), Some(Cell::Dead));
        assert_eq!(next.get(1, 1), Some(Cell::Alive));
    }

    #[test]
    fn test_parallel_step_matches_serial() {
        let live: Vec<(usize, usize)> = (0..50).map(|i| (i, (i * 7) % 50)).collect();
        let patterned = grid_with_live(50, 50, &live);
        assert_eq!(patterned.step(), patterned.step_parallel());

        let random = Grid::random(64, 48);
        assert_eq!(random.step(), random.step_parallel());
    }
}
