use crate::domain::Grid;

/// Default tick rate: 10 generations per second, i.e. a 100ms period.
pub const DEFAULT_UPDATES_PER_SECOND: f32 = 10.0;

/// Cell count above which the row-parallel sweep beats the serial one
/// (roughly 100x100).
const PARALLEL_CELL_THRESHOLD: usize = 10_000;

/// Simulation orchestrates the tick loop around the grid.
/// This is the application layer that coordinates domain logic. The grid
/// is replaced wholesale on every change, never mutated in place.
pub struct Simulation {
    pub grid: Grid,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
}

impl Simulation {
    /// Create a stopped simulation over an all-dead grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid::new(rows, cols),
            is_running: false,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: DEFAULT_UPDATES_PER_SECOND,
        }
    }

    /// Toggle start/stop state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Reset the board to all-dead and the generation counter to zero.
    /// The running flag is left alone: only the start/stop control
    /// writes it.
    pub fn clear(mut self) -> Self {
        let (rows, cols) = self.grid.dimensions();
        self.grid = Grid::new(rows, cols);
        self.generation = 0;
        self
    }

    /// Replace the board with a fresh random one and reset the
    /// generation counter. Like `clear`, leaves the running flag alone.
    pub fn randomize(mut self) -> Self {
        let (rows, cols) = self.grid.dimensions();
        self.grid = Grid::random(rows, cols);
        self.generation = 0;
        self
    }

    /// Flip a single cell. Edits land between ticks, so the running
    /// simulation simply picks up the new value next generation.
    pub fn toggle_cell(mut self, row: usize, col: usize) -> Self {
        self.grid = self.grid.toggle(row, col);
        self
    }

    /// Adjust simulation speed in generations per second
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Advance the simulation by one frame's worth of time.
    /// The running flag is read here, at fire time: stopping never aborts
    /// a step, it only prevents the next one from being scheduled. At
    /// most one generation advances per call.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            let (rows, cols) = self.grid.dimensions();
            self.grid = if rows * cols > PARALLEL_CELL_THRESHOLD {
                self.grid.step_parallel()
            } else {
                self.grid.step()
            };
            self.generation += 1;
            self.update_timer = 0.0;
        }

        self
    }
}
