// Domain layer - grid state and the evolution rule
pub mod domain;

// Application layer - tick scheduling and control state
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::Simulation;
pub use domain::{Cell, Grid, NEIGHBOR_OFFSETS};
pub use ui::Button;
