mod button;

pub use button::Button;

// UI metrics - functions where the value depends on the window size
use macroquad::prelude::screen_width;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const CELL_SIZE: f32 = 14.0;

/// Get the X position where the control panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Create the control buttons with the standard layout.
/// The first button doubles as the start/stop indicator, so its label
/// follows the running flag.
pub fn create_buttons(is_running: bool) -> Vec<Button> {
    let px = panel_x();
    let toggle_label = if is_running { "Stop" } else { "Start" };
    vec![
        Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, toggle_label),
        Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Clear"),
        Button::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random"),
    ]
}
