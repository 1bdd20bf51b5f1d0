use crate::application::Simulation;
use crate::ui::{CELL_SIZE, grid_area_width};
use macroquad::prelude::*;

/// Map a screen position to a grid cell. Positions over the panel or
/// outside the board's row/column range map to None.
fn screen_to_cell(sim: &Simulation, mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    if mouse_pos.0 < 0.0 || mouse_pos.1 < 0.0 || mouse_pos.0 >= grid_area_width() {
        return None;
    }

    let row = (mouse_pos.1 / CELL_SIZE) as usize;
    let col = (mouse_pos.0 / CELL_SIZE) as usize;

    let (rows, cols) = sim.grid.dimensions();
    (row < rows && col < cols).then_some((row, col))
}

/// Toggle the clicked cell. One flip per click (the press edge, not the
/// held state).
pub fn handle_mouse_toggle(sim: Simulation, mouse_pos: (f32, f32)) -> Simulation {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return sim;
    }

    match screen_to_cell(&sim, mouse_pos) {
        Some((row, col)) => sim.toggle_cell(row, col),
        None => sim,
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, Simulation::randomize),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally
pub fn process_button_clicks(
    sim: Simulation,
    buttons: &[crate::ui::Button],
    mouse_pos: (f32, f32),
) -> Simulation {
    buttons.iter().enumerate().fold(sim, |s, (idx, btn)| {
        if !btn.is_clicked(mouse_pos) {
            return s;
        }
        match idx {
            0 => s.toggle_running(),
            1 => s.clear(),
            2 => s.randomize(),
            _ => s,
        }
    })
}
