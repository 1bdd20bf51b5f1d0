use life_grid::{Simulation, input, rendering, ui};
use macroquad::prelude::*;

// Reference board size; the window is sized to fit it plus the panel.
const GRID_ROWS: usize = 50;
const GRID_COLS: usize = 50;

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: (GRID_COLS as f32 * ui::CELL_SIZE + ui::PANEL_WIDTH) as i32,
        window_height: (GRID_ROWS as f32 * ui::CELL_SIZE) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut sim = Simulation::new(GRID_ROWS, GRID_COLS);

    loop {
        let mouse_pos = mouse_position();

        // Button labels depend on the running flag, so rebuild per frame
        let buttons = ui::create_buttons(sim.is_running);

        // Edits land between ticks: all input is handled before the
        // simulation advances this frame
        sim = input::process_button_clicks(sim, &buttons, mouse_pos);
        sim = input::handle_mouse_toggle(sim, mouse_pos);
        sim = input::process_keyboard_input(sim);

        sim = sim.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_grid(&sim.grid);
        rendering::draw_controls(&sim, &buttons, mouse_pos);

        next_frame().await;
    }
}
