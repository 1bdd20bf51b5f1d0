use crate::application::Simulation;
use crate::domain::Grid;
use crate::ui::{Button, CELL_SIZE, PANEL_WIDTH, panel_x};
use macroquad::prelude::*;

/// Draw the automaton grid, one rectangle per cell, from the window
/// origin. Dead cells get a faint fill so the lattice stays visible.
pub fn draw_grid(grid: &Grid) {
    let alive_color = Color::from_rgba(0, 255, 150, 255); // Bright green
    let dead_cell_color = Color::from_rgba(15, 15, 15, 255);
    let grid_line_color = Color::from_rgba(40, 40, 40, 255);

    for (row, col, cell) in grid.iter_cells() {
        let x = col as f32 * CELL_SIZE;
        let y = row as f32 * CELL_SIZE;

        let fill = if cell.is_alive() {
            alive_color
        } else {
            dead_cell_color
        };
        draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, fill);
        draw_rectangle_lines(x, y, CELL_SIZE, CELL_SIZE, 1.0, grid_line_color);
    }
}

/// Draw control panel background
fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Helper to draw text labels
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x, y, size, color);
}

/// Draw the control panel with buttons and simulation info
pub fn draw_controls(sim: &Simulation, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let px = panel_x();

    // Controls help below the buttons
    let controls = [
        ("Controls:", px, 190.0, 14.0, WHITE),
        ("Click: Toggle cell", px, 205.0, 12.0, GRAY),
        ("Space: Start/Stop", px, 218.0, 12.0, GRAY),
        ("C: Clear", px, 231.0, 12.0, GRAY),
        ("R: Random", px, 244.0, 12.0, GRAY),
        ("Up/Down: Speed", px, 257.0, 12.0, GRAY),
    ];

    controls.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });

    // Board info
    let (rows, cols) = sim.grid.dimensions();
    let info_color = Color::from_rgba(150, 150, 150, 255);
    draw_text_label(&format!("Grid: {rows}x{cols}"), px, 290.0, 12.0, info_color);
    draw_text_label(
        &format!("Alive: {}", sim.grid.live_count()),
        px,
        305.0,
        12.0,
        info_color,
    );

    // Define all labels declaratively
    let labels = [
        ("Speed:", px, 340.0, 16.0, WHITE),
        (
            &format!("{:.0} gen/s", sim.updates_per_second),
            px,
            360.0,
            14.0,
            Color::from_rgba(180, 180, 180, 255),
        ),
        ("Generation:", px, 390.0, 16.0, WHITE),
        (
            &format!("{}", sim.generation),
            px,
            410.0,
            20.0,
            Color::from_rgba(0, 255, 150, 255),
        ),
        ("Status:", px, 440.0, 16.0, WHITE),
        (
            if sim.is_running { "Running" } else { "Paused" },
            px,
            460.0,
            16.0,
            if sim.is_running {
                Color::from_rgba(0, 255, 0, 255)
            } else {
                Color::from_rgba(255, 165, 0, 255)
            },
        ),
    ];

    // Draw all labels
    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text_label(text, *x, *y, *size, *color);
    });
}
