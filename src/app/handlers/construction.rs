//! Handler für Konstruktionsmodi, Punktplatzierung und Objektfarbe.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Board, Color};
use glam::DVec2;

/// Aktiviert den Punktmodus.
pub fn enter_point_mode(state: &mut AppState) {
    use_cases::construction::enter_point_mode(state);
}

/// Aktiviert den Linienmodus.
pub fn enter_line_mode(state: &mut AppState) {
    use_cases::construction::enter_line_mode(state);
}

/// Aktiviert den Kreismodus.
pub fn enter_circle_mode(state: &mut AppState) {
    use_cases::construction::enter_circle_mode(state);
}

/// Erzeugt einen Punkt und treibt den aktiven Modus weiter.
pub fn place_point(state: &mut AppState, board: &mut dyn Board, world_pos: DVec2) {
    use_cases::construction::place_point(state, board, world_pos);
}

/// Leert Fläche und Historie.
pub fn clear_board(state: &mut AppState, board: &mut dyn Board) {
    use_cases::construction::clear_board(state, board);
}

/// Setzt die Farbe für neu erzeugte Objekte.
pub fn set_active_color(state: &mut AppState, color: Color) {
    log::info!("Objektfarbe: {}", color);
    state.active_color = color;
}
