//! Handler für Achsen-Skalierung, Flächengröße und Navigation.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Board;
use glam::DVec2;

pub fn set_x_scale(state: &mut AppState, board: &mut dyn Board, value: f64) {
    use_cases::view::set_x_scale(state, board, value);
}

pub fn set_y_scale(state: &mut AppState, board: &mut dyn Board, value: f64) {
    use_cases::view::set_y_scale(state, board, value);
}

/// Setzt beide Achsen auf 1.0 zurück.
pub fn reset_scale(state: &mut AppState, board: &mut dyn Board) {
    use_cases::view::reset_scale(state, board);
}

/// Aktualisiert die Flächengröße und das Fenster.
pub fn resize_surface(state: &mut AppState, board: &mut dyn Board, size: [f32; 2]) {
    use_cases::view::resize_surface(state, board, size);
}

/// Verschiebt den Inhalt um ein Delta in Benutzerkoordinaten.
pub fn pan(board: &mut dyn Board, delta_world: DVec2) {
    use_cases::view::pan(board, delta_world);
}

/// Zoomt um einen Fokuspunkt.
pub fn zoom_towards(board: &mut dyn Board, factor: f64, focus_world: DVec2) {
    use_cases::view::zoom_towards(board, factor, focus_world);
}
