//! Use-Case-Funktionen für Achsen-Skalierung, Flächengröße und Navigation.

use crate::app::AppState;
use crate::core::{snap_scale, Board};
use glam::DVec2;

/// Setzt die X-Skalierung (geklemmt und eingerastet) und wendet sie an.
pub fn set_x_scale(state: &mut AppState, board: &mut dyn Board, value: f64) {
    state.view.scale.x = snap(state, value);
    apply_scale(state, board);
}

/// Setzt die Y-Skalierung (geklemmt und eingerastet) und wendet sie an.
pub fn set_y_scale(state: &mut AppState, board: &mut dyn Board, value: f64) {
    state.view.scale.y = snap(state, value);
    apply_scale(state, board);
}

/// Setzt beide Achsen auf 1.0 zurück.
pub fn reset_scale(state: &mut AppState, board: &mut dyn Board) {
    state.view.scale = Default::default();
    apply_scale(state, board);
}

fn snap(state: &AppState, value: f64) -> f64 {
    let opts = &state.options;
    snap_scale(value, opts.scale_min, opts.scale_max, opts.scale_step)
}

/// Berechnet das Fenster um das aktuelle Zentrum aus der Skalierung neu.
pub fn apply_scale(state: &AppState, board: &mut dyn Board) {
    let window = state.view.scale.apply(
        &board.view_window(),
        state.view.base_x_radius,
        state.options.base_y_radius,
    );
    board.set_view_window(window);
}

/// Übernimmt eine neue Flächengröße.
///
/// Höhe 0 (Fläche noch nicht gelayoutet) lässt das Fenster unverändert.
pub fn resize_surface(state: &mut AppState, board: &mut dyn Board, size: [f32; 2]) {
    let [width, height] = size;
    board.resize_surface(width, height);
    state.view.surface_size = size;

    if height <= 0.0 || width <= 0.0 {
        log::debug!("Flächengröße {:?} ignoriert", size);
        return;
    }
    let aspect = f64::from(width) / f64::from(height);
    state.view.base_x_radius = state.options.base_y_radius * aspect;
    apply_scale(state, board);
}

/// Verschiebt den Inhalt um `delta_world` (das Fenster wandert entgegengesetzt).
pub fn pan(board: &mut dyn Board, delta_world: DVec2) {
    let window = board.view_window().translated(-delta_world);
    board.set_view_window(window);
}

/// Zoomt um `factor` (>1 = hinein), `focus_world` bleibt ortsfest.
pub fn zoom_towards(board: &mut dyn Board, factor: f64, focus_world: DVec2) {
    let window = board.view_window().zoomed(factor, focus_world);
    board.set_view_window(window);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{SketchBoard, ViewWindow};
    use approx::assert_relative_eq;

    fn resized(width: f32, height: f32) -> (AppState, SketchBoard) {
        let mut state = AppState::new();
        let mut board = SketchBoard::new();
        resize_surface(&mut state, &mut board, [width, height]);
        (state, board)
    }

    #[test]
    fn scale_is_clamped_and_snapped() {
        let (mut state, mut board) = resized(400.0, 400.0);

        set_x_scale(&mut state, &mut board, 7.3);
        assert_eq!(state.view.scale.x, 5.0);

        set_y_scale(&mut state, &mut board, 0.04);
        assert_eq!(state.view.scale.y, 0.2);

        set_x_scale(&mut state, &mut board, 1.26);
        assert_relative_eq!(state.view.scale.x, 1.3);
    }

    #[test]
    fn scale_keeps_center_and_divides_radius() {
        let (mut state, mut board) = resized(800.0, 400.0);
        pan(&mut board, DVec2::new(-3.0, 1.0));

        set_x_scale(&mut state, &mut board, 2.0);

        let window = board.view_window();
        assert_relative_eq!(window.center().x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(window.center().y, -1.0, epsilon = 1e-12);
        assert_relative_eq!(window.width(), 20.0, epsilon = 1e-12);
        assert_relative_eq!(window.height(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn reset_restores_unit_scale() {
        let (mut state, mut board) = resized(400.0, 400.0);
        set_x_scale(&mut state, &mut board, 3.0);
        set_y_scale(&mut state, &mut board, 0.5);

        reset_scale(&mut state, &mut board);

        assert_eq!(state.view.scale.x, 1.0);
        assert_eq!(state.view.scale.y, 1.0);
        assert_relative_eq!(board.view_window().height(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn resize_follows_aspect_ratio() {
        let (state, board) = resized(1000.0, 500.0);
        assert_relative_eq!(state.view.base_x_radius, 20.0);
        assert_eq!(board.view_window(), ViewWindow::initial(2.0));
    }

    #[test]
    fn zero_height_resize_leaves_window_unchanged() {
        let (mut state, mut board) = resized(600.0, 300.0);
        let before = board.view_window();

        resize_surface(&mut state, &mut board, [600.0, 0.0]);

        assert_eq!(board.view_window(), before);
        assert_relative_eq!(state.view.base_x_radius, 20.0);
    }

    #[test]
    fn zoom_keeps_focus_fixed() {
        let (_, mut board) = resized(400.0, 400.0);
        let focus = DVec2::new(5.0, 5.0);

        zoom_towards(&mut board, 1.25, focus);

        let window = board.view_window();
        assert_relative_eq!(window.width(), 16.0, epsilon = 1e-12);
        assert_relative_eq!(window.right, 5.0 + 5.0 / 1.25, epsilon = 1e-12);
    }
}
