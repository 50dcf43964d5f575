//! Handler für den Funktionsplotter.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Board;

pub fn set_expression_input(state: &mut AppState, text: String) {
    use_cases::plotter::set_expression_input(state, text);
}

/// Plottet die Eingabe oder setzt die Fehlermeldung.
pub fn plot_function(state: &mut AppState, board: &mut dyn Board, input: &str) {
    use_cases::plotter::plot_function(state, board, input);
}

pub fn dismiss_alert(state: &mut AppState) {
    use_cases::plotter::dismiss_alert(state);
}
