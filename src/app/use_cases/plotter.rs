//! Use-Case-Funktionen für den Funktionsplotter.

use crate::app::history::{EntryKind, HistoryEntry};
use crate::app::AppState;
use crate::core::{normalize_expression, Board};
use crate::shared::Message;

/// Aktualisiert den Inhalt des Eingabefelds.
pub fn set_expression_input(state: &mut AppState, text: String) {
    state.ui.expression_input = text;
}

/// Normalisiert `input` und lässt die Fläche den Graphen erzeugen.
///
/// Leere Eingaben sind ein No-op. Lehnt die Fläche den Ausdruck ab, wird
/// nur die Fehlermeldung gesetzt; Historie und Eingabefeld bleiben
/// unverändert.
pub fn plot_function(state: &mut AppState, board: &mut dyn Board, input: &str) {
    let Some(normalized) = normalize_expression(input) else {
        return;
    };

    match board.create_function_graph(&normalized, state.active_color) {
        Ok(graph) => {
            let entry = HistoryEntry::new(
                graph.id,
                EntryKind::Function {
                    input: input.trim().to_string(),
                    normalized,
                },
                state.active_color,
                state.ui.language,
            );
            log::info!("Funktion geplottet: {} ({})", entry.name, graph.id);
            state.history.push(entry);
            state.ui.expression_input.clear();
        }
        Err(e) => {
            log::warn!("Funktion nicht plottbar: {}", e);
            state.ui.alert = Some(state.text(Message::PlotterErrorAlert {
                input,
                normalized: &normalized,
            }));
        }
    }
}

/// Schließt die Fehlermeldung.
pub fn dismiss_alert(state: &mut AppState) {
    state.ui.alert = None;
}
