//! Use-Case-Funktionen für die Objekt-Historie.

use crate::app::AppState;
use crate::core::{Board, ObjectId};
use crate::shared::Language;

/// Löscht einen Eintrag samt Konstruktionspunkten von der Fläche.
///
/// Unbekannte IDs werden trotzdem an die Fläche weitergereicht, die sie
/// ignoriert. Gelöschte Punkte verschwinden auch aus einem laufenden
/// Auswahlpuffer.
pub fn delete_entry(state: &mut AppState, board: &mut dyn Board, id: ObjectId) {
    let mut doomed = vec![id];
    match state.history.remove(id) {
        Some(entry) => {
            doomed.extend_from_slice(entry.kind.constituent_point_ids());
            log::info!("Historien-Eintrag gelöscht: {} ({})", entry.name, id);
        }
        None => log::warn!("Historien-Eintrag {} nicht gefunden", id),
    }

    board.remove_objects(&doomed);
    state.construction.forget_points(&doomed);
}

/// Setzt oder entfernt die Hervorhebung eines Objekts.
pub fn highlight_entry(board: &mut dyn Board, id: ObjectId, highlighted: bool) {
    board.set_highlight(id, highlighted);
}

/// Merkt sich den Eintrag unter dem Mauszeiger.
pub fn set_hovered_entry(state: &mut AppState, id: Option<ObjectId>) {
    state.ui.hovered_entry = id;
}

/// Wechselt die Sprache und beschriftet alle Einträge neu.
pub fn set_language(state: &mut AppState, language: Language) {
    if state.ui.language == language {
        return;
    }
    state.ui.language = language;
    state.history.relabel(language);
    log::info!("Sprache gewechselt: {}", language);
}
