//! Handler für Historie und Sprache.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{Board, ObjectId};
use crate::shared::Language;

/// Löscht einen Eintrag samt Konstruktionspunkten.
pub fn delete_entry(state: &mut AppState, board: &mut dyn Board, id: ObjectId) {
    use_cases::history::delete_entry(state, board, id);
}

/// Setzt die Hervorhebung eines Objekts.
pub fn highlight_entry(board: &mut dyn Board, id: ObjectId, highlighted: bool) {
    use_cases::history::highlight_entry(board, id, highlighted);
}

pub fn set_hovered_entry(state: &mut AppState, id: Option<ObjectId>) {
    use_cases::history::set_hovered_entry(state, id);
}

/// Wechselt die Sprache und beschriftet die Historie neu.
pub fn set_language(state: &mut AppState, language: Language) {
    use_cases::history::set_language(state, language);
}
