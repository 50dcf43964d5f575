//! Use-Case-Funktionen für Punkt-, Linien- und Kreiskonstruktion.

use crate::app::construction::ConstructionStep;
use crate::app::history::{EntryKind, HistoryEntry};
use crate::app::AppState;
use crate::core::{Board, ObjectId};
use glam::DVec2;

use super::view;

pub fn enter_point_mode(state: &mut AppState) {
    state.construction.enter_point_mode();
}

pub fn enter_line_mode(state: &mut AppState) {
    state.construction.enter_line_mode();
}

pub fn enter_circle_mode(state: &mut AppState) {
    state.construction.enter_circle_mode();
}

/// Erzeugt einen Punkt an `world_pos` und übergibt ihn an den Konstruktionsmodus.
///
/// Im Leerlauf passiert nichts. Erreicht der Modus seine Stelligkeit, wird
/// das zusammengesetzte Objekt auf der Fläche erzeugt und in die Historie
/// eingetragen.
pub fn place_point(state: &mut AppState, board: &mut dyn Board, world_pos: DVec2) {
    if !state.construction.allows_point_placement() {
        log::debug!("Klick bei {:?} ignoriert: kein Konstruktionsmodus aktiv", world_pos);
        return;
    }

    let point = board.create_point(world_pos, state.active_color);
    let step = state.construction.handle_point_placed(point);
    commit_step(state, board, step);
}

fn commit_step(state: &mut AppState, board: &mut dyn Board, step: ConstructionStep) {
    let color = state.active_color;
    let committed = match step {
        ConstructionStep::Ignored => None,
        ConstructionStep::Buffered {
            collected,
            required,
        } => {
            log::debug!("Konstruktionspunkt {}/{} gepuffert", collected, required);
            None
        }
        ConstructionStep::PointCommitted(point) => Some((
            point.id,
            EntryKind::Point {
                position: point.position,
            },
        )),
        ConstructionStep::LineReady(points) => match board.create_line(&points, color) {
            Ok(line) => Some((
                line.id,
                EntryKind::Line {
                    point_ids: line.point_ids,
                },
            )),
            Err(e) => {
                log::warn!("Linie konnte nicht erzeugt werden: {}", e);
                None
            }
        },
        ConstructionStep::CircleReady(points) => match board.create_circumcircle(&points, color)
        {
            Ok(circle) => Some((
                circle.id,
                EntryKind::Circle {
                    point_ids: circle.point_ids,
                },
            )),
            Err(e) => {
                log::warn!("Kreis konnte nicht erzeugt werden: {}", e);
                None
            }
        },
    };

    if let Some((id, kind)) = committed {
        append_entry(state, id, kind);
    }
}

fn append_entry(state: &mut AppState, id: ObjectId, kind: EntryKind) {
    let entry = HistoryEntry::new(id, kind, state.active_color, state.ui.language);
    log::info!("Objekt erzeugt: {} ({})", entry.name, id);
    state.history.push(entry);
}

/// Leert Fläche, Historie, Modus und Eingabefeld.
///
/// Die Achsen-Skalierung bleibt erhalten und wird auf die frische Fläche
/// angewendet.
pub fn clear_board(state: &mut AppState, board: &mut dyn Board) {
    board.reset_surface();
    state.construction.reset();
    state.history.clear();
    state.ui.expression_input.clear();
    state.ui.hovered_entry = None;
    view::apply_scale(state, board);
    log::info!("Zeichenfläche geleert");
}
