//! Konstruktionsmodus: Zustandsautomat für Punkt-, Linien- und Kreiserstellung.
//!
//! Der Automat ruft selbst keine Zeichenfläche auf. `handle_point_placed`
//! liefert einen reinen [`ConstructionStep`], den der Use-Case umsetzt.

use crate::core::{ObjectId, PointHandle};
use crate::shared::Message;

/// Benötigte Punkte für eine Linie.
pub const LINE_ARITY: usize = 2;
/// Benötigte Punkte für einen Umkreis.
pub const CIRCLE_ARITY: usize = 3;

/// Aktiver Konstruktionsmodus inkl. Auswahlpuffer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConstructionMode {
    /// Keine Aktion aktiv, Klicks auf die Fläche werden ignoriert
    #[default]
    Idle,
    /// Nächster Klick erzeugt einen freien Punkt
    PlacingPoint,
    /// Sammelt Punkte für eine Linie
    BuildingLine { buffer: Vec<PointHandle> },
    /// Sammelt Punkte für einen Umkreis
    BuildingCircle { buffer: Vec<PointHandle> },
}

impl ConstructionMode {
    /// Anzeigename für Logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Leerlauf",
            Self::PlacingPoint => "Punkt",
            Self::BuildingLine { .. } => "Linie",
            Self::BuildingCircle { .. } => "Kreis",
        }
    }
}

/// Ergebnis eines platzierten Punkts.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstructionStep {
    /// Kein Modus aktiv
    Ignored,
    /// Freier Punkt fertig
    PointCommitted(PointHandle),
    /// Punkt gepuffert, Konstruktion noch unvollständig
    Buffered { collected: usize, required: usize },
    /// Zwei Punkte gesammelt, Linie kann erzeugt werden
    LineReady([PointHandle; 2]),
    /// Drei Punkte gesammelt, Umkreis kann erzeugt werden
    CircleReady([PointHandle; 3]),
}

/// Zustand des Konstruktions-Controllers.
#[derive(Debug, Clone, Default)]
pub struct ConstructionState {
    mode: ConstructionMode,
}

impl ConstructionState {
    /// Erstellt einen Controller im Leerlauf.
    pub fn new() -> Self {
        Self {
            mode: ConstructionMode::Idle,
        }
    }

    pub fn mode(&self) -> &ConstructionMode {
        &self.mode
    }

    /// Aktuell gepufferte Punkte (leer außerhalb von Linie/Kreis).
    pub fn buffer(&self) -> &[PointHandle] {
        match &self.mode {
            ConstructionMode::BuildingLine { buffer }
            | ConstructionMode::BuildingCircle { buffer } => buffer,
            ConstructionMode::Idle | ConstructionMode::PlacingPoint => &[],
        }
    }

    pub fn enter_point_mode(&mut self) {
        self.switch(ConstructionMode::PlacingPoint);
    }

    pub fn enter_line_mode(&mut self) {
        self.switch(ConstructionMode::BuildingLine {
            buffer: Vec::with_capacity(LINE_ARITY),
        });
    }

    pub fn enter_circle_mode(&mut self) {
        self.switch(ConstructionMode::BuildingCircle {
            buffer: Vec::with_capacity(CIRCLE_ARITY),
        });
    }

    /// Zurück in den Leerlauf, alle Puffer leer.
    pub fn reset(&mut self) {
        self.mode = ConstructionMode::Idle;
    }

    fn switch(&mut self, mode: ConstructionMode) {
        log::info!("Konstruktionsmodus: {} → {}", self.mode.name(), mode.name());
        self.mode = mode;
    }

    /// Ob ein Klick auf die Fläche einen Punkt erzeugen soll.
    pub fn allows_point_placement(&self) -> bool {
        !matches!(self.mode, ConstructionMode::Idle)
    }

    /// Verarbeitet einen gerade erzeugten Punkt.
    ///
    /// Bei erreichter Stelligkeit wird der Puffer geleert und der Controller
    /// kehrt in den Leerlauf zurück, bevor der Schritt zurückgegeben wird.
    pub fn handle_point_placed(&mut self, point: PointHandle) -> ConstructionStep {
        let step = match &mut self.mode {
            ConstructionMode::Idle => return ConstructionStep::Ignored,
            ConstructionMode::PlacingPoint => ConstructionStep::PointCommitted(point),
            ConstructionMode::BuildingLine { buffer } => {
                buffer.push(point);
                match <[PointHandle; LINE_ARITY]>::try_from(buffer.as_slice()) {
                    Ok(points) => ConstructionStep::LineReady(points),
                    Err(_) => ConstructionStep::Buffered {
                        collected: buffer.len(),
                        required: LINE_ARITY,
                    },
                }
            }
            ConstructionMode::BuildingCircle { buffer } => {
                buffer.push(point);
                match <[PointHandle; CIRCLE_ARITY]>::try_from(buffer.as_slice()) {
                    Ok(points) => ConstructionStep::CircleReady(points),
                    Err(_) => ConstructionStep::Buffered {
                        collected: buffer.len(),
                        required: CIRCLE_ARITY,
                    },
                }
            }
        };

        if !matches!(step, ConstructionStep::Buffered { .. }) {
            self.mode = ConstructionMode::Idle;
        }
        step
    }

    /// Entfernt gelöschte Punkte aus dem aktiven Puffer. Der Modus bleibt.
    pub fn forget_points(&mut self, ids: &[ObjectId]) {
        if let ConstructionMode::BuildingLine { buffer }
        | ConstructionMode::BuildingCircle { buffer } = &mut self.mode
        {
            let before = buffer.len();
            buffer.retain(|p| !ids.contains(&p.id));
            if buffer.len() != before {
                log::debug!(
                    "{} gelöschte Punkte aus dem Auswahlpuffer entfernt",
                    before - buffer.len()
                );
            }
        }
    }

    /// Eingabeaufforderung für den aktuellen Modus.
    pub fn prompt(&self) -> Message<'static> {
        match &self.mode {
            ConstructionMode::Idle => Message::PromptDefault,
            ConstructionMode::PlacingPoint => Message::PromptCreatePoint,
            ConstructionMode::BuildingLine { buffer } => {
                Message::PromptSelectLinePoint(buffer.len() + 1)
            }
            ConstructionMode::BuildingCircle { buffer } => {
                Message::PromptSelectCirclePoint(buffer.len() + 1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec2;

    fn point(id: u64) -> PointHandle {
        PointHandle {
            id: ObjectId(id),
            position: DVec2::new(id as f64, 0.0),
        }
    }

    #[test]
    fn idle_ignores_points_and_disallows_placement() {
        let mut state = ConstructionState::new();
        assert!(!state.allows_point_placement());
        assert_eq!(state.handle_point_placed(point(1)), ConstructionStep::Ignored);
        assert_eq!(state.prompt(), Message::PromptDefault);
    }

    #[test]
    fn point_mode_commits_once_and_returns_to_idle() {
        let mut state = ConstructionState::new();
        state.enter_point_mode();
        assert!(state.allows_point_placement());
        assert_eq!(state.prompt(), Message::PromptCreatePoint);

        assert_eq!(
            state.handle_point_placed(point(1)),
            ConstructionStep::PointCommitted(point(1))
        );
        assert_eq!(state.mode(), &ConstructionMode::Idle);
    }

    #[test]
    fn line_mode_collects_two_points() {
        let mut state = ConstructionState::new();
        state.enter_line_mode();
        assert_eq!(state.prompt(), Message::PromptSelectLinePoint(1));

        assert_eq!(
            state.handle_point_placed(point(1)),
            ConstructionStep::Buffered {
                collected: 1,
                required: 2
            }
        );
        assert_eq!(state.prompt(), Message::PromptSelectLinePoint(2));

        assert_eq!(
            state.handle_point_placed(point(2)),
            ConstructionStep::LineReady([point(1), point(2)])
        );
        assert_eq!(state.mode(), &ConstructionMode::Idle);
        assert!(state.buffer().is_empty());
    }

    #[test]
    fn circle_mode_collects_three_points_in_order() {
        let mut state = ConstructionState::new();
        state.enter_circle_mode();
        state.handle_point_placed(point(1));
        state.handle_point_placed(point(2));
        assert_eq!(state.prompt(), Message::PromptSelectCirclePoint(3));

        assert_eq!(
            state.handle_point_placed(point(3)),
            ConstructionStep::CircleReady([point(1), point(2), point(3)])
        );
        assert_eq!(state.prompt(), Message::PromptDefault);
    }

    #[test]
    fn switching_modes_discards_the_buffer() {
        let mut state = ConstructionState::new();
        state.enter_circle_mode();
        state.handle_point_placed(point(1));
        state.handle_point_placed(point(2));

        state.enter_line_mode();
        assert!(state.buffer().is_empty());
        assert_eq!(state.prompt(), Message::PromptSelectLinePoint(1));

        state.enter_line_mode();
        assert!(state.buffer().is_empty());
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut state = ConstructionState::new();
        state.enter_line_mode();
        state.handle_point_placed(point(1));
        state.reset();
        assert_eq!(state.mode(), &ConstructionMode::Idle);
        assert!(!state.allows_point_placement());
    }

    #[test]
    fn forgetting_a_buffered_point_keeps_the_mode() {
        let mut state = ConstructionState::new();
        state.enter_line_mode();
        state.handle_point_placed(point(7));

        state.forget_points(&[ObjectId(7)]);

        assert!(matches!(state.mode(), ConstructionMode::BuildingLine { .. }));
        assert!(state.buffer().is_empty());
        assert_eq!(state.prompt(), Message::PromptSelectLinePoint(1));
    }

    #[test]
    fn forgetting_unrelated_points_changes_nothing() {
        let mut state = ConstructionState::new();
        state.enter_circle_mode();
        state.handle_point_placed(point(1));
        state.forget_points(&[ObjectId(99)]);
        assert_eq!(state.buffer(), &[point(1)]);
    }
}
