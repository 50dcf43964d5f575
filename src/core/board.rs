//! Befehlsschnittstelle zur Zeichenfläche (Rendering-Engine).
//!
//! Der App-Layer kennt nur diesen Trait. Die konkrete Engine
//! (`SketchBoard`) oder ein Test-Double wird pro Aufruf übergeben.

use super::{Color, FormulaError, ViewWindow};
use glam::DVec2;
use std::fmt;

/// Opake ID eines Objekts auf der Zeichenfläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj-{}", self.0)
    }
}

/// Punkt-Referenz: ID plus zwischengespeicherte Koordinaten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointHandle {
    pub id: ObjectId,
    pub position: DVec2,
}

/// Linie durch zwei Konstruktionspunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineHandle {
    pub id: ObjectId,
    pub point_ids: [ObjectId; 2],
}

/// Umkreis durch drei Konstruktionspunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CircleHandle {
    pub id: ObjectId,
    pub point_ids: [ObjectId; 3],
}

/// Funktionsgraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionHandle {
    pub id: ObjectId,
}

/// Fehler der Zeichenfläche beim Erzeugen zusammengesetzter Objekte.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoardError {
    /// Ein Konstruktionspunkt existiert nicht (mehr) auf der Fläche
    #[error("Punkt {0} existiert nicht mehr")]
    MissingPoint(ObjectId),
    /// Ausdruck wird vom Funktionsplotter nicht akzeptiert
    #[error("ungültiger Ausdruck {expression:?}: {source}")]
    InvalidExpression {
        expression: String,
        #[source]
        source: FormulaError,
    },
}

/// Schmale Befehlsschnittstelle der Rendering-Engine.
pub trait Board {
    /// Erzeugt einen freien Punkt.
    fn create_point(&mut self, position: DVec2, color: Color) -> PointHandle;

    /// Erzeugt eine Linie durch zwei existierende Punkte.
    fn create_line(
        &mut self,
        points: &[PointHandle; 2],
        color: Color,
    ) -> Result<LineHandle, BoardError>;

    /// Erzeugt den Umkreis durch drei existierende Punkte.
    fn create_circumcircle(
        &mut self,
        points: &[PointHandle; 3],
        color: Color,
    ) -> Result<CircleHandle, BoardError>;

    /// Erzeugt einen Funktionsgraphen aus einem normalisierten Ausdruck in `x`.
    fn create_function_graph(
        &mut self,
        expression: &str,
        color: Color,
    ) -> Result<FunctionHandle, BoardError>;

    /// Entfernt Objekte. Unbekannte IDs werden ignoriert.
    fn remove_objects(&mut self, ids: &[ObjectId]);

    /// Setzt oder löscht die Hervorhebung eines Objekts.
    fn set_highlight(&mut self, id: ObjectId, highlighted: bool);

    /// Aktuell sichtbares Koordinatenfenster.
    fn view_window(&self) -> ViewWindow;

    /// Setzt das sichtbare Koordinatenfenster.
    fn set_view_window(&mut self, window: ViewWindow);

    /// Passt die Zeichenfläche an eine neue Pixelgröße an.
    fn resize_surface(&mut self, width: f32, height: f32);

    /// Verwirft alle Objekte und setzt das Fenster auf den Startzustand.
    fn reset_surface(&mut self);
}
