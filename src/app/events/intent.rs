use crate::core::{Color, ObjectId};
use crate::shared::Language;
use glam::DVec2;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Klick (ohne Drag) auf die Zeichenfläche, in Benutzerkoordinaten
    CanvasClicked { world_pos: DVec2 },
    /// Zeichenfläche per Drag verschieben (Delta in Benutzerkoordinaten)
    CanvasPanned { delta_world: DVec2 },
    /// Mausrad über der Zeichenfläche (positive Rasten = hineinzoomen)
    CanvasZoomed { steps: f32, focus_world: DVec2 },
    /// Größe der Zeichenfläche hat sich geändert
    ViewportResized { size: [f32; 2] },

    /// "Punkt erstellen" gewählt
    PointModeRequested,
    /// "Linie zeichnen" gewählt
    LineModeRequested,
    /// "Kreis zeichnen" gewählt
    CircleModeRequested,
    /// "Fläche leeren" gewählt
    ClearBoardRequested,

    /// Farbe im Stil-Panel gewählt
    ColorSelected { color: Color },

    /// Text im Funktionsplotter geändert
    ExpressionEdited { text: String },
    /// Funktionsplotter abgeschickt (Enter oder Button)
    PlotRequested,
    /// Fehlermeldung bestätigt
    AlertDismissed,

    /// X-Slider bewegt
    XScaleChanged { value: f64 },
    /// Y-Slider bewegt
    YScaleChanged { value: f64 },
    /// Skalierung zurücksetzen
    ScaleResetRequested,

    /// Mauszeiger über einem Historien-Eintrag (None = keiner)
    HistoryEntryHovered { id: Option<ObjectId> },
    /// Historien-Eintrag löschen
    HistoryEntryDeleteRequested { id: ObjectId },

    /// Sprache gewechselt
    LanguageSelected { language: Language },
}
