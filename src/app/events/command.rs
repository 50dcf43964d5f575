use crate::core::{Color, ObjectId};
use crate::shared::Language;
use glam::DVec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    // ── Konstruktion ───────────────────────────────────────────
    /// Punktmodus aktivieren
    EnterPointMode,
    /// Linienmodus aktivieren (Puffer leer)
    EnterLineMode,
    /// Kreismodus aktivieren (Puffer leer)
    EnterCircleMode,
    /// Punkt an Benutzerkoordinate erzeugen und an den Modus übergeben
    PlacePoint { world_pos: DVec2 },
    /// Fläche, Historie und Modus zurücksetzen
    ClearBoard,

    /// Farbe für neue Objekte setzen
    SetActiveColor { color: Color },

    // ── Funktionsplotter ───────────────────────────────────────
    /// Inhalt des Eingabefelds setzen
    SetExpressionInput { text: String },
    /// Ausdruck normalisieren und plotten
    PlotFunction { input: String },
    /// Fehlermeldung schließen
    DismissAlert,

    // ── Achsen-Skalierung & Ansicht ─────────────────────────────
    SetXScale { value: f64 },
    SetYScale { value: f64 },
    ResetScale,
    /// Pixelgröße der Fläche setzen
    ResizeSurface { size: [f32; 2] },
    /// Fenster um Delta verschieben
    PanView { delta_world: DVec2 },
    /// Um Fokuspunkt zoomen
    ZoomView { factor: f64, focus_world: DVec2 },

    // ── Historie ────────────────────────────────────────────────
    /// Hervorhebung eines Objekts setzen oder entfernen
    HighlightEntry { id: ObjectId, highlighted: bool },
    /// Hover-Eintrag merken
    SetHoveredEntry { id: Option<ObjectId> },
    /// Eintrag samt Konstruktionspunkten löschen
    DeleteEntry { id: ObjectId },

    /// Sprache setzen und Historie neu beschriften
    SetLanguage { language: Language },
}
