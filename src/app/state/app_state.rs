use crate::app::construction::ConstructionState;
use crate::app::history::ObjectHistory;
use crate::app::CommandLog;
use crate::core::Color;
use crate::shared::{Message, PadOptions};

use super::{UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Konstruktionsmodus inkl. Auswahlpuffer
    pub construction: ConstructionState,
    /// Historie aller erzeugten Objekte
    pub history: ObjectHistory,
    /// Farbe für neu erzeugte Objekte
    pub active_color: Color,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Beim Start geladene Optionen
    pub options: PadOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standardoptionen
    pub fn new() -> Self {
        Self::with_options(PadOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen
    pub fn with_options(options: PadOptions) -> Self {
        Self {
            construction: ConstructionState::new(),
            history: ObjectHistory::new(),
            active_color: options.default_color,
            view: ViewState::new(),
            ui: UiState::new(options.language),
            command_log: CommandLog::new(),
            options,
        }
    }

    /// Übersetzt eine Nachricht in die aktive Sprache
    pub fn text(&self, message: Message<'_>) -> String {
        self.ui.language.text(message)
    }

    /// Eingabeaufforderung des aktuellen Konstruktionsmodus
    pub fn prompt_text(&self) -> String {
        self.text(self.construction.prompt())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
