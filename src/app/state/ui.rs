use crate::core::ObjectId;
use crate::shared::Language;

/// UI-bezogener Zustand (Eingabefelder, Meldungen, Sprache)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Aktive Oberflächensprache
    pub language: Language,
    /// Inhalt des Funktionsplotter-Eingabefelds
    pub expression_input: String,
    /// Blockierende Fehlermeldung (modal, bis bestätigt)
    pub alert: Option<String>,
    /// Historien-Eintrag unter dem Mauszeiger
    pub hovered_entry: Option<ObjectId>,
}

impl UiState {
    /// Erstellt den Start-Zustand für eine Sprache.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }
}
