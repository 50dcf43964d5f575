//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
/// Zustandsautomat der Punkt-, Linien- und Kreiskonstruktion
pub mod construction;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use construction::{ConstructionMode, ConstructionState, ConstructionStep};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{EntryKind, HistoryEntry, ObjectHistory};
pub use state::{AppState, UiState, ViewState};
