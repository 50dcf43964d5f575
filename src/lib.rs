//! Geometry Pad Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, ConstructionMode, EntryKind, HistoryEntry,
    ObjectHistory, UiState, ViewState,
};
pub use core::{
    Board, BoardError, Color, Formula, FormulaError, ObjectId, PointHandle, SketchBoard,
    ViewWindow,
};
pub use shared::{Language, Message, PadOptions};
