//! UI-Layer mit egui: Seitenleiste, Canvas-Input und Meldungen.
//!
//! Alle Funktionen lesen nur den [`AppState`](crate::app::AppState) und
//! liefern [`AppIntent`](crate::app::AppIntent)s zurück.

pub mod alert;
pub mod input;
pub mod sidebar;

pub use alert::show_alert;
pub use input::InputState;
pub use sidebar::render_sidebar;
