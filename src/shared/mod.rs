//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration und Übersetzungen, die von `app` und `ui`
//! gleichermaßen gelesen werden.

pub mod i18n;
pub mod options;

pub use i18n::{Language, Message};
pub use options::PadOptions;
