//! Use-Cases der Application-Layer-Orchestrierung.

pub mod construction;
pub mod history;
pub mod plotter;
pub mod view;
