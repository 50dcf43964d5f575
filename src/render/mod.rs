//! Darstellung der Zeichenfläche mit dem egui-Painter.
//!
//! Der Renderer liest nur: Objekte und Koordinatenfenster kommen aus der
//! [`SketchBoard`](crate::core::SketchBoard), Stilwerte aus den Optionen.

pub mod canvas;
pub mod grid;
pub mod sampling;

pub use canvas::{color32, paint_board, Projection};
pub use sampling::sample_graph;
