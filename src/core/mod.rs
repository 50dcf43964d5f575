//! Core-Domänentypen: Zeichenfläche, Geometrie, Formeln, Koordinatenfenster.

pub mod board;
pub mod color;
pub mod expression;
/// Parser und Auswertung der Formelsprache des Funktionsplotters
pub mod formula;
pub mod geometry;
pub mod sketch_board;
pub mod view_window;

pub use board::{
    Board, BoardError, CircleHandle, FunctionHandle, LineHandle, ObjectId, PointHandle,
};
pub use color::{Color, ParseColorError};
pub use expression::normalize_expression;
pub use formula::{Formula, FormulaError};
pub use geometry::{circumcircle, clip_line_to_window, Circle};
pub use sketch_board::{BoardObject, BoardShape, SketchBoard};
pub use view_window::{snap_scale, AxisScale, ViewWindow, BASE_Y_RADIUS};
