//! Aufzeichnende Test-Zeichenfläche für Controller-Flow-Tests.

#![allow(dead_code)]

use geometry_pad::core::{
    Board, BoardError, CircleHandle, Color, Formula, FunctionHandle, LineHandle,
    ObjectId, PointHandle, ViewWindow,
};
use geometry_pad::{AppController, AppIntent, AppState};
use glam::DVec2;

/// Ein an die Fläche gesendeter Befehl.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardCall {
    CreatePoint { position: DVec2, color: Color },
    CreateLine { point_ids: [ObjectId; 2] },
    CreateCircle { point_ids: [ObjectId; 3] },
    CreateFunction { expression: String },
    Remove(Vec<ObjectId>),
    Highlight(ObjectId, bool),
    SetViewWindow(ViewWindow),
    Resize(f32, f32),
    Reset,
}

/// Fläche, die jeden Aufruf protokolliert und lebende Objekt-IDs verfolgt.
///
/// Wie die echte Fläche lehnt sie nur fehlende Konstruktionspunkte ab.
pub struct RecordingBoard {
    pub calls: Vec<BoardCall>,
    pub alive: Vec<ObjectId>,
    next_id: u64,
    window: ViewWindow,
}

impl RecordingBoard {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            alive: Vec::new(),
            next_id: 0,
            window: ViewWindow::initial(1.0),
        }
    }

    pub fn count(&self, predicate: impl Fn(&BoardCall) -> bool) -> usize {
        self.calls.iter().filter(|c| predicate(c)).count()
    }

    pub fn is_alive(&self, id: ObjectId) -> bool {
        self.alive.contains(&id)
    }

    fn require_alive(&self, ids: &[ObjectId]) -> Result<(), BoardError> {
        match ids.iter().find(|id| !self.is_alive(**id)) {
            Some(&missing) => Err(BoardError::MissingPoint(missing)),
            None => Ok(()),
        }
    }

    fn allocate(&mut self) -> ObjectId {
        self.next_id += 1;
        let id = ObjectId(self.next_id);
        self.alive.push(id);
        id
    }
}

impl Board for RecordingBoard {
    fn create_point(&mut self, position: DVec2, color: Color) -> PointHandle {
        self.calls.push(BoardCall::CreatePoint { position, color });
        PointHandle {
            id: self.allocate(),
            position,
        }
    }

    fn create_line(
        &mut self,
        points: &[PointHandle; 2],
        _color: Color,
    ) -> Result<LineHandle, BoardError> {
        let point_ids = points.map(|p| p.id);
        self.calls.push(BoardCall::CreateLine { point_ids });
        self.require_alive(&point_ids)?;
        Ok(LineHandle {
            id: self.allocate(),
            point_ids,
        })
    }

    fn create_circumcircle(
        &mut self,
        points: &[PointHandle; 3],
        _color: Color,
    ) -> Result<CircleHandle, BoardError> {
        let point_ids = points.map(|p| p.id);
        self.calls.push(BoardCall::CreateCircle { point_ids });
        self.require_alive(&point_ids)?;
        Ok(CircleHandle {
            id: self.allocate(),
            point_ids,
        })
    }

    fn create_function_graph(
        &mut self,
        expression: &str,
        _color: Color,
    ) -> Result<FunctionHandle, BoardError> {
        self.calls.push(BoardCall::CreateFunction {
            expression: expression.to_string(),
        });
        Formula::parse(expression).map_err(|source| BoardError::InvalidExpression {
            expression: expression.to_string(),
            source,
        })?;
        Ok(FunctionHandle {
            id: self.allocate(),
        })
    }

    fn remove_objects(&mut self, ids: &[ObjectId]) {
        self.calls.push(BoardCall::Remove(ids.to_vec()));
        self.alive.retain(|id| !ids.contains(id));
    }

    fn set_highlight(&mut self, id: ObjectId, highlighted: bool) {
        self.calls.push(BoardCall::Highlight(id, highlighted));
    }

    fn view_window(&self) -> ViewWindow {
        self.window
    }

    fn set_view_window(&mut self, window: ViewWindow) {
        self.calls.push(BoardCall::SetViewWindow(window));
        self.window = window;
    }

    fn resize_surface(&mut self, width: f32, height: f32) {
        self.calls.push(BoardCall::Resize(width, height));
    }

    fn reset_surface(&mut self) {
        self.calls.push(BoardCall::Reset);
        self.alive.clear();
        self.window = ViewWindow::initial(1.0);
    }
}

/// Controller, State und Fläche für einen Test-Durchlauf.
pub struct Harness {
    pub controller: AppController,
    pub state: AppState,
    pub board: RecordingBoard,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            controller: AppController::new(),
            state: AppState::new(),
            board: RecordingBoard::new(),
        }
    }

    pub fn send(&mut self, intent: AppIntent) {
        let label = format!("{intent:?}");
        self.controller
            .handle_intent(&mut self.state, &mut self.board, intent)
            .unwrap_or_else(|e| panic!("{label} sollte ohne Fehler durchlaufen: {e:#}"));
    }

    pub fn window(&self) -> ViewWindow {
        self.board.view_window()
    }

    pub fn click(&mut self, x: f64, y: f64) {
        self.send(AppIntent::CanvasClicked {
            world_pos: DVec2::new(x, y),
        });
    }
}
