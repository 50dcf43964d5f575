//! In-Memory-Zeichenfläche: konkrete Implementierung von [`Board`].
//!
//! Hält alle Objekte, das Koordinatenfenster und die Pixelgröße der Fläche.
//! Das egui-Frontend zeichnet direkt aus diesem Zustand.

use super::board::{
    Board, BoardError, CircleHandle, FunctionHandle, LineHandle, ObjectId, PointHandle,
};
use super::geometry::{circumcircle, Circle};
use super::{Color, Formula, ViewWindow};
use glam::DVec2;
use indexmap::IndexMap;

/// Geometrischer Inhalt eines Flächenobjekts.
#[derive(Debug, Clone)]
pub enum BoardShape {
    Point { position: DVec2 },
    Line { points: [ObjectId; 2] },
    Circle { points: [ObjectId; 3] },
    Function { expression: String, formula: Formula },
}

/// Ein Objekt auf der Zeichenfläche.
#[derive(Debug, Clone)]
pub struct BoardObject {
    pub id: ObjectId,
    pub shape: BoardShape,
    pub color: Color,
    pub highlighted: bool,
}

impl BoardObject {
    /// IDs der Punkte, von denen dieses Objekt abhängt.
    pub fn parents(&self) -> &[ObjectId] {
        match &self.shape {
            BoardShape::Line { points } => points,
            BoardShape::Circle { points } => points,
            BoardShape::Point { .. } | BoardShape::Function { .. } => &[],
        }
    }
}

/// Konkrete Zeichenfläche.
#[derive(Debug, Clone)]
pub struct SketchBoard {
    objects: IndexMap<ObjectId, BoardObject>,
    next_id: u64,
    window: ViewWindow,
    surface: DVec2,
}

impl Default for SketchBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SketchBoard {
    /// Erstellt eine leere, quadratische Fläche mit Startfenster.
    pub fn new() -> Self {
        Self {
            objects: IndexMap::new(),
            next_id: 1,
            window: ViewWindow::initial(1.0),
            surface: DVec2::ONE,
        }
    }

    /// Alle Objekte in Erstellungsreihenfolge.
    pub fn objects(&self) -> impl Iterator<Item = &BoardObject> {
        self.objects.values()
    }

    pub fn object(&self, id: ObjectId) -> Option<&BoardObject> {
        self.objects.get(&id)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Position eines Punkt-Objekts.
    pub fn point_position(&self, id: ObjectId) -> Option<DVec2> {
        match self.objects.get(&id).map(|o| &o.shape) {
            Some(BoardShape::Point { position }) => Some(*position),
            _ => None,
        }
    }

    /// Berechnet den Umkreis eines Kreis-Objekts aus seinen Punkten.
    pub fn resolve_circle(&self, points: &[ObjectId; 3]) -> Option<Circle> {
        let [a, b, c] = points.map(|id| self.point_position(id));
        circumcircle(a?, b?, c?)
    }

    fn allocate_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        id
    }

    fn insert(&mut self, shape: BoardShape, color: Color) -> ObjectId {
        let id = self.allocate_id();
        self.objects.insert(
            id,
            BoardObject {
                id,
                shape,
                color,
                highlighted: false,
            },
        );
        id
    }

    /// Prüft, dass alle Konstruktionspunkte noch auf der Fläche liegen.
    fn require_points(&self, handles: &[PointHandle]) -> Result<(), BoardError> {
        match handles
            .iter()
            .find(|h| self.point_position(h.id).is_none())
        {
            Some(missing) => Err(BoardError::MissingPoint(missing.id)),
            None => Ok(()),
        }
    }

    fn aspect_ratio(&self) -> f64 {
        if self.surface.y > 0.0 {
            self.surface.x / self.surface.y
        } else {
            1.0
        }
    }
}

impl Board for SketchBoard {
    fn create_point(&mut self, position: DVec2, color: Color) -> PointHandle {
        let id = self.insert(BoardShape::Point { position }, color);
        PointHandle { id, position }
    }

    fn create_line(
        &mut self,
        points: &[PointHandle; 2],
        color: Color,
    ) -> Result<LineHandle, BoardError> {
        self.require_points(points)?;
        let point_ids = points.map(|p| p.id);
        let id = self.insert(BoardShape::Line { points: point_ids }, color);
        Ok(LineHandle { id, point_ids })
    }

    fn create_circumcircle(
        &mut self,
        points: &[PointHandle; 3],
        color: Color,
    ) -> Result<CircleHandle, BoardError> {
        // Kollineare Punkte ergeben einen Kreis ohne Umkreis, der nicht gezeichnet wird
        self.require_points(points)?;
        let point_ids = points.map(|p| p.id);
        let id = self.insert(BoardShape::Circle { points: point_ids }, color);
        Ok(CircleHandle { id, point_ids })
    }

    fn create_function_graph(
        &mut self,
        expression: &str,
        color: Color,
    ) -> Result<FunctionHandle, BoardError> {
        let formula =
            Formula::parse(expression).map_err(|source| BoardError::InvalidExpression {
                expression: expression.to_string(),
                source,
            })?;
        let id = self.insert(
            BoardShape::Function {
                expression: expression.to_string(),
                formula,
            },
            color,
        );
        Ok(FunctionHandle { id })
    }

    fn remove_objects(&mut self, ids: &[ObjectId]) {
        let mut doomed: Vec<ObjectId> = ids
            .iter()
            .copied()
            .filter(|id| self.objects.contains_key(id))
            .collect();

        // Abhängige Objekte (Linie/Kreis eines gelöschten Punkts) mitnehmen
        let dependents: Vec<ObjectId> = self
            .objects
            .values()
            .filter(|o| o.parents().iter().any(|p| doomed.contains(p)))
            .map(|o| o.id)
            .collect();
        doomed.extend(dependents);

        for id in &doomed {
            self.objects.shift_remove(id);
        }
        if !doomed.is_empty() {
            log::debug!("{} Objekte von der Zeichenfläche entfernt", doomed.len());
        }
    }

    fn set_highlight(&mut self, id: ObjectId, highlighted: bool) {
        if let Some(object) = self.objects.get_mut(&id) {
            object.highlighted = highlighted;
        }
    }

    fn view_window(&self) -> ViewWindow {
        self.window
    }

    fn set_view_window(&mut self, window: ViewWindow) {
        if window.width() > 0.0 && window.height() > 0.0 {
            self.window = window;
        } else {
            log::warn!("Degeneriertes Koordinatenfenster verworfen: {:?}", window);
        }
    }

    fn resize_surface(&mut self, width: f32, height: f32) {
        self.surface = DVec2::new(f64::from(width.max(0.0)), f64::from(height.max(0.0)));
    }

    fn reset_surface(&mut self) {
        self.objects.clear();
        self.window = ViewWindow::initial(self.aspect_ratio());
        log::info!("Zeichenfläche zurückgesetzt");
    }
}
