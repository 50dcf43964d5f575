//! Zeichnet die Zeichenfläche mit dem egui-Painter.
//!
//! Reihenfolge: Hintergrund, Raster, Achsen, Graphen, Kreise, Linien, Punkte.
//! Punkte liegen damit immer oben und bleiben anklickbar sichtbar.

use super::grid::{format_tick, grid_positions, nice_step};
use super::sampling::sample_graph;
use crate::core::{clip_line_to_window, Board, BoardShape, Color, SketchBoard, ViewWindow};
use crate::shared::PadOptions;
use glam::DVec2;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(0xfb, 0xfb, 0xfc);
const GRID_COLOR: egui::Color32 = egui::Color32::from_rgb(0xe5, 0xe7, 0xeb);
const AXIS_COLOR: egui::Color32 = egui::Color32::from_rgb(0x4b, 0x55, 0x63);
const LABEL_COLOR: egui::Color32 = egui::Color32::from_rgb(0x6b, 0x72, 0x80);
const POINT_OUTLINE: egui::Color32 = egui::Color32::from_rgb(0x1f, 0x29, 0x37);

/// Angestrebter Pixelabstand zwischen Gitterlinien.
const GRID_SPACING_PX: f32 = 80.0;
/// Stützstellen für die Kreis-Polygone.
const CIRCLE_SEGMENTS: usize = 96;
/// Verstärkung von Strichstärke und Punktradius bei Hervorhebung.
const HIGHLIGHT_GROWTH: f32 = 1.5;

/// Wandelt eine Objektfarbe in eine egui-Farbe.
pub fn color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgb(color.r, color.g, color.b)
}

/// Abbildung zwischen Benutzerkoordinaten und Bildschirm.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    pub window: ViewWindow,
    pub rect: egui::Rect,
}

impl Projection {
    pub fn new(window: ViewWindow, rect: egui::Rect) -> Self {
        Self { window, rect }
    }

    fn surface(&self) -> DVec2 {
        DVec2::new(f64::from(self.rect.width()), f64::from(self.rect.height()))
    }

    /// Benutzerkoordinaten → Bildschirmposition.
    pub fn to_screen(&self, world: DVec2) -> egui::Pos2 {
        let local = self.window.world_to_screen(world, self.surface());
        self.rect.min + egui::vec2(local.x as f32, local.y as f32)
    }

    /// Bildschirmposition → Benutzerkoordinaten.
    pub fn to_world(&self, screen: egui::Pos2) -> DVec2 {
        let local = screen - self.rect.min;
        self.window
            .screen_to_world(DVec2::new(f64::from(local.x), f64::from(local.y)), self.surface())
    }
}

/// Zeichnet die komplette Fläche in `rect`.
pub fn paint_board(
    painter: &egui::Painter,
    rect: egui::Rect,
    board: &SketchBoard,
    options: &PadOptions,
) {
    let projection = Projection::new(board.view_window(), rect);
    painter.rect_filled(rect, 0.0, BACKGROUND);

    paint_grid(painter, &projection);

    let style = ObjectStyle::new(options);
    for object in board.objects() {
        if let BoardShape::Function { formula, .. } = &object.shape {
            let stroke = style.stroke(object.color, object.highlighted);
            for segment in sample_graph(formula, &projection.window, options.function_samples) {
                let points: Vec<egui::Pos2> =
                    segment.iter().map(|p| projection.to_screen(*p)).collect();
                painter.add(egui::Shape::line(points, stroke));
            }
        }
    }

    for object in board.objects() {
        if let BoardShape::Circle { points } = &object.shape {
            let Some(circle) = board.resolve_circle(points) else {
                continue;
            };
            let outline: Vec<egui::Pos2> = (0..CIRCLE_SEGMENTS)
                .map(|i| {
                    let angle = std::f64::consts::TAU * i as f64 / CIRCLE_SEGMENTS as f64;
                    let world =
                        circle.center + circle.radius * DVec2::new(angle.cos(), angle.sin());
                    projection.to_screen(world)
                })
                .collect();
            painter.add(egui::Shape::convex_polygon(
                outline,
                style.fill(object.color, object.highlighted),
                style.stroke(object.color, object.highlighted),
            ));
        }
    }

    for object in board.objects() {
        if let BoardShape::Line { points: [a, b] } = &object.shape {
            let (Some(a), Some(b)) = (board.point_position(*a), board.point_position(*b)) else {
                continue;
            };
            if let Some((start, end)) = clip_line_to_window(a, b, &projection.window) {
                painter.line_segment(
                    [projection.to_screen(start), projection.to_screen(end)],
                    style.stroke(object.color, object.highlighted),
                );
            }
        }
    }

    for object in board.objects() {
        if let BoardShape::Point { position } = &object.shape {
            let center = projection.to_screen(*position);
            let radius = if object.highlighted {
                options.point_radius * HIGHLIGHT_GROWTH
            } else {
                options.point_radius
            };
            painter.circle(
                center,
                radius,
                style.color(object.color, object.highlighted),
                egui::Stroke::new(1.0, POINT_OUTLINE),
            );
        }
    }
}

// ── Raster und Achsen ───────────────────────────────────────────────

fn paint_grid(painter: &egui::Painter, projection: &Projection) {
    let window = projection.window;
    let rect = projection.rect;
    let step_x = nice_step(window.width(), f64::from(rect.width() / GRID_SPACING_PX));
    let step_y = nice_step(window.height(), f64::from(rect.height() / GRID_SPACING_PX));
    let grid_stroke = egui::Stroke::new(1.0, GRID_COLOR);

    let xs = grid_positions(window.left, window.right, step_x);
    let ys = grid_positions(window.bottom, window.top, step_y);

    for &x in &xs {
        let sx = projection.to_screen(DVec2::new(x, 0.0)).x;
        painter.vline(sx, rect.y_range(), grid_stroke);
    }
    for &y in &ys {
        let sy = projection.to_screen(DVec2::new(0.0, y)).y;
        painter.hline(rect.x_range(), sy, grid_stroke);
    }

    // Achsen am Rand festhalten, wenn der Ursprung außerhalb liegt
    let origin = projection.to_screen(DVec2::ZERO);
    let axis_x = origin.x.clamp(rect.left(), rect.right());
    let axis_y = origin.y.clamp(rect.top(), rect.bottom());
    let axis_stroke = egui::Stroke::new(1.5, AXIS_COLOR);
    painter.hline(rect.x_range(), axis_y, axis_stroke);
    painter.vline(axis_x, rect.y_range(), axis_stroke);

    let font = egui::FontId::proportional(11.0);
    for &x in xs.iter().filter(|x| x.abs() > step_x * 1e-6) {
        let sx = projection.to_screen(DVec2::new(x, 0.0)).x;
        painter.text(
            egui::pos2(sx + 2.0, (axis_y + 2.0).min(rect.bottom() - 14.0)),
            egui::Align2::LEFT_TOP,
            format_tick(x, step_x),
            font.clone(),
            LABEL_COLOR,
        );
    }
    for &y in ys.iter().filter(|y| y.abs() > step_y * 1e-6) {
        let sy = projection.to_screen(DVec2::new(0.0, y)).y;
        painter.text(
            egui::pos2((axis_x + 4.0).min(rect.right() - 24.0), sy - 2.0),
            egui::Align2::LEFT_BOTTOM,
            format_tick(y, step_y),
            font.clone(),
            LABEL_COLOR,
        );
    }
}

// ── Objekt-Stil ─────────────────────────────────────────────────────

struct ObjectStyle {
    stroke_width: f32,
    fill_opacity: f32,
    highlight: Color,
}

impl ObjectStyle {
    fn new(options: &PadOptions) -> Self {
        Self {
            stroke_width: options.stroke_width,
            fill_opacity: options.circle_fill_opacity,
            highlight: options.highlight_color,
        }
    }

    fn color(&self, color: Color, highlighted: bool) -> egui::Color32 {
        color32(if highlighted { self.highlight } else { color })
    }

    fn stroke(&self, color: Color, highlighted: bool) -> egui::Stroke {
        let width = if highlighted {
            self.stroke_width * HIGHLIGHT_GROWTH
        } else {
            self.stroke_width
        };
        egui::Stroke::new(width, self.color(color, highlighted))
    }

    fn fill(&self, color: Color, highlighted: bool) -> egui::Color32 {
        let base = if highlighted { self.highlight } else { color };
        let alpha = (self.fill_opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
        egui::Color32::from_rgba_unmultiplied(base.r, base.g, base.b, alpha)
    }
}
