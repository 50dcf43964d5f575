//! Canvas-Input-Handling: Klicks, Drag-Pan und Scroll-Zoom → AppIntent.

use crate::app::AppIntent;
use crate::render::Projection;
use glam::DVec2;

/// Scroll-Pixel, die einer Mausrad-Raste entsprechen.
const SCROLL_PIXELS_PER_STEP: f32 = 50.0;

/// Verwaltet den Input-Zustand der Zeichenfläche.
#[derive(Debug, Default)]
pub struct InputState {
    /// Primärer Drag läuft und verschiebt die Fläche
    panning: bool,
    /// Zuletzt gemeldete Flächengröße
    last_size: Option<[f32; 2]>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            panning: false,
            last_size: None,
        }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        projection: &Projection,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        let size = [projection.rect.width(), projection.rect.height()];
        if self.last_size != Some(size) {
            self.last_size = Some(size);
            events.push(AppIntent::ViewportResized { size });
        }

        self.handle_click(ui, response, projection, &mut events);
        self.handle_pan(response, projection, &mut events);
        handle_scroll_zoom(ui, response, projection, &mut events);

        events
    }

    fn handle_click(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        projection: &Projection,
        events: &mut Vec<AppIntent>,
    ) {
        if !response.clicked_by(egui::PointerButton::Primary) {
            return;
        }
        // Shift+Klick erzeugt keinen Punkt
        if ui.input(|i| i.modifiers.shift) {
            return;
        }
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            events.push(AppIntent::CanvasClicked {
                world_pos: projection.to_world(pointer_pos),
            });
        }
    }

    fn handle_pan(
        &mut self,
        response: &egui::Response,
        projection: &Projection,
        events: &mut Vec<AppIntent>,
    ) {
        if response.drag_started_by(egui::PointerButton::Primary) {
            self.panning = true;
        }
        if self.panning && response.dragged_by(egui::PointerButton::Primary) {
            let delta = response.drag_delta();
            if delta != egui::Vec2::ZERO {
                events.push(AppIntent::CanvasPanned {
                    delta_world: pixel_delta_to_world(delta, projection),
                });
            }
        }
        if response.drag_stopped() {
            self.panning = false;
        }
    }
}

fn handle_scroll_zoom(
    ui: &egui::Ui,
    response: &egui::Response,
    projection: &Projection,
    events: &mut Vec<AppIntent>,
) {
    let Some(hover_pos) = response.hover_pos() else {
        return;
    };
    let scroll = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll == 0.0 {
        return;
    }
    events.push(AppIntent::CanvasZoomed {
        steps: scroll / SCROLL_PIXELS_PER_STEP,
        focus_world: projection.to_world(hover_pos),
    });
}

/// Pixel-Verschiebung → Verschiebung des Inhalts in Benutzerkoordinaten.
///
/// Bildschirm-y wächst nach unten, Benutzer-y nach oben.
pub fn pixel_delta_to_world(delta: egui::Vec2, projection: &Projection) -> DVec2 {
    let rect = projection.rect;
    let surface = DVec2::new(f64::from(rect.width()), f64::from(rect.height()));
    let per_pixel = projection.window.world_per_pixel(surface);
    DVec2::new(f64::from(delta.x), -f64::from(delta.y)) * per_pixel
}
