//! Sichtbares Koordinatenfenster und Achsen-Skalierung.

use glam::DVec2;

/// Y-Halbhöhe des Fensters bei Skalierung 1.0 (Benutzerkoordinaten).
pub const BASE_Y_RADIUS: f64 = 10.0;

/// Achsenparallele Bounding-Box in Benutzerkoordinaten (y wächst nach oben).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewWindow {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ViewWindow {
    /// Fenster um `center` mit den Halbachsen `radius`.
    pub fn centered(center: DVec2, radius: DVec2) -> Self {
        Self {
            left: center.x - radius.x,
            top: center.y + radius.y,
            right: center.x + radius.x,
            bottom: center.y - radius.y,
        }
    }

    /// Startfenster für ein gegebenes Seitenverhältnis (Breite / Höhe).
    pub fn initial(aspect_ratio: f64) -> Self {
        Self::centered(
            DVec2::ZERO,
            DVec2::new(BASE_Y_RADIUS * aspect_ratio, BASE_Y_RADIUS),
        )
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Verschiebt das Fenster um ein Delta in Benutzerkoordinaten.
    pub fn translated(&self, delta: DVec2) -> Self {
        Self {
            left: self.left + delta.x,
            top: self.top + delta.y,
            right: self.right + delta.x,
            bottom: self.bottom + delta.y,
        }
    }

    /// Zoomt um `factor` (>1 = hinein), wobei `focus` ortsfest bleibt.
    pub fn zoomed(&self, factor: f64, focus: DVec2) -> Self {
        if factor <= 0.0 || !factor.is_finite() {
            return *self;
        }
        let scale = 1.0 / factor;
        Self {
            left: focus.x + (self.left - focus.x) * scale,
            top: focus.y + (self.top - focus.y) * scale,
            right: focus.x + (self.right - focus.x) * scale,
            bottom: focus.y + (self.bottom - focus.y) * scale,
        }
    }

    /// Bildet Flächenpixel (Ursprung oben links) auf Benutzerkoordinaten ab.
    pub fn screen_to_world(&self, screen: DVec2, surface: DVec2) -> DVec2 {
        let surface = surface.max(DVec2::ONE);
        DVec2::new(
            self.left + screen.x / surface.x * self.width(),
            self.top - screen.y / surface.y * self.height(),
        )
    }

    /// Bildet Benutzerkoordinaten auf Flächenpixel ab.
    pub fn world_to_screen(&self, world: DVec2, surface: DVec2) -> DVec2 {
        DVec2::new(
            (world.x - self.left) / self.width() * surface.x,
            (self.top - world.y) / self.height() * surface.y,
        )
    }

    /// Benutzereinheiten pro Pixel, je Achse.
    pub fn world_per_pixel(&self, surface: DVec2) -> DVec2 {
        DVec2::new(self.width(), self.height()) / surface.max(DVec2::ONE)
    }
}

/// Unabhängige Skalierung der X- und Y-Achse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    pub x: f64,
    pub y: f64,
}

impl Default for AxisScale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

impl AxisScale {
    /// Berechnet das skalierte Fenster um das aktuelle Zentrum.
    ///
    /// `base_x_radius` ist die X-Halbbreite bei Skalierung 1.0 und
    /// folgt dem Seitenverhältnis der Fläche.
    pub fn apply(
        &self,
        current: &ViewWindow,
        base_x_radius: f64,
        base_y_radius: f64,
    ) -> ViewWindow {
        ViewWindow::centered(
            current.center(),
            DVec2::new(base_x_radius / self.x, base_y_radius / self.y),
        )
    }
}

/// Klemmt einen Skalierungswert auf `[min, max]` und rastet auf `step` ein.
pub fn snap_scale(value: f64, min: f64, max: f64, step: f64) -> f64 {
    if !value.is_finite() {
        return 1.0;
    }
    let clamped = value.clamp(min, max);
    if step <= 0.0 {
        return clamped;
    }
    let snapped = min + ((clamped - min) / step).round() * step;
    // Rundungsreste wie 0.30000000000000004 entfernen
    ((snapped * 1e6).round() / 1e6).clamp(min, max)
}
