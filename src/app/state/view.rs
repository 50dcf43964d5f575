use crate::core::{AxisScale, BASE_Y_RADIUS};

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Unabhängige X/Y-Skalierung der Slider
    pub scale: AxisScale,
    /// X-Halbbreite bei Skalierung 1.0 (folgt dem Seitenverhältnis)
    pub base_x_radius: f64,
    /// Aktuelle Größe der Zeichenfläche in Pixel
    pub surface_size: [f32; 2],
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            scale: AxisScale::default(),
            base_x_radius: BASE_Y_RADIUS,
            surface_size: [0.0, 0.0],
        }
    }
}
