//! Zentrale Konfiguration für Geometry Pad.
//!
//! `PadOptions` enthält alle beim Start einlesbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{Color, BASE_Y_RADIUS};
use crate::shared::Language;
use serde::{Deserialize, Serialize};

// ── Farben ──────────────────────────────────────────────────────────

/// Farbpalette des Stil-Panels (Tailwind-400/500-Töne).
pub const DEFAULT_PALETTE: [Color; 8] = [
    Color::rgb(0x38, 0xbd, 0xf8),
    Color::rgb(0xf4, 0x3f, 0x5e),
    Color::rgb(0xf5, 0x9e, 0x0b),
    Color::rgb(0x84, 0xcc, 0x16),
    Color::rgb(0x22, 0xc5, 0x5e),
    Color::rgb(0x81, 0x8c, 0xf8),
    Color::rgb(0xc0, 0x84, 0xfc),
    Color::rgb(0xf4, 0x72, 0xb6),
];

// ── Achsen-Skalierung ───────────────────────────────────────────────

/// Kleinster Skalierungsfaktor je Achse.
pub const SCALE_MIN: f64 = 0.2;
/// Größter Skalierungsfaktor je Achse.
pub const SCALE_MAX: f64 = 5.0;
/// Rasterschritt der Skalierungs-Slider.
pub const SCALE_STEP: f64 = 0.1;

// ── Navigation ─────────────────────────────────────────────────────

/// Zoom-Faktor pro Mausrad-Raste.
pub const SCROLL_ZOOM_STEP: f64 = 1.25;

// ── Darstellung ────────────────────────────────────────────────────

/// Linienstärke von Linien, Kreisen und Graphen in Pixeln.
pub const STROKE_WIDTH: f32 = 2.0;
/// Radius gezeichneter Punkte in Pixeln.
pub const POINT_RADIUS: f32 = 4.0;
/// Deckkraft der Kreisfüllung.
pub const CIRCLE_FILL_OPACITY: f32 = 0.2;
/// Stützstellen pro Funktionsgraph über die sichtbare Breite.
pub const FUNCTION_SAMPLES: usize = 400;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle beim Start einlesbaren Optionen.
/// Wird als `geometry_pad.toml` neben der Binary erwartet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadOptions {
    // ── Farben ──────────────────────────────────────────────────
    /// Auswählbare Objektfarben
    pub palette: Vec<Color>,
    /// Vorausgewählte Objektfarbe
    pub default_color: Color,
    /// Farbe hervorgehobener Objekte (Hover in der Historie)
    pub highlight_color: Color,

    /// Sprache beim Start
    pub language: Language,

    // ── Koordinatenfenster ──────────────────────────────────────
    /// Y-Halbhöhe bei Skalierung 1.0
    pub base_y_radius: f64,
    pub scale_min: f64,
    pub scale_max: f64,
    pub scale_step: f64,
    /// Zoom-Faktor pro Mausrad-Raste
    pub scroll_zoom_step: f64,

    // ── Darstellung ─────────────────────────────────────────────
    pub stroke_width: f32,
    pub point_radius: f32,
    pub circle_fill_opacity: f32,
    pub function_samples: usize,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE.to_vec(),
            default_color: Color::SKY,
            highlight_color: Color::AMBER,
            language: Language::default(),

            base_y_radius: BASE_Y_RADIUS,
            scale_min: SCALE_MIN,
            scale_max: SCALE_MAX,
            scale_step: SCALE_STEP,
            scroll_zoom_step: SCROLL_ZOOM_STEP,

            stroke_width: STROKE_WIDTH,
            point_radius: POINT_RADIUS,
            circle_fill_opacity: CIRCLE_FILL_OPACITY,
            function_samples: FUNCTION_SAMPLES,
        }
    }
}

impl PadOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_str(&content),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text. Fehlerhafter Inhalt ergibt Standardwerte.
    pub fn from_toml_str(content: &str) -> Self {
        match toml::from_str::<Self>(content) {
            Ok(opts) => {
                log::info!("Optionen geladen");
                opts.sanitized()
            }
            Err(e) => {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("geometry-pad"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("geometry_pad.toml")
    }

    /// Ersetzt unbrauchbare Werte durch Standardwerte.
    fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.palette.is_empty() {
            log::warn!("Leere Farbpalette in den Optionen, verwende Standardpalette");
            self.palette = defaults.palette.clone();
        }
        let scale_range_ok = self.scale_min > 0.0
            && self.scale_min <= 1.0
            && self.scale_max >= 1.0
            && self.scale_step > 0.0;
        if !scale_range_ok {
            log::warn!(
                "Ungültiger Skalierungsbereich {}..{} (Schritt {}), verwende Standardwerte",
                self.scale_min,
                self.scale_max,
                self.scale_step
            );
            self.scale_min = defaults.scale_min;
            self.scale_max = defaults.scale_max;
            self.scale_step = defaults.scale_step;
        }
        if self.base_y_radius.is_nan() || self.base_y_radius <= 0.0 {
            self.base_y_radius = defaults.base_y_radius;
        }
        if self.scroll_zoom_step.is_nan() || self.scroll_zoom_step <= 1.0 {
            self.scroll_zoom_step = defaults.scroll_zoom_step;
        }
        if self.function_samples < 2 {
            self.function_samples = defaults.function_samples;
        }
        self.circle_fill_opacity = self.circle_fill_opacity.clamp(0.0, 1.0);
        self
    }
}
