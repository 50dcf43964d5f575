//! Geometrische Grundkonstruktionen für die Zeichenfläche.

use super::ViewWindow;
use glam::DVec2;

/// Relative Toleranz für Kollinearität, bezogen auf die Seitenlängen.
const COLLINEAR_TOLERANCE: f64 = 1e-10;

/// Kreis aus Mittelpunkt und Radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
}

/// Umkreis durch drei Punkte. `None` bei (nahezu) kollinearen Punkten.
pub fn circumcircle(a: DVec2, b: DVec2, c: DVec2) -> Option<Circle> {
    let ab = b - a;
    let ac = c - a;
    let cross = ab.perp_dot(ac);
    // Sinus des Winkels bei `a`, damit winzige Dreiecke nicht als kollinear gelten
    if cross.abs() <= COLLINEAR_TOLERANCE * ab.length() * ac.length() {
        return None;
    }
    let d = 2.0 * cross;

    let ab2 = ab.length_squared();
    let ac2 = ac.length_squared();
    let offset = DVec2::new(
        ac.y * ab2 - ab.y * ac2,
        ab.x * ac2 - ac.x * ab2,
    ) / d;

    Some(Circle {
        center: a + offset,
        radius: offset.length(),
    })
}

/// Schneidet die unendliche Gerade durch `a` und `b` mit dem Fenster.
///
/// Gibt die beiden Randpunkte zurück, oder `None` wenn die Gerade das
/// Fenster verfehlt bzw. `a == b` ist.
pub fn clip_line_to_window(a: DVec2, b: DVec2, window: &ViewWindow) -> Option<(DVec2, DVec2)> {
    let dir = b - a;
    if dir == DVec2::ZERO || !dir.is_finite() {
        return None;
    }
    let parallel_limit = f64::EPSILON * dir.abs().max_element();

    // Liang-Barsky auf dem Parameter t der Geraden a + t*dir
    let mut t_min = f64::NEG_INFINITY;
    let mut t_max = f64::INFINITY;
    let slabs = [
        (dir.x, a.x, window.left, window.right),
        (dir.y, a.y, window.bottom, window.top),
    ];
    for (d, origin, lo, hi) in slabs {
        if d.abs() <= parallel_limit {
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }
        let t0 = (lo - origin) / d;
        let t1 = (hi - origin) / d;
        t_min = t_min.max(t0.min(t1));
        t_max = t_max.min(t0.max(t1));
    }

    if t_min > t_max {
        return None;
    }
    Some((a + dir * t_min, a + dir * t_max))
}
