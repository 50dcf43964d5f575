//! Abtastung von Funktionsgraphen über das sichtbare Fenster.

use crate::core::{Formula, ViewWindow};
use glam::DVec2;

/// Tastet `formula` mit `samples` Stützstellen über die Fensterbreite ab.
///
/// Liefert zusammenhängende Polylinien in Benutzerkoordinaten. Eine Linie
/// endet an nicht-endlichen Werten (Definitionslücken) und an Sprüngen,
/// die größer als die sichtbare Fensterhöhe sind (Polstellen wie bei `tan`).
/// Einzelne isolierte Stützstellen werden verworfen.
pub fn sample_graph(formula: &Formula, window: &ViewWindow, samples: usize) -> Vec<Vec<DVec2>> {
    let samples = samples.max(2);
    let dx = window.width() / (samples - 1) as f64;
    let max_jump = window.height().abs();

    let mut segments = Vec::new();
    let mut current: Vec<DVec2> = Vec::new();

    for i in 0..samples {
        let x = window.left + dx * i as f64;
        let y = formula.eval(x);

        if !y.is_finite() {
            flush(&mut current, &mut segments);
            continue;
        }
        if let Some(prev) = current.last() {
            if (y - prev.y).abs() > max_jump {
                flush(&mut current, &mut segments);
            }
        }
        current.push(DVec2::new(x, y));
    }
    flush(&mut current, &mut segments);
    segments
}

fn flush(current: &mut Vec<DVec2>, segments: &mut Vec<Vec<DVec2>>) {
    if current.len() >= 2 {
        segments.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn formula(source: &str) -> Formula {
        Formula::parse(source).unwrap_or_else(|e| panic!("{source:?} sollte parsen: {e}"))
    }

    fn window(left: f64, right: f64, bottom: f64, top: f64) -> ViewWindow {
        ViewWindow {
            left,
            top,
            right,
            bottom,
        }
    }

    #[test]
    fn continuous_function_is_one_polyline_over_the_full_width() {
        let segments = sample_graph(&formula("2*x"), &window(-10.0, 10.0, -10.0, 10.0), 5);
        assert_eq!(segments.len(), 1);
        let line = &segments[0];
        assert_eq!(line.len(), 5);
        assert_relative_eq!(line[0].x, -10.0);
        assert_relative_eq!(line[0].y, -20.0);
        assert_relative_eq!(line[4].x, 10.0);
        assert_relative_eq!(line[4].y, 20.0);
    }

    #[test]
    fn infinite_values_split_the_graph() {
        // x = 0 liegt genau auf einer Stützstelle
        let segments = sample_graph(&formula("1/x"), &window(-10.0, 10.0, -10.0, 10.0), 5);
        assert_eq!(segments.len(), 2);
        assert!(segments.iter().all(|s| s.len() == 2));
    }

    #[test]
    fn undefined_region_is_skipped() {
        let segments = sample_graph(&formula("sqrt(x)"), &window(-10.0, 10.0, -10.0, 10.0), 5);
        assert_eq!(segments.len(), 1);
        assert_relative_eq!(segments[0][0].x, 0.0);
        assert_eq!(segments[0].len(), 3);
    }

    #[test]
    fn jumps_taller_than_the_window_break_the_line() {
        let segments = sample_graph(&formula("10*sign(x)"), &window(-1.0, 1.0, -2.0, 2.0), 4);
        assert_eq!(segments.len(), 2);
        assert!(segments[0].iter().all(|p| p.y < 0.0));
        assert!(segments[1].iter().all(|p| p.y > 0.0));
    }

    #[test]
    fn sample_count_is_at_least_two() {
        let segments = sample_graph(&formula("x"), &window(0.0, 1.0, 0.0, 1.0), 0);
        assert_eq!(segments, vec![vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 1.0)]]);
    }
}
