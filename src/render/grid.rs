//! Gitterabstände für Koordinatenraster und Achsenbeschriftung.

/// Obergrenze für Gitterlinien je Achse.
const MAX_GRID_LINES: usize = 500;

/// Runder Gitterabstand (1, 2 oder 5 × 10ⁿ), sodass `span` in etwa
/// `target_lines` Abschnitte zerfällt.
pub fn nice_step(span: f64, target_lines: f64) -> f64 {
    if !span.is_finite() || span <= 0.0 || target_lines <= 0.0 {
        return 1.0;
    }
    let raw = span / target_lines;
    let magnitude = 10f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let nice = if residual <= 1.0 {
        1.0
    } else if residual <= 2.0 {
        2.0
    } else if residual <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Alle Vielfachen von `step` im Intervall `[min, max]`.
pub fn grid_positions(min: f64, max: f64, step: f64) -> Vec<f64> {
    if step <= 0.0 || !step.is_finite() || min > max {
        return Vec::new();
    }
    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;
    (first..=last)
        .take(MAX_GRID_LINES)
        .map(|k| k as f64 * step)
        .collect()
}

/// Beschriftung eines Gitterwerts ohne überflüssige Nachkommastellen.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    // -0 vermeiden
    let value = if value.abs() < step * 1e-6 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}
