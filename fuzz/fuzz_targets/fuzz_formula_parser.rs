#![no_main]

use geometry_pad::core::{normalize_expression, Formula};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Some(normalized) = normalize_expression(input) else {
        return;
    };
    if let Ok(formula) = Formula::parse(&normalized) {
        for x in [-1.0e6, -1.0, 0.0, 0.5, 1.0, 1.0e6, f64::NAN] {
            let _ = formula.eval(x);
        }
    }
});
