//! Normalisierung von Benutzereingaben für den Funktionsplotter.
//!
//! Pipeline (Reihenfolge ist relevant):
//! 1. Trimmen, leere Eingabe → `None`
//! 2. Kleinschreibung
//! 3. Benannte Konstanten (`e`, `pi`/`π`, `phi`/`φ`) als ganze Wörter ersetzen
//! 4. Hochgestellte Ziffern → `^n`
//! 5. Implizite Multiplikation (`2x` → `2*x`, `)(` → `)*(`)

use regex::Regex;
use std::sync::LazyLock;

/// Benannte Konstanten in Ersetzungsreihenfolge. Werte werden geklammert eingesetzt.
pub const NAMED_CONSTANTS: [(&str, &str); 5] = [
    ("e", "2.718281828459045"),
    ("pi", "3.14159265358979"),
    ("π", "3.14159265358979"),
    ("phi", "1.618033988749895"),
    ("φ", "1.618033988749895"),
];

static CONSTANT_PATTERNS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    NAMED_CONSTANTS
        .iter()
        .filter_map(|(name, value)| {
            let pattern = format!(r"\b{}\b", regex::escape(name));
            match Regex::new(&pattern) {
                Ok(regex) => Some((regex, format!("({value})"))),
                Err(e) => {
                    log::error!("Konstanten-Pattern {:?} ungültig: {}", pattern, e);
                    None
                }
            }
        })
        .collect()
});

static DIGIT_BEFORE_FACTOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(\d)([a-zA-Z(])"));
static PAREN_BEFORE_FACTOR: LazyLock<Option<Regex>> =
    LazyLock::new(|| compile(r"(\))([a-zA-Z(])"));

fn compile(pattern: &str) -> Option<Regex> {
    Regex::new(pattern)
        .map_err(|e| log::error!("Regex {:?} ungültig: {}", pattern, e))
        .ok()
}

/// Hochgestellte Ziffer → normale Ziffer.
fn superscript_digit(ch: char) -> Option<char> {
    let digit = match ch {
        '⁰' => '0',
        '¹' => '1',
        '²' => '2',
        '³' => '3',
        '⁴' => '4',
        '⁵' => '5',
        '⁶' => '6',
        '⁷' => '7',
        '⁸' => '8',
        '⁹' => '9',
        _ => return None,
    };
    Some(digit)
}

/// Normalisiert einen vom Benutzer getippten Ausdruck in `x`.
///
/// Gibt `None` für leere Eingaben zurück (kein Plot). Die Syntaxprüfung
/// selbst übernimmt die Zeichenfläche beim Erzeugen des Graphen.
pub fn normalize_expression(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut expression = trimmed.to_lowercase();

    for (regex, replacement) in CONSTANT_PATTERNS.iter() {
        expression = regex
            .replace_all(&expression, replacement.as_str())
            .into_owned();
    }

    expression = expand_superscripts(&expression);

    // Zwei unabhängige Durchläufe, kein erneutes Scannen der Ergebnisse
    if let Some(regex) = DIGIT_BEFORE_FACTOR.as_ref() {
        expression = regex.replace_all(&expression, "${1}*${2}").into_owned();
    }
    if let Some(regex) = PAREN_BEFORE_FACTOR.as_ref() {
        expression = regex.replace_all(&expression, "${1}*${2}").into_owned();
    }

    Some(expression)
}

fn expand_superscripts(expression: &str) -> String {
    let mut out = String::with_capacity(expression.len());
    for ch in expression.chars() {
        match superscript_digit(ch) {
            Some(digit) => {
                out.push('^');
                out.push(digit);
            }
            None => out.push(ch),
        }
    }
    out
}
