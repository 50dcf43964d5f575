mod common;

use common::{BoardCall, Harness};
use geometry_pad::{AppIntent, EntryKind, Language};

fn plot(h: &mut Harness, input: &str) {
    h.send(AppIntent::ExpressionEdited {
        text: input.to_string(),
    });
    h.send(AppIntent::PlotRequested);
}

fn plotted_expressions(h: &Harness) -> Vec<String> {
    h.board
        .calls
        .iter()
        .filter_map(|c| match c {
            BoardCall::CreateFunction { expression } => Some(expression.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_plot_normalizes_input_and_records_entry() {
    let mut h = Harness::new();

    plot(&mut h, "2x");

    assert_eq!(plotted_expressions(&h), vec!["2*x".to_string()]);
    let entry = h.state.history.iter().next().expect("Funktions-Eintrag");
    assert_eq!(
        entry.kind,
        EntryKind::Function {
            input: "2x".into(),
            normalized: "2*x".into(),
        }
    );
    assert_eq!(entry.name, "f(x) = 2x");
    assert!(h.state.ui.expression_input.is_empty());
    assert!(h.state.ui.alert.is_none());
}

#[test]
fn test_plotter_hands_normalized_notation_to_the_board() {
    let mut h = Harness::new();

    plot(&mut h, "x²");
    plot(&mut h, "3(x+1)");
    plot(&mut h, "sin(pi*x)");
    plot(&mut h, "x^2+1");

    assert_eq!(
        plotted_expressions(&h),
        vec![
            "x^2".to_string(),
            "3*(x+1)".to_string(),
            "sin((3.14159265358979)*x)".to_string(),
            "x^2+1".to_string(),
        ]
    );
    assert_eq!(h.state.history.len(), 4);
}

#[test]
fn test_rejected_expression_raises_alert_and_keeps_input() {
    let mut h = Harness::new();

    plot(&mut h, "2x+");

    assert!(h.state.history.is_empty());
    assert_eq!(h.state.ui.expression_input, "2x+");
    let alert = h.state.ui.alert.clone().expect("Fehlermeldung erwartet");
    assert!(alert.contains("\"2x+\""));
    assert!(alert.contains("\"2*x+\""));

    h.send(AppIntent::AlertDismissed);
    assert!(h.state.ui.alert.is_none());
}

#[test]
fn test_alert_follows_active_language() {
    let mut h = Harness::new();
    h.send(AppIntent::LanguageSelected {
        language: Language::English,
    });

    plot(&mut h, "sin(");

    let alert = h.state.ui.alert.clone().expect("Fehlermeldung erwartet");
    assert!(alert.starts_with("Could not plot function"));
}

#[test]
fn test_blank_input_is_a_no_op() {
    let mut h = Harness::new();

    plot(&mut h, "   ");

    assert!(plotted_expressions(&h).is_empty());
    assert!(h.state.history.is_empty());
    assert!(h.state.ui.alert.is_none());
}

#[test]
fn test_function_entries_survive_line_deletion_and_relabel() {
    let mut h = Harness::new();
    plot(&mut h, "x");
    h.send(AppIntent::LineModeRequested);
    h.click(0.0, 0.0);
    h.click(1.0, 2.0);
    let ids: Vec<_> = h.state.history.iter().map(|e| e.id).collect();

    h.send(AppIntent::HistoryEntryDeleteRequested { id: ids[1] });
    h.send(AppIntent::LanguageSelected {
        language: Language::English,
    });

    let names: Vec<_> = h.state.history.iter().map(|e| e.name.clone()).collect();
    assert_eq!(names, vec!["f(x) = x".to_string()]);
}

#[test]
fn test_multi_argument_functions_reach_the_board() {
    let mut h = Harness::new();

    plot(&mut h, "max(2x, 1)");
    plot(&mut h, "pow(x,3) - cbrt(x)");

    assert_eq!(
        plotted_expressions(&h),
        vec!["max(2*x, 1)".to_string(), "pow(x,3) - cbrt(x)".to_string()]
    );
    assert_eq!(h.state.history.len(), 2);
    assert!(h.state.ui.alert.is_none());
}
