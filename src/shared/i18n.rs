//! Übersetzungstabelle der Oberfläche (Portugiesisch / Englisch).
//!
//! Jeder UI-Text ist eine Variante von [`Message`]; parametrisierte Texte
//! tragen ihre Argumente direkt. `Language::text` ist ein erschöpfender
//! Match, fehlende Übersetzungen fallen so schon beim Kompilieren auf.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unterstützte Oberflächensprachen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    #[serde(alias = "pt")]
    Portuguese,
    #[serde(alias = "en")]
    English,
}

impl Language {
    /// Alle Sprachen in Anzeigereihenfolge des Sprachwählers.
    pub const ALL: [Language; 2] = [Language::Portuguese, Language::English];

    /// Kurzcode (`pt` / `en`).
    pub fn code(self) -> &'static str {
        match self {
            Language::Portuguese => "pt",
            Language::English => "en",
        }
    }

    /// Übersetzt eine Nachricht in diese Sprache.
    pub fn text(self, message: Message<'_>) -> String {
        match self {
            Language::Portuguese => portuguese(message),
            Language::English => english(message),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Alle übersetzbaren Texte der Oberfläche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message<'a> {
    SidebarTitle,
    SidebarSubtitle,

    // ── Eingabeaufforderungen ───────────────────────────────────
    /// Punkt `n` von 3 für den Kreis wählen (1-basiert)
    PromptSelectCirclePoint(usize),
    /// Punkt `n` von 2 für die Linie wählen (1-basiert)
    PromptSelectLinePoint(usize),
    PromptCreatePoint,
    PromptDefault,

    // ── Steuerung ───────────────────────────────────────────────
    ControlsTitle,
    ControlsCreatePoint,
    ControlsDrawLine,
    ControlsDrawCircle,
    ControlsClearBoard,

    StyleTitle,

    // ── Funktionsplotter ────────────────────────────────────────
    PlotterTitle,
    PlotterLabel,
    PlotterPlaceholder,
    PlotterButton,
    PlotterHint,
    /// Fehlermeldung mit Originaleingabe und normalisiertem Ausdruck
    PlotterErrorAlert {
        input: &'a str,
        normalized: &'a str,
    },

    // ── Achsen-Skalierung ───────────────────────────────────────
    ScaleTitle,
    ScaleReset,
    ScaleXAxis,
    ScaleYAxis,

    // ── Historie ────────────────────────────────────────────────
    HistoryTitle,
    HistoryEmpty,
    HistoryPoint {
        x: f64,
        y: f64,
    },
    HistoryLine,
    HistoryCircle,
    HistoryFunction(&'a str),
    DeleteLabel(&'a str),

    LanguageSelectorTitle,
    /// Name einer Sprache in ihrer eigenen Schreibweise
    LanguageName(Language),

    AlertOk,
}

fn portuguese(message: Message<'_>) -> String {
    match message {
        Message::SidebarTitle => "Geometria Demo".into(),
        Message::SidebarSubtitle => "Demo de geometria com egui".into(),
        Message::PromptSelectCirclePoint(n) => {
            format!("Selecione o ponto {n} de 3 para o círculo.")
        }
        Message::PromptSelectLinePoint(n) => format!("Selecione o ponto {n} de 2 para a linha."),
        Message::PromptCreatePoint => "Clique na grade para criar um ponto.".into(),
        Message::PromptDefault => "Selecione um objeto ou escolha uma ação.".into(),
        Message::ControlsTitle => "Controles".into(),
        Message::ControlsCreatePoint => "Criar Ponto".into(),
        Message::ControlsDrawLine => "Desenhar Linha (2 pontos)".into(),
        Message::ControlsDrawCircle => "Desenhar Círculo (3 pontos)".into(),
        Message::ControlsClearBoard => "Limpar Painel".into(),
        Message::StyleTitle => "Cor do Objeto".into(),
        Message::PlotterTitle => "Plotar Função".into(),
        Message::PlotterLabel => "f(x) =".into(),
        Message::PlotterPlaceholder => "ex: x^2 / 2 - 1".into(),
        Message::PlotterButton => "Plotar Função".into(),
        Message::PlotterHint => {
            "Use `^` para potências. Constantes e, pi, phi estão disponíveis. ex: `sin(pi*x)`"
                .into()
        }
        Message::PlotterErrorAlert { input, normalized } => format!(
            "Não foi possível plotar a função \"{input}\".\n\
             Foi interpretada como \"{normalized}\", que é inválida.\n\
             Por favor, verifique erros de sintaxe."
        ),
        Message::ScaleTitle => "Escala dos Eixos".into(),
        Message::ScaleReset => "Redefinir".into(),
        Message::ScaleXAxis => "Eixo X".into(),
        Message::ScaleYAxis => "Eixo Y".into(),
        Message::HistoryTitle => "Histórico".into(),
        Message::HistoryEmpty => "Nenhum objeto criado ainda.".into(),
        Message::HistoryPoint { x, y } => format!("Ponto ({x:.2}, {y:.2})"),
        Message::HistoryLine => "Linha".into(),
        Message::HistoryCircle => "Círculo".into(),
        Message::HistoryFunction(input) => format!("f(x) = {input}"),
        Message::DeleteLabel(name) => format!("Excluir {name}"),
        Message::LanguageSelectorTitle => "Idioma".into(),
        Message::LanguageName(language) => language_name(language).into(),
        Message::AlertOk => "OK".into(),
    }
}

fn english(message: Message<'_>) -> String {
    match message {
        Message::SidebarTitle => "Geometry Pad".into(),
        Message::SidebarSubtitle => "Geometry demo built with egui".into(),
        Message::PromptSelectCirclePoint(n) => format!("Select point {n} of 3 for the circle."),
        Message::PromptSelectLinePoint(n) => format!("Select point {n} of 2 for the line."),
        Message::PromptCreatePoint => "Click on the grid to create a point.".into(),
        Message::PromptDefault => "Select an object or choose an action.".into(),
        Message::ControlsTitle => "Controls".into(),
        Message::ControlsCreatePoint => "Create Point".into(),
        Message::ControlsDrawLine => "Draw Line (2 points)".into(),
        Message::ControlsDrawCircle => "Draw Circle (3 points)".into(),
        Message::ControlsClearBoard => "Clear Board".into(),
        Message::StyleTitle => "Object Color".into(),
        Message::PlotterTitle => "Plot Function".into(),
        Message::PlotterLabel => "f(x) =".into(),
        Message::PlotterPlaceholder => "e.g., x^2 / 2 - 1".into(),
        Message::PlotterButton => "Plot Function".into(),
        Message::PlotterHint => {
            "Use `^` for powers. Constants e, pi, phi are available. e.g., `sin(pi*x)`".into()
        }
        Message::PlotterErrorAlert { input, normalized } => format!(
            "Could not plot function \"{input}\".\n\
             It was interpreted as \"{normalized}\", which is invalid.\n\
             Please check for syntax errors."
        ),
        Message::ScaleTitle => "Axis Scale".into(),
        Message::ScaleReset => "Reset".into(),
        Message::ScaleXAxis => "X-Axis".into(),
        Message::ScaleYAxis => "Y-Axis".into(),
        Message::HistoryTitle => "History".into(),
        Message::HistoryEmpty => "No objects created yet.".into(),
        Message::HistoryPoint { x, y } => format!("Point ({x:.2}, {y:.2})"),
        Message::HistoryLine => "Line".into(),
        Message::HistoryCircle => "Circle".into(),
        Message::HistoryFunction(input) => format!("f(x) = {input}"),
        Message::DeleteLabel(name) => format!("Delete {name}"),
        Message::LanguageSelectorTitle => "Language".into(),
        Message::LanguageName(language) => language_name(language).into(),
        Message::AlertOk => "OK".into(),
    }
}

/// Sprachnamen werden nicht übersetzt.
fn language_name(language: Language) -> &'static str {
    match language {
        Language::Portuguese => "Português",
        Language::English => "English",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_language_is_portuguese() {
        assert_eq!(Language::default(), Language::Portuguese);
    }

    #[test]
    fn prompts_carry_the_point_number() {
        assert_eq!(
            Language::English.text(Message::PromptSelectLinePoint(2)),
            "Select point 2 of 2 for the line."
        );
        assert_eq!(
            Language::Portuguese.text(Message::PromptSelectCirclePoint(1)),
            "Selecione o ponto 1 de 3 para o círculo."
        );
    }

    #[test]
    fn point_names_use_two_decimals() {
        let message = Message::HistoryPoint { x: 1.0, y: -2.345 };
        assert_eq!(Language::English.text(message), "Point (1.00, -2.35)");
        assert_eq!(Language::Portuguese.text(message), "Ponto (1.00, -2.35)");
    }

    #[test]
    fn plot_error_contains_both_expressions() {
        let message = Message::PlotterErrorAlert {
            input: "2x+",
            normalized: "2*x+",
        };
        for language in Language::ALL {
            let text = language.text(message);
            assert!(text.contains("\"2x+\""), "{language}: {text}");
            assert!(text.contains("\"2*x+\""), "{language}: {text}");
            assert_eq!(text.lines().count(), 3);
        }
    }

    #[test]
    fn language_names_are_not_translated() {
        for language in Language::ALL {
            assert_eq!(
                language.text(Message::LanguageName(Language::Portuguese)),
                "Português"
            );
            assert_eq!(
                language.text(Message::LanguageName(Language::English)),
                "English"
            );
        }
    }

    #[test]
    fn language_deserializes_from_code_or_name() {
        #[derive(Deserialize)]
        struct Wrapper {
            language: Language,
        }
        let parsed: Wrapper = toml::from_str("language = \"en\"").unwrap();
        assert_eq!(parsed.language, Language::English);
        let parsed: Wrapper = toml::from_str("language = \"portuguese\"").unwrap();
        assert_eq!(parsed.language, Language::Portuguese);
    }
}
