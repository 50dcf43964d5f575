//! Seitenleiste: Steuerung, Stil, Funktionsplotter, Skalierung, Historie.

use crate::app::{AppIntent, AppState, ConstructionMode};
use crate::core::Color;
use crate::render::color32;
use crate::shared::{Language, Message};

const SWATCH_SIZE: f32 = 22.0;
const HISTORY_MAX_HEIGHT: f32 = 240.0;

/// Rendert die Seitenleiste und gibt erzeugte Events zurück.
pub fn render_sidebar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::left("sidebar")
        .default_width(280.0)
        .min_width(240.0)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(state.text(Message::SidebarTitle));
                ui.label(egui::RichText::new(state.text(Message::SidebarSubtitle)).weak());
                ui.separator();

                ui.label(egui::RichText::new(state.prompt_text()).strong());
                ui.separator();

                render_controls(ui, state, &mut events);
                ui.separator();
                render_style(ui, state, &mut events);
                ui.separator();
                render_plotter(ui, state, &mut events);
                ui.separator();
                render_scale(ui, state, &mut events);
                ui.separator();
                render_history(ui, state, &mut events);
                ui.separator();
                render_language_selector(ui, state, &mut events);
            });
        });

    events
}

// ── Steuerung ───────────────────────────────────────────────────────

fn render_controls(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label(egui::RichText::new(state.text(Message::ControlsTitle)).strong());

    let mode = state.construction.mode();
    ui.horizontal_wrapped(|ui| {
        let point = egui::Button::new(state.text(Message::ControlsCreatePoint))
            .selected(matches!(mode, ConstructionMode::PlacingPoint));
        if ui.add(point).clicked() {
            events.push(AppIntent::PointModeRequested);
        }

        let line = egui::Button::new(state.text(Message::ControlsDrawLine))
            .selected(matches!(mode, ConstructionMode::BuildingLine { .. }));
        if ui.add(line).clicked() {
            events.push(AppIntent::LineModeRequested);
        }

        let circle = egui::Button::new(state.text(Message::ControlsDrawCircle))
            .selected(matches!(mode, ConstructionMode::BuildingCircle { .. }));
        if ui.add(circle).clicked() {
            events.push(AppIntent::CircleModeRequested);
        }
    });

    if ui.button(state.text(Message::ControlsClearBoard)).clicked() {
        events.push(AppIntent::ClearBoardRequested);
    }
}

// ── Stil ────────────────────────────────────────────────────────────

fn render_style(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label(egui::RichText::new(state.text(Message::StyleTitle)).strong());

    ui.horizontal_wrapped(|ui| {
        for &color in &state.options.palette {
            if color_swatch(ui, color, color == state.active_color).clicked() {
                events.push(AppIntent::ColorSelected { color });
            }
        }
    });
}

fn color_swatch(ui: &mut egui::Ui, color: Color, selected: bool) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::click());
    let painter = ui.painter();
    let radius = SWATCH_SIZE / 2.0 - 3.0;
    painter.circle_filled(rect.center(), radius, color32(color));
    if selected {
        painter.circle_stroke(
            rect.center(),
            radius + 2.0,
            egui::Stroke::new(2.0, ui.visuals().strong_text_color()),
        );
    } else if response.hovered() {
        painter.circle_stroke(
            rect.center(),
            radius + 1.0,
            egui::Stroke::new(1.0, ui.visuals().weak_text_color()),
        );
    }
    response.on_hover_text(color.to_hex())
}

// ── Funktionsplotter ────────────────────────────────────────────────

fn render_plotter(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label(egui::RichText::new(state.text(Message::PlotterTitle)).strong());
    ui.label(state.text(Message::PlotterLabel));

    let mut text = state.ui.expression_input.clone();
    let mut submit = false;
    ui.horizontal(|ui| {
        let edit = ui.add(
            egui::TextEdit::singleline(&mut text)
                .hint_text(state.text(Message::PlotterPlaceholder))
                .desired_width(160.0),
        );
        if edit.changed() {
            events.push(AppIntent::ExpressionEdited { text: text.clone() });
        }
        if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            submit = true;
        }
        if ui.button(state.text(Message::PlotterButton)).clicked() {
            submit = true;
        }
    });
    if submit {
        events.push(AppIntent::PlotRequested);
    }

    ui.label(egui::RichText::new(state.text(Message::PlotterHint)).small().weak());
}

// ── Achsen-Skalierung ───────────────────────────────────────────────

fn render_scale(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(state.text(Message::ScaleTitle)).strong());
        if ui.small_button(state.text(Message::ScaleReset)).clicked() {
            events.push(AppIntent::ScaleResetRequested);
        }
    });

    let opts = &state.options;
    let range = opts.scale_min..=opts.scale_max;

    let mut x = state.view.scale.x;
    ui.horizontal(|ui| {
        ui.label(state.text(Message::ScaleXAxis));
        let slider = egui::Slider::new(&mut x, range.clone())
            .step_by(opts.scale_step)
            .show_value(false);
        if ui.add(slider).changed() {
            events.push(AppIntent::XScaleChanged { value: x });
        }
        ui.monospace(format!("{:.1}x", state.view.scale.x));
    });

    let mut y = state.view.scale.y;
    ui.horizontal(|ui| {
        ui.label(state.text(Message::ScaleYAxis));
        let slider = egui::Slider::new(&mut y, range)
            .step_by(opts.scale_step)
            .show_value(false);
        if ui.add(slider).changed() {
            events.push(AppIntent::YScaleChanged { value: y });
        }
        ui.monospace(format!("{:.1}x", state.view.scale.y));
    });
}

// ── Historie ────────────────────────────────────────────────────────

fn render_history(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label(egui::RichText::new(state.text(Message::HistoryTitle)).strong());

    if state.history.is_empty() {
        ui.label(egui::RichText::new(state.text(Message::HistoryEmpty)).weak());
        if state.ui.hovered_entry.is_some() {
            events.push(AppIntent::HistoryEntryHovered { id: None });
        }
        return;
    }

    let mut hovered = None;
    egui::ScrollArea::vertical()
        .id_salt("history_scroll")
        .max_height(HISTORY_MAX_HEIGHT)
        .show(ui, |ui| {
            for entry in state.history.iter() {
                let row = ui.horizontal(|ui| {
                    let (dot, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().circle_filled(dot.center(), 5.0, color32(entry.color));

                    let label = if state.ui.hovered_entry == Some(entry.id) {
                        egui::RichText::new(&entry.name).strong()
                    } else {
                        egui::RichText::new(&entry.name)
                    };
                    ui.label(label);

                    let delete = ui
                        .small_button("✕")
                        .on_hover_text(state.text(Message::DeleteLabel(&entry.name)));
                    if delete.clicked() {
                        events.push(AppIntent::HistoryEntryDeleteRequested { id: entry.id });
                    }
                });
                if row.response.contains_pointer() {
                    hovered = Some(entry.id);
                }
            }
        });

    if hovered != state.ui.hovered_entry {
        events.push(AppIntent::HistoryEntryHovered { id: hovered });
    }
}

// ── Sprache ─────────────────────────────────────────────────────────

fn render_language_selector(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let current = state.ui.language;
    ui.horizontal(|ui| {
        ui.label(state.text(Message::LanguageSelectorTitle));
        for language in Language::ALL {
            let label = state.text(Message::LanguageName(language));
            if ui.selectable_label(language == current, label).clicked() && language != current {
                events.push(AppIntent::LanguageSelected { language });
            }
        }
    });
}
