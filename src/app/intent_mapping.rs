//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasClicked { world_pos } => {
            if state.construction.allows_point_placement() {
                vec![AppCommand::PlacePoint { world_pos }]
            } else {
                Vec::new()
            }
        }
        AppIntent::CanvasPanned { delta_world } => vec![AppCommand::PanView { delta_world }],
        AppIntent::CanvasZoomed { steps, focus_world } => {
            if steps == 0.0 || !steps.is_finite() {
                return Vec::new();
            }
            let factor = state.options.scroll_zoom_step.powf(f64::from(steps));
            vec![AppCommand::ZoomView {
                factor,
                focus_world,
            }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::ResizeSurface { size }],

        AppIntent::PointModeRequested => vec![AppCommand::EnterPointMode],
        AppIntent::LineModeRequested => vec![AppCommand::EnterLineMode],
        AppIntent::CircleModeRequested => vec![AppCommand::EnterCircleMode],
        AppIntent::ClearBoardRequested => vec![AppCommand::ClearBoard],

        AppIntent::ColorSelected { color } => vec![AppCommand::SetActiveColor { color }],

        AppIntent::ExpressionEdited { text } => vec![AppCommand::SetExpressionInput { text }],
        AppIntent::PlotRequested => vec![AppCommand::PlotFunction {
            input: state.ui.expression_input.clone(),
        }],
        AppIntent::AlertDismissed => vec![AppCommand::DismissAlert],

        AppIntent::XScaleChanged { value } => vec![AppCommand::SetXScale { value }],
        AppIntent::YScaleChanged { value } => vec![AppCommand::SetYScale { value }],
        AppIntent::ScaleResetRequested => vec![AppCommand::ResetScale],

        AppIntent::HistoryEntryHovered { id } => {
            let previous = state.ui.hovered_entry;
            if previous == id {
                return Vec::new();
            }
            let mut commands = Vec::with_capacity(3);
            if let Some(old) = previous {
                commands.push(AppCommand::HighlightEntry {
                    id: old,
                    highlighted: false,
                });
            }
            if let Some(new) = id {
                commands.push(AppCommand::HighlightEntry {
                    id: new,
                    highlighted: true,
                });
            }
            commands.push(AppCommand::SetHoveredEntry { id });
            commands
        }
        AppIntent::HistoryEntryDeleteRequested { id } => {
            let mut commands = vec![AppCommand::DeleteEntry { id }];
            if state.ui.hovered_entry == Some(id) {
                commands.push(AppCommand::SetHoveredEntry { id: None });
            }
            commands
        }

        AppIntent::LanguageSelected { language } => vec![AppCommand::SetLanguage { language }],
    }
}
