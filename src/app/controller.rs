//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::core::Board;

/// Orchestriert UI-Events und Use-Cases auf AppState und Zeichenfläche.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        board: &mut dyn Board,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, board, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf AppState und Zeichenfläche aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        board: &mut dyn Board,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Konstruktion ===
            AppCommand::EnterPointMode => handlers::construction::enter_point_mode(state),
            AppCommand::EnterLineMode => handlers::construction::enter_line_mode(state),
            AppCommand::EnterCircleMode => handlers::construction::enter_circle_mode(state),
            AppCommand::PlacePoint { world_pos } => {
                handlers::construction::place_point(state, board, world_pos)
            }
            AppCommand::ClearBoard => handlers::construction::clear_board(state, board),
            AppCommand::SetActiveColor { color } => {
                handlers::construction::set_active_color(state, color)
            }

            // === Funktionsplotter ===
            AppCommand::SetExpressionInput { text } => {
                handlers::plotter::set_expression_input(state, text)
            }
            AppCommand::PlotFunction { input } => {
                handlers::plotter::plot_function(state, board, &input)
            }
            AppCommand::DismissAlert => handlers::plotter::dismiss_alert(state),

            // === Skalierung & Ansicht ===
            AppCommand::SetXScale { value } => handlers::view::set_x_scale(state, board, value),
            AppCommand::SetYScale { value } => handlers::view::set_y_scale(state, board, value),
            AppCommand::ResetScale => handlers::view::reset_scale(state, board),
            AppCommand::ResizeSurface { size } => {
                handlers::view::resize_surface(state, board, size)
            }
            AppCommand::PanView { delta_world } => handlers::view::pan(board, delta_world),
            AppCommand::ZoomView {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(board, factor, focus_world),

            // === Historie ===
            AppCommand::HighlightEntry { id, highlighted } => {
                handlers::history::highlight_entry(board, id, highlighted)
            }
            AppCommand::SetHoveredEntry { id } => handlers::history::set_hovered_entry(state, id),
            AppCommand::DeleteEntry { id } => handlers::history::delete_entry(state, board, id),
            AppCommand::SetLanguage { language } => {
                handlers::history::set_language(state, language)
            }
        }

        Ok(())
    }
}
