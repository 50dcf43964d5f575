//! Geometry Pad.
//!
//! Interaktive Zeichenfläche für Punkte, Linien, Umkreise und
//! Funktionsgraphen mit egui.

use eframe::egui;
use geometry_pad::{render, ui, AppController, AppIntent, AppState, Board, PadOptions, SketchBoard};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Geometry Pad v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_min_inner_size([720.0, 480.0])
                .with_title("Geometry Pad"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Geometry Pad",
            options,
            Box::new(|_cc| Ok(Box::new(PadApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct PadApp {
    state: AppState,
    controller: AppController,
    board: SketchBoard,
    input: ui::InputState,
}

impl PadApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = PadOptions::config_path();
        let options = PadOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(options),
            controller: AppController::new(),
            board: SketchBoard::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for PadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events {
            ctx.request_repaint();
        }
    }
}

impl PadApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_sidebar(ctx, &self.state));
        events.extend(ui::show_alert(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let projection = render::Projection::new(self.board.view_window(), rect);
                events.extend(self.input.collect_canvas_events(ui, &response, &projection));

                let painter = ui.painter_at(rect);
                render::paint_board(&painter, rect, &self.board, &self.state.options);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self
                .controller
                .handle_intent(&mut self.state, &mut self.board, event)
            {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }
}
