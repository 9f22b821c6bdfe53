//! Clema-Editor.
//!
//! Desktop-Editor für Verdrahtungsskizzen einer Klemmenreihe mit
//! gekrümmten Verbindungen und freien Beschriftungen.

use clema_editor::persistence::FileStore;
use clema_editor::{ui, AppController, AppIntent, AppState, BlockCount, EditorOptions};
use eframe::egui;

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

        log::info!("Clema-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1360.0, 720.0])
                .with_title("Clema-Editor"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Clema-Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Laufende Bearbeitung einer Klemmenreihe
struct Session {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    prompt: ui::DialogPrompt,
}

impl Session {
    fn open(count: BlockCount, options: EditorOptions) -> Self {
        let store = FileStore::new(options.store_dir());
        let state = AppState::open(count, options, Box::new(store));
        let prompt = ui::DialogPrompt::new();
        Self {
            state,
            controller: AppController::with_prompt(Box::new(prompt.clone())),
            input: ui::InputState::new(),
            prompt,
        }
    }
}

enum Phase {
    /// Abfrage der Klemmenanzahl
    Startup(ui::StartupScreen),
    /// Editor mit geöffneter Sitzung
    Editing(Box<Session>),
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    phase: Phase,
    options: EditorOptions,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden, beim ersten Start Standardwerte ablegen
        let config_path = EditorOptions::config_path();
        let options = EditorOptions::load_or_create(&config_path);

        Self {
            phase: Phase::Startup(ui::StartupScreen::new()),
            options,
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let opened = match &mut self.phase {
            Phase::Startup(screen) => screen.show(ctx),
            Phase::Editing(session) => {
                let events = session.collect_ui_events(ctx);
                let has_events = !events.is_empty();
                session.process_events(events);
                if has_events || session.prompt.is_open() {
                    ctx.request_repaint();
                }
                None
            }
        };

        if let Some(count) = opened {
            self.phase = Phase::Editing(Box::new(Session::open(count, self.options.clone())));
            ctx.request_repaint();
        }
    }
}

impl Session {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        let prompt_open = self.prompt.is_open();
        events.extend(ui::render_toolbar(ctx, &self.state, !prompt_open));
        events.extend(ui::handle_file_dialogs(&mut self.state.ui));
        events.extend(ui::show_clear_confirm(ctx, &self.state.ui));
        events.extend(ui::show_json_view(ctx, &self.state));
        events.extend(self.prompt.show(ctx));

        let modal_open = self.prompt.is_open() || self.state.ui.show_clear_confirm;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                if !modal_open {
                    events.extend(self.input.collect_canvas_events(
                        ui,
                        &response,
                        self.state.selected_connection().is_some(),
                    ));
                }

                let scene = self.controller.build_render_scene(&self.state);
                let list = clema_editor::render::draw(&scene);
                ui::paint_canvas(&ui.painter_at(rect), rect, &list);
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
                self.state.ui.status_message = Some(format!("Fehler: {}", e));
            }
        }
    }
}
