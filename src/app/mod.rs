//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod prompt;
pub mod render_scene;
/// Application State
///
/// Verwaltet den Zustand einer Sitzung (Diagramm, View, Interaktion, Dialoge).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use prompt::{ColorRequest, NoPrompt, ScriptedPrompt, TextRequest, UserPrompt};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, DragMode, InteractionState, PromptTarget, SelectionState, UiState, ViewState,
};
