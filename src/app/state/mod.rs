//! Application State — zentrale Datenhaltung.

mod app_state;
mod dialogs;
mod interaction;
mod selection;
mod view;

pub use app_state::AppState;
pub use dialogs::{PromptTarget, UiState};
pub use interaction::{DragMode, InteractionState};
pub use selection::SelectionState;
pub use view::ViewState;
