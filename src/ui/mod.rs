//! UI-Layer mit egui: Startbildschirm, Toolbar, Zeichenfläche, Dialoge.
//!
//! Sammelt Benutzereingaben als `AppIntent`s; Zustandsänderungen laufen
//! ausschließlich über den Controller.

pub mod canvas;
pub mod dialogs;
pub mod input;
mod keyboard;
pub mod prompt;
pub mod startup;
pub mod status;
pub mod toolbar;

pub use canvas::paint as paint_canvas;
pub use dialogs::{handle_file_dialogs, show_clear_confirm, show_json_view};
pub use input::InputState;
pub use prompt::DialogPrompt;
pub use startup::StartupScreen;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
