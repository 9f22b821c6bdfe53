//! Handler für Datei-Operationen (Import, Export, Bild-Export).

use crate::app::prompt::UserPrompt;
use crate::app::use_cases;
use crate::app::AppState;
use crate::render::ImageFormat;
use std::path::Path;

/// Öffnet den Import-Dialog.
pub fn request_import(state: &mut AppState) {
    use_cases::file_io::request_import(state);
}

/// Importiert eine JSON-Datei.
pub fn import_json(
    state: &mut AppState,
    prompt: &mut dyn UserPrompt,
    path: &Path,
) -> anyhow::Result<()> {
    use_cases::file_io::import_json_file(state, prompt, path)
}

/// Öffnet den JSON-Export-Dialog.
pub fn request_export_json(state: &mut AppState) {
    use_cases::file_io::request_export_json(state);
}

/// Schreibt den Zustand als JSON-Datei.
pub fn export_json(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    use_cases::file_io::export_json_file(state, path)
}

/// Öffnet den Bild-Export-Dialog.
pub fn request_export_image(state: &mut AppState, format: ImageFormat) {
    use_cases::file_io::request_export_image(state, format);
}

/// Schreibt die Zeichnung als Bild.
pub fn export_image(state: &mut AppState, path: &Path, format: ImageFormat) -> anyhow::Result<()> {
    use_cases::file_io::export_image_file(state, path, format)
}
