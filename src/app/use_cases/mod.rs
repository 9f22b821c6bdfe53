//! Use-Cases: Anwendungslogik ohne UI-Abhängigkeiten.
//!
//! Jeder Use-Case mutiert den `AppState` und speichert danach den Zustand.

pub mod editing;
pub mod file_io;
pub mod interaction;
pub mod persistence;
pub mod prompt;
pub mod selection;
pub mod viewport;
