//! Clema-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod persistence;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use core::{
    BlockCount, BlockCountError, Connection, ConnectionEnd, ConnectionGraph, ConnectorModel,
    Label, LabelStore, Viewport,
};
pub use persistence::{DiagramDocument, KeyValueStore, MemoryStore};
pub use shared::{EditorOptions, RenderScene};
