//! Core-Domänentypen: Klemmen, Anschlüsse, Verbindungen, Beschriftungen, Viewport.

pub mod block_count;
pub mod connection;
pub mod connector;
pub mod graph;
pub mod hit_test;
pub mod label;
pub mod viewport;

pub use block_count::{BlockCount, BlockCountError};
pub use connection::{default_control_point, Connection, ConnectionEnd};
pub use connector::{BlockLayout, Connector, ConnectorModel, Rail};
pub use graph::{ConnectionGraph, ConnectionRejected, CurveStyle};
pub use hit_test::{HitParams, HitTester};
pub use label::{sanitize_text, text_width, Label, LabelLimitReached, LabelStore};
pub use viewport::{PanGrab, Viewport, WheelDirection, ZoomLimits};
