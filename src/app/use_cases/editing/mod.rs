//! Use-Cases für das Bearbeiten von Verbindungen und Beschriftungen.

mod clear;
mod color;
mod connect;
mod control_point;
mod delete;
mod labels;

pub use clear::clear_all;
pub use color::{request_connection_color, set_connection_color};
pub use connect::{create_connection, retarget_endpoint};
pub use control_point::move_control_point;
pub use delete::delete_selected_connection;
pub use labels::{add_label, move_label, request_label_edit, request_new_label, set_label_text};
