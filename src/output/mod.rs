//! Output encoders for inspecting canvases outside a window.

mod terminal;

pub use terminal::{TerminalEncoder, TerminalMode};
