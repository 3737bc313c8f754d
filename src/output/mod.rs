//! Text output for pixel lists.

mod terminal;

pub use terminal::{TerminalEncoder, TerminalMode};
