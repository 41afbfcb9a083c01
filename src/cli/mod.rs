//! Console front end: menu loop, actions, and console backends.

pub mod commands;
pub mod console;
pub mod editor;
pub mod menu;

pub use console::{Console, StreamConsole, Tone};
pub use editor::LineEditor;
pub use menu::{run, MenuChoice};
