//! Output formatting
//!
//! - [`console::ConsoleFormatter`]: colored terminal rendering
//! - [`labels::Labels`]: localized interface strings

pub mod console;
pub mod labels;

/// Force colored output on or off for the whole process
pub fn set_color_enabled(enabled: bool) {
    if !enabled {
        colored::control::set_override(false);
    }
}
