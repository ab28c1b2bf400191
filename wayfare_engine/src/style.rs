//! Styling helpers for terminal output.
//!
//! [`GameStyle`] is implemented for anything that reads as a string, so both
//! literals and owned names can be styled in place.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn item_style(&self) -> ColoredString;
    fn room_style(&self) -> ColoredString;
    fn room_titlebar_style(&self) -> ColoredString;
    fn exit_style(&self) -> ColoredString;
    fn action_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    /// Wraps the text in square brackets, e.g. `[take]`.
    fn section_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
}

impl<T: AsRef<str> + ?Sized> GameStyle for T {
    fn item_style(&self) -> ColoredString {
        self.as_ref().truecolor(220, 180, 40)
    }
    fn room_style(&self) -> ColoredString {
        self.as_ref().truecolor(223, 77, 10)
    }
    fn room_titlebar_style(&self) -> ColoredString {
        self.room_style().bold().underline()
    }
    fn exit_style(&self) -> ColoredString {
        self.as_ref().italic().truecolor(110, 220, 110)
    }
    fn action_style(&self) -> ColoredString {
        self.as_ref().dimmed().truecolor(102, 208, 250)
    }
    fn error_style(&self) -> ColoredString {
        self.as_ref().truecolor(230, 30, 30)
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_ref().underline()
    }
    fn section_style(&self) -> ColoredString {
        format!("[{}]", self.as_ref()).truecolor(75, 80, 75)
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_ref().truecolor(150, 150, 150)
    }
}
