//! Styling helpers for terminal output.
//!
//! The [`GameStyle`] trait provides a set of convenience methods for applying
//! ANSI styling via the `colored` crate. Implementations for `&str` and
//! `String` are provided so string literals can be styled directly.

use colored::{ColoredString, Colorize};
use textwrap::{Options, termwidth};

/// Convenience trait for applying color and style to text output.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn room_style(&self) -> ColoredString;
    fn clue_style(&self) -> ColoredString;
    fn description_style(&self) -> ColoredString;
    fn option_key_style(&self) -> ColoredString;
    fn suspect_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn sustained_style(&self) -> ColoredString;
    fn insufficient_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
    fn room_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10).underline()
    }
    fn clue_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn description_style(&self) -> ColoredString {
        self.italic().truecolor(102, 208, 250)
    }
    fn option_key_style(&self) -> ColoredString {
        self.bold().truecolor(110, 220, 110)
    }
    fn suspect_style(&self) -> ColoredString {
        self.truecolor(13, 130, 60).underline()
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(150, 150, 150)
    }
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn sustained_style(&self) -> ColoredString {
        self.bold().truecolor(220, 40, 220)
    }
    fn insufficient_style(&self) -> ColoredString {
        self.italic().truecolor(200, 50, 50)
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn room_style(&self) -> ColoredString {
        self.as_str().room_style()
    }
    fn clue_style(&self) -> ColoredString {
        self.as_str().clue_style()
    }
    fn description_style(&self) -> ColoredString {
        self.as_str().description_style()
    }
    fn option_key_style(&self) -> ColoredString {
        self.as_str().option_key_style()
    }
    fn suspect_style(&self) -> ColoredString {
        self.as_str().suspect_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn sustained_style(&self) -> ColoredString {
        self.as_str().sustained_style()
    }
    fn insufficient_style(&self) -> ColoredString {
        self.as_str().insufficient_style()
    }
}

/// Wrapping options for narration at the current terminal width.
pub fn normal_block() -> Options<'static> {
    Options::new(termwidth().min(100))
}

/// Wrapping options for indented list entries.
pub fn indented_block() -> Options<'static> {
    normal_block().initial_indent("   ").subsequent_indent("     ")
}
