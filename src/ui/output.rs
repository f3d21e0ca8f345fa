//! Message helpers for the interactive menu.
//!
//! Every helper writes to a caller-supplied sink so the menu can be driven
//! against an in-memory buffer in tests.

use crate::ui::{theme, Icons};
use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn header<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Icons::DATABASE, text.style(theme().heading))
}

pub fn success<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Icons::CHECK, label.style(theme().done))
}

pub fn error<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Icons::CROSS, label.style(theme().rejected))
}

pub fn warn<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    writeln!(out, "{} {}", Icons::WARN, label.style(theme().notice))
}

pub fn info<W: Write>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "{} {}: {}", Icons::INFO, label.style(theme().label), value)
}

pub fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "━{}━", title.style(theme().heading))
}

pub fn muted(text: &str) -> String {
    text.style(theme().empty).to_string()
}
