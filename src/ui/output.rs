//! Status lines for the command-line programs.
//!
//! Every printer writes to the given sink; the binaries pass stdout.
//! [`fatal`] also lands on stderr when stdout is redirected, so the reason
//! a run stopped is never lost in a captured report.

use crate::output::is_quiet;
use crate::ui::theme;
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Section banner: blank line, then `--- <title> ---`
pub fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("--- {} ---", title).style(theme().header.clone()))
}

/// Unstyled text, newline-terminated
pub fn line<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    write!(out, "{}", text)?;
    if !text.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

pub fn blank<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)
}

pub fn info<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    if is_quiet() {
        return Ok(());
    }
    writeln!(out, "{} {}", "INFO:".style(theme().info.clone()), label)
}

pub fn success<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    writeln!(out, "{}", label.style(theme().success.clone()))
}

pub fn warn<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    writeln!(out, "{}", label.style(theme().warn.clone()))
}

pub fn error<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    writeln!(out, "{}", label.style(theme().error.clone()))
}

pub fn fatal<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    writeln!(out, "{}", label.style(theme().error.clone()))?;
    if !console::Term::stdout().is_term() {
        eprintln!("{}", label);
    }
    Ok(())
}

pub fn hint<W: Write>(out: &mut W, label: &str) -> io::Result<()> {
    if is_quiet() {
        return Ok(());
    }
    writeln!(out, "{}", label.style(theme().dim.clone()))
}
