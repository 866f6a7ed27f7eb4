//! Terminal rendering for conversion results, tables, and status lines.
//!
//! The mode is fixed once at startup from the global flags. Human mode uses
//! colored markers on stdout, JSON mode writes one `{"type", "payload"}`
//! object per line, and quiet mode prints conversion results and tables only.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::ConversionRecord;

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Human,
    Json,
    Quiet,
}

impl Mode {
    /// `--json` wins over `--quiet`.
    #[must_use]
    pub const fn from_flags(json: bool, quiet: bool) -> Self {
        match (json, quiet) {
            (true, _) => Mode::Json,
            (false, true) => Mode::Quiet,
            (false, false) => Mode::Human,
        }
    }
}

static MODE: OnceLock<Mode> = OnceLock::new();

/// Set the output mode. Only the first call has an effect.
pub fn configure(mode: Mode) {
    let _ = MODE.set(mode);
}

fn mode() -> Mode {
    MODE.get().copied().unwrap_or_default()
}

#[must_use]
pub fn is_json() -> bool {
    mode() == Mode::Json
}

fn emit<T: Serialize>(kind: &str, payload: T) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// `1 Kilometer = 1000 Meter`
#[must_use]
pub fn describe(record: &ConversionRecord) -> String {
    let c = &record.conversion;
    format!(
        "{} {} = {} {}",
        c.from_amount, c.from_label, c.to_amount, c.to_label
    )
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a converted value. Plain modes print the value alone, or an empty
/// line when there is none.
pub fn conversion(value: &str, payload: Value) {
    match mode() {
        Mode::Json => emit("result", payload),
        Mode::Human | Mode::Quiet => println!("{value}"),
    }
}

/// Confirm a history write.
pub fn recorded(record: &ConversionRecord) {
    match mode() {
        Mode::Json => emit("recorded", record),
        Mode::Quiet => {}
        Mode::Human => println!(
            "  {} #{} {}",
            "recorded".green(),
            record.id,
            describe(record).dimmed()
        ),
    }
}

/// Report a finished action such as a cleared partition.
pub fn done(message: &str) {
    match mode() {
        Mode::Json => emit("done", json!({ "message": message })),
        Mode::Quiet => {}
        Mode::Human => println!("  {} {message}", "✓".green()),
    }
}

/// Non-fatal problem. Goes to stderr outside JSON mode.
pub fn warn(message: &str) {
    match mode() {
        Mode::Json => emit("warning", json!({ "message": message })),
        Mode::Human | Mode::Quiet => eprintln!("  {} {message}", "⚠".yellow()),
    }
}

/// Fatal error, always on stderr.
pub fn error(message: &str) {
    match mode() {
        Mode::Json => eprintln!("{}", json!({ "type": "error", "payload": { "message": message } })),
        Mode::Human | Mode::Quiet => eprintln!("  {} {message}", "×".red()),
    }
}

/// Bold title above a table or a group of items.
pub fn heading(title: &str) {
    if mode() == Mode::Human {
        println!();
        println!("{}", title.bold());
    }
}

/// A rendered table. Printed in quiet mode too; JSON callers serialize rows
/// themselves.
pub fn table(rendered: impl Display) {
    if !is_json() {
        println!("{}", indent(&rendered.to_string()));
    }
}

/// `label  value` line under a heading.
pub fn item(label: &str, value: impl Display) {
    if mode() == Mode::Human {
        println!("  {:<12} {}", label.dimmed(), value);
    }
}

/// Dimmed aside, human mode only.
pub fn note(message: &str) {
    if mode() == Mode::Human {
        println!("  {}", message.dimmed());
    }
}

/// Print a document as-is, for listings in JSON mode.
pub fn document(value: &Value) {
    println!("{value}");
}
