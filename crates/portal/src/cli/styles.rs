//! Styles for the portal CLI.
//!
//! Renderers refer to styles by meaning (a header, a timestamp, a muted
//! summary line), never by color. All styles are built once through
//! `once_cell::sync::Lazy`. `console` drops the escape codes by itself when
//! output is not a terminal, so piped output stays plain.

use console::Style;
use once_cell::sync::Lazy;

pub static HEADER: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());

pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(245));

pub static TIME: Lazy<Style> = Lazy::new(|| Style::new().color256(245).italic());

/// Option values and config keys.
pub static KEY: Lazy<Style> = Lazy::new(|| Style::new().yellow());

pub static EMPTY: Lazy<Style> = Lazy::new(|| Style::new().dim());
