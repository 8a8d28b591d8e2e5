//! # Rendering
//!
//! Turns API results into terminal text. Nothing here decides *what* is shown;
//! rows, options and configuration arrive fully computed from `portalapp`.
//!
//! ## Table Layout
//!
//! Each screen has a fixed set of columns picked from the serialized record.
//! Column widths are measured with `unicode-width` so names in any script line
//! up, and capped at [`MAX_COL_WIDTH`] with an ellipsis. Timestamps are shown
//! relative to now ("3 days ago", "in 2 weeks").

use super::styles::{EMPTY, HEADER, KEY, MUTED, TIME};
use chrono::{DateTime, Utc};
use portalapp::api::ListResult;
use portalapp::config::PortalConfig;
use portalapp::options::FilterOption;
use portalapp::screens::Screen;
use serde_json::Value;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MAX_COL_WIDTH: usize = 40;
const COL_GAP: &str = "  ";

fn columns(screen: Screen) -> &'static [&'static str] {
    match screen {
        Screen::Projects => &[
            "id",
            "title",
            "student",
            "status",
            "priority",
            "progress",
            "created_at",
        ],
        Screen::Proposals => &["id", "title", "student", "status", "submitted_at"],
        Screen::Users => &["id", "name", "email", "role", "department"],
        Screen::Files => &["id", "name", "owner", "category", "size_bytes", "uploaded_at"],
    }
}

fn is_time_column(column: &str) -> bool {
    column.ends_with("_at") || column == "deadline"
}

pub fn render_list(result: &ListResult, now: DateTime<Utc>) -> String {
    let mut out = String::new();

    if result.rows.is_empty() {
        out.push_str(&format!(
            "{}\n",
            EMPTY.apply_to(format!("No {} match the current filters.", result.screen))
        ));
    } else {
        let columns = columns(result.screen);
        let cells: Vec<Vec<String>> = result
            .rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .map(|column| format_cell(column, &row[*column], now))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                cells
                    .iter()
                    .map(|row| row[i].width())
                    .chain(std::iter::once(column.width()))
                    .max()
                    .unwrap_or(0)
                    .min(MAX_COL_WIDTH)
            })
            .collect();

        let header: Vec<String> = columns
            .iter()
            .zip(&widths)
            .map(|(column, width)| HEADER.apply_to(pad(column, *width)).to_string())
            .collect();
        out.push_str(header.join(COL_GAP).trim_end());
        out.push('\n');

        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .zip(columns.iter().zip(&widths))
                .map(|(cell, (column, width))| {
                    let text = pad(cell, *width);
                    if is_time_column(column) {
                        TIME.apply_to(text).to_string()
                    } else {
                        text
                    }
                })
                .collect();
            out.push_str(line.join(COL_GAP).trim_end());
            out.push('\n');
        }
    }

    let mut summary = format!(
        "{} of {} {}",
        result.rows.len(),
        result.total,
        result.screen
    );
    if result.active_filters > 0 {
        let noun = if result.active_filters == 1 {
            "filter"
        } else {
            "filters"
        };
        summary.push_str(&format!(", {} active {}", result.active_filters, noun));
    }
    out.push_str(&format!("{}\n", MUTED.apply_to(summary)));
    out
}

pub fn render_options(options: &[FilterOption]) -> String {
    let width = options
        .iter()
        .map(|o| o.value.width())
        .max()
        .unwrap_or(0)
        .min(MAX_COL_WIDTH);

    options
        .iter()
        .map(|o| {
            format!(
                "{}{}{}\n",
                KEY.apply_to(pad(&o.value, width)),
                COL_GAP,
                o.label
            )
        })
        .collect()
}

pub fn render_config(config: &PortalConfig, global_path: Option<&std::path::Path>) -> String {
    let data_file = config
        .data_file
        .as_ref()
        .map_or_else(|| "<unset>".to_string(), |p| p.display().to_string());

    let mut out = String::new();
    for (key, value) in [
        ("locale", config.locale.clone()),
        ("search_debounce_ms", config.search_debounce_ms.to_string()),
        ("data_file", data_file),
    ] {
        out.push_str(&format!("{} = {}\n", KEY.apply_to(key), value));
    }
    if let Some(path) = global_path {
        out.push_str(&format!(
            "{}\n",
            MUTED.apply_to(format!("global config: {}", path.display()))
        ));
    }
    out
}

pub fn render_json<T: serde::Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value).map(|mut s| {
        s.push('\n');
        s
    })
}

fn format_cell(column: &str, value: &Value, now: DateTime<Utc>) -> String {
    let text = match value {
        Value::Null => "-".to_string(),
        Value::String(s) if is_time_column(column) => DateTime::parse_from_rfc3339(s)
            .map(|ts| format_time(ts.with_timezone(&Utc), now))
            .unwrap_or_else(|_| s.clone()),
        Value::String(s) => s.clone(),
        Value::Number(n) if column == "size_bytes" => {
            n.as_u64().map_or_else(|| n.to_string(), format_size)
        }
        Value::Number(n) if column == "progress" => {
            format!("{}%", n.as_f64().unwrap_or_default().round())
        }
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().map_or_else(|| item.to_string(), str::to_string))
            .collect::<Vec<_>>()
            .join(", "),
        other => other.to_string(),
    };
    truncate_to_width(&text, MAX_COL_WIDTH)
}

fn format_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta = now.signed_duration_since(timestamp);
    match delta.to_std() {
        Ok(elapsed) => timeago::Formatter::new().convert(elapsed),
        Err(_) => {
            let mut formatter = timeago::Formatter::new();
            formatter.ago("");
            let ahead = (-delta).to_std().unwrap_or_default();
            format!("in {}", formatter.convert(ahead).trim_end())
        }
    }
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

fn pad(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
