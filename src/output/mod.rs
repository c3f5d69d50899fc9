//! Output rendering for CLI results

use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tabled::settings::{object::Rows, Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::cli::OutputFormat;
use crate::error::Result;

/// Envelope for `--format json`: the rows plus response metadata.
#[derive(Debug, Serialize)]
struct JsonEnvelope<'a, T> {
    data: &'a [T],
    meta: Meta,
}

#[derive(Debug, Serialize)]
struct Meta {
    timestamp: String,
    version: &'static str,
}

/// Render display rows in the requested format.
///
/// Tables get rounded borders with a centered header row; JSON is pretty
/// printed inside a `{data, meta}` envelope. Callers handle the empty case
/// themselves, with a message specific to what was listed.
pub fn render<T: Tabled + Serialize>(format: OutputFormat, rows: &[T]) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let mut table = Table::new(rows);
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            Ok(table.to_string())
        }
        OutputFormat::Json => {
            let envelope = JsonEnvelope {
                data: rows,
                meta: Meta {
                    timestamp: Utc::now().to_rfc3339(),
                    version: env!("CARGO_PKG_VERSION"),
                },
            };
            Ok(serde_json::to_string_pretty(&envelope)?)
        }
    }
}

/// Spinner shown while an API call is in flight, so loading is visibly
/// distinct from an empty result.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
