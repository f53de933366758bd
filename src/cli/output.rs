use std::io::Write;

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::OutputMode;
use crate::error::AppError;

/// Placeholder shown for any value the device did not report.
pub const UNKNOWN: &str = "unknown";

pub fn write_json<W: Write>(out: &mut W, value: &serde_json::Value) -> Result<(), AppError> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

pub fn write_table<W: Write, T: Tabled>(out: &mut W, data: &[T]) -> Result<(), AppError> {
    let table = Table::new(data).with(Style::rounded()).to_string();
    writeln!(out, "{}", table)?;
    Ok(())
}

pub fn print_error(err: &AppError, mode: OutputMode) {
    match mode {
        OutputMode::Json => eprintln!(
            "{}",
            serde_json::to_string_pretty(&err.to_json()).unwrap_or_default()
        ),
        OutputMode::Text | OutputMode::Table => {
            eprintln!("Error: {}", err);
            if let Some(body) = err.response_body().filter(|b| !b.is_empty()) {
                eprintln!("Response: {}", body);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "ROOM")]
        room: String,
    }

    #[test]
    fn test_write_json_is_pretty() {
        let mut out = Vec::new();
        write_json(&mut out, &serde_json::json!({"a": 1})).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn test_write_table_has_header_and_rows() {
        let mut out = Vec::new();
        write_table(
            &mut out,
            &[Row {
                room: "Hallway".into(),
            }],
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("ROOM"));
        assert!(text.contains("Hallway"));
    }
}
