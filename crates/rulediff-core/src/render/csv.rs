//! CSV report renderer.
//!
//! One line per `(RuleDiff, PropertyDiff)` pair with the columns
//! `FieldName,ContactType,Property,OldValue,NewValue`.

use super::ReportOptions;
use crate::errors::{ExError, Result, RuleDiffError};
use crate::model::RuleDiff;
use std::io::Write;
use std::path::Path;

pub const CSV_HEADER: &str = "FieldName,ContactType,Property,OldValue,NewValue";

/// Escape one CSV field.
///
/// The value is wrapped in double quotes, with inner quotes doubled, only when
/// it contains a comma, a double quote or a line break. `None` renders empty.
pub fn csv_escape(value: Option<&str>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if value.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Render diffs as CSV text.
pub fn render_csv(diffs: &[RuleDiff], options: &ReportOptions) -> String {
    let eol = options.line_ending.as_str();
    let mut out = String::new();

    if options.include_header {
        out.push_str(CSV_HEADER);
        out.push_str(eol);
    }

    for diff in diffs {
        let field_name = csv_escape(diff.field_name());
        let contact_type = csv_escape(diff.contact_type());
        for prop in diff.property_differences() {
            out.push_str(&format!(
                "{},{},{},{},{}{}",
                field_name,
                contact_type,
                csv_escape(Some(prop.property())),
                csv_escape(prop.left_value()),
                csv_escape(prop.right_value()),
                eol
            ));
        }
    }

    out
}

/// Render diffs as CSV into a writer.
///
/// # Errors
///
/// - `Io` — the writer rejected the report
pub fn write_csv<W: Write>(
    diffs: &[RuleDiff],
    mut writer: W,
    options: &ReportOptions,
) -> Result<()> {
    let text = render_csv(diffs, options);
    writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| {
            ExError::from(RuleDiffError::ReportWrite {
                path: None,
                reason: e.to_string(),
            })
        })
}

/// Render diffs as CSV into a file, replacing any existing content.
///
/// # Errors
///
/// - `Io` — the file cannot be created or written
pub fn write_csv_file(diffs: &[RuleDiff], path: &Path, options: &ReportOptions) -> Result<()> {
    super::write_text_file(path, &render_csv(diffs, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PropertyDiff;
    use crate::render::LineEnding;

    fn lf(include_header: bool) -> ReportOptions {
        ReportOptions {
            include_header,
            line_ending: LineEnding::Lf,
        }
    }

    #[test]
    fn test_escape_plain_value_untouched() {
        assert_eq!(csv_escape(Some("^[a-z]+$")), "^[a-z]+$");
        assert_eq!(csv_escape(Some(" padded ")), " padded ");
        assert_eq!(csv_escape(None), "");
    }

    #[test]
    fn test_escape_comma_and_quote() {
        assert_eq!(csv_escape(Some("a,\"b")), "\"a,\"\"b\"");
    }

    #[test]
    fn test_escape_line_breaks() {
        assert_eq!(csv_escape(Some("a\nb")), "\"a\nb\"");
        assert_eq!(csv_escape(Some("a\rb")), "\"a\rb\"");
    }

    #[test]
    fn test_header_only_for_empty_diff() {
        assert_eq!(render_csv(&[], &lf(true)), format!("{}\n", CSV_HEADER));
        assert_eq!(render_csv(&[], &lf(false)), "");
    }

    #[test]
    fn test_one_line_per_property_difference() {
        let diff = RuleDiff::new(
            "Email||Primary",
            Some("Email".to_string()),
            Some("Primary".to_string()),
            vec![
                PropertyDiff::new("maxLength", Some("50".to_string()), Some("100".to_string())),
                PropertyDiff::new("regEx", None, Some("a,\"b".to_string())),
            ],
        )
        .unwrap();

        let text = render_csv(&[diff], &lf(false));
        assert_eq!(
            text,
            "Email,Primary,maxLength,50,100\nEmail,Primary,regEx,,\"a,\"\"b\"\n"
        );
    }

    #[test]
    fn test_crlf_line_ending() {
        let text = render_csv(
            &[],
            &ReportOptions {
                include_header: true,
                line_ending: LineEnding::Crlf,
            },
        );
        assert!(text.ends_with("NewValue\r\n"));
    }

    #[test]
    fn test_write_csv_into_buffer() {
        let mut buf = Vec::new();
        write_csv(&[], &mut buf, &lf(true)).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_write_csv_file_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.csv");
        let err = write_csv_file(&[], &path, &lf(true)).unwrap_err();
        assert_eq!(err.code(), "ERR_IO");
        assert!(err.path().unwrap().ends_with("report.csv"));
    }
}
