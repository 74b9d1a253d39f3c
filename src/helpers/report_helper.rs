use chrono::{DateTime, Local};
use crate::config::constants::REPORT_FILE_PREFIX;

pub struct ReportHelper;

impl ReportHelper {
    /// Shared file stem so the CSV and HTML of one run sit side by side.
    pub fn file_stem(at: &DateTime<Local>) -> String {
        format!("{}_{}", REPORT_FILE_PREFIX, at.format("%Y%m%d_%H%M%S"))
    }

    pub fn escape_html(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&#39;"),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stem_uses_second_resolution_timestamp() {
        let at = Local.with_ymd_and_hms(2025, 2, 3, 4, 5, 6).unwrap();
        assert_eq!(ReportHelper::file_stem(&at), "test_report_20250203_040506");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            ReportHelper::escape_html(r#"<b>"R&D" 'x'</b>"#),
            "&lt;b&gt;&quot;R&amp;D&quot; &#39;x&#39;&lt;/b&gt;"
        );
    }
}
