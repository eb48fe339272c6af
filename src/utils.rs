// Utility functions
use std::path::Path;

/// File name used to tag records; falls back to the whole path.
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

/// Escapes text for use inside HTML element content and attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_file_name() {
        assert_eq!(file_label(Path::new("prices/price_a.csv")), "price_a.csv");
        assert_eq!(file_label(Path::new("price_b.csv")), "price_b.csv");
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html("<b>\"Tom & Jerry's\"</b>"),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
        assert_eq!(escape_html("Олива"), "Олива");
    }
}
