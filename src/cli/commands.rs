//! Rendering of the CLI's fixed output blocks.
//!
//! Help text, version line, and banner are built as strings so the
//! dispatcher can write them to any sink and tests can assert on them.

use std::fmt::Write as _;

use crate::constants;

/// Render the full help menu.
pub fn help_text() -> String {
    let mut text = String::with_capacity(512);

    let _ = writeln!(text);
    let _ = writeln!(text, "{}", constants::HELP_TITLE);
    let _ = writeln!(text, "=================");
    let _ = writeln!(text);
    let _ = writeln!(text, "Usage: {} [options]", constants::APP_NAME);
    let _ = writeln!(text);
    let _ = writeln!(text, "Options:");
    let _ = writeln!(text, "  -h, --help              Show this help menu");
    let _ = writeln!(text, "  --version               Show version number");
    let _ = writeln!(text, "  --target <url>          Target URL to scan");
    let _ = writeln!(text, "  -v, --verbose           Enable verbose mode");
    let _ = writeln!(text);
    let _ = writeln!(text, "Examples:");
    let _ = writeln!(
        text,
        "  {} --target https://example.com",
        constants::APP_NAME
    );
    let _ = writeln!(
        text,
        "  {} --target https://example.com -v",
        constants::APP_NAME
    );

    text
}

/// Render the version line, also used as the pre-scan banner.
pub fn version_line() -> String {
    format!("{} v{}", constants::APP_TITLE, constants::APP_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_text_has_title_and_usage() {
        let text = help_text();
        assert!(text.contains("Bahamut Help Menu"));
        assert!(text.contains("Usage: bahamut [options]"));
    }

    #[test]
    fn test_help_text_lists_every_option() {
        let text = help_text();
        assert!(text.contains("-h, --help"));
        assert!(text.contains("--version"));
        assert!(text.contains("--target <url>"));
        assert!(text.contains("-v, --verbose"));
    }

    #[test]
    fn test_help_text_shows_examples() {
        let text = help_text();
        assert!(text.contains("bahamut --target https://example.com"));
        assert!(text.contains("bahamut --target https://example.com -v"));
    }

    #[test]
    fn test_version_line() {
        assert_eq!(version_line(), "Bahamut Scanner v1.0.0");
    }
}
