//! Hands display sources the viewer cannot draw to the default browser.
//!
//! Locators go to `webbrowser` as one argument and are never re-parsed by a
//! shell.

use std::io;
use std::path::Path;

/// What is handed to the browser for `locator`.
///
/// URLs pass through unchanged; local paths are made absolute.
pub fn browser_target(locator: &str) -> String {
    if locator.contains("://") {
        return locator.to_string();
    }

    let path = Path::new(locator);
    std::path::absolute(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

/// Open a URL or file in the default program
pub fn open_external(locator: &str) -> io::Result<()> {
    webbrowser::open(&browser_target(locator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_with_query_passes_through_unmodified() {
        let url = "https://host/fig?a=1&b=2";
        assert_eq!(browser_target(url), url);

        let hostile = "https://x/&calc.exe";
        assert_eq!(browser_target(hostile), hostile);
    }

    #[test]
    fn test_relative_path_becomes_absolute() {
        let target = browser_target("figures/plot&notes.html");
        assert!(Path::new(&target).is_absolute());
        assert!(target.ends_with("plot&notes.html"));
    }
}
