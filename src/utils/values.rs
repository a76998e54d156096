//! Enumerated values and small shape predicates shared by the rules

use super::url::is_valid_url;
use crate::manifest::RelatedApplication;
use regex::Regex;
use std::sync::LazyLock;

pub const STANDARD_DISPLAY_MODES: &[&str] = &["fullscreen", "standalone", "minimal-ui", "browser"];

pub const STANDARD_ORIENTATIONS: &[&str] = &[
    "any",
    "natural",
    "landscape",
    "landscape-primary",
    "landscape-secondary",
    "portrait",
    "portrait-primary",
    "portrait-secondary",
];

pub const STANDARD_CATEGORIES: &[&str] = &[
    "books",
    "business",
    "education",
    "entertainment",
    "finance",
    "fitness",
    "food",
    "games",
    "government",
    "health",
    "kids",
    "lifestyle",
    "magazines",
    "medical",
    "music",
    "navigation",
    "news",
    "personalization",
    "photo",
    "politics",
    "productivity",
    "security",
    "shopping",
    "social",
    "sports",
    "travel",
    "utilities",
    "weather",
];

/// Safelisted schemes for `protocol_handlers` (anything else needs a `web+` prefix)
pub const VALID_PROTOCOLS: &[&str] = &[
    "bitcoin", "dat", "dweb", "ftp", "geo", "gopher", "im", "ipfs", "ipns", "irc", "ircs", "magnet",
    "mailto", "matrix", "mms", "news", "nntp", "sip", "sms", "smsto", "ssb", "ssh", "tel", "urn",
    "webcal", "wtai", "xmpp",
];

/// Stores accepted in `related_applications[].platform`
pub const PLATFORM_OPTIONS: &[&str] =
    &["windows", "chrome_web_store", "play", "itunes", "webapp", "f-droid", "amazon"];

pub const TEXT_DIRECTIONS: &[&str] = &["ltr", "rtl", "auto"];

pub const HANDLE_LINKS_VALUES: &[&str] = &["auto", "preferred", "not-preferred"];

pub const CLIENT_MODES: &[&str] = &["auto", "navigate-new", "navigate-existing", "focus-existing"];

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("hex color regex is valid"));

pub fn is_standard_display(display: &str) -> bool {
    STANDARD_DISPLAY_MODES.contains(&display)
}

pub fn is_standard_orientation(orientation: &str) -> bool {
    STANDARD_ORIENTATIONS.contains(&orientation)
}

/// True if at least one entry is a standard category
pub fn contains_standard_category<I, S>(categories: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    categories
        .into_iter()
        .any(|c| STANDARD_CATEGORIES.contains(&c.as_ref()))
}

/// Safelisted scheme, or `web+` followed by lowercase ASCII letters
pub fn is_valid_protocol(protocol: &str) -> bool {
    if let Some(custom) = protocol.strip_prefix("web+") {
        return !custom.is_empty() && custom.chars().all(|c| c.is_ascii_lowercase());
    }
    VALID_PROTOCOLS.contains(&protocol)
}

/// `#rgb` or `#rrggbb`
pub fn is_hex_color(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}

/// Parse a `sizes` attribute ("48x48 96x96") into (width, height) pairs.
/// Unparseable entries become (0, 0).
fn dimensions(sizes: &str) -> Vec<(u32, u32)> {
    sizes
        .split_whitespace()
        .map(|size| {
            let mut parts = size.split(['x', 'X']);
            let width = parts.next().and_then(|w| w.parse().ok()).unwrap_or(0);
            let height = parts.next().and_then(|h| h.parse().ok()).unwrap_or(0);
            (width, height)
        })
        .collect()
}

/// True if any size in `sizes` is at least `width` x `height`
pub fn is_at_least(sizes: Option<&str>, width: u32, height: u32) -> bool {
    dimensions(sizes.unwrap_or("0x0"))
        .iter()
        .any(|&(w, h)| w >= width && h >= height)
}

/// Structural check for one `related_applications` entry.
///
/// The platform must be a known store. Web apps must give a `url`; store
/// platforms need an `id` or a `url`. Any `url` given must be absolute.
pub fn validate_single_related_app(app: &RelatedApplication) -> bool {
    if !PLATFORM_OPTIONS.contains(&app.platform.as_str()) {
        return false;
    }

    if let Some(url) = app.url.as_deref() {
        if !is_valid_url(url) {
            return false;
        }
    }

    let has_id = app.id.as_deref().is_some_and(|id| !id.trim().is_empty());
    match app.platform.as_str() {
        "webapp" => app.url.is_some(),
        _ => has_id || app.url.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(platform: &str, url: Option<&str>, id: Option<&str>) -> RelatedApplication {
        RelatedApplication {
            platform: platform.to_string(),
            url: url.map(str::to_string),
            id: id.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn enumerations() {
        assert!(is_standard_display("minimal-ui"));
        assert!(!is_standard_display("window-controls-overlay"));
        assert!(is_standard_orientation("portrait-primary"));
        assert!(!is_standard_orientation("upside-down"));
        assert!(contains_standard_category(["utilities", "whiteboard"]));
        assert!(!contains_standard_category(["whiteboard"]));
        assert!(!contains_standard_category(Vec::<String>::new()));
    }

    #[test]
    fn protocols() {
        assert!(is_valid_protocol("mailto"));
        assert!(is_valid_protocol("web+board"));
        assert!(!is_valid_protocol("web+"));
        assert!(!is_valid_protocol("web+Board"));
        assert!(!is_valid_protocol("https"));
    }

    #[test]
    fn hex_colors() {
        assert!(is_hex_color("#FFFFFF"));
        assert!(is_hex_color("#0af"));
        assert!(!is_hex_color("black"));
        assert!(!is_hex_color("#ffff"));
        assert!(!is_hex_color("FFFFFF"));
    }

    #[test]
    fn icon_sizes() {
        assert!(is_at_least(Some("512x512"), 512, 512));
        assert!(is_at_least(Some("48x48 1024x1024"), 512, 512));
        assert!(!is_at_least(Some("512x256"), 512, 512));
        assert!(!is_at_least(Some("any"), 512, 512));
        assert!(!is_at_least(None, 1, 1));
    }

    #[test]
    fn related_apps() {
        assert!(validate_single_related_app(&app(
            "play",
            Some("https://play.google.com/store/apps/details?id=com.example.app1"),
            Some("com.example.app1"),
        )));
        assert!(validate_single_related_app(&app("itunes", None, Some("id123456"))));
        assert!(validate_single_related_app(&app("webapp", Some("https://example.com/manifest.json"), None)));

        assert!(!validate_single_related_app(&app("webapp", None, Some("x"))));
        assert!(!validate_single_related_app(&app("play", None, None)));
        assert!(!validate_single_related_app(&app("play", Some("not a url"), Some("com.x"))));
        assert!(!validate_single_related_app(&app("steam", None, Some("123"))));
    }
}
