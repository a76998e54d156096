//! The built-in rule catalog
//!
//! Rules are listed in report order. A member may have several rules (icons has
//! a required shape rule plus recommended quality rules); each rule has exactly
//! one category.

use super::rule::{Category, Failure, Rule, Verdict, check, ensure};
use crate::manifest::{
    Icon, LaunchHandler, Manifest, ProtocolHandler, RelatedApplication, ShortcutItem, typed_list,
};
use crate::utils::{
    CLIENT_MODES, FILE_HANDLERS_SHAPE, HANDLE_LINKS_VALUES, ICONS_SHAPE, SCREENSHOTS_SHAPE,
    ShapeCheck, TEXT_DIRECTIONS, WIDGETS_SHAPE, check_relative_url_based_on_scope, contains_standard_category,
    is_at_least, is_hex_color, is_relative_url, is_standard_display, is_standard_orientation,
    is_valid_language_code, is_valid_protocol, is_valid_url, validate_single_related_app,
};
use serde_json::Value;
use std::sync::{Arc, LazyLock};

/// Ordered, immutable set of rules
#[derive(Debug)]
pub struct Catalog {
    rules: Vec<Rule>,
}

static BUILTIN: LazyLock<Arc<Catalog>> = LazyLock::new(|| Arc::new(Catalog::from_rules(builtin_rules())));

impl Catalog {
    /// The process-wide built-in catalog
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// A fresh copy of the built-in rules followed by `extra`
    pub fn extended(extra: impl IntoIterator<Item = Rule>) -> Self {
        let mut rules = builtin_rules();
        rules.extend(extra);
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule by id (test name)
    pub fn find(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    /// Positions of every rule bound to `member`, in catalog order
    pub fn positions_for(&self, member: &str) -> Vec<usize> {
        self.rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.member() == member)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Distinct members in first-appearance order
    pub fn members(&self) -> Vec<&'static str> {
        let mut members: Vec<&'static str> = Vec::new();
        for rule in &self.rules {
            if !members.contains(&rule.member()) {
                members.push(rule.member());
            }
        }
        members
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn non_empty_array(value: Option<&Value>) -> Option<&Vec<Value>> {
    value.and_then(Value::as_array).filter(|a| !a.is_empty())
}

fn conforms(shape: &ShapeCheck, value: Option<&Value>, message: &'static str) -> Verdict {
    if let Some(error) = shape.first_error(value) {
        tracing::debug!(member = shape.member(), %error, "shape mismatch");
        return Err(Failure::Message(message));
    }
    Ok(())
}

/// Every image `src` is an absolute http(s) URL or a relative reference
fn sources_are_urls(value: Option<&Value>, message: &'static str) -> Verdict {
    let images = value
        .and_then(typed_list::<Icon>)
        .ok_or(Failure::Message(message))?;
    ensure(
        images
            .iter()
            .all(|image| is_valid_url(&image.src) || is_relative_url(&image.src)),
        message,
    )
}

fn purposes(icon: &Icon) -> Vec<&str> {
    match icon.purpose.as_deref() {
        Some(purpose) => purpose.split_whitespace().collect(),
        None => vec!["any"],
    }
}

fn name(value: Option<&Value>, _: &Manifest) -> Verdict {
    let name = non_empty_str(value).ok_or(Failure::Message(
        "name is required and must be a string with a length > 0",
    ))?;
    ensure(name.trim() == name, "name should not have any leading or trailing whitespace")
}

fn handle_links(value: Option<&Value>, _: &Manifest) -> Verdict {
    check(value.and_then(Value::as_str).is_some_and(|v| HANDLE_LINKS_VALUES.contains(&v)))
}

fn share_target(value: Option<&Value>, _: &Manifest) -> Verdict {
    let target = value.and_then(Value::as_object).ok_or(Failure::Default)?;
    ensure(
        target.get("action").is_none_or(Value::is_string),
        "share_target.action must be a string",
    )
}

fn icons(value: Option<&Value>, _: &Manifest) -> Verdict {
    ensure(non_empty_array(value).is_some(), "icons is required and must be non-empty array")?;
    conforms(&ICONS_SHAPE, value, "every icon must have a src and a sizes string")?;
    sources_are_urls(value, "every icon src must be a valid URL")
}

fn icons_large_png(value: Option<&Value>, _: &Manifest) -> Verdict {
    let icons = value.and_then(typed_list::<Icon>).unwrap_or_default();
    check(
        icons
            .iter()
            .any(|icon| icon.is_png() && is_at_least(icon.sizes.as_deref(), 512, 512)),
    )
}

fn icons_purpose_any(value: Option<&Value>, _: &Manifest) -> Verdict {
    let icons = value.and_then(typed_list::<Icon>).unwrap_or_default();
    check(icons.iter().any(|icon| purposes(icon).contains(&"any")))
}

fn icons_separate_maskable(value: Option<&Value>, _: &Manifest) -> Verdict {
    let icons = value.and_then(typed_list::<Icon>).ok_or(Failure::Default)?;
    check(!icons.iter().any(|icon| {
        let purposes = purposes(icon);
        purposes.contains(&"any") && purposes.contains(&"maskable")
    }))
}

fn scope(value: Option<&Value>, _: &Manifest) -> Verdict {
    let scope = non_empty_str(value).ok_or(Failure::Default)?;
    ensure(
        is_valid_url(scope) || is_relative_url(scope),
        "scope must be an absolute URL or a path",
    )
}

fn short_name(value: Option<&Value>, _: &Manifest) -> Verdict {
    let short_name = value
        .and_then(Value::as_str)
        .filter(|s| s.chars().count() >= 3)
        .ok_or(Failure::Message(
            "short_name is required and must be a string with a length >= 3",
        ))?;
    ensure(
        short_name.trim() == short_name,
        "short_name should not have any leading or trailing whitespace",
    )
}

fn start_url(value: Option<&Value>, manifest: &Manifest) -> Verdict {
    let url = non_empty_str(value).ok_or(Failure::Message(
        "start_url is required and must be a string with a length > 0",
    ))?;
    ensure(
        is_valid_url(url) || is_relative_url(url),
        "start_url must be an absolute http(s) URL or a relative URL",
    )?;
    match manifest.get_str("scope").filter(|s| !s.is_empty()) {
        Some(scope) => ensure(
            check_relative_url_based_on_scope(url, scope),
            "start_url must be within the app scope",
        ),
        None => Ok(()),
    }
}

fn display(value: Option<&Value>, _: &Manifest) -> Verdict {
    check(value.and_then(Value::as_str).is_some_and(is_standard_display))
}

fn hex_color(value: Option<&Value>, _: &Manifest) -> Verdict {
    check(value.and_then(Value::as_str).is_some_and(is_hex_color))
}

fn orientation(value: Option<&Value>, _: &Manifest) -> Verdict {
    check(value.and_then(Value::as_str).is_some_and(is_standard_orientation))
}

fn screenshots(value: Option<&Value>, _: &Manifest) -> Verdict {
    ensure(non_empty_array(value).is_some(), "screenshots must be an array with a length > 0")?;
    conforms(&SCREENSHOTS_SHAPE, value, "every screenshot must have a src and a sizes string")?;
    sources_are_urls(value, "every screenshot src must be a valid URL")
}

fn shortcuts(value: Option<&Value>, _: &Manifest) -> Verdict {
    ensure(non_empty_array(value).is_some(), "shortcuts must be an array with a length > 0")?;
    let shortcuts = value
        .and_then(typed_list::<ShortcutItem>)
        .ok_or(Failure::Message("every shortcut must be an object with string members"))?;

    ensure(
        shortcuts.iter().all(|s| {
            s.name.as_deref().is_some_and(|n| !n.is_empty()) && s.url.as_deref().is_some_and(|u| !u.is_empty())
        }),
        "every shortcut must have a name and a url",
    )?;

    let icons = || shortcuts.iter().filter_map(|s| s.icons.as_deref());

    ensure(
        icons().flatten().all(|icon| {
            !matches!(icon.mime_type.as_deref(), Some("image/webp") | Some("image/svg+xml"))
        }),
        "shortcuts cannot contain icons with type image/webp or image/svg+xml",
    )?;

    ensure(
        icons().all(|icons| icons.iter().any(|icon| icon.sizes.as_deref() == Some("96x96"))),
        "One or more of your shortcuts has icons but does not have one with size 96x96",
    )
}

fn non_empty_string(value: Option<&Value>, _: &Manifest) -> Verdict {
    check(non_empty_str(value).is_some())
}

fn related_applications(value: Option<&Value>, _: &Manifest) -> Verdict {
    let apps = value
        .and_then(typed_list::<RelatedApplication>)
        .ok_or(Failure::Default)?;
    check(apps.iter().all(validate_single_related_app))
}

fn prefer_related_applications(value: Option<&Value>, manifest: &Manifest) -> Verdict {
    let prefer = value.and_then(Value::as_bool).ok_or(Failure::Default)?;
    if !prefer {
        return Ok(());
    }

    let apps = manifest
        .get("related_applications")
        .and_then(typed_list::<RelatedApplication>)
        .unwrap_or_default();
    ensure(
        !apps.is_empty() && apps.iter().all(validate_single_related_app),
        "prefer_related_applications is true, so related_applications must list valid apps",
    )
}

fn categories(value: Option<&Value>, _: &Manifest) -> Verdict {
    check(non_empty_array(value).is_some_and(|c| c.iter().all(Value::is_string)))
}

fn categories_standard(value: Option<&Value>, _: &Manifest) -> Verdict {
    let categories = non_empty_array(value).ok_or(Failure::Default)?;
    check(contains_standard_category(categories.iter().filter_map(Value::as_str)))
}

fn lang(value: Option<&Value>, _: &Manifest) -> Verdict {
    check(non_empty_str(value).is_some_and(is_valid_language_code))
}

fn dir(value: Option<&Value>, _: &Manifest) -> Verdict {
    check(value.and_then(Value::as_str).is_some_and(|d| TEXT_DIRECTIONS.contains(&d)))
}

fn description(value: Option<&Value>, _: &Manifest) -> Verdict {
    let description = non_empty_str(value)
        .ok_or(Failure::Message("description must be a string with a length > 0"))?;
    ensure(
        description.trim() == description,
        "description should not have any leading or trailing whitespace",
    )
}

fn protocol_handlers(value: Option<&Value>, manifest: &Manifest) -> Verdict {
    let handlers = non_empty_array(value)
        .and(value.and_then(typed_list::<ProtocolHandler>))
        .ok_or(Failure::Message("protocol_handlers should be a non-empty array"))?;
    let scope = manifest.get_str("scope").filter(|s| !s.is_empty()).unwrap_or("/");

    check(handlers.iter().all(|handler| {
        let url_ok = handler
            .url
            .as_deref()
            .is_some_and(|url| is_relative_url(url) && check_relative_url_based_on_scope(url, scope));
        let protocol_ok = handler.protocol.as_deref().is_some_and(is_valid_protocol);
        url_ok && protocol_ok
    }))
}

fn file_handlers(value: Option<&Value>, _: &Manifest) -> Verdict {
    conforms(&FILE_HANDLERS_SHAPE, value, "file_handlers array should have objects with action and accept fields")
}

fn display_override(value: Option<&Value>, _: &Manifest) -> Verdict {
    let modes = non_empty_array(value)
        .ok_or(Failure::Message("display_override must be a non-empty array"))?;
    ensure(
        modes.iter().any(|mode| mode.as_str() == Some("window-controls-overlay")),
        "display_override array should have window-controls-overlay value",
    )
}

fn scope_extensions(value: Option<&Value>, _: &Manifest) -> Verdict {
    let extensions = value.and_then(Value::as_array).ok_or(Failure::Default)?;
    check(
        extensions
            .iter()
            .all(|ext| ext.get("origin").is_some_and(Value::is_string)),
    )
}

fn widgets(value: Option<&Value>, _: &Manifest) -> Verdict {
    check(WIDGETS_SHAPE.is_valid(value))
}

fn launch_handler(value: Option<&Value>, _: &Manifest) -> Verdict {
    ensure(value.is_some_and(Value::is_object), "launch_handler should be object")?;
    let handler: LaunchHandler = value
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .ok_or(Failure::Message("launch_handler.client_mode must be a string or an array of strings"))?;
    let client_mode = handler
        .client_mode
        .ok_or(Failure::Message("launch_handler should have client_mode"))?;
    let modes = client_mode.modes();
    ensure(
        !modes.is_empty() && modes.iter().all(|mode| CLIENT_MODES.contains(mode)),
        "launch_handler.client_mode must be auto, navigate-new, navigate-existing or focus-existing",
    )
}

fn edge_side_panel(value: Option<&Value>, _: &Manifest) -> Verdict {
    let panel = value.and_then(Value::as_object).ok_or(Failure::Default)?;
    check(panel.get("preferred_width").is_none_or(Value::is_number))
}

/// Build the built-in rules in report order
pub fn builtin_rules() -> Vec<Rule> {
    use Category::{Optional, Recommended, Required};

    vec![
        Rule::new("name", "name", Required, name)
            .display("Manifest has name field")
            .info("The name the app is usually displayed with, for example in a list of apps or as an icon label.")
            .error("name is required and must be a string with a length > 0")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=name-string")
            .default_value(r#""cool PWA""#)
            .quick_fix(true),
        Rule::new("handle_links", "handle_links", Optional, handle_links)
            .display("Manifest has handle_links field")
            .info("Whether links into the app open in the installed app or in the browser.")
            .error("handle_links should be either auto, preferred or not-preferred")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=handle_links-string")
            .default_value(r#""auto""#)
            .quick_fix(true),
        Rule::new("share_target", "share_target", Optional, share_target)
            .display("Manifest has share_target field")
            .info("share_target lets the app receive content shared from other apps.")
            .error("share_target must be an object")
            .docs("https://docs.pwabuilder.com/#/home/native-features?id=web-share-api")
            .default_value(
                r#"{"action": "/share-target/", "method": "GET", "params": {"title": "title", "text": "text", "url": "url"}}"#,
            )
            .quick_fix(true),
        Rule::new("icons", "icons", Required, icons)
            .display("Manifest has icons field")
            .info("Image files the platform can use as application icons in different contexts.")
            .error("icons is required and must be non-empty array")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=icons")
            .default_value(DEFAULT_ICONS)
            .quick_fix(true),
        Rule::new("icons-png-512", "icons", Recommended, icons_large_png)
            .display("Icons have at least one PNG icon 512x512 or larger")
            .info("Stores and install prompts need a large PNG icon to generate every other size from.")
            .error("Need at least one PNG icon 512x512 or larger")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=icons")
            .default_value(DEFAULT_ICONS),
        Rule::new("icons-purpose-any", "icons", Recommended, icons_purpose_any)
            .display("Icons have at least one icon with purpose any")
            .info("An icon with purpose any is shown wherever no special-purpose icon applies.")
            .error("Need at least one icon with purpose set to any")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=icons")
            .default_value(DEFAULT_ICONS)
            .quick_fix(true),
        Rule::new("icons-separate-maskable", "icons", Recommended, icons_separate_maskable)
            .display("Icons use separate images for maskable and any")
            .info("Maskable icons are cropped by the platform, so the same image rarely works for both purposes.")
            .error("Separate icons are needed for both maskable and any")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=icons")
            .default_value(DEFAULT_ICONS)
            .quick_fix(true),
        Rule::new("scope", "scope", Optional, scope)
            .display("Manifest has scope field")
            .info("The navigation scope: the set of URLs that are considered part of the app.")
            .error("scope must be a string with a length > 0")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=scope-string")
            .default_value(r#""/""#)
            .quick_fix(true),
        Rule::new("short_name", "short_name", Required, short_name)
            .display("Manifest has a short_name field")
            .info("Shown when there is not enough room for name, for example on the home screen or start menu.")
            .error("short_name is required and must be a string with a length >= 3")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=short_name-string")
            .default_value(r#""placeholder""#)
            .quick_fix(true),
        Rule::new("start_url", "start_url", Required, start_url)
            .display("Manifest has start_url field")
            .info("The URL loaded when the user launches the installed app.")
            .error("start_url is required and must be a string with a length > 0")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=start_url-string")
            .default_value(r#""/""#)
            .quick_fix(true),
        Rule::new("display", "display", Recommended, display)
            .display("Manifest has display field")
            .info("The preferred display mode, from browser (full browser UI) to fullscreen.")
            .error("display must be one of the following strings: fullscreen, standalone, minimal-ui, browser")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=display-string")
            .default_value(r#""standalone""#)
            .quick_fix(true),
        Rule::new("background_color", "background_color", Recommended, hex_color)
            .display("Manifest has hex encoded background_color")
            .info("Placeholder background color shown before the stylesheet loads.")
            .error("background_color should be a valid hex color")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=background_color-string")
            .default_value(r##""#000000""##)
            .quick_fix(true),
        Rule::new("theme_color", "theme_color", Recommended, hex_color)
            .display("Manifest has hex encoded theme_color")
            .info("Default theme color for the app's window and title bar.")
            .error("theme_color should be a valid hex color")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=theme_color-string")
            .default_value(r##""#000000""##)
            .quick_fix(true),
        Rule::new("orientation", "orientation", Recommended, orientation)
            .display("Manifest has orientation field")
            .info("Default orientation of the app's top-level browsing contexts.")
            .error("orientation must be one of the following strings: any, natural, landscape, landscape-primary, landscape-secondary, portrait, portrait-primary, portrait-secondary")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=orientation-string")
            .default_value(r#""any""#)
            .quick_fix(true),
        Rule::new("screenshots", "screenshots", Recommended, screenshots)
            .display("Manifest has screenshots field")
            .info("Screenshots shown in store listings and richer install dialogs.")
            .error("screenshots must be an array with a length > 0")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=screenshots")
            .default_value(DEFAULT_SCREENSHOTS)
            .quick_fix(true),
        Rule::new("shortcuts", "shortcuts", Recommended, shortcuts)
            .display("Manifest has shortcuts field")
            .info("Links to key tasks, shown as jump lists on Windows and long-press menus on Android.")
            .error("shortcuts must be an array with a length > 0")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=shortcuts-array")
            .default_value("[]")
            .quick_fix(true),
        Rule::new("iarc_rating_id", "iarc_rating_id", Optional, non_empty_string)
            .display("Manifest has iarc_rating_id field")
            .info("International Age Rating Coalition certification code for the app.")
            .error("iarc_rating_id must be a string with a length > 0")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=iarc_rating_id-string")
            .default_value(r#""""#)
            .quick_fix(true),
        Rule::new("related_applications", "related_applications", Optional, related_applications)
            .display("Manifest has related_applications field")
            .info("Native applications installable by, or accessible to, the underlying platform.")
            .error("related_applications should contain a valid store, url and id")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=related_applications-array")
            .default_value("[]")
            .quick_fix(true),
        Rule::new(
            "prefer_related_applications",
            "prefer_related_applications",
            Optional,
            prefer_related_applications,
        )
        .display("Manifest properly sets prefer_related_applications field")
        .info("When true, the platform may suggest a related application instead of the web app.")
        .error("prefer_related_applications should be set to a boolean value")
        .docs("https://docs.pwabuilder.com/#/builder/manifest?id=prefer_related_applications-boolean")
        .default_value("false"),
        Rule::new("categories", "categories", Optional, categories)
            .display("Manifest has categories field")
            .info("Categories the app belongs to, used by stores and catalogs.")
            .error("categories should be a non-empty array")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=categories-array")
            .default_value("[]")
            .quick_fix(true),
        Rule::new("categories-standard", "categories", Optional, categories_standard)
            .display("Categories include a standard category")
            .info("Stores only understand the known category names; custom ones are ignored.")
            .error("categories should include at least one standard category, such as productivity or utilities")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=categories-array")
            .default_value(r#"["productivity"]"#),
        Rule::new("lang", "lang", Optional, lang)
            .display("Manifest specifies a language")
            .info("The default language of the app's name and description.")
            .error("lang should be set to a valid language code")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=lang-string")
            .default_value(r#""en""#)
            .quick_fix(true),
        Rule::new("dir", "dir", Optional, dir)
            .display("Manifest specifies a default direction of text")
            .info("The base text direction of the manifest's localizable members.")
            .error("dir must be one of the following strings: ltr, rtl, or auto")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=dir-string")
            .default_value(r#""ltr""#)
            .quick_fix(true),
        Rule::new("description", "description", Optional, description)
            .display("Manifest has description field")
            .info("A description of what the app does.")
            .error("description must be a string with a length > 0")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=description-string")
            .default_value(r#""""#)
            .quick_fix(true),
        Rule::new("protocol_handlers", "protocol_handlers", Optional, protocol_handlers)
            .display("Manifest has protocol_handlers field")
            .info("Protocols the app registers to handle, such as mailto or web+ schemes.")
            .error("protocol_handlers should all be relative URLs that are within the scope of the app, should have a url and a valid protocol")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=protocol_handlers-array")
            .default_value("[]")
            .quick_fix(true),
        Rule::new("file_handlers", "file_handlers", Optional, file_handlers)
            .display("Manifest has file_handlers field")
            .info("File types the installed app can open.")
            .error("file_handlers array should have objects with action and accept fields")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=file_handlers-array")
            .default_value("[]")
            .quick_fix(true),
        Rule::new("display_override", "display_override", Optional, display_override)
            .display("Manifest has display_override field")
            .info("Display modes considered in order; the first supported one is applied.")
            .error("display_override must be a non-empty array")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=display_override-array")
            .default_value(r#"["window-controls-overlay"]"#)
            .quick_fix(true),
        Rule::new("scope_extensions", "scope_extensions", Optional, scope_extensions)
            .display("Manifest has scope_extensions field")
            .info("Lets an app spanning several origins behave as one contiguous app.")
            .error("scope_extensions should be a valid array with origin")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=scope_extensions-array")
            .default_value("[]")
            .quick_fix(true),
        Rule::new("widgets", "widgets", Optional, widgets)
            .display("Manifest has widgets field")
            .info("Widgets shown on the Windows 11 widgets board.")
            .error("widgets should be an array of valid objects")
            .docs("https://learn.microsoft.com/en-us/microsoft-edge/progressive-web-apps-chromium/how-to/widgets")
            .default_value("[]")
            .quick_fix(true),
        Rule::new("id", "id", Recommended, non_empty_string)
            .display("Manifest has an app ID")
            .info("The unique identifier of the app to the browser.")
            .error("id must be a string with a length > 0")
            .docs("https://developer.chrome.com/blog/pwa-manifest-id")
            .default_value(r#""/""#)
            .quick_fix(true),
        Rule::new("launch_handler", "launch_handler", Recommended, launch_handler)
            .display("Manifest has launch_handler field")
            .info("How the app launches when navigated to via a URL, share target and so on.")
            .error("launch_handler should be object")
            .docs("https://docs.pwabuilder.com/#/builder/manifest?id=launch_handlers-string-array")
            .default_value(r#"{"client_mode": "auto"}"#),
        Rule::new("edge_side_panel", "edge_side_panel", Optional, edge_side_panel)
            .display("Manifest has edge_side_panel field")
            .info("Whether the app supports the side panel in Microsoft Edge.")
            .error("The value entered for edge_side_panel.preferred_width should be a number")
            .docs("https://learn.microsoft.com/microsoft-edge/progressive-web-apps-chromium/how-to/sidebar")
            .default_value(r#"{"preferred_width": 400}"#),
    ]
}

const DEFAULT_ICONS: &str = r#"[
    {"src": "https://www.pwabuilder.com/assets/icons/icon_192.png", "sizes": "192x192", "type": "image/png", "purpose": "any"},
    {"src": "https://www.pwabuilder.com/assets/icons/icon_512.png", "sizes": "512x512", "type": "image/png", "purpose": "maskable"}
]"#;

const DEFAULT_SCREENSHOTS: &str = r#"[
    {"src": "https://www.pwabuilder.com/assets/screenshots/screen1.png", "sizes": "2880x1800", "type": "image/png", "label": "PWABuilder Home Screen"},
    {"src": "https://www.pwabuilder.com/assets/screenshots/screen3.png", "sizes": "2880x1800", "type": "image/png", "label": "Manifest information on the Report Card"}
]"#;
