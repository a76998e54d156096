//! Field lists by category
//!
//! Every listed member's primary rule carries the list's category. Members the
//! catalog checks but these lists do not name (`id`, `launch_handler`,
//! `handle_links`, `file_handlers`, `scope_extensions`, `widgets`) keep the
//! category declared on their rule.

use super::rule::Category;

pub const REQUIRED_FIELDS: &[&str] = &["icons", "name", "short_name", "start_url"];

pub const RECOMMENDED_FIELDS: &[&str] = &[
    "display",
    "background_color",
    "theme_color",
    "orientation",
    "screenshots",
    "shortcuts",
];

pub const OPTIONAL_FIELDS: &[&str] = &[
    "iarc_rating_id",
    "related_applications",
    "prefer_related_applications",
    "lang",
    "dir",
    "description",
    "protocol_handlers",
    "display_override",
    "share_target",
    "scope",
    "categories",
    "edge_side_panel",
];

/// Which list names `member`, if any
pub fn field_category(member: &str) -> Option<Category> {
    if REQUIRED_FIELDS.contains(&member) {
        Some(Category::Required)
    } else if RECOMMENDED_FIELDS.contains(&member) {
        Some(Category::Recommended)
    } else if OPTIONAL_FIELDS.contains(&member) {
        Some(Category::Optional)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_are_disjoint() {
        let all: Vec<&str> = REQUIRED_FIELDS
            .iter()
            .chain(RECOMMENDED_FIELDS)
            .chain(OPTIONAL_FIELDS)
            .copied()
            .collect();
        let mut unique = all.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn lookup() {
        assert_eq!(field_category("start_url"), Some(Category::Required));
        assert_eq!(field_category("shortcuts"), Some(Category::Recommended));
        assert_eq!(field_category("lang"), Some(Category::Optional));
        assert_eq!(field_category("widgets"), None);
    }
}
