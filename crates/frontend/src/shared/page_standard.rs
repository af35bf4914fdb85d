//! Page category constants for page standardization.
//!
//! Every page rendered next to the sidebar declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_employee--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from
//! the browser DOM Inspector, paste into IDE search, and you land in the
//! `domain/a001_employee/` directory.

/// List of records: table with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

/// Return true if the category value is recognised.
pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

/// Page id for an aggregate screen, e.g. `page_id_for("a001_employee", PAGE_CAT_LIST)`.
pub fn page_id_for(full_name: &str, category: &str) -> String {
    format!("{full_name}--{category}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_employee--list"));
        assert!(!is_valid_page_id("a001_employee"));
        assert!(!is_valid_page_id("--list"));
        assert_eq!(page_id_for("a002_employee_category", PAGE_CAT_LIST), "a002_employee_category--list");
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("list"));
        assert!(!is_known_category("detail"));
        assert!(!is_known_category("dashboard"));
    }
}
