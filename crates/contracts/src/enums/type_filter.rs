use super::employment_type::EmploymentType;

/// Code of the "show everything" sidebar entry
pub const ALL_TYPES_CODE: &str = "all";

/// Sidebar filter entries: (code, label).
///
/// `part` and `full` have no [`EmploymentType`] counterpart, so selecting
/// them always produces an empty roster.
pub const SIDEBAR_TYPE_FILTERS: &[(&str, &str)] = &[
    (ALL_TYPES_CODE, "すべて"),
    ("highschool", "アルバイト(高校生)"),
    ("university", "アルバイト(大学生)"),
    ("other", "アルバイト(その他)"),
    ("part", "パート"),
    ("full", "社員"),
];

/// Category filter selected in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Code(String),
}

impl TypeFilter {
    pub fn from_code(code: &str) -> Self {
        if code == ALL_TYPES_CODE {
            TypeFilter::All
        } else {
            TypeFilter::Code(code.to_string())
        }
    }

    pub fn code(&self) -> &str {
        match self {
            TypeFilter::All => ALL_TYPES_CODE,
            TypeFilter::Code(code) => code,
        }
    }

    /// Sidebar label for this filter, `None` for codes the sidebar does not offer
    pub fn label(&self) -> Option<&'static str> {
        SIDEBAR_TYPE_FILTERS
            .iter()
            .find(|(code, _)| *code == self.code())
            .map(|(_, label)| *label)
    }

    pub fn matches(&self, employment_type: EmploymentType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Code(code) => code == employment_type.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        for t in EmploymentType::all() {
            assert!(TypeFilter::All.matches(t));
        }
    }

    #[test]
    fn test_code_matches_only_its_type() {
        let filter = TypeFilter::from_code("university");
        assert!(filter.matches(EmploymentType::University));
        assert!(!filter.matches(EmploymentType::Highschool));
        assert!(!filter.matches(EmploymentType::Other));
    }

    #[test]
    fn test_sidebar_only_codes_match_nothing() {
        for code in ["part", "full"] {
            let filter = TypeFilter::from_code(code);
            assert!(EmploymentType::all().into_iter().all(|t| !filter.matches(t)));
            assert!(filter.label().is_some());
        }
    }

    #[test]
    fn test_from_code_and_labels() {
        assert_eq!(TypeFilter::from_code("all"), TypeFilter::All);
        assert_eq!(TypeFilter::All.label(), Some("すべて"));
        assert_eq!(TypeFilter::from_code("full").label(), Some("社員"));
        assert_eq!(TypeFilter::from_code("nope").label(), None);
        assert_eq!(TypeFilter::from_code("other").code(), "other");
    }
}
