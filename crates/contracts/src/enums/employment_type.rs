use serde::{Deserialize, Serialize};

/// Employment type an employee record can carry.
///
/// This is narrower than the set offered by the sidebar filter
/// (see [`super::type_filter::SIDEBAR_TYPE_FILTERS`]), which also lists
/// `part` and `full`. Those two codes can be selected but never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
    Highschool,
    University,
    #[default]
    Other,
}

impl EmploymentType {
    /// Code used in seed data, the URL and `<select>` values
    pub fn code(&self) -> &'static str {
        match self {
            EmploymentType::Highschool => "highschool",
            EmploymentType::University => "university",
            EmploymentType::Other => "other",
        }
    }

    /// Label shown in the roster table and the edit form
    pub fn display_name(&self) -> &'static str {
        match self {
            EmploymentType::Highschool => "アルバイト(高校生)",
            EmploymentType::University => "アルバイト(大学生)",
            EmploymentType::Other => "アルバイト(その他)",
        }
    }

    pub fn all() -> Vec<EmploymentType> {
        vec![
            EmploymentType::Highschool,
            EmploymentType::University,
            EmploymentType::Other,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "highschool" => Some(EmploymentType::Highschool),
            "university" => Some(EmploymentType::University),
            "other" => Some(EmploymentType::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for t in EmploymentType::all() {
            assert_eq!(EmploymentType::from_code(t.code()), Some(t));
        }
        assert_eq!(EmploymentType::from_code("part"), None);
        assert_eq!(EmploymentType::from_code("Highschool"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(EmploymentType::Highschool.display_name(), "アルバイト(高校生)");
        assert_eq!(EmploymentType::University.display_name(), "アルバイト(大学生)");
        assert_eq!(EmploymentType::Other.display_name(), "アルバイト(その他)");
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&EmploymentType::University).unwrap();
        assert_eq!(json, "\"university\"");
        let parsed: EmploymentType = serde_json::from_str("\"highschool\"").unwrap();
        assert_eq!(parsed, EmploymentType::Highschool);
    }
}
