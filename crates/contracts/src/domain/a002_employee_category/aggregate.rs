use crate::domain::common::{AggregateId, AggregateRoot};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Employment category code (e.g. "Arbeit_1", "Staff")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeCategoryId(pub String);

impl EmployeeCategoryId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for EmployeeCategoryId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Category id must not be empty".into());
        }
        Ok(Self(s.to_string()))
    }
}

// ============================================================================
// Priority
// ============================================================================

/// Display-only priority; not used for ordering or any rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryPriority {
    Low,
    Medium,
    High,
}

impl CategoryPriority {
    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryPriority::Low => "低",
            CategoryPriority::Medium => "中",
            CategoryPriority::High => "高",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// 勤務形態 (employment category), read-only in this version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCategory {
    pub id: EmployeeCategoryId,
    pub name: String,
    pub priority: CategoryPriority,
}

impl EmployeeCategory {
    /// Priority cell text, e.g. "優先度：中"
    pub fn priority_label(&self) -> String {
        format!("優先度：{}", self.priority.display_name())
    }
}

impl AggregateRoot for EmployeeCategory {
    type Id = EmployeeCategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "employee_category"
    }

    fn element_name() -> &'static str {
        "勤務形態"
    }

    fn list_name() -> &'static str {
        "勤務形態"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_labels() {
        let category = EmployeeCategory {
            id: EmployeeCategoryId::new("Part"),
            name: "パート".into(),
            priority: CategoryPriority::Medium,
        };
        assert_eq!(category.priority_label(), "優先度：中");
        assert_eq!(CategoryPriority::Low.display_name(), "低");
        assert_eq!(CategoryPriority::High.display_name(), "高");
    }

    #[test]
    fn test_priority_deserializes_from_lowercase() {
        let category: EmployeeCategory =
            serde_json::from_str(r#"{"id":"Staff","name":"社員","priority":"high"}"#).unwrap();
        assert_eq!(category.priority, CategoryPriority::High);
        assert_eq!(category.id.value(), "Staff");
        assert_eq!(category.id.as_string(), "Staff");
        assert_eq!(EmployeeCategoryId::from_string("Staff"), Ok(category.id.clone()));
        assert_eq!(EmployeeCategory::full_name(), "a002_employee_category");
    }
}
