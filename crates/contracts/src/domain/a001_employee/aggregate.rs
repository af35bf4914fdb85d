use crate::domain::common::{AggregateId, AggregateRoot};
use crate::enums::employment_type::EmploymentType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор сотрудника
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn new_v4() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl AggregateId for EmployeeId {
    fn as_string(&self) -> String {
        self.0.clone()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Employee id must not be empty".into());
        }
        Ok(Self(s.to_string()))
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Age prefilled in the "add employee" form
pub const DEFAULT_AGE: i32 = 18;

/// Hourly wage prefilled in the "add employee" form
pub const DEFAULT_WAGE: i32 = 1000;

/// Сотрудник
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub age: i32,

    #[serde(rename = "type")]
    pub employment_type: EmploymentType,

    pub department: String,

    /// Hourly rate, currency-agnostic
    pub wage: i32,

    #[serde(rename = "lineId")]
    pub line_id: String,
}

impl Employee {
    /// Case-insensitive substring match on name or department.
    ///
    /// `query_lower` must already be lowercased; an empty query matches.
    pub fn matches_search(&self, query_lower: &str) -> bool {
        query_lower.is_empty()
            || self.name.to_lowercase().contains(query_lower)
            || self.department.to_lowercase().contains(query_lower)
    }
}

impl AggregateRoot for Employee {
    type Id = EmployeeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "employee"
    }

    fn element_name() -> &'static str {
        "従業員"
    }

    fn list_name() -> &'static str {
        "従業員一覧"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Ошибки формы сотрудника
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeFormError {
    #[error("年齢は整数で入力してください: \"{0}\"")]
    InvalidAge(String),

    #[error("時給は整数で入力してください: \"{0}\"")]
    InvalidWage(String),
}

/// Editable copy of an employee used by the add/edit modal.
///
/// Numeric fields keep the raw input text so that every keystroke can be
/// stored; they are parsed only when the form is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub id: Option<EmployeeId>,
    pub name: String,
    pub age: String,

    #[serde(rename = "type")]
    pub employment_type: EmploymentType,

    pub department: String,
    pub wage: String,

    #[serde(rename = "lineId")]
    pub line_id: String,
}

impl Default for EmployeeDto {
    /// Draft for a brand-new employee
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            age: DEFAULT_AGE.to_string(),
            employment_type: EmploymentType::Other,
            department: String::new(),
            wage: DEFAULT_WAGE.to_string(),
            line_id: String::new(),
        }
    }
}

impl From<&Employee> for EmployeeDto {
    fn from(e: &Employee) -> Self {
        Self {
            id: Some(e.id.clone()),
            name: e.name.clone(),
            age: e.age.to_string(),
            employment_type: e.employment_type,
            department: e.department.clone(),
            wage: e.wage.to_string(),
            line_id: e.line_id.clone(),
        }
    }
}

impl EmployeeDto {
    pub fn parse_age(&self) -> Result<i32, EmployeeFormError> {
        self.age
            .trim()
            .parse::<i32>()
            .map_err(|_| EmployeeFormError::InvalidAge(self.age.clone()))
    }

    pub fn parse_wage(&self) -> Result<i32, EmployeeFormError> {
        self.wage
            .trim()
            .parse::<i32>()
            .map_err(|_| EmployeeFormError::InvalidWage(self.wage.clone()))
    }

    /// Build the record to store under `id`.
    ///
    /// Text fields are taken as-is, empty values included.
    pub fn to_employee(&self, id: EmployeeId) -> Result<Employee, EmployeeFormError> {
        Ok(Employee {
            id,
            name: self.name.clone(),
            age: self.parse_age()?,
            employment_type: self.employment_type,
            department: self.department.clone(),
            wage: self.parse_wage()?,
            line_id: self.line_id.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tanaka() -> Employee {
        Employee {
            id: EmployeeId::new("1234"),
            name: "田中 真弓".into(),
            age: 23,
            employment_type: EmploymentType::Highschool,
            department: "フロント".into(),
            wage: 1200,
            line_id: "@jenny".into(),
        }
    }

    #[test]
    fn test_default_dto_matches_new_employee_defaults() {
        let dto = EmployeeDto::default();
        assert_eq!(dto.id, None);
        assert_eq!(dto.age, "18");
        assert_eq!(dto.wage, "1000");
        assert_eq!(dto.employment_type, EmploymentType::Other);
        assert!(dto.name.is_empty());
        assert!(dto.department.is_empty());
        assert!(dto.line_id.is_empty());
    }

    #[test]
    fn test_dto_copy_converts_back_unchanged() {
        let e = tanaka();
        let dto = EmployeeDto::from(&e);
        assert_eq!(dto.id, Some(e.id.clone()));
        assert_eq!(dto.to_employee(e.id.clone()).unwrap(), e);
    }

    #[test]
    fn test_numeric_fields_are_trimmed() {
        let mut dto = EmployeeDto::from(&tanaka());
        dto.age = " 30 ".into();
        dto.wage = "1500\n".into();
        let e = dto.to_employee(EmployeeId::new("x")).unwrap();
        assert_eq!(e.age, 30);
        assert_eq!(e.wage, 1500);
    }

    #[test]
    fn test_invalid_numbers_are_reported() {
        let mut dto = EmployeeDto::default();
        dto.age = "abc".into();
        assert_eq!(
            dto.to_employee(EmployeeId::new("x")),
            Err(EmployeeFormError::InvalidAge("abc".into()))
        );

        let mut dto = EmployeeDto::default();
        dto.wage = String::new();
        assert_eq!(
            dto.to_employee(EmployeeId::new("x")),
            Err(EmployeeFormError::InvalidWage(String::new()))
        );
    }

    #[test]
    fn test_empty_text_fields_are_accepted() {
        let e = EmployeeDto::default().to_employee(EmployeeId::new("x")).unwrap();
        assert_eq!(e.name, "");
        assert_eq!(e.age, DEFAULT_AGE);
        assert_eq!(e.wage, DEFAULT_WAGE);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_department() {
        let mut e = tanaka();
        e.department = "Front Desk".into();
        assert!(e.matches_search(""));
        assert!(e.matches_search("front"));
        assert!(e.matches_search("desk"));
        assert!(e.matches_search("真弓"));
        assert!(!e.matches_search("@jenny"));
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_value(tanaka()).unwrap();
        assert_eq!(json["id"], "1234");
        assert_eq!(json["type"], "highschool");
        assert_eq!(json["lineId"], "@jenny");
    }

    #[test]
    fn test_new_v4_ids_differ() {
        assert_ne!(EmployeeId::new_v4(), EmployeeId::new_v4());
        assert!(EmployeeId::from_string(" ").is_err());
        assert_eq!(EmployeeId::new("1234").as_string(), "1234");
        assert_eq!(Employee::full_name(), "a001_employee");
    }
}
