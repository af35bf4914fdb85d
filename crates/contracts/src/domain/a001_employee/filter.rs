use super::aggregate::Employee;
use crate::enums::type_filter::TypeFilter;

/// Sidebar category plus free-text search, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFilter {
    pub type_filter: TypeFilter,
    pub search_query: String,
}

impl EmployeeFilter {
    pub fn new(type_filter: TypeFilter, search_query: impl Into<String>) -> Self {
        Self {
            type_filter,
            search_query: search_query.into(),
        }
    }

    pub fn matches(&self, employee: &Employee) -> bool {
        self.type_filter.matches(employee.employment_type)
            && employee.matches_search(&self.search_query.to_lowercase())
    }

    /// Visible subset of `employees`, in their original order.
    pub fn apply(&self, employees: &[Employee]) -> Vec<Employee> {
        let query = self.search_query.to_lowercase();
        employees
            .iter()
            .filter(|e| self.type_filter.matches(e.employment_type) && e.matches_search(&query))
            .cloned()
            .collect()
    }
}
