use super::seed::SeedData;
use contracts::domain::a001_employee::store::EmployeeStore;
use contracts::domain::a002_employee_category::aggregate::EmployeeCategory;
use leptos::prelude::*;

/// In-memory data shared by the roster screens for the lifetime of the page.
#[derive(Clone, Copy)]
pub struct RosterContext {
    pub employees: RwSignal<EmployeeStore>,
    pub categories: StoredValue<Vec<EmployeeCategory>>,
}

impl RosterContext {
    pub fn from_seed(seed: SeedData) -> anyhow::Result<Self> {
        let store = EmployeeStore::from_seed(seed.employees)?;
        Ok(Self {
            employees: RwSignal::new(store),
            categories: StoredValue::new(seed.employee_categories),
        })
    }

    pub fn empty() -> Self {
        Self {
            employees: RwSignal::new(EmployeeStore::new()),
            categories: StoredValue::new(Vec::new()),
        }
    }
}
