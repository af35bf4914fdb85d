use super::aggregate::{Employee, EmployeeId};
use thiserror::Error;

/// Ошибки хранилища сотрудников
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmployeeStoreError {
    #[error("Employee id already exists: {0}")]
    DuplicateId(EmployeeId),

    #[error("Employee not found: {0}")]
    NotFound(EmployeeId),
}

/// In-memory, insertion-ordered employee roster.
///
/// Ids are unique for the lifetime of the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeStore {
    items: Vec<Employee>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed records; later duplicates are rejected.
    pub fn from_seed(seed: Vec<Employee>) -> Result<Self, EmployeeStoreError> {
        let mut store = Self::new();
        for employee in seed {
            store.add(employee)?;
        }
        Ok(store)
    }

    pub fn items(&self) -> &[Employee] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &EmployeeId) -> bool {
        self.items.iter().any(|e| &e.id == id)
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.items.iter().find(|e| &e.id == id)
    }

    /// Append at the end
    pub fn add(&mut self, employee: Employee) -> Result<(), EmployeeStoreError> {
        if self.contains(&employee.id) {
            return Err(EmployeeStoreError::DuplicateId(employee.id));
        }
        self.items.push(employee);
        Ok(())
    }

    /// Replace the record with the same id, keeping its position.
    pub fn replace(&mut self, employee: Employee) -> Result<(), EmployeeStoreError> {
        match self.items.iter_mut().find(|e| e.id == employee.id) {
            Some(slot) => {
                *slot = employee;
                Ok(())
            }
            None => Err(EmployeeStoreError::NotFound(employee.id)),
        }
    }
}
