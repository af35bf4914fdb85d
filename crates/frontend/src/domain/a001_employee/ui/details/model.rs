use contracts::domain::a001_employee::aggregate::{
    Employee, EmployeeDto, EmployeeFormError, EmployeeId,
};
use contracts::domain::a001_employee::store::{EmployeeStore, EmployeeStoreError};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Add,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error(transparent)]
    Form(#[from] EmployeeFormError),

    #[error(transparent)]
    Store(#[from] EmployeeStoreError),

    #[error("編集対象の従業員IDがありません")]
    MissingId,
}

/// Transient state of the add/edit modal.
///
/// The draft is a copy: nothing reaches the store until [`commit`](Self::commit).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeEditor {
    mode: ModalMode,
    draft: EmployeeDto,
}

impl EmployeeEditor {
    pub fn for_add() -> Self {
        Self {
            mode: ModalMode::Add,
            draft: EmployeeDto::default(),
        }
    }

    pub fn for_edit(employee: &Employee) -> Self {
        Self {
            mode: ModalMode::Edit,
            draft: EmployeeDto::from(employee),
        }
    }

    pub fn mode(&self) -> ModalMode {
        self.mode
    }

    pub fn draft(&self) -> &EmployeeDto {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut EmployeeDto {
        &mut self.draft
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            ModalMode::Add => "従業員の追加",
            ModalMode::Edit => "従業員情報の編集",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            ModalMode::Add => "追加",
            ModalMode::Edit => "保存",
        }
    }

    /// Write the draft into `store`. Returns the id of the stored record.
    ///
    /// On error the store is left untouched.
    pub fn commit(&self, store: &mut EmployeeStore) -> Result<EmployeeId, EditorError> {
        match self.mode {
            ModalMode::Add => {
                let mut id = EmployeeId::new_v4();
                while store.contains(&id) {
                    id = EmployeeId::new_v4();
                }
                let employee = self.draft.to_employee(id.clone())?;
                store.add(employee)?;
                Ok(id)
            }
            ModalMode::Edit => {
                let id = self.draft.id.clone().ok_or(EditorError::MissingId)?;
                let employee = self.draft.to_employee(id.clone())?;
                store.replace(employee)?;
                Ok(id)
            }
        }
    }
}
