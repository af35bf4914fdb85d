use leptos::prelude::*;

/// Per-mount UI state of the employee list. Resets on every remount.
#[derive(Clone, Copy)]
pub struct EmployeeListState {
    pub search_query: RwSignal<String>,
}

pub fn create_state() -> EmployeeListState {
    EmployeeListState {
        search_query: RwSignal::new(String::new()),
    }
}
