//! Employee add/edit modal
//!
//! - model.rs: editor state and commit into the store (no signals)
//! - view_model.rs: signals and commands
//! - view.rs: Leptos component

mod model;
mod view;
mod view_model;

pub use model::{EditorError, EmployeeEditor, ModalMode};
pub use view::EmployeeDetails;
pub use view_model::EmployeeDetailsViewModel;
