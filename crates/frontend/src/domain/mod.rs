pub mod a001_employee;
pub mod a002_employee_category;
