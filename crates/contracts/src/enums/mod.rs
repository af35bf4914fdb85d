pub mod employment_type;
pub mod type_filter;
