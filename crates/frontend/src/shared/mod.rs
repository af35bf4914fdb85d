pub mod components;
pub mod config;
pub mod data;
pub mod icons;
pub mod modal_frame;
pub mod page_frame;
pub mod page_standard;
