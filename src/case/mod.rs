pub mod case_model;
pub mod catalog;
pub mod class_name;
