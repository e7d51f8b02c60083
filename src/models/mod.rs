// Models module for data structures
pub mod category;
pub mod creation_report;
pub mod folder_name;
