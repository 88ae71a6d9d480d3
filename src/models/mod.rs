pub mod error;
pub mod lead;
pub mod presentation;
pub mod property;
pub mod summary;
