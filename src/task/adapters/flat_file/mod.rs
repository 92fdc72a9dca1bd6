//! Flat-file adapter storing `Code,Name,Status,Rep_User_Code` rows.

mod repository;
mod row;

pub use repository::FlatFileTaskRepository;
pub use row::{TaskRow, TaskRowFormat};
