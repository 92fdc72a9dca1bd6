//! Flat-file adapter storing `Task_Code,Change_User_Code,Status,Change_Date`
//! rows.

mod repository;
mod row;

pub use repository::FlatFileAuditLog;
pub use row::AuditRowFormat;
