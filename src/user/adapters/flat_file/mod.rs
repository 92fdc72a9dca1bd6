//! Flat-file adapter reading `Code,Name,Email,Password` rows.

mod repository;
mod row;

pub use repository::FlatFileUserRepository;
pub use row::UserRowFormat;
