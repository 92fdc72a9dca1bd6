//! In-memory user adapter.

mod user;

pub use user::InMemoryUserRepository;
