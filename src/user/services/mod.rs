//! Application services for user authentication.

mod login;

pub use login::{LoginError, LoginResult, LoginService};
