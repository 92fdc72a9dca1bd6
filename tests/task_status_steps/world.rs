//! Shared world state for task status BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskapp::audit::adapters::memory::InMemoryAuditLog;
use taskapp::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::Task,
    services::{TaskLifecycleError, TaskLifecycleService},
};
use taskapp::user::{
    adapters::memory::InMemoryUserRepository,
    domain::{Password, User, UserCode},
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryUserRepository,
    InMemoryAuditLog,
    DefaultClock,
>;

/// Scenario world for task status behaviour tests.
pub struct TaskStatusWorld {
    pub service: TestTaskService,
    pub users: Arc<InMemoryUserRepository>,
    pub audit: Arc<InMemoryAuditLog>,
    pub login_user: Option<User>,
    pub last_task: Option<Task>,
    pub last_change_result: Option<Result<Task, TaskLifecycleError>>,
}

impl TaskStatusWorld {
    /// Creates a world with two registered users and no tasks.
    #[must_use]
    pub fn new() -> Self {
        let users = Arc::new(InMemoryUserRepository::with_users(
            [(1, "Alice"), (2, "Bob")]
                .into_iter()
                .filter_map(|(code, name)| seeded_user(code, name)),
        ));
        let audit = Arc::new(InMemoryAuditLog::new());
        let service = TaskLifecycleService::new(
            Arc::new(InMemoryTaskRepository::new()),
            Arc::clone(&users),
            Arc::clone(&audit),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            users,
            audit,
            login_user: None,
            last_task: None,
            last_change_result: None,
        }
    }

    /// Returns the logged-in user.
    ///
    /// # Errors
    ///
    /// Returns an error when no login step has run.
    pub fn login_user(&self) -> Result<&User, eyre::Report> {
        self.login_user
            .as_ref()
            .ok_or_else(|| eyre::eyre!("no user logged in for scenario"))
    }

    /// Returns the task created by the scenario.
    ///
    /// # Errors
    ///
    /// Returns an error when no task was created.
    pub fn last_task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))
    }
}

impl Default for TaskStatusWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn seeded_user(code: u32, name: &str) -> Option<User> {
    let user_code = UserCode::new(code).ok()?;
    Some(User::new(
        user_code,
        name,
        format!("{}@x.com", name.to_ascii_lowercase()),
        Password::new("pw"),
    ))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskStatusWorld {
    TaskStatusWorld::default()
}
