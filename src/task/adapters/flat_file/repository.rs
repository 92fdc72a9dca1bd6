//! Flat-file implementation of the task repository port.

use std::sync::Arc;

use camino::Utf8PathBuf;

use super::{TaskRow, TaskRowFormat};
use crate::storage::{FlatFileTable, RowFormat, Scan};
use crate::task::{
    domain::{Assignee, PersistedTaskData, Task, TaskCode},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use crate::user::ports::UserRepository;

/// Task repository backed by a delimited tasks file.
///
/// Assignees are resolved through the user repository on every read.
#[derive(Debug, Clone)]
pub struct FlatFileTaskRepository<U>
where
    U: UserRepository,
{
    table: FlatFileTable,
    users: Arc<U>,
}

impl<U> FlatFileTaskRepository<U>
where
    U: UserRepository,
{
    /// Creates a repository for the tasks file at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, users: Arc<U>) -> Self {
        Self {
            table: FlatFileTable::for_format::<TaskRowFormat>(path),
            users,
        }
    }

    fn scan_rows(&self) -> TaskRepositoryResult<Scan<TaskRow>> {
        self.table
            .scan::<TaskRowFormat>()
            .map_err(TaskRepositoryError::persistence)
    }

    fn resolve(&self, row: TaskRow) -> Task {
        let assignee = match self.users.find_by_code(row.assignee_code) {
            Ok(Some(user)) => Assignee::resolved(user),
            Ok(None) => {
                tracing::warn!(
                    task = %row.code,
                    assignee = %row.assignee_code,
                    "task assignee does not exist"
                );
                Assignee::unresolved(row.assignee_code)
            }
            Err(err) => {
                tracing::warn!(
                    task = %row.code,
                    assignee = %row.assignee_code,
                    error = %err,
                    "could not resolve task assignee"
                );
                Assignee::unresolved(row.assignee_code)
            }
        };
        Task::from_persisted(PersistedTaskData {
            code: row.code,
            name: row.name,
            status: row.status,
            assignee,
        })
    }

    /// Rewrites the file, replacing or dropping every row carrying `code`.
    ///
    /// Rows that fail to decode are carried over verbatim.
    fn rewrite(&self, code: TaskCode, replacement: Option<&str>) -> TaskRepositoryResult<()> {
        let lines = self
            .table
            .read_lines()
            .map_err(TaskRepositoryError::persistence)?;

        let mut matched = false;
        let mut output = Vec::with_capacity(lines.len());
        for line in lines {
            let is_target = line
                .decode::<TaskRowFormat>()
                .is_ok_and(|row| row.code == code);
            if !is_target {
                output.push(line.raw);
                continue;
            }
            matched = true;
            if let Some(text) = replacement {
                output.push(text.as_bytes().to_vec());
            }
        }

        if !matched {
            return Err(TaskRepositoryError::NotFound(code));
        }
        self.table
            .replace_lines(output)
            .map_err(TaskRepositoryError::persistence)
    }
}

impl<U> TaskRepository for FlatFileTaskRepository<U>
where
    U: UserRepository,
{
    fn find_all(&self) -> TaskRepositoryResult<Scan<Task>> {
        Ok(self.scan_rows()?.map(|row| self.resolve(row)))
    }

    fn find_by_code(&self, code: TaskCode) -> TaskRepositoryResult<Option<Task>> {
        Ok(self
            .scan_rows()?
            .into_records()
            .into_iter()
            .find(|row| row.code == code)
            .map(|row| self.resolve(row)))
    }

    fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let line = TaskRowFormat::encode(&TaskRow::from_task(task));
        self.table
            .append_line(&line)
            .map_err(TaskRepositoryError::persistence)
    }

    fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let line = TaskRowFormat::encode(&TaskRow::from_task(task));
        self.rewrite(task.code(), Some(&line))
    }

    fn delete(&self, code: TaskCode) -> TaskRepositoryResult<()> {
        self.rewrite(code, None)
    }
}
