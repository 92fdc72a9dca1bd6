//! Tasks file reads, appends and rewrites.

use std::sync::Arc;

use super::helpers::{
    DataDir, contents, data_dir, exists, raw_contents, seed, seed_bytes,
};
use rstest::rstest;
use taskapp::storage::{RowError, ScanStatus};
use taskapp::task::{
    adapters::flat_file::FlatFileTaskRepository,
    domain::{Task, TaskCode, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
};
use taskapp::user::{
    adapters::flat_file::FlatFileUserRepository, domain::UserCode, ports::UserRepository,
};

type Repo = FlatFileTaskRepository<FlatFileUserRepository>;

fn repo(data: &DataDir) -> Repo {
    let users = Arc::new(FlatFileUserRepository::new(data.storage.users.clone()));
    FlatFileTaskRepository::new(data.storage.tasks.clone(), users)
}

fn code(value: u32) -> TaskCode {
    TaskCode::new(value).expect("valid task code")
}

fn new_task(data: &DataDir, task_code: u32, name: &str, assignee: u32) -> Task {
    let users = FlatFileUserRepository::new(data.storage.users.clone());
    let user = users
        .find_by_code(UserCode::new(assignee).expect("valid user code"))
        .expect("lookup")
        .expect("seeded user");
    Task::new(code(task_code), name, user).expect("valid task")
}

#[rstest]
fn store_creates_file_with_header(data_dir: DataDir) {
    let task = new_task(&data_dir, 101, "Write spec", 1);

    repo(&data_dir).store(&task).expect("store");

    assert_eq!(
        contents(&data_dir.storage.tasks),
        "Code,Name,Status,Rep_User_Code\n101,Write spec,0,1\n"
    );
}

#[rstest]
fn stored_task_reads_back_with_resolved_assignee(data_dir: DataDir) {
    let repository = repo(&data_dir);
    repository
        .store(&new_task(&data_dir, 7, "Review", 2))
        .expect("store");

    let found = repository
        .find_by_code(code(7))
        .expect("lookup")
        .expect("task exists");

    assert_eq!(found.name(), "Review");
    assert_eq!(found.status(), TaskStatus::NotStarted);
    assert_eq!(
        found.assignee().user().map(taskapp::user::domain::User::name),
        Some("Bob")
    );
}

#[rstest]
fn unknown_assignee_is_kept_unresolved(data_dir: DataDir) {
    seed(
        &data_dir.storage.tasks,
        "Code,Name,Status,Rep_User_Code\n5,Orphan,1,99\n",
    );

    let found = repo(&data_dir)
        .find_by_code(code(5))
        .expect("lookup")
        .expect("task exists");

    assert_eq!(found.assignee().code().value(), 99);
    assert!(found.assignee().user().is_none());
}

#[rstest]
fn malformed_rows_are_reported_and_skipped(data_dir: DataDir) {
    seed(
        &data_dir.storage.tasks,
        "Code,Name,Status,Rep_User_Code\n1,Good,0,1\n2,Bad,7,1\nnot a row\n",
    );

    let scan = repo(&data_dir).find_all().expect("scan");

    assert_eq!(scan.status(), ScanStatus::Partial);
    assert_eq!(scan.records().len(), 1);
    assert_eq!(scan.skipped().len(), 2);
}

#[rstest]
fn update_rewrites_only_the_target_row(data_dir: DataDir) {
    seed(
        &data_dir.storage.tasks,
        "Code,Name,Status,Rep_User_Code\n1,First,0,1\ngarbage\n2,Second,0,2\n",
    );
    let repository = repo(&data_dir);
    let mut task = repository
        .find_by_code(code(2))
        .expect("lookup")
        .expect("task exists");
    task.transition_to(TaskStatus::InProgress)
        .expect("allowed transition");

    repository.update(&task).expect("update");

    assert_eq!(
        contents(&data_dir.storage.tasks),
        "Code,Name,Status,Rep_User_Code\n1,First,0,1\ngarbage\n2,Second,1,2\n"
    );
}

#[rstest]
fn update_of_missing_task_is_not_found(data_dir: DataDir) {
    seed(&data_dir.storage.tasks, "Code,Name,Status,Rep_User_Code\n");
    let task = new_task(&data_dir, 3, "Ghost", 1);

    let result = repo(&data_dir).update(&task);

    assert!(matches!(result, Err(TaskRepositoryError::NotFound(found)) if found == code(3)));
}

#[rstest]
fn delete_removes_row(data_dir: DataDir) {
    seed(
        &data_dir.storage.tasks,
        "Code,Name,Status,Rep_User_Code\n1,First,2,1\n2,Second,0,2\n",
    );

    repo(&data_dir).delete(code(1)).expect("delete");

    assert_eq!(
        contents(&data_dir.storage.tasks),
        "Code,Name,Status,Rep_User_Code\n2,Second,0,2\n"
    );
}

#[rstest]
fn missing_tasks_file_is_a_persistence_error(data_dir: DataDir) {
    assert!(!exists(&data_dir.storage.tasks));

    let result = repo(&data_dir).find_all();

    assert!(matches!(result, Err(TaskRepositoryError::Persistence(_))));
}

#[rstest]
fn badly_encoded_row_does_not_hide_well_formed_rows(data_dir: DataDir) {
    seed_bytes(
        &data_dir.storage.tasks,
        b"Code,Name,Status,Rep_User_Code\n1,Good,0,1\n2,\x83\x65,0,1\n",
    );

    let scan = repo(&data_dir).find_all().expect("scan");

    let codes: Vec<u32> = scan.records().iter().map(|task| task.code().value()).collect();
    assert_eq!(codes, vec![1]);
    let reasons: Vec<RowError> = scan.skipped().iter().map(|row| row.reason.clone()).collect();
    assert_eq!(reasons, vec![RowError::InvalidEncoding]);
}

#[rstest]
fn update_keeps_badly_encoded_row_bytes(data_dir: DataDir) {
    seed_bytes(
        &data_dir.storage.tasks,
        b"Code,Name,Status,Rep_User_Code\n1,Good,0,1\n2,\x83\x65,0,1\n",
    );
    let repository = repo(&data_dir);
    let mut task = repository
        .find_by_code(code(1))
        .expect("lookup")
        .expect("task exists");
    task.transition_to(TaskStatus::InProgress)
        .expect("allowed transition");

    repository.update(&task).expect("update");

    assert_eq!(
        raw_contents(&data_dir.storage.tasks),
        b"Code,Name,Status,Rep_User_Code\n1,Good,1,1\n2,\x83\x65,0,1\n".to_vec()
    );
}
