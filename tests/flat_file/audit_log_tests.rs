//! Change-log appends and reads.

use super::helpers::{DataDir, contents, data_dir, seed};
use chrono::NaiveDate;
use rstest::rstest;
use taskapp::audit::{
    adapters::flat_file::FlatFileAuditLog, domain::AuditEntry, ports::AuditLogRepository,
};
use taskapp::task::domain::{TaskCode, TaskStatus};
use taskapp::user::domain::UserCode;

fn entry(task: u32, user: u32, status: TaskStatus, day: u32) -> AuditEntry {
    AuditEntry::new(
        TaskCode::new(task).expect("valid task code"),
        UserCode::new(user).expect("valid user code"),
        status,
        NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date"),
    )
}

#[rstest]
fn appends_accumulate_in_order(data_dir: DataDir) {
    let log = FlatFileAuditLog::new(data_dir.storage.logs.clone());

    log.append(&entry(101, 1, TaskStatus::NotStarted, 1))
        .expect("first append");
    log.append(&entry(101, 2, TaskStatus::InProgress, 2))
        .expect("second append");

    assert_eq!(
        contents(&data_dir.storage.logs),
        "Task_Code,Change_User_Code,Status,Change_Date\n\
         101,1,0,2024-03-01\n\
         101,2,1,2024-03-02\n"
    );
}

#[rstest]
fn find_by_task_filters_entries(data_dir: DataDir) {
    let log = FlatFileAuditLog::new(data_dir.storage.logs.clone());
    for item in [
        entry(1, 1, TaskStatus::NotStarted, 1),
        entry(2, 1, TaskStatus::NotStarted, 2),
        entry(1, 2, TaskStatus::InProgress, 3),
    ] {
        log.append(&item).expect("append");
    }

    let trail = log
        .find_by_task(TaskCode::new(1).expect("valid task code"))
        .expect("read trail");

    let statuses: Vec<TaskStatus> = trail.iter().map(AuditEntry::status).collect();
    assert_eq!(statuses, vec![TaskStatus::NotStarted, TaskStatus::InProgress]);
}

#[rstest]
fn rows_with_bad_dates_are_skipped(data_dir: DataDir) {
    seed(
        &data_dir.storage.logs,
        "Task_Code,Change_User_Code,Status,Change_Date\n1,1,0,yesterday\n1,1,1,2024-03-04\n",
    );

    let scan = FlatFileAuditLog::new(data_dir.storage.logs.clone())
        .find_all()
        .expect("scan");

    assert_eq!(scan.records(), &[entry(1, 1, TaskStatus::InProgress, 4)]);
    assert_eq!(scan.skipped().len(), 1);
}
