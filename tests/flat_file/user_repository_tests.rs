//! Users file lookups.

use super::helpers::{DataDir, data_dir, seed};
use rstest::rstest;
use taskapp::storage::ScanStatus;
use taskapp::user::{
    adapters::flat_file::FlatFileUserRepository, domain::UserCode, ports::UserRepository,
};

fn repo(data: &DataDir) -> FlatFileUserRepository {
    FlatFileUserRepository::new(data.storage.users.clone())
}

#[rstest]
fn finds_user_by_code(data_dir: DataDir) {
    let found = repo(&data_dir)
        .find_by_code(UserCode::new(2).expect("valid code"))
        .expect("lookup");

    let user = found.expect("Bob exists");
    assert_eq!(user.name(), "Bob");
    assert_eq!(user.email(), "b@x.com");
}

#[rstest]
#[case("a@x.com", "pw", Some(1))]
#[case("a@x.com", "wrong", None)]
#[case("nobody@x.com", "pw", None)]
#[case("A@X.COM", "pw", None)]
fn credential_lookup_is_exact(
    data_dir: DataDir,
    #[case] email: &str,
    #[case] password: &str,
    #[case] expected: Option<u32>,
) {
    let found = repo(&data_dir)
        .find_by_email_and_password(email, password)
        .expect("lookup");

    assert_eq!(found.map(|user| user.code().value()), expected);
}

#[rstest]
fn last_matching_row_wins(data_dir: DataDir) {
    seed(
        &data_dir.storage.users,
        "Code,Name,Email,Password\n1,Alice,a@x.com,pw\n3,Alicia,a@x.com,pw\n",
    );

    let found = repo(&data_dir)
        .find_by_email_and_password("a@x.com", "pw")
        .expect("lookup")
        .expect("a match");

    assert_eq!(found.name(), "Alicia");
}

#[rstest]
fn malformed_rows_are_skipped(data_dir: DataDir) {
    seed(
        &data_dir.storage.users,
        "Code,Name,Email,Password\nzero,Bad,z@x.com,pw\n1,Alice,a@x.com,pw\n1,Short\n",
    );

    let scan = repo(&data_dir).scan().expect("scan");

    assert_eq!(scan.records().len(), 1);
    assert_eq!(scan.status(), ScanStatus::Partial);
    let lines: Vec<usize> = scan.skipped().iter().map(|row| row.line_number).collect();
    assert_eq!(lines, vec![2, 4]);
}

#[rstest]
fn missing_users_file_is_an_error(data_dir: DataDir) {
    std::fs::remove_file(&data_dir.storage.users).expect("remove users file");

    let result = repo(&data_dir).find_by_email_and_password("a@x.com", "pw");

    assert!(result.is_err());
}
