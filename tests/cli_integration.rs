use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn phonebook(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env("PHONEBOOK_HOME", home.path()).env("NO_COLOR", "1");
    cmd
}

fn add_ivan(home: &TempDir) {
    phonebook(home)
        .args([
            "add",
            "--first-name",
            "Ivan",
            "--middle-name",
            "Ivanovich",
            "--last-name",
            "Ivanov",
            "--organization",
            "Yandex",
            "--work-phone",
            "+79220000000",
            "--personal-phone",
            "+79221111111",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record 1 added"));
}

#[test]
fn test_first_run_creates_files() {
    let home = TempDir::new().unwrap();
    phonebook(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("page 1 of 1"));

    assert!(home.path().join("phonebook.csv").exists());
    assert!(home.path().join("settings.json").exists());
}

#[test]
fn test_add_then_search() {
    let home = TempDir::new().unwrap();
    add_ivan(&home);

    phonebook(&home)
        .args(["search", "--first-name", "iv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ivanov"));

    phonebook(&home)
        .args(["search", "--first-name", "Ivan", "--strict", "--case-sensitive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+79221111111"));

    phonebook(&home)
        .args(["search", "--first-name", "ivan", "--strict", "--case-sensitive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records match"));
}

#[test]
fn test_edit_keeps_other_fields() {
    let home = TempDir::new().unwrap();
    add_ivan(&home);

    phonebook(&home)
        .args(["edit", "1", "--first-name", "Petr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Record 1 updated"));

    let csv = std::fs::read_to_string(home.path().join("phonebook.csv")).unwrap();
    assert!(csv.contains("1,Petr,Ivanovich,Ivanov,Yandex,+79220000000,+79221111111"));
    assert!(!csv.contains("1,Ivan,"));
}

#[test]
fn test_edit_unknown_id_fails() {
    let home = TempDir::new().unwrap();
    add_ivan(&home);

    phonebook(&home)
        .args(["edit", "2", "--first-name", "Petr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Record 2 not found"));
}

#[test]
fn test_add_rejects_long_values() {
    let home = TempDir::new().unwrap();
    phonebook(&home)
        .args(["add", "--organization", "Horns and Hooves Limited"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Organization"));

    let csv = std::fs::read_to_string(home.path().join("phonebook.csv")).unwrap();
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn test_list_pages() {
    let home = TempDir::new().unwrap();
    phonebook(&home)
        .args(["config", "records_per_page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("records_per_page set to 2"));

    for name in ["Anna", "Boris", "Vera"] {
        phonebook(&home)
            .args(["add", "--first-name", name])
            .assert()
            .success();
    }

    phonebook(&home)
        .args(["list", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page 2 of 2"))
        .stdout(predicate::str::contains("Vera"))
        .stdout(predicate::str::contains("Anna").not());
}

#[test]
fn test_view_and_fields() {
    let home = TempDir::new().unwrap();
    add_ivan(&home);

    phonebook(&home)
        .args(["view", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Yandex"));

    phonebook(&home)
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("FirstName\nMiddleName\nLastName"));
}
