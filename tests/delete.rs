use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn phonebook(storage_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env_remove("PHONEBOOK_STORAGE")
        .env_remove("PHONEBOOK_LOG")
        .env("PHONEBOOK_STORAGE_PATH", storage_path);
    cmd
}

#[test]
fn deleting_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("storage.json").to_string_lossy().to_string();

    // Delete a seed contact by id
    phonebook(&path)
        .args(["delete", "--id", "id-2", "--name", "Hermione Kline"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Hermione Kline was removed from contacts.",
        ));

    let saved = fs::read_to_string(&path)?;
    assert!(saved.contains("contact-list"));
    assert!(!saved.contains("id-2"));

    phonebook(&path)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hermione Kline").not())
        .stdout(predicate::str::contains("  2. Eden Clements"));

    // Delete by name alone, any casing
    phonebook(&path)
        .args(["delete", "--name", "annie copeland"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Annie Copeland was removed from contacts.",
        ));

    phonebook(&path)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Annie Copeland").not());

    Ok(())
}

#[test]
fn deleting_unknown_contacts() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("storage.json").to_string_lossy().to_string();

    // Unknown name is an error
    phonebook(&path)
        .args(["delete", "--name", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact Not found"));

    // Unknown id still reports a removal and leaves the list alone
    phonebook(&path)
        .args(["delete", "--id", "id-99"])
        .assert()
        .success()
        .stderr(predicate::str::contains("id-99 was removed from contacts."));

    phonebook(&path)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  4. Annie Copeland"));

    // Neither id nor name
    phonebook(&path)
        .args(["delete"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Provide --id or --name"));

    Ok(())
}
