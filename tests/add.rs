use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn phonebook(storage_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env_remove("PHONEBOOK_STORAGE")
        .env_remove("PHONEBOOK_LOG")
        .env("PHONEBOOK_STORAGE_PATH", storage_path);
    cmd
}

#[test]
fn add_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("storage.json").to_string_lossy().to_string();

    // Add a contact
    phonebook(&path)
        .args(["add", "--name", "Jamie Fox", "--number", "555-55-55"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Jamie Fox is added to contacts."));

    // Confirm newly added contact exist after the seed contacts
    phonebook(&path)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Rosie Simpson"))
        .stdout(predicate::str::contains("  5. Jamie Fox            555-55-55"));

    // Attempt to add duplicate contact with different casing
    phonebook(&path)
        .args(["add", "--name", "JAMIE FOX", "--number", "000-00-00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JAMIE FOX is already in contacts."));

    phonebook(&path)
        .args(["list", "--filter", "jamie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("555-55-55"))
        .stdout(predicate::str::contains("000-00-00").not());

    Ok(())
}

#[test]
fn seed_duplicate_is_rejected_without_writing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("storage.json");

    phonebook(&path.to_string_lossy())
        .args(["add", "--name", "Rosie Simpson", "--number", "000-00-00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Rosie Simpson is already in contacts."));

    assert!(!path.exists());
    Ok(())
}

#[test]
fn invalid_inputs() {
    // INVALID COMMAND
    Command::cargo_bin("phonebook")
        .unwrap()
        .args(["and", "--name", "Alice", "--number", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand 'and'"));

    // MISSING NUMBER
    Command::cargo_bin("phonebook")
        .unwrap()
        .args(["add", "--name", "Alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--number"));

    // UNKNOWN STORAGE
    Command::cargo_bin("phonebook")
        .unwrap()
        .args(["--storage", "txt", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Validation failed: Not a recognized storage medium",
        ));
}

#[test]
fn blank_name_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("storage.json").to_string_lossy().to_string();

    phonebook(&path)
        .args(["add", "--name", "   ", "--number", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Name must not be empty"));

    Ok(())
}
