//! End-to-end tests for the envedit binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Command with the config and backup directories isolated in `home`
fn envedit(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("envedit").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

fn backup_count(home: &TempDir) -> usize {
    let dir = home.path().join(".config/envedit/backups");
    if !dir.exists() {
        return 0;
    }
    fs::read_dir(dir).unwrap().count()
}

fn file_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_list_shows_exports() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".zshrc");
    fs::write(&rc, "# comment\nexport EDITOR=nvim\nalias ll='ls -la'\nexport LANG=\"en_US.UTF-8\"\n").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EDITOR"))
        .stdout(predicate::str::contains("en_US.UTF-8"))
        .stdout(predicate::str::contains("alias").not());
}

#[test]
fn test_set_appends_new_variable() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".bashrc");
    fs::write(&rc, "export EDITOR=nvim\n").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "bash", "--yes", "set", "GOPATH=$HOME/go"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved"));

    let content = fs::read_to_string(&rc).unwrap();
    assert_eq!(content, "export EDITOR=nvim\nexport GOPATH=\"$HOME/go\"\n");
    assert_eq!(backup_count(&home), 1);
}

#[test]
fn test_set_existing_variable_rewrites_in_place() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".zshrc");
    fs::write(&rc, "export EDITOR=vim\nexport PAGER=less\n").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "-y", "set", "EDITOR=nvim"])
        .assert()
        .success();

    let content = fs::read_to_string(&rc).unwrap();
    assert_eq!(content, "export EDITOR=nvim\nexport PAGER=less\n");
}

#[test]
fn test_set_creates_missing_file_with_header() {
    let home = tempdir().unwrap();
    let rc = home.path().join("config.fish");

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "fish", "-y", "set", "EDITOR=nvim"])
        .assert()
        .success();

    let content = fs::read_to_string(&rc).unwrap();
    assert!(content.starts_with("# ~/.config/fish/config.fish"));
    assert!(content.ends_with("set -gx EDITOR nvim\n"));
    assert_eq!(backup_count(&home), 0);
}

#[test]
fn test_unset_comments_out_every_definition() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".zshrc");
    fs::write(&rc, "export A=1\nexport B=2\nexport A=3\n").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "-y", "unset", "A"])
        .assert()
        .success();

    let content = fs::read_to_string(&rc).unwrap();
    assert_eq!(
        content,
        "# export A=1 # Removed by envedit\nexport B=2\n# export A=3 # Removed by envedit\n"
    );
}

#[test]
fn test_unset_unknown_variable_is_a_warning() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".zshrc");
    fs::write(&rc, "export A=1\n").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "-y", "unset", "NOPE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not defined"));

    assert_eq!(fs::read_to_string(&rc).unwrap(), "export A=1\n");
}

#[test]
fn test_dry_run_leaves_file_untouched() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".zshrc");
    fs::write(&rc, "export A=1\n").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "--dry-run", "set", "B=2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("export B=2"))
        .stdout(predicate::str::contains("Dry run"));

    assert_eq!(fs::read_to_string(&rc).unwrap(), "export A=1\n");
    assert_eq!(backup_count(&home), 0);
}

#[test]
fn test_invalid_name_fails() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".zshrc");
    fs::write(&rc, "").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "-y", "set", "1BAD=x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1BAD"));
}

#[test]
fn test_path_add_and_remove() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".zshrc");
    fs::write(&rc, "export PATH=/usr/bin:/bin\n").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "-y", "path", "add", "/opt/tools", "--at", "1"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&rc).unwrap(),
        "export PATH=/opt/tools:/usr/bin:/bin\n"
    );

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "-y", "path", "remove", "3"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&rc).unwrap(),
        "export PATH=/opt/tools:/usr/bin\n"
    );
}

#[test]
fn test_path_dedup_fish() {
    let home = tempdir().unwrap();
    let rc = home.path().join("config.fish");
    fs::write(&rc, "set -gx PATH /usr/bin /bin /usr/bin\n").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "fish", "-y", "path", "dedup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 duplicate"));

    assert_eq!(
        fs::read_to_string(&rc).unwrap(),
        "set -gx PATH /usr/bin:/bin\n"
    );
}

#[test]
fn test_path_on_undefined_variable_fails() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".zshrc");
    fs::write(&rc, "export EDITOR=nvim\n").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "path", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PATH"));
}

#[test]
fn test_check_reports_duplicates() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".zshrc");
    fs::write(&rc, "export A=1\nexport A=2\n").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicate variable 'A'"));
}

#[test]
fn test_init_writes_header_once() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".bashrc");

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "bash", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
    assert!(fs::read_to_string(&rc)
        .unwrap()
        .starts_with("# ~/.bashrc - Bash configuration"));

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "bash", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert!(home.path().join(".config/envedit/config.toml").exists());
}

#[test]
fn test_backup_list_and_restore() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".zshrc");
    fs::write(&rc, "export A=1\n").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "-y", "set", "A=2"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&rc).unwrap(), "export A=2\n");

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "backup", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".zshrc_"));

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "-y", "backup", "restore", ".zshrc_"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored"));
    assert_eq!(fs::read_to_string(&rc).unwrap(), "export A=1\n");
    assert_eq!(backup_count(&home), 2);
}

#[test]
fn test_backup_restore_unknown_id_fails() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".zshrc");
    fs::write(&rc, "export A=1\n").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "-y", "backup", "restore", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Backup not found"));
}

#[test]
fn test_backup_restore_ignores_other_files_backups() {
    let home = tempdir().unwrap();
    let zshrc = home.path().join(".zshrc");
    let bashrc = home.path().join(".bashrc");
    fs::write(&zshrc, "export Z=1\n").unwrap();
    fs::write(&bashrc, "export B=1\n").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&bashrc), "--shell", "bash", "-y", "set", "B=2"])
        .assert()
        .success();

    envedit(&home)
        .args(["--file", file_arg(&zshrc), "--shell", "zsh", "-y", "backup", "restore", "_20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Backup not found"));
    assert_eq!(fs::read_to_string(&zshrc).unwrap(), "export Z=1\n");
}

#[test]
fn test_backup_restore_ambiguous_id_fails() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".zshrc");
    fs::write(&rc, "export A=1\n").unwrap();

    for value in ["A=2", "A=3"] {
        envedit(&home)
            .args(["--file", file_arg(&rc), "--shell", "zsh", "-y", "set", value])
            .assert()
            .success();
    }

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "-y", "backup", "restore", ".zshrc_"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ambiguous"));
    assert_eq!(fs::read_to_string(&rc).unwrap(), "export A=3\n");
}

#[test]
fn test_path_move_huge_count_is_rejected() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".zshrc");
    fs::write(&rc, "export PATH=/a:/b:/c\n").unwrap();

    envedit(&home)
        .args([
            "--file",
            file_arg(&rc),
            "--shell",
            "zsh",
            "-y",
            "path",
            "move",
            "1",
            "2",
            "--count",
            "18446744073709551615",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--count"));
    assert_eq!(fs::read_to_string(&rc).unwrap(), "export PATH=/a:/b:/c\n");
}

#[test]
fn test_path_move_segment() {
    let home = tempdir().unwrap();
    let rc = home.path().join(".zshrc");
    fs::write(&rc, "export PATH=/a:/b:/c\n").unwrap();

    envedit(&home)
        .args(["--file", file_arg(&rc), "--shell", "zsh", "-y", "path", "move", "3", "1"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&rc).unwrap(), "export PATH=/c:/a:/b\n");
}
