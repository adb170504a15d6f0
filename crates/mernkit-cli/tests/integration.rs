use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn mernkit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mernkit").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn dir_is_empty(dir: &TempDir) -> bool {
    std::fs::read_dir(dir.path()).unwrap().next().is_none()
}

// ---------------------------------------------------------------------------
// mernkit init
// ---------------------------------------------------------------------------

#[test]
fn init_requires_a_name_argument() {
    let dir = TempDir::new().unwrap();
    mernkit(&dir).arg("init").assert().failure();
    assert!(dir_is_empty(&dir));
}

#[test]
fn init_rejects_whitespace_name_without_mutation() {
    let dir = TempDir::new().unwrap();
    mernkit(&dir)
        .args(["init", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage: mernkit init"))
        .stderr(predicate::str::contains("invalid name"));
    assert!(dir_is_empty(&dir));
}

#[test]
fn init_rejects_path_separators_in_name() {
    let dir = TempDir::new().unwrap();
    mernkit(&dir)
        .args(["init", "../escape"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid name"));
    assert!(dir_is_empty(&dir));
}

#[test]
fn init_fails_fast_when_target_exists() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("demo")).unwrap();

    mernkit(&dir)
        .args(["init", "demo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    // nothing was scaffolded into the pre-existing directory
    assert!(std::fs::read_dir(dir.path().join("demo"))
        .unwrap()
        .next()
        .is_none());
}

// ---------------------------------------------------------------------------
// mernkit create:feature
// ---------------------------------------------------------------------------

#[test]
fn create_feature_writes_the_triplet() {
    let dir = TempDir::new().unwrap();
    mernkit(&dir)
        .args(["create:feature", "user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("routes.ts"));

    let model = std::fs::read_to_string(dir.path().join("src/models/user_model.ts")).unwrap();
    assert!(model.contains("IUser"));
    let controller =
        std::fs::read_to_string(dir.path().join("src/controllers/user_controller.ts")).unwrap();
    assert!(controller.contains("user_model"));
    let router = std::fs::read_to_string(dir.path().join("src/routers/user_router.ts")).unwrap();
    assert!(router.contains("userRouter"));
}

#[test]
fn create_feature_rejects_empty_name_without_mutation() {
    let dir = TempDir::new().unwrap();
    mernkit(&dir)
        .args(["create:feature", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage: mernkit create:feature"));
    assert!(dir_is_empty(&dir));
}

#[test]
fn create_feature_json_reports_the_paths() {
    let dir = TempDir::new().unwrap();
    mernkit(&dir)
        .args(["create:feature", "user", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("user_model.ts"))
        .stdout(predicate::str::contains("user_router.ts"));
}

#[test]
fn create_feature_respects_dir_flag() {
    let dir = TempDir::new().unwrap();
    let backend = dir.path().join("backend");
    std::fs::create_dir(&backend).unwrap();

    let mut cmd = Command::cargo_bin("mernkit").unwrap();
    cmd.current_dir(dir.path())
        .args(["create:feature", "user", "--dir", "backend"])
        .assert()
        .success();

    assert!(backend.join("src/models/user_model.ts").exists());
}
