use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn savvy(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("savvy").unwrap();
    cmd.current_dir(dir.path())
        .env("SAVVY_ROOT", dir.path())
        .env_remove("SANITY_API_TOKEN")
        .env_remove("SANITY_TOKEN")
        .env_remove("SAVVY_CMS_ENDPOINT");
    cmd
}

// ---------------------------------------------------------------------------
// savvy init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_site_scaffold() {
    let dir = TempDir::new().unwrap();
    savvy(&dir).arg("init").assert().success();

    assert!(dir.path().join("site.yaml").exists());
    assert!(dir.path().join("content/pages/savvy-lab/project").is_dir());
}

#[test]
fn init_is_idempotent() {
    let dir = TempDir::new().unwrap();
    savvy(&dir).arg("init").assert().success();
    savvy(&dir).arg("init").assert().success();
}

#[test]
fn init_preserves_existing_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("site.yaml"), "server:\n  port: 9999\n").unwrap();
    savvy(&dir).arg("init").assert().success();

    let content = std::fs::read_to_string(dir.path().join("site.yaml")).unwrap();
    assert!(content.contains("9999"));
}

// ---------------------------------------------------------------------------
// savvy generate-page
// ---------------------------------------------------------------------------

#[test]
fn generate_page_writes_manifest_for_project_id() {
    let dir = TempDir::new().unwrap();
    savvy(&dir)
        .args(["generate-page", "vynl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("savvy-lab/project/vynl"));

    let manifest = dir
        .path()
        .join("content/pages/savvy-lab/project/vynl/page.yaml");
    assert!(manifest.exists());
    let content = std::fs::read_to_string(&manifest).unwrap();
    assert!(content.contains("project: vynl"));
}

#[test]
fn generate_page_refuses_overwrite_without_force() {
    let dir = TempDir::new().unwrap();
    savvy(&dir).args(["generate-page", "vynl"]).assert().success();
    savvy(&dir)
        .args(["generate-page", "vynl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    savvy(&dir)
        .args(["generate-page", "vynl", "--force"])
        .assert()
        .success();
}

#[test]
fn generate_page_rejects_bad_ids() {
    let dir = TempDir::new().unwrap();
    savvy(&dir)
        .args(["generate-page", "Not A Slug"])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// savvy seed
// ---------------------------------------------------------------------------

#[test]
fn seed_dry_run_lists_lab_fixtures() {
    let dir = TempDir::new().unwrap();
    savvy(&dir)
        .args(["seed", "lab", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8 documents"))
        .stdout(predicate::str::contains("developers"))
        .stdout(predicate::str::contains("everyone"))
        .stdout(predicate::str::contains("creators"));
}

#[test]
fn seed_rejects_unknown_target() {
    let dir = TempDir::new().unwrap();
    savvy(&dir)
        .args(["seed", "widgets", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown seed target"));
}

#[test]
fn seed_without_token_fails_before_the_loop() {
    let dir = TempDir::new().unwrap();
    savvy(&dir)
        .args(["seed", "lab"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SANITY_API_TOKEN"));
}

#[test]
fn seed_pushes_every_fixture() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", "/data/mutate/production")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results":[{"id":"gen-1"}]}"#)
        .expect_at_least(8)
        .create();

    let dir = TempDir::new().unwrap();
    savvy(&dir)
        .args(["seed", "lab"])
        .env("SAVVY_CMS_ENDPOINT", server.url())
        // Legacy token spelling still works.
        .env("SANITY_TOKEN", "tok-legacy")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 8 of 8"));
}

#[test]
fn seed_exits_zero_when_every_item_fails() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("POST", "/data/mutate/production")
        .with_status(500)
        .with_body("boom")
        .expect_at_least(1)
        .create();

    let dir = TempDir::new().unwrap();
    savvy(&dir)
        .args(["seed", "impact"])
        .env("SAVVY_CMS_ENDPOINT", server.url())
        .env("SANITY_API_TOKEN", "tok")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 0 of 4"));
}
