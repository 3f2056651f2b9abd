//! End-to-end tests for the solgen binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const GAME_TOML: &str = r#"
[[solutions]]
name = "Game"
configurations = ["Debug", "Release"]
platforms = ["x86", "x64"]

[[solutions.projects]]
name = "App"
basedir = "app"
files = ["src/main.cpp", "src/ui/menu.cpp", "include/app.h"]

[[solutions.projects.vpaths]]
stem = "Headers/*"
patterns = ["include/*"]

[[solutions.projects.blocks]]
settings = { links = ["Engine", "m"] }

[[solutions.projects]]
name = "Engine"
basedir = "engine"
files = ["render.cpp"]

[[solutions.projects.blocks]]
terms = ["Release"]
settings = { links = ["Core"] }

[[solutions.projects]]
name = "Core"
basedir = "core"
files = ["core.cpp"]
"#;

const LOOP_YAML: &str = r#"
solutions:
  - name: Loop
    configurations: [Debug]
    projects:
      - name: A
        blocks:
          - settings: { links: [B] }
      - name: B
        blocks:
          - settings: { links: [A] }
"#;

/// Get a Command for the solgen binary
fn solgen_cmd() -> Command {
    let mut cmd = Command::cargo_bin("solgen").expect("Failed to find solgen binary");
    cmd.env_remove("SOLGEN_FILE").env("NO_COLOR", "1");
    cmd
}

fn write_description(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

fn game() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let file = write_description(dir.path(), "game.toml", GAME_TOML);
    (dir, file)
}

#[test]
fn test_help_lists_commands() {
    solgen_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("configs"))
        .stdout(predicate::str::contains("deps"))
        .stdout(predicate::str::contains("tree"));
}

#[test]
fn test_missing_description_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    solgen_cmd()
        .args(["projects", "-f"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Description file not found"));
}

#[test]
fn test_projects() {
    let (_dir, file) = game();
    solgen_cmd()
        .args(["-f", &file, "projects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Game"))
        .stdout(predicate::str::contains("Engine"))
        .stdout(predicate::str::contains("3 projects in 1 solutions"));
}

#[test]
fn test_configs_with_action_default_system() {
    let (_dir, file) = game();
    solgen_cmd()
        .args(["-f", &file, "--action", "vs2010", "configs", "App"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Debug|x86"))
        .stdout(predicate::str::contains("Release|x64"))
        .stdout(predicate::str::contains("system windows"));
}

#[test]
fn test_configs_with_host_override() {
    let (_dir, file) = game();
    solgen_cmd()
        .args(["-f", &file, "--os", "bsd", "configs", "App", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""system": "bsd""#))
        .stdout(predicate::str::contains(r#""architecture": "x86""#));
}

#[test]
fn test_unknown_project_is_user_error() {
    let (_dir, file) = game();
    solgen_cmd()
        .args(["-f", &file, "configs", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project not found: Nope"));
}

#[test]
fn test_deps_direct_skips_system_libraries() {
    let (_dir, file) = game();
    solgen_cmd()
        .args(["-f", &file, "deps", "app"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Game/Engine"))
        .stdout(predicate::str::contains("Game/Core").not());
}

#[test]
fn test_deps_transitive_order() {
    let (_dir, file) = game();
    solgen_cmd()
        .args(["-f", &file, "deps", "App", "--transitive"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. Game/Core\n   2. Game/Engine\n   3. Game/App",
        ));
}

#[test]
fn test_deps_cycle_fails() {
    let dir = TempDir::new().unwrap();
    let file = write_description(dir.path(), "loop.yaml", LOOP_YAML);
    solgen_cmd()
        .args(["-f", &file, "deps", "A", "-t"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Dependency cycle detected among: Loop/A, Loop/B"));
}

#[test]
fn test_files_show_virtual_paths() {
    let (_dir, file) = game();
    solgen_cmd()
        .args(["-f", &file, "files", "App"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Headers/app.h"))
        .stdout(predicate::str::contains("src/ui/menu.cpp"))
        .stdout(predicate::str::contains("Total: 3 files"));
}

#[test]
fn test_tree_is_sorted() {
    let (_dir, file) = game();
    solgen_cmd()
        .args(["-f", &file, "tree", "App"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "App\n  Headers/\n    app.h\n  src/\n    main.cpp\n    ui/\n      menu.cpp\n",
        ));
}

#[test]
fn test_file_from_environment() {
    let (_dir, file) = game();
    solgen_cmd()
        .env("SOLGEN_FILE", &file)
        .arg("projects")
        .assert()
        .success()
        .stdout(predicate::str::contains("App"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let (_dir, file) = game();
    solgen_cmd()
        .args(["-v", "-f", &file, "configs", "Core"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Resolved target system"));
}
