//! Tests for loading descriptions into a registry

use pretty_assertions::assert_eq;
use rstest::rstest;
use solgen_fs::NormalizedPath;
use solgen_meta::{DescriptionLoader, Error};
use tempfile::TempDir;

const GAME: &str = r#"
[[solutions]]
name = "Game"
configurations = ["Debug", "Release"]
platforms = ["x86", "x64"]

[[solutions.blocks]]
settings = { defines = ["GAME"] }

[[solutions.projects]]
name = "Engine"
location = "build"
files = ["src/engine.cpp", "include/engine.h"]

[[solutions.projects.vpaths]]
stem = "Headers/*"
patterns = ["include/*"]

[[solutions.projects.configmap]]
buildcfg = "Release"
to_buildcfg = "Ship"

[[solutions.projects.blocks]]
terms = ["Debug"]
settings = { defines = ["DEBUG"] }

[[solutions.projects]]
name = "Editor"
basedir = "editor"
files = ["main.cpp"]
"#;

fn parse(content: &str) -> solgen_meta::Result<solgen_meta::Registry> {
    DescriptionLoader::new().parse(
        &NormalizedPath::new("solgen.toml"),
        content,
        &NormalizedPath::new("/work/game"),
    )
}

#[test]
fn test_parse_solution_axes() {
    let registry = parse(GAME).unwrap();
    let game = registry.find_solution("game").unwrap();
    assert_eq!(game.configurations(), ["Debug", "Release"]);
    assert_eq!(game.platforms(), ["x86", "x64"]);
    assert_eq!(game.location().as_str(), "/work/game");
    assert_eq!(game.blocks().len(), 1);
}

#[test]
fn test_parse_project_paths() {
    let registry = parse(GAME).unwrap();
    let engine = registry.find_project("Engine").unwrap();
    assert_eq!(engine.basedir().as_str(), "/work/game");
    assert_eq!(engine.location().as_str(), "/work/game/build");
    let files: Vec<&str> = engine.files().iter().map(|f| f.as_str()).collect();
    assert_eq!(files, vec!["/work/game/src/engine.cpp", "/work/game/include/engine.h"]);

    let editor = registry.find_project("editor").unwrap();
    assert_eq!(editor.basedir().as_str(), "/work/game/editor");
    assert_eq!(editor.files()[0].as_str(), "/work/game/editor/main.cpp");
}

#[test]
fn test_parse_project_rules_and_blocks() {
    let registry = parse(GAME).unwrap();
    let engine = registry.find_project("Engine").unwrap();
    assert_eq!(engine.vpaths().len(), 1);
    assert_eq!(engine.vpaths()[0].stem(), "Headers/*");
    assert_eq!(engine.blocks().len(), 1);
    assert_eq!(engine.map_config("Release", Some("x86")), ("Ship", Some("x86")));
}

#[rstest]
#[case("X", "a/*/b/*")]
#[case("X", "src/**/*.h")]
#[case("A/*/B/*", "src/*")]
#[case("Src/*/Files", "src/*")]
fn test_parse_rejects_unsupported_wildcards(#[case] stem: &str, #[case] pattern: &str) {
    let content = format!(
        r#"
[[solutions]]
name = "S"

[[solutions.projects]]
name = "P"

[[solutions.projects.vpaths]]
stem = "{stem}"
patterns = ["{pattern}"]
"#
    );
    let err = parse(&content).unwrap_err();
    assert!(matches!(err, Error::UnsupportedWildcard { .. }), "got {err:?}");
}

#[rstest]
#[case("Headers/*", "include/*")]
#[case("", "**.h")]
#[case("Sources", "src/main.c")]
fn test_parse_accepts_single_wildcard_run(#[case] stem: &str, #[case] pattern: &str) {
    let content = format!(
        r#"
[[solutions]]
name = "S"

[[solutions.projects]]
name = "P"

[[solutions.projects.vpaths]]
stem = "{stem}"
patterns = ["{pattern}"]
"#
    );
    let registry = parse(&content).unwrap();
    let project = registry.find_project("P").unwrap();
    assert_eq!(project.vpaths()[0].stem(), stem);
}

#[test]
fn test_parse_rejects_duplicate_projects() {
    let content = r#"
[[solutions]]
name = "S"

[[solutions.projects]]
name = "P"

[[solutions.projects]]
name = "p"
"#;
    let err = parse(content).unwrap_err();
    assert!(matches!(err, Error::DuplicateProject { .. }));
}

#[test]
fn test_parse_invalid_toml_is_fs_error() {
    let err = parse("[[solutions]\nname=").unwrap_err();
    assert!(matches!(err, Error::Fs(solgen_fs::Error::ConfigParse { .. })));
}

#[test]
fn test_load_from_disk_resolves_against_file_directory() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("game.yaml");
    std::fs::write(
        &path,
        "solutions:\n  - name: Game\n    configurations: [Debug]\n    projects:\n      - name: App\n        files: [src/main.c]\n",
    )
    .unwrap();

    let registry = DescriptionLoader::new()
        .load(&NormalizedPath::new(&path))
        .unwrap();
    let app = registry.find_project("App").unwrap();
    let expected_dir = NormalizedPath::new(canonical_dir(temp.path()));
    assert_eq!(app.basedir(), &expected_dir);
    assert!(app.files()[0].as_str().ends_with("/src/main.c"));
}

fn canonical_dir(path: &std::path::Path) -> std::path::PathBuf {
    let canonical = std::fs::canonicalize(path).unwrap();
    // Strip the verbatim prefix Windows adds so the comparison matches the loader.
    let text = canonical.to_string_lossy().replace("\\\\?\\", "");
    std::path::PathBuf::from(text)
}
