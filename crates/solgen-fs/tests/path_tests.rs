use pretty_assertions::assert_eq;
use rstest::rstest;
use solgen_fs::NormalizedPath;

#[test]
fn test_normalize_backslashes_to_forward() {
    let path = NormalizedPath::new("foo\\bar\\baz");
    assert_eq!(path.as_str(), "foo/bar/baz");
}

#[test]
fn test_new_does_not_clean() {
    let path = NormalizedPath::new("./foo/../bar");
    assert_eq!(path.as_str(), "./foo/../bar");
}

#[rstest]
#[case("a/../b", "b")]
#[case("./src/a.cpp", "src/a.cpp")]
#[case("../a", "../a")]
#[case("../../a/./b", "../../a/b")]
#[case("a/b/../../..", "..")]
#[case("/a/b/../../c", "/c")]
#[case("/../a", "/a")]
#[case("a/./b//c", "a/b/c")]
#[case(".", ".")]
#[case("a/..", ".")]
#[case("C:\\work\\..\\src", "C:/src")]
fn test_clean(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(input).clean().as_str(), expected);
}

#[rstest]
#[case("/work/app/src/a.c", "/work/app", "src/a.c")]
#[case("/work/app", "/work/app", ".")]
#[case("/work/lib/x.c", "/work/app", "../lib/x.c")]
#[case("/work/app/src/a.c", "/work/app/build/vs2010", "../../src/a.c")]
#[case("src/a.cpp", ".", "src/a.cpp")]
#[case("../vendor/x.c", ".", "../vendor/x.c")]
#[case("src/a.cpp", "build", "../src/a.cpp")]
fn test_relative_to(#[case] target: &str, #[case] base: &str, #[case] expected: &str) {
    let target = NormalizedPath::new(target);
    let base = NormalizedPath::new(base);
    assert_eq!(target.relative_to(&base).as_str(), expected);
}

#[test]
fn test_relative_to_across_roots_returns_target() {
    let target = NormalizedPath::new("/abs/file.c");
    let base = NormalizedPath::new("relative/dir");
    assert_eq!(target.relative_to(&base).as_str(), "/abs/file.c");
}

#[test]
fn test_relative_to_unresolvable_base_returns_target() {
    let target = NormalizedPath::new("src/a.c");
    let base = NormalizedPath::new("../elsewhere");
    assert_eq!(target.relative_to(&base).as_str(), "src/a.c");
}

#[test]
fn test_join_relative_segment() {
    let base = NormalizedPath::new("/work/app");
    assert_eq!(base.join("src/a.c").as_str(), "/work/app/src/a.c");
}

#[test]
fn test_join_absolute_segment_replaces_base() {
    let base = NormalizedPath::new("/work/app");
    assert_eq!(base.join("/opt/x.c").as_str(), "/opt/x.c");
}

#[test]
fn test_is_absolute() {
    assert!(NormalizedPath::new("/a").is_absolute());
    assert!(NormalizedPath::new("D:\\a").is_absolute());
    assert!(!NormalizedPath::new("a/b").is_absolute());
    assert!(!NormalizedPath::new(".").is_absolute());
}

#[test]
fn test_file_name_and_extension() {
    let path = NormalizedPath::new("src/include/hello.h");
    assert_eq!(path.file_name(), "hello.h");
    assert_eq!(path.extension(), Some("h"));
    assert_eq!(NormalizedPath::new("src/.gitignore").extension(), None);
    assert_eq!(NormalizedPath::new("noext").extension(), None);
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("foo/bar/baz");
    assert_eq!(path.parent().unwrap().as_str(), "foo/bar");
    assert_eq!(NormalizedPath::new("/foo").parent().unwrap().as_str(), "/");
    assert!(NormalizedPath::new("foo").parent().is_none());
}
