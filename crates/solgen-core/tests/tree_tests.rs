//! Source tree tests

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use solgen_core::{FileDescriptor, Tree, TreeNode, TreeVisitor, source_tree};
use solgen_meta::{Project, VirtualPathRule};

/// Renders a tree as indented lines, one per node.
struct Outline(Vec<String>);

impl<T> TreeVisitor<T> for Outline {
    fn on_branch(&mut self, node: &TreeNode<T>, depth: usize) {
        self.0.push(format!("{}{}/", "  ".repeat(depth), node.name()));
    }

    fn on_leaf(&mut self, node: &TreeNode<T>, depth: usize) {
        self.0.push(format!("{}{}", "  ".repeat(depth), node.name()));
    }
}

fn outline<T>(tree: &Tree<T>) -> Vec<String> {
    let mut outline = Outline(Vec::new());
    tree.traverse(&mut outline);
    outline.0
}

#[test]
fn test_two_sources_under_one_folder() {
    let project = Project::new("App", ".").with_files(["src/a.cpp", "src/b.cpp"]);
    let tree = source_tree(&project);

    assert_eq!(tree.root().name(), "App");
    assert_eq!(tree.root().children().len(), 1);
    assert_eq!(outline(&tree), ["src/", "  a.cpp", "  b.cpp"]);
}

#[test]
fn test_tree_is_sorted_regardless_of_declaration_order() {
    let project = Project::new("Engine", "/work").with_files([
        "src/render/gl.c",
        "include/engine.h",
        "src/audio.c",
        "src/render/dx.c",
        "CMakeLists.txt",
    ]);
    let tree = source_tree(&project);

    insta::assert_snapshot!(outline(&tree).join("\n"), @r###"
    CMakeLists.txt
    include/
      engine.h
    src/
      audio.c
      render/
        dx.c
        gl.c
    "###);
}

#[test]
fn test_leaves_carry_descriptors() {
    let project = Project::new("Engine", "/work")
        .with_files(["include/engine.h", "src/engine.c"])
        .with_vpath(VirtualPathRule::new("Headers/*", ["include/*"]).unwrap());
    let tree = source_tree(&project);

    let leaves: Vec<&FileDescriptor> = tree.leaves().into_iter().filter_map(TreeNode::value).collect();
    let vpaths: Vec<_> = leaves.iter().map(|f| f.vpath()).collect();
    assert_eq!(vpaths, ["Headers/engine.h", "src/engine.c"]);
    assert_eq!(leaves[0].abspath().as_str(), "/work/include/engine.h");
}

#[test]
fn test_branch_paths_are_full_keys() {
    let project = Project::new("Engine", "/work").with_files(["src/render/gl.c"]);
    let tree = source_tree(&project);

    let render = tree.get("src/render").unwrap();
    assert_eq!(render.path(), "src/render");
    assert!(render.value().is_none());
    assert_eq!(tree.get("src/render/gl.c").unwrap().path(), "src/render/gl.c");
}

#[test]
fn test_files_outside_location_lose_dot_segments() {
    let project = Project::new("App", "/work/app")
        .with_location("build")
        .with_files(["../shared/util.c", "main.c"]);
    let tree = source_tree(&project);

    assert_eq!(outline(&tree), ["main.c", "shared/", "  util.c"]);
}

#[test]
fn test_empty_project_has_bare_root() {
    let tree = source_tree(&Project::new("Empty", "/work"));
    assert!(tree.root().is_leaf());
    assert!(tree.leaves().is_empty());
    assert!(outline(&tree).is_empty());
}

fn is_sorted(node: &TreeNode<FileDescriptor>) -> bool {
    node.children().windows(2).all(|w| w[0].name() <= w[1].name())
        && node.children().iter().all(is_sorted)
}

proptest! {
    #[test]
    fn prop_siblings_sorted(files in prop::collection::vec("[a-c]{1,2}(/[a-c]{1,2}){0,2}\\.c", 0..12)) {
        let project = Project::new("P", "/work").with_files(files.iter());
        let tree = source_tree(&project);
        prop_assert!(is_sorted(tree.root()));
    }

    #[test]
    fn prop_every_file_reaches_a_leaf(files in prop::collection::vec("[a-c]{1,2}/[a-c]{1,2}\\.c", 1..12)) {
        let project = Project::new("P", "/work").with_files(files.iter());
        let tree = source_tree(&project);
        for file in &files {
            let node = tree.get(file);
            prop_assert!(node.is_some_and(|n| n.is_leaf() && n.value().is_some()), "{file}");
        }
    }
}
