//! Source tree construction

use solgen_meta::Project;

use crate::files::{FileDescriptor, each_file};
use crate::tree::Tree;

/// Build the sorted virtual-path tree of a project's files.
///
/// The root carries the project name and every leaf carries the
/// [`FileDescriptor`] it was created for. Two files mapped to the same
/// virtual path share one leaf, which keeps the later file.
pub fn source_tree(project: &Project) -> Tree<FileDescriptor> {
    let mut tree = Tree::new(project.name());

    for file in each_file(project) {
        let vpath = file.vpath().to_string();
        if let Some(previous) = tree.add(&vpath).set_value(file) {
            tracing::debug!(
                project = project.name(),
                %vpath,
                replaced = %previous.abspath(),
                "Virtual path collision"
            );
        }
    }

    tree.sort();
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use solgen_meta::VirtualPathRule;

    #[test]
    fn test_source_tree_groups_by_directory() {
        let project = Project::new("App", ".").with_files(["src/b.cpp", "src/a.cpp"]);
        let tree = source_tree(&project);

        assert_eq!(tree.root().name(), "App");
        let src = tree.get("src").unwrap();
        let names: Vec<_> = src.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["a.cpp", "b.cpp"]);
        assert_eq!(
            tree.get("src/a.cpp").unwrap().value().unwrap().relpath().as_str(),
            "src/a.cpp"
        );
    }

    #[test]
    fn test_source_tree_uses_virtual_paths() {
        let project = Project::new("App", "/work")
            .with_files(["/work/include/app.h", "/work/src/app.c"])
            .with_vpath(VirtualPathRule::new("Headers", ["**.h"]).unwrap());
        let tree = source_tree(&project);

        assert!(tree.get("Headers/app.h").is_some());
        assert!(tree.get("src/app.c").is_some());
        assert!(tree.get("include").is_none());
    }

    #[test]
    fn test_source_tree_collision_keeps_later_file() {
        let project = Project::new("App", "/work")
            .with_files(["/work/a/x.c", "/work/b/x.c"])
            .with_vpath(VirtualPathRule::new("", ["**.c"]).unwrap());
        let tree = source_tree(&project);

        let leaf = tree.get("x.c").unwrap();
        assert_eq!(leaf.value().unwrap().abspath().as_str(), "/work/b/x.c");
        assert_eq!(tree.leaves().len(), 1);
    }
}
