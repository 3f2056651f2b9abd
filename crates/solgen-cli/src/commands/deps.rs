//! The deps command

use std::io::Write;

use colored::Colorize;
use solgen_core::Context;

use crate::error::Result;

/// Run the deps command
///
/// Lists direct dependencies, or with `transitive` the whole build order
/// ending in the project itself.
pub fn run_deps(ctx: &Context<'_>, name: &str, transitive: bool, out: &mut impl Write) -> Result<()> {
    let project = ctx.registry().require_project(name)?;

    if transitive {
        let order = ctx.dependency_order(project)?;
        writeln!(out, "{} {}", "Build order for".bold(), project.name().green())?;
        for (index, dependency) in order.iter().enumerate() {
            writeln!(out, "  {:>2}. {}", index + 1, dependency.qualified_name())?;
        }
        return Ok(());
    }

    let dependencies = ctx.dependencies(project);
    if dependencies.is_empty() {
        writeln!(out, "{} has no project dependencies", project.name().green())?;
        return Ok(());
    }

    writeln!(out, "{} {}", "Dependencies of".bold(), project.name().green())?;
    for dependency in dependencies {
        writeln!(out, "  {}", dependency.qualified_name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixture;
    use pretty_assertions::assert_eq;
    use solgen_core::BlockBaker;

    #[test]
    fn test_deps_direct() {
        let registry = fixture::registry();
        let baker = BlockBaker::new();
        let ctx = Context::new(&registry, &baker);

        let text = fixture::render(|out| run_deps(&ctx, "App", false, out));
        assert_eq!(text, "Dependencies of App\n  Game/Engine\n");
    }

    #[test]
    fn test_deps_transitive_ends_with_project() {
        let registry = fixture::registry();
        let baker = BlockBaker::new();
        let ctx = Context::new(&registry, &baker);

        let text = fixture::render(|out| run_deps(&ctx, "App", true, out));
        assert_eq!(text, "Build order for App\n   1. Game/Engine\n   2. Game/App\n");
    }

    #[test]
    fn test_deps_none() {
        let registry = fixture::registry();
        let baker = BlockBaker::new();
        let ctx = Context::new(&registry, &baker);

        let text = fixture::render(|out| run_deps(&ctx, "Engine", false, out));
        assert_eq!(text, "Engine has no project dependencies\n");
    }
}
