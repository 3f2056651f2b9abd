//! The projects command

use std::io::Write;

use colored::Colorize;
use solgen_meta::Registry;

use crate::error::Result;

/// Run the projects command
pub fn run_projects(registry: &Registry, out: &mut impl Write) -> Result<()> {
    for solution in registry.solutions() {
        writeln!(out, "{}", solution.name().cyan().bold())?;

        let platforms = if solution.platforms().is_empty() {
            "-".to_string()
        } else {
            solution.platforms().join(", ")
        };
        writeln!(
            out,
            "  {} {}",
            "configurations:".dimmed(),
            solution.configurations().join(", ")
        )?;
        writeln!(out, "  {} {}", "platforms:".dimmed(), platforms)?;

        for project in solution.projects() {
            writeln!(
                out,
                "  {:<16} {} files  {}",
                project.name().green(),
                project.files().len(),
                project.location().as_str().dimmed()
            )?;
        }
    }

    let total = registry.projects().count();
    writeln!(
        out,
        "{} {} projects in {} solutions",
        "Total:".dimmed(),
        total,
        registry.len()
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixture;

    #[test]
    fn test_projects_lists_solution() {
        let registry = fixture::registry();
        let text = fixture::render(|out| run_projects(&registry, out));

        assert!(text.starts_with("Game\n"));
        assert!(text.contains("configurations: Debug, Release"));
        assert!(text.contains("platforms: x86, x64"));
        assert!(text.contains("App"));
        assert!(text.contains("2 files"));
        assert!(text.ends_with("Total: 2 projects in 1 solutions\n"));
    }
}
