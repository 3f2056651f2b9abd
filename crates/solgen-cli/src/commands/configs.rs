//! The configs command

use std::io::Write;

use colored::Colorize;
use serde::Serialize;
use solgen_core::{Configuration, Context, FieldFilter, Settings};
use solgen_meta::{Architecture, OperatingSystem};

use crate::error::Result;

/// One configuration as emitted by `--json`.
#[derive(Debug, Serialize)]
struct ConfigReport<'r> {
    name: String,
    buildcfg: &'r str,
    platform: Option<&'r str>,
    project_buildcfg: &'r str,
    project_platform: Option<&'r str>,
    system: OperatingSystem,
    architecture: Option<Architecture>,
    settings: &'r Settings,
}

impl<'r> From<&'r Configuration<'_>> for ConfigReport<'r> {
    fn from(cfg: &'r Configuration<'_>) -> Self {
        Self {
            name: cfg.name(),
            buildcfg: cfg.buildcfg(),
            platform: cfg.platform(),
            project_buildcfg: cfg.project_buildcfg(),
            project_platform: cfg.project_platform(),
            system: cfg.system(),
            architecture: cfg.architecture(),
            settings: cfg.settings(),
        }
    }
}

/// Run the configs command
pub fn run_configs(ctx: &Context<'_>, name: &str, json: bool, out: &mut impl Write) -> Result<()> {
    let project = ctx.registry().require_project(name)?;
    let configs: Vec<Configuration<'_>> = ctx.each_config(project, FieldFilter::All).collect();

    if json {
        let reports: Vec<ConfigReport<'_>> = configs.iter().map(ConfigReport::from).collect();
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(
        out,
        "{} {} ({})",
        "Project".bold(),
        project.name().green(),
        ctx.action().name().cyan()
    )?;
    for cfg in &configs {
        let arch = cfg.architecture().map_or("-", Architecture::as_str);
        write!(
            out,
            "  {:<20} system {:<8} arch {:<8}",
            cfg.name(),
            cfg.system().as_str(),
            arch
        )?;
        if cfg.project_buildcfg() != cfg.buildcfg() || cfg.project_platform() != cfg.platform() {
            let mapped = match cfg.project_platform() {
                Some(platform) => format!("{}|{}", cfg.project_buildcfg(), platform),
                None => cfg.project_buildcfg().to_string(),
            };
            write!(out, " as {}", mapped.yellow())?;
        }
        writeln!(out)?;
    }

    Ok(())
}
