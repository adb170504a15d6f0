use crate::output::print_json;
use anyhow::Context;
use mernkit_core::{
    fs::DiskGateway,
    pipeline::ToolFailurePolicy,
    runner::SystemRunner,
    scaffold::{self, InitOptions},
    types::ProjectName,
};
use std::path::Path;

pub fn run(dir: &Path, raw_name: &str, strict: bool, json: bool) -> anyhow::Result<()> {
    let name = match ProjectName::parse(raw_name) {
        Ok(name) => name,
        Err(e) => {
            eprintln!("usage: mernkit init <project-name>");
            return Err(e.into());
        }
    };

    let options = InitOptions {
        tool_failure: if strict {
            ToolFailurePolicy::Abort
        } else {
            ToolFailurePolicy::Continue
        },
    };

    let report = scaffold::initialize(&DiskGateway, &SystemRunner, dir, &name, options)
        .with_context(|| format!("failed to scaffold '{name}'"))?;

    if json {
        print_json(&report)?;
    } else if !report.is_clean() {
        println!("\nSome tools failed; the tree may be incomplete:");
        for outcome in report.tool_failures() {
            println!("  failed: {}", outcome.label);
        }
    }

    Ok(())
}
