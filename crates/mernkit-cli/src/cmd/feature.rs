use crate::output::print_json;
use anyhow::Context;
use mernkit_core::{feature, fs::DiskGateway, paths, types::FeatureName};
use std::path::Path;

pub fn run(dir: &Path, raw_name: &str, json: bool) -> anyhow::Result<()> {
    let name = match FeatureName::parse(raw_name) {
        Ok(name) => name,
        Err(e) => {
            eprintln!("usage: mernkit create:feature <feature-name>");
            return Err(e.into());
        }
    };

    let triplet = feature::create_feature(&DiskGateway, dir, &name)
        .with_context(|| format!("failed to generate feature '{name}'"))?;

    if json {
        print_json(&triplet)?;
        // keep stdout parseable; the follow-up still has to reach the user
        eprintln!("note: register the new router in {}", paths::ROUTES_FILE);
    } else {
        println!(
            "All done. Make sure to add the new router in {}.",
            paths::ROUTES_FILE
        );
    }

    Ok(())
}
