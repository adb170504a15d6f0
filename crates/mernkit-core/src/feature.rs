//! The feature generator: derives the model/controller/router triplet for one
//! feature name and emits it into an already-scaffolded backend.

use crate::error::Result;
use crate::fs::FileGateway;
use crate::paths;
use crate::templates::Template;
use crate::types::FeatureName;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The three artifacts one feature produces.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureTriplet {
    pub model: PathBuf,
    pub controller: PathBuf,
    pub router: PathBuf,
}

impl FeatureTriplet {
    pub fn for_name(backend_root: &Path, name: &FeatureName) -> Self {
        Self {
            model: paths::model_path(backend_root, name),
            controller: paths::controller_path(backend_root, name),
            router: paths::router_path(backend_root, name),
        }
    }
}

/// Generate the triplet under `backend_root` (the working directory of a
/// previously initialized backend).
///
/// Model, controller, and router are independent files; the ordering here is
/// reporting order only. The new router still has to be registered in
/// `src/routes.ts` by hand; callers must surface that to the user.
pub fn create_feature(
    gateway: &dyn FileGateway,
    backend_root: &Path,
    name: &FeatureName,
) -> Result<FeatureTriplet> {
    let triplet = FeatureTriplet::for_name(backend_root, name);

    println!("Generating model for {name}..");
    gateway.write_file(
        &triplet.model,
        &Template::FeatureModel { name: name.clone() }.render(),
    )?;

    println!("Generating controller for {name}..");
    gateway.write_file(
        &triplet.controller,
        &Template::FeatureController { name: name.clone() }.render(),
    )?;

    println!("Generating router for {name}..");
    gateway.write_file(
        &triplet.router,
        &Template::FeatureRouter { name: name.clone() }.render(),
    )?;

    Ok(triplet)
}
