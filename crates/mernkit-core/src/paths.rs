use crate::types::FeatureName;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Scaffold layout constants
// ---------------------------------------------------------------------------

pub const FRONTEND_DIR: &str = "frontend";
pub const BACKEND_DIR: &str = "backend";
pub const BACKEND_MANIFEST: &str = "package.json";

/// Backend-relative directories the feature generator writes into.
pub const MODELS_DIR: &str = "src/models";
pub const CONTROLLERS_DIR: &str = "src/controllers";
pub const ROUTERS_DIR: &str = "src/routers";

/// Backend-relative path of the route-registration file new routers must be
/// added to by hand.
pub const ROUTES_FILE: &str = "src/routes.ts";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn frontend_dir(project_root: &Path) -> PathBuf {
    project_root.join(FRONTEND_DIR)
}

pub fn backend_dir(project_root: &Path) -> PathBuf {
    project_root.join(BACKEND_DIR)
}

pub fn backend_manifest(project_root: &Path) -> PathBuf {
    backend_dir(project_root).join(BACKEND_MANIFEST)
}

pub fn model_path(backend_root: &Path, name: &FeatureName) -> PathBuf {
    backend_root.join(MODELS_DIR).join(format!("{name}_model.ts"))
}

pub fn controller_path(backend_root: &Path, name: &FeatureName) -> PathBuf {
    backend_root
        .join(CONTROLLERS_DIR)
        .join(format!("{name}_controller.ts"))
}

pub fn router_path(backend_root: &Path, name: &FeatureName) -> PathBuf {
    backend_root
        .join(ROUTERS_DIR)
        .join(format!("{name}_router.ts"))
}
