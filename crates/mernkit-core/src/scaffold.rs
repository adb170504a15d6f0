//! The project initializer: plans and executes the fixed step sequence that
//! produces a complete two-tier project tree from one project name.

use crate::error::{MernkitError, Result};
use crate::fs::FileGateway;
use crate::paths;
use crate::pipeline::{self, ScaffoldReport, Step, ToolFailurePolicy};
use crate::runner::ProcessRunner;
use crate::templates::Template;
use crate::types::ProjectName;
use std::path::Path;

/// The package manager every tool step goes through.
pub const PACKAGE_MANAGER: &str = "npm";

const BACKEND_RUNTIME_PACKAGES: &[&str] = &[
    "express",
    "@types/express",
    "body-parser",
    "@types/body-parser",
    "helmet",
    "cors",
    "@types/cors",
    "mongoose",
    "morgan",
    "@types/morgan",
    "dotenv",
];

#[derive(Debug, Clone, Copy, Default)]
pub struct InitOptions {
    pub tool_failure: ToolFailurePolicy,
}

/// Scaffold a new project tree under `parent/<name>`.
///
/// Fails before any mutation if the target directory already exists or the
/// package manager is unavailable. Gateway failures abort; tool failures are
/// handled per `options.tool_failure`.
pub fn initialize(
    gateway: &dyn FileGateway,
    runner: &dyn ProcessRunner,
    parent: &Path,
    name: &ProjectName,
    options: InitOptions,
) -> Result<ScaffoldReport> {
    let project_root = parent.join(name.as_str());
    if gateway.exists(&project_root) {
        return Err(MernkitError::ProjectExists(project_root));
    }
    runner.preflight(PACKAGE_MANAGER)?;

    println!("Initializing project in: {}", project_root.display());
    let steps = plan(&project_root);
    let report = pipeline::execute(gateway, runner, steps, options.tool_failure)?;

    println!("\nAll done.");
    Ok(report)
}

/// The fixed, ordered step sequence for one project root.
///
/// Later steps assume the state produced by earlier ones: the manifest patch
/// reads the file `npm init` wrote, the frontend config files land inside the
/// tree the vite scaffold created. Do not reorder.
pub fn plan(project_root: &Path) -> Vec<Step> {
    let root = project_root.to_path_buf();
    let frontend = paths::frontend_dir(project_root);
    let backend = paths::backend_dir(project_root);
    let frontend_src = frontend.join("src");
    let backend_src = backend.join("src");

    vec![
        Step::Dir {
            path: root.clone(),
            clean: false,
        },
        Step::Tool {
            dir: root.clone(),
            program: PACKAGE_MANAGER,
            args: args(&["create", "vite@latest", "frontend", "--", "--template", "react"]),
            label: "Initializing frontend",
        },
        Step::Tool {
            dir: frontend.clone(),
            program: PACKAGE_MANAGER,
            args: args(&["install"]),
            label: "Installing frontend dependencies",
        },
        Step::Tool {
            dir: frontend.clone(),
            program: PACKAGE_MANAGER,
            args: args(&["install", "react-router-dom", "axios"]),
            label: "Installing react-router and axios",
        },
        Step::Dir {
            path: backend.clone(),
            clean: false,
        },
        Step::Tool {
            dir: backend.clone(),
            program: PACKAGE_MANAGER,
            args: args(&["init", "-y"]),
            label: "Initializing backend manifest",
        },
        Step::Tool {
            dir: backend.clone(),
            program: PACKAGE_MANAGER,
            args: install_args(BACKEND_RUNTIME_PACKAGES),
            label: "Installing backend dependencies",
        },
        Step::File {
            path: backend.join(".env"),
            template: Template::Dotenv,
        },
        Step::Tool {
            dir: backend.clone(),
            program: PACKAGE_MANAGER,
            args: args(&["install", "-D", "typescript"]),
            label: "Installing typescript",
        },
        Step::File {
            path: backend.join("tsconfig.json"),
            template: Template::TsConfig,
        },
        Step::Patch {
            path: paths::backend_manifest(project_root),
        },
        Step::File {
            path: frontend.join("jsconfig.json"),
            template: Template::JsConfig,
        },
        Step::File {
            path: frontend.join("vite.config.js"),
            template: Template::ViteConfig,
        },
        Step::File {
            path: backend_src.join("server.ts"),
            template: Template::ServerEntry,
        },
        Step::File {
            path: backend_src.join("routes.ts"),
            template: Template::Routes,
        },
        Step::Dir {
            path: frontend_src.clone(),
            clean: true,
        },
        Step::File {
            path: frontend_src.join("main.jsx"),
            template: Template::MainJsx,
        },
        Step::File {
            path: frontend_src.join("screens/index_screen.jsx"),
            template: Template::IndexScreenJsx,
        },
        Step::Tool {
            dir: frontend.clone(),
            program: PACKAGE_MANAGER,
            args: args(&["install", "-D", "tailwindcss", "postcss", "autoprefixer"]),
            label: "Installing tailwind tooling",
        },
        Step::Tool {
            dir: frontend.clone(),
            program: "npx",
            args: args(&["tailwindcss", "init", "-p"]),
            label: "Generating tailwind config",
        },
        Step::File {
            path: frontend.join("tailwind.config.js"),
            template: Template::TailwindConfig,
        },
        Step::File {
            path: frontend_src.join("main.css"),
            template: Template::MainCss,
        },
        Step::File {
            path: frontend_src.join("config/api.js"),
            template: Template::ApiConfig,
        },
        Step::File {
            path: root.join(".gitignore"),
            template: Template::GitignoreProject,
        },
        Step::File {
            path: backend.join(".gitignore"),
            template: Template::GitignoreBackend,
        },
        Step::File {
            path: backend_src.join("types/index.d.ts"),
            template: Template::TypeDeclarations,
        },
        Step::File {
            path: backend_src.join("middlewares/response.ts"),
            template: Template::ResponseMiddleware,
        },
        Step::File {
            path: backend_src.join("middlewares/pagination.ts"),
            template: Template::PaginationMiddleware,
        },
    ]
}

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|p| p.to_string()).collect()
}

fn install_args(packages: &[&str]) -> Vec<String> {
    let mut out = vec!["install".to_string()];
    out.extend(packages.iter().map(|p| p.to_string()));
    out
}
