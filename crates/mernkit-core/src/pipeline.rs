//! The ordered step pipeline behind the project initializer.
//!
//! Steps execute strictly in declared order; later steps assume the
//! filesystem and tool state produced by all earlier ones, so the sequence is
//! not reorderable. Gateway failures abort immediately. Tool failures are
//! recorded as outcomes and handled per [`ToolFailurePolicy`].

use crate::error::{MernkitError, Result};
use crate::fs::FileGateway;
use crate::manifest;
use crate::runner::ProcessRunner;
use crate::templates::Template;
use serde::Serialize;
use std::path::PathBuf;

/// How the pipeline responds to a failed external tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToolFailurePolicy {
    /// Record the failure and keep executing later steps.
    #[default]
    Continue,
    /// Stop at the first failed tool.
    Abort,
}

/// One ordered unit of pipeline work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Create a directory; `clean` removes an existing subtree first.
    Dir { path: PathBuf, clean: bool },
    /// Invoke an external tool in a working directory.
    Tool {
        dir: PathBuf,
        program: &'static str,
        args: Vec<String>,
        label: &'static str,
    },
    /// Render a template and write it to `path`.
    File { path: PathBuf, template: Template },
    /// Read, patch, and rewrite the backend manifest at `path`.
    Patch { path: PathBuf },
}

impl Step {
    pub fn label(&self) -> String {
        match self {
            Step::Dir { path, .. } => format!("create {}", path.display()),
            Step::Tool { label, .. } => (*label).to_string(),
            Step::File { path, .. } => format!("write {}", path.display()),
            Step::Patch { path } => format!("patch {}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Ok,
    ToolFailed { detail: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub label: String,
    pub status: StepStatus,
}

/// Per-step outcomes for one pipeline run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScaffoldReport {
    pub outcomes: Vec<StepOutcome>,
}

impl ScaffoldReport {
    fn push_ok(&mut self, label: String) {
        self.outcomes.push(StepOutcome {
            label,
            status: StepStatus::Ok,
        });
    }

    pub fn tool_failures(&self) -> impl Iterator<Item = &StepOutcome> {
        self.outcomes
            .iter()
            .filter(|o| !matches!(o.status, StepStatus::Ok))
    }

    pub fn is_clean(&self) -> bool {
        self.tool_failures().next().is_none()
    }
}

/// Execute `steps` in order against the given capabilities.
pub fn execute(
    gateway: &dyn FileGateway,
    runner: &dyn ProcessRunner,
    steps: Vec<Step>,
    policy: ToolFailurePolicy,
) -> Result<ScaffoldReport> {
    let mut report = ScaffoldReport::default();

    for step in steps {
        let label = step.label();
        match step {
            Step::Dir { path, clean } => {
                if clean {
                    gateway.remove_tree(&path)?;
                }
                gateway.mkdir(&path)?;
                report.push_ok(label);
            }
            Step::Tool {
                dir,
                program,
                args,
                label: tool_label,
            } => {
                println!("{tool_label}..");
                match runner.run(&dir, program, &args) {
                    Ok(()) => report.push_ok(label),
                    Err(MernkitError::ToolFailed { program, detail }) => {
                        match policy {
                            ToolFailurePolicy::Abort => {
                                return Err(MernkitError::ToolFailed { program, detail });
                            }
                            ToolFailurePolicy::Continue => {
                                tracing::warn!(step = tool_label, %program, %detail, "tool failed");
                                println!("  warning: {tool_label} failed ({detail}); continuing");
                                report.outcomes.push(StepOutcome {
                                    label,
                                    status: StepStatus::ToolFailed { detail },
                                });
                            }
                        }
                    }
                    Err(other) => return Err(other),
                }
            }
            Step::File { path, template } => {
                gateway.write_file(&path, &template.render())?;
                println!("  created: {}", path.display());
                report.push_ok(label);
            }
            Step::Patch { path } => {
                let text = gateway.read_file(&path)?;
                let patched = manifest::patch(&path, &text)?;
                gateway.write_file(&path, &patched)?;
                println!("  patched: {}", path.display());
                report.push_ok(label);
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::DiskGateway;
    use crate::runner::fake::RecordingRunner;
    use tempfile::TempDir;

    fn tool(dir: PathBuf, args: &[&str], label: &'static str) -> Step {
        Step::Tool {
            dir,
            program: "npm",
            args: args.iter().map(|a| a.to_string()).collect(),
            label,
        }
    }

    #[test]
    fn steps_run_in_declared_order() {
        let dir = TempDir::new().unwrap();
        let runner = RecordingRunner::default();
        let steps = vec![
            tool(dir.path().to_path_buf(), &["install"], "first"),
            tool(dir.path().to_path_buf(), &["init", "-y"], "second"),
        ];

        execute(&DiskGateway, &runner, steps, ToolFailurePolicy::Continue).unwrap();

        let calls = runner.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].args, vec!["install"]);
        assert_eq!(calls[1].args, vec!["init", "-y"]);
    }

    #[test]
    fn lenient_policy_continues_past_tool_failure() {
        let dir = TempDir::new().unwrap();
        let runner = RecordingRunner {
            fail_when_args_contain: Some("install".to_string()),
            ..Default::default()
        };
        let steps = vec![
            tool(dir.path().to_path_buf(), &["install"], "failing"),
            Step::File {
                path: dir.path().join("after.txt"),
                template: Template::Dotenv,
            },
        ];

        let report = execute(&DiskGateway, &runner, steps, ToolFailurePolicy::Continue).unwrap();

        assert!(!report.is_clean());
        assert_eq!(report.tool_failures().count(), 1);
        assert!(dir.path().join("after.txt").exists());
    }

    #[test]
    fn strict_policy_aborts_at_first_tool_failure() {
        let dir = TempDir::new().unwrap();
        let runner = RecordingRunner {
            fail_when_args_contain: Some("install".to_string()),
            ..Default::default()
        };
        let steps = vec![
            tool(dir.path().to_path_buf(), &["install"], "failing"),
            Step::File {
                path: dir.path().join("after.txt"),
                template: Template::Dotenv,
            },
        ];

        let err = execute(&DiskGateway, &runner, steps, ToolFailurePolicy::Abort).unwrap_err();

        assert!(matches!(err, MernkitError::ToolFailed { .. }));
        assert!(!dir.path().join("after.txt").exists());
    }

    #[test]
    fn clean_dir_replaces_existing_subtree() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        std::fs::create_dir_all(src.join("assets")).unwrap();
        std::fs::write(src.join("App.jsx"), b"default").unwrap();

        let steps = vec![Step::Dir {
            path: src.clone(),
            clean: true,
        }];
        execute(
            &DiskGateway,
            &RecordingRunner::default(),
            steps,
            ToolFailurePolicy::Continue,
        )
        .unwrap();

        assert!(src.is_dir());
        assert!(!src.join("App.jsx").exists());
        assert!(!src.join("assets").exists());
    }

    #[test]
    fn patch_step_requires_the_manifest() {
        let dir = TempDir::new().unwrap();
        let steps = vec![Step::Patch {
            path: dir.path().join("package.json"),
        }];

        let err = execute(
            &DiskGateway,
            &RecordingRunner::default(),
            steps,
            ToolFailurePolicy::Continue,
        )
        .unwrap_err();

        assert!(matches!(err, MernkitError::Fs { .. }));
    }
}
