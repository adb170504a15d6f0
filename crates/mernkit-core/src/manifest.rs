//! The backend `package.json` patch: set the compiled entry point and insert
//! the three run-mode scripts, leaving every other field untouched.

use crate::error::{MernkitError, Result};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::path::Path;

pub const ENTRY_POINT: &str = "dist/server.js";

/// Run-mode scripts keyed by their fixed names. Existing values for these
/// keys are overwritten, which keeps the patch idempotent.
pub const RUN_SCRIPTS: [(&str, &str); 3] = [
    ("watch", "tsc --watch"),
    ("start", "tsc && node dist/server.js"),
    ("dev", "tsc && nodemon dist/server.js"),
];

/// Apply the entry-point and script patch to manifest text and return the
/// rewritten document. Re-applying to already-patched text yields
/// byte-identical output.
pub fn patch(path: &Path, text: &str) -> Result<String> {
    let mut root: Value = serde_json::from_str(text)?;
    let obj = root
        .as_object_mut()
        .ok_or_else(|| MernkitError::ManifestShape(path.to_path_buf()))?;

    obj.insert("main".to_string(), json!(ENTRY_POINT));

    let scripts = obj
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    let scripts = scripts
        .as_object_mut()
        .ok_or_else(|| MernkitError::ManifestShape(path.to_path_buf()))?;
    for (key, command) in RUN_SCRIPTS {
        scripts.insert(key.to_string(), json!(command));
    }

    to_tab_indented(&root)
}

/// Serialize with tab indentation and a trailing newline, matching the
/// formatting the rest of the scaffold's JSON files use.
fn to_tab_indented(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    let mut out = String::from_utf8_lossy(&buf).into_owned();
    out.push('\n');
    Ok(out)
}
