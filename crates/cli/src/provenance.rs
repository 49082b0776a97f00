//! Provenance records: what produced a result file, and from which inputs.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Metadata recorded next to a result file.
pub struct Payload {
    pub params: Value,
    pub tags: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            tags: Vec::new(),
        }
    }

    pub fn with_tags(mut self, tags: &[String]) -> Self {
        self.tags.extend_from_slice(tags);
        self
    }
}

#[derive(Serialize)]
pub struct Record<'a> {
    code_rev: String,
    crate_version: &'static str,
    tags: &'a [String],
    params: &'a Value,
    outputs: Vec<String>,
}

impl<'a> Record<'a> {
    pub fn new(payload: &'a Payload, outputs: &[&Path]) -> Self {
        Self {
            code_rev: code_rev(),
            crate_version: circuit_collide::VERSION,
            tags: &payload.tags,
            params: &payload.params,
            outputs: outputs
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        }
    }
}

/// `GIT_COMMIT` from the build or the runtime environment, else `unknown`.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

/// `results/lap.json` → `results/lap.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "artifact".to_string());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// Write the sidecar for `artifact` and return its path. The artifact's
/// directory already exists, since the result was written first.
pub fn write_sidecar(artifact: &Path, payload: Payload) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let body = serde_json::to_vec_pretty(&Record::new(&payload, &[artifact]))?;
    std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_result() {
        let derived = sidecar_path(Path::new("/tmp/runs/lap3.json"));
        assert_eq!(derived, Path::new("/tmp/runs/lap3.provenance.json"));
    }

    #[test]
    fn write_sidecar_records_params_and_tags() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("flags.json");
        std::fs::write(&artifact, "{}").unwrap();
        let payload =
            Payload::new(json!({"command": "walls", "shift": 2.5})).with_tags(&["lap3".into()]);
        let side = write_sidecar(&artifact, payload).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(side).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.display().to_string());
        assert_eq!(parsed["params"]["shift"], 2.5);
        assert_eq!(parsed["tags"][0], "lap3");
        assert_eq!(parsed["crate_version"], circuit_collide::VERSION);
    }
}
