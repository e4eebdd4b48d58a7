use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Contents of `<stem>.provenance.json`, written next to every mesh file.
#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub code_rev: String,
    pub tool_version: &'static str,
    pub callsite: Callsite,
    pub params: Value,
    pub inputs: Vec<String>,
    pub outputs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

/// Record how `artifact` was produced; returns the sidecar path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, input: Option<&Path>, params: Value) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let callsite = Location::caller();
    let doc = Sidecar {
        code_rev: current_git_rev(),
        tool_version: polyslice::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        params,
        inputs: input
            .map(|p| p.to_string_lossy().into_owned())
            .into_iter()
            .collect(),
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `dir/meshes.json` → `dir/meshes.provenance.json`.
pub fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "meshes".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from the build env, the runtime env, or `git`, else "unknown".
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_the_meshes() {
        let derived = sidecar_path(Path::new("/tmp/out/meshes.json"));
        assert_eq!(derived, Path::new("/tmp/out/meshes.provenance.json"));
    }

    #[test]
    fn sidecar_lists_inputs_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("meshes.json");
        let input = dir.path().join("job.json");
        fs::write(&artifact, "[]").unwrap();
        let path = write_sidecar(&artifact, Some(&input), json!({"cuts": 2})).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["inputs"][0], input.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["cuts"], 2);
        assert_eq!(parsed["tool_version"], polyslice::VERSION);
        assert!(parsed["callsite"]["line"].as_u64().is_some());
    }
}
