//! package.json editing

use crate::error::{Result, ScaffoldError};
use serde_json::{Map, Value};
use std::path::Path;
use tokio::fs;

/// Set `scripts.<name>` in the package manifest at `path`
///
/// Other scripts and keys keep their order. The file is rewritten with
/// two-space indentation, matching what npm itself produces.
pub async fn add_script(path: &Path, name: &str, command: &str) -> Result<()> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| ScaffoldError::io(path, e))?;

    let updated = with_script(&content, name, command).map_err(|message| {
        ScaffoldError::Manifest {
            path: path.to_path_buf(),
            message,
        }
    })?;

    fs::write(path, updated)
        .await
        .map_err(|e| ScaffoldError::io(path, e))
}

fn with_script(content: &str, name: &str, command: &str) -> std::result::Result<String, String> {
    let mut manifest: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;

    let root = manifest
        .as_object_mut()
        .ok_or_else(|| "top-level value is not an object".to_string())?;

    let scripts = root
        .entry("scripts")
        .or_insert_with(|| Value::Object(Map::new()));
    if !scripts.is_object() {
        *scripts = Value::Object(Map::new());
    }
    if let Value::Object(scripts) = scripts {
        scripts.insert(name.to_string(), Value::String(command.to_string()));
    }

    serde_json::to_string_pretty(&manifest).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_adds_script_and_keeps_existing() {
        let input = r#"{
  "name": "cli-demo",
  "version": "1.0.0",
  "scripts": {
    "test": "echo \"Error: no test specified\" && exit 1"
  }
}"#;
        let output = with_script(input, "dev", "npx tailwindcss --watch").unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["scripts"]["dev"], "npx tailwindcss --watch");
        assert!(value["scripts"]["test"].is_string());
        // key order survives the rewrite
        assert!(output.find("\"name\"").unwrap() < output.find("\"scripts\"").unwrap());
        assert!(output.find("\"test\"").unwrap() < output.find("\"dev\"").unwrap());
    }

    #[test]
    fn test_creates_scripts_section() {
        let output = with_script(r#"{"name":"x"}"#, "dev", "run").unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["scripts"]["dev"], "run");
        assert!(output.contains("\n  \"scripts\": {"));
    }

    #[test]
    fn test_replaces_existing_script() {
        let output = with_script(r#"{"scripts":{"dev":"old"}}"#, "dev", "new").unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["scripts"]["dev"], "new");
    }

    #[test]
    fn test_rejects_non_object_manifest() {
        assert!(with_script("[]", "dev", "run").is_err());
        assert!(with_script("not json", "dev", "run").is_err());
    }

    #[tokio::test]
    async fn test_missing_manifest_is_io_failure() {
        let dir = TempDir::new().unwrap();
        let err = add_script(&dir.path().join("package.json"), "dev", "run")
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_manifest_is_manifest_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, "{ broken").unwrap();

        let err = add_script(&path, "dev", "run").await.unwrap_err();

        assert!(matches!(err, ScaffoldError::Manifest { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ broken");
    }
}
