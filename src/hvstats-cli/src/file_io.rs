//! Input helpers shared by command handlers

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read a file, or stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Read and parse a JSON document
pub fn read_json(path: &Path) -> Result<serde_json::Value> {
    let contents = read_input(path)?;
    serde_json::from_str(&contents).with_context(|| format!("Invalid JSON in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("equip.json");
        std::fs::write(&path, r#"{"name": "Average Axe"}"#).unwrap();

        let value = read_json(&path).unwrap();
        assert_eq!(value["name"], "Average Axe");
    }

    #[test]
    fn test_missing_file() {
        let err = read_input(Path::new("/nonexistent/equip.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("equip.json");
        std::fs::write(&path, "{").unwrap();
        assert!(read_json(&path).is_err());
    }
}
