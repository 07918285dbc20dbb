use anyhow::Context;
use std::path::Path;

use super::types::Namespace;

/// Load a namespace model from a YAML or JSON file.
///
/// The format is chosen by extension: `.yaml`/`.yml` are read as YAML, anything else as
/// JSON.
pub fn load_model(file_path: &Path) -> anyhow::Result<Namespace> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read model: {}", file_path.display()))?;
    let is_yaml = file_path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == "yaml" || e == "yml");
    let ns = if is_yaml {
        model_from_yaml(&content)
    } else {
        model_from_json(&content)
    }
    .with_context(|| format!("Failed to parse model: {}", file_path.display()))?;
    tracing::debug!(
        namespace = %ns.name,
        interfaces = ns.interfaces.len(),
        "loaded model"
    );
    Ok(ns)
}

pub fn model_from_yaml(content: &str) -> anyhow::Result<Namespace> {
    Ok(serde_yaml::from_str(content)?)
}

pub fn model_from_json(content: &str) -> anyhow::Result<Namespace> {
    Ok(serde_json::from_str(content)?)
}
