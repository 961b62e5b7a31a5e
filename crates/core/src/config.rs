//! Optional `chore.yml` configuration.
//!
//! The file is looked up at the project root and may pre-populate the skip
//! list for each pipeline. A missing file yields the defaults; an unknown
//! field is a parse error.

use std::path::Path;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::ChoreResult;

pub const CONFIG_FILE_NAME: &str = "chore.yml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PipelineConfig {
    /// Task names to skip by default when this pipeline runs.
    pub skip: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChoreConfig {
    pub check: Option<PipelineConfig>,
    pub update: Option<PipelineConfig>,
}

pub fn parse_config(yaml_str: &str) -> ChoreResult<ChoreConfig> {
    let config: ChoreConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

/// Load `chore.yml` from the given project root, falling back to defaults
/// when the file does not exist.
pub fn load_config(root: &Path) -> ChoreResult<ChoreConfig> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(ChoreConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    parse_config(&content)
}
