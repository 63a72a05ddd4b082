use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::operation::{Operation, OperationId};

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Failed to read preset file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Invalid preset: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// A named, reusable pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub operations: Vec<Operation>,
}

impl Preset {
    /// Capture `operations` under `name`
    pub fn from_pipeline(name: impl Into<String>, operations: &[Operation]) -> Self {
        Self {
            name: name.into(),
            operations: operations.to_vec(),
        }
    }

    /// Clone the operations, giving each a fresh id from `next_id`
    pub fn instantiate(&self, mut next_id: impl FnMut() -> OperationId) -> Vec<Operation> {
        self.operations
            .iter()
            .map(|op| Operation {
                id: next_id(),
                ..op.clone()
            })
            .collect()
    }
}

/// Read and parse a preset file
pub fn read_preset(path: &Path) -> Result<Preset, PresetError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let preset: Preset = serde_json::from_reader(reader)?;

    info!(
        name = %preset.name,
        operations = preset.operations.len(),
        "Loaded preset from {:?}",
        path
    );

    Ok(preset)
}
