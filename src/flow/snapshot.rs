use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;

use super::definition::FlowGraph;
use crate::error::SnapshotError;

/// A binary snapshot of a resolved flow graph.
///
/// The persistence collaborator can store these instead of JSON when it
/// wants a compact autosave format; `restore` hands back the exact graph
/// that was captured. The JSON document shape stays the interchange format
/// for import and export.
#[derive(Debug, Serialize, Deserialize)]
pub struct FlowSnapshot {
    pub graph: FlowGraph,
}

impl FlowSnapshot {
    pub fn capture(graph: FlowGraph) -> Self {
        Self { graph }
    }

    pub fn restore(self) -> FlowGraph {
        self.graph
    }

    /// Encodes the snapshot to bytes using the bincode format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        encode_to_vec(self, standard()).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Decodes a snapshot from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        decode_from_slice(bytes, standard())
            .map(|(snapshot, _)| snapshot) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| SnapshotError::Decode(e.to_string()))
    }

    /// Saves the snapshot to a file.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let bytes = self.to_bytes()?;
        let mut file = fs::File::create(path).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        file.write_all(&bytes).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Loads a snapshot from a file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let bytes = fs::read(path).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(&bytes)
    }
}
