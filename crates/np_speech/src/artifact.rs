use std::path::{Path, PathBuf};

use np_core::Result;
use tracing::debug;
use uuid::Uuid;

/// A single-use audio file in the system temp directory. The file name is
/// unique per artifact so concurrent invocations cannot collide, and the file
/// is removed when the artifact is dropped.
#[derive(Debug)]
pub struct AudioArtifact {
    path: PathBuf,
}

impl AudioArtifact {
    pub fn write(bytes: &[u8]) -> Result<Self> {
        let path = std::env::temp_dir().join(format!("np-summary-{}.mp3", Uuid::new_v4()));
        std::fs::write(&path, bytes)?;
        debug!("Wrote {} byte audio artifact to {:?}", bytes.len(), path);
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for AudioArtifact {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
