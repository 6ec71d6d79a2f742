//! Reading `.prev` files.

use std::path::Path;

use tracing::debug;
use w2p_common::{Envelope, PreviewError, PreviewResult};

use crate::codec::decode;

/// Read and decode a `.prev` file.
pub fn read_prev_file(path: &Path) -> PreviewResult<Envelope> {
    let data = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            PreviewError::InputNotFound {
                path: path.display().to_string(),
            }
        } else {
            PreviewError::Io(e)
        }
    })?;

    let envelope = decode(&data)?;
    debug!(path = %path.display(), entries = envelope.len(), "Loaded envelope file");
    Ok(envelope)
}
