//! Writing `.prev` files.

use std::path::Path;

use tracing::info;
use w2p_common::{write_atomic, Envelope, PreviewResult};

use crate::codec::encode;

/// Encode `envelope` and write it to `path`.
///
/// The write is atomic: on failure the target is left as it was and the
/// error is returned.
pub fn write_prev_file(envelope: &Envelope, path: &Path) -> PreviewResult<()> {
    let data = encode(envelope);
    write_atomic(path, &data)?;
    info!(
        path = %path.display(),
        entries = envelope.len(),
        bytes = data.len(),
        "Wrote envelope file"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use w2p_common::{MinMax, PreviewError};

    #[test]
    fn write_prev_file_has_two_bytes_per_entry() {
        let dir = std::env::temp_dir().join(format!("w2p_prev_save_{}", std::process::id()));
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join("song.prev");

        let env = Envelope::from_entries(vec![MinMax::new(-1.0, 1.0); 256]);
        write_prev_file(&env, &path).expect("save");

        let bytes = std::fs::read(&path).expect("read");
        assert_eq!(bytes.len(), 512);
        assert_eq!(&bytes[..2], &[0, 255]);

        // Clean up
        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn failed_write_leaves_nothing_behind() {
        let path = std::env::temp_dir()
            .join("w2p_prev_no_such_dir")
            .join("song.prev");
        let env = Envelope::from_entries(vec![MinMax::default()]);

        let err = write_prev_file(&env, &path).expect_err("should fail");
        assert!(matches!(err, PreviewError::Write { .. }));
        assert!(!path.exists());
    }
}
