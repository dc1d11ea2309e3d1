use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use textdigest_common::{Result, TextDigestError};
use tracing::info;

/// Hidden temp file next to the target, unique per process
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{}.{}.tmp", file_name, std::process::id()))
}

/// Write the report to a file, replacing any previous content
///
/// Writes to a fresh temp file next to the target and renames it into
/// place. The temp file is never an existing file and is removed on failure.
pub fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let tmp_path = temp_path_for(path);

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|e| {
            TextDigestError::file_system(format!(
                "Failed to create {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

    // Any failure past this point removes the temp file
    let persisted = file
        .write_all(data.as_bytes())
        .and_then(|_| file.sync_all())
        .and_then(|_| {
            drop(file);
            fs::rename(&tmp_path, path)
        });

    if let Err(e) = persisted {
        let _ = fs::remove_file(&tmp_path);
        return Err(TextDigestError::file_system(format!(
            "Failed to write output to {}: {}",
            path.display(),
            e
        )));
    }

    info!("Saved {} bytes to {}", data.len(), path.display());

    Ok(())
}
