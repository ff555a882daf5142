//! Local file downloads.

use std::fs;
use std::path::Path;

use tracing::{error, info};

/// Save export content to a local file.
///
/// Fire-and-forget, matching the browser download it replaces: there is no
/// result to inspect, and failures are reported through the log only.
pub fn download_as_file(content: &str, path: &Path) {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("failed to create download directory {}: {}", parent.display(), e);
                return;
            }
        }
    }

    match fs::write(path, content) {
        Ok(()) => info!("saved export to {}", path.display()),
        Err(e) => error!("failed to save export to {}: {}", path.display(), e),
    }
}
