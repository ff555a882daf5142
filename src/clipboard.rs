//! System clipboard access.
//!
//! Clipboard writes can fail for environmental reasons (no display server,
//! denied access, unsupported platform). Callers only need to know whether
//! the copy landed, so failures are logged and collapsed into `false`
//! rather than propagated.

use tracing::{debug, warn};

/// Copy text to the system clipboard.
///
/// Returns `true` on success and `false` on any failure. The arboard call
/// blocks on platform clipboard services, so it runs on the blocking pool.
pub async fn copy_to_clipboard(text: &str) -> bool {
    let text = text.to_string();

    let result = tokio::task::spawn_blocking(move || {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)
    })
    .await;

    match result {
        Ok(Ok(())) => {
            debug!("copied text to clipboard");
            true
        }
        Ok(Err(e)) => {
            warn!("clipboard write failed: {}", e);
            false
        }
        Err(e) => {
            warn!("clipboard task failed: {}", e);
            false
        }
    }
}
