//! src/tasks/photo_task.rs
//! ============================================================================
//! # Photo Task: Background Picture Decode
//!
//! Reads a locally chosen image file off the event loop and turns it into a
//! data-URL string, the form's preview/record representation. On success the
//! task posts `Action::PhotoLoaded` back to the main loop; on failure it
//! only logs, leaving any previously attached picture unchanged.

use std::path::{Path, PathBuf};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::controller::actions::Action;

/// Extension gate standing in for the browser's image MIME-type filter.
const IMAGE_TYPES: [(&str, &str); 6] = [
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
];

fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    IMAGE_TYPES
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, mime)| *mime)
}

pub fn is_supported_image(path: &Path) -> bool {
    mime_for(path).is_some()
}

/// Spawns a Tokio task that reads the file and encodes it as a data-URL.
/// No size cap is applied to the result.
pub fn spawn_photo_decode(path: PathBuf, action_tx: mpsc::UnboundedSender<Action>) {
    let Some(mime) = mime_for(&path) else {
        warn!("Refusing to decode non-image file: {}", path.display());
        return;
    };

    tokio::spawn(async move {
        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                let data_url = format!("data:{mime};base64,{}", BASE64.encode(&bytes));
                info!(
                    "Decoded picture {} ({} bytes)",
                    path.display(),
                    bytes.len()
                );
                if let Err(e) = action_tx.send(Action::PhotoLoaded { data_url }) {
                    warn!("Failed to deliver decoded picture: {e}");
                }
            }
            Err(e) => {
                // Unreadable file: the preview simply never updates.
                warn!("Failed to read picture {}: {e}", path.display());
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_gate() {
        assert!(is_supported_image(Path::new("/tmp/me.png")));
        assert!(is_supported_image(Path::new("/tmp/ME.JPG")));
        assert!(!is_supported_image(Path::new("/tmp/notes.txt")));
        assert!(!is_supported_image(Path::new("/tmp/no_extension")));
    }

    #[tokio::test]
    async fn readable_image_posts_data_url() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avatar.png");
        tokio::fs::write(&path, b"not-really-png-but-bytes")
            .await
            .unwrap();

        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_photo_decode(path, tx);

        let action = rx.recv().await.unwrap();
        let Action::PhotoLoaded { data_url } = action else {
            panic!("unexpected action: {action:?}");
        };
        assert!(data_url.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn missing_file_posts_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_photo_decode(PathBuf::from("/nonexistent/avatar.png"), tx);

        // The task drops its sender without posting anything.
        assert_eq!(rx.recv().await, None);
    }
}
