//! Ingestion boundary: decode image files into shared pixel sources.
//!
//! Non-image inputs and per-file decode failures are skipped with a
//! warning, never aborting the batch. Files decode concurrently, but
//! results are re-sequenced to submission order before they reach the
//! library, so library order never depends on decode completion order.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tiny_skia::{IntSize, Pixmap};

pub struct DecodedImage {
    pub name: String,
    pub pixels: Arc<Pixmap>,
}

/// Decode a batch of files. Returns successfully decoded images in
/// submission order; failures are logged and dropped.
pub async fn decode_batch(paths: &[PathBuf]) -> Vec<DecodedImage> {
    let mut tasks = Vec::with_capacity(paths.len());
    for path in paths {
        if image::ImageFormat::from_path(path).is_err() {
            log::warn!("skipping non-image input {}", path.display());
            tasks.push(None);
            continue;
        }
        let path = path.clone();
        tasks.push(Some(tokio::spawn(decode_one(path))));
    }

    let mut decoded = Vec::new();
    for task in tasks.into_iter().flatten() {
        match task.await {
            Ok(Some(image)) => decoded.push(image),
            Ok(None) => {}
            Err(e) => log::warn!("decode task failed: {e}"),
        }
    }
    decoded
}

async fn decode_one(path: PathBuf) -> Option<DecodedImage> {
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("cannot read {}: {e}", path.display());
            return None;
        }
    };

    let result =
        tokio::task::spawn_blocking(move || image::load_from_memory(&bytes)).await;
    match result {
        Ok(Ok(decoded)) => {
            let pixels = to_pixmap(decoded)?;
            log::info!(
                "decoded {} ({}x{})",
                path.display(),
                pixels.width(),
                pixels.height()
            );
            Some(DecodedImage {
                name: file_name(&path),
                pixels: Arc::new(pixels),
            })
        }
        Ok(Err(e)) => {
            log::warn!("cannot decode {}: {e}", path.display());
            None
        }
        Err(e) => {
            log::warn!("decode task for {} failed: {e}", path.display());
            None
        }
    }
}

/// Convert decoded RGBA into a premultiplied pixmap. Photo alpha is
/// forced opaque, so premultiplied and straight representations agree.
fn to_pixmap(decoded: image::DynamicImage) -> Option<Pixmap> {
    let rgba = decoded.to_rgba8();
    let size = IntSize::from_wh(rgba.width(), rgba.height())?;
    let mut data = rgba.into_raw();
    for pixel in data.chunks_exact_mut(4) {
        pixel[3] = 255;
    }
    Pixmap::from_vec(data, size)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
