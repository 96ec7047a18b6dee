//! Export boundary for composed cards
//!
//! Encodes each card's raster surface as PNG with deterministic file
//! names, and bundles all cards of a stack into a single `cards.zip`
//! archive. Compositing itself lives in the `cardsheet` core; this crate
//! only turns surfaces into files.

use cardsheet::{Card, CardStack, LayoutOptions, Library, Orientation, compose_card};
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tiny_skia::Pixmap;
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

/// File name of the bundled archive
pub const ARCHIVE_NAME: &str = "cards.zip";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Compositing error: {0}")]
    Core(#[from] cardsheet::SheetError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("PNG encoding error: {0}")]
    Encode(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// Deterministic per-card file name: `card-<ordinal>-<orientation>.png`,
/// with a 1-based ordinal.
pub fn card_file_name(ordinal: usize, orientation: Orientation) -> String {
    format!("card-{ordinal}-{}.png", orientation.as_str())
}

/// Encode a composed surface as PNG bytes.
pub fn encode_card_png(surface: &Pixmap) -> Result<Vec<u8>> {
    surface
        .encode_png()
        .map_err(|e| ExportError::Encode(e.to_string()))
}

/// Compose a single card and write its PNG into `dir`. Returns the
/// written path.
pub async fn export_card(
    card: &Card,
    library: &Library,
    options: &LayoutOptions,
    dir: impl AsRef<Path>,
    ordinal: usize,
) -> Result<PathBuf> {
    let surface = compose_card(card, library, options)?;
    let bytes =
        tokio::task::spawn_blocking(move || encode_card_png(&surface)).await??;

    let path = dir.as_ref().join(card_file_name(ordinal, card.orientation));
    tokio::fs::write(&path, bytes).await?;
    log::info!("wrote {}", path.display());
    Ok(path)
}

/// Compose and write every card in the stack. Returns the written paths
/// in card order.
pub async fn export_cards(
    stack: &CardStack,
    library: &Library,
    options: &LayoutOptions,
    dir: impl AsRef<Path>,
) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut paths = Vec::with_capacity(stack.len());
    for (index, card) in stack.cards().iter().enumerate() {
        paths.push(export_card(card, library, options, dir, index + 1).await?);
    }
    Ok(paths)
}

/// Compose every card and bundle the PNGs into `<dir>/cards.zip`, one
/// entry per card in card order. Returns the archive path.
pub async fn export_archive(
    stack: &CardStack,
    library: &Library,
    options: &LayoutOptions,
    dir: impl AsRef<Path>,
) -> Result<PathBuf> {
    let mut entries = Vec::with_capacity(stack.len());
    for (index, card) in stack.cards().iter().enumerate() {
        let surface = compose_card(card, library, options)?;
        entries.push((card_file_name(index + 1, card.orientation), surface));
    }

    let bytes = tokio::task::spawn_blocking(move || build_archive(entries)).await??;
    let path = dir.as_ref().join(ARCHIVE_NAME);
    tokio::fs::write(&path, bytes).await?;
    log::info!("wrote {} ({} cards)", path.display(), stack.len());
    Ok(path)
}

fn build_archive(entries: Vec<(String, Pixmap)>) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    // PNG data is already compressed; store entries as-is.
    let file_options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    for (name, surface) in entries {
        writer.start_file(name, file_options)?;
        writer.write_all(&encode_card_png(&surface)?)?;
    }

    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_file_name_is_one_based() {
        assert_eq!(card_file_name(1, Orientation::Landscape), "card-1-landscape.png");
        assert_eq!(card_file_name(12, Orientation::Portrait), "card-12-portrait.png");
    }

    #[test]
    fn test_encode_blank_card() {
        let library = Library::new();
        let surface = compose_card(&Card::default(), &library, &LayoutOptions::default()).unwrap();
        let bytes = encode_card_png(&surface).unwrap();
        // PNG signature
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }
}
