//! The image library: an insertion-ordered arena of decoded images.
//!
//! Slots reference library entries by `ImageId` only; the library is the
//! single source of truth for image existence. Pixel data is shared
//! read-only through an `Arc`, so any number of concurrent compositor
//! invocations can draw the same source.

use std::sync::Arc;
use tiny_skia::Pixmap;

/// Identifier for a decoded image. Allocated by the library and never
/// reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageId(u64);

/// A decoded image. Immutable once constructed.
#[derive(Clone)]
pub struct SourceImage {
    pub id: ImageId,
    pub name: String,
    /// Natural pixel width
    pub width: u32,
    /// Natural pixel height
    pub height: u32,
    /// Shared, read-only pixel data (premultiplied RGBA)
    pub pixels: Arc<Pixmap>,
}

impl std::fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceImage")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Insertion-ordered collection of decoded images, unique by id.
/// Grows only by append; shrinks only by explicit removal.
#[derive(Debug, Clone, Default)]
pub struct Library {
    images: Vec<SourceImage>,
    next_id: u64,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decoded image and return its freshly allocated id.
    pub fn add(&mut self, name: impl Into<String>, pixels: Arc<Pixmap>) -> ImageId {
        let id = ImageId(self.next_id);
        self.next_id += 1;
        self.images.push(SourceImage {
            id,
            name: name.into(),
            width: pixels.width(),
            height: pixels.height(),
            pixels,
        });
        id
    }

    pub fn get(&self, id: ImageId) -> Option<&SourceImage> {
        self.images.iter().find(|image| image.id == id)
    }

    pub fn contains(&self, id: ImageId) -> bool {
        self.get(id).is_some()
    }

    /// Remove an image. Returns false if the id is unknown. The caller
    /// is responsible for clearing slots that referenced it (see
    /// `Project::remove_image`).
    pub fn remove(&mut self, id: ImageId) -> bool {
        let before = self.images.len();
        self.images.retain(|image| image.id != id);
        self.images.len() != before
    }

    /// Images in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SourceImage> {
        self.images.iter()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_pixmap(w: u32, h: u32) -> Arc<Pixmap> {
        Arc::new(Pixmap::new(w, h).unwrap())
    }

    #[test]
    fn test_ids_unique_and_ordered() {
        let mut library = Library::new();
        let a = library.add("a.jpg", test_pixmap(4, 3));
        let b = library.add("b.jpg", test_pixmap(2, 2));
        assert_ne!(a, b);
        let names: Vec<_> = library.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut library = Library::new();
        let a = library.add("a.jpg", test_pixmap(4, 3));
        assert!(library.remove(a));
        let b = library.add("b.jpg", test_pixmap(4, 3));
        assert_ne!(a, b);
        assert!(!library.contains(a));
        assert!(library.contains(b));
    }

    #[test]
    fn test_dimensions_come_from_pixels() {
        let mut library = Library::new();
        let id = library.add("a.jpg", test_pixmap(640, 480));
        let image = library.get(id).unwrap();
        assert_eq!((image.width, image.height), (640, 480));
    }
}
