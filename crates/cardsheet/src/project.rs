//! A project binds the image library to the card stack so that library
//! mutations keep slot references consistent.

use crate::card::CardStack;
use crate::library::{ImageId, Library};
use crate::types::{Result, SheetError};
use std::sync::Arc;
use tiny_skia::Pixmap;

/// Library plus card stack, with the cross-cutting mutations that must
/// stay atomic with respect to rendering reads.
#[derive(Debug, Clone, Default)]
pub struct Project {
    pub library: Library,
    pub cards: CardStack,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a decoded image to the library.
    pub fn add_image(&mut self, name: impl Into<String>, pixels: Arc<Pixmap>) -> ImageId {
        self.library.add(name, pixels)
    }

    /// Remove an image from the library, clearing every slot that
    /// referenced it. Slots referencing other images are untouched.
    pub fn remove_image(&mut self, id: ImageId) -> bool {
        if !self.library.remove(id) {
            return false;
        }
        let cleared = self.cards.clear_references(id);
        if cleared > 0 {
            log::debug!("removed {id:?}, cleared {cleared} slot(s)");
        }
        true
    }

    /// Place a library image into a slot, then append a fresh card if
    /// the placement filled the last one.
    pub fn place_image(&mut self, card: usize, slot: usize, id: ImageId) -> Result<()> {
        if !self.library.contains(id) {
            return Err(SheetError::UnknownImage(id));
        }
        if !self.cards.place_image(card, slot, id) {
            return Err(SheetError::Config(format!(
                "No such slot: card {card}, slot {slot}"
            )));
        }
        self.cards.grow_if_last_full();
        Ok(())
    }

    /// Fill empty slots from the library.
    pub fn auto_fill(&mut self) -> usize {
        self.cards.auto_fill(&self.library)
    }
}
