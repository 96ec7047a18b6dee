//! Cards, slots, and the card stack
//!
//! A card is one sheet instance with exactly four slots in a 2x2 grid.
//! The stack is the ordered collection of cards; it is never empty, and
//! growth on fill is an explicit post-condition step rather than a side
//! effect buried inside a placement mutation.

use crate::color::CardColor;
use crate::layout::SLOTS_PER_CARD;
use crate::library::{ImageId, Library};
use crate::types::{Orientation, Rotation};
use std::collections::{HashSet, VecDeque};

/// One of the four placement regions within a card. A slot with no
/// image reference is empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Slot {
    /// Back-reference into the library, never an owning handle
    pub image: Option<ImageId>,
    pub rotation: Rotation,
    /// Pan offset in base-resolution device pixels, clamped to the
    /// image's overscan at placement time
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        self.image.is_none()
    }

    /// Assign an image, resetting rotation and pan to identity.
    pub fn assign(&mut self, id: ImageId) {
        *self = Slot {
            image: Some(id),
            ..Slot::default()
        };
    }

    /// Empty the slot, resetting rotation and pan.
    pub fn clear(&mut self) {
        *self = Slot::default();
    }
}

/// One sheet instance holding exactly four slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub slots: [Slot; SLOTS_PER_CARD],
    pub background: CardColor,
    pub orientation: Orientation,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            slots: [Slot::default(); SLOTS_PER_CARD],
            background: CardColor::WHITE,
            orientation: Orientation::default(),
        }
    }
}

impl Card {
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            ..Self::default()
        }
    }

    /// A card is full when every slot holds an image.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Slot::is_empty)
    }
}

/// Ordered collection of cards. Always holds at least one card.
#[derive(Debug, Clone)]
pub struct CardStack {
    cards: Vec<Card>,
}

impl Default for CardStack {
    fn default() -> Self {
        Self::new()
    }
}

impl CardStack {
    pub fn new() -> Self {
        Self {
            cards: vec![Card::default()],
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Mutable walk over all cards, for bulk setting per-card
    /// configuration like background or orientation.
    pub fn cards_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        false // invariant: never empty
    }

    /// Append a fresh empty card and return its index.
    pub fn add_card(&mut self, orientation: Orientation) -> usize {
        self.cards.push(Card::new(orientation));
        self.cards.len() - 1
    }

    /// Remove a card. The last remaining card cannot be removed;
    /// returns false in that case or for an out-of-range index.
    pub fn remove_card(&mut self, index: usize) -> bool {
        if self.cards.len() <= 1 || index >= self.cards.len() {
            return false;
        }
        self.cards.remove(index);
        true
    }

    /// Drop every card and reinstate a single fresh empty one.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.cards.push(Card::default());
    }

    /// Place an image into a slot, resetting its rotation and pan.
    /// Returns false for an out-of-range card or slot index.
    pub fn place_image(&mut self, card: usize, slot: usize, id: ImageId) -> bool {
        match self.cards.get_mut(card) {
            Some(card) if slot < SLOTS_PER_CARD => {
                card.slots[slot].assign(id);
                true
            }
            _ => false,
        }
    }

    pub fn clear_slot(&mut self, card: usize, slot: usize) -> bool {
        match self.cards.get_mut(card) {
            Some(card) if slot < SLOTS_PER_CARD => {
                card.slots[slot].clear();
                true
            }
            _ => false,
        }
    }

    /// Post-condition check for interactive placement: if the last card
    /// just became full, append a fresh empty card so there is always
    /// somewhere to drop the next image. Returns true if a card was
    /// appended.
    pub fn grow_if_last_full(&mut self) -> bool {
        let grow = self.cards.last().is_some_and(Card::is_full);
        if grow {
            let orientation = self.cards.last().map(|c| c.orientation).unwrap_or_default();
            self.cards.push(Card::new(orientation));
        }
        grow
    }

    /// Every image id currently referenced by any slot. An image may be
    /// referenced by more than one slot; duplicates collapse here.
    pub fn referenced_ids(&self) -> HashSet<ImageId> {
        self.cards
            .iter()
            .flat_map(|card| card.slots.iter())
            .filter_map(|slot| slot.image)
            .collect()
    }

    /// Clear every slot that references `id`, leaving other slots
    /// untouched. Returns the number of slots cleared.
    pub fn clear_references(&mut self, id: ImageId) -> usize {
        let mut cleared = 0;
        for card in &mut self.cards {
            for slot in &mut card.slots {
                if slot.image == Some(id) {
                    slot.clear();
                    cleared += 1;
                }
            }
        }
        cleared
    }

    /// Distribute library images not yet referenced by any slot into
    /// empty slots, walking cards in order and slots 0..4 within each
    /// card, appending fresh cards once existing ones are exhausted.
    ///
    /// Returns the number of images placed. Does not append a trailing
    /// empty card; callers wanting that behavior combine this with
    /// `grow_if_last_full`.
    pub fn auto_fill(&mut self, library: &Library) -> usize {
        let referenced = self.referenced_ids();
        let mut queue: VecDeque<ImageId> = library
            .iter()
            .filter(|image| !referenced.contains(&image.id))
            .map(|image| image.id)
            .collect();
        let placed = queue.len();

        let mut card_index = 0;
        while !queue.is_empty() {
            if card_index == self.cards.len() {
                let orientation = self.cards.last().map(|c| c.orientation).unwrap_or_default();
                self.cards.push(Card::new(orientation));
            }
            for slot in &mut self.cards[card_index].slots {
                if slot.is_empty() {
                    match queue.pop_front() {
                        Some(id) => slot.assign(id),
                        None => break,
                    }
                }
            }
            card_index += 1;
        }

        if placed > 0 {
            log::debug!(
                "auto-fill placed {placed} images across {} cards",
                self.cards.len()
            );
        }
        placed
    }
}
