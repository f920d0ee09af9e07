//! Two-list drag-and-drop board of the constants editor
//!
//! `available` holds the collection's catalog products, `constants` the
//! manually ordered products pinned to the top of the collection. Across
//! both lists a product code appears at most once; every operation here
//! keeps that true.

use contracts::domain::a002_product::ProductCard;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardZone {
    Available,
    Constants,
}

/// Where a dragged card was released
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Onto another card, identified by product code
    Item(String),
    /// Onto the empty area of a list
    Zone(BoardZone),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    Reordered(BoardZone),
    Moved { from: BoardZone, to: BoardZone },
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstantsBoard {
    available: Vec<ProductCard>,
    constants: Vec<ProductCard>,
}

impl ConstantsBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available(&self) -> &[ProductCard] {
        &self.available
    }

    pub fn constants(&self) -> &[ProductCard] {
        &self.constants
    }

    /// Start over with freshly fetched products; nothing is pinned yet
    pub fn load(&mut self, products: Vec<ProductCard>) {
        let mut seen = HashSet::new();
        self.available = products
            .into_iter()
            .filter(|p| seen.insert(p.product_code.clone()))
            .collect();
        self.constants.clear();
    }

    /// Swap in a filtered product list, keeping the pinned constants
    pub fn replace_available(&mut self, products: Vec<ProductCard>) {
        let mut seen: HashSet<String> = self
            .constants
            .iter()
            .map(|p| p.product_code.clone())
            .collect();
        self.available = products
            .into_iter()
            .filter(|p| seen.insert(p.product_code.clone()))
            .collect();
    }

    pub fn zone_of(&self, code: &str) -> Option<BoardZone> {
        if position(&self.available, code).is_some() {
            Some(BoardZone::Available)
        } else if position(&self.constants, code).is_some() {
            Some(BoardZone::Constants)
        } else {
            None
        }
    }

    fn list_mut(&mut self, zone: BoardZone) -> &mut Vec<ProductCard> {
        match zone {
            BoardZone::Available => &mut self.available,
            BoardZone::Constants => &mut self.constants,
        }
    }

    /// Apply a finished drag gesture
    ///
    /// Anything that cannot be resolved (no target, unknown codes, a drop
    /// back onto the card's own list area) leaves the board untouched.
    pub fn apply_drag(&mut self, active_code: &str, target: Option<DropTarget>) -> DragOutcome {
        let Some(target) = target else {
            return DragOutcome::Ignored;
        };
        let Some(from) = self.zone_of(active_code) else {
            return DragOutcome::Ignored;
        };

        let (to, insert_before) = match target {
            DropTarget::Item(over) => match self.zone_of(&over) {
                Some(zone) => (zone, Some(over)),
                None => return DragOutcome::Ignored,
            },
            DropTarget::Zone(zone) => (zone, None),
        };

        if from == to {
            let Some(over) = insert_before else {
                return DragOutcome::Ignored;
            };
            let list = self.list_mut(from);
            let (Some(old_index), Some(new_index)) =
                (position(list, active_code), position(list, &over))
            else {
                return DragOutcome::Ignored;
            };
            if old_index == new_index {
                return DragOutcome::Ignored;
            }
            array_move(list, old_index, new_index);
            return DragOutcome::Reordered(from);
        }

        let Some(index) = position(self.list_mut(from), active_code) else {
            return DragOutcome::Ignored;
        };
        let card = self.list_mut(from).remove(index);
        let dest = self.list_mut(to);
        let at = insert_before
            .and_then(|over| position(dest, &over))
            .unwrap_or(dest.len());
        dest.insert(at, card);
        DragOutcome::Moved { from, to }
    }

    /// Unpin a constant, returning it to the end of the available list
    pub fn remove_constant(&mut self, code: &str) -> bool {
        match position(&self.constants, code) {
            Some(index) => {
                let card = self.constants.remove(index);
                self.available.push(card);
                true
            }
            None => false,
        }
    }

    /// Product codes in pinned order, as sent on save
    pub fn constant_codes(&self) -> Vec<String> {
        self.constants
            .iter()
            .map(|p| p.product_code.clone())
            .collect()
    }

    /// Placeholder cells drawn after the constants
    pub fn empty_slots(&self) -> usize {
        self.available.len().saturating_sub(self.constants.len())
    }
}

fn position(list: &[ProductCard], code: &str) -> Option<usize> {
    list.iter().position(|p| p.product_code == code)
}

fn array_move<T>(list: &mut Vec<T>, from: usize, to: usize) {
    let item = list.remove(from);
    list.insert(to, item);
}
