//! Dice in the player's hand

use serde::{Deserialize, Serialize};

/// Dice available to throw plus the selected style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceInventory {
    count: u32,
    style: u8,
    style_count: u8,
}

impl DiceInventory {
    /// `style_count` is clamped to at least one style
    pub fn new(count: u32, style_count: u8) -> Self {
        Self {
            count,
            style: 0,
            style_count: style_count.max(1),
        }
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn style(&self) -> u8 {
        self.style
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Take one die out of the hand. Returns false if the hand is empty.
    pub fn take(&mut self) -> bool {
        if self.count == 0 {
            return false;
        }
        self.count -= 1;
        true
    }

    /// Put one die back into the hand
    pub fn give_back(&mut self) {
        self.count += 1;
    }

    /// Advance to the next style, wrapping after the last one
    pub fn cycle_style(&mut self) -> u8 {
        self.style = if self.style + 1 >= self.style_count {
            0
        } else {
            self.style + 1
        };
        self.style
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    #[test]
    fn test_cycle_style_wraps() {
        let mut inv = DiceInventory::new(INITIAL_DICE_COUNT, DICE_STYLE_COUNT);
        assert_eq!(inv.style(), 0);
        for expected in 1..=4 {
            assert_eq!(inv.cycle_style(), expected);
        }
        assert_eq!(inv.cycle_style(), 0);
    }

    #[test]
    fn test_cycle_style_single_style() {
        let mut inv = DiceInventory::new(5, 0);
        assert_eq!(inv.cycle_style(), 0);
        assert_eq!(inv.cycle_style(), 0);
    }

    #[test]
    fn test_take_stops_at_empty() {
        let mut inv = DiceInventory::new(2, DICE_STYLE_COUNT);
        assert!(inv.take());
        assert!(inv.take());
        assert!(!inv.take());
        assert_eq!(inv.count(), 0);
        assert!(inv.is_empty());

        inv.give_back();
        assert_eq!(inv.count(), 1);
    }

    #[test]
    fn test_style_does_not_touch_count() {
        let mut inv = DiceInventory::new(3, DICE_STYLE_COUNT);
        inv.cycle_style();
        assert_eq!(inv.count(), 3);
    }
}
