//! Time block model.
//!
//! A time block is one fixed meeting interval of the school day. The
//! [`TIME_BLOCKS`] palette is the complete, ordered set of blocks a section
//! can be given; its order is the priority order used when coloring.
//!
//! # Time Format
//! Times are 24-hour clock values written without a colon:
//! `800` is 8:00, `1345` is 13:45.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A meeting interval `[start, end)` in HHMM form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Start time (HHMM, inclusive).
    pub start: u16,
    /// End time (HHMM, exclusive).
    pub end: u16,
}

/// The six teaching blocks of the day, in assignment priority order.
pub const TIME_BLOCKS: [TimeBlock; 6] = [
    TimeBlock::new(800, 900),
    TimeBlock::new(915, 1015),
    TimeBlock::new(1045, 1145),
    TimeBlock::new(1245, 1345),
    TimeBlock::new(1400, 1500),
    TimeBlock::new(1530, 1630),
];

/// Lunch. Never part of the palette.
pub const LUNCH_BREAK: TimeBlock = TimeBlock::new(1145, 1245);

impl TimeBlock {
    pub const fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Start as minutes since midnight.
    #[inline]
    pub fn start_minutes(&self) -> u32 {
        hhmm_to_minutes(self.start)
    }

    /// End as minutes since midnight.
    #[inline]
    pub fn end_minutes(&self) -> u32 {
        hhmm_to_minutes(self.end)
    }

    /// Length of the block in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end_minutes().saturating_sub(self.start_minutes())
    }

    /// Whether two blocks share any minute.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_minutes() < other.end_minutes() && other.start_minutes() < self.end_minutes()
    }

    /// Position of this block in [`TIME_BLOCKS`], if it is a palette block.
    pub fn palette_index(&self) -> Option<usize> {
        TIME_BLOCKS.iter().position(|b| b == self)
    }
}

impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start / 100,
            self.start % 100,
            self.end / 100,
            self.end % 100
        )
    }
}

fn hhmm_to_minutes(hhmm: u16) -> u32 {
    u32::from(hhmm / 100) * 60 + u32::from(hhmm % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_conversion() {
        let b = TimeBlock::new(800, 900);
        assert_eq!(b.start_minutes(), 480);
        assert_eq!(b.end_minutes(), 540);
        assert_eq!(b.duration_minutes(), 60);

        let odd = TimeBlock::new(1345, 1415);
        assert_eq!(odd.duration_minutes(), 30);
    }

    #[test]
    fn test_palette_is_disjoint() {
        for (i, a) in TIME_BLOCKS.iter().enumerate() {
            for b in &TIME_BLOCKS[i + 1..] {
                assert!(!a.overlaps(b), "{a} overlaps {b}");
            }
            assert!(!a.overlaps(&LUNCH_BREAK));
        }
    }

    #[test]
    fn test_palette_index() {
        assert_eq!(TIME_BLOCKS[3].palette_index(), Some(3));
        assert_eq!(TimeBlock::new(915, 1015).palette_index(), Some(1));
        assert_eq!(LUNCH_BREAK.palette_index(), None);
    }

    #[test]
    fn test_equality_by_bounds() {
        assert_eq!(TimeBlock::new(1400, 1500), TIME_BLOCKS[4]);
        assert_ne!(TimeBlock::new(1400, 1501), TIME_BLOCKS[4]);
    }

    #[test]
    fn test_display() {
        assert_eq!(TIME_BLOCKS[0].to_string(), "08:00-09:00");
        assert_eq!(TIME_BLOCKS[3].to_string(), "12:45-13:45");
    }
}
