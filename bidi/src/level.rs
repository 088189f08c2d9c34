use crate::bidi_class::BidiClass;
use crate::direction::Direction;
use crate::NO_LEVEL;

/// Maximum explicit embedding level; UBA guarantees that it will never
/// increase in later versions of the spec.
pub const MAX_DEPTH: usize = 125;

/// Number of distinct levels that can result from resolution: the
/// explicit levels plus the one that I1/I2 may add on top.
pub const MAX_RESOLVED_LEVELS: usize = MAX_DEPTH + 1;

#[derive(Default, Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level(pub i8);

impl Level {
    /// Marks a position that rule X9 removed; it has no level of its own
    /// until it is reinserted after implicit resolution.
    pub const REMOVED: Level = Level(NO_LEVEL);

    pub fn direction(self) -> Direction {
        Direction::with_level(self.0)
    }

    pub fn as_bidi_class(self) -> BidiClass {
        if self.0 % 2 == 1 {
            BidiClass::RightToLeft
        } else {
            BidiClass::LeftToRight
        }
    }

    pub fn is_rtl(self) -> bool {
        self.0 % 2 == 1
    }

    pub fn removed_by_x9(self) -> bool {
        self.0 == NO_LEVEL
    }

    pub fn max(self, other: Level) -> Level {
        Level(self.0.max(other.0))
    }

    pub(crate) fn least_greater_even(self) -> Option<Level> {
        let level = if self.0 % 2 == 0 {
            self.0 + 2
        } else {
            self.0 + 1
        };
        if level as usize > MAX_DEPTH {
            None
        } else {
            Some(Self(level))
        }
    }

    pub(crate) fn least_greater_odd(self) -> Option<Level> {
        let level = if self.0 % 2 == 1 {
            self.0 + 2
        } else {
            self.0 + 1
        };
        if level as usize > MAX_DEPTH {
            None
        } else {
            Some(Self(level))
        }
    }
}
