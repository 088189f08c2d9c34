use crate::bidi_class::BidiClass;
use crate::level::Level;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    pub fn with_level(level: i8) -> Self {
        if level % 2 == 1 {
            Self::RightToLeft
        } else {
            Self::LeftToRight
        }
    }

    pub fn opposite(self) -> Self {
        if self == Direction::LeftToRight {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }

    pub fn as_bidi_class(self) -> BidiClass {
        match self {
            Self::RightToLeft => BidiClass::RightToLeft,
            Self::LeftToRight => BidiClass::LeftToRight,
        }
    }
}

/// The paragraph direction requested by the caller.
/// After resolution the auto variants are replaced by the detected
/// direction, if one could be found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParagraphDirectionHint {
    #[default]
    LeftToRight,
    RightToLeft,
    /// Auto-detect; stays `Auto` and lays out LTR when the paragraph
    /// has no strong letter outside of isolates.
    Auto,
    /// Attempt to auto-detect but fall back to LTR
    AutoLeftToRight,
    /// Attempt to auto-detect but fall back to RTL
    AutoRightToLeft,
}

impl ParagraphDirectionHint {
    /// Returns just the direction portion of the hint, independent
    /// of the auto-detection state.
    pub fn direction(self) -> Direction {
        match self {
            ParagraphDirectionHint::Auto
            | ParagraphDirectionHint::AutoLeftToRight
            | ParagraphDirectionHint::LeftToRight => Direction::LeftToRight,
            ParagraphDirectionHint::AutoRightToLeft | ParagraphDirectionHint::RightToLeft => {
                Direction::RightToLeft
            }
        }
    }

    pub fn is_auto(self) -> bool {
        !matches!(
            self,
            ParagraphDirectionHint::LeftToRight | ParagraphDirectionHint::RightToLeft
        )
    }

    pub fn base_level(self) -> Level {
        match self.direction() {
            Direction::LeftToRight => Level(0),
            Direction::RightToLeft => Level(1),
        }
    }
}

impl From<Direction> for ParagraphDirectionHint {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::LeftToRight => Self::LeftToRight,
            Direction::RightToLeft => Self::RightToLeft,
        }
    }
}
