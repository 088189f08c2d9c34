//! The `Bidi_Class` property values, as produced by an external
//! character classifier.

#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BidiClass {
    ArabicLetter,
    ArabicNumber,
    BoundaryNeutral,
    CommonSeparator,
    EuropeanNumber,
    EuropeanSeparator,
    EuropeanTerminator,
    FirstStrongIsolate,
    LeftToRight,
    LeftToRightEmbedding,
    LeftToRightIsolate,
    LeftToRightOverride,
    NonspacingMark,
    OtherNeutral,
    ParagraphSeparator,
    PopDirectionalFormat,
    PopDirectionalIsolate,
    RightToLeft,
    RightToLeftEmbedding,
    RightToLeftIsolate,
    RightToLeftOverride,
    SegmentSeparator,
    WhiteSpace,
}

impl BidiClass {
    /// The abbreviation used by the UCD data files
    pub fn short_name(self) -> &'static str {
        match self {
            Self::ArabicLetter => "AL",
            Self::ArabicNumber => "AN",
            Self::BoundaryNeutral => "BN",
            Self::CommonSeparator => "CS",
            Self::EuropeanNumber => "EN",
            Self::EuropeanSeparator => "ES",
            Self::EuropeanTerminator => "ET",
            Self::FirstStrongIsolate => "FSI",
            Self::LeftToRight => "L",
            Self::LeftToRightEmbedding => "LRE",
            Self::LeftToRightIsolate => "LRI",
            Self::LeftToRightOverride => "LRO",
            Self::NonspacingMark => "NSM",
            Self::OtherNeutral => "ON",
            Self::ParagraphSeparator => "B",
            Self::PopDirectionalFormat => "PDF",
            Self::PopDirectionalIsolate => "PDI",
            Self::RightToLeft => "R",
            Self::RightToLeftEmbedding => "RLE",
            Self::RightToLeftIsolate => "RLI",
            Self::RightToLeftOverride => "RLO",
            Self::SegmentSeparator => "S",
            Self::WhiteSpace => "WS",
        }
    }

    /// L, R and AL
    pub fn is_letter(self) -> bool {
        matches!(
            self,
            BidiClass::LeftToRight | BidiClass::RightToLeft | BidiClass::ArabicLetter
        )
    }

    /// Strong for the purposes of context resolution; same set as
    /// `is_letter`.
    pub fn is_strong(self) -> bool {
        self.is_letter()
    }

    pub fn is_number(self) -> bool {
        matches!(self, BidiClass::EuropeanNumber | BidiClass::ArabicNumber)
    }

    pub fn is_iso_init(self) -> bool {
        matches!(
            self,
            BidiClass::RightToLeftIsolate
                | BidiClass::LeftToRightIsolate
                | BidiClass::FirstStrongIsolate
        )
    }

    pub fn is_iso_control(self) -> bool {
        self.is_iso_init() || self == BidiClass::PopDirectionalIsolate
    }

    /// LRE, RLE, LRO, RLO and PDF
    pub fn is_explicit(self) -> bool {
        matches!(
            self,
            BidiClass::LeftToRightEmbedding
                | BidiClass::RightToLeftEmbedding
                | BidiClass::LeftToRightOverride
                | BidiClass::RightToLeftOverride
                | BidiClass::PopDirectionalFormat
        )
    }

    /// The classes that rule X9 removes from the paragraph
    pub fn is_removed_by_x9(self) -> bool {
        self.is_explicit() || self == BidiClass::BoundaryNeutral
    }

    /// B and S
    pub fn is_separator(self) -> bool {
        matches!(
            self,
            BidiClass::ParagraphSeparator | BidiClass::SegmentSeparator
        )
    }

    pub fn is_neutral(self) -> bool {
        match self {
            BidiClass::OtherNeutral
            | BidiClass::WhiteSpace
            | BidiClass::SegmentSeparator
            | BidiClass::ParagraphSeparator => true,
            _ => self.is_iso_control(),
        }
    }

    /// Characters whose level rule L1 resets when they trail a line
    /// or precede a separator.
    pub fn is_reset_by_l1(self) -> bool {
        self == BidiClass::WhiteSpace
            || self.is_iso_control()
            || self.is_removed_by_x9()
            || self.is_separator()
    }

    /// Rule N1 treats European and Arabic numbers as R.
    pub(crate) fn numbers_as_rtl(self) -> BidiClass {
        if self.is_number() {
            BidiClass::RightToLeft
        } else {
            self
        }
    }
}

impl std::fmt::Display for BidiClass {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        fmt.write_str(self.short_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid BidiClass {0}")]
pub struct InvalidBidiClass(pub String);

impl std::str::FromStr for BidiClass {
    type Err = InvalidBidiClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "AL" => BidiClass::ArabicLetter,
            "AN" => BidiClass::ArabicNumber,
            "BN" => BidiClass::BoundaryNeutral,
            "CS" => BidiClass::CommonSeparator,
            "EN" => BidiClass::EuropeanNumber,
            "ES" => BidiClass::EuropeanSeparator,
            "ET" => BidiClass::EuropeanTerminator,
            "FSI" => BidiClass::FirstStrongIsolate,
            "L" => BidiClass::LeftToRight,
            "LRO" => BidiClass::LeftToRightOverride,
            "LRE" => BidiClass::LeftToRightEmbedding,
            "LRI" => BidiClass::LeftToRightIsolate,
            "NSM" => BidiClass::NonspacingMark,
            "ON" => BidiClass::OtherNeutral,
            "B" => BidiClass::ParagraphSeparator,
            "PDF" => BidiClass::PopDirectionalFormat,
            "PDI" => BidiClass::PopDirectionalIsolate,
            "R" => BidiClass::RightToLeft,
            "RLE" => BidiClass::RightToLeftEmbedding,
            "RLI" => BidiClass::RightToLeftIsolate,
            "RLO" => BidiClass::RightToLeftOverride,
            "S" => BidiClass::SegmentSeparator,
            "WS" => BidiClass::WhiteSpace,
            bad => return Err(InvalidBidiClass(bad.to_string())),
        })
    }
}
