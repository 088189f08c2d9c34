use crate::bidi_brackets::BIDI_BRACKETS;
use crate::bidi_class::BidiClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BracketKind {
    Open,
    Close,
}

/// The Bidi_Paired_Bracket_Type of a position, together with the
/// id of the pair it belongs to.  The id is the canonical opening
/// bracket of the pair, so an opener and its closer share an id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BracketType {
    #[default]
    None,
    Open(char),
    Close(char),
}

impl BracketType {
    pub fn is_bracket(self) -> bool {
        self != BracketType::None
    }

    pub fn is_open(self) -> bool {
        matches!(self, BracketType::Open(_))
    }

    pub fn id(self) -> Option<char> {
        match self {
            BracketType::None => None,
            BracketType::Open(id) | BracketType::Close(id) => Some(id),
        }
    }
}

/// Looks up the paired bracket type for `c`
pub fn classify_bracket(c: char) -> BracketType {
    match BIDI_BRACKETS.binary_search_by_key(&c, |&(cp, _, _)| cp) {
        Ok(idx) => {
            let (_, id, kind) = BIDI_BRACKETS[idx];
            match kind {
                BracketKind::Open => BracketType::Open(id),
                BracketKind::Close => BracketType::Close(id),
            }
        }
        Err(_) => BracketType::None,
    }
}

/// Classifies each codepoint of a paragraph.  Only positions whose
/// bidi class is ON are considered to be brackets; BD14/BD15 exclude
/// anything that was classified otherwise.
///
/// # Panics
/// Panics if `types` or `brackets` is shorter than `text`.
pub fn classify_bracket_batch(text: &[char], types: &[BidiClass], brackets: &mut [BracketType]) {
    for (idx, &c) in text.iter().enumerate() {
        brackets[idx] = if types[idx] == BidiClass::OtherNeutral {
            classify_bracket(c)
        } else {
            BracketType::None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal as assert_eq;

    #[test]
    fn mirror() {
        assert_eq!(classify_bracket('{'), BracketType::Open('{'));
        assert_eq!(classify_bracket('['), BracketType::Open('['));
        assert_eq!(classify_bracket(']'), BracketType::Close('['));
        assert_eq!(classify_bracket('a'), BracketType::None);
    }

    #[test]
    fn canonical_angle_brackets_share_an_id() {
        assert_eq!(classify_bracket('\u{2329}'), BracketType::Open('\u{3008}'));
        assert_eq!(classify_bracket('\u{3009}'), BracketType::Close('\u{3008}'));
        assert_eq!(
            classify_bracket('\u{232a}').id(),
            classify_bracket('\u{3008}').id()
        );
    }

    #[test]
    fn batch_respects_bidi_class() {
        let text = ['(', 'a', ')', ')'];
        let types = [
            BidiClass::OtherNeutral,
            BidiClass::LeftToRight,
            BidiClass::OtherNeutral,
            BidiClass::RightToLeft,
        ];
        let mut brackets = [BracketType::None; 4];
        classify_bracket_batch(&text, &types, &mut brackets);
        assert_eq!(
            brackets,
            [
                BracketType::Open('('),
                BracketType::None,
                BracketType::Close('('),
                BracketType::None,
            ]
        );
    }
}
