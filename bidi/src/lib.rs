//! An implementation of the Unicode Bidirectional Algorithm (UAX #9)
//! that resolves a paragraph over a run-length encoded list of runs.
//!
//! The low level entry points work on caller owned slices:
//! `resolve_paragraph_levels` computes the embedding levels of a paragraph
//! and `reorder_line` reorders one line of it for display.  `BidiContext`
//! wraps both for callers that want to iterate runs for shaping.
use std::borrow::Cow;
use std::ops::Range;

mod bidi_brackets;
mod bidi_class;
mod bracket;
mod direction;
mod error;
mod explicit;
mod implicit;
mod level;
mod level_stack;
mod neutral;
mod paragraph;
mod reorder;
mod run_list;
mod weak;

pub use bidi_class::{BidiClass, InvalidBidiClass};
pub use bracket::{classify_bracket, classify_bracket_batch, BracketKind, BracketType};
pub use direction::{Direction, ParagraphDirectionHint};
pub use error::BidiError;
pub use level::{Level, MAX_DEPTH, MAX_RESOLVED_LEVELS};
pub use paragraph::{detect_paragraph_direction, resolve_paragraph_levels};
pub use reorder::{reorder_line, ReorderFlags};

/// Represents a level that has not been assigned; used for the
/// formatting characters removed by the X9 rule while they are
/// set aside.
pub const NO_LEVEL: i8 = -1;

#[derive(Debug, Default)]
pub struct BidiContext {
    orig_char_types: Vec<BidiClass>,
    brackets: Vec<BracketType>,
    levels: Vec<Level>,
    base_dir: ParagraphDirectionHint,
    reorder_nsm: bool,
}

/// A span of the paragraph whose characters share one resolved level.
///
/// `range` holds indices into the paragraph.  Characters removed by X9
/// take the level of the character before them and so sit inside runs;
/// their indices are listed, in ascending order, in `removed_by_x9`.
/// `indices` yields the rest for feeding to a shaper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidiRun {
    pub direction: Direction,
    pub level: Level,
    pub range: Range<usize>,
    pub removed_by_x9: Vec<usize>,
}

impl BidiRun {
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.range
            .clone()
            .filter(move |idx| self.removed_by_x9.binary_search(idx).is_err())
    }
}

/// Splits `levels` into maximal spans of equal level
fn level_spans(levels: &[Level]) -> impl Iterator<Item = Range<usize>> + '_ {
    let mut start = 0;
    std::iter::from_fn(move || {
        let level = *levels.get(start)?;
        let len = levels[start..]
            .iter()
            .take_while(|&&l| l == level)
            .count();
        let span = start..start + len;
        start += len;
        Some(span)
    })
}

/// Builds the `BidiRun`s of a line from its levels and original classes.
/// `offset` is the paragraph index of the first entry.
fn bidi_runs<'a>(
    levels: Cow<'a, [Level]>,
    types: &'a [BidiClass],
    offset: usize,
) -> impl Iterator<Item = BidiRun> + 'a {
    let spans: Vec<Range<usize>> = level_spans(&levels).collect();
    spans.into_iter().map(move |span| {
        let level = levels[span.start];
        BidiRun {
            direction: level.direction(),
            level,
            removed_by_x9: span
                .clone()
                .filter(|&idx| types[idx].is_removed_by_x9())
                .map(|idx| idx + offset)
                .collect(),
            range: span.start + offset..span.end + offset,
        }
    })
}

/// A run of a line in visual order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderedRun {
    pub direction: Direction,
    pub level: Level,
    /// The smallest range of paragraph indices covering `indices`
    pub range: Range<usize>,
    /// Paragraph indices in display order
    pub indices: Vec<usize>,
}

impl BidiContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_level(&self) -> Level {
        self.base_dir.base_level()
    }

    /// The paragraph direction that was used for the most recent
    /// resolution.
    pub fn direction(&self) -> Direction {
        self.base_dir.direction()
    }

    /// The resolved levels of the paragraph, one per codepoint
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// When `reorder` is set to true, reordering will apply rule L3 to
    /// non-spacing marks.  This is likely more desirable for terminal
    /// based applications than it is for more modern GUI applications
    /// that feed into eg: harfbuzz.
    pub fn set_reorder_non_spacing_marks(&mut self, reorder: bool) {
        self.reorder_nsm = reorder;
    }

    fn reorder_flags(&self) -> ReorderFlags {
        if self.reorder_nsm {
            ReorderFlags::REORDER_NSM
        } else {
            ReorderFlags::empty()
        }
    }

    /// The runs of the whole paragraph, in logical order
    pub fn runs(&self) -> impl Iterator<Item = BidiRun> + '_ {
        bidi_runs(Cow::Borrowed(&self.levels), &self.orig_char_types, 0)
    }

    /// The runs of one line of the paragraph, in logical order, after
    /// rule L1 has reset the whitespace trailing the line.
    ///
    /// # Panics
    /// Panics if `line_range` is out of bounds for the paragraph.
    pub fn line_runs(&self, line_range: Range<usize>) -> impl Iterator<Item = BidiRun> + '_ {
        let levels = self.line_levels(line_range.clone());
        bidi_runs(
            Cow::Owned(levels),
            &self.orig_char_types[line_range.clone()],
            line_range.start,
        )
    }

    /// Rule L1 for a line
    fn line_levels(&self, line_range: Range<usize>) -> Vec<Level> {
        let mut levels = self.levels[line_range.clone()].to_vec();
        let types = &self.orig_char_types[line_range];
        reorder_line::<usize>(
            ReorderFlags::empty(),
            types,
            0..types.len(),
            self.base_dir,
            &mut levels,
            None,
            None,
        );
        levels
    }

    /// The runs of one line in display order.  Characters removed by X9
    /// do not appear in them.
    pub fn reordered_runs(&self, line_range: Range<usize>) -> Vec<ReorderedRun> {
        let (levels, visual) = self.reorder_line(line_range.clone());
        let visual_levels: Vec<Level> = visual
            .iter()
            .map(|&idx| levels[idx - line_range.start])
            .collect();

        level_spans(&visual_levels)
            .map(|span| {
                let level = visual_levels[span.start];
                let indices = visual[span].to_vec();
                let first = indices.iter().copied().min().unwrap_or(0);
                let last = indices.iter().copied().max().unwrap_or(0);
                ReorderedRun {
                    direction: level.direction(),
                    level,
                    range: first..last + 1,
                    indices,
                }
            })
            .collect()
    }

    /// `line_range` indicates a contiguous range of character indices
    /// in the paragraph set via `resolve_paragraph`.
    /// This method returns the levels of the line after rule L1, and
    /// the reordered set of indices for display purposes.  Characters
    /// removed by X9 are not included in the reordered indices.
    ///
    /// # Panics
    /// Panics if `line_range` is out of bounds for the paragraph.
    pub fn reorder_line(&self, line_range: Range<usize>) -> (Vec<Level>, Vec<usize>) {
        let mut levels = self.levels[line_range.clone()].to_vec();
        let types = &self.orig_char_types[line_range.clone()];
        let mut visual: Vec<usize> = line_range.clone().collect();

        reorder_line::<usize>(
            self.reorder_flags(),
            types,
            0..types.len(),
            self.base_dir,
            &mut levels,
            None,
            Some(visual.as_mut_slice()),
        );

        visual.retain(|&idx| !self.orig_char_types[idx].is_removed_by_x9());
        (levels, visual)
    }

    /// Resolves a paragraph given its text and the bidi classes of each
    /// of its codepoints.  The text is used to find paired brackets.
    ///
    /// # Panics
    /// Panics if `paragraph` and `char_types` differ in length.
    pub fn resolve_paragraph(
        &mut self,
        paragraph: &[char],
        char_types: &[BidiClass],
        hint: ParagraphDirectionHint,
    ) -> Result<(), BidiError> {
        assert_eq!(
            paragraph.len(),
            char_types.len(),
            "paragraph and char_types must be the same length"
        );
        self.load_char_types(char_types)?;
        self.brackets.resize(paragraph.len(), BracketType::None);
        classify_bracket_batch(paragraph, &self.orig_char_types, &mut self.brackets);
        self.resolve(hint, true)
    }

    /// Resolves a paragraph from the bidi classes of its codepoints
    /// alone; bracket pairs are not considered.
    pub fn set_char_types(
        &mut self,
        char_types: &[BidiClass],
        hint: ParagraphDirectionHint,
    ) -> Result<(), BidiError> {
        self.load_char_types(char_types)?;
        self.resolve(hint, false)
    }

    fn load_char_types(&mut self, char_types: &[BidiClass]) -> Result<(), BidiError> {
        self.orig_char_types.clear();
        self.orig_char_types.try_reserve(char_types.len())?;
        self.orig_char_types.extend_from_slice(char_types);
        self.brackets.clear();
        self.brackets.try_reserve(char_types.len())?;
        Ok(())
    }

    fn resolve(&mut self, hint: ParagraphDirectionHint, with_brackets: bool) -> Result<(), BidiError> {
        let mut levels = vec![];
        levels.try_reserve_exact(self.orig_char_types.len())?;
        levels.resize(self.orig_char_types.len(), Level::default());

        let mut base_dir = hint;
        let brackets = if with_brackets {
            Some(self.brackets.as_slice())
        } else {
            None
        };
        resolve_paragraph_levels(&self.orig_char_types, brackets, &mut base_dir, &mut levels)?;

        self.levels = levels;
        self.base_dir = base_dir;
        Ok(())
    }
}
