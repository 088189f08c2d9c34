use crate::bidi_class::BidiClass;
use crate::direction::ParagraphDirectionHint;
use crate::level::Level;
use std::ops::Range;

bitflags::bitflags! {
    #[cfg_attr(feature = "use_serde", derive(serde::Serialize, serde::Deserialize))]
    #[derive(Default)]
    pub struct ReorderFlags: u8 {
        /// Apply rule L3: keep non-spacing marks after their base
        /// character in right-to-left runs.
        const REORDER_NSM = 1;
    }
}

fn reverse<T>(slice: &mut Option<&mut [T]>, range: Range<usize>) {
    if let Some(slice) = slice {
        slice[range].reverse();
    }
}

/// Reorders one line of a resolved paragraph for display.
///
/// `types` are the original bidi classes and `levels` the output of
/// `resolve_paragraph_levels` for the whole paragraph; `line` selects the
/// positions to work on.  Rule L1 resets the levels of the whitespace,
/// isolate controls and removed characters trailing the line to the
/// paragraph level, updating `levels` in place.  Rule L2 (and L3 when
/// requested) is then applied to `visual` and `map`, either of which is
/// optional.  `levels` itself is not permuted.
///
/// Returns the highest level on the line plus one.
///
/// # Panics
/// Panics if `line` is out of bounds for `types`, `levels`, `visual`
/// or `map`.
pub fn reorder_line<T>(
    flags: ReorderFlags,
    types: &[BidiClass],
    line: Range<usize>,
    base_dir: ParagraphDirectionHint,
    levels: &mut [Level],
    mut visual: Option<&mut [T]>,
    mut map: Option<&mut [usize]>,
) -> u8 {
    let base_level = base_dir.base_level();
    let start = line.start;

    // L1: trailing whitespace of the line
    let mut i = line.end;
    while i > start
        && (types[i - 1] == BidiClass::WhiteSpace
            || types[i - 1].is_iso_control()
            || types[i - 1].is_removed_by_x9())
    {
        i -= 1;
        levels[i] = base_level;
    }

    // L3
    if flags.contains(ReorderFlags::REORDER_NSM) {
        let mut i = line.end;
        while i > start {
            i -= 1;
            if levels[i].is_rtl() && types[i] == BidiClass::NonspacingMark {
                let seq_end = i;
                let level = levels[i];

                while i > start
                    && (types[i - 1].is_removed_by_x9()
                        || types[i - 1] == BidiClass::NonspacingMark)
                    && levels[i - 1] == level
                {
                    i -= 1;
                }
                // Take the base character along
                if i > start && levels[i - 1] == level {
                    i -= 1;
                }

                reverse(&mut visual, i..seq_end + 1);
                reverse(&mut map, i..seq_end + 1);
            }
        }
    }

    let max_level = levels[line.clone()]
        .iter()
        .copied()
        .fold(Level(0), Level::max);

    // L2
    for level in (1..=max_level.0).rev() {
        let level = Level(level);
        let mut i = line.end;
        while i > start {
            if levels[i - 1] >= level {
                let seq_end = i;
                while i > start && levels[i - 1] >= level {
                    i -= 1;
                }
                reverse(&mut visual, i..seq_end);
                reverse(&mut map, i..seq_end);
            } else {
                i -= 1;
            }
        }
    }

    max_level.0 as u8 + 1
}
