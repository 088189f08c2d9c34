use crate::bidi_class::BidiClass;
use crate::bracket::BracketType;
use crate::direction::ParagraphDirectionHint;
use crate::error::BidiError;
use crate::explicit::{paragraph_level, resolve_base_level, resolve_explicit_levels};
use crate::implicit::resolve_implicit_levels;
use crate::level::Level;
use crate::neutral::{resolve_neutral_types, resolve_paired_brackets};
use crate::run_list::{RunArena, RunId};
use crate::weak::resolve_weak_types;
use log::trace;

fn dump_state(arena: &RunArena, list: RunId, label: &str) {
    if log::log_enabled!(log::Level::Trace) {
        trace!("State: {}", label);
        for run in arena.dump(list) {
            trace!("  {}", run);
        }
    }
}

/// Determines the paragraph direction from its first strong letter
/// outside of any isolate (P2, P3).  Returns `Auto` when there is no
/// such letter.
pub fn detect_paragraph_direction(types: &[BidiClass]) -> ParagraphDirectionHint {
    match paragraph_level(types) {
        Some(level) => level.direction().into(),
        None => ParagraphDirectionHint::Auto,
    }
}

/// Resolves the embedding level of every position of a paragraph.
///
/// `types` are the bidi classes of the paragraph, which is expected to
/// end at its paragraph separator, if it has one.  `brackets` supplies the
/// paired bracket properties used by rule N0; without it, N0 is skipped.
///
/// An auto `base_dir` is replaced by the detected direction; a plain
/// `Auto` is left untouched when the paragraph has no strong letter.
///
/// On success `levels` holds one level per position, with rule L1 applied
/// to the paragraph as a single line, and the result is the highest level
/// plus one.  Positions removed by rule X9 take the level of the position
/// before them.  On failure `levels` is left untouched.
///
/// # Panics
/// Panics if `levels` or `brackets` is not the same length as `types`.
pub fn resolve_paragraph_levels(
    types: &[BidiClass],
    brackets: Option<&[BracketType]>,
    base_dir: &mut ParagraphDirectionHint,
    levels: &mut [Level],
) -> Result<u8, BidiError> {
    let len = types.len();
    assert_eq!(levels.len(), len, "levels must be the same length as types");
    if let Some(brackets) = brackets {
        assert_eq!(
            brackets.len(),
            len,
            "brackets must be the same length as types"
        );
    }

    let base_level = resolve_base_level(types, base_dir);
    trace!("\n**** resolve len={} base_level={:?}\n", len, base_level);
    if len == 0 {
        return Ok(base_level.0 as u8 + 1);
    }

    let mut arena = RunArena::new();
    let list = arena.encode(types, brackets)?;

    dump_state(&arena, list, "before X1-X10");
    let explicit = resolve_explicit_levels(&mut arena, list, types, base_level)?;

    dump_state(&arena, list, "before W1");
    resolve_weak_types(&mut arena, list, base_level, explicit.max_isolate_level)?;

    dump_state(&arena, list, "before N0");
    resolve_paired_brackets(&mut arena, list)?;

    dump_state(&arena, list, "before N1");
    resolve_neutral_types(&mut arena, list);

    dump_state(&arena, list, "before I1, I2");
    resolve_implicit_levels(&mut arena, list, base_level);

    // Bring back what X9 removed
    arena.graft(list, explicit.shadow, true)?;
    let mut prev_level = base_level;
    let mut cur = arena.next(list);
    while cur != list {
        if arena[cur].level.removed_by_x9() {
            arena[cur].level = prev_level;
        }
        prev_level = arena[cur].level;
        cur = arena.next(cur);
    }
    dump_state(&arena, list, "before L1");

    let overlay = separator_and_trailing_whitespace(&mut arena, types, base_level)?;
    arena.graft(list, overlay, false)?;
    debug_assert!(arena.is_contiguous(list, len));
    dump_state(&arena, list, "resolved");

    let mut resolved = vec![];
    resolved.try_reserve_exact(len)?;
    arena.levels(list, &mut resolved)?;

    let max_level = resolved.iter().copied().fold(base_level, Level::max);
    levels.copy_from_slice(&resolved);
    Ok(max_level.0 as u8 + 1)
}

/// L1 for the paragraph as a whole: segment and paragraph separators,
/// together with any whitespace, isolate controls and removed characters
/// that precede them or trail the paragraph, are reset to the paragraph
/// level.  The spans are returned as an overlay list in ascending order.
fn separator_and_trailing_whitespace(
    arena: &mut RunArena,
    types: &[BidiClass],
    base_level: Level,
) -> Result<RunId, BidiError> {
    let mut spans: Vec<(usize, usize)> = vec![];
    // Exclusive end of the span being reset, if any
    let mut reset_end = Some(types.len());

    for j in (0..=types.len()).rev() {
        // j is one past the position being considered; 0 stands for the
        // start of the paragraph, which ends any reset span.
        let bc = if j > 0 {
            types[j - 1]
        } else {
            BidiClass::OtherNeutral
        };
        match reset_end {
            None if bc.is_separator() => reset_end = Some(j),
            Some(end) if !bc.is_reset_by_l1() => {
                if end > j {
                    spans.try_reserve(1)?;
                    spans.push((j, end - j));
                }
                reset_end = None;
            }
            _ => {}
        }
    }

    let overlay = arena.new_list()?;
    let bidi_class = base_level.as_bidi_class();
    for &(pos, len) in spans.iter().rev() {
        arena.push_run(overlay, pos, len, bidi_class, base_level)?;
    }
    Ok(overlay)
}
