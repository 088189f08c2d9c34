//! Weak type resolution, W1-W7
use crate::bidi_class::BidiClass;
use crate::error::BidiError;
use crate::level::Level;
use crate::run_list::{Compaction, RunArena, RunId};

/// The class a run sees on one side: the neighbor's class when it is at
/// the same level, otherwise the direction of the higher of the two
/// levels (sos/eos).
pub(crate) fn context_type(arena: &RunArena, cur: RunId, neighbor: Option<RunId>) -> BidiClass {
    let level = arena[cur].level;
    match neighbor {
        Some(n) if arena[n].level == level => arena[n].bidi_class,
        Some(n) => arena[n].level.max(level).as_bidi_class(),
        None => level.as_bidi_class(),
    }
}

fn last_strong_table(
    max_isolate_level: usize,
    base_level: Level,
) -> Result<Vec<BidiClass>, BidiError> {
    let mut last_strong = vec![];
    last_strong.try_reserve_exact(max_isolate_level + 1)?;
    last_strong.resize(max_isolate_level + 1, base_level.as_bidi_class());
    Ok(last_strong)
}

pub(crate) fn resolve_weak_types(
    arena: &mut RunArena,
    list: RunId,
    base_level: Level,
    max_isolate_level: usize,
) -> Result<(), BidiError> {
    resolve_nsm_and_arabic_numbers(arena, list, base_level, max_isolate_level)?;
    arena.compact(list, Compaction::Strict);
    resolve_numbers_and_separators(arena, list, base_level, max_isolate_level)?;
    arena.compact(list, Compaction::Neutrals);
    Ok(())
}

/// W1 and W2
fn resolve_nsm_and_arabic_numbers(
    arena: &mut RunArena,
    list: RunId,
    base_level: Level,
    max_isolate_level: usize,
) -> Result<(), BidiError> {
    let mut last_strong = last_strong_table(max_isolate_level, base_level)?;

    let mut cur = arena.next(list);
    while cur != list {
        let isolate_level = arena[cur].isolate_level;
        let level = arena[cur].level;
        let prev = arena.adjacent(cur, false, false);
        let next = arena.adjacent(cur, true, false);
        let prev_type = context_type(arena, cur, prev);

        if prev_type.is_strong() {
            last_strong[isolate_level] = prev_type;
        }

        let mut this_type = arena[cur].bidi_class;

        // W1
        if this_type == BidiClass::NonspacingMark {
            let follows_isolate = prev
                .map(|p| arena[p].level == level && arena[p].bidi_class.is_iso_control())
                .unwrap_or(false);
            this_type = if follows_isolate {
                BidiClass::OtherNeutral
            } else {
                prev_type
            };
            arena[cur].bidi_class = this_type;

            // Fold into the base character; that also lets a mark follow
            // its bracket through N0.
            if let Some(p) = prev {
                if arena.prev(cur) == p
                    && arena[p].level == level
                    && arena[p].isolate_level == isolate_level
                    && arena[p].bidi_class == this_type
                {
                    cur = arena.merge_with_prev(cur);
                }
            }

            if let Some(n) = next {
                if arena.next(cur) == n
                    && arena[n].level == level
                    && arena[n].isolate_level == isolate_level
                    && arena[n].bidi_class == this_type
                    && !arena[n].bracket.is_bracket()
                    && !arena[cur].bracket.is_bracket()
                {
                    cur = arena.merge_with_prev(n);
                }
            }
        }

        // W2
        if this_type == BidiClass::EuropeanNumber
            && last_strong[isolate_level] == BidiClass::ArabicLetter
        {
            arena[cur].bidi_class = BidiClass::ArabicNumber;

            // A mark that W1 is about to resolve against this run
            if let Some(n) = arena.adjacent(cur, true, false) {
                if arena[n].level == level && arena[n].bidi_class == BidiClass::NonspacingMark {
                    arena[n].bidi_class = BidiClass::ArabicNumber;
                }
            }
        }

        cur = arena.next(cur);
    }
    Ok(())
}

/// W3-W7
fn resolve_numbers_and_separators(
    arena: &mut RunArena,
    list: RunId,
    base_level: Level,
    max_isolate_level: usize,
) -> Result<(), BidiError> {
    let mut last_strong = last_strong_table(max_isolate_level, base_level)?;
    let mut w4 = true;
    // The class of the previous run before W7 rewrote it
    let mut prev_type_orig = BidiClass::OtherNeutral;

    let mut cur = arena.next(list);
    while cur != list {
        let isolate_level = arena[cur].isolate_level;
        let level = arena[cur].level;
        let prev = arena.adjacent(cur, false, false);
        let next = arena.adjacent(cur, true, false);
        let prev_type = context_type(arena, cur, prev);
        let next_type = context_type(arena, cur, next);

        if prev_type.is_strong() {
            last_strong[isolate_level] = prev_type;
        }

        let mut this_type = arena[cur].bidi_class;

        // W3
        if this_type == BidiClass::ArabicLetter {
            arena[cur].bidi_class = BidiClass::RightToLeft;
            w4 = true;
            prev_type_orig = BidiClass::OtherNeutral;
            cur = arena.next(cur);
            continue;
        }

        // W4
        if w4
            && arena[cur].len == 1
            && matches!(
                this_type,
                BidiClass::EuropeanSeparator | BidiClass::CommonSeparator
            )
            && prev_type_orig.is_number()
            && prev_type_orig == next_type
            && (prev_type_orig == BidiClass::EuropeanNumber
                || this_type == BidiClass::CommonSeparator)
        {
            this_type = prev_type_orig;
            arena[cur].bidi_class = this_type;
        }
        w4 = true;

        // W5
        if this_type == BidiClass::EuropeanTerminator
            && (prev_type_orig == BidiClass::EuropeanNumber
                || next_type == BidiClass::EuropeanNumber)
        {
            this_type = BidiClass::EuropeanNumber;
            arena[cur].bidi_class = this_type;
            w4 = false;
        }

        // W6
        if matches!(
            this_type,
            BidiClass::EuropeanSeparator
                | BidiClass::EuropeanTerminator
                | BidiClass::CommonSeparator
        ) {
            arena[cur].bidi_class = BidiClass::OtherNeutral;
        }

        let list_next = arena.next(cur);
        let next_at_same_level = list_next != list && arena[list_next].level == level;

        // W7
        if this_type == BidiClass::EuropeanNumber
            && last_strong[isolate_level] == BidiClass::LeftToRight
        {
            arena[cur].bidi_class = BidiClass::LeftToRight;
            prev_type_orig = if next_at_same_level {
                BidiClass::EuropeanNumber
            } else {
                BidiClass::OtherNeutral
            };
        } else if next_at_same_level || list_next == list {
            prev_type_orig = arena[cur].bidi_class;
        } else {
            prev_type_orig = arena[list_next].level.max(level).as_bidi_class();
        }

        cur = list_next;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explicit::resolve_explicit_levels;
    use k9::assert_equal as assert_eq;
    use BidiClass::*;

    fn resolve(types: &[BidiClass], base: Level) -> Vec<BidiClass> {
        run_passes(types, base, true)
    }

    fn run_passes(types: &[BidiClass], base: Level, all: bool) -> Vec<BidiClass> {
        let mut arena = RunArena::new();
        let list = arena.encode(types, None).unwrap();
        let explicit = resolve_explicit_levels(&mut arena, list, types, base).unwrap();
        if all {
            resolve_weak_types(&mut arena, list, base, explicit.max_isolate_level).unwrap();
        } else {
            resolve_nsm_and_arabic_numbers(&mut arena, list, base, explicit.max_isolate_level)
                .unwrap();
        }
        let mut result = vec![];
        for id in arena.ids(list) {
            for _ in 0..arena[id].len {
                result.push(arena[id].bidi_class);
            }
        }
        result
    }

    #[test]
    fn w1_marks_take_previous_class() {
        assert_eq!(
            resolve(&[RightToLeft, NonspacingMark, NonspacingMark], Level(0)),
            vec![RightToLeft, RightToLeft, RightToLeft]
        );
        // at the start of the paragraph a mark takes sos
        assert_eq!(
            resolve(&[NonspacingMark, LeftToRight], Level(1)),
            vec![RightToLeft, LeftToRight]
        );
    }

    #[test]
    fn w1_mark_after_pdi_is_neutral() {
        assert_eq!(
            run_passes(
                &[
                    LeftToRight,
                    RightToLeftIsolate,
                    RightToLeft,
                    PopDirectionalIsolate,
                    NonspacingMark
                ],
                Level(0),
                false
            ),
            vec![
                LeftToRight,
                RightToLeftIsolate,
                RightToLeft,
                PopDirectionalIsolate,
                OtherNeutral
            ]
        );
    }

    #[test]
    fn w2_w3_arabic_context() {
        assert_eq!(
            resolve(&[ArabicLetter, EuropeanNumber], Level(0)),
            vec![RightToLeft, ArabicNumber]
        );
        assert_eq!(
            resolve(&[ArabicLetter, WhiteSpace, EuropeanNumber, NonspacingMark], Level(0)),
            vec![RightToLeft, WhiteSpace, ArabicNumber, ArabicNumber]
        );
    }

    #[test]
    fn w4_single_separator_between_numbers() {
        assert_eq!(
            resolve(
                &[RightToLeft, EuropeanNumber, CommonSeparator, EuropeanNumber],
                Level(0)
            ),
            vec![RightToLeft, EuropeanNumber, EuropeanNumber, EuropeanNumber]
        );
        assert_eq!(
            resolve(&[ArabicNumber, EuropeanSeparator, ArabicNumber], Level(1)),
            vec![ArabicNumber, OtherNeutral, ArabicNumber]
        );
        assert_eq!(
            resolve(
                &[
                    RightToLeft,
                    EuropeanNumber,
                    CommonSeparator,
                    CommonSeparator,
                    EuropeanNumber
                ],
                Level(0)
            ),
            vec![
                RightToLeft,
                EuropeanNumber,
                OtherNeutral,
                OtherNeutral,
                EuropeanNumber
            ]
        );
    }

    #[test]
    fn w5_terminators_join_numbers() {
        assert_eq!(
            resolve(
                &[
                    RightToLeft,
                    EuropeanTerminator,
                    EuropeanTerminator,
                    EuropeanNumber
                ],
                Level(0)
            ),
            vec![RightToLeft, EuropeanNumber, EuropeanNumber, EuropeanNumber]
        );
        assert_eq!(
            resolve(&[RightToLeft, EuropeanTerminator, WhiteSpace], Level(0)),
            // W6 leaves a neutral that then absorbs the whitespace
            vec![RightToLeft, OtherNeutral, OtherNeutral]
        );
    }

    #[test]
    fn w7_numbers_after_ltr() {
        assert_eq!(
            resolve(&[LeftToRight, WhiteSpace, EuropeanNumber], Level(1)),
            vec![LeftToRight, WhiteSpace, LeftToRight]
        );
        assert_eq!(
            resolve(&[EuropeanNumber], Level(0)),
            vec![LeftToRight]
        );
    }
}
