//! Paragraph level detection (P2, P3) and explicit levels (X1-X10)
use crate::bidi_class::BidiClass;
use crate::direction::ParagraphDirectionHint;
use crate::error::BidiError;
use crate::level::Level;
use crate::level_stack::{Override, StatusStack};
use crate::run_list::{Compaction, RunArena, RunId};
use log::trace;

/// P2: find the first strong letter that is not inside an isolate and
/// return the paragraph level it implies.
pub(crate) fn paragraph_level(types: &[BidiClass]) -> Option<Level> {
    let mut isolate_count = 0usize;
    for &t in types {
        match t {
            BidiClass::RightToLeftIsolate
            | BidiClass::LeftToRightIsolate
            | BidiClass::FirstStrongIsolate => isolate_count += 1,
            BidiClass::PopDirectionalIsolate => isolate_count = isolate_count.saturating_sub(1),
            BidiClass::LeftToRight if isolate_count == 0 => return Some(Level(0)),
            BidiClass::RightToLeft | BidiClass::ArabicLetter if isolate_count == 0 => {
                return Some(Level(1))
            }
            _ => {}
        }
    }
    None
}

/// X5c for every FSI of the paragraph in one pass, in order of position.
/// An FSI takes the first strong letter between it and its matching PDI,
/// or the end of the paragraph, skipping nested isolates.  `None` means
/// there was no such letter.
fn first_strong_isolate_levels(types: &[BidiClass]) -> Result<Vec<Option<Level>>, BidiError> {
    let mut levels: Vec<Option<Level>> = vec![];
    // Open isolates, innermost last; FSIs carry their index into `levels`
    let mut open: Vec<Option<usize>> = vec![];

    for &t in types {
        match t {
            BidiClass::FirstStrongIsolate => {
                levels.try_reserve(1)?;
                open.try_reserve(1)?;
                open.push(Some(levels.len()));
                levels.push(None);
            }
            BidiClass::RightToLeftIsolate | BidiClass::LeftToRightIsolate => {
                open.try_reserve(1)?;
                open.push(None);
            }
            BidiClass::PopDirectionalIsolate => {
                open.pop();
            }
            BidiClass::LeftToRight | BidiClass::RightToLeft | BidiClass::ArabicLetter => {
                if let Some(&Some(idx)) = open.last() {
                    if levels[idx].is_none() {
                        levels[idx] = Some(if t == BidiClass::LeftToRight {
                            Level(0)
                        } else {
                            Level(1)
                        });
                    }
                }
            }
            _ => {}
        }
    }
    Ok(levels)
}

/// P3: resolve the paragraph embedding level, writing the detected
/// direction back into `hint`.  A plain `Auto` hint stays `Auto` when
/// the paragraph has no strong letter.
pub(crate) fn resolve_base_level(types: &[BidiClass], hint: &mut ParagraphDirectionHint) -> Level {
    if !hint.is_auto() {
        return hint.base_level();
    }
    match paragraph_level(types) {
        Some(level) => {
            *hint = level.direction().into();
        }
        None => {
            if *hint != ParagraphDirectionHint::Auto {
                *hint = hint.direction().into();
            }
        }
    }
    hint.base_level()
}

pub(crate) struct ExplicitLevels {
    /// The runs removed by X9, in logical order
    pub shadow: RunId,
    pub max_isolate_level: usize,
}

/// X1-X10 over the run list.
/// Assigns every run its explicit level and isolate level, applies
/// directional overrides, moves the runs that X9 removes to a shadow
/// list and links the isolating run chains.
pub(crate) fn resolve_explicit_levels(
    arena: &mut RunArena,
    list: RunId,
    types: &[BidiClass],
    base_level: Level,
) -> Result<ExplicitLevels, BidiError> {
    let shadow = arena.new_list()?;
    // X1
    let mut stack = StatusStack::new(base_level);
    let mut max_isolate_level = 0;
    let mut fsi_levels = first_strong_isolate_levels(types)?.into_iter();

    let mut cur = arena.next(list);
    while cur != list {
        let next = arena.next(cur);
        let bc = arena[cur].bidi_class;
        let len = arena[cur].len;

        match bc {
            // X2-X5
            BidiClass::RightToLeftEmbedding
            | BidiClass::LeftToRightEmbedding
            | BidiClass::RightToLeftOverride
            | BidiClass::LeftToRightOverride => {
                for _ in 0..len {
                    let current = stack.embedding_level();
                    let (level, override_status) = match bc {
                        BidiClass::RightToLeftEmbedding => {
                            (current.least_greater_odd(), Override::Neutral)
                        }
                        BidiClass::LeftToRightEmbedding => {
                            (current.least_greater_even(), Override::Neutral)
                        }
                        BidiClass::RightToLeftOverride => {
                            (current.least_greater_odd(), Override::RTL)
                        }
                        _ => (current.least_greater_even(), Override::LTR),
                    };
                    match level {
                        Some(level) if stack.can_push() => {
                            stack.push(level, override_status, false)
                        }
                        _ => stack.note_embedding_overflow(),
                    }
                }
                arena[cur].level = Level::REMOVED;
                arena.move_to_shadow(cur, shadow);
            }
            // X7
            BidiClass::PopDirectionalFormat => {
                for _ in 0..len {
                    stack.pop_embedding();
                }
                arena[cur].level = Level::REMOVED;
                arena.move_to_shadow(cur, shadow);
            }
            // X9 for BN; X6 does not apply to it
            BidiClass::BoundaryNeutral => {
                arena[cur].level = Level::REMOVED;
                arena.move_to_shadow(cur, shadow);
            }
            // X6a
            BidiClass::PopDirectionalIsolate => {
                let bc = if stack.pop_isolate() {
                    bc
                } else {
                    trace!("unmatched PDI at {}", arena[cur].pos);
                    BidiClass::OtherNeutral
                };
                let run = &mut arena[cur];
                run.level = stack.embedding_level();
                run.isolate_level = stack.isolate_level();
                run.bidi_class = stack.override_status().apply(bc);
            }
            // X5a-X5c
            BidiClass::RightToLeftIsolate
            | BidiClass::LeftToRightIsolate
            | BidiClass::FirstStrongIsolate => {
                let current = stack.embedding_level();
                let pos = arena[cur].pos;
                {
                    let run = &mut arena[cur];
                    run.level = current;
                    run.isolate_level = stack.isolate_level();
                    run.bidi_class = stack.override_status().apply(bc);
                }

                let rtl = match bc {
                    BidiClass::RightToLeftIsolate => true,
                    BidiClass::LeftToRightIsolate => false,
                    _ => fsi_levels.next().flatten() == Some(Level(1)),
                };
                let level = if rtl {
                    current.least_greater_odd()
                } else {
                    current.least_greater_even()
                };
                trace!(
                    "isolate at {} picked {:?} based on current stack level {:?}",
                    pos,
                    level,
                    current
                );

                match level {
                    Some(level) if stack.can_push() => {
                        stack.valid_isolate_count += 1;
                        stack.push(level, Override::Neutral, true);
                        max_isolate_level = max_isolate_level.max(stack.isolate_level());
                    }
                    _ => stack.isolate_overflow += 1,
                }
            }
            // X8
            BidiClass::ParagraphSeparator => {
                let run = &mut arena[cur];
                run.level = base_level;
                run.isolate_level = 0;
                stack.reset();
            }
            // X6
            _ => {
                let run = &mut arena[cur];
                run.level = stack.embedding_level();
                run.isolate_level = stack.isolate_level();
                run.bidi_class = stack.override_status().apply(bc);
            }
        }

        cur = next;
    }

    // X10: the runs left in the list now form level runs linked into
    // isolating run sequences.
    arena.link_isolates(list)?;
    arena.compact(list, Compaction::Strict);

    Ok(ExplicitLevels {
        shadow,
        max_isolate_level,
    })
}
