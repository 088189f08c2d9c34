//! Paired brackets (BD16, N0) and the remaining neutrals (N1, N2)
use crate::bidi_class::BidiClass;
use crate::bracket::BracketType;
use crate::error::BidiError;
use crate::run_list::{Compaction, RunArena, RunId};
use crate::weak::context_type;
use log::trace;

/// BD16 limits the bracket stack to this many entries
const MAX_PAIRING_DEPTH: usize = 63;

struct Pair {
    open: RunId,
    close: RunId,
}

impl std::fmt::Debug for Pair {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "Pair{{{:?},{:?}}}", self.open, self.close)
    }
}

/// The next run in the isolating run sequence of `id`
fn next_in_sequence(arena: &RunArena, id: RunId) -> Option<RunId> {
    let level = arena[id].level;
    arena[id]
        .next_isolate
        .filter(|&next| arena[next].level == level)
}

fn prev_in_sequence(arena: &RunArena, id: RunId) -> Option<RunId> {
    let level = arena[id].level;
    arena[id]
        .prev_isolate
        .filter(|&prev| arena[prev].level == level)
}

/// BD13: a run starts an isolating run sequence unless it continues the
/// chain of an earlier run at the same level.
fn starts_sequence(arena: &RunArena, id: RunId) -> bool {
    prev_in_sequence(arena, id).is_none()
}

/// BD16 over every isolating run sequence of the paragraph
fn identify_bracket_pairs(arena: &RunArena, list: RunId) -> Result<Vec<Pair>, BidiError> {
    let mut pairs = vec![];
    let mut stack: Vec<(char, RunId)> = vec![];
    stack.try_reserve_exact(MAX_PAIRING_DEPTH)?;

    let mut start = arena.next(list);
    while start != list {
        if !starts_sequence(arena, start) {
            start = arena.next(start);
            continue;
        }

        stack.clear();
        let mut cur = Some(start);
        while let Some(id) = cur {
            let run = &arena[id];
            if run.bidi_class == BidiClass::OtherNeutral {
                match run.bracket {
                    BracketType::Open(pair_id) => {
                        if stack.len() == MAX_PAIRING_DEPTH {
                            trace!("bracket stack overflow at {}", run.pos);
                            break;
                        }
                        stack.push((pair_id, id));
                    }
                    BracketType::Close(pair_id) => {
                        if let Some(idx) = stack.iter().rposition(|&(open_id, _)| open_id == pair_id)
                        {
                            pairs.try_reserve(1)?;
                            pairs.push(Pair {
                                open: stack[idx].1,
                                close: id,
                            });
                            stack.truncate(idx);
                        }
                    }
                    BracketType::None => {}
                }
            }
            cur = next_in_sequence(arena, id);
        }

        start = arena.next(start);
    }

    pairs.sort_unstable_by_key(|pair| arena[pair.open].pos);
    Ok(pairs)
}

/// The strong direction of a run for N0, treating numbers as R
fn strong_direction(bc: BidiClass) -> Option<BidiClass> {
    match bc.numbers_as_rtl() {
        BidiClass::LeftToRight => Some(BidiClass::LeftToRight),
        BidiClass::RightToLeft | BidiClass::ArabicLetter => Some(BidiClass::RightToLeft),
        _ => None,
    }
}

/// N0c: the first strong direction before `open` in its sequence, or sos
fn preceding_strong(arena: &RunArena, open: RunId) -> BidiClass {
    let mut cur = open;
    loop {
        let prev = arena[cur].prev_isolate;
        match prev {
            Some(p) if arena[p].level == arena[open].level => {
                if let Some(dir) = strong_direction(arena[p].bidi_class) {
                    return dir;
                }
                cur = p;
            }
            _ => return context_type(arena, cur, prev),
        }
    }
}

fn resolve_pair(arena: &mut RunArena, pair: &Pair) {
    let embedding_direction = arena[pair.open].level.as_bidi_class();

    // N0b/N0c: look for strong types enclosed by the pair
    let mut found_opposite = false;
    let mut found_embedding = false;
    let mut cur = next_in_sequence(arena, pair.open);
    while let Some(id) = cur {
        if id == pair.close {
            break;
        }
        match strong_direction(arena[id].bidi_class) {
            Some(dir) if dir == embedding_direction => {
                found_embedding = true;
                break;
            }
            Some(_) => found_opposite = true,
            None => {}
        }
        cur = next_in_sequence(arena, id);
    }

    let resolved = if found_embedding {
        embedding_direction
    } else if found_opposite {
        // N0c1 when the context is opposite, otherwise N0c2
        preceding_strong(arena, pair.open)
    } else {
        // N0d
        return;
    };

    trace!("{:?} -> {}", pair, resolved);
    arena[pair.open].bidi_class = resolved;
    arena[pair.close].bidi_class = resolved;
}

/// N0
pub(crate) fn resolve_paired_brackets(arena: &mut RunArena, list: RunId) -> Result<(), BidiError> {
    let pairs = identify_bracket_pairs(arena, list)?;
    trace!("bracket pairs: {:?}", pairs);

    for pair in &pairs {
        resolve_pair(arena, pair);
    }

    let mut cur = arena.next(list);
    while cur != list {
        arena[cur].bracket = BracketType::None;
        cur = arena.next(cur);
    }
    arena.compact(list, Compaction::Neutrals);
    Ok(())
}

/// N1 and N2
pub(crate) fn resolve_neutral_types(arena: &mut RunArena, list: RunId) {
    let mut cur = arena.next(list);
    while cur != list {
        if arena[cur].bidi_class.is_neutral() {
            let prev = arena.adjacent(cur, false, false);
            let next = arena.adjacent(cur, true, false);
            let prev_type = context_type(arena, cur, prev).numbers_as_rtl();
            let next_type = context_type(arena, cur, next).numbers_as_rtl();

            arena[cur].bidi_class = if prev_type == next_type {
                // N1
                prev_type
            } else {
                // N2
                arena[cur].level.as_bidi_class()
            };
        }
        cur = arena.next(cur);
    }
    arena.compact(list, Compaction::Strict);
}
