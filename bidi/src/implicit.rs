use crate::bidi_class::BidiClass;
use crate::level::Level;
use crate::run_list::{Compaction, RunArena, RunId};

/// I1, I2.  Returns the highest level in the paragraph.
pub(crate) fn resolve_implicit_levels(arena: &mut RunArena, list: RunId, base_level: Level) -> Level {
    let mut max_level = base_level;
    let mut cur = arena.next(list);
    while cur != list {
        let run = &mut arena[cur];
        let level = run.level.0;
        run.level = if run.bidi_class.is_number() {
            Level((level + 2) & !1)
        } else if run.level.is_rtl() != (run.bidi_class == BidiClass::RightToLeft) {
            Level(level + 1)
        } else {
            run.level
        };
        max_level = max_level.max(run.level);
        cur = arena.next(cur);
    }
    arena.compact(list, Compaction::Strict);
    max_level
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal as assert_eq;
    use BidiClass::*;

    fn implicit(runs: &[(BidiClass, i8)]) -> (Vec<i8>, Level) {
        let types: Vec<BidiClass> = runs.iter().map(|&(bc, _)| bc).collect();
        let mut arena = RunArena::new();
        let list = arena.encode(&types, None).unwrap();
        for (id, &(_, level)) in arena.ids(list).into_iter().zip(runs) {
            arena[id].level = Level(level);
        }
        let max = resolve_implicit_levels(&mut arena, list, Level(0));
        let mut levels = vec![];
        arena.levels(list, &mut levels).unwrap();
        (levels.into_iter().map(|l| l.0).collect(), max)
    }

    #[test]
    fn i1_even_levels() {
        assert_eq!(
            implicit(&[
                (LeftToRight, 0),
                (RightToLeft, 0),
                (ArabicNumber, 0),
                (EuropeanNumber, 2)
            ]),
            (vec![0, 1, 2, 4], Level(4))
        );
    }

    #[test]
    fn i2_odd_levels() {
        assert_eq!(
            implicit(&[(RightToLeft, 1), (LeftToRight, 1), (EuropeanNumber, 1)]),
            (vec![1, 2, 2], Level(2))
        );
    }
}
