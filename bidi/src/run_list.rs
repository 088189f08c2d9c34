//! The run list: a circular, doubly linked list of runs with a sentinel.
//!
//! Nodes for every list used while resolving a paragraph live in a
//! single arena and refer to each other by index.  Each list is
//! identified by the index of its sentinel node; a walk over a list
//! starts at `next(list)` and stops when it arrives back at `list`.
//!
//! In addition to the `prev`/`next` links, runs carry `prev_isolate`
//! and `next_isolate` links that connect each run to the closest run
//! at the same isolate level, hopping over the content of nested
//! isolates.  Those links are built by `link_isolates` once the
//! explicit pass has assigned isolate levels.
use crate::bidi_class::BidiClass;
use crate::bracket::BracketType;
use crate::error::BidiError;
use crate::level::Level;
use log::trace;
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct RunId(usize);

#[derive(Debug, Clone)]
pub(crate) struct Run {
    pub pos: usize,
    pub len: usize,
    pub bidi_class: BidiClass,
    pub level: Level,
    pub isolate_level: usize,
    pub bracket: BracketType,
    pub prev_isolate: Option<RunId>,
    pub next_isolate: Option<RunId>,
    prev: RunId,
    next: RunId,
    sentinel: bool,
}

impl Run {
    pub fn end(&self) -> usize {
        self.pos + self.len
    }
}

/// How aggressively `compact` merges neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Compaction {
    /// Merge neighbors with equal class and level
    Strict,
    /// Additionally merge neighbors of equal level that are both neutral
    Neutrals,
}

#[derive(Debug, Default)]
pub(crate) struct RunArena {
    nodes: Vec<Run>,
}

impl Index<RunId> for RunArena {
    type Output = Run;
    fn index(&self, id: RunId) -> &Run {
        &self.nodes[id.0]
    }
}

impl IndexMut<RunId> for RunArena {
    fn index_mut(&mut self, id: RunId) -> &mut Run {
        &mut self.nodes[id.0]
    }
}

impl RunArena {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(
        &mut self,
        pos: usize,
        len: usize,
        bidi_class: BidiClass,
        level: Level,
        bracket: BracketType,
        sentinel: bool,
    ) -> Result<RunId, BidiError> {
        self.nodes.try_reserve(1)?;
        let id = RunId(self.nodes.len());
        self.nodes.push(Run {
            pos,
            len,
            bidi_class,
            level,
            isolate_level: 0,
            bracket,
            prev_isolate: None,
            next_isolate: None,
            prev: id,
            next: id,
            sentinel,
        });
        Ok(id)
    }

    /// Creates an empty list, returning its sentinel
    pub fn new_list(&mut self) -> Result<RunId, BidiError> {
        self.alloc(
            0,
            0,
            BidiClass::OtherNeutral,
            Level::REMOVED,
            BracketType::None,
            true,
        )
    }

    /// Appends a fresh run to the end of `list`
    pub fn push_run(
        &mut self,
        list: RunId,
        pos: usize,
        len: usize,
        bidi_class: BidiClass,
        level: Level,
    ) -> Result<RunId, BidiError> {
        let id = self.alloc(pos, len, bidi_class, level, BracketType::None, false)?;
        self.insert_before(id, list);
        Ok(id)
    }

    pub fn next(&self, id: RunId) -> RunId {
        self[id].next
    }

    pub fn prev(&self, id: RunId) -> RunId {
        self[id].prev
    }

    pub fn is_sentinel(&self, id: RunId) -> bool {
        self[id].sentinel
    }

    fn unlink(&mut self, id: RunId) {
        let prev = self[id].prev;
        let next = self[id].next;
        self[prev].next = next;
        self[next].prev = prev;
        self[id].prev = id;
        self[id].next = id;
    }

    /// Links a detached node in front of `before`
    fn insert_before(&mut self, id: RunId, before: RunId) {
        let prev = self[before].prev;
        self[id].prev = prev;
        self[id].next = before;
        self[prev].next = id;
        self[before].prev = id;
    }

    /// Retires a node.  Its arena slot is reclaimed with the arena.
    fn retire(&mut self, id: RunId) {
        self.unlink(id);
        self[id].len = 0;
        self[id].prev_isolate = None;
        self[id].next_isolate = None;
    }

    #[cfg(test)]
    pub fn ids(&self, list: RunId) -> Vec<RunId> {
        let mut ids = vec![];
        let mut cur = self.next(list);
        while cur != list {
            ids.push(cur);
            cur = self.next(cur);
        }
        ids
    }

    /// Run-length encodes a paragraph into a new list.
    /// Spans of identical class become one run, except that brackets and
    /// isolate controls are always given a run of their own.
    pub fn encode(
        &mut self,
        types: &[BidiClass],
        brackets: Option<&[BracketType]>,
    ) -> Result<RunId, BidiError> {
        self.nodes.try_reserve(types.len() + 1)?;
        let list = self.new_list()?;
        let mut last: Option<RunId> = None;

        for (idx, &bc) in types.iter().enumerate() {
            let bracket = brackets.map(|b| b[idx]).unwrap_or_default();
            let single = bracket.is_bracket() || bc.is_iso_control();

            match last {
                Some(id)
                    if !single
                        && self[id].bidi_class == bc
                        && !self[id].bracket.is_bracket()
                        && !self[id].bidi_class.is_iso_control() =>
                {
                    self[id].len += 1;
                }
                _ => {
                    let id = self.alloc(idx, 1, bc, Level::REMOVED, bracket, false)?;
                    self.insert_before(id, list);
                    last = Some(id);
                }
            }
        }

        Ok(list)
    }

    /// Absorbs `second` into the run before it, returning the survivor.
    pub fn merge_with_prev(&mut self, second: RunId) -> RunId {
        let first = self.prev(second);
        debug_assert!(!self.is_sentinel(first) && !self.is_sentinel(second));

        let next_isolate = self[second].next_isolate;
        if let Some(n) = next_isolate {
            self[n].prev_isolate = Some(first);
        }
        self[first].next_isolate = next_isolate;
        self[first].len += self[second].len;
        self.retire(second);
        first
    }

    fn mergeable(&self, a: RunId, b: RunId, policy: Compaction) -> bool {
        let (a, b) = (&self[a], &self[b]);
        if a.sentinel || b.sentinel {
            return false;
        }
        if a.bracket.is_bracket() || b.bracket.is_bracket() {
            // Brackets keep their identity until N0 has run
            return false;
        }
        if a.level != b.level || a.isolate_level != b.isolate_level {
            return false;
        }
        a.bidi_class == b.bidi_class
            || (policy == Compaction::Neutrals
                && a.bidi_class.is_neutral()
                && b.bidi_class.is_neutral())
    }

    pub fn compact(&mut self, list: RunId, policy: Compaction) {
        let mut cur = self.next(list);
        while cur != list {
            if self.mergeable(self.prev(cur), cur, policy) {
                cur = self.merge_with_prev(cur);
            }
            cur = self.next(cur);
        }
    }

    /// Returns the nearest run at the same or a lower isolate level in
    /// the requested direction.  Moving forward skips over PDI so that
    /// callers can see what follows a terminated isolate.  When
    /// `skip_neutral` is set, only strong runs are returned.
    /// `None` stands for the start or end of the paragraph.
    pub fn adjacent(&self, id: RunId, forward: bool, skip_neutral: bool) -> Option<RunId> {
        let isolate_level = self[id].isolate_level;
        let step = |run: &Run| {
            if forward {
                run.next_isolate
            } else {
                run.prev_isolate
            }
        };

        let mut cur = step(&self[id]);
        while let Some(candidate) = cur {
            let run = &self[candidate];
            if run.isolate_level > isolate_level
                || (forward && run.bidi_class == BidiClass::PopDirectionalIsolate)
                || (skip_neutral && !run.bidi_class.is_strong())
            {
                cur = step(run);
                continue;
            }
            return Some(candidate);
        }
        None
    }

    /// Splices `id` out of whatever list it is in and appends it to `shadow`
    pub fn move_to_shadow(&mut self, id: RunId, shadow: RunId) {
        self.unlink(id);
        self.insert_before(id, shadow);
    }

    /// Rebuilds the `prev_isolate`/`next_isolate` links of `list`
    pub fn link_isolates(&mut self, list: RunId) -> Result<(), BidiError> {
        let mut max_isolate_level = 0;
        let mut cur = self.next(list);
        while cur != list {
            max_isolate_level = max_isolate_level.max(self[cur].isolate_level);
            self[cur].prev_isolate = None;
            self[cur].next_isolate = None;
            cur = self.next(cur);
        }

        let mut run_per_isolate_level: Vec<Option<RunId>> = vec![];
        run_per_isolate_level.try_reserve_exact(max_isolate_level + 1)?;
        run_per_isolate_level.resize(max_isolate_level + 1, None);

        let mut prev_isolate_level = 0;
        let mut cur = self.next(list);
        while cur != list {
            let isolate_level = self[cur].isolate_level;

            // Leaving an isolate: forget the runs of the levels above so
            // that a later isolate at the same depth doesn't link to them.
            if isolate_level < prev_isolate_level {
                for slot in &mut run_per_isolate_level[isolate_level + 1..=prev_isolate_level] {
                    *slot = None;
                }
            }
            prev_isolate_level = isolate_level;

            if let Some(prev) = run_per_isolate_level[isolate_level] {
                self[prev].next_isolate = Some(cur);
                self[cur].prev_isolate = Some(prev);
            }
            run_per_isolate_level[isolate_level] = Some(cur);
            cur = self.next(cur);
        }
        Ok(())
    }

    /// Re-inserts every run of `over` into `base` at its `pos`/`len`.
    ///
    /// With `preserve_length` the over runs are taken to be missing from
    /// `base` (the X9 shadow list): the run they land in grows by their
    /// length before being split around them.  Otherwise the over runs
    /// replace the base positions they cover (the L1 overlay).
    ///
    /// Over runs must be in ascending position order; a run overlapping
    /// one that was already grafted is dropped.
    pub fn graft(
        &mut self,
        base: RunId,
        over: RunId,
        preserve_length: bool,
    ) -> Result<(), BidiError> {
        let mut p = base;
        let mut pos = 0;
        let mut q = self.next(over);

        while q != over {
            let q_next = self.next(q);
            let q_len = self[q].len;
            if q_len == 0 || self[q].pos < pos {
                q = q_next;
                continue;
            }
            pos = self[q].pos;
            let end = pos + q_len;

            // p: the last base run starting at or before pos
            while self.next(p) != base && self[self.next(p)].pos <= pos {
                p = self.next(p);
            }
            // r: the last base run starting before end
            let mut r = p;
            while self.next(r) != base && self[self.next(r)].pos < end {
                r = self.next(r);
            }
            if preserve_length && r != base {
                self[r].len += q_len;
            }

            let after = if p == r {
                // q lands inside a single run: split it into at most
                // three parts, q taking the place of the middle one.
                let after = if p != base && self[p].end() > end {
                    let tail_len = self[p].end() - end;
                    let (bc, level, isolate_level) =
                        (self[p].bidi_class, self[p].level, self[p].isolate_level);
                    let tail = self.alloc(end, tail_len, bc, level, BracketType::None, false)?;
                    self[tail].isolate_level = isolate_level;
                    let p_next = self.next(p);
                    self.insert_before(tail, p_next);
                    tail
                } else {
                    self.next(r)
                };

                if p != base && self[p].end() >= pos {
                    if self[p].pos < pos {
                        self[p].len = pos - self[p].pos;
                    } else {
                        let covered = p;
                        p = self.prev(p);
                        self.retire(covered);
                    }
                }
                after
            } else {
                if p != base && self[p].end() >= pos {
                    if self[p].pos < pos {
                        self[p].len = pos - self[p].pos;
                    } else {
                        p = self.prev(p);
                    }
                }

                let after = if self[r].end() > end {
                    let r_end = self[r].end();
                    self[r].pos = end;
                    self[r].len = r_end - end;
                    r
                } else {
                    self.next(r)
                };

                // Everything strictly between p and after is covered by q
                let mut s = self.next(p);
                while s != after {
                    let covered = s;
                    s = self.next(s);
                    self.retire(covered);
                }
                after
            };

            self.unlink(q);
            self.insert_before(q, after);
            debug_assert_eq!(self.prev(q), p);
            q = q_next;
        }

        // Whatever is left in over was dropped
        let mut leftover = self.next(over);
        while leftover != over {
            let next = self.next(leftover);
            self.retire(leftover);
            leftover = next;
        }

        trace!("graft preserve_length={} -> {:?}", preserve_length, self.dump(base));
        Ok(())
    }

    /// True when the runs of `list` tile `0..len` without gaps
    pub fn is_contiguous(&self, list: RunId, len: usize) -> bool {
        let mut expected = 0;
        let mut cur = self.next(list);
        while cur != list {
            let run = &self[cur];
            if run.len == 0 || run.pos != expected {
                return false;
            }
            expected = run.end();
            cur = self.next(cur);
        }
        expected == len
    }

    /// Expands the run levels into one level per position
    pub fn levels(&self, list: RunId, out: &mut Vec<Level>) -> Result<(), BidiError> {
        let mut cur = self.next(list);
        while cur != list {
            let run = &self[cur];
            out.try_reserve(run.len)?;
            out.extend(std::iter::repeat(run.level).take(run.len));
            cur = self.next(cur);
        }
        Ok(())
    }

    pub fn dump(&self, list: RunId) -> Vec<String> {
        let mut result = vec![];
        let mut cur = self.next(list);
        while cur != list {
            let run = &self[cur];
            result.push(format!(
                "{}+{} {} lvl={} iso={}{}",
                run.pos,
                run.len,
                run.bidi_class,
                run.level.0,
                run.isolate_level,
                match run.bracket {
                    BracketType::None => String::new(),
                    b => format!(" {b:?}"),
                }
            ));
            cur = self.next(cur);
        }
        result
    }
}
