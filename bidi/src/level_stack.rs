use crate::bidi_class::BidiClass;
use crate::level::{Level, MAX_DEPTH};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Override {
    Neutral,
    LTR,
    RTL,
}

impl Override {
    pub fn apply(self, bc: BidiClass) -> BidiClass {
        match self {
            Override::LTR => BidiClass::LeftToRight,
            Override::RTL => BidiClass::RightToLeft,
            Override::Neutral => bc,
        }
    }
}

#[derive(Debug, Copy, Clone)]
struct Frame {
    level: Level,
    override_status: Override,
    isolate: bool,
}

/// The directional status stack of rules X1-X8, together with the
/// counters that track pushes which did not fit.
#[derive(Debug)]
pub(crate) struct StatusStack {
    frames: [Frame; MAX_DEPTH + 2],
    /// Current index into `frames`
    depth: usize,
    base_level: Level,
    /// Embedding initiators that overflowed outside of any overflowed isolate
    pub over_pushed: usize,
    /// Isolate initiators that overflowed
    pub isolate_overflow: usize,
    /// Isolate initiators that pushed a frame
    pub valid_isolate_count: usize,
}

impl StatusStack {
    pub fn new(base_level: Level) -> Self {
        let base = Frame {
            level: base_level,
            override_status: Override::Neutral,
            isolate: false,
        };
        Self {
            frames: [base; MAX_DEPTH + 2],
            depth: 1,
            base_level,
            over_pushed: 0,
            isolate_overflow: 0,
            valid_isolate_count: 0,
        }
    }

    /// Returns to the state at the start of the paragraph
    pub fn reset(&mut self) {
        *self = Self::new(self.base_level);
    }

    fn top(&self) -> &Frame {
        &self.frames[self.depth - 1]
    }

    pub fn embedding_level(&self) -> Level {
        self.top().level
    }

    pub fn override_status(&self) -> Override {
        self.top().override_status
    }

    pub fn isolate_status(&self) -> bool {
        self.top().isolate
    }

    /// The isolate nesting depth to record on runs
    pub fn isolate_level(&self) -> usize {
        self.valid_isolate_count.min(MAX_DEPTH - 1)
    }

    /// True when no earlier push has overflowed (X2-X5c)
    pub fn can_push(&self) -> bool {
        self.over_pushed == 0 && self.isolate_overflow == 0
    }

    pub fn push(&mut self, level: Level, override_status: Override, isolate: bool) {
        if self.depth >= self.frames.len() {
            return;
        }
        log::trace!(
            "pushing level={:?} override={:?} isolate={} at depth={}",
            level,
            override_status,
            isolate,
            self.depth
        );
        self.frames[self.depth] = Frame {
            level,
            override_status,
            isolate,
        };
        self.depth += 1;
    }

    pub fn pop(&mut self) {
        if self.depth > 1 {
            self.depth -= 1;
        }
    }

    /// X2-X5 overflow handling: an embedding that cannot be pushed is
    /// only counted when it is not inside an overflowed isolate.
    pub fn note_embedding_overflow(&mut self) {
        if self.isolate_overflow == 0 {
            self.over_pushed += 1;
        }
    }

    /// X7
    pub fn pop_embedding(&mut self) {
        if self.isolate_overflow > 0 {
            return;
        }
        if self.over_pushed > 0 {
            self.over_pushed -= 1;
        } else if !self.isolate_status() && self.depth >= 2 {
            self.pop();
        }
    }

    /// X6a.  Returns false if there is no isolate to terminate, in which
    /// case the PDI is unmatched.
    pub fn pop_isolate(&mut self) -> bool {
        if self.isolate_overflow > 0 {
            self.isolate_overflow -= 1;
            true
        } else if self.valid_isolate_count > 0 {
            self.over_pushed = 0;
            while !self.isolate_status() && self.depth > 1 {
                self.pop();
            }
            self.pop();
            self.valid_isolate_count -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k9::assert_equal as assert_eq;

    #[test]
    fn pdf_does_not_cross_isolates() {
        let mut stack = StatusStack::new(Level(0));
        stack.valid_isolate_count += 1;
        stack.push(Level(1), Override::Neutral, true);
        stack.pop_embedding();
        assert_eq!(stack.embedding_level(), Level(1));
        assert!(stack.pop_isolate());
        assert_eq!(stack.embedding_level(), Level(0));
        assert!(!stack.pop_isolate());
    }

    #[test]
    fn pdi_discards_embeddings_inside_the_isolate() {
        let mut stack = StatusStack::new(Level(0));
        stack.valid_isolate_count += 1;
        stack.push(Level(1), Override::Neutral, true);
        stack.push(Level(2), Override::LTR, false);
        stack.note_embedding_overflow();
        assert!(stack.pop_isolate());
        assert_eq!(stack.depth, 1);
        assert_eq!(stack.over_pushed, 0);
    }

    #[test]
    fn overflowed_isolate_absorbs_embeddings() {
        let mut stack = StatusStack::new(Level(0));
        stack.isolate_overflow = 1;
        stack.note_embedding_overflow();
        assert_eq!(stack.over_pushed, 0);
        assert!(!stack.can_push());
        assert!(stack.pop_isolate());
        assert!(stack.can_push());
    }

    #[test]
    fn override_applies() {
        assert_eq!(
            Override::RTL.apply(BidiClass::LeftToRight),
            BidiClass::RightToLeft
        );
        assert_eq!(
            Override::Neutral.apply(BidiClass::WhiteSpace),
            BidiClass::WhiteSpace
        );
    }
}
