use std::iter::FusedIterator;

use crate::{Counter, CounterVec, Position, VecCursor, likely, unlikely};

/// Forward read-only cursor. `Copy`, so loop limits are cheap snapshots.
#[derive(Clone, Copy)]
pub struct CounterVecIter<'a> {
    vec: &'a CounterVec,
    pos: Position,
}

impl<'a> CounterVecIter<'a> {
    pub fn new(vec: &'a CounterVec) -> Self {
        Self {
            vec,
            pos: Position::FIRST,
        }
    }

    /// Cursor parked one past the last counter.
    #[inline]
    pub fn end(&self) -> Self {
        Self {
            vec: self.vec,
            pos: self.vec.end_position(),
        }
    }

    /// Steps forward and returns the already advanced cursor.
    #[inline]
    pub fn advance(&mut self) -> Self {
        self.step();
        *self
    }

    /// Same contract as [`advance`](Self::advance): the cursor steps first
    /// and the advanced cursor is what comes back, not a snapshot of where
    /// it was.
    #[inline]
    pub fn advance_post(&mut self) -> Self {
        self.advance()
    }

    /// Counter under the cursor, `None` on a sentinel position.
    #[inline]
    pub fn current(&self) -> Option<&'a Counter> {
        if self.can_read() {
            Some(unsafe { self.current_unchecked() })
        } else {
            None
        }
    }

    /// # Safety
    ///
    /// The position must be within `0..len`. Sentinel positions wrap the
    /// index conversion and read out of bounds.
    #[inline]
    pub unsafe fn current_unchecked(&self) -> &'a Counter {
        unsafe { self.vec.get_unchecked(self.pos.inner() as usize) }
    }

    /// Counter `k` slots ahead, without moving the cursor.
    #[inline]
    pub fn peek(&self, k: usize) -> Option<&'a Counter> {
        (self.pos + k).to_usize().ok().and_then(|i| self.vec.get(i))
    }

    /// Unchecked [`peek`](Self::peek).
    ///
    /// # Safety
    ///
    /// `position + k` must be within `0..len`.
    #[inline]
    pub unsafe fn add(&self, k: usize) -> &'a Counter {
        unsafe { self.vec.get_unchecked((self.pos + k).inner() as usize) }
    }

    /// Repositions to `pos`, then reads like [`Iterator::next`].
    #[inline]
    pub fn get(&mut self, pos: Position) -> Option<&'a Counter> {
        self.set_position(pos);
        self.next()
    }

    #[inline]
    pub fn get_(&mut self, i: usize) -> Option<&'a Counter> {
        self.get(Position::from(i))
    }

    #[inline]
    fn remaining(&self) -> usize {
        let pos = self.pos.inner();
        if pos < 0 {
            0
        } else {
            self.vec.len().saturating_sub(pos as usize)
        }
    }
}

impl VecCursor for CounterVecIter<'_> {
    #[inline]
    fn position(&self) -> Position {
        self.pos
    }

    #[inline]
    fn mut_position(&mut self) -> &mut Position {
        &mut self.pos
    }

    #[inline]
    fn len(&self) -> usize {
        self.vec.len()
    }

    #[inline]
    fn step(&mut self) {
        self.pos = self.pos.incremented();
    }
}

impl<'a> Iterator for CounterVecIter<'a> {
    type Item = &'a Counter;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if likely(self.can_read()) {
            let counter = unsafe { self.current_unchecked() };
            self.pos = self.pos.incremented();
            Some(counter)
        } else {
            None
        }
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n > 0 {
            self.pos = self.pos + n;
        }
        self.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }

    #[inline]
    fn count(self) -> usize {
        self.remaining()
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        let len = self.vec.len();
        if unlikely(len == 0) {
            return None;
        }
        self.set_position_(len - 1);
        self.next()
    }
}

impl ExactSizeIterator for CounterVecIter<'_> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.remaining()
    }
}

impl FusedIterator for CounterVecIter<'_> {}

impl PartialEq for CounterVecIter<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for CounterVecIter<'_> {}

impl PartialEq<Position> for CounterVecIter<'_> {
    #[inline]
    fn eq(&self, other: &Position) -> bool {
        self.pos == *other
    }
}

impl<'a> IntoIterator for &'a CounterVec {
    type Item = &'a Counter;
    type IntoIter = CounterVecIter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        CounterVecIter::new(self)
    }
}
