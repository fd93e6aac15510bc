use crate::{Counter, CounterVec, Position, VecCursor};

/// Forward mutable cursor. Reads reborrow, so a yielded counter cannot
/// outlive the next repositioning.
pub struct CounterVecIterMut<'a> {
    vec: &'a mut CounterVec,
    pos: Position,
}

impl<'a> CounterVecIterMut<'a> {
    pub fn new(vec: &'a mut CounterVec) -> Self {
        Self {
            vec,
            pos: Position::FIRST,
        }
    }

    /// Steps forward and returns the already advanced cursor.
    #[inline]
    pub fn advance(&mut self) -> &mut Self {
        self.step();
        self
    }

    /// Same contract as [`advance`](Self::advance): the cursor steps first
    /// and the advanced cursor is what comes back.
    #[inline]
    pub fn advance_post(&mut self) -> &mut Self {
        self.advance()
    }

    /// Counter under the cursor, `None` on a sentinel position. Replacing
    /// the pointee is the only mutation a counter allows.
    #[inline]
    pub fn current(&mut self) -> Option<&mut Counter> {
        let i = self.pos.to_usize().ok()?;
        self.vec.get_mut(i)
    }

    /// # Safety
    ///
    /// The position must be within `0..len`. Sentinel positions wrap the
    /// index conversion and read out of bounds.
    #[inline]
    pub unsafe fn current_unchecked(&mut self) -> &mut Counter {
        unsafe { self.vec.get_unchecked_mut(self.pos.inner() as usize) }
    }

    /// Counter `k` slots ahead, read-only, without moving the cursor.
    #[inline]
    pub fn peek(&self, k: usize) -> Option<&Counter> {
        (self.pos + k).to_usize().ok().and_then(|i| self.vec.get(i))
    }

    /// Unchecked [`peek`](Self::peek).
    ///
    /// # Safety
    ///
    /// `position + k` must be within `0..len`.
    #[inline]
    pub unsafe fn add(&self, k: usize) -> &Counter {
        unsafe { self.vec.get_unchecked((self.pos + k).inner() as usize) }
    }
}

impl VecCursor for CounterVecIterMut<'_> {
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

impl PartialEq for CounterVecIterMut<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for CounterVecIterMut<'_> {}

impl PartialEq<Position> for CounterVecIterMut<'_> {
    #[inline]
    fn eq(&self, other: &Position) -> bool {
        self.pos == *other
    }
}
