use crate::{Counter, CounterVec, Position, VecCursor};

/// Reverse mutable cursor. Starts on the last counter and finishes on the
/// `-1` sentinel. There is no read-only reverse variant.
pub struct CounterVecRevIter<'a> {
    vec: &'a mut CounterVec,
    pos: Position,
}

impl<'a> CounterVecRevIter<'a> {
    pub fn new(vec: &'a mut CounterVec) -> Self {
        let pos = vec.back_position();
        Self { vec, pos }
    }

    /// Steps toward the front and returns the already advanced cursor.
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

    /// Counter under the cursor, `None` once on the sentinel.
    #[inline]
    pub fn current(&mut self) -> Option<&mut Counter> {
        let i = self.pos.to_usize().ok()?;
        self.vec.get_mut(i)
    }

    /// # Safety
    ///
    /// The position must be within `0..len`. The sentinel wraps the index
    /// conversion and reads out of bounds.
    #[inline]
    pub unsafe fn current_unchecked(&mut self) -> &mut Counter {
        unsafe { self.vec.get_unchecked_mut(self.pos.inner() as usize) }
    }

    /// Counter `k` slots further into the traversal, which is `k` slots
    /// closer to the front. Read-only, does not move the cursor.
    #[inline]
    pub fn peek(&self, k: usize) -> Option<&Counter> {
        (self.pos - k).to_usize().ok().and_then(|i| self.vec.get(i))
    }

    /// Unchecked [`peek`](Self::peek). The offset runs toward the front,
    /// matching the traversal direction.
    ///
    /// # Safety
    ///
    /// `position - k` must be within `0..len`.
    #[inline]
    pub unsafe fn add(&self, k: usize) -> &Counter {
        unsafe { self.vec.get_unchecked((self.pos - k).inner() as usize) }
    }
}

impl VecCursor for CounterVecRevIter<'_> {
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
        self.pos = self.pos.decremented();
    }
}

impl PartialEq for CounterVecRevIter<'_> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for CounterVecRevIter<'_> {}

impl PartialEq<Position> for CounterVecRevIter<'_> {
    #[inline]
    fn eq(&self, other: &Position) -> bool {
        self.pos == *other
    }
}
