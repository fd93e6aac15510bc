use serde_derive::{Deserialize, Serialize};

use crate::{Counter, CounterVecIter, CounterVecIterMut, CounterVecRevIter, Position, VecCursor};

/// Insertion-ordered arena of counters. Appends only, never removes; every
/// counter is owned by the vec and dropped with it.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterVec {
    counters: Vec<Counter>,
}

impl CounterVec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counters: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.counters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.counters.capacity()
    }

    #[inline]
    pub fn push(&mut self, counter: Counter) {
        self.counters.push(counter);
    }

    #[inline]
    pub fn push_new(&mut self, node: &str, count: u32) {
        self.push(Counter::new(node, count));
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&Counter> {
        self.counters.get(i)
    }

    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut Counter> {
        self.counters.get_mut(i)
    }

    /// # Safety
    ///
    /// `i` must be below `len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, i: usize) -> &Counter {
        unsafe { self.counters.get_unchecked(i) }
    }

    /// # Safety
    ///
    /// `i` must be below `len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, i: usize) -> &mut Counter {
        unsafe { self.counters.get_unchecked_mut(i) }
    }

    /// Stored counters, in insertion order.
    #[inline]
    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    /// Node labels, in insertion order.
    pub fn nodes(&self) -> Vec<String> {
        self.counters
            .iter()
            .map(|counter| counter.node().to_string())
            .collect()
    }

    #[inline]
    pub fn last(&self) -> Option<&Counter> {
        self.counters.last()
    }

    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut Counter> {
        self.counters.last_mut()
    }

    /// # Safety
    ///
    /// The vec must not be empty. On an empty vec the index wraps around.
    #[inline]
    pub unsafe fn back_unchecked(&self) -> &Counter {
        unsafe { self.get_unchecked(self.len().wrapping_sub(1)) }
    }

    /// # Safety
    ///
    /// The vec must not be empty. On an empty vec the index wraps around.
    #[inline]
    pub unsafe fn back_unchecked_mut(&mut self) -> &mut Counter {
        unsafe { self.get_unchecked_mut(self.len().wrapping_sub(1)) }
    }

    /// One past the last valid forward position.
    #[inline]
    pub fn end_position(&self) -> Position {
        Position::from(self.len())
    }

    /// Position of the last counter, the reverse-end sentinel when empty.
    #[inline]
    pub fn back_position(&self) -> Position {
        Position::new(self.len() as isize - 1)
    }

    #[inline]
    pub fn iter(&self) -> CounterVecIter<'_> {
        self.into_iter()
    }

    #[inline]
    pub fn iter_at(&self, pos: Position) -> CounterVecIter<'_> {
        let mut iter = self.into_iter();
        iter.set_position(pos);
        iter
    }

    #[inline]
    pub fn iter_at_(&self, i: usize) -> CounterVecIter<'_> {
        self.iter_at(Position::from(i))
    }

    #[inline]
    pub fn iter_mut(&mut self) -> CounterVecIterMut<'_> {
        CounterVecIterMut::new(self)
    }

    #[inline]
    pub fn rev_iter(&mut self) -> CounterVecRevIter<'_> {
        CounterVecRevIter::new(self)
    }
}

impl From<Vec<Counter>> for CounterVec {
    fn from(counters: Vec<Counter>) -> Self {
        Self { counters }
    }
}

impl FromIterator<Counter> for CounterVec {
    fn from_iter<T: IntoIterator<Item = Counter>>(iter: T) -> Self {
        Self {
            counters: Vec::from_iter(iter),
        }
    }
}

impl Extend<Counter> for CounterVec {
    fn extend<T: IntoIterator<Item = Counter>>(&mut self, iter: T) {
        self.counters.extend(iter);
    }
}

impl IntoIterator for CounterVec {
    type Item = Counter;
    type IntoIter = std::vec::IntoIter<Counter>;

    fn into_iter(self) -> Self::IntoIter {
        self.counters.into_iter()
    }
}
