use crate::Position;

mod forward;
mod forward_mut;
mod reverse;

pub use forward::*;
pub use forward_mut::*;
pub use reverse::*;

/// Protocol shared by the three cursor variants.
pub trait VecCursor {
    fn position(&self) -> Position;

    fn mut_position(&mut self) -> &mut Position;

    /// Length of the underlying vec.
    fn len(&self) -> usize;

    /// One traversal step. Forward cursors increment, the reverse cursor
    /// decrements.
    fn step(&mut self);

    #[inline]
    fn set_position(&mut self, pos: Position) {
        *self.mut_position() = pos;
    }

    #[inline]
    fn set_position_(&mut self, i: usize) {
        self.set_position(Position::from(i));
    }

    /// Whether the current position holds a counter.
    #[inline]
    fn can_read(&self) -> bool {
        let pos = self.position().inner();
        pos >= 0 && (pos as usize) < self.len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
