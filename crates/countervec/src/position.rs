use std::{
    fmt,
    ops::{Add, Sub},
};

use crate::{Error, Result};

/// Signed cursor position. `-1` is the reverse-end sentinel, one below the
/// first valid index.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position(isize);

impl Position {
    pub const FIRST: Self = Self(0);
    pub const REVERSE_END: Self = Self(-1);

    pub const fn new(p: isize) -> Self {
        Self(p)
    }

    pub const fn inner(self) -> isize {
        self.0
    }

    #[inline]
    pub fn to_usize(self) -> Result<usize> {
        usize::try_from(self.0).map_err(|_| Error::NegativePosition(self))
    }

    #[inline]
    pub fn unwrap_to_usize(self) -> usize {
        self.to_usize().unwrap()
    }

    #[inline]
    pub fn incremented(self) -> Self {
        Self(self.0 + 1)
    }

    /// May land on the reverse-end sentinel.
    #[inline]
    pub fn decremented(self) -> Self {
        Self(self.0 - 1)
    }
}

impl From<usize> for Position {
    fn from(value: usize) -> Self {
        Self(value as isize)
    }
}

impl From<isize> for Position {
    fn from(value: isize) -> Self {
        Self(value)
    }
}

impl From<Position> for isize {
    fn from(value: Position) -> Self {
        value.0
    }
}

impl Add<usize> for Position {
    type Output = Self;
    fn add(self, rhs: usize) -> Self::Output {
        Self(self.0 + rhs as isize)
    }
}

impl Sub<usize> for Position {
    type Output = Self;
    fn sub(self, rhs: usize) -> Self::Output {
        Self(self.0 - rhs as isize)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
