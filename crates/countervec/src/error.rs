use std::{fmt, result};

use crate::Position;

pub type Result<T, E = Error> = result::Result<T, E>;

#[derive(Debug)]
pub enum Error {
    NegativePosition(Position),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NegativePosition(pos) => {
                write!(f, "Position {pos} is negative and has no index")
            }
        }
    }
}

impl std::error::Error for Error {}
