#![doc = include_str!("../README.md")]
#![doc = "\n## Example\n"]
#![doc = "\n```rust"]
#![doc = include_str!("../examples/iterators.rs")]
#![doc = "```\n"]

mod counter;
mod error;
mod iterators;
mod position;
mod vec;

pub use counter::*;
pub use error::*;
pub use iterators::*;
pub use position::*;
pub use vec::*;

// Branch prediction hints
#[inline(always)]
#[cold]
pub fn cold() {}

#[inline(always)]
pub fn likely(b: bool) -> bool {
    if !b {
        cold();
    }
    b
}

#[inline(always)]
pub fn unlikely(b: bool) -> bool {
    if b {
        cold();
    }
    b
}
