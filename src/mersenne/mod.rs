use core::fmt;

pub mod mt19937;
pub mod recovery;
pub mod snapshot;

pub use mt19937::Mt19937;
pub use recovery::{clone, recover_seed, untemper};
pub use snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Index is past the end of the state, or not on a twist boundary
    InvalidIndex,
    /// State does not hold exactly N words
    InvalidStateLength(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidIndex => write!(f, "invalid state index"),
            Error::InvalidStateLength(len) => {
                write!(f, "invalid state length: {}, expected {}", len, mt19937::N)
            }
        }
    }
}
