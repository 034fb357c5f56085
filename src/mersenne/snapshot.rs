use alloc::vec::Vec;
use core::convert::TryFrom;

use serde::{Deserialize, Serialize};

use super::mt19937::{Mt19937, N};
use super::Error;

/// Serializable copy of an MT19937 state and index
///
/// Restoring a snapshot yields a generator that continues the exact sequence
/// of the one it was taken from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: Vec<u32>,
    pub index: usize,
}

impl Snapshot {
    /// Rebuild the generator this snapshot was taken from
    pub fn restore(&self) -> Result<Mt19937, Error> {
        if self.state.len() != N {
            return Err(Error::InvalidStateLength(self.state.len()));
        }

        let mut state = [0_u32; N];
        state.copy_from_slice(&self.state);

        Mt19937::from_parts(state, self.index)
    }
}

impl From<&Mt19937> for Snapshot {
    fn from(rng: &Mt19937) -> Self {
        Self {
            state: rng.state.to_vec(),
            index: rng.index,
        }
    }
}

impl TryFrom<Snapshot> for Mt19937 {
    type Error = Error;

    fn try_from(snapshot: Snapshot) -> Result<Self, Self::Error> {
        snapshot.restore()
    }
}
