#![no_std]

extern crate alloc;

pub mod mersenne;

pub use mersenne::{Error, Mt19937, Snapshot};
