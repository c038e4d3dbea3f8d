#![no_std]

extern crate alloc;

pub mod mt19937;
pub mod random;
pub mod seed;

pub use random::Random;

#[derive(Debug, PartialEq)]
pub enum Error {
    EmptyRange,
    ParseHex,
    ZeroBits,
}
