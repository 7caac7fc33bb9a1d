//! The label's catalog: tracks shown as player cards and merchandise shown in
//! the shop section.

mod model;
mod remote;
mod sample;

pub use model::*;

#[cfg(test)]
mod tests;
