#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod engine;
pub mod game;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;

pub use engine::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with, LOG_ENV};
pub use player::*;
