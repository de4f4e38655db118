//! Pure visual-state engine for the portfolio page.
//!
//! Everything in here is a function of live input signals (scroll offset,
//! pointer position, hover/active indices, elapsed ticks). Nothing touches the
//! DOM, so it compiles and tests on the host without a browser.

pub mod config;
pub mod counter;
pub mod deck;
pub mod gradient;
pub mod particles;
pub mod pin;
pub mod reveal;
pub mod signal;
pub mod typing;

use thiserror::Error;

pub use config::MotionConfig;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("gradient needs at least two keyframes")]
    TooFewKeyframes,
    #[error("keyframe positions must start at 0, end at 100 and strictly increase")]
    UnorderedKeyframes,
    #[error("carousel needs at least one item")]
    EmptyDeck,
    #[error("typed text needs at least one title and no blank ones")]
    NoTitles,
    #[error("pin window span must be positive, got {0}")]
    InvalidSpan(f64),
}
