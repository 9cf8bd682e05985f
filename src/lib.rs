//! timemask: masked-input editing for time values.
//!
//! A format string such as `hh:mm:ss` is split into sections, one per time component. Raw text
//! from an input field is reduced back onto those sections digit by digit, and the sections are
//! serialised into the string the field should display. The host owns the widget; this crate
//! only tells it what to show and where the caret belongs.
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod locator;
pub mod modifier;
pub mod reducer;
pub mod section;
pub mod serializer;
pub mod session;
pub mod token;
pub mod tokenizer;

pub use locator::{locate, next, previous};
pub use modifier::{concatenate, modify, HourFormat};
pub use reducer::{distribute, reduce};
pub use section::{Section, Selection};
pub use serializer::serialize;
pub use session::{Direction, Session};
pub use token::{TimeToken, TimeType};
pub use tokenizer::tokenize;
