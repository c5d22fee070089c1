//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the mind-map tree and various text representations.

pub mod freemind;
pub mod notes;
pub mod outline;
pub mod slides;

pub use freemind::FreemindFormat;
pub use notes::{NotesFormat, NotesOptions};
pub use outline::{OutlineDialect, OutlineFormat};
pub use slides::SlidesFormat;
