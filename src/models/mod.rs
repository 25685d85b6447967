//! Typed records for the site's collections.
//!
//! Documents come off the wire as schemaless field maps; each record
//! maps one at the boundary, applying missing-field defaults exactly
//! once so rendering code never has to.

mod blog;
mod gallery;
mod lesson;
mod library;
mod member;
mod prayer;

pub use blog::*;
pub use gallery::*;
pub use lesson::*;
pub use library::*;
pub use member::*;
pub use prayer::*;
