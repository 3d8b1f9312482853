//! Core types for the college registry.
//!
//! [`College`] owns every [`Course`] and [`Person`], keeps the name indices
//! that make them unique, and answers glob lookups through [`college_glob`].
//! Everything here is single-threaded: handles are `Rc` and the registry is
//! neither `Send` nor `Sync`.

pub mod college;
pub mod course;
pub mod error;
pub mod person;
pub mod roster;

pub use college::{College, PersonFilter};
pub use college_glob::{Pattern, matches};
pub use course::{Course, CourseId};
pub use error::{Entity, Error, Result};
pub use person::{Person, PersonId, PersonKind, Role};
pub use roster::{CourseEntry, PersonEntry, Roster};
