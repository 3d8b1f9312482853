//! Error types for `college-core`.

use strum::Display;
use thiserror::Error;

use crate::person::Role;

/// The kind of entity a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Entity {
  Person,
  Course,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("course already exists: {0}")]
  DuplicateCourse(String),

  #[error("person already exists: {name} {surname}")]
  DuplicatePerson { name: String, surname: String },

  #[error("{0} is not registered in this college")]
  NotFound(Entity),

  #[error("course {0} is inactive")]
  InactiveCourse(String),

  #[error("student {name} {surname} is inactive")]
  InactiveStudent { name: String, surname: String },

  #[error("{name} {surname} has no {role} role")]
  RoleMismatch {
    name:    String,
    surname: String,
    role:    Role,
  },

  /// A roster entry names a course the roster never declares.
  #[error("roster references an undeclared course: {0}")]
  UnknownCourse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
