//! Course — a named, switchable unit of teaching.
//!
//! Courses are created by [`College`](crate::College) and handed out as
//! shared `Rc<Course>` handles. A handle stays readable after the course has
//! been removed from its college; the college deactivates it on the way out.

use std::{cell::Cell, fmt};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a course. Unique across colleges, unlike the course name.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CourseId(Uuid);

impl CourseId {
  pub(crate) fn new() -> Self { Self(Uuid::new_v4()) }

  pub fn as_uuid(&self) -> Uuid { self.0 }
}

impl fmt::Display for CourseId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

#[derive(Debug)]
pub struct Course {
  id:         CourseId,
  name:       String,
  active:     Cell<bool>,
  created_at: DateTime<Utc>,
}

impl Course {
  /// Build a course. Name contents are not checked; uniqueness is the
  /// college's concern.
  pub(crate) fn new(name: impl Into<String>, active: bool) -> Self {
    Self {
      id:         CourseId::new(),
      name:       name.into(),
      active:     Cell::new(active),
      created_at: Utc::now(),
    }
  }

  pub fn id(&self) -> CourseId { self.id }

  pub fn name(&self) -> &str { &self.name }

  pub fn is_active(&self) -> bool { self.active.get() }

  pub fn set_active(&self, active: bool) { self.active.set(active) }

  pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
}

impl fmt::Display for Course {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.name)
  }
}
