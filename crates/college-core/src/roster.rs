//! Declarative seeding of a [`College`].
//!
//! A [`Roster`] lists courses and people, plus the courses each person is
//! enrolled in or teaches. It deserialises from any serde format; the caller
//! decides where it comes from.
//!
//! ```json
//! {
//!   "courses": [{ "name": "Algebra" }, { "name": "Latin", "active": false }],
//!   "people": [
//!     { "kind": "phd_student", "name": "Jan", "surname": "Kowalski",
//!       "enrolled": ["Algebra"], "taught": ["Algebra"] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
  College, Error, Result,
  person::{PersonKind, Role},
};

fn active_by_default() -> bool { true }

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
  #[serde(default)]
  pub courses: Vec<CourseEntry>,
  #[serde(default)]
  pub people:  Vec<PersonEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseEntry {
  pub name:   String,
  #[serde(default = "active_by_default")]
  pub active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonEntry {
  pub kind:     PersonKind,
  pub name:     String,
  pub surname:  String,
  /// Student activity; ignored for teachers.
  #[serde(default = "active_by_default")]
  pub active:   bool,
  /// Course names to assign through the student role.
  #[serde(default)]
  pub enrolled: Vec<String>,
  /// Course names to assign through the teacher role.
  #[serde(default)]
  pub taught:   Vec<String>,
}

impl College {
  /// Build a college from `roster`, applying the same rules as the individual
  /// operations: duplicates, inactive courses or students, and missing roles
  /// all fail the whole build.
  pub fn from_roster(roster: &Roster) -> Result<Self> {
    let mut college = Self::new();

    for entry in &roster.courses {
      college.create_course(entry.name.as_str(), entry.active)?;
    }

    for entry in &roster.people {
      let person = college.create_person(
        entry.kind,
        entry.name.as_str(),
        entry.surname.as_str(),
        entry.active,
      )?;

      let assignments = entry
        .enrolled
        .iter()
        .map(|name| (Role::Student, name))
        .chain(entry.taught.iter().map(|name| (Role::Teacher, name)));

      for (role, course_name) in assignments {
        let course = college
          .course(course_name)
          .ok_or_else(|| Error::UnknownCourse(course_name.clone()))?;
        college.assign_course(role, &person, &course)?;
      }
    }

    debug!(
      courses = college.course_count(),
      people = college.person_count(),
      "college seeded from roster"
    );
    Ok(college)
  }
}
