//! People and the roles they can carry.
//!
//! A person is one identity record (`name`, `surname`) with up to two role
//! components attached: a student role with an activity flag and a set of
//! enrolled courses, and a teacher role with a set of taught courses. A PhD
//! student carries both on the same record.

use std::{
  cell::{Cell, Ref, RefCell},
  collections::BTreeMap,
  fmt,
  rc::Rc,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use uuid::Uuid;

use crate::{
  Error, Result,
  course::Course,
};

// ─── Tags ────────────────────────────────────────────────────────────────────

/// A capability a person can hold. Used by callers to say which course set an
/// operation targets when a person carries both.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
  Student,
  Teacher,
}

/// Which roles a person is created with.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PersonKind {
  Student,
  Teacher,
  PhdStudent,
}

impl PersonKind {
  pub fn has_role(self, role: Role) -> bool {
    matches!(
      (self, role),
      (Self::Student | Self::PhdStudent, Role::Student)
        | (Self::Teacher | Self::PhdStudent, Role::Teacher)
    )
  }
}

/// Identity of a person record. Unique across colleges.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
  pub(crate) fn new() -> Self { Self(Uuid::new_v4()) }

  pub fn as_uuid(&self) -> Uuid { self.0 }
}

impl fmt::Display for PersonId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

// ─── Course sets ─────────────────────────────────────────────────────────────

/// Course handles held by one role, keyed by course name. A course removed
/// from the college keeps its name slot, so a newer course with the same
/// name is treated as already held.
#[derive(Debug, Default)]
pub(crate) struct CourseSet(BTreeMap<String, Rc<Course>>);

impl CourseSet {
  /// Membership by name.
  fn contains(&self, course: &Course) -> bool {
    self.0.contains_key(course.name())
  }

  /// Membership by identity: the held handle is this exact course object.
  fn holds(&self, course: &Course) -> bool {
    self
      .0
      .get(course.name())
      .is_some_and(|held| std::ptr::eq(held.as_ref(), course))
  }

  /// Handles ordered by course name.
  fn sorted(&self) -> Vec<Rc<Course>> { self.0.values().cloned().collect() }

  fn insert(&mut self, course: Rc<Course>) -> bool {
    if self.contains(&course) {
      return false;
    }
    self.0.insert(course.name().to_owned(), course);
    true
  }
}

// ─── Role components ─────────────────────────────────────────────────────────

#[derive(Debug)]
struct StudentRole {
  active:   Cell<bool>,
  enrolled: RefCell<CourseSet>,
}

#[derive(Debug, Default)]
struct TeacherRole {
  taught: RefCell<CourseSet>,
}

// ─── Person ──────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub struct Person {
  id:         PersonId,
  name:       String,
  surname:    String,
  kind:       PersonKind,
  created_at: DateTime<Utc>,
  student:    Option<StudentRole>,
  teacher:    Option<TeacherRole>,
}

impl Person {
  /// Build a person with the roles `kind` calls for. `active` only applies to
  /// the student role and is ignored for pure teachers.
  pub(crate) fn new(
    kind: PersonKind,
    name: impl Into<String>,
    surname: impl Into<String>,
    active: bool,
  ) -> Self {
    let student = kind.has_role(Role::Student).then(|| StudentRole {
      active:   Cell::new(active),
      enrolled: RefCell::default(),
    });
    let teacher = kind.has_role(Role::Teacher).then(TeacherRole::default);

    Self {
      id: PersonId::new(),
      name: name.into(),
      surname: surname.into(),
      kind,
      created_at: Utc::now(),
      student,
      teacher,
    }
  }

  // ── Identity ──────────────────────────────────────────────────────────

  pub fn id(&self) -> PersonId { self.id }

  pub fn name(&self) -> &str { &self.name }

  pub fn surname(&self) -> &str { &self.surname }

  /// The `(name, surname)` pair that is unique within a college.
  pub fn identity(&self) -> (&str, &str) { (&self.name, &self.surname) }

  pub fn kind(&self) -> PersonKind { self.kind }

  pub fn created_at(&self) -> DateTime<Utc> { self.created_at }

  // ── Roles ─────────────────────────────────────────────────────────────

  pub fn has_student_role(&self) -> bool { self.student.is_some() }

  pub fn has_teacher_role(&self) -> bool { self.teacher.is_some() }

  pub fn has_role(&self, role: Role) -> bool {
    match role {
      Role::Student => self.has_student_role(),
      Role::Teacher => self.has_teacher_role(),
    }
  }

  pub fn is_student_active(&self) -> Result<bool> {
    Ok(self.student()?.active.get())
  }

  pub fn set_student_active(&self, active: bool) -> Result<()> {
    self.student()?.active.set(active);
    Ok(())
  }

  /// Enrolled courses, ordered by name.
  pub fn student_courses(&self) -> Result<Vec<Rc<Course>>> {
    Ok(self.student()?.enrolled.borrow().sorted())
  }

  /// Taught courses, ordered by name.
  pub fn teacher_courses(&self) -> Result<Vec<Rc<Course>>> {
    Ok(self.teacher()?.taught.borrow().sorted())
  }

  pub fn courses(&self, role: Role) -> Result<Vec<Rc<Course>>> {
    Ok(self.course_set(role)?.sorted())
  }

  /// Borrowed view of the course set for `role`. Kept inside the crate so no
  /// caller can hold it across an assignment.
  pub(crate) fn course_set(&self, role: Role) -> Result<Ref<'_, CourseSet>> {
    match role {
      Role::Student => Ok(self.student()?.enrolled.borrow()),
      Role::Teacher => Ok(self.teacher()?.taught.borrow()),
    }
  }

  /// `true` if this person holds this exact `course` object under `role`. A
  /// missing role is simply `false`.
  pub fn holds_course(&self, role: Role, course: &Course) -> bool {
    self
      .course_set(role)
      .is_ok_and(|set| set.holds(course))
  }

  // ── Mutation (college only) ───────────────────────────────────────────

  /// Returns `false` if the course was already enrolled.
  pub(crate) fn student_enroll(&self, course: Rc<Course>) -> Result<bool> {
    Ok(self.student()?.enrolled.borrow_mut().insert(course))
  }

  /// Returns `false` if the course was already taught.
  pub(crate) fn teacher_assign(&self, course: Rc<Course>) -> Result<bool> {
    Ok(self.teacher()?.taught.borrow_mut().insert(course))
  }

  fn student(&self) -> Result<&StudentRole> {
    self
      .student
      .as_ref()
      .ok_or_else(|| self.role_mismatch(Role::Student))
  }

  fn teacher(&self) -> Result<&TeacherRole> {
    self
      .teacher
      .as_ref()
      .ok_or_else(|| self.role_mismatch(Role::Teacher))
  }

  fn role_mismatch(&self, role: Role) -> Error {
    Error::RoleMismatch {
      name: self.name.clone(),
      surname: self.surname.clone(),
      role,
    }
  }
}

impl fmt::Display for Person {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.name, self.surname)
  }
}
