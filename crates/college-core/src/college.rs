//! [`College`] — the registry that owns every course and person.
//!
//! The college keeps two tables (courses by id, people by id) and one name
//! index for each, and keeps them in step on every mutation. Existence checks
//! for callers' handles go by identity, never by name: a course from another
//! college with the same name is not "here".

use std::{
  collections::{BTreeMap, HashMap},
  rc::Rc,
};

use college_glob::Pattern;
use tracing::debug;

use crate::{
  Error, Result,
  course::{Course, CourseId},
  error::Entity,
  person::{Person, PersonId, PersonKind, Role},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Which people [`College::find_people`] considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonFilter {
  /// Everyone.
  #[default]
  Any,
  /// Anyone with a student role, PhD students included.
  Student,
  /// Anyone with a teacher role, PhD students included.
  Teacher,
  /// Only people carrying both roles.
  PhdStudent,
}

impl PersonFilter {
  pub fn admits(self, person: &Person) -> bool {
    match self {
      Self::Any => true,
      Self::Student => person.has_student_role(),
      Self::Teacher => person.has_teacher_role(),
      Self::PhdStudent => person.has_student_role() && person.has_teacher_role(),
    }
  }
}

impl From<Role> for PersonFilter {
  fn from(role: Role) -> Self {
    match role {
      Role::Student => Self::Student,
      Role::Teacher => Self::Teacher,
    }
  }
}

// ─── College ─────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct College {
  courses:      HashMap<CourseId, Rc<Course>>,
  course_names: BTreeMap<String, CourseId>,
  people:       HashMap<PersonId, Rc<Person>>,
  person_names: BTreeMap<(String, String), PersonId>,
}

impl College {
  pub fn new() -> Self { Self::default() }

  pub fn course_count(&self) -> usize { self.courses.len() }

  pub fn person_count(&self) -> usize { self.people.len() }

  // ── Courses ───────────────────────────────────────────────────────────

  /// Create a course and return its handle.
  ///
  /// Fails with [`Error::DuplicateCourse`] if the name is taken.
  pub fn create_course(
    &mut self,
    name: impl Into<String>,
    active: bool,
  ) -> Result<Rc<Course>> {
    let name = name.into();
    if self.course_names.contains_key(&name) {
      return Err(Error::DuplicateCourse(name));
    }

    let course = Rc::new(Course::new(name, active));
    self.course_names.insert(course.name().to_owned(), course.id());
    self.courses.insert(course.id(), Rc::clone(&course));

    debug!(course = course.name(), active, "course added");
    Ok(course)
  }

  /// Add a course. Returns `false`, changing nothing, if the name is taken.
  pub fn add_course(&mut self, name: impl Into<String>, active: bool) -> bool {
    self.create_course(name, active).is_ok()
  }

  /// Exact lookup by name.
  pub fn course(&self, name: &str) -> Option<Rc<Course>> {
    self
      .course_names
      .get(name)
      .and_then(|id| self.courses.get(id))
      .cloned()
  }

  /// `true` if this exact course object is registered here.
  pub fn contains_course(&self, course: &Course) -> bool {
    self.registered_course(course).is_some()
  }

  /// Remove a course, found by identity. The course is deactivated on the
  /// way out; people already holding it keep their handle.
  ///
  /// Returns `false` if the course is not registered here.
  pub fn remove_course(&mut self, course: &Course) -> bool {
    let Some(held) = self.registered_course(course).cloned() else {
      return false;
    };

    self.course_names.remove(held.name());
    held.set_active(false);
    self.courses.remove(&held.id());

    debug!(course = held.name(), "course removed");
    true
  }

  /// Returns `false` if the course is not registered here.
  pub fn set_course_active(&self, course: &Course, active: bool) -> bool {
    let Some(held) = self.registered_course(course) else {
      return false;
    };
    held.set_active(active);

    debug!(course = held.name(), active, "course activity changed");
    true
  }

  /// Courses whose name matches `pattern`, ordered by name.
  pub fn find_courses<'p>(
    &self,
    pattern: impl Into<Pattern<'p>>,
  ) -> Vec<Rc<Course>> {
    let pattern = pattern.into();
    if pattern.is_literal() {
      return self.course(pattern.as_str()).into_iter().collect();
    }

    self
      .course_names
      .iter()
      .filter(|(name, _)| pattern.matches(name))
      .filter_map(|(_, id)| self.courses.get(id))
      .cloned()
      .collect()
  }

  fn registered_course(&self, course: &Course) -> Option<&Rc<Course>> {
    self
      .courses
      .get(&course.id())
      .filter(|held| std::ptr::eq(held.as_ref(), course))
  }

  // ── People ────────────────────────────────────────────────────────────

  /// Create a person with the roles `kind` calls for and return its handle.
  /// `active` sets the student activity flag; teachers ignore it.
  ///
  /// Fails with [`Error::DuplicatePerson`] if `(name, surname)` is taken.
  pub fn create_person(
    &mut self,
    kind: PersonKind,
    name: impl Into<String>,
    surname: impl Into<String>,
    active: bool,
  ) -> Result<Rc<Person>> {
    let key = (name.into(), surname.into());
    if self.person_names.contains_key(&key) {
      let (name, surname) = key;
      return Err(Error::DuplicatePerson { name, surname });
    }

    let person = Rc::new(Person::new(kind, key.0.clone(), key.1.clone(), active));
    self.person_names.insert(key, person.id());
    self.people.insert(person.id(), Rc::clone(&person));

    debug!(
      name = person.name(),
      surname = person.surname(),
      kind = %kind,
      "person added"
    );
    Ok(person)
  }

  /// Add a person. Returns `false`, changing nothing, if `(name, surname)` is
  /// taken.
  pub fn add_person(
    &mut self,
    kind: PersonKind,
    name: impl Into<String>,
    surname: impl Into<String>,
    active: bool,
  ) -> bool {
    self.create_person(kind, name, surname, active).is_ok()
  }

  /// Exact lookup by identity pair.
  pub fn person(&self, name: &str, surname: &str) -> Option<Rc<Person>> {
    self
      .person_names
      .get(&(name.to_owned(), surname.to_owned()))
      .and_then(|id| self.people.get(id))
      .cloned()
  }

  /// `true` if this exact person object is registered here.
  pub fn contains_person(&self, person: &Person) -> bool {
    self.registered_person(person).is_some()
  }

  /// Set a student's activity flag.
  ///
  /// Returns `Ok(false)` if the person is not registered here and
  /// [`Error::RoleMismatch`] if they have no student role.
  pub fn set_student_active(&self, person: &Person, active: bool) -> Result<bool> {
    let Some(held) = self.registered_person(person) else {
      return Ok(false);
    };
    held.set_student_active(active)?;

    debug!(
      name = held.name(),
      surname = held.surname(),
      active,
      "student activity changed"
    );
    Ok(true)
  }

  /// People admitted by `filter` whose name and surname both match, ordered by
  /// surname, then name.
  pub fn find_people<'n, 's>(
    &self,
    filter: PersonFilter,
    name_pattern: impl Into<Pattern<'n>>,
    surname_pattern: impl Into<Pattern<'s>>,
  ) -> Vec<Rc<Person>> {
    let name_pattern = name_pattern.into();
    let surname_pattern = surname_pattern.into();

    if name_pattern.is_literal() && surname_pattern.is_literal() {
      return self
        .person(name_pattern.as_str(), surname_pattern.as_str())
        .filter(|p| filter.admits(p))
        .into_iter()
        .collect();
    }

    let mut found: Vec<_> = self
      .people
      .values()
      .filter(|p| filter.admits(p))
      .filter(|p| name_pattern.matches(p.name()) && surname_pattern.matches(p.surname()))
      .cloned()
      .collect();
    found.sort_by(|a, b| (a.surname(), a.name()).cmp(&(b.surname(), b.name())));
    found
  }

  /// People holding `course` in their `role` course set, ordered by name, then
  /// surname. Membership is by identity, so a course that has since been
  /// removed still finds whoever holds it.
  pub fn find_people_by_course(
    &self,
    role: Role,
    course: &Course,
  ) -> Vec<Rc<Person>> {
    self
      .person_names
      .values()
      .filter_map(|id| self.people.get(id))
      .filter(|p| p.holds_course(role, course))
      .cloned()
      .collect()
  }

  fn registered_person(&self, person: &Person) -> Option<&Rc<Person>> {
    self
      .people
      .get(&person.id())
      .filter(|held| std::ptr::eq(held.as_ref(), person))
  }

  // ── Assignment ────────────────────────────────────────────────────────

  /// Put `course` into the `role` course set of `person`.
  ///
  /// Checks, in order: the person is registered here, the course is
  /// registered here, the course is active, the person has `role`, and for
  /// students, the student is active. Returns `Ok(false)` if the course was
  /// already in the set.
  pub fn assign_course(
    &self,
    role: Role,
    person: &Person,
    course: &Course,
  ) -> Result<bool> {
    let Some(person) = self.registered_person(person) else {
      return Err(Error::NotFound(Entity::Person));
    };
    let Some(course) = self.registered_course(course) else {
      return Err(Error::NotFound(Entity::Course));
    };
    if !course.is_active() {
      debug!(course = course.name(), "assignment rejected: inactive course");
      return Err(Error::InactiveCourse(course.name().to_owned()));
    }

    let inserted = match role {
      Role::Student => {
        if !person.is_student_active()? {
          debug!(
            name = person.name(),
            surname = person.surname(),
            "assignment rejected: inactive student"
          );
          return Err(Error::InactiveStudent {
            name:    person.name().to_owned(),
            surname: person.surname().to_owned(),
          });
        }
        person.student_enroll(Rc::clone(course))?
      }
      Role::Teacher => person.teacher_assign(Rc::clone(course))?,
    };

    if inserted {
      debug!(
        name = person.name(),
        surname = person.surname(),
        course = course.name(),
        role = %role,
        "course assigned"
      );
    }
    Ok(inserted)
  }
}
