//! Structs with private state, constructors, `Clone`/`Drop` hooks and
//! composition.
//!
//! Run with: cargo run --bin oop_classes

use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;

use tracing::debug;

use crate::console::{banner, section};
use crate::error::{LessonError, Result};

/// Tracks how many [`Student`] values are alive.
///
/// Every student created through a roster (or cloned from one) counts until it
/// is dropped.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    live: Rc<Cell<usize>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_count(&self) -> usize {
        self.live.get()
    }

    pub fn enroll(&self, name: impl Into<String>, age: u32) -> Student {
        let name = name.into();
        debug!(%name, age, "enrolling student");
        Student::register(name, age, Vec::new(), Rc::clone(&self.live))
    }

    /// A placeholder student, filled in later through the setters.
    pub fn enroll_unknown(&self) -> Student {
        self.enroll("Unknown", 0)
    }
}

#[derive(Debug)]
pub struct Student {
    name: String,
    age: u32,
    grades: Vec<f64>,
    live: Rc<Cell<usize>>,
}

impl Student {
    fn register(name: String, age: u32, grades: Vec<f64>, live: Rc<Cell<usize>>) -> Self {
        live.set(live.get() + 1);
        Self {
            name,
            age,
            grades,
            live,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }

    pub fn add_grade(&mut self, grade: f64) -> Result<()> {
        if !(0.0..=100.0).contains(&grade) {
            return Err(LessonError::GradeOutOfRange(grade));
        }
        self.grades.push(grade);
        Ok(())
    }

    pub fn average_grade(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    pub fn summary(&self) -> String {
        let mut line = format!("Student: {}, Age: {}", self.name, self.age);
        if !self.grades.is_empty() {
            line.push_str(&format!(", Average Grade: {:.2}", self.average_grade()));
        }
        line
    }
}

impl Clone for Student {
    fn clone(&self) -> Self {
        debug!(name = %self.name, "cloning student");
        Self::register(
            self.name.clone(),
            self.age,
            self.grades.clone(),
            Rc::clone(&self.live),
        )
    }
}

impl Drop for Student {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
        debug!(name = %self.name, "student dropped");
    }
}

/// Reads private fields directly; any function in this module may.
pub fn student_details(student: &Student) -> String {
    format!("Module-private access: {} is {} years old", student.name, student.age)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    name: String,
    instructor: String,
    credits: u8,
}

impl Course {
    pub fn new(name: impl Into<String>, instructor: impl Into<String>, credits: u8) -> Self {
        Self {
            name: name.into(),
            instructor: instructor.into(),
            credits,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn credits(&self) -> u8 {
        self.credits
    }

    pub fn summary(&self) -> String {
        format!(
            "Course: {}, Instructor: {}, Credits: {}",
            self.name, self.instructor, self.credits
        )
    }
}

pub fn run(out: &mut dyn Write) -> io::Result<()> {
    banner(out, "Structs and Objects")?;
    let roster = Roster::new();

    section(out, 1, "Creating objects")?;
    let mut student1 = roster.enroll_unknown();
    let mut student2 = roster.enroll("Alice", 20);
    let mut student3 = roster.enroll("Bob", 22);
    writeln!(out, "   Total students: {}", roster.live_count())?;
    writeln!(out)?;

    section(out, 2, "Using setter methods")?;
    student1.set_name("Charlie");
    student1.set_age(19);
    writeln!(out, "  {}", student1.summary())?;
    writeln!(out)?;

    section(out, 3, "Adding grades")?;
    for grade in [85.5, 92.0, 78.5] {
        if let Err(err) = student2.add_grade(grade) {
            writeln!(out, "  rejected: {err}")?;
        }
    }
    writeln!(out, "  {}", student2.summary())?;
    for grade in [95.0, 88.0, 140.0] {
        if let Err(err) = student3.add_grade(grade) {
            writeln!(out, "  rejected: {err}")?;
        }
    }
    writeln!(out, "  {}", student3.summary())?;
    writeln!(out)?;

    section(out, 4, "Module-private field access")?;
    writeln!(out, "  {}", student_details(&student2))?;
    writeln!(out)?;

    section(out, 5, "Clone")?;
    let mut student4 = student2.clone();
    student4.set_name("David");
    writeln!(out, "  {}", student4.summary())?;
    writeln!(out, "   Total students: {}", roster.live_count())?;
    writeln!(out)?;

    section(out, 6, "Composition")?;
    let courses = [
        Course::new("Computer Science 101", "Dr. Smith", 3),
        Course::new("Mathematics 201", "Prof. Johnson", 4),
    ];
    for course in &courses {
        writeln!(out, "  {}", course.summary())?;
    }
    writeln!(out)?;

    section(out, 7, "Arrays of objects")?;
    {
        let cohort = [
            roster.enroll("Eve", 21),
            roster.enroll("Frank", 23),
            roster.enroll("Grace", 20),
        ];
        for student in &cohort {
            writeln!(out, "  {}", student.summary())?;
        }
        writeln!(out, "   Total students inside scope: {}", roster.live_count())?;
    }
    writeln!(out, "   Total students after scope: {}", roster.live_count())?;
    writeln!(out)?;

    section(out, 8, "Vector of objects")?;
    let students = vec![roster.enroll("Henry", 24), roster.enroll("Ivy", 22)];
    for student in &students {
        writeln!(out, "  {}", student.summary())?;
    }
    writeln!(out)?;

    writeln!(out, "   Final total students: {}", roster.live_count())?;
    writeln!(out)?;

    banner(out, "End of Structs Example")
}
