//! Course Content Store
//!
//! An immutable, in-memory nested structure of Course → Modules →
//! Lessons, authored by hand in [`catalog`]. The store is exposed
//! through a repository-style interface (`module(id)`,
//! `lesson(module_id, index)`) so navigation and rendering never touch
//! the underlying data layout. Swapping to file-based or service-backed
//! content later only requires a new constructor.
//!
//! Invariants enforced at construction:
//!
//! - module identifiers are unique and non-empty
//! - every module has at least one lesson
//! - lesson order is authoring order; the index is the lesson's address

pub mod catalog;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};
use crate::models::LessonRef;

/// A top-level curriculum unit containing an ordered list of lessons
#[derive(Debug, Clone)]
pub struct Module {
    /// Stable unique identifier, also the routing segment
    pub id: String,

    /// Display title
    pub title: String,

    /// Human-readable duration label, e.g. "2 hours"
    pub duration: String,

    /// Short description shown in the sidebar
    pub description: String,

    /// Ordered lessons; the index within this vector is the lesson address
    pub lessons: Vec<Lesson>,

    /// Optional supplementary video links
    pub videos: Vec<VideoLink>,
}

/// The smallest addressable content unit, identified by (module, index)
#[derive(Debug, Clone)]
pub struct Lesson {
    /// Display title
    pub title: String,

    /// Formatted-markup content blob (see the `render` module for the
    /// supported subset)
    pub content: String,

    /// Optional duration label
    pub duration: Option<String>,

    /// Ordered "syntax" reference entries shown in the Syntax tab
    pub syntax: Vec<SyntaxEntry>,

    /// Suggested practice-terminal commands for this lesson
    pub commands: Vec<String>,
}

/// A titled free-text reference block; URLs in the body are auto-linked
#[derive(Debug, Clone)]
pub struct SyntaxEntry {
    pub title: String,
    pub body: String,
}

/// A supplementary video reference
#[derive(Debug, Clone)]
pub struct VideoLink {
    pub title: String,
    pub url: String,
}

/// A complete course: title, tagline, ordered modules
#[derive(Debug, Clone)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub modules: Vec<Module>,
}

/// Read-only access to one course's content
///
/// Lookups are by stable module identifier; positions are derived from
/// the identifier's place in the module sequence.
#[derive(Debug)]
pub struct ContentStore {
    course: Course,
    positions: HashMap<String, usize>,
}

static BUILTIN: Lazy<ContentStore> = Lazy::new(|| {
    ContentStore::new(catalog::builtin_course())
        .unwrap_or_else(|e| panic!("builtin course failed validation: {}", e))
});

impl ContentStore {
    /// Build a store over a course, validating its structure
    pub fn new(course: Course) -> Result<Self> {
        if course.modules.is_empty() {
            return Err(Error::InvalidCourse {
                reason: "course has no modules".to_string(),
            });
        }

        let mut positions = HashMap::with_capacity(course.modules.len());
        for (pos, module) in course.modules.iter().enumerate() {
            if module.id.trim().is_empty() {
                return Err(Error::InvalidCourse {
                    reason: format!("module at position {} has an empty id", pos),
                });
            }
            if module.lessons.is_empty() {
                return Err(Error::InvalidCourse {
                    reason: format!("module '{}' has no lessons", module.id),
                });
            }
            if positions.insert(module.id.clone(), pos).is_some() {
                return Err(Error::InvalidCourse {
                    reason: format!("duplicate module id '{}'", module.id),
                });
            }
        }

        Ok(Self { course, positions })
    }

    /// The built-in cybersecurity curriculum
    pub fn builtin() -> &'static ContentStore {
        &BUILTIN
    }

    /// Course metadata
    pub fn course(&self) -> &Course {
        &self.course
    }

    /// All modules in course order
    pub fn modules(&self) -> &[Module] {
        &self.course.modules
    }

    /// Look up a module by identifier
    pub fn module(&self, module_id: &str) -> Result<&Module> {
        self.positions
            .get(module_id)
            .map(|&pos| &self.course.modules[pos])
            .ok_or_else(|| Error::ModuleNotFound {
                module_id: module_id.to_string(),
            })
    }

    /// Position of a module within the course sequence
    pub fn module_position(&self, module_id: &str) -> Result<usize> {
        self.positions
            .get(module_id)
            .copied()
            .ok_or_else(|| Error::ModuleNotFound {
                module_id: module_id.to_string(),
            })
    }

    /// Look up a lesson by module identifier and index
    pub fn lesson(&self, module_id: &str, index: usize) -> Result<&Lesson> {
        let module = self.module(module_id)?;
        module
            .lessons
            .get(index)
            .ok_or_else(|| Error::LessonIndexOutOfRange {
                module_id: module_id.to_string(),
                index,
                lesson_count: module.lessons.len(),
            })
    }

    /// Look up a lesson by reference
    pub fn lesson_at(&self, lesson_ref: &LessonRef) -> Result<&Lesson> {
        self.lesson(&lesson_ref.module_id, lesson_ref.index)
    }

    /// Number of lessons in a module
    pub fn lesson_count(&self, module_id: &str) -> Result<usize> {
        Ok(self.module(module_id)?.lessons.len())
    }

    /// Total number of lessons across the course
    pub fn total_lessons(&self) -> usize {
        self.course.modules.iter().map(|m| m.lessons.len()).sum()
    }

    /// Address of the first lesson of the first module
    pub fn first_lesson(&self) -> LessonRef {
        LessonRef::new(self.course.modules[0].id.clone(), 0)
    }

    /// Check that a reference points inside the course
    pub fn validate_ref(&self, lesson_ref: &LessonRef) -> Result<()> {
        self.lesson_at(lesson_ref).map(|_| ())
    }
}
