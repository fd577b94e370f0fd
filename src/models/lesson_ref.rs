//! Lesson Address Model
//!
//! A lesson has no independent identifier. Its identity for navigation
//! and progress tracking is the pair (module identifier, lesson index
//! within that module), in authoring order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Address of a single lesson: module identifier plus lesson index
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LessonRef {
    /// Stable identifier of the containing module
    pub module_id: String,

    /// Zero-based position of the lesson within the module
    pub index: usize,
}

impl LessonRef {
    /// Create a new lesson reference
    pub fn new(module_id: impl Into<String>, index: usize) -> Self {
        Self {
            module_id: module_id.into(),
            index,
        }
    }
}

impl fmt::Display for LessonRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module_id, self.index)
    }
}

/// Parses the `"module-id:index"` form used by the progress seed in
/// the configuration file.
impl FromStr for LessonRef {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (module_id, index) = s.rsplit_once(':').ok_or_else(|| Error::InvalidSeedEntry {
            entry: s.to_string(),
            reason: "expected 'module-id:index'".to_string(),
        })?;

        if module_id.is_empty() {
            return Err(Error::InvalidSeedEntry {
                entry: s.to_string(),
                reason: "module id is empty".to_string(),
            });
        }

        let index = index.parse::<usize>().map_err(|e| Error::InvalidSeedEntry {
            entry: s.to_string(),
            reason: format!("bad lesson index: {}", e),
        })?;

        Ok(Self::new(module_id, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_ref_display_roundtrip() {
        let lesson = LessonRef::new("module-2", 3);
        assert_eq!(lesson.to_string(), "module-2:3");

        let parsed: LessonRef = "module-2:3".parse().unwrap();
        assert_eq!(parsed, lesson);
    }

    #[test]
    fn test_lesson_ref_parse_rejects_garbage() {
        assert!("module-2".parse::<LessonRef>().is_err());
        assert!(":4".parse::<LessonRef>().is_err());
        assert!("module-2:abc".parse::<LessonRef>().is_err());
    }

    #[test]
    fn test_lesson_ref_equality_and_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(LessonRef::new("module-1", 0));
        set.insert(LessonRef::new("module-1", 0));
        set.insert(LessonRef::new("module-1", 1));

        assert_eq!(set.len(), 2);
    }
}
