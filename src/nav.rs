//! Lesson Navigation State Machine
//!
//! Tracks where the learner is and what they have finished: active
//! module/lesson, sidebar expansion, and the completion set. The state
//! object is deliberately free of any UI types and takes the
//! [`ContentStore`] by reference on each operation, so it can be
//! exercised headless in tests.
//!
//! Operations given an unknown module id or an out-of-range lesson index
//! fail with an explicit error and leave the state unchanged.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::content::ContentStore;
use crate::error::Result;
use crate::models::LessonRef;

/// What `advance()` does at the last lesson of a module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AdvancePolicy {
    /// Stay on the last lesson; module-to-module continuation is left to
    /// explicit navigation
    #[default]
    WithinModule,
    /// Continue to the first lesson of the next module; stay put at the
    /// end of the course
    CrossModule,
}

/// Navigation and progress state for one viewer session
#[derive(Debug, Clone)]
pub struct NavigationState {
    /// Currently selected lesson; always valid for the store the state
    /// was built against
    active: LessonRef,

    /// Module ids the learner has expanded in the sidebar. The active
    /// module always renders expanded regardless of this set.
    expanded: HashSet<String>,

    /// Lesson addresses marked complete; grows monotonically
    completed: HashSet<LessonRef>,

    /// Module-boundary behavior of `advance()`
    policy: AdvancePolicy,
}

impl NavigationState {
    /// Create a fresh state positioned at the first lesson of the first
    /// module, with an empty completion set
    pub fn new(store: &ContentStore, policy: AdvancePolicy) -> Self {
        let active = store.first_lesson();
        let mut expanded = HashSet::new();
        expanded.insert(active.module_id.clone());
        Self {
            active,
            expanded,
            completed: HashSet::new(),
            policy,
        }
    }

    /// Create a state with a pre-seeded completion set
    ///
    /// Every seed entry must point inside the course; a bad entry fails
    /// the whole construction so a typo in the config file is caught at
    /// startup rather than silently skewing progress.
    pub fn with_seed(
        store: &ContentStore,
        policy: AdvancePolicy,
        seed: &[LessonRef],
    ) -> Result<Self> {
        let mut state = Self::new(store, policy);
        for lesson_ref in seed {
            store.validate_ref(lesson_ref)?;
            state.completed.insert(lesson_ref.clone());
        }
        Ok(state)
    }

    /// The currently selected lesson address
    pub fn active(&self) -> &LessonRef {
        &self.active
    }

    /// The configured advance policy
    pub fn policy(&self) -> AdvancePolicy {
        self.policy
    }

    /// Select a lesson explicitly
    ///
    /// Validates the address against the store; on failure the state is
    /// untouched. Re-selecting the current lesson is a no-op. Selecting
    /// never marks anything complete.
    pub fn select_lesson(
        &mut self,
        store: &ContentStore,
        module_id: &str,
        index: usize,
    ) -> Result<()> {
        store.lesson(module_id, index)?;
        self.active = LessonRef::new(module_id, index);
        self.expanded.insert(module_id.to_string());
        Ok(())
    }

    /// Mark the active lesson complete, then move to the next lesson
    ///
    /// Within a module this selects the next index. At the last lesson
    /// the behavior follows the configured [`AdvancePolicy`]; in both
    /// policies completion marking happens first and is idempotent, so
    /// repeated calls at the end of a module are safe.
    pub fn advance(&mut self, store: &ContentStore) -> Result<()> {
        store.validate_ref(&self.active)?;
        self.completed.insert(self.active.clone());

        let lesson_count = store.lesson_count(&self.active.module_id)?;
        if self.active.index + 1 < lesson_count {
            self.active.index += 1;
            return Ok(());
        }

        if self.policy == AdvancePolicy::CrossModule {
            let pos = store.module_position(&self.active.module_id)?;
            if let Some(next) = store.modules().get(pos + 1) {
                self.active = LessonRef::new(next.id.clone(), 0);
                self.expanded.insert(self.active.module_id.clone());
            }
        }
        Ok(())
    }

    /// Move to the previous lesson within the module
    ///
    /// No-op at index 0; never crosses module boundaries.
    pub fn retreat(&mut self) {
        if self.active.index > 0 {
            self.active.index -= 1;
        }
    }

    /// Flip a module's sidebar expansion; never affects the selection
    pub fn toggle_module(&mut self, module_id: &str) {
        if !self.expanded.remove(module_id) {
            self.expanded.insert(module_id.to_string());
        }
    }

    /// Whether a module renders expanded in the sidebar
    pub fn is_expanded(&self, module_id: &str) -> bool {
        self.active.module_id == module_id || self.expanded.contains(module_id)
    }

    /// Whether a lesson has been marked complete
    pub fn is_completed(&self, lesson_ref: &LessonRef) -> bool {
        self.completed.contains(lesson_ref)
    }

    /// Number of completed lessons across the course
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Fraction of a module's lessons marked complete, in [0, 1]
    ///
    /// Pure query; an unknown module id yields 0.
    pub fn progress_fraction(&self, store: &ContentStore, module_id: &str) -> f32 {
        let Ok(lesson_count) = store.lesson_count(module_id) else {
            return 0.0;
        };
        if lesson_count == 0 {
            return 0.0;
        }
        let done = self
            .completed
            .iter()
            .filter(|r| r.module_id == module_id)
            .count();
        (done as f32 / lesson_count as f32).clamp(0.0, 1.0)
    }

    /// Resolve a route segment to a module selection
    ///
    /// If the segment names a known module, its first lesson becomes
    /// active and `true` is returned; otherwise the state is left
    /// unchanged and `false` is returned.
    pub fn resolve_route(&mut self, store: &ContentStore, segment: &str) -> bool {
        match self.select_lesson(store, segment, 0) {
            Ok(()) => true,
            Err(e) => {
                debug!("route segment '{}' did not resolve: {}", segment, e);
                false
            }
        }
    }
}
