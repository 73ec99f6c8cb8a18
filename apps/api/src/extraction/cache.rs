//! Explicit extraction memo, owned by whoever builds the `SkillExtractor`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::SkillScore;

/// Process-lifetime memo of extraction results, keyed by the exact
/// description text. No eviction and no size bound: inputs are few and
/// user-driven, so unbounded growth is acceptable here.
#[derive(Clone, Default)]
pub struct ExtractionCache {
    inner: Arc<Mutex<HashMap<String, Vec<SkillScore>>>>,
}

impl ExtractionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, description: &str) -> Option<Vec<SkillScore>> {
        self.inner
            .lock()
            .expect("extraction cache lock poisoned")
            .get(description)
            .cloned()
    }

    pub fn put(&self, description: &str, skills: Vec<SkillScore>) {
        self.inner
            .lock()
            .expect("extraction cache lock poisoned")
            .insert(description.to_string(), skills);
    }

    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .expect("extraction cache lock poisoned")
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
