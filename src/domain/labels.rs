//! Trait and style label collections.

/// Insertion-ordered set of labels.
///
/// Used for the current selection and for saved per-student settings. Order is the
/// order in which labels were selected, which is also the order they appear in prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet(Vec<String>);

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|existing| existing == label)
    }

    /// Insert `label`; returns `false` if it was already present.
    pub fn insert(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if self.contains(&label) {
            return false;
        }
        self.0.push(label);
        true
    }

    /// Remove `label`; returns `false` if it was absent.
    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != label);
        self.0.len() != before
    }

    /// Add when absent, remove when present. Returns whether the label is now selected.
    pub fn toggle(&mut self, label: &str) -> bool {
        if self.remove(label) {
            false
        } else {
            self.0.push(label.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for LabelSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = LabelSet::new();
        for label in iter {
            set.insert(label);
        }
        set
    }
}

/// Result of adding a user-defined label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// Added, and the oldest label was dropped to respect the cap.
    AddedWithEviction { evicted: String },
    Duplicate,
    Empty,
}

/// Global, ordered list of user-defined labels with an optional FIFO cap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomLabels {
    labels: Vec<String>,
    cap: Option<usize>,
}

impl CustomLabels {
    pub fn new(cap: Option<usize>) -> Self {
        Self { labels: Vec::new(), cap }
    }

    /// Restore a stored list. Blank and repeated entries are dropped, and the cap is
    /// applied by discarding the oldest entries.
    pub fn restore(stored: Vec<String>, cap: Option<usize>) -> Self {
        let mut custom = Self::new(cap);
        for label in stored {
            custom.add(&label);
        }
        custom
    }

    pub fn add(&mut self, raw: &str) -> AddOutcome {
        let label = raw.trim();
        if label.is_empty() {
            return AddOutcome::Empty;
        }
        if self.contains(label) {
            return AddOutcome::Duplicate;
        }

        let evicted = match self.cap {
            Some(cap) if cap > 0 && self.labels.len() >= cap => Some(self.labels.remove(0)),
            _ => None,
        };
        self.labels.push(label.to_string());

        match evicted {
            Some(evicted) => AddOutcome::AddedWithEviction { evicted },
            None => AddOutcome::Added,
        }
    }

    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.labels.len();
        self.labels.retain(|existing| existing != label);
        self.labels.len() != before
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|existing| existing == label)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn cap(&self) -> Option<usize> {
        self.cap
    }
}
