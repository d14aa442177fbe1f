//! Student roster derivation.
//!
//! The raw student list is free text, one student per line. Each non-blank line
//! becomes a roster entry with a positional display label (`01.Name`) and a stable
//! [`StudentId`] that survives edits to the text as long as the name is kept.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.\s]*").expect("leading number pattern must compile"));

/// Opaque identity of a student within one session.
///
/// Not derived from the display text, so re-numbering the roster does not change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId(u64);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "s{}", self.0)
    }
}

/// One retained line of the raw list, before identities are assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterLine {
    /// 1-based position among non-blank lines.
    pub position: usize,
    /// Line text with any leading number prefix removed.
    pub name: String,
}

impl RosterLine {
    /// Positional display label, e.g. `01.Alice`.
    pub fn label(&self) -> String {
        format_label(self.position, &self.name)
    }
}

fn format_label(position: usize, name: &str) -> String {
    format!("{:02}.{}", position, name)
}

/// Strip a leading `<digits>[.\s]*` prefix and surrounding whitespace.
pub fn clean_name(line: &str) -> String {
    let trimmed = line.trim();
    LEADING_NUMBER.replace(trimmed, "").trim().to_string()
}

/// Derive the ordered roster lines from raw multi-line text.
///
/// Blank lines are dropped and do not consume a position.
pub fn derive_roster(raw: &str) -> Vec<RosterLine> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| RosterLine { position: index + 1, name: clean_name(line) })
        .collect()
}

/// A roster line bound to a stable identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: StudentId,
    pub position: usize,
    pub name: String,
    label: String,
}

impl RosterEntry {
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Current roster plus the identity allocator.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from scratch; every line receives a fresh identity.
    pub fn from_text(raw: &str) -> Self {
        Self::new().rederive(raw)
    }

    /// Derive a new roster from `raw`, carrying identities over from `self`.
    ///
    /// The k-th occurrence of a name in the new text takes the identity of the k-th
    /// occurrence of the same name in the current roster. Unmatched lines get fresh ids.
    pub fn rederive(&self, raw: &str) -> Roster {
        let mut previous: HashMap<&str, VecDeque<StudentId>> = HashMap::new();
        for entry in &self.entries {
            previous.entry(entry.name.as_str()).or_default().push_back(entry.id);
        }

        let mut next_id = self.next_id;
        let entries = derive_roster(raw)
            .into_iter()
            .map(|line| {
                let id = previous
                    .get_mut(line.name.as_str())
                    .and_then(VecDeque::pop_front)
                    .unwrap_or_else(|| {
                        let id = StudentId(next_id);
                        next_id += 1;
                        id
                    });
                let label = line.label();
                RosterEntry { id, position: line.position, name: line.name, label }
            })
            .collect();

        Roster { entries, next_id }
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: StudentId) -> Option<&RosterEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: StudentId) -> bool {
        self.get(id).is_some()
    }

    pub fn by_position(&self, position: usize) -> Option<&RosterEntry> {
        self.entries.iter().find(|entry| entry.position == position)
    }

    /// Resolve a user query: a 1-based position, an exact label, or an exact name.
    pub fn resolve(&self, query: &str) -> Option<&RosterEntry> {
        let query = query.trim();
        if let Ok(position) = query.parse::<usize>() {
            return self.by_position(position);
        }
        self.entries
            .iter()
            .find(|entry| entry.label == query)
            .or_else(|| self.entries.iter().find(|entry| entry.name == query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn labels(raw: &str) -> Vec<String> {
        derive_roster(raw).iter().map(RosterLine::label).collect()
    }

    #[test]
    fn blank_lines_do_not_consume_positions() {
        assert_eq!(labels("A\n\nB"), vec!["01.A", "02.B"]);
        assert_eq!(labels("\n   \nA\n\t\n"), vec!["01.A"]);
    }

    #[test]
    fn leading_number_prefix_is_stripped() {
        assert_eq!(labels("3. 小明"), vec!["01.小明"]);
        assert_eq!(clean_name("7. Alice"), "Alice");
        assert_eq!(clean_name("12 Bob"), "Bob");
        assert_eq!(clean_name("  04.Carol  "), "Carol");
        assert_eq!(clean_name("Dave 2"), "Dave 2");
    }

    #[test]
    fn duplicates_become_distinct_entries() {
        let roster = Roster::from_text("Amy\nAmy");
        assert_eq!(roster.len(), 2);
        assert_ne!(roster.entries()[0].id, roster.entries()[1].id);
        assert_eq!(roster.entries()[1].label(), "02.Amy");
    }

    #[test]
    fn positions_beyond_99_are_not_truncated() {
        let raw: String = (0..100).map(|i| format!("n{}\n", i)).collect();
        let lines = derive_roster(&raw);
        assert_eq!(lines[99].label(), "100.n99");
    }

    #[test]
    fn rederive_keeps_identity_when_lines_are_reordered() {
        let first = Roster::from_text("Alice\nBob\nCarol");
        let alice = first.resolve("Alice").unwrap().id;
        let carol = first.resolve("Carol").unwrap().id;

        let second = first.rederive("Carol\nAlice");
        assert_eq!(second.resolve("Alice").unwrap().id, alice);
        assert_eq!(second.resolve("Alice").unwrap().label(), "02.Alice");
        assert_eq!(second.resolve("Carol").unwrap().id, carol);
        assert!(second.resolve("Bob").is_none());
    }

    #[test]
    fn rederive_assigns_fresh_ids_to_new_names() {
        let first = Roster::from_text("Alice");
        let second = first.rederive("Alice\nZed");
        let zed = second.resolve("Zed").unwrap().id;
        assert!(first.entries().iter().all(|entry| entry.id != zed));
    }

    #[test]
    fn rederive_matches_duplicates_by_occurrence() {
        let first = Roster::from_text("Amy\nAmy");
        let ids: Vec<_> = first.entries().iter().map(|e| e.id).collect();
        let second = first.rederive("Bob\nAmy\nAmy");
        let amys: Vec<_> =
            second.entries().iter().filter(|e| e.name == "Amy").map(|e| e.id).collect();
        assert_eq!(amys, ids);
    }

    #[test]
    fn resolve_accepts_position_label_or_name() {
        let roster = Roster::from_text("Alice\nBob");
        assert_eq!(roster.resolve("2").unwrap().name, "Bob");
        assert_eq!(roster.resolve("01.Alice").unwrap().name, "Alice");
        assert_eq!(roster.resolve(" Bob ").unwrap().position, 2);
        assert!(roster.resolve("3").is_none());
        assert!(roster.resolve("Nobody").is_none());
    }

    proptest! {
        #[test]
        fn one_label_per_non_blank_line(lines in proptest::collection::vec("[a-zA-Z ]{0,8}", 0..20)) {
            let raw = lines.join("\n");
            let derived = derive_roster(&raw);
            let expected = lines.iter().filter(|l| !l.trim().is_empty()).count();
            prop_assert_eq!(derived.len(), expected);
            for (index, line) in derived.iter().enumerate() {
                prop_assert_eq!(line.position, index + 1);
                let prefix = format!("{:02}.", index + 1);
                prop_assert!(line.label().starts_with(&prefix));
            }
        }

        #[test]
        fn derivation_is_deterministic(raw in "[a-z0-9.\\n ]{0,64}") {
            prop_assert_eq!(derive_roster(&raw), derive_roster(&raw));
        }
    }
}
