use crate::domain::ids::next_free_id;
use crate::domain::EntryDraft;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Leaderboard entry ID (unique within the board)
pub type EntryId = u64;

/// A scored team or player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: EntryId,

    /// Team or player name
    pub name: String,

    pub score: i64,

    /// Team roster, empty for solo players
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
}

/// An entry paired with its 1-based position on the full board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    pub rank: usize,
    pub entry: &'a LeaderboardEntry,
}

/// Parse a score typed by a user.
///
/// Anything that is not an integer coerces to `0`.
pub fn parse_score(text: &str) -> i64 {
    match text.trim().parse::<i64>() {
        Ok(score) => score,
        Err(_) => {
            tracing::debug!("Unparseable score {:?}, using 0", text);
            0
        }
    }
}

/// Leaderboard kept in descending score order.
///
/// Every operation that inserts an entry or changes a score re-sorts the
/// board. The sort is stable, so tied entries keep their relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Build a board from entries in any order. Repeated IDs keep their
    /// first occurrence.
    pub fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|entry| {
                let first = seen.insert(entry.id);
                if !first {
                    tracing::warn!("Dropping duplicate leaderboard entry {}", entry.id);
                }
                first
            })
            .collect();

        let mut board = Self { entries };
        board.sort();
        board
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Next free ID: one past the highest ID on the board
    pub fn next_id(&self) -> EntryId {
        next_free_id(self.entries.iter().map(|e| e.id))
    }

    /// The `n` best-ranked entries, fewer when the board is shorter
    pub fn top(&self, n: usize) -> &[LeaderboardEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Insert a new entry and return it
    pub fn insert(&mut self, draft: EntryDraft) -> LeaderboardEntry {
        let entry = LeaderboardEntry {
            id: self.next_id(),
            name: draft.name,
            score: draft.score,
            members: draft.members,
        };

        self.entries.push(entry.clone());
        self.sort();
        entry
    }

    /// Replace name, score and members of an entry
    pub fn update(&mut self, id: EntryId, draft: EntryDraft) -> Option<&LeaderboardEntry> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        entry.name = draft.name;
        entry.score = draft.score;
        entry.members = draft.members;

        self.sort();
        self.get(id)
    }

    /// Change only the score of an entry
    pub fn set_score(&mut self, id: EntryId, score: i64) -> Option<&LeaderboardEntry> {
        let entry = self.entries.iter_mut().find(|e| e.id == id)?;
        entry.score = score;

        self.sort();
        self.get(id)
    }

    /// Remove an entry. Order of the rest is unaffected.
    pub fn remove(&mut self, id: EntryId) -> Option<LeaderboardEntry> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(index))
    }

    /// 1-based position of an entry
    pub fn rank_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id).map(|i| i + 1)
    }

    /// Entries whose name contains `term` (case-insensitive), with their
    /// rank on the full board
    pub fn search(&self, term: &str) -> Vec<RankedEntry<'_>> {
        let needle = term.trim().to_lowercase();

        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| needle.is_empty() || e.name.to_lowercase().contains(&needle))
            .map(|(i, entry)| RankedEntry {
                rank: i + 1,
                entry,
            })
            .collect()
    }

    fn sort(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
    }
}
