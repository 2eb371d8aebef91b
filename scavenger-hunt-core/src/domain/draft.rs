use crate::domain::{parse_score, Difficulty, LeaderboardEntry, Post};

/// Errors from editing a draft's hint list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("Hint {index} out of range (draft has {len} hints)")]
    HintOutOfRange { index: usize, len: usize },
}

/// Post contents as edited in a form, before the store assigns
/// ID, author and date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub time: String,
    pub hints: Vec<String>,
}

impl Default for PostDraft {
    /// Blank form with a single empty hint row
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            difficulty: Difficulty::Easy,
            time: String::new(),
            hints: vec![String::new()],
        }
    }
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        difficulty: Difficulty,
        time: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            difficulty,
            time: time.into(),
            hints: Vec::new(),
        }
    }

    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints = hints.into_iter().map(Into::into).collect();
        self
    }

    /// Append an empty hint
    pub fn add_hint(&mut self) {
        self.hints.push(String::new());
    }

    pub fn set_hint(&mut self, index: usize, text: impl Into<String>) -> Result<(), DraftError> {
        let len = self.hints.len();
        let hint = self
            .hints
            .get_mut(index)
            .ok_or(DraftError::HintOutOfRange { index, len })?;
        *hint = text.into();
        Ok(())
    }

    pub fn remove_hint(&mut self, index: usize) -> Result<String, DraftError> {
        if index >= self.hints.len() {
            return Err(DraftError::HintOutOfRange {
                index,
                len: self.hints.len(),
            });
        }
        Ok(self.hints.remove(index))
    }
}

impl From<&Post> for PostDraft {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            description: post.description.clone(),
            difficulty: post.difficulty,
            time: post.time.clone(),
            hints: post.hints.clone(),
        }
    }
}

/// Leaderboard entry contents before the store assigns an ID
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub name: String,
    pub score: i64,
    pub members: Vec<String>,
}

impl EntryDraft {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: name.into(),
            score,
            members: Vec::new(),
        }
    }

    /// Build from form text; a score that does not parse becomes `0`
    pub fn parse(name: impl Into<String>, score: &str) -> Self {
        Self::new(name, parse_score(score))
    }

    pub fn with_members(mut self, members: Vec<String>) -> Self {
        self.members = members;
        self
    }
}

impl From<&LeaderboardEntry> for EntryDraft {
    fn from(entry: &LeaderboardEntry) -> Self {
        Self {
            name: entry.name.clone(),
            score: entry.score,
            members: entry.members.clone(),
        }
    }
}
