use crate::application::{StoreCommand, StoreEvent};
use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::domain::{
    EntryDraft, EntryId, Leaderboard, LeaderboardEntry, Post, PostDraft, PostFeed, PostId,
    RankedEntry, RemoveRefusal,
};
use crate::seed::Seed;
use crate::storage::{KeyValueStore, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Errors returned by store updates
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Leaderboard entry not found: {0}")]
    EntryNotFound(EntryId),
}

/// Posts and leaderboard at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub posts: Vec<Post>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

/// A store that has not loaded anything yet.
///
/// `build()` reads the saved blobs and returns a ready `ContentStore`.
#[derive(Debug)]
pub struct StoreBuilder<S, C = SystemClock> {
    storage: S,
    clock: C,
    seed: Seed,
    config: StoreConfig,
}

impl<S: KeyValueStore> StoreBuilder<S, SystemClock> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            clock: SystemClock,
            seed: Seed::default(),
            config: StoreConfig::default(),
        }
    }
}

impl<S: KeyValueStore, C: Clock> StoreBuilder<S, C> {
    pub fn seed(mut self, seed: Seed) -> Self {
        self.seed = seed;
        self
    }

    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    pub fn clock<C2: Clock>(self, clock: C2) -> StoreBuilder<S, C2> {
        StoreBuilder {
            storage: self.storage,
            clock,
            seed: self.seed,
            config: self.config,
        }
    }

    pub fn build(self) -> ContentStore<S, C> {
        let Seed {
            posts: seed_posts,
            leaderboard: seed_leaderboard,
        } = self.seed;

        let feed = match load::<_, Vec<Post>>(&self.storage, &self.config.posts_key) {
            Some(saved) => PostFeed::merged(seed_posts, saved),
            None => PostFeed::from_seed(seed_posts),
        };

        let leaderboard = Leaderboard::from_entries(
            load(&self.storage, &self.config.leaderboard_key).unwrap_or(seed_leaderboard),
        );

        tracing::info!(
            "Content store ready: {} posts, {} leaderboard entries",
            feed.len(),
            leaderboard.len()
        );

        ContentStore {
            storage: self.storage,
            clock: self.clock,
            config: self.config,
            feed,
            leaderboard,
        }
    }
}

/// Read and decode one blob. Missing, unreadable and malformed values all
/// come back as `None`.
fn load<S: KeyValueStore, T: DeserializeOwned>(storage: &S, key: &str) -> Option<T> {
    match storage.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("Discarding malformed '{}' blob, using seed data: {}", key, e);
                None
            }
        },
        Ok(None) => {
            tracing::debug!("Nothing saved under '{}', using seed data", key);
            None
        }
        Err(e) => {
            tracing::warn!("Could not read '{}', using seed data: {}", key, e);
            None
        }
    }
}

fn save<S: KeyValueStore, T: Serialize + ?Sized>(storage: &mut S, key: &str, value: &T) {
    let result = serde_json::to_string(value)
        .map_err(StorageError::from)
        .and_then(|json| storage.set(key, &json));

    if let Err(e) = result {
        tracing::error!("Failed to persist '{}': {}", key, e);
    }
}

/// Single source of truth for the challenge feed and the leaderboard.
///
/// Every successful mutation rewrites the affected collection to storage
/// before returning.
#[derive(Debug)]
pub struct ContentStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    config: StoreConfig,
    feed: PostFeed,
    leaderboard: Leaderboard,
}

impl<S: KeyValueStore> ContentStore<S, SystemClock> {
    pub fn builder(storage: S) -> StoreBuilder<S, SystemClock> {
        StoreBuilder::new(storage)
    }

    /// Load with the default seed, config and system clock
    pub fn open(storage: S) -> Self {
        StoreBuilder::new(storage).build()
    }
}

impl<S: KeyValueStore, C: Clock> ContentStore<S, C> {
    // ===== Queries =====

    pub fn posts(&self) -> &[Post] {
        self.feed.posts()
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.feed.get(id)
    }

    /// Whether a post is seed content and cannot be deleted
    pub fn is_protected(&self, id: PostId) -> bool {
        self.feed.is_protected(id)
    }

    /// Entries sorted by descending score
    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        self.leaderboard.entries()
    }

    pub fn leaderboard_entry(&self, id: EntryId) -> Option<&LeaderboardEntry> {
        self.leaderboard.get(id)
    }

    /// Best `n` entries, e.g. for a podium or a "top 5" teaser
    pub fn top_entries(&self, n: usize) -> &[LeaderboardEntry] {
        self.leaderboard.top(n)
    }

    pub fn rank_of(&self, id: EntryId) -> Option<usize> {
        self.leaderboard.rank_of(id)
    }

    pub fn search_leaderboard(&self, term: &str) -> Vec<RankedEntry<'_>> {
        self.leaderboard.search(term)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            posts: self.feed.posts().to_vec(),
            leaderboard: self.leaderboard.entries().to_vec(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the storage backend, e.g. to reopen it
    pub fn into_storage(self) -> S {
        self.storage
    }

    // ===== Posts =====

    pub fn add_post(&mut self, draft: PostDraft) -> Post {
        let post = Post {
            id: self.feed.next_id(),
            title: draft.title,
            author: self.config.curator.clone(),
            date: self.today(),
            difficulty: draft.difficulty,
            time: draft.time,
            description: draft.description,
            hints: draft.hints,
        };

        self.feed.push(post.clone());
        tracing::info!("Added post {} '{}'", post.id, post.title);

        self.persist_posts();
        post
    }

    /// Replace a post's contents in place. ID, author and position are kept;
    /// the date is re-stamped.
    pub fn update_post(&mut self, id: PostId, draft: PostDraft) -> Result<&Post, StoreError> {
        let date = self.today();
        let post = self.feed.get_mut(id).ok_or(StoreError::PostNotFound(id))?;

        post.title = draft.title;
        post.description = draft.description;
        post.difficulty = draft.difficulty;
        post.time = draft.time;
        post.hints = draft.hints;
        post.date = date;
        tracing::info!("Updated post {}", id);

        self.persist_posts();
        self.feed.get(id).ok_or(StoreError::PostNotFound(id))
    }

    /// Remove a post. Seed posts and unknown IDs are ignored.
    pub fn delete_post(&mut self, id: PostId) -> Option<Post> {
        match self.feed.remove(id) {
            Ok(post) => {
                tracing::info!("Deleted post {}", id);
                self.persist_posts();
                Some(post)
            }
            Err(RemoveRefusal::Protected) => {
                tracing::debug!("Refusing to delete seed post {}", id);
                None
            }
            Err(RemoveRefusal::NotFound) => {
                tracing::debug!("Post {} not found, nothing to delete", id);
                None
            }
        }
    }

    // ===== Leaderboard =====

    pub fn add_leaderboard_entry(&mut self, draft: EntryDraft) -> LeaderboardEntry {
        let entry = self.leaderboard.insert(draft);
        tracing::info!(
            "Added leaderboard entry {} '{}' ({})",
            entry.id,
            entry.name,
            entry.score
        );

        self.persist_leaderboard();
        entry
    }

    pub fn update_leaderboard_entry(
        &mut self,
        id: EntryId,
        draft: EntryDraft,
    ) -> Result<&LeaderboardEntry, StoreError> {
        if self.leaderboard.update(id, draft).is_none() {
            return Err(StoreError::EntryNotFound(id));
        }
        tracing::info!("Updated leaderboard entry {}", id);

        self.persist_leaderboard();
        self.leaderboard.get(id).ok_or(StoreError::EntryNotFound(id))
    }

    pub fn set_score(&mut self, id: EntryId, score: i64) -> Result<&LeaderboardEntry, StoreError> {
        if self.leaderboard.set_score(id, score).is_none() {
            return Err(StoreError::EntryNotFound(id));
        }
        tracing::info!("Leaderboard entry {} now has {} points", id, score);

        self.persist_leaderboard();
        self.leaderboard.get(id).ok_or(StoreError::EntryNotFound(id))
    }

    pub fn delete_leaderboard_entry(&mut self, id: EntryId) -> Option<LeaderboardEntry> {
        let entry = self.leaderboard.remove(id);

        match &entry {
            Some(_) => {
                tracing::info!("Deleted leaderboard entry {}", id);
                self.persist_leaderboard();
            }
            None => tracing::debug!("Leaderboard entry {} not found, nothing to delete", id),
        }

        entry
    }

    // ===== Commands =====

    /// Run a command and report what happened
    pub fn handle_command(&mut self, command: StoreCommand) -> StoreEvent {
        let name = command.name();

        match command {
            StoreCommand::AddPost { draft } => StoreEvent::PostAdded {
                post: self.add_post(draft),
            },

            StoreCommand::UpdatePost { id, draft } => match self.update_post(id, draft) {
                Ok(post) => StoreEvent::PostUpdated { post: post.clone() },
                Err(e) => failed(name, e),
            },

            StoreCommand::DeletePost { id } => {
                let protected = self.is_protected(id);
                match self.delete_post(id) {
                    Some(post) => StoreEvent::PostDeleted { post },
                    None if protected => ignored(name, format!("Post {} is seed content", id)),
                    None => ignored(name, StoreError::PostNotFound(id).to_string()),
                }
            }

            StoreCommand::AddEntry { draft } => StoreEvent::EntryAdded {
                entry: self.add_leaderboard_entry(draft),
            },

            StoreCommand::UpdateEntry { id, draft } => {
                match self.update_leaderboard_entry(id, draft) {
                    Ok(entry) => StoreEvent::EntryUpdated {
                        entry: entry.clone(),
                    },
                    Err(e) => failed(name, e),
                }
            }

            StoreCommand::SetScore { id, score } => match self.set_score(id, score) {
                Ok(entry) => StoreEvent::EntryUpdated {
                    entry: entry.clone(),
                },
                Err(e) => failed(name, e),
            },

            StoreCommand::DeleteEntry { id } => match self.delete_leaderboard_entry(id) {
                Some(entry) => StoreEvent::EntryDeleted { entry },
                None => ignored(name, StoreError::EntryNotFound(id).to_string()),
            },
        }
    }

    // ===== Internals =====

    fn today(&self) -> String {
        self.clock.today(&self.config.date_format)
    }

    fn persist_posts(&mut self) {
        save(&mut self.storage, &self.config.posts_key, self.feed.posts());
    }

    fn persist_leaderboard(&mut self) {
        save(
            &mut self.storage,
            &self.config.leaderboard_key,
            self.leaderboard.entries(),
        );
    }
}

fn failed(command: &str, error: StoreError) -> StoreEvent {
    StoreEvent::CommandFailed {
        command: command.to_string(),
        reason: error.to_string(),
    }
}

fn ignored(command: &str, reason: String) -> StoreEvent {
    StoreEvent::Ignored {
        command: command.to_string(),
        reason,
    }
}
