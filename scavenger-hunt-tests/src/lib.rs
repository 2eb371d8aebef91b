use cucumber::World;
use scavenger_hunt_core::{
    AuthConfig, AuthGate, ContentStore, EntryId, FixedClock, LeaderboardEntry, MemoryStorage,
    Post, PostId, Seed, StoreCommand, StoreConfig, StoreEvent,
};
use std::collections::HashMap;

pub type HuntStore = ContentStore<MemoryStorage, FixedClock>;

/// Date every scenario treats as "today"
pub const TODAY: &str = "10/19/2026";

#[derive(Debug, World)]
#[world(init = Self::new)]
pub struct HuntWorld {
    /// Content store (the system under test); `None` until a scenario opens it
    pub store: Option<HuntStore>,

    /// Backing storage while the store is closed
    pub storage: MemoryStorage,

    /// Bootstrap content for the next `open()`
    pub seed: Seed,

    pub today: String,

    /// Last event emitted (for assertions)
    pub last_event: Option<StoreEvent>,

    /// Track post IDs by title
    pub post_ids: HashMap<String, PostId>,

    /// Track leaderboard entry IDs by team name
    pub entry_ids: HashMap<String, EntryId>,

    pub gate: AuthGate,

    pub last_login: Option<bool>,
}

impl HuntWorld {
    pub fn new() -> Self {
        Self {
            store: None,
            storage: MemoryStorage::new(),
            seed: Seed::default(),
            today: TODAY.to_string(),
            last_event: None,
            post_ids: HashMap::new(),
            entry_ids: HashMap::new(),
            gate: AuthGate::new(AuthConfig::new("admin", "hunt-master")),
            last_login: None,
        }
    }

    /// Build the store over the current storage and seed, closing any
    /// store that is already open
    pub fn open(&mut self) {
        if let Some(store) = self.store.take() {
            self.storage = store.into_storage();
        }

        let store = ContentStore::builder(self.storage.clone())
            .seed(self.seed.clone())
            .config(StoreConfig::default())
            .clock(FixedClock::new(self.today.clone()))
            .build();

        for post in store.posts() {
            self.post_ids.insert(post.title.clone(), post.id);
        }
        for entry in store.leaderboard() {
            self.entry_ids.insert(entry.name.clone(), entry.id);
        }

        self.store = Some(store);
    }

    pub fn store(&self) -> &HuntStore {
        self.store.as_ref().expect("Store not opened")
    }

    /// Open the store on first use
    pub fn store_mut(&mut self) -> &mut HuntStore {
        if self.store.is_none() {
            self.open();
        }
        self.store.as_mut().expect("Store not opened")
    }

    /// Execute a command and store the result
    pub fn execute(&mut self, command: StoreCommand) -> &StoreEvent {
        let event = self.store_mut().handle_command(command);

        match &event {
            StoreEvent::PostAdded { post } | StoreEvent::PostUpdated { post } => {
                self.post_ids.insert(post.title.clone(), post.id);
            }
            StoreEvent::EntryAdded { entry } | StoreEvent::EntryUpdated { entry } => {
                self.entry_ids.insert(entry.name.clone(), entry.id);
            }
            _ => {}
        }

        self.last_event.insert(event)
    }

    /// Get the last event (panics if none)
    pub fn last_event(&self) -> &StoreEvent {
        self.last_event.as_ref().expect("No command executed yet")
    }

    pub fn post_id(&self, title: &str) -> PostId {
        *self
            .post_ids
            .get(title)
            .unwrap_or_else(|| panic!("Post '{}' not found", title))
    }

    pub fn entry_id(&self, name: &str) -> EntryId {
        *self
            .entry_ids
            .get(name)
            .unwrap_or_else(|| panic!("Team '{}' not found", name))
    }

    pub fn post_by_title(&self, title: &str) -> &Post {
        let id = self.post_id(title);
        self.store()
            .post(id)
            .unwrap_or_else(|| panic!("Post '{}' is gone", title))
    }

    pub fn entry_by_name(&self, name: &str) -> &LeaderboardEntry {
        let id = self.entry_id(name);
        self.store()
            .leaderboard_entry(id)
            .unwrap_or_else(|| panic!("Team '{}' is gone", name))
    }
}

impl Default for HuntWorld {
    fn default() -> Self {
        Self::new()
    }
}
