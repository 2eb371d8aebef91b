use crate::domain::ids::next_free_id;
use crate::domain::{Post, PostId};
use std::collections::HashSet;

/// Why a post could not be removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveRefusal {
    NotFound,
    Protected,
}

/// Posts in display order plus the set of IDs that may never be deleted.
///
/// Order is insertion order; nothing here re-sorts posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFeed {
    posts: Vec<Post>,
    protected: HashSet<PostId>,
}

impl PostFeed {
    /// Feed made of seed posts only. Every seed post is protected.
    pub fn from_seed(seed: Vec<Post>) -> Self {
        let protected = seed.iter().map(|p| p.id).collect();
        Self {
            posts: seed,
            protected,
        }
    }

    /// Merge previously saved posts over the seed set.
    ///
    /// Seed posts come first in seed order; a saved post with a seed ID
    /// replaces that seed post in place. Saved posts with other IDs follow
    /// in saved order. Duplicate saved IDs keep their first occurrence.
    pub fn merged(seed: Vec<Post>, saved: Vec<Post>) -> Self {
        let protected: HashSet<PostId> = seed.iter().map(|p| p.id).collect();
        let mut seen = HashSet::new();
        let mut overrides = Vec::new();
        let mut extras = Vec::new();

        for post in saved {
            if !seen.insert(post.id) {
                tracing::warn!("Dropping duplicate saved post {}", post.id);
                continue;
            }
            if protected.contains(&post.id) {
                overrides.push(post);
            } else {
                extras.push(post);
            }
        }

        let mut posts: Vec<Post> = seed
            .into_iter()
            .map(|seed_post| {
                match overrides.iter().position(|p| p.id == seed_post.id) {
                    Some(index) => overrides.swap_remove(index),
                    None => seed_post,
                }
            })
            .collect();
        posts.extend(extras);

        Self { posts, protected }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn get(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    pub fn is_protected(&self, id: PostId) -> bool {
        self.protected.contains(&id)
    }

    /// Next free ID: one past the highest ID in the feed (seed included)
    pub fn next_id(&self) -> PostId {
        next_free_id(self.posts.iter().map(|p| p.id))
    }

    pub fn push(&mut self, post: Post) {
        self.posts.push(post);
    }

    pub fn remove(&mut self, id: PostId) -> Result<Post, RemoveRefusal> {
        if self.is_protected(id) {
            return Err(RemoveRefusal::Protected);
        }

        let index = self
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(RemoveRefusal::NotFound)?;

        Ok(self.posts.remove(index))
    }
}
