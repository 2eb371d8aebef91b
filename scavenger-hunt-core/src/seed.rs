//! Built-in content used when nothing has been saved yet.

use crate::domain::{Difficulty, LeaderboardEntry, Post};

/// Bootstrap posts and leaderboard.
///
/// Seed posts are permanent: the store refuses to delete them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub posts: Vec<Post>,
    pub leaderboard: Vec<LeaderboardEntry>,
}

impl Seed {
    pub fn new(posts: Vec<Post>, leaderboard: Vec<LeaderboardEntry>) -> Self {
        Self { posts, leaderboard }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

impl Default for Seed {
    fn default() -> Self {
        Self::new(vec![autumn_photo_challenge()], teams())
    }
}

fn autumn_photo_challenge() -> Post {
    Post {
        id: 1,
        title: "Day 1: Autumn Adventure Photo Challenge".to_string(),
        author: "Danielle".to_string(),
        date: "2024/01/25".to_string(),
        difficulty: Difficulty::Medium,
        time: "30 minutes".to_string(),
        description: "Hello, Scavenger Hunt Teams!\n\n\
            To kick off our scavenger hunt, each team member will need to find and \
            photograph a unique item that embodies the essence of fall. Once everyone \
            has their photos, the team can work together to compile them into a collage \
            representing your team's autumn adventure."
            .to_string(),
        hints: vec![
            "Ensure your team's name is included in your submission".to_string(),
            "To receive full points, your team's nominated captain must post the collage \
             in the Microsoft Teams General channel"
                .to_string(),
            "Include a fun fall fact about one of the items in your collage for an \
             additional 5 points"
                .to_string(),
            "Create a unique caption (one per team member) to earn a total of 5 extra points"
                .to_string(),
            "Submissions are due by 5:00 PM EST. Happy snapping! 🍁🌟".to_string(),
        ],
    }
}

fn team(id: u64, name: &str, members: &[&str]) -> LeaderboardEntry {
    LeaderboardEntry {
        id,
        name: name.to_string(),
        score: 0,
        members: members.iter().map(|m| m.to_string()).collect(),
    }
}

fn teams() -> Vec<LeaderboardEntry> {
    vec![
        team(1, "Wicked Wheaties", &["Alex", "Janelle O.", "Jonathan", "Larissa", "Leanne"]),
        team(2, "Artificially Intelligent", &["Amy", "Drew", "Jim", "Michelle", "Matt E."]),
        team(3, "Falls to the Wall", &["Emilie", "Craig", "Janel E.", "Kate", "Luis"]),
        team(4, "Harvest Hustlers", &["James", "Kari", "Ciera", "Mallory", "Toni"]),
        team(
            5,
            "Not the Droids You're Looking For",
            &["Lauren O.", "Lara", "Nate", "Meagan", "Mitch"],
        ),
        team(6, "Nutmeg Hustlers", &["Lauren H.", "Kevin", "Shannon", "Shane", "Yovo"]),
    ]
}
