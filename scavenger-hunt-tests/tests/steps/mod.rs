mod auth_steps;
mod common_steps;
mod leaderboard_steps;
mod persistence_steps;
mod post_steps;
