//! Command implementations for the MLB trivia CLI

pub mod game_data;
pub mod player_data;
pub mod seed_data;
