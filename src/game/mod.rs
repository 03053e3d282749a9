//! Trivia game core: id registry, random selection, daily game memo
//!
//! Dependency order mirrors the data flow: `registry` reads the seeded id
//! lists, `selector` draws from them and fetches box scores, `daily` wraps
//! the selector with the once-per-calendar-day memo.

pub mod daily;
pub mod registry;
pub mod selector;


pub use daily::DailyGameMemo;
pub use registry::GameIdRegistry;
pub use selector::{FetchFailurePolicy, RandomGameSelector, SelectedGame, SelectionMode};
