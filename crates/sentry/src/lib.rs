//! Sentry behavior for Watchpost: perception gating, idle look-around,
//! alert edge triggers, and pursuit.

pub mod agent;
pub mod config;
pub mod driver;
pub mod events;
pub mod perception;

pub use agent::*;
pub use config::*;
pub use driver::*;
pub use events::*;
pub use perception::*;
