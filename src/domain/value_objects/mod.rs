//! Value objects - Immutable objects defined by their attributes

mod quota;
mod team;

pub use quota::{quota_for, TeamQuota, MAX_PLAYERS, MIN_PLAYERS};
pub use team::Team;
