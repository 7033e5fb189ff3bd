//! Per-team character quotas by player count

use super::Team;

/// Smallest supported table size.
pub const MIN_PLAYERS: u8 = 5;
/// Largest supported table size.
pub const MAX_PLAYERS: u8 = 15;

/// Required character counts per team for one player count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamQuota {
    pub townsfolk: u8,
    pub outsider: u8,
    pub minion: u8,
    pub demon: u8,
}

impl TeamQuota {
    pub fn total(&self) -> u8 {
        self.townsfolk + self.outsider + self.minion + self.demon
    }

    pub fn for_team(&self, team: Team) -> u8 {
        match team {
            Team::Townsfolk => self.townsfolk,
            Team::Outsider => self.outsider,
            Team::Minion => self.minion,
            Team::Demon => self.demon,
        }
    }
}

/// Standard distribution for 5..=15 players. Row N's counts sum to N.
const QUOTA_TABLE: [TeamQuota; 11] = [
    TeamQuota { townsfolk: 3, outsider: 0, minion: 1, demon: 1 }, // 5
    TeamQuota { townsfolk: 3, outsider: 1, minion: 1, demon: 1 }, // 6
    TeamQuota { townsfolk: 5, outsider: 0, minion: 1, demon: 1 }, // 7
    TeamQuota { townsfolk: 5, outsider: 1, minion: 1, demon: 1 }, // 8
    TeamQuota { townsfolk: 5, outsider: 2, minion: 1, demon: 1 }, // 9
    TeamQuota { townsfolk: 7, outsider: 0, minion: 2, demon: 1 }, // 10
    TeamQuota { townsfolk: 7, outsider: 1, minion: 2, demon: 1 }, // 11
    TeamQuota { townsfolk: 7, outsider: 2, minion: 2, demon: 1 }, // 12
    TeamQuota { townsfolk: 9, outsider: 0, minion: 3, demon: 1 }, // 13
    TeamQuota { townsfolk: 9, outsider: 1, minion: 3, demon: 1 }, // 14
    TeamQuota { townsfolk: 9, outsider: 2, minion: 3, demon: 1 }, // 15
];

/// Look up the quota row for a player count, `None` outside 5..=15.
pub fn quota_for(player_count: u8) -> Option<TeamQuota> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
        return None;
    }
    Some(QUOTA_TABLE[(player_count - MIN_PLAYERS) as usize])
}
