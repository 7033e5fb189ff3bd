//! Generation service - random, manual and hybrid script assembly

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::domain::entities::Character;
use crate::domain::services::{derive_night_order, NightOrder};
use crate::domain::value_objects::{quota_for, Team, MAX_PLAYERS, MIN_PLAYERS};

/// How the character list is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Fill every team slot by uniform draw from the pool.
    Random,
    /// Use the caller's selection verbatim, validated against the quota.
    Manual,
    /// Keep the caller's selection and random-fill the remainder.
    Hybrid,
}

/// Lifecycle of a generation run, tracked on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationState {
    #[default]
    Idle,
    Generating,
    Done,
    Rejected,
}

/// A successful generation: the assembled list plus its night order.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub characters: Vec<Character>,
    pub night_order: NightOrder,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error(
        "player count {count} is outside the supported range {min}..={max}",
        count = .0,
        min = MIN_PLAYERS,
        max = MAX_PLAYERS
    )]
    UnsupportedPlayerCount(u8),
    /// The pool cannot satisfy one or more team quotas. Every deficient
    /// team is listed, not just the first one hit.
    #[error("not enough characters in the pool: {}", .shortfalls.join("; "))]
    Infeasible { shortfalls: Vec<String> },
    /// A manual selection deviates from the quota row. Every deviating
    /// team is listed.
    #[error("selection does not match the quota: {}", .mismatches.join("; "))]
    QuotaMismatch { mismatches: Vec<String> },
}

/// Assemble a character list for `player_count` players.
///
/// `pool` is the (already filtered) catalog subset available for random
/// draws; `preselected` is the caller's selection for manual and hybrid
/// modes and ignored in random mode. The rng is injected so callers can
/// supply a seeded one.
pub fn generate<R: Rng>(
    pool: &[&Character],
    mode: GenerationMode,
    player_count: u8,
    preselected: &[Character],
    rng: &mut R,
) -> Result<GenerationOutcome, GenerationError> {
    let quota =
        quota_for(player_count).ok_or(GenerationError::UnsupportedPlayerCount(player_count))?;

    let characters = match mode {
        GenerationMode::Random => {
            debug!(player_count, pool = pool.len(), "random generation");
            fill_from_pool(pool, &[], player_count, rng)?
        }
        GenerationMode::Manual => {
            let mut mismatches = Vec::new();
            for team in Team::ALL {
                let have = preselected.iter().filter(|c| c.team == team).count() as u8;
                let need = quota.for_team(team);
                if have < need {
                    mismatches.push(format!("{} is {} short ({}/{})", team, need - have, have, need));
                } else if have > need {
                    mismatches.push(format!("{} is {} over ({}/{})", team, have - need, have, need));
                }
            }
            if !mismatches.is_empty() {
                return Err(GenerationError::QuotaMismatch { mismatches });
            }
            preselected.to_vec()
        }
        GenerationMode::Hybrid => {
            debug!(
                player_count,
                preselected = preselected.len(),
                pool = pool.len(),
                "hybrid generation"
            );
            fill_from_pool(pool, preselected, player_count, rng)?
        }
    };

    let night_order = derive_night_order(&characters);
    Ok(GenerationOutcome { characters, night_order })
}

/// Random-fill each team up to quota, keeping `preselected` untouched.
///
/// Teams are processed in the fixed generation order so a pool
/// exhaustion always surfaces the same way. A team already at or over
/// quota gets no fill (nothing is ever removed).
fn fill_from_pool<R: Rng>(
    pool: &[&Character],
    preselected: &[Character],
    player_count: u8,
    rng: &mut R,
) -> Result<Vec<Character>, GenerationError> {
    let quota =
        quota_for(player_count).ok_or(GenerationError::UnsupportedPlayerCount(player_count))?;

    let mut selected: Vec<Character> = preselected.to_vec();
    let mut shortfalls = Vec::new();

    for team in Team::GENERATION_ORDER {
        let already = selected.iter().filter(|c| c.team == team).count() as u8;
        let remaining = quota.for_team(team).saturating_sub(already);
        if remaining == 0 {
            continue;
        }

        let mut team_pool: Vec<&Character> = pool
            .iter()
            .filter(|c| c.team == team && !selected.iter().any(|s| s.id == c.id))
            .copied()
            .collect();

        if (team_pool.len() as u8) < remaining {
            shortfalls.push(format!(
                "{} needs {} more but only {} available",
                team,
                remaining,
                team_pool.len()
            ));
            continue;
        }

        // Fisher-Yates, then take the head.
        team_pool.shuffle(rng);
        selected.extend(team_pool[..remaining as usize].iter().map(|c| (**c).clone()));
    }

    if !shortfalls.is_empty() {
        return Err(GenerationError::Infeasible { shortfalls });
    }
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_pool(townsfolk: usize, outsiders: usize, minions: usize, demons: usize) -> Vec<Character> {
        let mut pool = Vec::new();
        for i in 0..townsfolk {
            pool.push(Character::new(format!("tf_{}", i), format!("Townsfolk {}", i), Team::Townsfolk));
        }
        for i in 0..outsiders {
            pool.push(Character::new(format!("os_{}", i), format!("Outsider {}", i), Team::Outsider));
        }
        for i in 0..minions {
            pool.push(Character::new(format!("mn_{}", i), format!("Minion {}", i), Team::Minion));
        }
        for i in 0..demons {
            pool.push(Character::new(format!("dm_{}", i), format!("Demon {}", i), Team::Demon));
        }
        pool
    }

    fn refs(pool: &[Character]) -> Vec<&Character> {
        pool.iter().collect()
    }

    fn team_count(characters: &[Character], team: Team) -> u8 {
        characters.iter().filter(|c| c.team == team).count() as u8
    }

    #[test]
    fn test_random_matches_quota_for_every_player_count() {
        let pool = make_pool(13, 4, 4, 2);
        let mut rng = StdRng::seed_from_u64(7);
        for player_count in 5..=15u8 {
            let quota = quota_for(player_count).expect("count is in range");
            let outcome = generate(&refs(&pool), GenerationMode::Random, player_count, &[], &mut rng)
                .expect("pool is large enough");
            assert_eq!(outcome.characters.len() as u8, player_count);
            for team in Team::ALL {
                assert_eq!(
                    team_count(&outcome.characters, team),
                    quota.for_team(team),
                    "{} players, {}",
                    player_count,
                    team
                );
            }
        }
    }

    #[test]
    fn test_random_draws_are_distinct() {
        let pool = make_pool(13, 4, 4, 2);
        let mut rng = StdRng::seed_from_u64(11);
        let outcome = generate(&refs(&pool), GenerationMode::Random, 15, &[], &mut rng)
            .expect("pool is large enough");
        let mut ids: Vec<_> = outcome.characters.iter().map(|c| c.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 15);
    }

    #[test]
    fn test_random_seven_player_scenario() {
        // Quota for 7 is 5/0/1/1; pool has no outsiders and none are needed.
        let pool = make_pool(6, 0, 2, 1);
        let mut rng = StdRng::seed_from_u64(3);
        let outcome = generate(&refs(&pool), GenerationMode::Random, 7, &[], &mut rng)
            .expect("feasible pool");
        assert_eq!(team_count(&outcome.characters, Team::Townsfolk), 5);
        assert_eq!(team_count(&outcome.characters, Team::Outsider), 0);
        assert_eq!(team_count(&outcome.characters, Team::Minion), 1);
        assert_eq!(team_count(&outcome.characters, Team::Demon), 1);
        assert_eq!(outcome.characters.len(), 7);
    }

    #[test]
    fn test_random_reports_every_deficient_team() {
        // 10 players need 7 townsfolk and 2 minions; pool has 5 and 1.
        let pool = make_pool(5, 2, 1, 1);
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate(&refs(&pool), GenerationMode::Random, 10, &[], &mut rng)
            .expect_err("pool is short on two teams");
        match err {
            GenerationError::Infeasible { shortfalls } => {
                assert!(shortfalls.iter().any(|s| s.contains("townsfolk")));
                assert!(shortfalls.iter().any(|s| s.contains("minion")));
                assert_eq!(shortfalls.len(), 2);
            }
            other => panic!("expected Infeasible, got {:?}", other),
        }
    }

    #[test]
    fn test_manual_verbatim_selection() {
        let pool = make_pool(13, 4, 4, 2);
        let preselected: Vec<Character> = [
            "tf_0", "tf_1", "tf_2", "mn_0", "dm_0",
        ]
        .iter()
        .map(|id| pool.iter().find(|c| c.id == *id).expect("id exists").clone())
        .collect();

        let mut rng = StdRng::seed_from_u64(5);
        let outcome = generate(&refs(&pool), GenerationMode::Manual, 5, &preselected, &mut rng)
            .expect("selection matches the quota");
        let ids: Vec<_> = outcome.characters.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["tf_0", "tf_1", "tf_2", "mn_0", "dm_0"]);
    }

    #[test]
    fn test_manual_reports_every_deviating_team() {
        // 7 players, quota 5/0/1/1. Hand in 7 townsfolk and 0 minions.
        let pool = make_pool(13, 4, 4, 2);
        let mut preselected: Vec<Character> = pool[..7].to_vec();
        preselected.push(pool.iter().find(|c| c.id == "dm_0").expect("id exists").clone());

        let mut rng = StdRng::seed_from_u64(5);
        let err = generate(&refs(&pool), GenerationMode::Manual, 7, &preselected, &mut rng)
            .expect_err("selection deviates on two teams");
        match err {
            GenerationError::QuotaMismatch { mismatches } => {
                assert!(mismatches.iter().any(|m| m.contains("townsfolk") && m.contains("over")));
                assert!(mismatches.iter().any(|m| m.contains("minion") && m.contains("short")));
            }
            other => panic!("expected QuotaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_manual_five_player_shortfall_scenario() {
        // 5 players, quota 3/0/1/1; hand in only 2 townsfolk.
        let pool = make_pool(13, 4, 4, 2);
        let preselected: Vec<Character> = ["tf_0", "tf_1", "mn_0", "dm_0"]
            .iter()
            .map(|id| pool.iter().find(|c| c.id == *id).expect("id exists").clone())
            .collect();

        let mut rng = StdRng::seed_from_u64(5);
        let err = generate(&refs(&pool), GenerationMode::Manual, 5, &preselected, &mut rng)
            .expect_err("one townsfolk short");
        match err {
            GenerationError::QuotaMismatch { mismatches } => {
                assert_eq!(mismatches.len(), 1);
                assert!(mismatches[0].contains("townsfolk"));
                assert!(mismatches[0].contains("1 short"));
            }
            other => panic!("expected QuotaMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_hybrid_keeps_preselection_and_fills_rest() {
        let pool = make_pool(13, 4, 4, 2);
        let preselected: Vec<Character> = ["tf_0", "dm_1"]
            .iter()
            .map(|id| pool.iter().find(|c| c.id == *id).expect("id exists").clone())
            .collect();

        let mut rng = StdRng::seed_from_u64(9);
        let outcome = generate(&refs(&pool), GenerationMode::Hybrid, 7, &preselected, &mut rng)
            .expect("feasible fill");

        // Preselection survives untouched at the front.
        assert_eq!(outcome.characters[0].id, "tf_0");
        assert_eq!(outcome.characters[1].id, "dm_1");

        // Quota met, no duplicate ids.
        assert_eq!(outcome.characters.len(), 7);
        assert_eq!(team_count(&outcome.characters, Team::Townsfolk), 5);
        assert_eq!(team_count(&outcome.characters, Team::Demon), 1);
        let mut ids: Vec<_> = outcome.characters.iter().map(|c| c.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_hybrid_never_removes_over_quota_selection() {
        // Two demons preselected against a quota of one: both stay and
        // no further demon is drawn.
        let pool = make_pool(13, 4, 4, 2);
        let preselected: Vec<Character> = ["dm_0", "dm_1"]
            .iter()
            .map(|id| pool.iter().find(|c| c.id == *id).expect("id exists").clone())
            .collect();

        let mut rng = StdRng::seed_from_u64(2);
        let outcome = generate(&refs(&pool), GenerationMode::Hybrid, 5, &preselected, &mut rng)
            .expect("fill is feasible for the remaining teams");
        assert!(outcome.characters.iter().any(|c| c.id == "dm_0"));
        assert!(outcome.characters.iter().any(|c| c.id == "dm_1"));
        assert_eq!(team_count(&outcome.characters, Team::Demon), 2);
        assert_eq!(team_count(&outcome.characters, Team::Townsfolk), 3);
        assert_eq!(team_count(&outcome.characters, Team::Minion), 1);
    }

    #[test]
    fn test_unsupported_player_count() {
        let pool = make_pool(5, 0, 1, 1);
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate(&refs(&pool), GenerationMode::Random, 4, &[], &mut rng)
            .expect_err("4 players is below the table");
        assert!(matches!(err, GenerationError::UnsupportedPlayerCount(4)));
    }
}
