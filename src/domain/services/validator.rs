//! Draft validation - issues block export, warnings never do

use crate::domain::entities::ScriptDraft;
use crate::domain::value_objects::{quota_for, Team, MAX_PLAYERS, MIN_PLAYERS};

/// Outcome of validating a draft.
///
/// `issues` are hard failures that block export. `warnings` are
/// advisory table-talk notes and never block anything.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Character pairs known to produce confusing table talk, with the note
/// shown to the script author. A fixed lookup, not a rule engine.
const CONFUSING_PAIRS: &[(&str, &str, &str)] = &[
    (
        "fortune_teller",
        "recluse",
        "Fortune Teller and Recluse: the Recluse can register as the Demon, so 'yes' pings are unreliable all game",
    ),
    (
        "investigator",
        "recluse",
        "Investigator and Recluse: the Recluse may appear in the Minion ping and derail the investigation",
    ),
    (
        "washerwoman",
        "spy",
        "Washerwoman and Spy: the Spy can register as the shown Townsfolk, poisoning a trusted start-of-game read",
    ),
    (
        "virgin",
        "spy",
        "Virgin and Spy: a Spy nomination may register as a Townsfolk and trigger a false confirmation",
    ),
    (
        "chef",
        "recluse",
        "Chef and Recluse: the Recluse can inflate the evil-pair count on night one",
    ),
    (
        "undertaker",
        "spy",
        "Undertaker and Spy: an executed Spy can show as any Townsfolk, inverting the Undertaker's information",
    ),
];

/// Validate a draft against the quota table and required fields.
///
/// Every deviating team produces its own issue line, so a selection
/// that is over on one team and short on another reports both.
pub fn validate_draft(draft: &ScriptDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    if draft.name.trim().is_empty() {
        report.issues.push("script name must not be empty".to_string());
    }
    if draft.author.trim().is_empty() {
        report.issues.push("script author must not be empty".to_string());
    }
    if draft.selected.is_empty() {
        report.issues.push("no characters selected".to_string());
    }

    match quota_for(draft.player_count) {
        None => {
            report.issues.push(format!(
                "player count {} is outside the supported range {}..={}",
                draft.player_count, MIN_PLAYERS, MAX_PLAYERS
            ));
        }
        Some(quota) if !draft.selected.is_empty() => {
            let counts = draft.count_by_team();
            for team in Team::ALL {
                let have = counts[&team];
                let need = quota.for_team(team);
                if have < need {
                    report.issues.push(format!(
                        "{}: {} selected, {} required ({} short)",
                        team,
                        have,
                        need,
                        need - have
                    ));
                } else if have > need {
                    report.issues.push(format!(
                        "{}: {} selected, {} required ({} over)",
                        team,
                        have,
                        need,
                        have - need
                    ));
                }
            }
        }
        Some(_) => {}
    }

    for (a, b, note) in CONFUSING_PAIRS {
        if draft.contains(a) && draft.contains(b) {
            report.warnings.push((*note).to_string());
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Character;

    fn push_n(draft: &mut ScriptDraft, team: Team, prefix: &str, n: usize) {
        for i in 0..n {
            draft
                .selected
                .push(Character::new(format!("{}_{}", prefix, i), prefix, team));
        }
    }

    #[test]
    fn test_valid_draft_has_no_issues() {
        // 5 players: 3 townsfolk, 0 outsiders, 1 minion, 1 demon.
        let mut draft = ScriptDraft::new("Test Script", "Author", 5);
        push_n(&mut draft, Team::Townsfolk, "tf", 3);
        push_n(&mut draft, Team::Minion, "mn", 1);
        push_n(&mut draft, Team::Demon, "dm", 1);

        let report = validate_draft(&draft);
        assert!(report.is_valid(), "unexpected issues: {:?}", report.issues);
    }

    #[test]
    fn test_every_deviating_team_reported() {
        // 7 players: quota 5/0/1/1. Select 7 townsfolk and 0 minions:
        // townsfolk is over by 2 and minion short by 1.
        let mut draft = ScriptDraft::new("Test Script", "Author", 7);
        push_n(&mut draft, Team::Townsfolk, "tf", 7);
        push_n(&mut draft, Team::Demon, "dm", 1);

        let report = validate_draft(&draft);
        assert!(report.issues.iter().any(|i| i.contains("townsfolk") && i.contains("over")));
        assert!(report.issues.iter().any(|i| i.contains("minion") && i.contains("short")));
    }

    #[test]
    fn test_missing_fields_and_empty_selection() {
        let draft = ScriptDraft::new("", "", 5);
        let report = validate_draft(&draft);
        assert!(report.issues.iter().any(|i| i.contains("name")));
        assert!(report.issues.iter().any(|i| i.contains("author")));
        assert!(report.issues.iter().any(|i| i.contains("no characters")));
    }

    #[test]
    fn test_unknown_player_count() {
        let draft = ScriptDraft::new("Test", "Author", 4);
        let report = validate_draft(&draft);
        assert!(report.issues.iter().any(|i| i.contains("outside the supported range")));
    }

    #[test]
    fn test_warnings_do_not_block() {
        let mut draft = ScriptDraft::new("Test Script", "Author", 5);
        push_n(&mut draft, Team::Townsfolk, "tf", 1);
        draft
            .selected
            .push(Character::new("fortune_teller", "Fortune Teller", Team::Townsfolk));
        draft
            .selected
            .push(Character::new("chef", "Chef", Team::Townsfolk));
        draft
            .selected
            .push(Character::new("recluse", "Recluse", Team::Outsider));
        // Off-quota on purpose; warnings must still appear independently.
        let report = validate_draft(&draft);
        assert!(report.warnings.iter().any(|w| w.contains("Fortune Teller")));
        assert!(report.warnings.iter().any(|w| w.contains("Chef")));
        assert!(!report.is_valid());
    }
}
