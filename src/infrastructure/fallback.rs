//! Built-in fallback catalog
//!
//! Compiled-in Trouble Brewing data used whenever the remote catalog is
//! unreachable, so the generator keeps working offline. Night numbers
//! are the published night-sheet positions.

use crate::domain::entities::{Catalog, Character, Complexity};
use crate::domain::value_objects::Team;

/// The complete built-in catalog.
pub fn fallback_catalog() -> Catalog {
    Catalog::new(vec![
        // Townsfolk
        Character::new("washerwoman", "洗衣妇", Team::Townsfolk)
            .with_name_en("Washerwoman")
            .with_ability("You start knowing that 1 of 2 players is a particular Townsfolk.")
            .with_nights(32, 0)
            .with_edition("tb")
            .with_complexity(Complexity::Beginner),
        Character::new("librarian", "图书管理员", Team::Townsfolk)
            .with_name_en("Librarian")
            .with_ability("You start knowing that 1 of 2 players is a particular Outsider, or that zero Outsiders are in play.")
            .with_nights(33, 0)
            .with_edition("tb")
            .with_complexity(Complexity::Beginner),
        Character::new("investigator", "调查员", Team::Townsfolk)
            .with_name_en("Investigator")
            .with_ability("You start knowing that 1 of 2 players is a particular Minion.")
            .with_nights(34, 0)
            .with_edition("tb")
            .with_complexity(Complexity::Beginner),
        Character::new("chef", "厨师", Team::Townsfolk)
            .with_name_en("Chef")
            .with_ability("You start knowing how many pairs of evil players there are.")
            .with_nights(35, 0)
            .with_edition("tb")
            .with_complexity(Complexity::Beginner),
        Character::new("empath", "共情者", Team::Townsfolk)
            .with_name_en("Empath")
            .with_ability("Each night, you learn how many of your 2 alive neighbours are evil.")
            .with_nights(36, 37)
            .with_edition("tb")
            .with_complexity(Complexity::Beginner),
        Character::new("fortune_teller", "占卜师", Team::Townsfolk)
            .with_name_en("Fortune Teller")
            .with_ability("Each night, choose 2 players: you learn if either is a Demon. There is a good player that registers as a Demon to you.")
            .with_nights(37, 38)
            .with_reminders(["Red herring"])
            .with_edition("tb")
            .with_complexity(Complexity::Intermediate),
        Character::new("undertaker", "送葬者", Team::Townsfolk)
            .with_name_en("Undertaker")
            .with_ability("Each night*, you learn which character died by execution today.")
            .with_nights(0, 34)
            .with_reminders(["Executed"])
            .with_edition("tb")
            .with_complexity(Complexity::Beginner),
        Character::new("monk", "僧侣", Team::Townsfolk)
            .with_name_en("Monk")
            .with_ability("Each night*, choose a player (not yourself): they are safe from the Demon tonight.")
            .with_nights(0, 12)
            .with_reminders(["Safe"])
            .with_edition("tb")
            .with_complexity(Complexity::Beginner),
        Character::new("ravenkeeper", "守鸦人", Team::Townsfolk)
            .with_name_en("Ravenkeeper")
            .with_ability("If you die at night, you are woken to choose a player: you learn their character.")
            .with_nights(0, 30)
            .with_edition("tb")
            .with_complexity(Complexity::Beginner),
        Character::new("virgin", "贞洁者", Team::Townsfolk)
            .with_name_en("Virgin")
            .with_ability("The 1st time you are nominated, if the nominator is a Townsfolk, they are executed immediately.")
            .with_reminders(["No ability"])
            .with_edition("tb")
            .with_complexity(Complexity::Intermediate),
        Character::new("slayer", "猎魔人", Team::Townsfolk)
            .with_name_en("Slayer")
            .with_ability("Once per game, during the day, publicly choose a player: if they are the Demon, they die.")
            .with_reminders(["No ability"])
            .with_edition("tb")
            .with_complexity(Complexity::Beginner),
        Character::new("soldier", "士兵", Team::Townsfolk)
            .with_name_en("Soldier")
            .with_ability("You are safe from the Demon.")
            .with_edition("tb")
            .with_complexity(Complexity::Beginner),
        Character::new("mayor", "市长", Team::Townsfolk)
            .with_name_en("Mayor")
            .with_ability("If only 3 players live & no execution occurs, your team wins. If you die at night, another player might die instead.")
            .with_edition("tb")
            .with_complexity(Complexity::Intermediate),
        // Outsiders
        Character::new("butler", "管家", Team::Outsider)
            .with_name_en("Butler")
            .with_ability("Each night, choose a player (not yourself): tomorrow, you may only vote if they are voting too.")
            .with_nights(38, 39)
            .with_reminders(["Master"])
            .with_edition("tb")
            .with_complexity(Complexity::Beginner),
        Character::new("drunk", "酒鬼", Team::Outsider)
            .with_name_en("Drunk")
            .with_ability("You do not know you are the Drunk. You think you are a Townsfolk character, but you are not.")
            .with_setup()
            .with_reminders(["Drunk"])
            .with_edition("tb")
            .with_complexity(Complexity::Intermediate),
        Character::new("recluse", "隐士", Team::Outsider)
            .with_name_en("Recluse")
            .with_ability("You might register as evil & as a Minion or Demon, even if dead.")
            .with_edition("tb")
            .with_complexity(Complexity::Intermediate),
        Character::new("saint", "圣徒", Team::Outsider)
            .with_name_en("Saint")
            .with_ability("If you die by execution, your team loses.")
            .with_edition("tb")
            .with_complexity(Complexity::Beginner),
        // Minions
        Character::new("poisoner", "投毒者", Team::Minion)
            .with_name_en("Poisoner")
            .with_ability("Each night, choose a player: they are poisoned tonight and tomorrow day.")
            .with_nights(17, 7)
            .with_reminders(["Poisoned"])
            .with_edition("tb")
            .with_complexity(Complexity::Beginner),
        Character::new("spy", "间谍", Team::Minion)
            .with_name_en("Spy")
            .with_ability("Each night, you see the Grimoire. You might register as good & as a Townsfolk or Outsider, even if dead.")
            .with_nights(48, 49)
            .with_edition("tb")
            .with_complexity(Complexity::Advanced),
        Character::new("scarlet_woman", "猩红女郎", Team::Minion)
            .with_name_en("Scarlet Woman")
            .with_ability("If there are 5 or more players alive & the Demon dies, you become the Demon.")
            .with_edition("tb")
            .with_complexity(Complexity::Intermediate),
        Character::new("baron", "男爵", Team::Minion)
            .with_name_en("Baron")
            .with_ability("There are extra Outsiders in play. [+2 Outsiders]")
            .with_setup()
            .with_edition("tb")
            .with_complexity(Complexity::Intermediate),
        // Demon
        Character::new("imp", "小恶魔", Team::Demon)
            .with_name_en("Imp")
            .with_ability("Each night*, choose a player: they die. If you kill yourself this way, a Minion becomes the Imp.")
            .with_nights(0, 24)
            .with_reminders(["Dead"])
            .with_edition("tb")
            .with_complexity(Complexity::Beginner),
    ])
}
