//! Plain-text rendering of snapshots and events

use crate::engine::{BattleEvent, Outcome, Snapshot};

/// Render the round header, the boss line and one line per hero
pub fn render_snapshot(snapshot: &Snapshot) -> String {
    let boss = &snapshot.boss;
    let defence = boss.defence.map(|a| a.as_str()).unwrap_or("None");

    let mut lines = Vec::with_capacity(snapshot.heroes.len() + 2);
    lines.push(format!("ROUND {} -----------------", snapshot.round));
    lines.push(format!(
        "BOSS {} health: {} damage: {} defence: {}",
        boss.name, boss.health, boss.damage, defence
    ));
    for hero in &snapshot.heroes {
        lines.push(format!("{} health: {} damage: {}", hero.name, hero.health, hero.damage));
    }
    lines.join("\n")
}

/// Render a single event, or `None` for events not worth a line
pub fn render_event(event: &BattleEvent, snapshot: &Snapshot) -> Option<String> {
    let name = move |idx: usize| snapshot.hero_name(idx);

    match *event {
        BattleEvent::DefenceChosen { .. }
        | BattleEvent::BossHit { .. }
        | BattleEvent::HeroAttack { .. } => None,
        BattleEvent::DamageBlocked { hero, blocked } => {
            Some(format!("{} blocked {} damage", name(hero), blocked))
        }
        BattleEvent::HeroBlocked { hero } => Some(format!(
            "{} shrugged off {}",
            snapshot.boss.name,
            name(hero)
        )),
        BattleEvent::CriticalHit { hero, amount } => {
            Some(format!("{} hit critically {}", name(hero), amount))
        }
        BattleEvent::DamageBoosted { hero, amount } => Some(format!(
            "{} boosted allies damage by {}",
            name(hero),
            amount
        )),
        BattleEvent::Healed { hero, amount } => {
            Some(format!("{} healed allies by {}", name(hero), amount))
        }
        BattleEvent::DamageReverted { hero, amount } => Some(format!(
            "{} reverted {} damage to boss.",
            name(hero),
            amount
        )),
        BattleEvent::Revived { hero, target } => Some(format!(
            "{} sacrificed their life to revive {}",
            name(hero),
            name(target)
        )),
        BattleEvent::Drained {
            hero,
            receiver,
            amount,
        } => Some(format!(
            "{} drained {} HP from boss and gave it to {}",
            name(hero),
            amount,
            name(receiver)
        )),
    }
}

/// Winner banner
pub fn render_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::HeroesWin => "Heroes won!!!",
        Outcome::BossWins => "Boss won!!!",
    }
}
