//! Plain-text rendering of a battle outcome.
use std::fmt::Write;

use duel_core::{BattleOutcome, BattleResult, SideSummary};

pub fn outcome(outcome: &BattleOutcome) -> String {
    let mut out = String::new();
    for line in &outcome.log {
        let _ = writeln!(out, "{line}");
    }

    let verdict = match outcome.result {
        BattleResult::LeftWin => "left wins",
        BattleResult::RightWin => "right wins",
        BattleResult::Draw => "draw",
    };
    let _ = writeln!(out, "\nResult: {verdict} after {} turns", outcome.rounds);

    if let Some(summary) = &outcome.summary {
        out.push('\n');
        side(&mut out, &summary.left);
        side(&mut out, &summary.right);
    }
    out
}

fn side(out: &mut String, summary: &SideSummary) {
    let _ = writeln!(
        out,
        "{}: {}/{} health, {} armor, {} attack, {} speed, {} gold",
        summary.name,
        summary.health,
        summary.max_health,
        summary.armor,
        summary.attack,
        summary.speed,
        summary.gold,
    );
    let _ = writeln!(
        out,
        "  after battle start: {} health, {} armor",
        summary.health_after_battle_start, summary.armor_after_battle_start
    );
    let _ = writeln!(
        out,
        "  strikes {}/{} landed, {} health damage, {} armor destroyed, exposed {}x{}",
        summary.strikes_landed,
        summary.strikes_attempted,
        summary.health_damage_dealt,
        summary.armor_destroyed_dealt,
        summary.times_exposed,
        if summary.wounded { ", wounded" } else { "" },
    );
    if !summary.statuses_gained.is_empty() {
        let gained: Vec<String> = summary
            .statuses_gained
            .iter()
            .map(|(status, count)| format!("{status} {count}"))
            .collect();
        let _ = writeln!(out, "  statuses gained: {}", gained.join(", "));
    }
}
