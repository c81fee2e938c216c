//! The bank heist mini-game.
//!
//! A team of up to four kitties, one per role, pools skill from its
//! derived stats. Resolution is a single uniform roll in 0..=500 against
//! the skill total. Success pays a bank-specific multiple of the stake
//! and XP to every participant; failure forfeits a bank-specific share
//! of the stake, clamped by the coin floor.

use rand::Rng;
use serde::Serialize;

use crate::currency::CoinBank;
use crate::error::{CoreError, ValidationError};
use crate::kitty::stats::StatBlock;
use crate::progression::{LevelChange, ProgressKey, ProgressionStore};

/// The roll is uniform in `0..=MAX_ROLL`.
pub const MAX_ROLL: u32 = 500;

/// Which bank is being robbed. Riskier banks pay more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BankJob {
    Local,
    City,
}

impl BankJob {
    pub fn name(&self) -> &'static str {
        match self {
            BankJob::Local => "Local Bank",
            BankJob::City => "City Bank",
        }
    }

    /// Total payout for a successful heist with this stake.
    pub fn reward(&self, stake: u64) -> u64 {
        match self {
            BankJob::Local => stake * 3 / 2,
            BankJob::City => stake * 3,
        }
    }

    /// XP granted to each participant on success.
    pub fn xp_reward(&self) -> u64 {
        match self {
            BankJob::Local => 100,
            BankJob::City => 300,
        }
    }

    /// Coins forfeited on failure.
    pub fn loss(&self, stake: u64) -> u64 {
        match self {
            BankJob::Local => stake / 2,
            BankJob::City => stake / 4,
        }
    }
}

/// A heist role. Each counts different stats toward the skill total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeistRole {
    Brain,
    Stealer,
    Tank,
    LuckyCharm,
}

impl HeistRole {
    /// Stat contribution of a kitty filling this role.
    fn skill(&self, stats: &StatBlock) -> u32 {
        match self {
            HeistRole::Brain => stats.intelligence,
            HeistRole::Stealer => stats.stealth + stats.speed,
            HeistRole::Tank => stats.strength,
            HeistRole::LuckyCharm => stats.luck,
        }
    }
}

/// The crew, one kitty per role. Empty roles simply contribute nothing.
#[derive(Debug, Clone, Default)]
pub struct HeistTeam {
    pub brain: Option<String>,
    pub stealer: Option<String>,
    pub tank: Option<String>,
    pub lucky_charm: Option<String>,
}

impl HeistTeam {
    /// Filled roles in priority order.
    pub fn members(&self) -> Vec<(HeistRole, &str)> {
        let mut members = Vec::new();
        if let Some(k) = &self.brain {
            members.push((HeistRole::Brain, k.as_str()));
        }
        if let Some(k) = &self.stealer {
            members.push((HeistRole::Stealer, k.as_str()));
        }
        if let Some(k) = &self.tank {
            members.push((HeistRole::Tank, k.as_str()));
        }
        if let Some(k) = &self.lucky_charm {
            members.push((HeistRole::LuckyCharm, k.as_str()));
        }
        members
    }

    /// A team needs at least one member and no kitty in two roles.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let members = self.members();
        if members.is_empty() {
            return Err(ValidationError::InvalidTeam("no roles filled".into()));
        }
        for (i, (_, a)) in members.iter().enumerate() {
            for (_, b) in &members[i + 1..] {
                if a == b {
                    return Err(ValidationError::InvalidTeam(format!(
                        "{a} cannot fill two roles"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Pool the team's skill from each member's derived stats.
    pub fn skill<F: FnMut(&str) -> StatBlock>(&self, mut stats_for: F) -> u32 {
        self.members()
            .into_iter()
            .map(|(role, kitty)| role.skill(&stats_for(kitty)))
            .sum()
    }
}

/// Full record of a resolved heist.
#[derive(Debug, Clone, Serialize)]
pub struct HeistReport {
    pub bank: BankJob,
    pub stake: u64,
    pub skill: u32,
    pub roll: u32,
    pub success: bool,
    /// Coins gained (success) or lost (failure).
    pub coins_delta: u64,
    pub new_balance: u64,
    pub xp_each: u64,
    pub level_ups: Vec<(String, LevelChange)>,
    pub log: Vec<String>,
}

/// Run a heist end to end, applying coins and XP.
///
/// The stake is never deducted up front; it only needs to be affordable.
/// On success the net gain is `reward - stake`; on failure the loss goes
/// through the floor-clamped penalty path.
///
/// # Errors
/// Returns an error for an invalid team or an unaffordable stake.
pub fn run_heist<R: Rng + ?Sized>(
    bank_job: BankJob,
    stake: u64,
    team: &HeistTeam,
    bank: &mut CoinBank<'_>,
    progression: &ProgressionStore<'_>,
    user: &str,
    rng: &mut R,
) -> Result<HeistReport, CoreError> {
    team.validate()?;
    if bank.balance(user) < stake {
        return Err(ValidationError::InvalidValue {
            field: "stake".into(),
            message: format!("balance does not cover stake of {stake}"),
        }
        .into());
    }

    let skill = team.skill(|kitty| progression.derived_stats(&ProgressKey::new(user, kitty)));
    let roll = rng.gen_range(0..=MAX_ROLL);
    let success = roll <= skill;

    let mut log: Vec<String> = team
        .members()
        .iter()
        .map(|(role, kitty)| role_log(*role, kitty, rng))
        .collect();
    log.push(outcome_log(success, rng));

    let report = if success {
        let reward = bank_job.reward(stake);
        let new_balance = bank.reward(user, reward - stake);
        let xp_each = bank_job.xp_reward();

        let mut level_ups = Vec::new();
        for (_, kitty) in team.members() {
            let change = progression.grant_xp(&ProgressKey::new(user, kitty), xp_each, rng);
            if change.leveled_up() {
                level_ups.push((kitty.to_string(), change));
            }
        }

        HeistReport {
            bank: bank_job,
            stake,
            skill,
            roll,
            success,
            coins_delta: reward - stake,
            new_balance,
            xp_each,
            level_ups,
            log,
        }
    } else {
        let loss = bank_job.loss(stake);
        let new_balance = bank.penalty(user, loss);
        HeistReport {
            bank: bank_job,
            stake,
            skill,
            roll,
            success,
            coins_delta: loss,
            new_balance,
            xp_each: 0,
            level_ups: Vec::new(),
            log,
        }
    };

    Ok(report)
}

fn role_log<R: Rng + ?Sized>(role: HeistRole, kitty: &str, rng: &mut R) -> String {
    let lines: &[&str] = match role {
        HeistRole::Brain => &[
            "{} is analyzing security systems...",
            "{} is hacking into the mainframe...",
            "{} is disabling alarm systems...",
            "{} is creating a diversion...",
            "{} is coordinating the team...",
        ],
        HeistRole::Stealer => &[
            "{} is sneaking past guards...",
            "{} is picking the vault lock...",
            "{} is disabling cameras...",
            "{} is stealing the loot...",
            "{} is making a silent escape...",
        ],
        HeistRole::Tank => &[
            "{} is providing cover fire...",
            "{} is breaking down doors...",
            "{} is intimidating guards...",
            "{} is carrying heavy equipment...",
            "{} is protecting the team...",
        ],
        HeistRole::LuckyCharm => &[
            "{} found a secret passage...",
            "{} discovered extra loot...",
            "{} avoided detection...",
            "{} found the perfect timing...",
            "{} got lucky with security...",
        ],
    };
    lines[rng.gen_range(0..lines.len())].replace("{}", kitty)
}

fn outcome_log<R: Rng + ?Sized>(success: bool, rng: &mut R) -> String {
    let lines: &[&str] = if success {
        &[
            "The team successfully escaped with the loot!",
            "Security never saw them coming!",
            "Perfect execution, mission accomplished!",
            "The vault was no match for this team!",
            "Clean getaway, no witnesses!",
        ]
    } else {
        &[
            "The alarm went off! Security is responding!",
            "A guard spotted the team!",
            "The vault was too secure for this attempt!",
            "The team was caught on camera!",
            "Security systems were too advanced!",
        ]
    };
    lines[rng.gen_range(0..lines.len())].to_string()
}
