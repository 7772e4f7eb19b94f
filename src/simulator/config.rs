//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Maximum questions answered per run before timeout
    pub max_questions_per_run: u64,

    /// Target zone to reach
    pub target_zone: u32,

    /// Chance that the simulated player answers correctly
    pub accuracy: f64,

    /// Simulated seconds spent per question (drives AFK mining)
    pub seconds_per_question: u64,

    /// Whether the player spends coins on chests
    pub open_chests: bool,

    /// Whether the player spends coins on research
    pub buy_research: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_questions_per_run: 20_000,
            target_zone: 25,
            accuracy: 0.8,
            seconds_per_question: 10,
            open_chests: true,
            buy_research: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for testing zone balance
    pub fn zone_balance_test(target_zone: u32) -> Self {
        Self {
            num_runs: 100,
            target_zone,
            ..Default::default()
        }
    }

    /// Long runs toward the premium zone
    pub fn premium_run() -> Self {
        Self {
            num_runs: 50,
            target_zone: 50,
            max_questions_per_run: 100_000,
            ..Default::default()
        }
    }

    /// A player who never spends coins, to isolate combat pacing
    pub fn combat_only(num_runs: u32) -> Self {
        Self {
            num_runs,
            open_chests: false,
            buy_research: false,
            ..Default::default()
        }
    }
}
