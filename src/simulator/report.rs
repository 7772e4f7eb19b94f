//! Simulation report generation.

use super::runner::RunStats;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub target_zone: u32,
    pub runs_completed: u32,
    pub runs_timed_out: u32,

    // Aggregated stats
    pub avg_final_zone: f64,
    pub avg_questions: f64,
    pub avg_accuracy: f64,
    pub avg_victories: f64,
    pub avg_defeats: f64,
    pub avg_research_level: f64,
    pub avg_power_skills: f64,
    pub avg_chests_opened: f64,
    pub avg_coins_earned: f64,
    pub avg_gems_earned: f64,
    pub avg_best_streak: f64,
    pub avg_achievements: f64,

    // Distribution data
    pub zone_distribution: BTreeMap<u32, u32>,

    // Per-zone analysis, indexed by zone
    pub avg_questions_per_zone: Vec<f64>,

    // Individual run stats for detailed analysis
    #[serde(skip)]
    pub run_stats: Vec<RunStats>,
}

fn average(runs: &[RunStats], value: impl Fn(&RunStats) -> f64) -> f64 {
    if runs.is_empty() {
        return 0.0;
    }
    runs.iter().map(value).sum::<f64>() / runs.len() as f64
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, target_zone: u32) -> Self {
        let num_runs = runs.len() as u32;
        let runs_completed = runs.iter().filter(|r| r.reached_target).count() as u32;

        let mut zone_distribution = BTreeMap::new();
        for run in &runs {
            *zone_distribution.entry(run.final_zone).or_insert(0) += 1;
        }

        let avg_questions_per_zone = (0..=target_zone as usize)
            .map(|zone| average(&runs, |r| r.questions_per_zone.get(zone).copied().unwrap_or(0) as f64))
            .collect();

        Self {
            num_runs,
            target_zone,
            runs_completed,
            runs_timed_out: num_runs - runs_completed,
            avg_final_zone: average(&runs, |r| r.final_zone as f64),
            avg_questions: average(&runs, |r| r.questions_answered as f64),
            avg_accuracy: average(&runs, |r| {
                if r.questions_answered == 0 {
                    0.0
                } else {
                    r.correct_answers as f64 / r.questions_answered as f64
                }
            }),
            avg_victories: average(&runs, |r| r.victories as f64),
            avg_defeats: average(&runs, |r| r.defeats as f64),
            avg_research_level: average(&runs, |r| r.research_level as f64),
            avg_power_skills: average(&runs, |r| r.power_skills as f64),
            avg_chests_opened: average(&runs, |r| r.chests_opened as f64),
            avg_coins_earned: average(&runs, |r| r.coins_earned as f64),
            avg_gems_earned: average(&runs, |r| r.gems_earned as f64),
            avg_best_streak: average(&runs, |r| r.best_streak as f64),
            avg_achievements: average(&runs, |r| r.achievements_unlocked as f64),
            zone_distribution,
            avg_questions_per_zone,
            run_stats: runs,
        }
    }

    fn completion_rate(&self) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        (self.runs_completed as f64 / self.num_runs as f64) * 100.0
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 HUGOLAND SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Runs: {} total, {} reached zone {}, {} timed out\n\n",
            self.num_runs, self.runs_completed, self.target_zone, self.runs_timed_out
        ));

        report.push_str("── PROGRESSION ──────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Final Zone:      {:.1}\n", self.avg_final_zone));
        report.push_str(&format!("  Avg Questions:       {:.0}\n", self.avg_questions));
        report.push_str(&format!("  Avg Accuracy:        {:.1}%\n", self.avg_accuracy * 100.0));
        report.push_str(&format!("  Avg Victories:       {:.1}\n", self.avg_victories));
        report.push_str(&format!("  Avg Defeats:         {:.1}\n", self.avg_defeats));
        report.push_str(&format!("  Avg Best Streak:     {:.1}\n\n", self.avg_best_streak));

        report.push_str("── ECONOMY ──────────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Research Level:  {:.1}\n", self.avg_research_level));
        report.push_str(&format!("  Avg Power Skills:    {:.2}\n", self.avg_power_skills));
        report.push_str(&format!("  Avg Chests Opened:   {:.1}\n", self.avg_chests_opened));
        report.push_str(&format!("  Avg Coins Earned:    {:.0}\n", self.avg_coins_earned));
        report.push_str(&format!("  Avg Gems Earned:     {:.0}\n", self.avg_gems_earned));
        report.push_str(&format!("  Avg Achievements:    {:.1}\n\n", self.avg_achievements));

        report.push_str("── FINAL ZONES ──────────────────────────────────────────────────\n");
        for (zone, count) in &self.zone_distribution {
            let pct = if self.num_runs == 0 {
                0.0
            } else {
                (*count as f64 / self.num_runs as f64) * 100.0
            };
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  Zone {:2}: {:>5.1}% {}\n", zone, pct, bar));
        }
        report.push('\n');

        report.push_str("── QUESTIONS PER ZONE ───────────────────────────────────────────\n");
        for (zone, questions) in self.avg_questions_per_zone.iter().enumerate().skip(1) {
            if *questions > 0.0 {
                report.push_str(&format!("  Zone {:2}: {:8.1}\n", zone, questions));
            }
        }
        report.push('\n');

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        report.push_str(&format!("  Completion Rate: {:.1}%\n", self.completion_rate()));
        if self.avg_victories > 0.0 && self.avg_defeats / self.avg_victories > 0.5 {
            report.push_str("  ⚠️  Defeats outpace victories - enemy scaling too steep?\n");
        }
        if self.avg_research_level < 1.0 && self.avg_coins_earned > 500.0 {
            report.push_str("  ⚠️  Coins earned but no research bought\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(final_zone: u32, questions: u64, correct: u64, reached_target: bool) -> RunStats {
        RunStats {
            final_zone,
            questions_answered: questions,
            correct_answers: correct,
            victories: (final_zone - 1) as u64,
            reached_target,
            questions_per_zone: vec![0, questions, 0, 0, 0, 0],
            ..Default::default()
        }
    }

    #[test]
    fn test_report_generation() {
        let runs = vec![run(5, 100, 80, true), run(3, 200, 100, false)];
        let report = SimReport::from_runs(runs, 5);
        assert_eq!(report.num_runs, 2);
        assert_eq!(report.runs_completed, 1);
        assert_eq!(report.runs_timed_out, 1);
        assert!((report.avg_final_zone - 4.0).abs() < 1e-9);
        assert!((report.avg_accuracy - 0.65).abs() < 1e-9);
        assert!((report.avg_questions_per_zone[1] - 150.0).abs() < 1e-9);
        assert_eq!(report.zone_distribution.get(&5), Some(&1));

        let text = report.to_text();
        assert!(text.contains("1 reached zone 5"));
        assert!(report.to_json().contains("\"avg_final_zone\""));
    }

    #[test]
    fn test_empty_report() {
        let report = SimReport::from_runs(Vec::new(), 10);
        assert_eq!(report.num_runs, 0);
        assert_eq!(report.avg_final_zone, 0.0);
        assert!(report.to_text().contains("Completion Rate: 0.0%"));
    }
}
