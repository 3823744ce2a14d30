use crate::models::{BehaviorCount, ChartBar, ChartView, Dominance, Entry, OverallStats, Subject};
use std::collections::HashMap;

/// Counts entries per behavior, in order of first appearance.
pub fn summarize(log: &[Entry]) -> Vec<BehaviorCount> {
    let mut rows: Vec<BehaviorCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in log {
        let slot = *index.entry(entry.behavior.as_str()).or_insert_with(|| {
            rows.push(BehaviorCount {
                behavior: entry.behavior.clone(),
                count: 0,
                together_count: 0,
                shared_pct: 0.0,
            });
            rows.len() - 1
        });
        let row = &mut rows[slot];
        row.count += 1;
        if entry.together {
            row.together_count += 1;
        }
    }

    for row in &mut rows {
        row.shared_pct = percentage(row.together_count, row.count);
    }

    rows
}

pub fn overall_stats(log: &[Entry]) -> OverallStats {
    let total = log.len() as u64;
    let shared = log.iter().filter(|entry| entry.together).count() as u64;
    let solo = total - shared;

    OverallStats {
        total,
        shared,
        solo,
        shared_pct: percentage(shared, total),
        solo_pct: percentage(solo, total),
    }
}

/// A behavior is joint only when strictly more than half of it was shared.
pub fn classify_dominance(row: &BehaviorCount) -> Dominance {
    if row.count > 0 && row.together_count * 2 > row.count {
        Dominance::Joint
    } else {
        Dominance::Individual
    }
}

/// `Shared: N (x%), Solo: M (y%)`
pub fn summary_line(stats: &OverallStats) -> String {
    if stats.total == 0 {
        return "Shared: 0 (0%), Solo: 0 (0%)".to_string();
    }
    format!(
        "Shared: {} ({:.1}%), Solo: {} ({:.1}%)",
        stats.shared, stats.shared_pct, stats.solo, stats.solo_pct
    )
}

pub fn chart_view(subject: Subject, log: &[Entry]) -> ChartView {
    let stats = overall_stats(log);
    let bars: Vec<ChartBar> = summarize(log)
        .into_iter()
        .map(|row| ChartBar {
            dominance: classify_dominance(&row),
            behavior: row.behavior,
            count: row.count,
            together_count: row.together_count,
            shared_pct: row.shared_pct,
        })
        .collect();
    let scale_max = bars.iter().map(|bar| bar.count).max().unwrap_or(0).max(1);

    ChartView {
        subject,
        summary: summary_line(&stats),
        bars,
        stats,
        scale_max,
    }
}

/// `part / whole * 100`, rounded half away from zero to one decimal.
/// An empty whole yields 0.
fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round_one_decimal(part as f64 / whole as f64 * 100.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
