//! history.rs — simple in-memory log of recent reports, powering the debug
//! endpoints. Nothing here persists.

use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::report::{Dimension, WardrobeIntelligence, WardrobeTier};

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub ts_unix: u64,
    pub overall_score: u8,
    pub tier: WardrobeTier,
    pub primary_strength: Dimension,
    pub primary_opportunity: Dimension,
    pub item_count: usize,
}

#[derive(Debug)]
pub struct ReportHistory {
    inner: Mutex<Vec<HistoryEntry>>,
    cap: usize,
}

impl ReportHistory {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            inner: Mutex::new(Vec::with_capacity(cap.min(10_000))),
            cap: cap.min(10_000),
        }
    }

    pub fn push(&self, report: &WardrobeIntelligence, item_count: usize) {
        let entry = HistoryEntry {
            ts_unix: now_unix(),
            overall_score: report.overall_score,
            tier: report.tier,
            primary_strength: report.insights.primary_strength,
            primary_opportunity: report.insights.primary_opportunity,
            item_count,
        };

        let mut v = self.inner.lock().expect("history mutex poisoned");
        v.push(entry);
        if v.len() > self.cap {
            let excess = v.len() - self.cap;
            v.drain(0..excess);
        }
    }

    pub fn snapshot_last_n(&self, n: usize) -> Vec<HistoryEntry> {
        let v = self.inner.lock().expect("history mutex poisoned");
        let len = v.len();
        let start = len.saturating_sub(n);
        v[start..].to_vec()
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{DimensionalMetrics, WardrobeInsights};

    fn report(score: u8) -> WardrobeIntelligence {
        WardrobeIntelligence {
            overall_score: score,
            tier: WardrobeTier::Balanced,
            dimensions: DimensionalMetrics::new(score, score, score, score),
            insights: WardrobeInsights {
                primary_strength: Dimension::Variety,
                primary_opportunity: Dimension::ColorHarmony,
                estimated_outfit_combinations: 0,
            },
        }
    }

    #[test]
    fn capacity_is_enforced_oldest_first() {
        let h = ReportHistory::with_capacity(3);
        for score in [10, 20, 30, 40] {
            h.push(&report(score), score as usize);
        }
        let rows = h.snapshot_last_n(10);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].overall_score, 20);
        assert_eq!(rows[2].overall_score, 40);
    }

    #[test]
    fn snapshot_returns_the_tail() {
        let h = ReportHistory::with_capacity(100);
        for score in [1, 2, 3] {
            h.push(&report(score), 5);
        }
        let rows = h.snapshot_last_n(2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].overall_score, 2);
    }
}
