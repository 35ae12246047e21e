use crate::catalog::{SignalCatalog, ThreatLevel};
use crate::math::StatsHelper;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreatShare {
    pub level: ThreatLevel,
    pub count: usize,
    pub percentage: f64,
}

/// Per-level breakdown of the catalog, ordered LOW to CRITICAL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreatDistribution {
    pub total: usize,
    pub shares: Vec<ThreatShare>,
}

impl ThreatDistribution {
    pub fn from_catalog(catalog: &SignalCatalog) -> Self {
        let total = catalog.len();
        let shares = ThreatLevel::ALL
            .into_iter()
            .map(|level| {
                let count = catalog.count_at(level);
                ThreatShare {
                    level,
                    count,
                    percentage: StatsHelper::percentage(count, total),
                }
            })
            .collect();
        Self { total, shares }
    }

    pub fn share(&self, level: ThreatLevel) -> Option<&ThreatShare> {
        self.shares.iter().find(|share| share.level == level)
    }
}
