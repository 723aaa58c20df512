//! Aggregate counters backing the dashboard's stat tiles.

use serde::Serialize;

/// Per-owner aggregate snapshot.
///
/// Everything here is derivable from the entity tables; this exists so the
/// dashboard can render its tiles with one request instead of five.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DashboardSummary {
    pub children_total: i64,
    pub children_nice: i64,
    pub children_naughty: i64,
    pub children_pending: i64,
    pub gifts_total: i64,
    pub gifts_ready: i64,
    pub gift_stock: i64,
    pub elves_total: i64,
    /// Mean elf efficiency, `None` when there are no elves.
    pub elf_efficiency_avg: Option<f64>,
    pub tasks_open: i64,
    pub deliveries_total_gifts: i64,
    pub deliveries_delivered: i64,
}
