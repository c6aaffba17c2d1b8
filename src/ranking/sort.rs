use clap::ValueEnum;

use super::pool::Standing;

/// Display order of a ranked report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Order by the service rank the report was ranked on
    #[default]
    #[value(name = "rank")]
    Rank,
    /// Order by the stage rank
    #[value(name = "stage_rank")]
    StageRank,
    /// Order by the rank within the pool
    #[value(name = "pool_rank")]
    PoolRank,
}

/// Re-sort already ranked rows for display. Stable: rows with equal keys keep
/// their ranked order.
pub fn resort<R: Standing>(rows: &mut [R], key: SortKey) {
    match key {
        SortKey::Rank => {}
        SortKey::StageRank => rows.sort_by_key(|row| row.service_rank()),
        SortKey::PoolRank => rows.sort_by_key(|row| row.pool().map(|p| p.rank.sort_key())),
    }
}
