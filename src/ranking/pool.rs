use crate::domain::{OverallRow, PoolOverallRow, PoolRank, PoolStanding, StageRow};

/// A row that can be ranked within the pool
pub trait Standing {
    /// Rank reported by the results service
    fn service_rank(&self) -> u32;
    /// Points the pool is ranked on
    fn points(&self) -> i64;
    fn pool(&self) -> Option<PoolStanding>;
    fn set_pool(&mut self, standing: PoolStanding);
}

/// Sort by service rank, then fill in every row's pool rank and gap to the leader.
///
/// A row only gets a pool rank when its points are strictly below every row
/// before it; a row that does not improve on the running minimum is marked
/// tied with the last ranked row.
pub fn rank_pool<R: Standing>(rows: &mut [R]) {
    rows.sort_by_key(|row| row.service_rank());

    let Some(leader_points) = rows.first().map(R::points) else {
        return;
    };

    let mut lowest: Option<i64> = None;
    let mut last_ranked = 1;

    for (position, row) in rows.iter_mut().enumerate() {
        let points = row.points();
        let rank = if lowest.is_none_or(|lowest| points < lowest) {
            lowest = Some(points);
            last_ranked = position + 1;
            PoolRank::Ranked(last_ranked)
        } else {
            PoolRank::Tied(last_ranked)
        };

        row.set_pool(PoolStanding {
            rank,
            behind: points - leader_points,
        });
    }
}

impl Standing for StageRow {
    fn service_rank(&self) -> u32 {
        self.stage_rank
    }

    fn points(&self) -> i64 {
        self.stage_points
    }

    fn pool(&self) -> Option<PoolStanding> {
        self.pool
    }

    fn set_pool(&mut self, standing: PoolStanding) {
        self.pool = Some(standing);
    }
}

impl Standing for OverallRow {
    fn service_rank(&self) -> u32 {
        self.rank
    }

    fn points(&self) -> i64 {
        self.points
    }

    fn pool(&self) -> Option<PoolStanding> {
        self.pool
    }

    fn set_pool(&mut self, standing: PoolStanding) {
        self.pool = Some(standing);
    }
}

impl Standing for PoolOverallRow {
    fn service_rank(&self) -> u32 {
        self.overall_rank
    }

    fn points(&self) -> i64 {
        self.points
    }

    fn pool(&self) -> Option<PoolStanding> {
        self.pool
    }

    fn set_pool(&mut self, standing: PoolStanding) {
        self.pool = Some(standing);
    }
}
