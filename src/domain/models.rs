/// Raw results text fetched for one participant
#[derive(Debug, Clone, PartialEq)]
pub struct ParticipantBlock {
    pub participant: String,
    pub text: String,
}

/// A participant's result for the day's stage
#[derive(Debug, Clone, PartialEq)]
pub struct StageLine {
    pub stage_rank: u32,
    pub stage_points: i64,
    pub name: String,
    pub country: String,
}

/// A participant's standing in the overall classification
#[derive(Debug, Clone, PartialEq)]
pub struct OverallLine {
    pub rank: u32,
    pub previous_rank: u32,
    pub overall_points: i64,
    pub stage_delta: i64,
    pub points_behind: i64,
    pub name: String,
    pub country: String,
}

impl OverallLine {
    /// Positive when the participant climbed the classification
    pub fn rank_change(&self) -> i64 {
        i64::from(self.previous_rank) - i64::from(self.rank)
    }
}

/// Rank within the pool.
///
/// `Tied` rows carry the rank of the earlier row whose points they did not
/// improve on, and render blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolRank {
    Ranked(usize),
    Tied(usize),
}

impl PoolRank {
    pub fn number(&self) -> Option<usize> {
        match self {
            PoolRank::Ranked(n) => Some(*n),
            PoolRank::Tied(_) => None,
        }
    }

    pub fn sort_key(&self) -> usize {
        match self {
            PoolRank::Ranked(n) | PoolRank::Tied(n) => *n,
        }
    }
}

/// Pool-relative figures filled in by the ranker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolStanding {
    pub rank: PoolRank,
    pub behind: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageRow {
    pub name: String,
    pub stage_rank: u32,
    pub stage_points: i64,
    pub pool: Option<PoolStanding>,
}

impl From<StageLine> for StageRow {
    fn from(line: StageLine) -> Self {
        Self {
            name: line.name,
            stage_rank: line.stage_rank,
            stage_points: line.stage_points,
            pool: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverallRow {
    pub name: String,
    pub rank: u32,
    pub previous_rank: u32,
    pub rank_change: i64,
    pub points: i64,
    pub behind: i64,
    pub pool: Option<PoolStanding>,
}

impl OverallRow {
    /// The displayed name comes from the stage line
    pub fn new(stage: &StageLine, overall: &OverallLine) -> Self {
        Self {
            name: stage.name.clone(),
            rank: overall.rank,
            previous_rank: overall.previous_rank,
            rank_change: overall.rank_change(),
            points: overall.overall_points,
            behind: overall.points_behind,
            pool: None,
        }
    }
}

/// Overall row reduced to the pool-relevant columns
#[derive(Debug, Clone, PartialEq)]
pub struct PoolOverallRow {
    pub name: String,
    pub overall_rank: u32,
    pub points: i64,
    pub pool: Option<PoolStanding>,
}

impl PoolOverallRow {
    pub fn new(stage: &StageLine, overall: &OverallLine) -> Self {
        Self {
            name: stage.name.clone(),
            overall_rank: overall.rank,
            points: overall.overall_points,
            pool: None,
        }
    }
}
