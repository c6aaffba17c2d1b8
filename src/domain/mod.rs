pub mod models;

pub use models::{
    OverallLine, OverallRow, ParticipantBlock, PoolOverallRow, PoolRank, PoolStanding, StageLine,
    StageRow,
};
