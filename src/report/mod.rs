pub mod table;

pub use table::{Cell, Table};

use anyhow::Result;

use crate::domain::{
    OverallRow, ParticipantBlock, PoolOverallRow, PoolRank, PoolStanding, StageRow,
};
use crate::extract::{LineGrammar, ResultBlock};
use crate::ranking::{SortKey, Standing, rank_pool, resort};

pub const STAGE_HEADERS: &[&str] = &[
    "Pool Rank",
    "Name",
    "Stage Rank",
    "Stage Points",
    "Pool Behind",
];

pub const OVERALL_HEADERS: &[&str] = &[
    "Pool Rank",
    "Name",
    "Rank",
    "Prev. Rank",
    "Rank Change",
    "Points",
    "Behind",
    "Pool Behind",
];

pub const POOL_OVERALL_HEADERS: &[&str] = &[
    "Pool Rank",
    "Overall Rank",
    "Name",
    "Points",
    "Points Behind",
];

/// Which report a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Stage,
    Overall { pool_only: bool },
    Teams,
}

/// A row's cells in header order
pub trait TableRow {
    fn cells(&self) -> Vec<Cell>;
}

fn pool_rank_cell(pool: Option<PoolStanding>) -> Cell {
    match pool.map(|p| p.rank) {
        Some(PoolRank::Ranked(n)) => Cell::Int(n as i64),
        _ => Cell::Blank,
    }
}

fn pool_behind_cell(pool: Option<PoolStanding>) -> Cell {
    Cell::Int(pool.map_or(0, |p| p.behind))
}

impl TableRow for StageRow {
    fn cells(&self) -> Vec<Cell> {
        vec![
            pool_rank_cell(self.pool),
            self.name.as_str().into(),
            self.stage_rank.into(),
            self.stage_points.into(),
            pool_behind_cell(self.pool),
        ]
    }
}

impl TableRow for OverallRow {
    fn cells(&self) -> Vec<Cell> {
        vec![
            pool_rank_cell(self.pool),
            self.name.as_str().into(),
            self.rank.into(),
            self.previous_rank.into(),
            self.rank_change.into(),
            self.points.into(),
            self.behind.into(),
            pool_behind_cell(self.pool),
        ]
    }
}

impl TableRow for PoolOverallRow {
    fn cells(&self) -> Vec<Cell> {
        vec![
            pool_rank_cell(self.pool),
            self.overall_rank.into(),
            self.name.as_str().into(),
            self.points.into(),
            pool_behind_cell(self.pool),
        ]
    }
}

pub fn stage_rows(blocks: &[ParticipantBlock], grammar: &LineGrammar) -> Result<Vec<StageRow>> {
    blocks
        .iter()
        .map(|block| -> Result<StageRow> {
            let block = ResultBlock::new(&block.participant, &block.text);
            Ok(StageRow::from(block.stage_line(grammar)?))
        })
        .collect()
}

pub fn overall_rows(
    blocks: &[ParticipantBlock],
    grammar: &LineGrammar,
) -> Result<Vec<OverallRow>> {
    blocks
        .iter()
        .map(|block| -> Result<OverallRow> {
            let block = ResultBlock::new(&block.participant, &block.text);
            let stage = block.stage_line(grammar)?;
            let overall = block.overall_line(grammar)?;
            Ok(OverallRow::new(&stage, &overall))
        })
        .collect()
}

pub fn pool_overall_rows(
    blocks: &[ParticipantBlock],
    grammar: &LineGrammar,
) -> Result<Vec<PoolOverallRow>> {
    blocks
        .iter()
        .map(|block| -> Result<PoolOverallRow> {
            let block = ResultBlock::new(&block.participant, &block.text);
            let stage = block.stage_line(grammar)?;
            let overall = block.overall_line(grammar)?;
            Ok(PoolOverallRow::new(&stage, &overall))
        })
        .collect()
}

/// Rank the rows within the pool, order them for display and lay out the table
pub fn render_ranked<R: Standing + TableRow>(
    mut rows: Vec<R>,
    headers: &[&'static str],
    sort: SortKey,
) -> String {
    rank_pool(&mut rows);
    resort(&mut rows, sort);

    let mut table = Table::new(headers);
    for row in &rows {
        table.push_row(row.cells());
    }
    table.render()
}

/// Parse, rank and render the blocks of a stage or overall report
pub fn render_report(
    kind: ReportKind,
    blocks: &[ParticipantBlock],
    grammar: &LineGrammar,
    sort: SortKey,
) -> Result<String> {
    let rendered = match kind {
        ReportKind::Stage => render_ranked(stage_rows(blocks, grammar)?, STAGE_HEADERS, sort),
        ReportKind::Overall { pool_only: false } => {
            render_ranked(overall_rows(blocks, grammar)?, OVERALL_HEADERS, sort)
        }
        ReportKind::Overall { pool_only: true } => render_ranked(
            pool_overall_rows(blocks, grammar)?,
            POOL_OVERALL_HEADERS,
            sort,
        ),
        ReportKind::Teams => render_teams(blocks),
    };
    Ok(rendered)
}

/// Team blocks are printed as fetched, one after another
pub fn render_teams(blocks: &[ParticipantBlock]) -> String {
    blocks
        .iter()
        .map(|block| format!("{}\n", block.text))
        .collect()
}
