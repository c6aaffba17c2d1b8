/// Line count of a results block whose preamble carries one extra line
pub const EXTENDED_BLOCK_LINE_COUNT: usize = 8;

/// Where the result lines sit inside a results block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    pub stage_line: usize,
    pub overall_line: usize,
}

const STANDARD_LAYOUT: BlockLayout = BlockLayout {
    stage_line: 2,
    overall_line: 4,
};

const EXTENDED_LAYOUT: BlockLayout = BlockLayout {
    stage_line: 2,
    overall_line: 5,
};

/// Layouts that differ from the standard one, keyed by block line count
const LAYOUTS_BY_LINE_COUNT: &[(usize, BlockLayout)] =
    &[(EXTENDED_BLOCK_LINE_COUNT, EXTENDED_LAYOUT)];

impl BlockLayout {
    pub fn for_line_count(line_count: usize) -> Self {
        LAYOUTS_BY_LINE_COUNT
            .iter()
            .find(|(count, _)| *count == line_count)
            .map(|(_, layout)| *layout)
            .unwrap_or(STANDARD_LAYOUT)
    }
}
