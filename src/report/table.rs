const COLUMN_SEPARATOR: &str = "  ";
const HEADER_PADDING: usize = 2;

/// A single table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Int(i64),
    Text(String),
    Blank,
}

impl Cell {
    fn render(&self) -> String {
        match self {
            Cell::Int(n) => n.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Blank => String::new(),
        }
    }

    fn is_text(&self) -> bool {
        matches!(self, Cell::Text(_))
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<u32> for Cell {
    fn from(value: u32) -> Self {
        Cell::Int(i64::from(value))
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Align {
    Left,
    Right,
}

/// Plain-text table: header line, dashed rule, then rows.
///
/// Number columns are right-aligned and text columns left-aligned. Each
/// column is at least two characters wider than its header.
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(Cell::render).collect())
            .collect();

        let widths: Vec<usize> = (0..self.headers.len())
            .map(|col| self.column_width(col, &rendered))
            .collect();
        let aligns: Vec<Align> = (0..self.headers.len())
            .map(|col| self.column_align(col))
            .collect();

        let mut out = String::new();
        let headers: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        push_line(&mut out, &headers, &widths, &aligns);

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(&mut out, &rule, &widths, &aligns);

        for row in &rendered {
            push_line(&mut out, row, &widths, &aligns);
        }
        out
    }

    fn column_width(&self, col: usize, rendered: &[Vec<String>]) -> usize {
        let header = self.headers[col].chars().count() + HEADER_PADDING;
        rendered
            .iter()
            .map(|row| row[col].chars().count())
            .fold(header, usize::max)
    }

    fn column_align(&self, col: usize) -> Align {
        if self.rows.iter().any(|row| row[col].is_text()) {
            Align::Left
        } else {
            Align::Right
        }
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize], aligns: &[Align]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str(COLUMN_SEPARATOR);
        }
        let width = widths[i];
        let padded = match aligns[i] {
            Align::Left => format!("{:<width$}", cell),
            Align::Right => format!("{:>width$}", cell),
        };
        line.push_str(&padded);
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_aligns_numbers_right_and_text_left() {
        let mut table = Table::new(&["Pool Rank", "Name", "Points"]);
        table.push_row(vec![Cell::Int(1), "Alice".into(), Cell::Int(300)]);
        table.push_row(vec![Cell::Int(2), "Bob".into(), Cell::Int(-50)]);

        let expected = concat!(
            "  Pool Rank  Name      Points\n",
            "-----------  ------  --------\n",
            "          1  Alice        300\n",
            "          2  Bob          -50\n",
        );
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_blank_cells_render_as_space() {
        let mut table = Table::new(&["Pool Rank", "Name"]);
        table.push_row(vec![Cell::Int(1), "Alice".into()]);
        table.push_row(vec![Cell::Blank, "Bob".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[2], "          1  Alice");
        assert_eq!(lines[3], "             Bob");
    }

    #[test]
    fn test_long_values_widen_column() {
        let mut table = Table::new(&["Name"]);
        table.push_row(vec!["Maximilian Oberhauser".into()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "Name");
        assert_eq!(lines[1], "-".repeat(21));
        assert_eq!(lines[2], "Maximilian Oberhauser");
    }

    #[test]
    fn test_empty_table_renders_headers_only() {
        let table = Table::new(&["Pool Rank", "Name"]);
        assert_eq!(table.render(), "  Pool Rank    Name\n-----------  ------\n");
    }
}
