/// Pipe table syntax.
///
/// Cell counts are not checked against the header: rows are kept with
/// whatever number of cells they have.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// A line that can take part in a table (begins with `|`).
    pub fn is_row(line: &str) -> bool {
        line.trim_start().starts_with(Self::PIPE)
    }

    /// Splits a row into trimmed cells, dropping one outer pipe on each side.
    pub fn cells(line: &str) -> Vec<String> {
        let t = line.trim();
        let t = t.strip_prefix(Self::PIPE).unwrap_or(t);
        let t = t.strip_suffix(Self::PIPE).unwrap_or(t);
        t.split(Self::PIPE).map(|c| c.trim().to_string()).collect()
    }

    /// Whether a table starts at `head`: it and the following line are rows
    /// and the following line is a valid separator.
    pub fn opens(head: &str, next: Option<&str>) -> bool {
        Self::is_row(head) && next.is_some_and(|sep| Self::is_row(sep) && Self::is_separator(sep))
    }

    /// True when every cell of `line` is `:?-{3,}:?`.
    pub fn is_separator(line: &str) -> bool {
        Self::cells(line).iter().all(|c| Self::is_separator_cell(c))
    }

    fn is_separator_cell(cell: &str) -> bool {
        let c = cell.strip_prefix(':').unwrap_or(cell);
        let c = c.strip_suffix(':').unwrap_or(c);
        c.len() >= 3 && c.bytes().all(|b| b == b'-')
    }
}
