use std::io::BufRead;

/// Delimiter used by the generated data files and the default configuration.
pub const DEFAULT_DELIMITER: &str = "   ";

#[derive(Debug)]
pub enum LoadError {
    SourceUnavailable(std::io::Error),
    MalformedRecord { line: usize, reason: String },
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::SourceUnavailable(err) => write!(f, "input source unavailable: {err}"),
            LoadError::MalformedRecord { line, reason } => {
                write!(f, "malformed record on line {line}: {reason}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::SourceUnavailable(err) => Some(err),
            LoadError::MalformedRecord { .. } => None,
        }
    }
}

/// The two location id lists, in input order. Both lists always have the
/// same length: records are only ever appended pairwise.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct LocationLists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl LocationLists {
    /// Splits every line on the first occurrence of `delimiter` and parses
    /// both fields as base-10 ids. Stops at the first malformed record.
    pub fn from_lines<I, S>(lines: I, delimiter: &str) -> Result<LocationLists, LoadError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lists = LocationLists::default();
        for (n, line) in lines.into_iter().enumerate() {
            let (left, right) = split_record(line.as_ref(), delimiter)
                .map_err(|reason| LoadError::MalformedRecord { line: n + 1, reason })?;
            lists.push(left, right);
        }
        Ok(lists)
    }

    pub fn push(&mut self, left: i64, right: i64) {
        self.left.push(left);
        self.right.push(right);
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }

    /// Sorts both lists ascending, independently of each other. This is the
    /// single mutation the lists go through; the metrics rely on it.
    pub fn into_sorted(mut self) -> SortedLists {
        self.left.sort_unstable();
        self.right.sort_unstable();
        SortedLists {
            left: self.left,
            right: self.right,
        }
    }
}

impl FromIterator<(i64, i64)> for LocationLists {
    fn from_iter<T: IntoIterator<Item = (i64, i64)>>(iter: T) -> Self {
        let mut lists = LocationLists::default();
        for (left, right) in iter {
            lists.push(left, right);
        }
        lists
    }
}

/// Location lists after the one-time sort. Element `i` of one list pairs
/// with element `i` of the other by rank, not by original row.
#[derive(Debug, Clone)]
pub struct SortedLists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl SortedLists {
    pub fn left(&self) -> &[i64] {
        &self.left
    }

    pub fn right(&self) -> &[i64] {
        &self.right
    }

    pub fn len(&self) -> usize {
        self.left.len()
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_empty()
    }
}

fn split_record(line: &str, delimiter: &str) -> Result<(i64, i64), String> {
    let Some((left, right)) = line.split_once(delimiter) else {
        return Err(format!("delimiter {delimiter:?} not found"));
    };
    Ok((parse_field(left)?, parse_field(right)?))
}

fn parse_field(field: &str) -> Result<i64, String> {
    field
        .parse::<i64>()
        .map_err(|_| format!("invalid location id {field:?}"))
}

/// Reads the input source once, sequentially, to exhaustion. Any open or
/// read failure aborts with `SourceUnavailable`.
pub fn read_lines(path: &std::path::Path) -> Result<Vec<String>, LoadError> {
    let file = std::fs::File::open(path).map_err(LoadError::SourceUnavailable)?;
    let mut lines = Vec::new();
    for line in std::io::BufReader::new(file).lines() {
        lines.push(line.map_err(LoadError::SourceUnavailable)?);
    }
    Ok(lines)
}
