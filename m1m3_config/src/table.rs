//! CSV table with comments.
//!
//! Tables are stored as a header row followed by numeric rows. Lines starting
//! with `#` are comments; the text after `#` is kept verbatim in load order
//! and written back unchanged in front of the data on save.

use std::io::Write;
use std::path::Path;

use eyre::WrapErr;

/// Dense, row-major numeric table with named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForceTable {
    headers: Vec<String>,
    rows: Vec<Vec<f64>>,
    /// Raw comment text following `#`.
    comments: Vec<String>,
}

impl ForceTable {
    /// Build a table from headers and rows. Every row must have one value per
    /// header.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<f64>>) -> eyre::Result<Self> {
        for (i, row) in rows.iter().enumerate() {
            if row.len() != headers.len() {
                eyre::bail!(
                    "row {i} has {} values, expected {} ({})",
                    row.len(),
                    headers.len(),
                    headers.join(",")
                );
            }
        }
        Ok(Self {
            headers,
            rows,
            comments: Vec::new(),
        })
    }

    /// Build a table from equally long named columns.
    pub fn from_columns(columns: &[(&str, &[f64])]) -> eyre::Result<Self> {
        let n_rows = columns.first().map_or(0, |(_, c)| c.len());
        if let Some((name, c)) = columns.iter().find(|(_, c)| c.len() != n_rows) {
            eyre::bail!("column {name} has {} rows, expected {n_rows}", c.len());
        }
        let headers = columns.iter().map(|(n, _)| (*n).to_string()).collect();
        let rows = (0..n_rows)
            .map(|r| columns.iter().map(|(_, c)| c[r]).collect())
            .collect();
        Self::new(headers, rows)
    }

    /// Load table from a CSV file, checking it holds `expected_rows` data rows.
    pub fn load(path: &Path, expected_rows: usize) -> eyre::Result<Self> {
        let content =
            std::fs::read_to_string(path).wrap_err_with(|| format!("open table {path:?}"))?;
        let table = Self::parse(&content, &path.display().to_string(), expected_rows)?;
        tracing::debug!(path = %path.display(), rows = table.n_rows(), "loaded table");
        Ok(table)
    }

    /// Parse CSV text. `source` names the table in error messages.
    pub fn parse(content: &str, source: &str, expected_rows: usize) -> eyre::Result<Self> {
        let comments = content
            .lines()
            .filter_map(|l| l.strip_prefix('#'))
            .map(str::to_string)
            .collect();

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = rdr
            .headers()
            .map_err(|e| eyre::eyre!("read CSV headers {source}: {e}"))?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.is_empty() || headers.iter().all(String::is_empty) {
            eyre::bail!("table {source} has no header row");
        }

        let mut rows = Vec::with_capacity(expected_rows);
        for (idx, rec) in rdr.records().enumerate() {
            let rec = rec.map_err(|e| eyre::eyre!("cannot parse {source}: {e}"))?;
            let mut row = Vec::with_capacity(headers.len());
            for (col, field) in rec.iter().enumerate() {
                let v = field.parse::<f64>().map_err(|_| {
                    eyre::eyre!(
                        "invalid value {field:?} in {source} row {} column {}",
                        idx + 1,
                        headers[col]
                    )
                })?;
                row.push(v);
            }
            rows.push(row);
        }

        if rows.len() != expected_rows {
            eyre::bail!(
                "expected {expected_rows} rows in {source}, found {}",
                rows.len()
            );
        }

        Ok(Self {
            headers,
            rows,
            comments,
        })
    }

    /// Append `comments` (after dropping existing ones when `reset_comments`)
    /// and write comments and data to `path`.
    pub fn save<S: AsRef<str>>(
        &mut self,
        path: &Path,
        comments: &[S],
        reset_comments: bool,
    ) -> eyre::Result<()> {
        tracing::debug!(path = %path.display(), "saving table");
        if reset_comments {
            self.reset_comments();
        }
        self.comments
            .extend(comments.iter().map(|c| format!(" {}", c.as_ref())));

        let file =
            std::fs::File::create(path).wrap_err_with(|| format!("create table {path:?}"))?;
        let mut out = std::io::BufWriter::new(file);
        self.write_to(&mut out)
            .wrap_err_with(|| format!("write table {path:?}"))?;
        out.flush().wrap_err_with(|| format!("flush table {path:?}"))?;
        Ok(())
    }

    /// Write comments and CSV data.
    pub fn write_to<W: Write>(&self, mut out: W) -> eyre::Result<()> {
        for c in &self.comments {
            writeln!(out, "#{c}")?;
        }
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);
        wtr.write_record(&self.headers)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(|v| v.to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Comment texts, without the `#` marker and the single space after it.
    pub fn comments(&self) -> Vec<&str> {
        self.comments
            .iter()
            .map(|c| c.strip_prefix(' ').unwrap_or(c))
            .collect()
    }

    pub fn reset_comments(&mut self) {
        self.comments.clear();
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Copy of a column, or `None` when the table lacks it.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let c = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r[c]).collect())
    }

    pub fn get(&self, row: usize, column: &str) -> Option<f64> {
        let c = self.column_index(column)?;
        self.rows.get(row).map(|r| r[c])
    }

    pub fn set(&mut self, row: usize, column: &str, value: f64) -> eyre::Result<()> {
        *self.cell_mut(row, column)? = value;
        Ok(())
    }

    /// Add `delta` to a cell.
    pub fn add(&mut self, row: usize, column: &str, delta: f64) -> eyre::Result<()> {
        *self.cell_mut(row, column)? += delta;
        Ok(())
    }

    /// Copy of the table without the given column. Missing columns are
    /// ignored.
    pub fn without_column(&self, name: &str) -> Self {
        let Some(c) = self.column_index(name) else {
            return self.clone();
        };
        let mut out = self.clone();
        out.headers.remove(c);
        for row in &mut out.rows {
            row.remove(c);
        }
        out
    }

    fn cell_mut(&mut self, row: usize, column: &str) -> eyre::Result<&mut f64> {
        let c = self
            .column_index(column)
            .ok_or_else(|| eyre::eyre!("table has no column {column}"))?;
        let n_rows = self.rows.len();
        self.rows
            .get_mut(row)
            .map(|r| &mut r[c])
            .ok_or_else(|| eyre::eyre!("row {row} out of range ({n_rows} rows)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const CSV: &str = "# Generated for tests\n#second line\nID,X,Y,Z\n101,0.5,0,-1\n102,1e-3,2,3.25\n";

    #[test]
    fn parses_comments_and_rows() {
        let t = ForceTable::parse(CSV, "mem", 2).unwrap();
        assert_eq!(t.headers(), ["ID", "X", "Y", "Z"]);
        assert_eq!(t.comments(), ["Generated for tests", "second line"]);
        assert_eq!(t.column("X").unwrap(), vec![0.5, 0.001]);
        assert_eq!(t.get(1, "Z"), Some(3.25));
        assert_eq!(t.get(2, "Z"), None);
        assert!(t.column("W").is_none());
    }

    #[test]
    fn row_count_mismatch() {
        let err = ForceTable::parse(CSV, "mem", 3).unwrap_err();
        assert!(format!("{err}").contains("expected 3 rows in mem, found 2"));
    }

    #[test]
    fn non_numeric_cell() {
        let err = ForceTable::parse("ID,X\n1,abc\n", "mem", 1).unwrap_err();
        assert!(format!("{err}").contains("invalid value \"abc\""));
    }

    #[test]
    fn ragged_row() {
        let err = ForceTable::parse("ID,X\n1,2,3\n", "mem", 1).unwrap_err();
        assert!(format!("{err}").contains("cannot parse mem"));
    }

    #[test]
    fn write_round_trips_values_and_comments() {
        let t = ForceTable::parse(CSV, "mem", 2).unwrap();
        let mut buf = Vec::new();
        t.write_to(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("# Generated for tests\n#second line\nID,X,Y,Z\n101,0.5,0,-1\n"));
        let back = ForceTable::parse(&text, "mem", 2).unwrap();
        assert_eq!(back, t);
    }

    #[rstest]
    #[case("#Generated 2023\nID,X\n101,1.5\n")]
    #[case("#  indented\n#\n# spaced  \nID,X\n101,-2\n")]
    fn unmodified_table_writes_identical_bytes(#[case] csv: &str) {
        let t = ForceTable::parse(csv, "mem", 1).unwrap();
        let mut buf = Vec::new();
        t.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), csv);
    }

    #[test]
    fn appended_comments_get_a_space() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        let mut t = ForceTable::parse("#raw\nID,X\n101,1\n", "mem", 1).unwrap();
        t.save(&path, &["fitted"], false).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "#raw\n# fitted\nID,X\n101,1\n");
        assert_eq!(t.comments(), ["raw", "fitted"]);
    }

    #[test]
    fn cell_updates() {
        let mut t = ForceTable::parse(CSV, "mem", 2).unwrap();
        t.add(0, "X", 1.0).unwrap();
        t.set(1, "Y", -4.0).unwrap();
        assert_eq!(t.get(0, "X"), Some(1.5));
        assert_eq!(t.get(1, "Y"), Some(-4.0));
        assert!(t.set(5, "Y", 0.0).is_err());
        assert!(t.add(0, "Q", 0.0).is_err());
    }

    #[test]
    fn drop_column() {
        let t = ForceTable::parse(CSV, "mem", 2).unwrap().without_column("ID");
        assert_eq!(t.headers(), ["X", "Y", "Z"]);
        assert_eq!(t.rows()[0], vec![0.5, 0.0, -1.0]);
    }

    #[test]
    fn from_columns_checks_lengths() {
        let t = ForceTable::from_columns(&[("A", &[1.0, 2.0]), ("B", &[3.0, 4.0])]).unwrap();
        assert_eq!(t.rows(), [vec![1.0, 3.0], vec![2.0, 4.0]]);
        assert!(ForceTable::from_columns(&[("A", &[1.0]), ("B", &[3.0, 4.0])]).is_err());
    }
}
