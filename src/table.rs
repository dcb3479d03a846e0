//! Rectangular views over flattened API records.
//!
//! A [`Table`] keeps the typed records it was built from and exposes them as
//! rows of [`Cell`]s under a fixed list of column names. Records can be
//! rebuilt from flat rows through [`Record::from_cells`].

use std::io::{self, Write};

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::error::{FootballError, Result};

/// A single scalar value in a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Int(i64),
    Text(String),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Cell::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<DateTime<Utc>> {
        match self {
            Cell::DateTime(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Int(v) => write!(f, "{v}"),
            Cell::Text(v) => write!(f, "{v}"),
            Cell::Date(v) => write!(f, "{v}"),
            Cell::DateTime(v) => write!(f, "{}", v.to_rfc3339_opts(SecondsFormat::Secs, true)),
        }
    }
}

impl From<String> for Cell {
    fn from(v: String) -> Self {
        Cell::Text(v)
    }
}

impl From<&str> for Cell {
    fn from(v: &str) -> Self {
        Cell::Text(v.to_string())
    }
}

impl From<NaiveDate> for Cell {
    fn from(v: NaiveDate) -> Self {
        Cell::Date(v)
    }
}

impl From<DateTime<Utc>> for Cell {
    fn from(v: DateTime<Utc>) -> Self {
        Cell::DateTime(v)
    }
}

macro_rules! int_cell {
    ($($t:ty),*) => {
        $(impl From<$t> for Cell {
            fn from(v: $t) -> Self {
                Cell::Int(i64::from(v))
            }
        })*
    };
}

int_cell!(u16, u32, i32);

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Cell::Null, Into::into)
    }
}

/// A flat record with a fixed column layout.
pub trait Record: Sized {
    /// Column names, in row order.
    const COLUMNS: &'static [&'static str];

    /// Flatten the record into one cell per column.
    fn to_cells(&self) -> Vec<Cell>;

    /// Rebuild the record from a flat row laid out as [`Record::COLUMNS`].
    fn from_cells(cells: &[Cell]) -> Result<Self>;
}

/// Reads typed values off a flat row, column by column.
pub(crate) struct CellReader<'a> {
    columns: std::slice::Iter<'static, &'static str>,
    cells: std::slice::Iter<'a, Cell>,
}

impl<'a> CellReader<'a> {
    pub(crate) fn new(columns: &'static [&'static str], cells: &'a [Cell]) -> Result<Self> {
        if columns.len() != cells.len() {
            return Err(FootballError::RowArity {
                expected: columns.len(),
                found: cells.len(),
            });
        }
        Ok(Self {
            columns: columns.iter(),
            cells: cells.iter(),
        })
    }

    fn advance(&mut self) -> (&'static str, &'a Cell) {
        // Lengths are checked in `new`, so both iterators run out together.
        let column = self.columns.next().copied().unwrap_or_default();
        let cell = self.cells.next().unwrap_or(&Cell::Null);
        (column, cell)
    }

    pub(crate) fn int<T: TryFrom<i64>>(&mut self) -> Result<T> {
        let (column, cell) = self.advance();
        cell.as_int()
            .and_then(|v| T::try_from(v).ok())
            .ok_or(FootballError::Cell {
                column,
                expected: "an integer in range",
            })
    }

    pub(crate) fn text(&mut self) -> Result<String> {
        let (column, cell) = self.advance();
        cell.as_text().map(str::to_string).ok_or(FootballError::Cell {
            column,
            expected: "text",
        })
    }

    pub(crate) fn opt_text(&mut self) -> Result<Option<String>> {
        let (column, cell) = self.advance();
        match cell {
            Cell::Null => Ok(None),
            Cell::Text(v) => Ok(Some(v.clone())),
            _ => Err(FootballError::Cell {
                column,
                expected: "text or null",
            }),
        }
    }

    pub(crate) fn date(&mut self) -> Result<NaiveDate> {
        let (column, cell) = self.advance();
        cell.as_date().ok_or(FootballError::Cell {
            column,
            expected: "a date",
        })
    }

    pub(crate) fn date_time(&mut self) -> Result<DateTime<Utc>> {
        let (column, cell) = self.advance();
        cell.as_date_time().ok_or(FootballError::Cell {
            column,
            expected: "a utc timestamp",
        })
    }
}

/// A table of records of one kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<R> {
    records: Vec<R>,
}

impl<R: Record> Table<R> {
    /// A table with the record's columns and no rows.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<R>) -> Self {
        Self { records }
    }

    /// Rebuild a table from flat rows.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[Cell]>,
    {
        let records = rows
            .into_iter()
            .map(|row| R::from_cells(row.as_ref()))
            .collect::<Result<_>>()?;
        Ok(Self { records })
    }

    pub fn columns(&self) -> &'static [&'static str] {
        R::COLUMNS
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        R::COLUMNS.iter().position(|c| *c == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn into_records(self) -> Vec<R> {
        self.records
    }

    /// Flatten every record into a row of cells.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.records.iter().map(Record::to_cells).collect()
    }

    /// The cell at `row` under column `name`.
    pub fn get(&self, row: usize, name: &str) -> Option<Cell> {
        let index = self.column_index(name)?;
        let mut cells = self.records.get(row)?.to_cells();
        (index < cells.len()).then(|| cells.swap_remove(index))
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<Cell>> {
        let index = self.column_index(name)?;
        Some(
            self.rows()
                .into_iter()
                .filter(|cells| index < cells.len())
                .map(|mut cells| cells.swap_remove(index))
                .collect(),
        )
    }

    /// Write the table as tab-separated values with a header row.
    pub fn write_tsv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{}", R::COLUMNS.join("\t"))?;
        for row in self.rows() {
            let line = row
                .iter()
                .map(|c| c.to_string().replace(['\t', '\n'], " "))
                .collect::<Vec<_>>()
                .join("\t");
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }

    /// Write the table as a pretty-printed JSON array of flat objects.
    pub fn write_json<W: Write>(&self, mut writer: W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)
    }
}

/// One row keyed by column name.
struct RowMap<'a> {
    columns: &'static [&'static str],
    cells: &'a [Cell],
}

impl Serialize for RowMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, cell) in self.columns.iter().zip(self.cells) {
            map.serialize_entry(column, cell)?;
        }
        map.end()
    }
}

/// Serializes as a list of flat objects, one per row, keyed by [`Record::COLUMNS`].
impl<R: Record> Serialize for Table<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for cells in self.rows() {
            seq.serialize_element(&RowMap {
                columns: R::COLUMNS,
                cells: &cells,
            })?;
        }
        seq.end()
    }
}

impl<R: Record> Default for Table<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R: Record> FromIterator<R> for Table<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::from_records(iter.into_iter().collect())
    }
}

impl<R: Record> IntoIterator for Table<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Pair {
        id: u32,
        label: Option<String>,
    }

    impl Record for Pair {
        const COLUMNS: &'static [&'static str] = &["id", "label"];

        fn to_cells(&self) -> Vec<Cell> {
            vec![self.id.into(), self.label.clone().into()]
        }

        fn from_cells(cells: &[Cell]) -> Result<Self> {
            let mut reader = CellReader::new(Self::COLUMNS, cells)?;
            Ok(Self {
                id: reader.int()?,
                label: reader.opt_text()?,
            })
        }
    }

    fn pairs() -> Table<Pair> {
        Table::from_records(vec![
            Pair {
                id: 1,
                label: Some("one".into()),
            },
            Pair { id: 2, label: None },
        ])
    }

    #[test]
    fn test_empty_table_keeps_columns() {
        let table = Table::<Pair>::empty();
        assert!(table.is_empty());
        assert_eq!(table.columns(), &["id", "label"]);
        assert!(table.rows().is_empty());
    }

    #[test]
    fn test_get_and_column() {
        let table = pairs();
        assert_eq!(table.get(0, "label"), Some(Cell::Text("one".into())));
        assert_eq!(table.get(1, "label"), Some(Cell::Null));
        assert_eq!(table.get(5, "id"), None);
        assert_eq!(table.get(0, "missing"), None);
        assert_eq!(table.column("id"), Some(vec![Cell::Int(1), Cell::Int(2)]));
        assert_eq!(
            table.column("label"),
            Some(vec![Cell::Text("one".into()), Cell::Null])
        );
        assert_eq!(table.column("missing"), None);
    }

    #[test]
    fn test_rows_rebuild_records() {
        let table = pairs();
        let rebuilt = Table::<Pair>::from_rows(table.rows()).unwrap();
        assert_eq!(rebuilt, table);
    }

    #[test]
    fn test_from_rows_rejects_bad_rows() {
        let err = Table::<Pair>::from_rows([vec![Cell::Int(1)]]).unwrap_err();
        assert!(matches!(
            err,
            FootballError::RowArity {
                expected: 2,
                found: 1
            }
        ));

        let err = Table::<Pair>::from_rows([vec![Cell::Text("x".into()), Cell::Null]]).unwrap_err();
        assert!(matches!(err, FootballError::Cell { column: "id", .. }));

        let err = Table::<Pair>::from_rows([vec![Cell::Int(-1), Cell::Null]]).unwrap_err();
        assert!(matches!(err, FootballError::Cell { column: "id", .. }));
    }

    #[test]
    fn test_write_tsv() {
        let mut out = Vec::new();
        pairs().write_tsv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "id\tlabel\n1\tone\n2\t\n");
    }

    #[test]
    fn test_table_serializes_flat_rows() {
        let json = serde_json::to_value(pairs()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "id": 1, "label": "one" },
                { "id": 2, "label": null }
            ])
        );
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        pairs().write_json(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("]\n"));
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[1], serde_json::json!({ "id": 2, "label": null }));
    }

    #[test]
    fn test_cell_serializes_untagged() {
        let cells = vec![
            Cell::Null,
            Cell::Int(3),
            Cell::Text("x".into()),
            Cell::Date(NaiveDate::from_ymd_opt(2023, 8, 11).unwrap()),
        ];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[null,3,"x","2023-08-11"]"#);
    }
}
