use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::table::{Cell, CellReader, Record};

/// One season of one league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    /// `League` or `Cup`.
    #[serde(rename = "type")]
    pub kind: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Record for League {
    const COLUMNS: &'static [&'static str] = &["id", "name", "type", "start", "end"];

    fn to_cells(&self) -> Vec<Cell> {
        vec![
            self.id.into(),
            self.name.as_str().into(),
            self.kind.as_str().into(),
            self.start.into(),
            self.end.into(),
        ]
    }

    fn from_cells(cells: &[Cell]) -> Result<Self> {
        let mut reader = CellReader::new(Self::COLUMNS, cells)?;
        Ok(Self {
            id: reader.int()?,
            name: reader.text()?,
            kind: reader.text()?,
            start: reader.date()?,
            end: reader.date()?,
        })
    }
}
