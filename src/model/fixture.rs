use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::table::{Cell, CellReader, Record};

/// An upcoming fixture between two teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixture {
    pub id: u32,
    /// Kickoff, always in UTC.
    pub date: DateTime<Utc>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub season: u16,
    pub round: String,
    pub home_id: u32,
    pub home_name: String,
    pub away_id: u32,
    pub away_name: String,
}

impl Record for Fixture {
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "date",
        "venue",
        "city",
        "season",
        "round",
        "home_id",
        "home_name",
        "away_id",
        "away_name",
    ];

    fn to_cells(&self) -> Vec<Cell> {
        vec![
            self.id.into(),
            self.date.into(),
            self.venue.clone().into(),
            self.city.clone().into(),
            self.season.into(),
            self.round.as_str().into(),
            self.home_id.into(),
            self.home_name.as_str().into(),
            self.away_id.into(),
            self.away_name.as_str().into(),
        ]
    }

    fn from_cells(cells: &[Cell]) -> Result<Self> {
        let mut reader = CellReader::new(Self::COLUMNS, cells)?;
        Ok(Self {
            id: reader.int()?,
            date: reader.date_time()?,
            venue: reader.opt_text()?,
            city: reader.opt_text()?,
            season: reader.int()?,
            round: reader.text()?,
            home_id: reader.int()?,
            home_name: reader.text()?,
            away_id: reader.int()?,
            away_name: reader.text()?,
        })
    }
}
