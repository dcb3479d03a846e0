use serde::Serialize;
use strum::IntoEnumIterator;

use super::Split;
use crate::error::Result;
use crate::table::{Cell, CellReader, Record};

/// Games played and their outcomes over one [`Split`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SplitStats {
    pub played: u32,
    pub win: u32,
    pub draw: u32,
    pub lose: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl SplitStats {
    fn to_cells(self) -> [Cell; 6] {
        [
            self.played.into(),
            self.win.into(),
            self.draw.into(),
            self.lose.into(),
            self.goals_for.into(),
            self.goals_against.into(),
        ]
    }

    fn read(reader: &mut CellReader) -> Result<Self> {
        Ok(Self {
            played: reader.int()?,
            win: reader.int()?,
            draw: reader.int()?,
            lose: reader.int()?,
            goals_for: reader.int()?,
            goals_against: reader.int()?,
        })
    }
}

/// A team's row in a league table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub rank: u16,
    pub team_id: u32,
    pub team_name: String,
    pub points: i32,
    pub goals_diff: i32,
    /// Recent results, most recent last (e.g. `WWDLW`).
    pub form: Option<String>,
    pub all: SplitStats,
    pub home: SplitStats,
    pub away: SplitStats,
}

impl Standing {
    pub fn split(&self, split: Split) -> &SplitStats {
        match split {
            Split::All => &self.all,
            Split::Home => &self.home,
            Split::Away => &self.away,
        }
    }
}

impl Record for Standing {
    const COLUMNS: &'static [&'static str] = &[
        "rank",
        "team.id",
        "team.name",
        "points",
        "goalsDiff",
        "form",
        "all.played",
        "all.win",
        "all.draw",
        "all.lose",
        "all.goals.for",
        "all.goals.against",
        "home.played",
        "home.win",
        "home.draw",
        "home.lose",
        "home.goals.for",
        "home.goals.against",
        "away.played",
        "away.win",
        "away.draw",
        "away.lose",
        "away.goals.for",
        "away.goals.against",
    ];

    fn to_cells(&self) -> Vec<Cell> {
        let mut cells = vec![
            self.rank.into(),
            self.team_id.into(),
            self.team_name.as_str().into(),
            self.points.into(),
            self.goals_diff.into(),
            self.form.clone().into(),
        ];
        for split in Split::iter() {
            cells.extend(self.split(split).to_cells());
        }
        cells
    }

    fn from_cells(cells: &[Cell]) -> Result<Self> {
        let mut reader = CellReader::new(Self::COLUMNS, cells)?;
        Ok(Self {
            rank: reader.int()?,
            team_id: reader.int()?,
            team_name: reader.text()?,
            points: reader.int()?,
            goals_diff: reader.int()?,
            form: reader.opt_text()?,
            all: SplitStats::read(&mut reader)?,
            home: SplitStats::read(&mut reader)?,
            away: SplitStats::read(&mut reader)?,
        })
    }
}
