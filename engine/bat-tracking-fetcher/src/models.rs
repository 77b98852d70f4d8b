use serde::Serialize;

/// One decoded leaderboard cell.
///
/// Column types are schema-on-read: anything that parses as a number is
/// numeric, everything else stays text. Serializes untagged so JSON output
/// reads like the original table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// One player's aggregated metrics over a query window. Identity fields
/// (`id`, `name` in "Last, First" form, `side`) are ordinary columns; the
/// schema is the service's, not ours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub cells: Vec<Cell>,
}

/// Ordered result of one leaderboard fetch. Empty is a valid state,
/// distinguishable from an error, meaning no qualifying players for the
/// window.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeaderboardResult {
    /// Column names exactly as the payload header gave them, including
    /// columns unknown to this system.
    pub columns: Vec<String>,
    pub rows: Vec<LeaderboardRow>,
}

impl LeaderboardResult {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (row, column name), if both exist.
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.cells.get(idx)
    }

    /// Iterate one column top to bottom.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a Cell>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().filter_map(move |row| row.cells.get(idx)))
    }
}

/// One merged row of a monthly aggregation, stamped with the calendar month
/// (4–10) of the window it was fetched from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyRow {
    pub month: u32,
    pub row: LeaderboardRow,
}

/// Month-by-month aggregate for one season. Produced only by the temporal
/// aggregator, never by a single fetch. Months whose window returned no
/// qualifying players are absent, not zero-filled.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthlyResult {
    /// Header of the first non-empty window.
    pub columns: Vec<String>,
    pub rows: Vec<MonthlyRow>,
}

impl MonthlyResult {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct months with data, in month order. Lets a trend consumer tell
    /// "no data this month" apart from "zero value this month".
    pub fn months_present(&self) -> Vec<u32> {
        let mut months: Vec<u32> = self.rows.iter().map(|r| r.month).collect();
        months.sort_unstable();
        months.dedup();
        months
    }
}

/// First-half / second-half comparison for one season. The two windows are
/// fixed and non-overlapping; neither half is month-stamped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SplitResult {
    pub first_half: LeaderboardResult,
    pub second_half: LeaderboardResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LeaderboardResult {
        LeaderboardResult {
            columns: vec!["id".into(), "name".into(), "avg_bat_speed".into()],
            rows: vec![
                LeaderboardRow {
                    cells: vec![
                        Cell::Number(519317.0),
                        Cell::Text("Stanton, Giancarlo".into()),
                        Cell::Number(81.2),
                    ],
                },
                LeaderboardRow {
                    cells: vec![
                        Cell::Number(665833.0),
                        Cell::Text("Cruz, Oneil".into()),
                        Cell::Number(78.5),
                    ],
                },
            ],
        }
    }

    #[test]
    fn get_by_column_name() {
        let result = sample();

        assert_eq!(
            result.get(0, "name").and_then(Cell::as_str),
            Some("Stanton, Giancarlo")
        );
        assert_eq!(
            result.get(1, "avg_bat_speed").and_then(Cell::as_f64),
            Some(78.5)
        );
        assert!(result.get(0, "no_such_column").is_none());
        assert!(result.get(5, "name").is_none());
    }

    #[test]
    fn column_iteration() {
        let result = sample();
        let speeds: Vec<f64> = result
            .column("avg_bat_speed")
            .unwrap()
            .filter_map(Cell::as_f64)
            .collect();

        assert_eq!(speeds, vec![81.2, 78.5]);
    }

    #[test]
    fn months_present_is_sorted_and_deduplicated() {
        let row = LeaderboardRow {
            cells: vec![Cell::Empty],
        };
        let monthly = MonthlyResult {
            columns: vec!["id".into()],
            rows: vec![
                MonthlyRow {
                    month: 7,
                    row: row.clone(),
                },
                MonthlyRow {
                    month: 4,
                    row: row.clone(),
                },
                MonthlyRow { month: 7, row },
            ],
        };

        assert_eq!(monthly.months_present(), vec![4, 7]);
    }

    #[test]
    fn cells_serialize_untagged() {
        let json = serde_json::to_string(&vec![
            Cell::Number(81.2),
            Cell::Text("Cruz, Oneil".into()),
            Cell::Empty,
        ])
        .unwrap();

        assert_eq!(json, r#"[81.2,"Cruz, Oneil",null]"#);
    }
}
