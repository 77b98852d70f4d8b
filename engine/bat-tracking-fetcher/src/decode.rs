//! CSV payload decoding.
//!
//! The service answers a well-formed request with either a CSV export or an
//! HTML error page; both are expected shapes. Decoding therefore never
//! fails: anything that is not tabular text degrades to an empty result so a
//! single bad window cannot abort a multi-window aggregation.

use csv::ReaderBuilder;
use tracing::warn;

use crate::models::{Cell, LeaderboardResult, LeaderboardRow};

/// Decode a response body into a leaderboard result.
///
/// Header-only payloads are valid empty results. Non-tabular bodies produce
/// an empty result with a warning, not an error.
pub fn decode_table(body: &str) -> LeaderboardResult {
    let trimmed = body.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('<') {
        warn!("leaderboard response is not tabular, treating as empty");
        return LeaderboardResult::default();
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(trimmed.as_bytes());

    let columns: Vec<String> = match reader.headers() {
        Ok(headers) => headers.iter().map(str::to_string).collect(),
        Err(e) => {
            warn!("failed to read leaderboard header, treating as empty: {e}");
            return LeaderboardResult::default();
        }
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("malformed leaderboard payload, treating as empty: {e}");
                return LeaderboardResult::default();
            }
        };

        // Ragged rows are padded with empty cells; cells past the header are
        // dropped since they have no column to belong to.
        let cells = (0..columns.len())
            .map(|i| parse_cell(record.get(i)))
            .collect();
        rows.push(LeaderboardRow { cells });
    }

    LeaderboardResult { columns, rows }
}

fn parse_cell(raw: Option<&str>) -> Cell {
    match raw {
        None => Cell::Empty,
        Some(s) if s.is_empty() => Cell::Empty,
        Some(s) => match s.trim().parse::<f64>() {
            Ok(n) => Cell::Number(n),
            Err(_) => Cell::Text(s.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
id,name,side,avg_bat_speed,swing_tilt,attack_angle,attack_direction,\
ideal_attack_angle_rate,avg_intercept_y_vs_plate,avg_intercept_y_vs_batter,\
avg_batter_y_position,avg_batter_x_position,competitive_swings\n\
519317,\"Stanton, Giancarlo\",R,81.2,26.2,8.7,-2.7,0.60,2.3,27.2,24.9,33.0,714\n\
665833,\"Cruz, Oneil\",L,78.5,32.9,8.4,-6.7,0.42,9.1,35.3,26.2,28.3,879\n";

    #[test]
    fn decodes_all_rows() {
        let result = decode_table(SAMPLE_CSV);

        assert_eq!(result.len(), 2);
        assert_eq!(result.columns.len(), 13);
    }

    #[test]
    fn preserves_every_header_column() {
        let result = decode_table(SAMPLE_CSV);

        assert!(result.column_index("avg_bat_speed").is_some());
        assert!(result.column_index("attack_angle").is_some());
        // Columns this system knows nothing about survive untouched.
        assert!(result.column_index("avg_intercept_y_vs_batter").is_some());
    }

    #[test]
    fn unknown_extra_column_is_kept() {
        let payload = "id,name,brand_new_metric\n1,\"Doe, John\",42.5\n";
        let result = decode_table(payload);

        assert_eq!(result.columns, vec!["id", "name", "brand_new_metric"]);
        assert_eq!(
            result.get(0, "brand_new_metric").and_then(Cell::as_f64),
            Some(42.5)
        );
    }

    #[test]
    fn quoted_last_first_names_survive() {
        let result = decode_table(SAMPLE_CSV);

        assert_eq!(
            result.get(0, "name").and_then(Cell::as_str),
            Some("Stanton, Giancarlo")
        );
        assert_eq!(
            result.get(1, "name").and_then(Cell::as_str),
            Some("Cruz, Oneil")
        );
    }

    #[test]
    fn numeric_columns_read_as_numbers_text_as_text() {
        let result = decode_table(SAMPLE_CSV);

        assert_eq!(
            result.get(0, "avg_bat_speed").and_then(Cell::as_f64),
            Some(81.2)
        );
        assert_eq!(
            result.get(0, "attack_direction").and_then(Cell::as_f64),
            Some(-2.7)
        );
        assert_eq!(result.get(1, "side").and_then(Cell::as_str), Some("L"));
    }

    #[test]
    fn header_only_payload_is_valid_and_empty() {
        let result = decode_table("id,name,side,avg_bat_speed\n");

        assert!(result.is_empty());
        assert_eq!(result.columns.len(), 4);
    }

    #[test]
    fn html_error_page_degrades_to_empty() {
        let result = decode_table("<!DOCTYPE html>\n<html><body>Error</body></html>");

        assert!(result.is_empty());
        assert!(result.columns.is_empty());
    }

    #[test]
    fn blank_body_degrades_to_empty() {
        assert!(decode_table("").is_empty());
        assert!(decode_table("   \n  ").is_empty());
    }

    #[test]
    fn ragged_row_is_padded_with_empty_cells() {
        let payload = "id,name,avg_bat_speed\n1,\"Doe, John\"\n";
        let result = decode_table(payload);

        assert_eq!(result.len(), 1);
        assert_eq!(result.get(0, "avg_bat_speed"), Some(&Cell::Empty));
    }

    #[test]
    fn empty_cell_is_distinguishable_from_zero() {
        let payload = "id,avg_bat_speed\n1,\n2,0\n";
        let result = decode_table(payload);

        assert_eq!(result.get(0, "avg_bat_speed"), Some(&Cell::Empty));
        assert_eq!(
            result.get(1, "avg_bat_speed").and_then(Cell::as_f64),
            Some(0.0)
        );
    }
}
