//! Output document and date handling through the public API

use nba_potd::core::{sanitize, OutputValue, NIL_SENTINEL};
use nba_potd::{GameDate, Season};
use chrono::NaiveDate;
use serde_json::json;

#[cfg(test)]
mod sanitize_tests {
    use super::*;

    #[test]
    fn test_non_finite_values_become_sentinel() {
        let document = OutputValue::map([
            ("Player", OutputValue::from("Someone")),
            ("Points", OutputValue::from(f64::NAN)),
            (
                "Splits",
                OutputValue::from(vec![1.5, f64::INFINITY, f64::NEG_INFINITY]),
            ),
        ]);

        assert!(!document.is_clean());
        assert_eq!(
            document.into_json(),
            json!({
                "Player": "Someone",
                "Points": NIL_SENTINEL,
                "Splits": [1.5, NIL_SENTINEL, NIL_SENTINEL]
            })
        );
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let document = OutputValue::from(vec![f64::NAN, 2.0]);
        let once = sanitize(document);
        assert!(once.is_clean());
        assert_eq!(sanitize(once.clone()), once);
    }

    #[test]
    fn test_serialized_text_never_contains_nan() {
        let document = OutputValue::map([("x", OutputValue::Float(f64::NAN))]);
        let text = serde_json::to_string(&document).unwrap();
        assert_eq!(text, r#"{"x":"Nil"}"#);
    }
}

#[cfg(test)]
mod date_tests {
    use super::*;

    #[test]
    fn test_days_before_crosses_year_boundary() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let date = GameDate::days_before(today, 1);
        assert_eq!(date.to_string(), "12/31/2024");
        assert_eq!(date.season(), Season::new(2024));
    }

    #[test]
    fn test_season_boundaries() {
        let sept: GameDate = "2025-09-30".parse().unwrap();
        let oct: GameDate = "2025-10-01".parse().unwrap();
        assert_eq!(sept.season().to_string(), "2024-25");
        assert_eq!(oct.season().to_string(), "2025-26");
        assert_eq!("1999-00".parse::<Season>().unwrap(), Season::new(1999));
    }
}
