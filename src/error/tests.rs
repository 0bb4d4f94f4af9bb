//! Unit tests for error handling

use super::*;

#[cfg(test)]
mod nba_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let nba_error = NbaError::from(json_error);

        match nba_error {
            NbaError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let nba_error = NbaError::from(header_error);

        match nba_error {
            NbaError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_missing_column_display() {
        let error = NbaError::MissingColumn {
            set: "PlayerStats".to_string(),
            column: "PTS".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Result set 'PlayerStats' has no 'PTS' column"
        );
    }

    #[test]
    fn test_missing_result_set_display() {
        let error = NbaError::MissingResultSet {
            name: "LineScore".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Stats response has no 'LineScore' result set"
        );
    }

    #[test]
    fn test_incomplete_summary_display() {
        let error = NbaError::IncompleteSummary {
            game_id: "0022400001".to_string(),
            reason: "home team missing from line score".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Game summary for 0022400001 is incomplete: home team missing from line score"
        );
    }

    #[test]
    fn test_invalid_config_display() {
        let error = NbaError::InvalidConfig {
            var: "NBA_POTD_PACING_MS".to_string(),
            value: "fast".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid value for NBA_POTD_PACING_MS: fast");
    }

    #[test]
    fn test_error_debug_format() {
        let error = NbaError::InvalidSeason {
            value: "2024".to_string(),
        };
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("InvalidSeason"));
        assert!(debug_str.contains("2024"));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_error() -> Result<u32> {
            Err(NbaError::InvalidPhase {
                phase: "Summer League".to_string(),
            })
        }

        let result = returns_error();
        assert!(result.is_err());
        match result.unwrap_err() {
            NbaError::InvalidPhase { phase } => assert_eq!(phase, "Summer League"),
            _ => panic!("Expected InvalidPhase error"),
        }
    }
}
