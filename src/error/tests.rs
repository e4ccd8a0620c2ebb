//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod sleeper_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = SleeperError::from(json_error);

        match err {
            SleeperError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = SleeperError::from(io_error);

        match err {
            SleeperError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let err = SleeperError::from(parse_error);

        match err {
            SleeperError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_unexpected_shape_message() {
        let err = SleeperError::UnexpectedShape {
            endpoint: "users".to_string(),
            expected: "array",
        };

        assert_eq!(
            err.to_string(),
            "Unexpected users response from Sleeper API (expected array)"
        );
    }

    #[test]
    fn test_missing_credential_message() {
        let err = SleeperError::MissingCredential {
            env_var: "OPENAI_API_KEY".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("Missing"));
        assert!(message.contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_missing_artifact_message() {
        let err = SleeperError::MissingArtifact {
            path: std::path::PathBuf::from("docs/data/2025/week3/power_rankings.json"),
        };

        assert!(err.to_string().contains("week3/power_rankings.json"));
    }

    #[test]
    fn test_exit_code_for_missing_credential() {
        let err = SleeperError::MissingCredential {
            env_var: "OPENAI_API_KEY".to_string(),
        };
        assert_eq!(err.exit_code(), EXIT_CONFIG);
    }

    #[test]
    fn test_exit_code_for_other_failures() {
        let shape = SleeperError::UnexpectedShape {
            endpoint: "rosters".to_string(),
            expected: "array",
        };
        let io_err = SleeperError::from(io::Error::new(io::ErrorKind::Other, "boom"));

        assert_eq!(shape.exit_code(), EXIT_FAILURE);
        assert_eq!(io_err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let anyhow_error = anyhow::anyhow!("disk full").context("writing teams.json");
        let err = SleeperError::from(anyhow_error);

        match err {
            SleeperError::Other { message } => {
                assert!(message.contains("writing teams.json"));
                assert!(message.contains("disk full"));
            }
            _ => panic!("Expected Other error variant"),
        }
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let err = SleeperError::from(io_error);

        let error_trait: &dyn std::error::Error = &err;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn failing() -> Result<String> {
            Err(SleeperError::Narrative {
                message: "empty reply".to_string(),
            })
        }

        match failing().unwrap_err() {
            SleeperError::Narrative { message } => assert_eq!(message, "empty reply"),
            _ => panic!("Expected Narrative error"),
        }
    }
}
