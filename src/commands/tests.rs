//! Tests for configuration resolution shared by the command handlers

use super::*;

#[test]
fn test_resolve_league_id_prefers_flag() {
    let flag = Some(LeagueId::new("42"));
    let result = resolve_league_id_from(flag, Some("7".to_string())).unwrap();
    assert_eq!(result, LeagueId::new("42"));
}

#[test]
fn test_resolve_league_id_from_env_value() {
    let result = resolve_league_id_from(None, Some(" 54321 ".to_string())).unwrap();
    assert_eq!(result.as_str(), "54321");
}

#[test]
fn test_resolve_league_id_defaults() {
    assert_eq!(
        resolve_league_id_from(None, None).unwrap().as_str(),
        DEFAULT_LEAGUE_ID
    );
    assert_eq!(
        resolve_league_id_from(None, Some("  ".to_string())).unwrap().as_str(),
        DEFAULT_LEAGUE_ID
    );
}

#[test]
fn test_resolve_league_id_invalid_env() {
    let result = resolve_league_id_from(None, Some("not_a_number".to_string()));
    assert!(matches!(result, Err(SleeperError::InvalidNumber(_))));
}

#[test]
fn test_resolve_api_key() {
    assert_eq!(resolve_api_key_from(Some("sk-abc\n".to_string())).unwrap(), "sk-abc");

    for missing in [None, Some(String::new())] {
        match resolve_api_key_from(missing) {
            Err(err @ SleeperError::MissingCredential { .. }) => {
                assert_eq!(err.exit_code(), 2);
                assert!(err.to_string().contains("OPENAI_API_KEY"));
            }
            other => panic!("Expected MissingCredential, got {:?}", other),
        }
    }
}
