//! Prompt text for the narrative commands.
//!
//! The model is asked for a JSON object; the shape described in each prompt
//! is what the site renders, but nothing downstream validates it.

use std::collections::BTreeMap;

use crate::{
    cli::types::{PlayerId, RosterId, Season, Week},
    llm::NarrativeRequest,
    sleeper::types::{player_name, PlayerDirectory, Roster},
    transform::{matchups::Pair, teams::{fallback_team_name, TeamsDocument}},
};

pub const POWER_RANKINGS_TEMPERATURE: f32 = 0.7;
pub const PREDICTIONS_TEMPERATURE: f32 = 0.9;

/// Starters and bench players listed per roster in the predictions prompt.
pub const MAX_STARTERS: usize = 10;
pub const MAX_BENCH: usize = 6;
/// Rosters listed in the predictions prompt.
pub const MAX_ROSTERS: usize = 24;

/// Sort key for teams without a rank.
const UNRANKED: u32 = 999;

const POWER_RANKINGS_SYSTEM: &str = "You are a sharp, funny fantasy football analyst. \
Rank every team in the league for the coming week using the rosters you are given and what \
you know about the current NFL season: injuries, depth charts, recent form. Keep each summary \
short and fair, and feel free to roast questionable roster choices. \
Reply with JSON only: {\"rankings\": [{\"team_name\", \"roster_id\", \"rank\", \"summary\", \
\"analysis\": {\"key_players\": [{\"name\", \"note\"}], \"bench_potential\", \"make_or_break\"}}]}.";

const PREDICTIONS_SYSTEM: &str = "You are a confident fantasy football analyst with a sense of \
humor. For each matchup of the week pick a winner and give a punchy reason. Lean on the ranks \
but leave room for upsets. Also name one upset-alert game as the spicy matchup of the week.";

fn player_label(players: &PlayerDirectory, player_id: &PlayerId, separator: &str) -> String {
    let record = players.get(player_id);
    format!(
        "{} ({}{}{})",
        player_name(players, player_id),
        record.map(|p| p.position()).unwrap_or(""),
        separator,
        record.map(|p| p.team()).unwrap_or(""),
    )
}

/// `- roster_id=N: display / team` for every owned roster.
pub fn team_lines(teams: &TeamsDocument) -> String {
    teams
        .teams
        .iter()
        .map(|t| format!("- roster_id={}: {} / {}", t.roster_id, t.owner_display_name, t.team_name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `- roster_id=N: Name (POS - NFL), ...` for every roster.
pub fn roster_lines(rosters: &[Roster], players: &PlayerDirectory) -> String {
    rosters
        .iter()
        .filter_map(|roster| {
            let roster_id = roster.roster_id?;
            let entries: Vec<_> = roster
                .players
                .iter()
                .map(|p| player_label(players, p, " - "))
                .collect();
            Some(format!("- roster_id={roster_id}: {}", entries.join(", ")))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn power_rankings_request(
    season: Season,
    week: Week,
    teams: &TeamsDocument,
    rosters: &[Roster],
    players: &PlayerDirectory,
) -> NarrativeRequest {
    let user = format!(
        "League: season {season}, week {week}\n\
         \n\
         Teams (owner / team name):\n{teams}\n\
         \n\
         Rosters (player, position, NFL team):\n{rosters}\n\
         \n\
         Standings: every team is 0-0 so far.\n\
         \n\
         Return only the JSON object described above, one entry per team, ranks starting at 1.",
        teams = team_lines(teams),
        rosters = roster_lines(rosters, players),
    );

    NarrativeRequest {
        system: POWER_RANKINGS_SYSTEM.to_string(),
        user,
        temperature: POWER_RANKINGS_TEMPERATURE,
    }
}

/// Owned teams ordered by rank, best first. Unranked teams go last in
/// roster id order.
pub fn rank_lines(teams: &TeamsDocument, ranks: &BTreeMap<RosterId, u32>) -> String {
    let mut ordered: Vec<_> = teams
        .teams
        .iter()
        .map(|t| (t.roster_id, ranks.get(&t.roster_id).copied(), t.team_name.as_str()))
        .collect();
    ordered.sort_by_key(|&(roster_id, rank, _)| (rank.unwrap_or(UNRANKED), roster_id));

    ordered
        .into_iter()
        .map(|(roster_id, rank, name)| {
            let rank = rank.map(|r| r.to_string()).unwrap_or_else(|| "unranked".to_string());
            format!("roster_id={roster_id}: rank={rank} team={name}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `A (name) vs B (name)` per pair.
pub fn matchup_lines(pairs: &[Pair], names: &BTreeMap<RosterId, String>) -> String {
    let name_of = |id: RosterId| names.get(&id).cloned().unwrap_or_else(|| fallback_team_name(id));
    pairs
        .iter()
        .map(|&(home, away)| format!("{home} ({}) vs {away} ({})", name_of(home), name_of(away)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Starters then a few bench players, for the first [`MAX_ROSTERS`] rosters.
pub fn roster_summaries(rosters: &[Roster], players: &PlayerDirectory) -> String {
    rosters
        .iter()
        .filter_map(|roster| {
            let roster_id = roster.roster_id?;
            let starters = roster
                .starters
                .iter()
                .take(MAX_STARTERS)
                .map(|p| format!("STARTER: {}", player_label(players, p, "-")));
            let bench = roster
                .bench()
                .take(MAX_BENCH)
                .map(|p| format!("BENCH: {}", player_label(players, p, "-")));
            let entries: Vec<_> = starters.chain(bench).collect();
            Some(format!("roster_id={roster_id}: {}", entries.join(", ")))
        })
        .take(MAX_ROSTERS)
        .collect::<Vec<_>>()
        .join("\n")
}

pub struct PredictionsContext<'a> {
    pub season: Season,
    pub week: Week,
    pub teams: &'a TeamsDocument,
    pub ranks: &'a BTreeMap<RosterId, u32>,
    pub pairs: &'a [Pair],
    pub rosters: &'a [Roster],
    pub players: &'a PlayerDirectory,
}

pub fn matchup_predictions_request(ctx: &PredictionsContext<'_>) -> NarrativeRequest {
    let names: BTreeMap<RosterId, String> = ctx
        .teams
        .teams
        .iter()
        .map(|t| (t.roster_id, t.team_name.clone()))
        .collect();

    let user = format!(
        "Season {season}, week {week}\n\
         Reply strictly as JSON: {{\"predictions\": [{{\"home_roster_id\", \"away_roster_id\", \
         \"predicted_winner_roster_id\", \"reasoning\"}}], \"spicy_matchup\": {{\"home_roster_id\", \
         \"away_roster_id\", \"why\"}}}}\n\
         \n\
         Ranks (1 is best):\n{ranks}\n\
         \n\
         Matchups:\n{matchups}\n\
         \n\
         Rosters (starters, then notable bench):\n{rosters}\n\
         \n\
         One prediction per matchup. The spicy matchup should be the game where the underdog \
         has the best case; say why.",
        season = ctx.season,
        week = ctx.week,
        ranks = rank_lines(ctx.teams, ctx.ranks),
        matchups = matchup_lines(ctx.pairs, &names),
        rosters = roster_summaries(ctx.rosters, ctx.players),
    );

    NarrativeRequest {
        system: PREDICTIONS_SYSTEM.to_string(),
        user,
        temperature: PREDICTIONS_TEMPERATURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cli::types::LeagueId,
        sleeper::types::{PlayerRecord, User},
        transform::teams::build_teams,
    };
    use serde_json::json;

    fn users() -> Vec<User> {
        serde_json::from_value(json!([
            { "user_id": "u1", "display_name": "alpha", "metadata": { "team_name": "Zebras" } },
            { "user_id": "u2", "display_name": "beta" },
            { "user_id": "u3", "display_name": "coowner" }
        ]))
        .unwrap()
    }

    fn rosters() -> Vec<Roster> {
        serde_json::from_value(json!([
            { "roster_id": 1, "owner_id": "u1", "players": ["4046", "99"], "starters": ["4046"] },
            { "roster_id": 2, "owner_id": "u2", "players": [], "starters": [] }
        ]))
        .unwrap()
    }

    fn players() -> PlayerDirectory {
        let mut players = PlayerDirectory::new();
        players.insert(
            PlayerId::from("4046"),
            PlayerRecord {
                full_name: Some("Patrick Mahomes".into()),
                position: Some("QB".into()),
                team: Some("KC".into()),
                ..Default::default()
            },
        );
        players
    }

    fn teams() -> TeamsDocument {
        build_teams(&LeagueId::new("1"), &users(), &rosters())
    }

    #[test]
    fn test_team_lines_skip_co_owners() {
        assert_eq!(
            team_lines(&teams()),
            "- roster_id=1: alpha / Zebras\n- roster_id=2: beta / beta"
        );
    }

    #[test]
    fn test_roster_lines() {
        assert_eq!(
            roster_lines(&rosters(), &players()),
            "- roster_id=1: Patrick Mahomes (QB - KC), 99 ( - )\n- roster_id=2: "
        );
    }

    #[test]
    fn test_power_rankings_request() {
        let request = power_rankings_request(Season::new(2025), Week::new(4), &teams(), &rosters(), &players());

        assert_eq!(request.temperature, POWER_RANKINGS_TEMPERATURE);
        assert!(request.system.contains("\"rankings\""));
        assert!(request.user.contains("season 2025, week 4"));
        assert!(request.user.contains("- roster_id=1: alpha / Zebras"));
    }

    #[test]
    fn test_rank_lines_unranked_last() {
        let mut ranks = BTreeMap::new();
        ranks.insert(RosterId::new(2), 1);

        assert_eq!(
            rank_lines(&teams(), &ranks),
            "roster_id=2: rank=1 team=beta\nroster_id=1: rank=unranked team=Zebras"
        );
    }

    #[test]
    fn test_matchup_lines_fall_back_to_generic_names() {
        let mut names = BTreeMap::new();
        names.insert(RosterId::new(1), "Zebras".to_string());

        assert_eq!(
            matchup_lines(&[(RosterId::new(1), RosterId::new(4))], &names),
            "1 (Zebras) vs 4 (Team 4)"
        );
    }

    #[test]
    fn test_roster_summaries_limits() {
        let many: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        let roster: Roster = serde_json::from_value(json!({
            "roster_id": 1,
            "players": many.clone(),
            "starters": many[..12].to_vec()
        }))
        .unwrap();
        let rosters: Vec<Roster> = (0..30)
            .map(|i| {
                let mut r = roster.clone();
                r.roster_id = Some(RosterId::new(i));
                r
            })
            .collect();

        let text = roster_summaries(&rosters, &PlayerDirectory::new());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), MAX_ROSTERS);
        assert_eq!(lines[0].matches("STARTER:").count(), MAX_STARTERS);
        assert_eq!(lines[0].matches("BENCH:").count(), MAX_BENCH);
        assert!(lines[0].contains("BENCH: 12 (-)"));
    }

    #[test]
    fn test_predictions_request() {
        let ranks = BTreeMap::new();
        let pairs = [(RosterId::new(1), RosterId::new(2))];
        let rosters = rosters();
        let players = players();
        let teams = teams();
        let ctx = PredictionsContext {
            season: Season::new(2025),
            week: Week::new(2),
            teams: &teams,
            ranks: &ranks,
            pairs: &pairs,
            rosters: &rosters,
            players: &players,
        };

        let request = matchup_predictions_request(&ctx);

        assert_eq!(request.temperature, PREDICTIONS_TEMPERATURE);
        assert!(request.user.contains("1 (Zebras) vs 2 (beta)"));
        assert!(request.user.contains("STARTER: Patrick Mahomes (QB-KC)"));
        assert!(request.user.contains("BENCH: 99 (-)"));
        assert!(request.user.contains("\"spicy_matchup\""));
    }
}
