use crate::cli::types::{parse_match_date, MatchId, PlayerId, TournamentId, Year};
use crate::stats::overs::parse_overs_to_balls;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;


/// The record store writes `out` as `"yes"`/`"no"`; older exports used booleans.
/// Any other text reads as not out.
fn de_out_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Flag(bool),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(false),
        Some(Raw::Flag(b)) => Ok(b),
        Some(Raw::Text(s)) => Ok(s.trim().eq_ignore_ascii_case("yes")),
    }
}

fn ser_out_flag<S>(dismissed: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *dismissed { "yes" } else { "no" })
}

/// How a batter was dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DismissalKind {
    Bowled,
    Caught,
    Lbw,
    #[serde(rename = "run out")]
    RunOut,
    Stumped,
    #[serde(rename = "hit wicket")]
    HitWicket,
    #[serde(other)]
    Other,
}

impl fmt::Display for DismissalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DismissalKind::Bowled => "bowled",
            DismissalKind::Caught => "caught",
            DismissalKind::Lbw => "lbw",
            DismissalKind::RunOut => "run out",
            DismissalKind::Stumped => "stumped",
            DismissalKind::HitWicket => "hit wicket",
            DismissalKind::Other => "other",
        };
        write!(f, "{}", s)
    }
}

/// A tracked individual.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batting_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bowling_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Achievement ids recorded by the store. Missing lists read as empty.
    #[serde(default)]
    pub achievements: Vec<String>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            dob: None,
            role: None,
            batting_style: None,
            bowling_style: None,
            avatar_url: None,
            achievements: Vec::new(),
        }
    }
}

/// One player's contribution to one match.
///
/// Every field except the two ids is optional in the stored JSON. Absent
/// numbers read as zero and absent flags as false through the accessor
/// methods below; the raw `Option`s are kept so displays can tell "not
/// recorded" apart from zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    pub player_id: PlayerId,
    pub match_id: MatchId,

    // Batting
    #[serde(rename = "dnbBat", default)]
    pub did_not_bat: bool,
    pub runs: Option<u32>,
    #[serde(rename = "balls")]
    pub balls_faced: Option<u32>,
    pub fours: Option<u32>,
    pub sixes: Option<u32>,
    #[serde(
        rename = "out",
        default,
        deserialize_with = "de_out_flag",
        serialize_with = "ser_out_flag"
    )]
    pub dismissed: bool,
    #[serde(rename = "dismissalType", skip_serializing_if = "Option::is_none")]
    pub dismissal_kind: Option<DismissalKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bowler_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fielder_name: Option<String>,

    // Bowling
    #[serde(rename = "dnbBowl", default)]
    pub did_not_bowl: bool,
    /// Overs bowled as `"whole.balls"`, e.g. `"3.4"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overs: Option<String>,
    #[serde(rename = "runsCon")]
    pub runs_conceded: Option<u32>,
    #[serde(rename = "wkts")]
    pub wickets: Option<u32>,
    #[serde(default)]
    pub hat_trick: bool,

    // Fielding
    pub catches: Option<u32>,
    pub stumpings: Option<u32>,
    pub run_outs: Option<u32>,
}

impl Performance {
    pub fn new(player_id: PlayerId, match_id: MatchId) -> Self {
        Self {
            player_id,
            match_id,
            ..Self::default()
        }
    }

    pub fn batted(&self) -> bool {
        !self.did_not_bat
    }

    /// A bowling innings needs the flag unset and a non-empty overs string.
    pub fn bowled(&self) -> bool {
        !self.did_not_bowl && self.overs.as_deref().is_some_and(|o| !o.trim().is_empty())
    }

    /// Runs scored, or 0 when the player did not bat.
    pub fn runs_scored(&self) -> u32 {
        if self.batted() {
            self.runs.unwrap_or(0)
        } else {
            0
        }
    }

    pub fn balls_bowled(&self) -> u32 {
        if self.bowled() {
            parse_overs_to_balls(self.overs.as_deref())
        } else {
            0
        }
    }

    /// Wickets taken, or 0 when the player did not bowl.
    pub fn wickets_taken(&self) -> u32 {
        if self.bowled() {
            self.wickets.unwrap_or(0)
        } else {
            0
        }
    }

    pub fn bowler(&self) -> Option<&str> {
        non_empty(self.bowler_name.as_deref())
    }

    pub fn fielder(&self) -> Option<&str> {
        non_empty(self.fielder_name.as_deref())
    }
}

impl AsRef<Performance> for Performance {
    fn as_ref(&self) -> &Performance {
        self
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// One played fixture.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: MatchId,
    /// Calendar date as stored (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: String,
    /// Free-form label such as "T20", "ODI" or "Test".
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub tournament_id: Option<TournamentId>,
    #[serde(default)]
    pub motm_player_id: Option<PlayerId>,
    #[serde(default)]
    pub performances: Vec<Performance>,
}

impl Match {
    pub fn new(id: MatchId, date: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            id,
            date: date.into(),
            format: format.into(),
            tournament_id: None,
            motm_player_id: None,
            performances: Vec::new(),
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_match_date(&self.date)
    }

    pub fn year(&self) -> Option<Year> {
        self.parsed_date().map(Year::of)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TournamentKind {
    /// Every player enters individually.
    #[default]
    Solo,
    /// Two fixed team rosters.
    Team,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Team {
    pub id: u64,
    #[serde(default)]
    pub players: Vec<PlayerId>,
}

/// Grouping of matches. The name, not the id, is what filters join on.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: TournamentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default)]
    pub participants: Vec<PlayerId>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl Tournament {
    pub fn new(id: TournamentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: TournamentKind::Solo,
            start_date: None,
            end_date: None,
            participants: Vec::new(),
            teams: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrashItemKind {
    Player,
    Match,
    Tournament,
}

/// An archived record. The payload is kept as raw JSON; statistics never read it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashItem {
    #[serde(rename = "type")]
    pub kind: TrashItemKind,
    pub data: serde_json::Value,
    #[serde(default)]
    pub deleted_on: Option<String>,
}
