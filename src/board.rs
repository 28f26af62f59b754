//! Presentation-side state: which tab is active, which card is expanded,
//! what is visible, and what each card shows.

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum_macros::EnumString;

use crate::classify::{has_started, is_completed, status_category, status_text};
use crate::feed::Snapshot;
use crate::model::{FavoriteSet, InningsScore, MatchRecord, StatusCategory, WinProbability};
use crate::share::{score_line, team_flag, team_label};
use crate::sort::filter_by_favorites;

pub const AWAITING_TEXT: &str = "Awaiting";
const UNKNOWN_VENUE: &str = "Unknown venue";
const UNSPECIFIED_MATCH_TYPE: &str = "Not specified";
const UNKNOWN_TOSS_CHOICE: &str = "bat/bowl";
const EVEN_ODDS: f64 = 50.0;

/// Which list the user is looking at.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, EnumString, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tab {
    #[default]
    All,
    Favorites,
}

/// Message shown when the visible list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub subtitle: &'static str,
}

const NO_FAVORITES: EmptyState = EmptyState {
    title: "No favorite matches yet",
    subtitle: "Tap the star icon on a match to add it to your favorites",
};

const NO_MATCHES: EmptyState = EmptyState {
    title: "No live matches found",
    subtitle: "Check back later for upcoming matches",
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pub tab: Tab,
    /// Id of the single card showing its details, if any.
    pub expanded: Option<String>,
}

impl Board {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            expanded: None,
        }
    }

    /// Expand `id`, or collapse it if it is already the expanded card.
    pub fn toggle_expanded(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded = None;
        } else {
            self.expanded = Some(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.as_deref() == Some(id)
    }

    /// Matches for the active tab, in snapshot order.
    pub fn visible(&self, snapshot: &Snapshot, favorites: &FavoriteSet) -> Vec<MatchRecord> {
        match self.tab {
            Tab::All => snapshot.matches.clone(),
            Tab::Favorites => filter_by_favorites(&snapshot.matches, favorites),
        }
    }

    pub fn empty_state(&self) -> EmptyState {
        match self.tab {
            Tab::All => NO_MATCHES,
            Tab::Favorites => NO_FAVORITES,
        }
    }

    /// Card view models for the active tab.
    pub fn cards(
        &self,
        snapshot: &Snapshot,
        favorites: &FavoriteSet,
        now: DateTime<Utc>,
    ) -> Vec<MatchCard> {
        self.visible(snapshot, favorites)
            .iter()
            .map(|record| {
                MatchCard::build(
                    record,
                    now,
                    favorites.contains(&record.id),
                    self.is_expanded(&record.id),
                )
            })
            .collect()
    }
}

/// Everything a match card needs, derived fresh on every render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchCard {
    pub id: String,
    pub title: String,
    pub teams: [String; 2],
    pub flags: [&'static str; 2],
    /// `r/w (o)` per team once started, otherwise "Awaiting".
    pub scores: [String; 2],
    pub started: bool,
    pub completed: bool,
    pub status_text: String,
    pub category: StatusCategory,
    pub color: &'static str,
    pub win_probability: Option<WinOdds>,
    pub is_favorite: bool,
    pub expanded: bool,
    pub details: Option<MatchDetails>,
}

/// Win-probability strip, only present for started matches that carry odds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WinOdds {
    /// Percent labels for team A and team B, `?%` when unknown.
    pub labels: [String; 2],
    /// Width of team A's share of the bar, in percent.
    pub fill: f64,
}

/// The extra rows an expanded card shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchDetails {
    pub venue: String,
    pub match_type: String,
    pub toss: Option<String>,
    pub innings: Vec<InningsLine>,
}

/// One labelled innings row, e.g. `India Inning 1: 251/5 (47.3)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InningsLine {
    pub label: String,
    pub score: String,
}

impl MatchCard {
    pub fn build(
        record: &MatchRecord,
        now: DateTime<Utc>,
        is_favorite: bool,
        expanded: bool,
    ) -> Self {
        let started = has_started(record, now);
        let category = status_category(record, now);
        let full_name = |index: usize| {
            record
                .team_info
                .get(index)
                .and_then(|info| info.name.as_deref())
        };
        let score = |index: usize| {
            if started {
                score_line(record.innings(index))
            } else {
                AWAITING_TEXT.to_string()
            }
        };
        Self {
            id: record.id.clone(),
            title: record
                .name
                .clone()
                .or_else(|| record.series_name.clone())
                .unwrap_or_default(),
            teams: [team_label(record, 0), team_label(record, 1)],
            flags: [team_flag(full_name(0)), team_flag(full_name(1))],
            scores: [score(0), score(1)],
            started,
            completed: is_completed(record),
            status_text: status_text(record, now),
            category,
            color: category.color(),
            win_probability: record
                .win_probability
                .filter(|_| started)
                .map(WinOdds::from),
            is_favorite,
            expanded,
            details: expanded.then(|| MatchDetails::build(record, started)),
        }
    }

    pub fn expand_prompt(&self) -> &'static str {
        if self.expanded {
            "Show less"
        } else {
            "Show more"
        }
    }
}

impl From<WinProbability> for WinOdds {
    fn from(odds: WinProbability) -> Self {
        // Zero is treated the same as missing.
        let known = |p: Option<f64>| p.filter(|p| *p != 0.0);
        let label =
            |p: Option<f64>| known(p).map_or_else(|| "?%".to_string(), |p| format!("{p}%"));
        Self {
            labels: [label(odds.team1), label(odds.team2)],
            fill: known(odds.team1).unwrap_or(EVEN_ODDS),
        }
    }
}

impl MatchDetails {
    fn build(record: &MatchRecord, started: bool) -> Self {
        let toss = record
            .toss_winner
            .as_deref()
            .filter(|winner| !winner.is_empty())
            .map(|winner| {
                format!(
                    "{winner} won and chose to {}",
                    text_or(record.toss_choice.as_deref(), UNKNOWN_TOSS_CHOICE)
                )
            });
        let innings = if started {
            record
                .score
                .iter()
                .take(2)
                .filter_map(InningsLine::from_innings)
                .collect()
        } else {
            Vec::new()
        };
        Self {
            venue: text_or(record.venue.as_deref(), UNKNOWN_VENUE),
            match_type: text_or(record.match_type.as_deref(), UNSPECIFIED_MATCH_TYPE),
            toss,
            innings,
        }
    }
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

impl InningsLine {
    fn from_innings(innings: &InningsScore) -> Option<Self> {
        let label = innings.inning.as_deref().filter(|l| !l.is_empty())?;
        Some(Self {
            label: label.to_string(),
            score: score_line(Some(innings)),
        })
    }
}
