//! Swipe history, matches and derived statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::dog::Dog;
use crate::swipe::SwipeAction;

/// One committed decision about a dog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeRecord {
    pub dog_id: String,
    pub action: SwipeAction,
    pub timestamp: DateTime<Utc>,
}

/// A mutual like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub dog: Dog,
    pub matched_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_id: Option<String>,
}

/// Result of submitting a swipe.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SwipeOutcome {
    pub matched: Option<Match>,
}

impl SwipeOutcome {
    pub fn is_match(&self) -> bool {
        self.matched.is_some()
    }
}

/// Counters shown on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwipeStats {
    /// Pass and like decisions. Favorites are counted separately.
    pub total_swipes: usize,
    pub matches: usize,
    pub favorites: usize,
}

impl SwipeStats {
    pub fn from_history(swipes: &[SwipeRecord], matches: &[Match]) -> Self {
        let total_swipes = swipes
            .iter()
            .filter(|s| matches!(s.action, SwipeAction::Pass | SwipeAction::Like))
            .count();
        let favorites = swipes
            .iter()
            .filter(|s| s.action == SwipeAction::Favorite)
            .count();
        Self {
            total_swipes,
            matches: matches.len(),
            favorites,
        }
    }
}

/// Relative age of a timestamp: "Just now", "5m ago", "3h ago", "2d ago",
/// or the calendar date once a week has passed.
pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(then);
    let mins = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if mins < 1 {
        "Just now".to_string()
    } else if mins < 60 {
        format!("{}m ago", mins)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}
