use serde::{Deserialize, Serialize};

use super::atom::{Platform, StatSource};

/// Snapshot of a Codeforces public profile at fetch time.
///
/// `problems_solved` counts distinct accepted problems, never raw
/// accepted submissions.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeforcesProfile {
    pub handle: String,
    pub first_name: String,
    pub last_name: String,
    pub rating: i64,
    pub max_rating: i64,
    pub rank: String,
    pub max_rank: String,
    pub problems_solved: u32,
    pub contests_participated: u32,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeetCodeProfile {
    pub username: String,
    pub total_solved: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
    /// Percentage in 0..=100. Stays 0.0 when the upstream omits
    /// submission attempt counts.
    pub acceptance_rate: f64,
    pub ranking: u64,
    /// Rarely available from this source; 0 when unknown.
    pub streak: u32,
    pub source: StatSource,
}

/// Snapshot of a CodeChef public profile.
///
/// The proxy upstream mixes numbers, labels and nulls, so the stat
/// fields are kept as strings ("N/A" when absent, "0" for stars).
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeChefProfile {
    pub username: String,
    pub rating: String,
    pub highest_rating: String,
    pub global_rank: String,
    pub country_rank: String,
    pub stars: String,
    pub problems_solved: u32,
    pub contests_participated: u32,
}

/// Normalized per-platform stats record returned by every adapter.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Profile {
    Codeforces(CodeforcesProfile),
    LeetCode(LeetCodeProfile),
    CodeChef(CodeChefProfile),
}

impl Profile {
    pub fn platform(&self) -> Platform {
        use Profile::*;
        match self {
            Codeforces(_) => Platform::Codeforces,
            LeetCode(_) => Platform::LeetCode,
            CodeChef(_) => Platform::CodeChef,
        }
    }

    pub fn handle(&self) -> &str {
        use Profile::*;
        match self {
            Codeforces(p) => &p.handle,
            LeetCode(p) => &p.username,
            CodeChef(p) => &p.username,
        }
    }

    pub fn is_fallback(&self) -> bool {
        match self {
            Profile::LeetCode(p) => p.source.is_fallback(),
            _ => false,
        }
    }
}
