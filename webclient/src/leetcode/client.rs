use ::async_trait::async_trait;
use serde::Deserialize;

use super::urls::*;
use crate::{
    error::*,
    model::*,
    normalize::{self, Difficulty},
    util,
};

//---------------------------------------------------------
// Raw GraphQL response shapes

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<ProfileData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(default)]
    pub matched_user: Option<MatchedUser>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUser {
    pub username: String,
    #[serde(default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub submit_stats: Option<SubmitStats>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub ranking: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStats {
    #[serde(default)]
    pub ac_submission_num: Vec<SubmissionCount>,
    #[serde(default)]
    pub total_submission_num: Vec<SubmissionCount>,
}

/// One row of a difficulty-tagged count list. `count` is solved
/// problems, `submissions` is submission attempts.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmissionCount {
    pub difficulty: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub submissions: u64,
}

//---------------------------------------------------------
// Raw third-party proxy shape (flat JSON, GET per username)

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyStats {
    pub total_solved: u32,
    pub easy_solved: u32,
    pub medium_solved: u32,
    pub hard_solved: u32,
    pub ranking: u64,
    pub streak: u32,
    pub total_submissions: u64,
}

//---------------------------------------------------------

#[derive(Debug, Clone)]
enum Upstream {
    GraphQl { endpoint: String },
    Proxy { api_base: String },
}

/// LeetCode has no officially supported public API: the primary query can
/// be blocked, rate-limited or reshaped at any time. This client therefore
/// prefers degraded success over failure, substituting a demo profile
/// whenever no usable live data exists.
#[derive(Clone)]
pub struct LeetCodeClient {
    http: crate::http::Client,
    upstream: Upstream,
}

impl LeetCodeClient {
    pub fn new() -> Self {
        Self::with_graphql_endpoint(DEFAULT_GRAPHQL_ENDPOINT)
    }

    pub fn with_graphql_endpoint(endpoint: impl AsRef<str>) -> Self {
        Self {
            http: crate::http::Client::default(),
            upstream: Upstream::GraphQl {
                endpoint: util::trim_base(endpoint),
            },
        }
    }

    /// Use a proxy that serves the flat per-username JSON shape instead of
    /// GraphQL, for deployments where the direct endpoint is blocked.
    pub fn with_stats_proxy(api_base: impl AsRef<str>) -> Self {
        Self {
            http: crate::http::Client::default(),
            upstream: Upstream::Proxy {
                api_base: util::trim_base(api_base),
            },
        }
    }

    /// Live stats only; errors propagate. The trait impl wraps this and
    /// degrades to [`fallback_profile`] instead of failing.
    pub async fn fetch_live_stats(&self, username: &str) -> Result<LeetCodeProfile> {
        match &self.upstream {
            Upstream::GraphQl { endpoint } => {
                let user = self.fetch_graphql(endpoint, username).await?;
                Ok(profile_from_matched_user(username, user))
            }
            Upstream::Proxy { api_base } => {
                let stats = self.fetch_proxy(api_base, username).await?;
                Ok(profile_from_proxy(username, stats))
            }
        }
    }

    async fn fetch_graphql(&self, endpoint: &str, username: &str) -> Result<MatchedUser> {
        let platform = Platform::LeetCode;
        let payload = serde_json::json!({
            "query": PROFILE_QUERY,
            "variables": { "username": username },
        });
        let rb = self
            .http
            .post(endpoint)
            .json(&payload)
            .header("Referer", profile_referer(username));
        let (status, body) = util::send(rb, platform, endpoint).await?;
        if !status.is_success() {
            return Err(Error::Upstream {
                platform,
                message: format!("unexpected response code {} from GraphQL endpoint", status),
            });
        }
        let resp: GraphQlResponse = util::decode_json(platform, &body)?;
        if let Some(e) = resp.errors.first() {
            return Err(Error::Upstream {
                platform,
                message: e.message.clone(),
            });
        }
        resp.data
            .and_then(|d| d.matched_user)
            .ok_or_else(|| Error::NotFound {
                platform,
                handle: username.to_owned(),
            })
    }

    async fn fetch_proxy(&self, api_base: &str, username: &str) -> Result<ProxyStats> {
        let platform = Platform::LeetCode;
        let url = format!("{}/{}", api_base, username);
        let (status, body) = util::send(self.http.get(&url), platform, &url).await?;
        if status == crate::http::StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                platform,
                handle: username.to_owned(),
            });
        }
        if !status.is_success() {
            return Err(Error::Upstream {
                platform,
                message: format!("unexpected response code {} from stats proxy", status),
            });
        }
        util::decode_json(platform, &body)
    }
}

impl Default for LeetCodeClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Demo statistics substituted when live data is unobtainable.
/// The requested username is preserved so the caller can still label
/// the card, and `source` marks the record as non-live.
pub fn fallback_profile(username: &str) -> LeetCodeProfile {
    LeetCodeProfile {
        username: username.to_owned(),
        total_solved: 2156,
        easy_solved: 543,
        medium_solved: 1087,
        hard_solved: 526,
        acceptance_rate: 67.8,
        ranking: 42,
        streak: 365,
        source: StatSource::Fallback,
    }
}

fn profile_from_matched_user(requested_username: &str, user: MatchedUser) -> LeetCodeProfile {
    let stats = user.submit_stats.unwrap_or_default();
    let counts = normalize::difficulty_counts(
        stats
            .ac_submission_num
            .iter()
            .map(|row| (row.difficulty.as_str(), row.count)),
    );
    let solved = |d: Difficulty| counts.get(&d).copied().unwrap_or(0);

    let username = if user.username.is_empty() {
        requested_username.to_owned()
    } else {
        user.username
    };
    LeetCodeProfile {
        username,
        total_solved: solved(Difficulty::All),
        easy_solved: solved(Difficulty::Easy),
        medium_solved: solved(Difficulty::Medium),
        hard_solved: solved(Difficulty::Hard),
        acceptance_rate: acceptance_rate(&stats),
        ranking: user.profile.and_then(|p| p.ranking).unwrap_or(0),
        // Not exposed by this query.
        streak: 0,
        source: StatSource::Live,
    }
}

fn profile_from_proxy(requested_username: &str, stats: ProxyStats) -> LeetCodeProfile {
    LeetCodeProfile {
        username: requested_username.to_owned(),
        total_solved: stats.total_solved,
        easy_solved: stats.easy_solved,
        medium_solved: stats.medium_solved,
        hard_solved: stats.hard_solved,
        acceptance_rate: ratio_percent(stats.total_solved as u64, stats.total_submissions),
        ranking: stats.ranking,
        streak: stats.streak,
        source: StatSource::Live,
    }
}

/// Accepted vs. attempted submissions, from the "All" rows. When the
/// upstream omits attempt counts the rate stays at the explicit 0.0
/// placeholder rather than being approximated from solved counts alone.
fn acceptance_rate(stats: &SubmitStats) -> f64 {
    let accepted = all_row_submissions(&stats.ac_submission_num);
    let attempted = all_row_submissions(&stats.total_submission_num);
    ratio_percent(accepted, attempted)
}

fn all_row_submissions(rows: &[SubmissionCount]) -> u64 {
    rows.iter()
        .find(|row| Difficulty::from_label(&row.difficulty) == Some(Difficulty::All))
        .map(|row| row.submissions)
        .unwrap_or(0)
}

fn ratio_percent(num: u64, den: u64) -> f64 {
    if num == 0 || den == 0 {
        return 0.0;
    }
    let rate = num as f64 / den as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

#[async_trait]
impl Client for LeetCodeClient {
    fn platform(&self) -> Platform {
        Platform::LeetCode
    }

    async fn fetch_stats(&self, username: &str) -> Result<Profile> {
        match self.fetch_live_stats(username).await {
            Ok(profile) => Ok(Profile::LeetCode(profile)),
            Err(e) => {
                log::warn!(
                    "[LeetCode] live stats unavailable for '{}', serving demo data: {}",
                    username,
                    e
                );
                Ok(Profile::LeetCode(fallback_profile(username)))
            }
        }
    }
}
