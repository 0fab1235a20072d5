use ::async_trait::async_trait;
use serde::Deserialize;

use super::urls::*;
use crate::{
    error::*,
    model::*,
    normalize::{self, AcceptedProblem, ProblemKey},
    util,
};

//---------------------------------------------------------
// Raw Codeforces API shapes

/// Envelope wrapping every Codeforces API response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CfEnvelope<T> {
    pub status: String,
    #[serde(default)]
    pub result: Option<T>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfUser {
    pub handle: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
    #[serde(default)]
    pub max_rating: Option<i64>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub max_rank: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfProblem {
    /// Absent for archive problems (e.g. acmsguru).
    #[serde(default)]
    pub contest_id: Option<i64>,
    pub index: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfSubmission {
    pub id: u64,
    pub problem: CfProblem,
    /// Absent while the submission is still judging.
    #[serde(default)]
    pub verdict: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CfRatingChange {
    pub contest_id: i64,
    #[serde(default)]
    pub contest_name: String,
    pub new_rating: i64,
}

//---------------------------------------------------------

impl<T> CfEnvelope<T> {
    /// `{status: "FAILED", comment}` becomes a typed error; a missing
    /// handle is reported through the comment text.
    pub fn into_result(self, handle: &str) -> Result<T> {
        let platform = Platform::Codeforces;
        if self.status != "OK" {
            let comment = self
                .comment
                .unwrap_or_else(|| format!("status {} with no comment", self.status));
            if comment.to_ascii_lowercase().contains("not found") {
                return Err(Error::NotFound {
                    platform,
                    handle: handle.to_owned(),
                });
            }
            return Err(Error::Upstream {
                platform,
                message: comment,
            });
        }
        self.result.ok_or_else(|| Error::Malformed {
            platform,
            message: "status OK but result is missing".to_owned(),
        })
    }
}

impl AcceptedProblem for CfSubmission {
    fn is_accepted(&self) -> bool {
        self.verdict.as_deref() == Some("OK")
    }

    fn problem_key(&self) -> ProblemKey {
        match self.problem.contest_id {
            Some(id) => (Some(id), self.problem.index.clone()),
            None => (None, format!("{}:{}", self.problem.index, self.problem.name)),
        }
    }
}

#[derive(Clone)]
pub struct CodeforcesClient {
    http: crate::http::Client,
    api_base: String,
}

impl CodeforcesClient {
    pub fn new() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    pub fn with_api_base(api_base: impl AsRef<str>) -> Self {
        Self {
            http: crate::http::Client::default(),
            api_base: util::trim_base(api_base),
        }
    }

    pub async fn fetch_user_info(&self, handle: &str) -> Result<CfUser> {
        let url = user_info_url(&self.api_base, handle);
        let users: Vec<CfUser> = self.call_api(&url, handle).await?;
        users.into_iter().next().ok_or_else(|| Error::Malformed {
            platform: Platform::Codeforces,
            message: format!("user.info returned an empty result for '{}'", handle),
        })
    }

    pub async fn fetch_recent_submissions(&self, handle: &str) -> Result<Vec<CfSubmission>> {
        let url = user_status_url(&self.api_base, handle, SUBMISSION_WINDOW);
        self.call_api(&url, handle).await
    }

    pub async fn fetch_rating_history(&self, handle: &str) -> Result<Vec<CfRatingChange>> {
        let url = user_rating_url(&self.api_base, handle);
        self.call_api(&url, handle).await
    }

    /// The API keeps its `{status, result, comment}` envelope even on
    /// non-2xx responses, so the body is decoded regardless of status.
    async fn call_api<T>(&self, url: &str, handle: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        let (_status, body) = util::send(self.http.get(url), Platform::Codeforces, url).await?;
        let envelope: CfEnvelope<T> = util::decode_json(Platform::Codeforces, &body)?;
        envelope.into_result(handle)
    }
}

impl Default for CodeforcesClient {
    fn default() -> Self {
        Self::new()
    }
}

fn build_profile(user: CfUser, problems_solved: u32, contests_participated: u32) -> CodeforcesProfile {
    CodeforcesProfile {
        handle: user.handle,
        first_name: user.first_name.unwrap_or_default(),
        last_name: user.last_name.unwrap_or_default(),
        rating: user.rating.unwrap_or(0),
        max_rating: user.max_rating.unwrap_or(0),
        rank: user.rank.unwrap_or_else(|| "Unrated".to_owned()),
        max_rank: user.max_rank.unwrap_or_else(|| "Unrated".to_owned()),
        problems_solved,
        contests_participated,
    }
}

#[async_trait]
impl Client for CodeforcesClient {
    fn platform(&self) -> Platform {
        Platform::Codeforces
    }

    async fn fetch_stats(&self, handle: &str) -> Result<Profile> {
        // No user, no profile: the info lookup must succeed before the
        // secondary calls are attempted.
        let user = self.fetch_user_info(handle).await?;

        let (submissions, rating_changes) = tokio::join!(
            self.fetch_recent_submissions(handle),
            self.fetch_rating_history(handle),
        );

        // The secondary calls only refine the profile; either may fail
        // without failing the fetch.
        let problems_solved = match submissions {
            Ok(subs) => normalize::distinct_accepted(&subs),
            Err(e) => {
                log::warn!("[Codeforces] submission history unavailable for '{}': {}", handle, e);
                0
            }
        };
        let contests_participated = match rating_changes {
            Ok(changes) => changes.len() as u32,
            Err(e) => {
                log::warn!("[Codeforces] rating history unavailable for '{}': {}", handle, e);
                0
            }
        };

        Ok(Profile::Codeforces(build_profile(
            user,
            problems_solved,
            contests_participated,
        )))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const USER_INFO_BODY: &str = r#"{
        "status": "OK",
        "result": [{
            "handle": "tourist",
            "firstName": "Gennady",
            "lastName": "Korotkevich",
            "rating": 3798,
            "maxRating": 3979,
            "rank": "legendary grandmaster",
            "maxRank": "legendary grandmaster"
        }]
    }"#;

    const SUBMISSIONS_BODY: &str = r#"{
        "status": "OK",
        "result": [
            {"id": 1, "problem": {"contestId": 1870, "index": "A", "name": "MEXanized Array"}, "verdict": "OK"},
            {"id": 2, "problem": {"contestId": 1870, "index": "B", "name": "Friendly Arrays"}, "verdict": "OK"},
            {"id": 3, "problem": {"contestId": 1870, "index": "A", "name": "MEXanized Array"}, "verdict": "OK"},
            {"id": 4, "problem": {"contestId": 1870, "index": "C", "name": "Colorful Table"}, "verdict": "WRONG_ANSWER"},
            {"id": 5, "problem": {"index": "100", "name": "Archive problem"}, "verdict": "OK"}
        ]
    }"#;

    #[test]
    fn envelope_ok_yields_result() {
        let envelope: CfEnvelope<Vec<CfUser>> = serde_json::from_str(USER_INFO_BODY).unwrap();
        let users = envelope.into_result("tourist").unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].handle, "tourist");
        assert_eq!(users[0].rating, Some(3798));
    }

    #[test]
    fn envelope_failed_with_missing_handle_is_not_found() {
        let body = r#"{"status": "FAILED", "comment": "handles: User with handle no_such_user_xyz not found"}"#;
        let envelope: CfEnvelope<Vec<CfUser>> = serde_json::from_str(body).unwrap();
        let err = envelope.into_result("no_such_user_xyz").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.platform(), Platform::Codeforces);
    }

    #[test]
    fn envelope_failed_propagates_the_comment() {
        let body = r#"{"status": "FAILED", "comment": "Call limit exceeded"}"#;
        let envelope: CfEnvelope<Vec<CfUser>> = serde_json::from_str(body).unwrap();
        let err = envelope.into_result("tourist").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Upstream);
        assert!(err.to_string().contains("Call limit exceeded"));
    }

    #[test]
    fn envelope_ok_without_result_is_malformed() {
        let body = r#"{"status": "OK"}"#;
        let envelope: CfEnvelope<Vec<CfUser>> = serde_json::from_str(body).unwrap();
        let err = envelope.into_result("tourist").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Malformed);
    }

    #[test]
    fn submissions_dedupe_into_distinct_solved_count() {
        let envelope: CfEnvelope<Vec<CfSubmission>> = serde_json::from_str(SUBMISSIONS_BODY).unwrap();
        let subs = envelope.into_result("tourist").unwrap();
        // 4 accepted submissions, one duplicated problem, one archive problem.
        assert_eq!(normalize::distinct_accepted(&subs), 3);
    }

    #[test]
    fn unjudged_submissions_do_not_count_as_accepted() {
        let sub = CfSubmission {
            id: 9,
            problem: CfProblem {
                contest_id: Some(1),
                index: "A".to_owned(),
                name: "x".to_owned(),
            },
            verdict: None,
        };
        assert!(!sub.is_accepted());
    }

    #[test]
    fn build_profile_defaults_missing_fields() {
        let user = CfUser {
            handle: "fresh_account".to_owned(),
            first_name: None,
            last_name: None,
            rating: None,
            max_rating: None,
            rank: None,
            max_rank: None,
        };
        let profile = build_profile(user, 0, 0);
        assert_eq!(profile.rating, 0);
        assert_eq!(profile.max_rating, 0);
        assert_eq!(profile.rank, "Unrated");
        assert_eq!(profile.max_rank, "Unrated");
        assert_eq!(profile.first_name, "");
    }

    #[test]
    fn build_profile_is_idempotent_over_equal_inputs() {
        let envelope: CfEnvelope<Vec<CfUser>> = serde_json::from_str(USER_INFO_BODY).unwrap();
        let user = envelope.into_result("tourist").unwrap().remove(0);
        let a = build_profile(user.clone(), 3, 156);
        let b = build_profile(user, 3, 156);
        assert_eq!(a, b);
    }
}
