use ::async_trait::async_trait;
use serde_json::Value;

use super::urls::*;
use crate::{error::*, http::StatusCode, model::*, normalize, util};

/// The proxy's field names are not self-describing and individual fields
/// come and go between deployments, so the body is read as loose JSON and
/// every stat passes through the safe coercers instead of a fixed schema.
#[derive(Clone)]
pub struct CodeChefClient {
    http: crate::http::Client,
    api_base: String,
}

impl CodeChefClient {
    pub fn new() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    pub fn with_api_base(api_base: impl AsRef<str>) -> Self {
        Self {
            http: crate::http::Client::default(),
            api_base: util::trim_base(api_base),
        }
    }

    pub async fn fetch_raw(&self, username: &str) -> Result<Value> {
        let platform = Platform::CodeChef;
        let url = handle_url(&self.api_base, username);
        let (status, body) = util::send(self.http.get(&url), platform, &url).await?;
        if status == StatusCode::NOT_FOUND {
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
        let value: Value = util::decode_json(platform, &body)?;
        // The proxy answers 200 with {"success": false, ...} for unknown users.
        if value.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(Error::NotFound {
                platform,
                handle: username.to_owned(),
            });
        }
        Ok(value)
    }
}

impl Default for CodeChefClient {
    fn default() -> Self {
        Self::new()
    }
}

fn profile_from_value(value: &Value) -> CodeChefProfile {
    CodeChefProfile {
        username: normalize::string_or(value.get("name"), "N/A"),
        rating: normalize::string_or(value.get("currentRating"), "N/A"),
        highest_rating: normalize::string_or(value.get("highestRating"), "N/A"),
        global_rank: normalize::string_or(value.get("globalRank"), "N/A"),
        country_rank: normalize::string_or(value.get("countryRank"), "N/A"),
        stars: normalize::stars_label(value.get("stars")),
        problems_solved: normalize::uint_or(value.get("problemsSolved"), 0) as u32,
        contests_participated: normalize::uint_or(value.get("contestsParticipated"), 0) as u32,
    }
}

#[async_trait]
impl Client for CodeChefClient {
    fn platform(&self) -> Platform {
        Platform::CodeChef
    }

    async fn fetch_stats(&self, username: &str) -> Result<Profile> {
        let value = self.fetch_raw(username).await?;
        Ok(Profile::CodeChef(profile_from_value(&value)))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use once_cell::sync::Lazy;
    use serde_json::json;

    static FULL_BODY: Lazy<Value> = Lazy::new(|| {
        json!({
            "success": true,
            "name": "gennady.korotkevich",
            "currentRating": 2845,
            "highestRating": 2923,
            "globalRank": 1,
            "countryRank": 1,
            "stars": "7★"
        })
    });

    #[test]
    fn full_shape_normalizes_numbers_to_strings() {
        let profile = profile_from_value(&FULL_BODY);
        assert_eq!(profile.username, "gennady.korotkevich");
        assert_eq!(profile.rating, "2845");
        assert_eq!(profile.highest_rating, "2923");
        assert_eq!(profile.global_rank, "1");
        assert_eq!(profile.country_rank, "1");
        assert_eq!(profile.stars, "7");
        assert_eq!(profile.problems_solved, 0);
        assert_eq!(profile.contests_participated, 0);
    }

    #[test]
    fn partial_shape_defaults_every_missing_field() {
        let body = json!({"name": null, "currentRating": 1500, "stars": 3});
        let profile = profile_from_value(&body);
        assert_eq!(profile.username, "N/A");
        assert_eq!(profile.rating, "1500");
        assert_eq!(profile.highest_rating, "N/A");
        assert_eq!(profile.global_rank, "N/A");
        assert_eq!(profile.country_rank, "N/A");
        assert_eq!(profile.stars, "3");
    }

    #[test]
    fn empty_body_yields_all_sentinels() {
        let profile = profile_from_value(&json!({}));
        assert_eq!(profile.username, "N/A");
        assert_eq!(profile.rating, "N/A");
        assert_eq!(profile.stars, "0");
        assert_eq!(profile.problems_solved, 0);
    }

    #[test]
    fn normalization_is_idempotent_over_equal_bodies() {
        assert_eq!(profile_from_value(&FULL_BODY), profile_from_value(&FULL_BODY));
    }
}
