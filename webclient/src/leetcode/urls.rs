pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "https://leetcode.com/graphql";

/// The endpoint rejects requests that do not look like they come from a
/// profile page, so every query carries this referer.
pub fn profile_referer(username: &str) -> String {
    format!("https://leetcode.com/{}/", username)
}

pub const PROFILE_QUERY: &str = "\
query getUserProfile($username: String!) {
  matchedUser(username: $username) {
    username
    profile { ranking }
    submitStats {
      acSubmissionNum { difficulty count submissions }
      totalSubmissionNum { difficulty count submissions }
    }
  }
}";
