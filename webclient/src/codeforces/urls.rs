pub const DEFAULT_API_BASE: &str = "https://codeforces.com/api";

/// Most recent submissions examined when counting distinct solved problems.
pub const SUBMISSION_WINDOW: u32 = 1000;

pub fn user_info_url(api_base: &str, handle: &str) -> String {
    format!("{}/user.info?handles={}", api_base, handle)
}

pub fn user_status_url(api_base: &str, handle: &str, count: u32) -> String {
    format!(
        "{}/user.status?handle={}&from=1&count={}",
        api_base, handle, count
    )
}

pub fn user_rating_url(api_base: &str, handle: &str) -> String {
    format!("{}/user.rating?handle={}", api_base, handle)
}
