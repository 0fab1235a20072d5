use serde::{Deserialize, Serialize};

pub use reqwest::Url;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter, Serialize, Deserialize,
)]
pub enum Platform {
    Codeforces,
    LeetCode,
    CodeChef,
}

impl Platform {
    pub const fn lowercase(&self) -> &'static str {
        use Platform::*;
        match self {
            Codeforces => "codeforces",
            LeetCode => "leetcode",
            CodeChef => "codechef",
        }
    }
}

/// Whether a profile's numbers came from the live upstream or from
/// the static placeholder substituted when the upstream is unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatSource {
    Live,
    Fallback,
}

impl StatSource {
    pub fn is_fallback(&self) -> bool {
        matches!(self, StatSource::Fallback)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn platform_display_and_lowercase() {
        assert_eq!(Platform::Codeforces.to_string(), "Codeforces");
        assert_eq!(Platform::LeetCode.lowercase(), "leetcode");
        assert_eq!(Platform::CodeChef.lowercase(), "codechef");
    }
}
