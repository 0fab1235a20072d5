// exported modules
pub mod error;
pub mod model;
pub mod normalize;
pub mod token;

// client impls
pub mod codechef;
pub mod codeforces;
pub mod leetcode;

// re-exports
pub use codechef::CodeChefClient;
pub use codeforces::CodeforcesClient;
pub use error::*;
pub use leetcode::LeetCodeClient;
pub use model::*;

pub fn new_client(platform: Platform) -> Box<dyn Client> {
    use Platform::*;
    match platform {
        Codeforces => Box::new(CodeforcesClient::new()),
        LeetCode => Box::new(LeetCodeClient::new()),
        CodeChef => Box::new(CodeChefClient::new()),
    }
}

// internal modules
mod http;
mod util;
