// CodeChef has no official API; stats come from a community proxy.
pub const DEFAULT_API_BASE: &str = "https://codechef-api.vercel.app";

pub fn handle_url(api_base: &str, username: &str) -> String {
    format!("{}/handle/{}", api_base, username)
}

#[cfg(test)]
mod test {
    use super::*;
    use url::Url;

    #[test]
    fn handle_url_is_well_formed() {
        let url = Url::parse(&handle_url(DEFAULT_API_BASE, "gennady.korotkevich")).unwrap();
        assert_eq!(url.path(), "/handle/gennady.korotkevich");
    }
}
