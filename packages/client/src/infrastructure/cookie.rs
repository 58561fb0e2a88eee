//! Cookie reader over a `Cookie`-header style string (`a=1; b=2`).

use crate::domain::CookieSource;

/// Cookie store parsed from a raw cookie string, as a page exposes it.
///
/// Values are percent-decoded; a value that does not decode is returned raw.
#[derive(Debug, Clone, Default)]
pub struct CookieHeader {
    raw: String,
}

impl CookieHeader {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

impl CookieSource for CookieHeader {
    fn get(&self, name: &str) -> Option<String> {
        self.raw
            .split(';')
            .map(str::trim)
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == name)
            .map(|(_, value)| match urlencoding::decode(value) {
                Ok(decoded) => decoded.into_owned(),
                Err(_) => value.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cookie_among_many() {
        // テスト項目: 複数の Cookie の中から名前で値を取得できる
        // given (前提条件):
        let cookies = CookieHeader::new("sessionid=abc; csrftoken=tok123;theme=dark");

        // then (期待する結果):
        assert_eq!(cookies.get("csrftoken").as_deref(), Some("tok123"));
        assert_eq!(cookies.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_get_cookie_is_percent_decoded() {
        // テスト項目: 値はパーセントデコードされる
        let cookies = CookieHeader::new("csrftoken=a%2Bb%3Dc");
        assert_eq!(cookies.get("csrftoken").as_deref(), Some("a+b=c"));
    }

    #[test]
    fn test_get_cookie_requires_exact_name() {
        // テスト項目: 名前の前方一致では取得しない
        let cookies = CookieHeader::new("csrftoken_old=x");
        assert_eq!(cookies.get("csrftoken"), None);
        assert_eq!(CookieHeader::default().get("csrftoken"), None);
    }
}
