//! Request models for the lyrics API
//!
//! Turns the raw `/api/...` path into a validated query.

use crate::error::{ApiError, Result};

/// Literal strings upstream callers send when they mean "no value".
pub const NULLISH_QUERIES: [&str; 4] = ["None", "N/A", "null", "undefined"];

/// Song term plus an optional artist term.
pub const MAX_QUERY_TERMS: usize = 2;

/// A validated lyrics query of one or two decoded terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsQuery {
    terms: Vec<String>,
}

impl LyricsQuery {
    /// Validates already decoded terms.
    ///
    /// Fails with [`ApiError::BadRequest`] when there are no terms, more than
    /// [`MAX_QUERY_TERMS`], or any term is a nullish sentinel.
    pub fn parse<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms: Vec<String> = terms.into_iter().map(Into::into).collect();

        if terms.is_empty() || terms.len() > MAX_QUERY_TERMS {
            return Err(ApiError::BadRequest);
        }
        if terms.iter().any(|t| NULLISH_QUERIES.contains(&t.as_str())) {
            return Err(ApiError::BadRequest);
        }

        Ok(Self { terms })
    }

    /// Parses the raw (still percent-encoded) path following `/api`.
    ///
    /// Empty segments are skipped, so `/api/a//b/` yields `["a", "b"]`.
    pub fn from_path(raw: &str) -> Result<Self> {
        let terms = raw
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| {
                urlencoding::decode(segment)
                    .map(|decoded| decoded.into_owned())
                    .map_err(|_| ApiError::BadRequest)
            })
            .collect::<Result<Vec<String>>>()?;

        Self::parse(terms)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Terms joined by a single space, lowercased.
    pub fn cache_key(&self) -> String {
        self.terms.join(" ").to_lowercase()
    }

    /// The string handed to the song search: song, then artist if given.
    pub fn search_term(&self) -> String {
        match self.terms.as_slice() {
            [song, artist] => format!("{} {}", song, artist),
            [song] => song.clone(),
            _ => self.terms.join(" "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_single_term() {
        let query = LyricsQuery::parse(["Yesterday"]).unwrap();
        assert_eq!(query.terms(), ["Yesterday"]);
        assert_eq!(query.search_term(), "Yesterday");
    }

    #[test]
    fn test_cache_key_joins_and_lowercases() {
        let query = LyricsQuery::parse(["Hello", "World"]).unwrap();
        assert_eq!(query.cache_key(), "hello world");
        assert_eq!(query.search_term(), "Hello World");
    }

    #[test]
    fn test_parse_rejects_empty_and_too_many() {
        assert_eq!(LyricsQuery::parse(Vec::<String>::new()), Err(ApiError::BadRequest));
        assert_eq!(LyricsQuery::parse(["a", "b", "c"]), Err(ApiError::BadRequest));
    }

    #[test]
    fn test_parse_rejects_sentinels() {
        for sentinel in NULLISH_QUERIES {
            assert_eq!(LyricsQuery::parse([sentinel]), Err(ApiError::BadRequest));
            assert_eq!(LyricsQuery::parse(["song", sentinel]), Err(ApiError::BadRequest));
        }
    }

    #[test]
    fn test_sentinel_match_is_exact() {
        assert!(LyricsQuery::parse(["none"]).is_ok());
        assert!(LyricsQuery::parse(["Nonetheless"]).is_ok());
    }

    #[test]
    fn test_from_path_decodes_segments() {
        let query = LyricsQuery::from_path("/Let%20It%20Be/The%20Beatles").unwrap();
        assert_eq!(query.terms(), ["Let It Be", "The Beatles"]);
        assert_eq!(query.cache_key(), "let it be the beatles");
    }

    #[test]
    fn test_from_path_keeps_encoded_slash_in_one_term() {
        let query = LyricsQuery::from_path("/AC%2FDC").unwrap();
        assert_eq!(query.terms(), ["AC/DC"]);
    }

    #[test]
    fn test_from_path_rejects_decoded_sentinel() {
        assert_eq!(LyricsQuery::from_path("/N%2FA"), Err(ApiError::BadRequest));
    }

    #[test]
    fn test_from_path_rejects_invalid_utf8() {
        assert_eq!(LyricsQuery::from_path("/%FF%FE"), Err(ApiError::BadRequest));
    }

    #[test]
    fn test_from_path_empty() {
        assert_eq!(LyricsQuery::from_path(""), Err(ApiError::BadRequest));
        assert_eq!(LyricsQuery::from_path("/"), Err(ApiError::BadRequest));
    }

    fn term_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 ]{1,24}"
            .prop_filter("sentinel", |t| !NULLISH_QUERIES.contains(&t.as_str()))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        // Any sequence longer than the term limit is rejected.
        #[test]
        fn prop_too_many_terms_rejected(terms in prop::collection::vec(term_strategy(), 3..8)) {
            prop_assert_eq!(LyricsQuery::parse(terms), Err(ApiError::BadRequest));
        }

        // A sentinel anywhere in the query rejects it.
        #[test]
        fn prop_sentinel_rejected(
            term in term_strategy(),
            sentinel in prop::sample::select(NULLISH_QUERIES.to_vec()),
            sentinel_first in any::<bool>()
        ) {
            let terms = if sentinel_first {
                vec![sentinel.to_string(), term]
            } else {
                vec![term, sentinel.to_string()]
            };
            prop_assert_eq!(LyricsQuery::parse(terms), Err(ApiError::BadRequest));
        }

        // The cache key ignores case and matches the space-joined terms.
        #[test]
        fn prop_cache_key_case_insensitive(terms in prop::collection::vec(term_strategy(), 1..=2)) {
            let upper: Vec<String> = terms.iter().map(|t| t.to_uppercase()).collect();
            let a = LyricsQuery::parse(terms.clone()).unwrap();
            let b = LyricsQuery::parse(upper).unwrap();
            prop_assert_eq!(a.cache_key(), b.cache_key());
            prop_assert_eq!(a.cache_key(), terms.join(" ").to_lowercase());
        }
    }
}
