//! Cache keys.
//!
//! A key is a namespace plus an ordered list of request dimensions. Each
//! dimension is escaped before joining so distinct tuples never render to
//! the same string.

use std::fmt;

/// Logical partition of the cache store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// App detail lookups
    Apps,
    /// Keyword search results
    Keywords,
    /// Top-chart rankings
    Rankings,
    Trends,
}

impl Namespace {
    pub const ALL: [Namespace; 4] = [
        Namespace::Apps,
        Namespace::Keywords,
        Namespace::Rankings,
        Namespace::Trends,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Apps => "apps",
            Namespace::Keywords => "keywords",
            Namespace::Rankings => "rankings",
            Namespace::Trends => "trends",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Namespace::Apps => 0,
            Namespace::Keywords => 1,
            Namespace::Rankings => 2,
            Namespace::Trends => 3,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const SEPARATOR: char = ':';
const ESCAPE: char = '\\';

/// Composite cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    namespace: Namespace,
    rendered: String,
}

impl CacheKey {
    pub fn new<I, S>(namespace: Namespace, dims: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rendered = String::from(namespace.as_str());
        for dim in dims {
            rendered.push(SEPARATOR);
            for ch in dim.as_ref().chars() {
                if ch == SEPARATOR || ch == ESCAPE {
                    rendered.push(ESCAPE);
                }
                rendered.push(ch);
            }
        }
        Self {
            namespace,
            rendered,
        }
    }

    /// Keyword search, keyed by keyword and country.
    pub fn search(keyword: &str, country: &str) -> Self {
        Self::new(Namespace::Keywords, [keyword, country])
    }

    /// App detail, keyed by app id and country.
    pub fn app(app_id: &str, country: &str) -> Self {
        Self::new(Namespace::Apps, [app_id, country])
    }

    pub fn rankings(country: &str) -> Self {
        Self::new(Namespace::Rankings, [country])
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_key_rendering() {
        assert_eq!(CacheKey::search("photo", "us").as_str(), "keywords:photo:us");
        assert_eq!(CacheKey::app("123", "cn").as_str(), "apps:123:cn");
        assert_eq!(CacheKey::rankings("jp").as_str(), "rankings:jp");
    }

    #[test]
    fn test_separator_inside_dimension_is_escaped() {
        let a = CacheKey::search("a:b", "c");
        let b = CacheKey::search("a", "b:c");
        assert_ne!(a, b);
        assert_eq!(a.as_str(), "keywords:a\\:b:c");
    }

    #[test]
    fn test_underscore_dimensions_do_not_collide() {
        assert_ne!(CacheKey::search("a_b", "c"), CacheKey::search("a", "b_c"));
    }

    #[test]
    fn test_namespaces_do_not_collide() {
        let search = CacheKey::new(Namespace::Keywords, ["x"]);
        let rankings = CacheKey::new(Namespace::Rankings, ["x"]);
        assert_ne!(search, rankings);
        assert_eq!(search.namespace(), Namespace::Keywords);
    }

    proptest! {
        #[test]
        fn prop_keys_equal_iff_dims_equal(
            k1 in "[a-z:\\\\_ ]{0,8}",
            c1 in "[a-z:\\\\_]{0,3}",
            k2 in "[a-z:\\\\_ ]{0,8}",
            c2 in "[a-z:\\\\_]{0,3}",
        ) {
            let same_dims = k1 == k2 && c1 == c2;
            let same_key = CacheKey::search(&k1, &c1) == CacheKey::search(&k2, &c2);
            prop_assert_eq!(same_dims, same_key);
        }
    }
}
