//! Path templates and the structural matching algorithm.
//!
//! A template like `/products/:category/:productId` is compiled once at
//! registration into a fixed sequence of tagged segments — literals that must
//! compare equal, and parameters that bind whatever sits at their position.
//! Matching is a straight index-by-index walk: O(segment count), no regex,
//! no backtracking.

use std::collections::HashMap;

/// Parameter bindings extracted from a matched path, keyed by parameter name.
pub type Params = HashMap<String, String>;

/// One segment of a compiled template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Segment {
    /// Must equal the request segment byte-for-byte.
    Literal(String),
    /// Matches any segment; binds its value under the given name.
    Param(String),
}

/// A compiled path template. Segment count is fixed at parse time.
#[derive(Clone, Debug)]
pub(crate) struct RouteTemplate {
    raw: String,
    segments: Vec<Segment>,
}

impl RouteTemplate {
    /// Compiles `template` into its segment sequence.
    ///
    /// Splitting keeps the empty segment a leading `/` produces, so `/a/b`
    /// compiles to `["", "a", "b"]` — request paths are split the same way,
    /// which is what makes segment counts comparable at all.
    pub(crate) fn parse(template: &str) -> Self {
        let segments = template
            .split('/')
            .map(|seg| match seg.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_owned()),
                None => Segment::Literal(seg.to_owned()),
            })
            .collect();
        Self { raw: template.to_owned(), segments }
    }

    /// Structural match of `path` against this template.
    ///
    /// Returns the parameter bindings on a match — exactly one entry per
    /// declared parameter segment — or `None` if the path does not fit.
    ///
    /// A path that is byte-equal to the raw template short-circuits as a
    /// match with no bindings; that fast path is what serves static routes
    /// like `/` and `/products`. Otherwise segment counts must agree, and
    /// every literal segment must compare equal. A template made entirely of
    /// parameter segments therefore matches any path of the right shape —
    /// count equality alone is sufficient.
    pub(crate) fn capture(&self, path: &str) -> Option<Params> {
        if path == self.raw {
            return Some(Params::new());
        }

        let parts: Vec<&str> = path.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), (*part).to_owned());
                }
            }
        }
        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_literal_and_param_segments() {
        let t = RouteTemplate::parse("/products/:category/:productId");
        assert_eq!(
            t.segments,
            vec![
                Segment::Literal(String::new()),
                Segment::Literal("products".to_owned()),
                Segment::Param("category".to_owned()),
                Segment::Param("productId".to_owned()),
            ]
        );
    }

    #[test]
    fn literal_template_matches_itself_with_empty_params() {
        for raw in ["/", "/products", "/events"] {
            let t = RouteTemplate::parse(raw);
            let params = t.capture(raw).expect("template should match itself");
            assert!(params.is_empty());
        }
    }

    #[test]
    fn param_segment_binds_the_request_value() {
        let t = RouteTemplate::parse("/products/:productId");
        let params = t.capture("/products/42").unwrap();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("productId").map(String::as_str), Some("42"));
    }

    #[test]
    fn binds_every_declared_param() {
        let t = RouteTemplate::parse("/products/:category/:productId");
        let params = t.capture("/products/fruit/2").unwrap();
        assert_eq!(params.get("category").map(String::as_str), Some("fruit"));
        assert_eq!(params.get("productId").map(String::as_str), Some("2"));
    }

    #[test]
    fn segment_count_mismatch_never_matches() {
        let t = RouteTemplate::parse("/products/:productId");
        assert!(t.capture("/products").is_none());
        assert!(t.capture("/products/1/extra").is_none());
        assert!(t.capture("/").is_none());
    }

    #[test]
    fn literal_mismatch_short_circuits() {
        let t = RouteTemplate::parse("/products/:productId");
        assert!(t.capture("/events/1").is_none());
    }

    #[test]
    fn leading_slash_is_part_of_the_structure() {
        // "a/b" splits without the leading empty segment, so it cannot match
        // a template registered with a leading slash.
        let t = RouteTemplate::parse("/a/b");
        assert!(t.capture("a/b").is_none());
        assert!(t.capture("/a/b").is_some());
    }

    #[test]
    fn all_param_template_matches_on_shape_alone() {
        // Count equality is sufficient; no literal comparison is required.
        let t = RouteTemplate::parse("/:a/:b");
        let params = t.capture("/x/y").unwrap();
        assert_eq!(params.get("a").map(String::as_str), Some("x"));
        assert_eq!(params.get("b").map(String::as_str), Some("y"));
    }
}
