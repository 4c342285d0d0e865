use serde::Deserialize;

/// One entry returned by the suggest endpoint
///
/// The endpoint aggregates reviews per product name, so a suggestion is
/// a name plus its review summary. Suggestions are immutable once
/// received; the next response replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Suggestion {
    pub name: String,
    pub avg_rating: f64,
    pub review_count: u64,
}

impl Suggestion {
    /// Rating and review summary as shown in a dropdown row
    ///
    /// The rating is always formatted to exactly one decimal place and
    /// the `reviews` suffix is literal, even for a single review
    /// (matches the web front end of the marketplace).
    pub fn summary(&self) -> String {
        format!("★ {:.1} • {} reviews", self.avg_rating, self.review_count)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
