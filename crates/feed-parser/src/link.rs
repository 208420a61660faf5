// crates/feed-parser/src/link.rs
//! Collapsing candidate links into one canonical link and one attachment

/// A candidate link as found in the source document
///
/// Candidates only live long enough to be selected from; the canonical model
/// keeps the chosen href.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Link {
    /// Target URL
    pub href: String,
    /// Relation type (`rel`); empty when absent
    pub rel: String,
    /// Media type (`type`); empty when absent
    pub media_type: String,
    /// Human readable label
    pub title: Option<String>,
    /// Size of the resource in bytes
    pub length: Option<u64>,
}

impl Link {
    /// Creates a link with the given href, relation and media type
    pub fn new(href: impl Into<String>, rel: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            media_type: media_type.into(),
            title: None,
            length: None,
        }
    }

    /// Returns true if no field is set
    pub fn is_empty(&self) -> bool {
        *self == Link::default()
    }

    fn score(&self) -> u8 {
        if self.media_type == HTML {
            3
        } else if self.rel == "self" {
            2
        } else if self.rel.is_empty() {
            1
        } else {
            0
        }
    }
}

const HTML: &str = "text/html";

/// Picks the most relevant link of a set
///
/// An `alternate` link to `text/html` wins outright. Otherwise candidates are
/// scored (`text/html` 3, `self` 2, no relation 1, anything else 0) and the
/// highest score wins, the earliest candidate taking ties. A set where nothing
/// scores still yields its first candidate; an empty set yields an empty link.
pub fn select_primary(candidates: &[Link]) -> Link {
    let mut best: Option<(u8, &Link)> = None;

    for link in candidates {
        if link.rel == "alternate" && link.media_type == HTML {
            return link.clone();
        }

        let score = link.score();
        match best {
            Some((current, _)) if score <= current => {}
            _ => best = Some((score, link)),
        }
    }

    best.map(|(_, link)| link.clone()).unwrap_or_default()
}

/// Picks the first link with relation `enclosure`, or an empty link
pub fn select_attachment(candidates: &[Link]) -> Link {
    candidates
        .iter()
        .find(|link| link.rel == "enclosure")
        .cloned()
        .unwrap_or_default()
}
