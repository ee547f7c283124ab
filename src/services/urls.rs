//! Upstream URL construction.
//!
//! Paths are joined and cleaned segment by segment: empty and `.` segments
//! are dropped and `..` removes the previous segment, so an identifier that
//! contains `/` or `..` changes the upstream path it resolves to. Each
//! cleaned segment is then percent-encoded on its own, `%` included, so an
//! already-decoded identifier is never decoded a second time upstream.

use url::Url;

/// Builds the fixed set of upstream URLs from a scheme + host base.
///
/// Any path, query or fragment on the base is replaced.
#[derive(Debug, Clone)]
pub struct UpstreamUrls {
    base: Url,
}

impl UpstreamUrls {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// `https://<base>/signin`
    pub fn sign_in(&self) -> Url {
        self.at(&["signin"])
    }

    /// `https://<base>/virtualcards`
    pub fn virtual_cards(&self) -> Url {
        self.at(&["virtualcards"])
    }

    /// `https://<base>/virtualcards/<card_id>/transactions`
    pub fn virtual_card_transactions(&self, card_id: &str) -> Url {
        self.at(&["virtualcards", card_id, "transactions"])
    }

    /// `https://<base>/transactions/<transaction_id>`
    pub fn transaction(&self, transaction_id: &str) -> Url {
        self.at(&["transactions", transaction_id])
    }

    fn at(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);

        // http(s) bases always have a path; the config rejects anything else
        if let Ok(mut path) = url.path_segments_mut() {
            path.clear().extend(clean_segments(segments));
        }
        url
    }
}

fn clean_segments<'a>(segments: &[&'a str]) -> Vec<&'a str> {
    let mut parts: Vec<&'a str> = Vec::new();

    for part in segments.iter().copied().flat_map(|segment| segment.split('/')) {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }

    parts
}
