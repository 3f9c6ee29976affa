//! External reference links for a committed pick, built by substituting
//! the product code (or an optional text field) into fixed templates.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::Entry;

const WIKI_BASE: &str = "https://wiki.rpcs3.net/index.php";
const FORUM_BASE: &str = "https://forums.rpcs3.net";
const STORE_BASE: &str = "https://serialstation.com/titles";

/// The characters `encodeURIComponent` leaves unescaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// RPCS3 wiki page, keyed by the wiki title (falling back to the display
/// title, then empty).
pub fn wiki_url(entry: &Entry) -> String {
    let title = entry
        .wiki_title
        .as_deref()
        .or(entry.title.as_deref())
        .unwrap_or("");
    format!(
        "{WIKI_BASE}?title={}",
        utf8_percent_encode(title, URI_COMPONENT)
    )
}

/// Forum thread for the title, when the dataset references one.
pub fn forum_url(entry: &Entry) -> Option<String> {
    entry
        .thread
        .as_deref()
        .map(|thread| format!("{FORUM_BASE}/thread-{thread}.html"))
}

/// SerialStation registry page: the product code split into its
/// 4-character prefix and numeric suffix.
pub fn store_url(entry: &Entry) -> Option<String> {
    let id = &entry.id;
    if id.len() <= 4 || !id.is_char_boundary(4) {
        return None;
    }
    let (prefix, suffix) = id.split_at(4);
    Some(format!("{STORE_BASE}/{prefix}/{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Status;

    fn entry(id: &str) -> Entry {
        Entry {
            id: id.to_string(),
            title: None,
            status: Status::Playable,
            network: None,
            date: None,
            wiki_title: None,
            thread: None,
        }
    }

    #[test]
    fn test_wiki_url_prefers_wiki_title() {
        let mut e = entry("BLES00001");
        e.title = Some("Display Title".to_string());
        e.wiki_title = Some("Wiki Title".to_string());
        assert_eq!(
            wiki_url(&e),
            "https://wiki.rpcs3.net/index.php?title=Wiki%20Title"
        );
    }

    #[test]
    fn test_wiki_url_falls_back_to_title_then_empty() {
        let mut e = entry("BLES00001");
        e.title = Some("Hatsune Miku".to_string());
        assert_eq!(
            wiki_url(&e),
            "https://wiki.rpcs3.net/index.php?title=Hatsune%20Miku"
        );

        e.title = None;
        assert_eq!(wiki_url(&e), "https://wiki.rpcs3.net/index.php?title=");
    }

    #[test]
    fn test_wiki_url_encodes_like_encode_uri_component() {
        let mut e = entry("BLES00001");
        e.wiki_title = Some("Demon's Souls & more?".to_string());
        assert_eq!(
            wiki_url(&e),
            "https://wiki.rpcs3.net/index.php?title=Demon's%20Souls%20%26%20more%3F"
        );
    }

    #[test]
    fn test_forum_url_requires_thread() {
        let mut e = entry("BLES00001");
        assert_eq!(forum_url(&e), None);

        e.thread = Some("123456".to_string());
        assert_eq!(
            forum_url(&e).as_deref(),
            Some("https://forums.rpcs3.net/thread-123456.html")
        );
    }

    #[test]
    fn test_store_url_splits_product_code() {
        assert_eq!(
            store_url(&entry("NPEA00000")).as_deref(),
            Some("https://serialstation.com/titles/NPEA/00000")
        );
        assert_eq!(
            store_url(&entry("BLES00767")).as_deref(),
            Some("https://serialstation.com/titles/BLES/00767")
        );
    }

    #[test]
    fn test_store_url_rejects_short_ids() {
        assert_eq!(store_url(&entry("BLES")), None);
        assert_eq!(store_url(&entry("")), None);
    }
}
