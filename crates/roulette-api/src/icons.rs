//! Best-effort game icon resolution.
//!
//! Icons live in a scraped store-metadata repository, one XML document
//! per product code. Lookup failures of any kind (network, non-success
//! status, missing `<icon>` element) are a normal "no icon" outcome and
//! fall back to a random placeholder image.

use std::sync::OnceLock;

use rand::Rng;
use regex::Regex;
use reqwest::Client;
use tracing::warn;

const ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/FlexBy420/sce-tmdb-scraper/main/xml";

/// Regional editions sharing one store asset resolve through a canonical
/// representative code.
const ICON_ALIASES: &[(&str, &str)] = &[("BLES00767", "MRTC00001")];

/// Shown when no icon document exists for the pick.
pub const PLACEHOLDER_ICONS: &[&str] = &[
    "https://media1.tenor.com/m/C5awosdlt2EAAAAd/rpcs3-emulation.gif",
    "https://media1.tenor.com/m/6YrZxxOsPcwAAAAd/rpcs3-clienthax.gif",
    "https://media1.tenor.com/m/of_mwJmMNbsAAAAd/azumanga-azumanga-daioh.gif",
    "https://media1.tenor.com/m/ck2dxqKEeckAAAAC/azumanga-daioh-osaka.gif",
];

/// The product code to use for the icon lookup, after aliasing.
pub fn canonical_icon_id(id: &str) -> &str {
    ICON_ALIASES
        .iter()
        .find(|(from, _)| *from == id)
        .map(|(_, to)| *to)
        .unwrap_or(id)
}

/// Pick one placeholder image uniformly at random.
pub fn random_placeholder<R: Rng>(rng: &mut R) -> &'static str {
    PLACEHOLDER_ICONS[rng.gen_range(0..PLACEHOLDER_ICONS.len())]
}

/// Client for the icon document store.
pub struct IconClient {
    http: Client,
    base_url: String,
}

impl IconClient {
    pub fn new() -> Self {
        Self::with_base_url(ICON_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Look up the icon reference for a product code.
    ///
    /// Applies the alias table first. Every failure path returns `None`.
    pub async fn lookup(&self, id: &str) -> Option<String> {
        let id = canonical_icon_id(id);
        let url = format!("{}/{id}.xml", self.base_url);

        let resp = match self.http.get(&url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                warn!("Failed to fetch game icon for {id}: {e}");
                return None;
            }
        };
        if !resp.status().is_success() {
            return None;
        }
        let text = resp.text().await.ok()?;
        icon_text(&text)
    }

    /// Icon URL for the pick, falling back to a random placeholder.
    pub async fn resolve<R: Rng>(&self, id: &str, rng: &mut R) -> String {
        match self.lookup(id).await {
            Some(url) => url,
            None => random_placeholder(rng).to_string(),
        }
    }
}

impl Default for IconClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract the text content of the `<icon>` element, if any.
fn icon_text(xml: &str) -> Option<String> {
    static ICON_RE: OnceLock<Regex> = OnceLock::new();
    let re = ICON_RE
        .get_or_init(|| Regex::new(r"(?s)<icon[^>]*>(.*?)</icon>").expect("icon pattern is valid"));
    let text = re.captures(xml)?.get(1)?.as_str().trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_alias_resolution() {
        assert_eq!(canonical_icon_id("BLES00767"), "MRTC00001");
        assert_eq!(canonical_icon_id("BLES00001"), "BLES00001");
        assert_eq!(canonical_icon_id("NPEA00000"), "NPEA00000");
    }

    #[test]
    fn test_icon_text_extraction() {
        let xml = r#"<?xml version="1.0"?>
            <title>
                <icon>https://example.com/icons/BLES00001.png</icon>
            </title>"#;
        assert_eq!(
            icon_text(xml).as_deref(),
            Some("https://example.com/icons/BLES00001.png")
        );
    }

    #[test]
    fn test_icon_text_handles_attributes() {
        let xml = r#"<icon type="image/png">icon.png</icon>"#;
        assert_eq!(icon_text(xml).as_deref(), Some("icon.png"));
    }

    #[test]
    fn test_icon_text_missing_or_empty_is_none() {
        assert_eq!(icon_text("<title></title>"), None);
        assert_eq!(icon_text("<icon></icon>"), None);
        assert_eq!(icon_text("<icon>   </icon>"), None);
        assert_eq!(icon_text("plain text"), None);
    }

    #[test]
    fn test_random_placeholder_is_from_the_fixed_set() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let url = random_placeholder(&mut rng);
            assert!(PLACEHOLDER_ICONS.contains(&url));
        }
    }
}
