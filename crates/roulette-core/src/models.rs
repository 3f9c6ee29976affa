use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouletteError;

/// Product codes starting with this prefix are PSN storefront releases.
const DIGITAL_PREFIX: &str = "NP";

/// One compatibility record, keyed by product code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: Option<String>,
    pub status: Status,
    pub network: Option<u8>,
    pub date: Option<String>,
    #[serde(rename = "wiki-title")]
    pub wiki_title: Option<String>,
    pub thread: Option<String>,
}

impl Entry {
    /// Display title, with the compatibility list's fallback.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("No title")
    }

    pub fn display_date(&self) -> &str {
        self.date.as_deref().unwrap_or("\u{2014}")
    }

    pub fn region(&self) -> Region {
        Region::from_id(&self.id)
    }

    pub fn media_type(&self) -> MediaType {
        MediaType::from_id(&self.id)
    }

    /// `network == 1` marks titles that require online services.
    pub fn requires_network(&self) -> bool {
        self.network == Some(1)
    }
}

/// Emulation status, from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Playable,
    Ingame,
    Intro,
    Loadable,
    Nothing,
}

impl Status {
    /// All statuses, in list display order.
    pub const ALL: [Status; 5] = [
        Status::Playable,
        Status::Ingame,
        Status::Intro,
        Status::Loadable,
        Status::Nothing,
    ];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playable => write!(f, "Playable"),
            Self::Ingame => write!(f, "Ingame"),
            Self::Intro => write!(f, "Intro"),
            Self::Loadable => write!(f, "Loadable"),
            Self::Nothing => write!(f, "Nothing"),
        }
    }
}

impl FromStr for Status {
    type Err = RouletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "playable" => Ok(Self::Playable),
            "ingame" => Ok(Self::Ingame),
            "intro" => Ok(Self::Intro),
            "loadable" => Ok(Self::Loadable),
            "nothing" => Ok(Self::Nothing),
            other => Err(RouletteError::UnknownStatus(other.to_string())),
        }
    }
}

/// Release region, derived from the third character of the product code.
///
/// `Unknown` covers malformed codes; it matches no selectable region, so
/// such entries never appear in any pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Eu,
    Us,
    As,
    Jp,
    Hk,
    Kr,
    In,
    Unknown,
}

impl Region {
    /// The seven regions a user can select.
    pub const SELECTABLE: [Region; 7] = [
        Region::Eu,
        Region::Us,
        Region::As,
        Region::Jp,
        Region::Hk,
        Region::Kr,
        Region::In,
    ];

    /// Derive the region from a product code (case-insensitive).
    pub fn from_id(id: &str) -> Self {
        match id.chars().nth(2).map(|c| c.to_ascii_uppercase()) {
            Some('E') => Self::Eu,
            Some('U') => Self::Us,
            Some('A') => Self::As,
            Some('J') => Self::Jp,
            Some('H') => Self::Hk,
            Some('K') => Self::Kr,
            Some('I') | Some('T') => Self::In,
            _ => Self::Unknown,
        }
    }

    /// Two-letter region code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Eu => "EU",
            Self::Us => "US",
            Self::As => "AS",
            Self::Jp => "JP",
            Self::Hk => "HK",
            Self::Kr => "KR",
            Self::In => "IN",
            Self::Unknown => "unknown",
        }
    }

    /// Full name shown in the result panel.
    pub fn full_name(&self) -> &'static str {
        match self {
            Self::Eu => "Europe",
            Self::Us => "USA",
            Self::As => "Asia",
            Self::Jp => "Japan",
            Self::Hk => "Hong Kong",
            Self::Kr => "Korea",
            Self::In => "International",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Region {
    type Err = RouletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "eu" | "europe" => Ok(Self::Eu),
            "us" | "usa" => Ok(Self::Us),
            "as" | "asia" => Ok(Self::As),
            "jp" | "japan" => Ok(Self::Jp),
            "hk" | "hong kong" => Ok(Self::Hk),
            "kr" | "korea" => Ok(Self::Kr),
            "in" | "international" => Ok(Self::In),
            other => Err(RouletteError::UnknownRegion(other.to_string())),
        }
    }
}

/// Distribution medium, derived from the product code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaType {
    Disc,
    Digital,
}

impl MediaType {
    pub fn from_id(id: &str) -> Self {
        if id.starts_with(DIGITAL_PREFIX) {
            Self::Digital
        } else {
            Self::Disc
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disc => write!(f, "Disc"),
            Self::Digital => write!(f, "Digital"),
        }
    }
}

impl FromStr for MediaType {
    type Err = RouletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "disc" => Ok(Self::Disc),
            "digital" => Ok(Self::Digital),
            other => Err(RouletteError::UnknownMediaType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_region_derivation() {
        assert_eq!(Region::from_id("BLES00001"), Region::Eu);
        assert_eq!(Region::from_id("BLUS30463"), Region::Us);
        assert_eq!(Region::from_id("BCAS20100"), Region::As);
        assert_eq!(Region::from_id("BCJS30017"), Region::Jp);
        assert_eq!(Region::from_id("BLHS00001"), Region::Hk);
        assert_eq!(Region::from_id("BLKS20001"), Region::Kr);
        assert_eq!(Region::from_id("MRTC00001"), Region::In);
        assert_eq!(Region::from_id("BLIS00001"), Region::In);
    }

    #[test]
    fn test_region_is_case_insensitive() {
        assert_eq!(Region::from_id("bles00001"), Region::Eu);
        assert_eq!(Region::from_id("bcjs30017"), Region::Jp);
    }

    #[test]
    fn test_region_unknown_for_malformed_ids() {
        assert_eq!(Region::from_id(""), Region::Unknown);
        assert_eq!(Region::from_id("BL"), Region::Unknown);
        assert_eq!(Region::from_id("XX900000"), Region::Unknown);
    }

    #[test]
    fn test_region_derivation_is_stable() {
        let e = entry("BLES00001");
        assert_eq!(e.region(), e.region());
    }

    #[test]
    fn test_media_type_classification() {
        assert_eq!(MediaType::from_id("NPEA00000"), MediaType::Digital);
        assert_eq!(MediaType::from_id("BLES00001"), MediaType::Disc);
        assert_eq!(MediaType::from_id("MRTC00001"), MediaType::Disc);
    }

    #[test]
    fn test_display_fallbacks() {
        let mut e = entry("BLES00001");
        assert_eq!(e.display_title(), "No title");
        assert_eq!(e.display_date(), "\u{2014}");

        e.title = Some("Demon's Souls".to_string());
        e.date = Some("2023-01-15".to_string());
        assert_eq!(e.display_title(), "Demon's Souls");
        assert_eq!(e.display_date(), "2023-01-15");
    }

    #[test]
    fn test_requires_network() {
        let mut e = entry("BLES00001");
        assert!(!e.requires_network());
        e.network = Some(0);
        assert!(!e.requires_network());
        e.network = Some(1);
        assert!(e.requires_network());
    }

    #[test]
    fn test_facet_parsing() {
        assert_eq!("playable".parse::<Status>().unwrap(), Status::Playable);
        assert_eq!("Nothing".parse::<Status>().unwrap(), Status::Nothing);
        assert!("broken".parse::<Status>().is_err());

        assert_eq!("eu".parse::<Region>().unwrap(), Region::Eu);
        assert_eq!("Japan".parse::<Region>().unwrap(), Region::Jp);
        assert!("unknown".parse::<Region>().is_err());

        assert_eq!("digital".parse::<MediaType>().unwrap(), MediaType::Digital);
        assert!("cartridge".parse::<MediaType>().is_err());
    }

    #[test]
    fn test_entry_deserializes_wiki_title_rename() {
        let e: Entry = serde_json::from_str(
            r#"{"id":"BLES00001","status":"Playable","wiki-title":"Some Game"}"#,
        )
        .unwrap();
        assert_eq!(e.wiki_title.as_deref(), Some("Some Game"));
        assert_eq!(e.status, Status::Playable);
    }
}
