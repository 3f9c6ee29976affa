use std::collections::HashSet;

use crate::models::{Entry, MediaType, Region, Status};

/// Transient facet selection state.
///
/// Not persisted; a fresh `Selection` has everything selected, the
/// startup default.
#[derive(Debug, Clone)]
pub struct Selection {
    pub statuses: HashSet<Status>,
    pub regions: HashSet<Region>,
    /// When set, titles flagged `network == 1` are no longer excluded.
    /// This widens the pool; it never narrows it.
    pub online_only: bool,
    pub disc: bool,
    pub digital: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            statuses: Status::ALL.into_iter().collect(),
            regions: Region::SELECTABLE.into_iter().collect(),
            online_only: false,
            disc: true,
            digital: true,
        }
    }
}

impl Selection {
    /// Whether one entry passes every active facet.
    pub fn matches(&self, entry: &Entry) -> bool {
        self.statuses.contains(&entry.status)
            && self.regions.contains(&entry.region())
            && (self.online_only || !entry.requires_network())
            && self.media_enabled(entry.media_type())
    }

    fn media_enabled(&self, media: MediaType) -> bool {
        match media {
            MediaType::Disc => self.disc,
            MediaType::Digital => self.digital,
        }
    }

    /// The pool of candidate entries for the current selection.
    ///
    /// Recomputed from scratch every call so counts can never go stale
    /// after a facet toggle.
    pub fn pool<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }

    /// Size of the current pool, shown as "Available entries: N".
    pub fn pool_len(&self, entries: &[Entry]) -> usize {
        entries.iter().filter(|e| self.matches(e)).count()
    }
}

/// Statuses actually present in the dataset, in display order.
///
/// Only these are worth offering for selection.
pub fn statuses_present(entries: &[Entry]) -> Vec<Status> {
    let found: HashSet<Status> = entries.iter().map(|e| e.status).collect();
    Status::ALL
        .into_iter()
        .filter(|s| found.contains(s))
        .collect()
}
