//! Camp catalog state plus the list operations screens apply to it.
//!
//! DESIGN
//! ======
//! The fetched list is kept in API order; search and sort produce derived
//! views so switching back to "Default" restores the original order. After a
//! successful mutation the list is patched in place instead of refetched.

#[cfg(test)]
#[path = "camps_test.rs"]
mod camps_test;

use std::cmp::Ordering;

use crate::net::types::Camp;

/// How many camps the home page highlights.
pub const POPULAR_CAMP_COUNT: usize = 6;

/// Catalog ordering chosen from the sort dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOption {
    /// API order.
    #[default]
    Default,
    /// Highest participant count first.
    MostRegistered,
    /// Cheapest first.
    CampFees,
    /// By camp name, case-insensitive.
    Alphabetical,
}

impl SortOption {
    pub const ALL: [Self; 4] = [Self::Default, Self::MostRegistered, Self::CampFees, Self::Alphabetical];

    /// Value used in the `<select>` element.
    #[must_use]
    pub fn as_value(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::MostRegistered => "most-registered",
            Self::CampFees => "camp-fees",
            Self::Alphabetical => "alphabetical",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::MostRegistered => "Most Registered",
            Self::CampFees => "Camp Fees",
            Self::Alphabetical => "Alphabetical",
        }
    }

    /// Unknown values fall back to [`SortOption::Default`].
    #[must_use]
    pub fn from_value(raw: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|opt| opt.as_value() == raw)
            .unwrap_or_default()
    }
}

/// Shared camp list state.
#[derive(Clone, Debug, Default)]
pub struct CampsState {
    pub items: Vec<Camp>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CampsState {
    #[must_use]
    pub fn find(&self, camp_id: &str) -> Option<&Camp> {
        self.items.iter().find(|c| c.id == camp_id)
    }

    /// Mirror a successful join. Returns the new count if the camp is listed.
    pub fn increment_participants(&mut self, camp_id: &str) -> Option<u32> {
        let camp = self.items.iter_mut().find(|c| c.id == camp_id)?;
        camp.participant_count = camp.participant_count.saturating_add(1);
        Some(camp.participant_count)
    }

    /// Replace the row with the same id. Returns `false` if it was not listed.
    pub fn replace(&mut self, camp: Camp) -> bool {
        match self.items.iter_mut().find(|c| c.id == camp.id) {
            Some(slot) => {
                *slot = camp;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, camp_id: &str) {
        self.items.retain(|c| c.id != camp_id);
    }

    /// Insert or replace a single camp fetched on its own (detail page).
    pub fn upsert(&mut self, camp: Camp) {
        if !self.replace(camp.clone()) {
            self.items.push(camp);
        }
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Catalog search: name, location, or description contains the keyword.
/// A blank keyword keeps every camp.
#[must_use]
pub fn filter_camps(camps: &[Camp], keyword: &str) -> Vec<Camp> {
    let needle = keyword.trim().to_lowercase();
    camps
        .iter()
        .filter(|c| {
            needle.is_empty()
                || contains_ci(&c.camp_name, &needle)
                || contains_ci(&c.location, &needle)
                || contains_ci(&c.description, &needle)
        })
        .cloned()
        .collect()
}

/// Navbar quick search: name or location only. A blank query finds nothing.
#[must_use]
pub fn quick_search(camps: &[Camp], query: &str) -> Vec<Camp> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    camps
        .iter()
        .filter(|c| contains_ci(&c.camp_name, &needle) || contains_ci(&c.location, &needle))
        .cloned()
        .collect()
}

/// Stable sort in place.
pub fn sort_camps(camps: &mut [Camp], option: SortOption) {
    match option {
        SortOption::Default => {}
        SortOption::MostRegistered => camps.sort_by(|a, b| b.participant_count.cmp(&a.participant_count)),
        SortOption::CampFees => {
            camps.sort_by(|a, b| a.camp_fees.partial_cmp(&b.camp_fees).unwrap_or(Ordering::Equal));
        }
        SortOption::Alphabetical => camps.sort_by_key(|c| c.camp_name.to_lowercase()),
    }
}

/// Search then sort, as the catalog page renders it.
#[must_use]
pub fn catalog_view(camps: &[Camp], keyword: &str, option: SortOption) -> Vec<Camp> {
    let mut view = filter_camps(camps, keyword);
    sort_camps(&mut view, option);
    view
}

/// Top `limit` camps by participant count.
#[must_use]
pub fn popular_camps(camps: &[Camp], limit: usize) -> Vec<Camp> {
    let mut sorted = camps.to_vec();
    sort_camps(&mut sorted, SortOption::MostRegistered);
    sorted.truncate(limit);
    sorted
}

fn non_empty_or(fetched: String, submitted: &str) -> String {
    if fetched.trim().is_empty() { submitted.to_owned() } else { fetched }
}

/// Row shown after an edit: the refetched camp where it has values, the
/// submitted draft where it does not, and the previous participant count when
/// the refetch is missing or reports zero.
#[must_use]
pub fn merge_updated_camp(previous: &Camp, submitted: &Camp, fetched: Option<Camp>) -> Camp {
    let Some(fetched) = fetched else {
        return Camp {
            id: previous.id.clone(),
            participant_count: previous.participant_count,
            ..submitted.clone()
        };
    };
    Camp {
        id: previous.id.clone(),
        camp_name: non_empty_or(fetched.camp_name, &submitted.camp_name),
        image: non_empty_or(fetched.image, &submitted.image),
        camp_fees: if fetched.camp_fees > 0.0 { fetched.camp_fees } else { submitted.camp_fees },
        date_time: non_empty_or(fetched.date_time, &submitted.date_time),
        location: non_empty_or(fetched.location, &submitted.location),
        healthcare_professional: non_empty_or(fetched.healthcare_professional, &submitted.healthcare_professional),
        participant_count: if fetched.participant_count > 0 {
            fetched.participant_count
        } else {
            previous.participant_count
        },
        description: non_empty_or(fetched.description, &submitted.description),
    }
}
