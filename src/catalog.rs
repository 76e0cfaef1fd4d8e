//! Property catalog and area filtering.
//!
//! The catalog is seeded once at startup and never mutated; every listings
//! view is a pure derivation over this fixed list.

use serde::Serialize;

/// A single listed property.
#[derive(Debug, Clone, Serialize)]
pub struct Property {
    pub id: u32,
    pub title: String,
    /// Submarket label, doubles as the filter key.
    pub area: String,
    /// Asking price in AED.
    pub price: u64,
    /// Author-supplied annual yield estimate, percent. Not computed.
    pub roi: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub image: String,
}

/// Sentinel selection that leaves the catalog unfiltered.
pub const ALL_AREAS: &str = "All";

/// The closed set of labels offered by the filter bar.
pub const AREAS: &[&str] = &[ALL_AREAS, "Downtown", "Marina", "Business Bay", "Palm"];

/// Filter selection for the listings view.
///
/// Initialized to [`ALL_AREAS`]; replaced wholesale on each selection,
/// never partially updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub selected: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            selected: ALL_AREAS.to_string(),
        }
    }

    /// Replace the selection wholesale.
    pub fn select(&self, area: &str) -> Self {
        Self {
            selected: area.to_string(),
        }
    }

    /// Properties visible under the current selection.
    pub fn visible<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        filter_properties(properties, &self.selected)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered subsequence of `properties` whose `area` equals `selection`.
///
/// [`ALL_AREAS`] returns the whole list unchanged. A label matching no
/// property yields an empty list, not an error. Relative order is
/// preserved; no sort, no dedup.
pub fn filter_properties<'a>(properties: &'a [Property], selection: &str) -> Vec<&'a Property> {
    if selection == ALL_AREAS {
        properties.iter().collect()
    } else {
        properties.iter().filter(|p| p.area == selection).collect()
    }
}

/// The fixed catalog of curated listings.
pub fn seed_properties() -> Vec<Property> {
    fn prop(id: u32, title: &str, area: &str, price: u64, roi: f64, kind: &str, image: &str) -> Property {
        Property {
            id,
            title: title.to_string(),
            area: area.to_string(),
            price,
            roi,
            kind: kind.to_string(),
            image: image.to_string(),
        }
    }

    vec![
        prop(
            1,
            "Downtown Luxury Tower",
            "Downtown",
            2_400_000,
            7.5,
            "Luxury",
            "https://images.unsplash.com/photo-1600585154340-be6161a56a0c",
        ),
        prop(
            2,
            "Marina Waterfront Apartment",
            "Marina",
            1_800_000,
            8.2,
            "Waterfront",
            "https://images.unsplash.com/photo-1502673530728-f79b4cab31b1",
        ),
        prop(
            3,
            "Business Bay Investor Unit",
            "Business Bay",
            1_300_000,
            9.8,
            "Investor",
            "https://images.unsplash.com/photo-1600607687920-4e2a09cf159d",
        ),
        prop(
            4,
            "Palm Premium Residence",
            "Palm",
            4_200_000,
            6.5,
            "Ultra Luxury",
            "https://images.unsplash.com/photo-1605276374104-dee2a0ed3cd6",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_returns_full_list_in_order() {
        let props = seed_properties();
        let visible = filter_properties(&props, ALL_AREAS);
        assert_eq!(visible.len(), props.len());
        let ids: Vec<u32> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_area_selection_returns_matching_subsequence() {
        let props = seed_properties();
        let visible = filter_properties(&props, "Marina");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Marina Waterfront Apartment");
    }

    #[test]
    fn test_unknown_area_yields_empty_not_error() {
        let props = seed_properties();
        let visible = filter_properties(&props, "Atlantis");
        assert!(visible.is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let props = seed_properties();
        let first: Vec<u32> = filter_properties(&props, "Downtown").iter().map(|p| p.id).collect();
        let second: Vec<u32> = filter_properties(&props, "Downtown").iter().map(|p| p.id).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_filter_state_transitions_replace_wholesale() {
        let state = FilterState::new();
        assert_eq!(state.selected, ALL_AREAS);

        let marina = state.select("Marina");
        assert_eq!(marina.selected, "Marina");
        // The original state is untouched.
        assert_eq!(state.selected, ALL_AREAS);

        let props = seed_properties();
        assert_eq!(marina.visible(&props).len(), 1);
    }

    #[test]
    fn test_every_seed_area_is_a_filter_label() {
        let props = seed_properties();
        for p in &props {
            assert!(AREAS.contains(&p.area.as_str()), "unknown area {}", p.area);
        }
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let props = seed_properties();
        let mut ids: Vec<u32> = props.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), props.len());
    }
}
