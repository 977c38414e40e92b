// 🔎 Filter Engine - search-as-you-type over an in-memory catalog
//
// One engine per listing page (Projects, Certifications, Blog, Documentations).
// The filtered view is always a pure function of (catalog, FilterState):
// every change recomputes it from the full catalog. Catalogs are tens of
// entries, so there is no index and no pagination.

use std::collections::BTreeMap;

/// Reserved selection meaning "no constraint on this facet"
pub const ALL: &str = "All";

// ============================================================================
// FACETS
// ============================================================================

/// A labeled field that supports exact-match (discrete) filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    Category,
    Issuer,
}

impl Facet {
    pub fn label(&self) -> &'static str {
        match self {
            Facet::Category => "Category",
            Facet::Issuer => "Issuer",
        }
    }
}

/// Anything that can be searched and filtered by the engine
pub trait Searchable {
    /// Free-text fields checked by the query (title, description, tags...)
    fn search_fields(&self) -> Vec<&str>;

    /// Values of a facet for this entry. Empty when the entry has no such field.
    /// Multi-valued facets (blog categories) match when any value matches.
    fn facet_values(&self, facet: Facet) -> Vec<&str>;
}

// ============================================================================
// FILTER STATE
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Raw query text. Not trimmed: "react " only matches text containing "react ".
    pub query: String,

    /// Active discrete selections. A missing facet is the same as `ALL`.
    pub selections: BTreeMap<Facet, String>,
}

impl FilterState {
    /// State that constrains nothing
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_string();
        self
    }

    pub fn with_selection(mut self, facet: Facet, value: &str) -> Self {
        self.selections.insert(facet, value.to_string());
        self
    }

    /// Current selection for a facet (`ALL` when unset)
    pub fn selection(&self, facet: Facet) -> &str {
        self.selections.get(&facet).map(String::as_str).unwrap_or(ALL)
    }

    pub fn is_neutral(&self) -> bool {
        self.query.is_empty() && self.selections.values().all(|v| is_all(v))
    }
}

/// True for the "All" sentinel, in any casing ("all" is what the projects page uses)
pub fn is_all(value: &str) -> bool {
    value.eq_ignore_ascii_case(ALL)
}

// ============================================================================
// MATCHING
// ============================================================================

/// Does a single entry satisfy every active predicate?
pub fn matches<T: Searchable>(entry: &T, state: &FilterState) -> bool {
    let query_ok = state.query.is_empty() || {
        let needle = state.query.to_lowercase();
        entry
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    };

    if !query_ok {
        return false;
    }

    // Discrete filters are conjunctive
    state.selections.iter().all(|(facet, selected)| {
        is_all(selected)
            || entry
                .facet_values(*facet)
                .iter()
                .any(|value| value.to_lowercase() == selected.to_lowercase())
    })
}

/// Order-preserving subset of `catalog` matching `state`
pub fn filter<'a, T: Searchable>(catalog: &'a [T], state: &FilterState) -> Vec<&'a T> {
    catalog.iter().filter(|entry| matches(*entry, state)).collect()
}

// ============================================================================
// FILTER ENGINE (memoized view)
// ============================================================================

/// Catalog + filter state + memoized indices of the matching entries
#[derive(Debug, Clone)]
pub struct FilterEngine<T> {
    catalog: Vec<T>,
    state: FilterState,
    visible: Vec<usize>,
    revision: u64,
}

impl<T: Searchable> FilterEngine<T> {
    pub fn new(catalog: Vec<T>) -> Self {
        Self::with_state(catalog, FilterState::neutral())
    }

    pub fn with_state(catalog: Vec<T>, state: FilterState) -> Self {
        let mut engine = FilterEngine {
            catalog,
            state,
            visible: Vec::new(),
            revision: 0,
        };
        engine.recompute();
        engine
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn query(&self) -> &str {
        &self.state.query
    }

    pub fn selection(&self, facet: Facet) -> &str {
        self.state.selection(facet)
    }

    /// Bumped on every state change; page containers use it to reset cursors
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_query(&mut self, query: &str) {
        self.state.query = query.to_string();
        self.recompute();
    }

    pub fn push_char(&mut self, c: char) {
        self.state.query.push(c);
        self.recompute();
    }

    pub fn pop_char(&mut self) {
        if self.state.query.pop().is_some() {
            self.recompute();
        }
    }

    pub fn select(&mut self, facet: Facet, value: &str) {
        self.state.selections.insert(facet, value.to_string());
        self.recompute();
    }

    /// Back to the neutral state: the full catalog in its original order
    pub fn reset(&mut self) {
        self.state = FilterState::neutral();
        self.recompute();
    }

    pub fn catalog(&self) -> &[T] {
        &self.catalog
    }

    /// Filtered entries, in catalog order
    pub fn results(&self) -> Vec<&T> {
        self.visible.iter().map(|&i| &self.catalog[i]).collect()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.visible.get(index).map(|&i| &self.catalog[i])
    }

    /// Position of a catalog entry within the filtered view
    pub fn position<F>(&self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.visible
            .iter()
            .position(|&i| predicate(&self.catalog[i]))
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Empty result is a valid state, rendered as "no results"
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    fn recompute(&mut self) {
        let state = &self.state;
        self.visible = self
            .catalog
            .iter()
            .enumerate()
            .filter(|(_, entry)| matches(*entry, state))
            .map(|(i, _)| i)
            .collect();
        self.revision += 1;

        tracing::debug!(
            query = %self.state.query,
            visible = self.visible.len(),
            total = self.catalog.len(),
            "filter recomputed"
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================
