//! List view state
//!
//! Owns the in-memory collection and the derived filtered/paginated view.
//! The collection is the single source of truth for display; it only
//! changes through [`ListState::set_collection`] (a reload) or
//! [`ListState::remove`] (the delete fast path).

use shared::models::Restaurant;

/// Restaurants shown per page
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Search and pagination state over the restaurant collection
///
/// Pages are 1-based. Navigation is disabled at the boundaries rather
/// than clamped: `next_page`/`prev_page` are no-ops when the matching
/// `has_next`/`has_prev` is false.
#[derive(Debug, Clone)]
pub struct ListState {
    restaurants: Vec<Restaurant>,
    search: String,
    page: usize,
    page_size: usize,
}

impl ListState {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            restaurants: Vec::new(),
            search: String::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Full collection in load order
    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current 1-based page number
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the collection after a reload
    ///
    /// The search term survives a reload and is re-evaluated against the
    /// new collection; the page pointer starts over at 1.
    pub fn set_collection(&mut self, restaurants: Vec<Restaurant>) {
        self.restaurants = restaurants;
        self.page = 1;
    }

    /// Change the search term, resetting to the first page
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Look up a record by id in the full collection
    pub fn get(&self, id: i64) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    /// Remove a record locally by id, without a reload
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.restaurants.len();
        self.restaurants.retain(|r| r.id != id);
        let removed = self.restaurants.len() != before;
        if removed {
            self.page = 1;
        }
        removed
    }

    /// Records whose name contains the search term, case-insensitively
    ///
    /// A blank term matches everything.
    pub fn filtered(&self) -> Vec<&Restaurant> {
        if self.search.trim().is_empty() {
            return self.restaurants.iter().collect();
        }
        let needle = self.search.to_lowercase();
        self.restaurants
            .iter()
            .filter(|r| r.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Number of pages in the filtered view
    pub fn page_count(&self) -> usize {
        self.filtered().len().div_ceil(self.page_size)
    }

    /// The current page window of the filtered view
    pub fn page_items(&self) -> Vec<&Restaurant> {
        let filtered = self.filtered();
        let start = (self.page - 1) * self.page_size;
        let end = (start + self.page_size).min(filtered.len());
        if start >= filtered.len() {
            return Vec::new();
        }
        filtered[start..end].to_vec()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page * self.page_size < self.filtered().len()
    }

    /// Go to the previous page; returns false when already on page 1
    pub fn prev_page(&mut self) -> bool {
        if !self.has_prev() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Go to the next page; returns false when on the last page
    pub fn next_page(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.page += 1;
        true
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(id: i64, name: &str) -> Restaurant {
        Restaurant {
            id,
            name: name.into(),
            description: format!("{name} description"),
            area: "Centro".into(),
            city: "Lisbon".into(),
            capacity: 20,
            rating: 4.0,
            cuisine: None,
            image: format!("https://example.com/{id}.jpg"),
        }
    }

    fn loaded(names: &[&str]) -> ListState {
        let mut state = ListState::new();
        state.set_collection(
            names
                .iter()
                .enumerate()
                .map(|(i, n)| restaurant(i as i64 + 1, n))
                .collect(),
        );
        state
    }

    #[test]
    fn test_empty_search_matches_all() {
        let state = loaded(&["Pizza Palace", "Sushi Bar"]);
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let state = {
            let mut s = loaded(&["Pizza Palace", "Sushi Bar"]);
            s.set_search("piz");
            s
        };
        let names: Vec<_> = state.filtered().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Pizza Palace"]);

        let mut state = loaded(&["Pizza Palace", "Sushi Bar"]);
        state.set_search("BAR");
        let names: Vec<_> = state.filtered().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Sushi Bar"]);
    }

    #[test]
    fn test_filtered_is_subset_in_collection_order() {
        let mut state = loaded(&["Alpha", "Beta", "Alphabet", "Gamma"]);
        state.set_search("alpha");
        let ids: Vec<_> = state.filtered().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_pages_partition_filtered_view() {
        let mut state = loaded(&["A", "B", "C", "D", "E", "F", "G"]);
        let total = state.filtered().len();
        assert_eq!(state.page_count(), 3);

        let mut seen = Vec::new();
        loop {
            seen.extend(state.page_items().iter().map(|r| r.id));
            if !state.next_page() {
                break;
            }
        }
        // Concatenating all pages reconstructs the filtered view exactly.
        assert_eq!(seen.len(), total);
        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(loaded(&[]).page_count(), 0);
        assert_eq!(loaded(&["A"]).page_count(), 1);
        assert_eq!(loaded(&["A", "B", "C"]).page_count(), 1);
        assert_eq!(loaded(&["A", "B", "C", "D"]).page_count(), 2);
    }

    #[test]
    fn test_five_records_paginate_three_two() {
        let mut state = loaded(&["A", "B", "C", "D", "E"]);

        let names: Vec<_> = state.page_items().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert!(!state.has_prev());
        assert!(state.has_next());

        assert!(state.next_page());
        let names: Vec<_> = state.page_items().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["D", "E"]);
        assert!(state.has_prev());
        assert!(!state.has_next());
        assert!(!state.next_page());
        assert_eq!(state.page(), 2);
    }

    #[test]
    fn test_prev_disabled_on_first_page() {
        let mut state = loaded(&["A", "B", "C", "D"]);
        assert!(!state.has_prev());
        assert!(!state.prev_page());
        assert_eq!(state.page(), 1);

        state.next_page();
        assert!(state.has_prev());
        assert!(state.prev_page());
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_search_change_resets_page() {
        let mut state = loaded(&["A", "B", "C", "D", "E", "F", "G"]);
        state.next_page();
        state.next_page();
        assert_eq!(state.page(), 3);

        state.set_search("a");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_search_scenario_resets_page_and_filters() {
        let mut state = loaded(&["Pizza Palace", "Sushi Bar", "Taco Shack", "Pho House"]);
        state.next_page();
        assert_eq!(state.page(), 2);

        state.set_search("piz");
        assert_eq!(state.page(), 1);
        let names: Vec<_> = state.page_items().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Pizza Palace"]);
        assert!(!state.has_next());
    }

    #[test]
    fn test_reload_keeps_search_term() {
        let mut state = loaded(&["Pizza Palace", "Sushi Bar"]);
        state.set_search("sushi");
        assert_eq!(state.filtered().len(), 1);

        state.set_collection(vec![
            restaurant(1, "Pizza Palace"),
            restaurant(2, "Sushi Bar"),
            restaurant(3, "Sushi Garden"),
        ]);
        assert_eq!(state.search(), "sushi");
        assert_eq!(state.filtered().len(), 2);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_whitespace_search_matches_all() {
        let mut state = loaded(&["Pizza Palace", "Sushi Bar"]);
        state.set_search("   ");
        assert_eq!(state.filtered().len(), 2);
    }

    #[test]
    fn test_remove_by_id() {
        let mut state = loaded(&["A", "B", "C", "D"]);
        state.next_page();

        assert!(state.remove(2));
        let ids: Vec<_> = state.restaurants().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert_eq!(state.page(), 1);

        assert!(!state.remove(99));
    }

    #[test]
    fn test_get_by_id() {
        let state = loaded(&["A", "B"]);
        assert_eq!(state.get(2).unwrap().name, "B");
        assert!(state.get(3).is_none());
    }
}
