//! Category checkbox state.

use std::fmt;

/// A click in the category sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryChoice {
    All,
    Id(u64),
}

/// Selected categories. The empty set is the "all" state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    ids: Vec<u64>,
}

impl CategorySelection {
    /// The initial "all" state.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn only(id: u64) -> Self {
        Self { ids: vec![id] }
    }

    /// Parse a comma separated id list (`cats=3,5`). Unknown tokens,
    /// including `all`, are ignored.
    pub fn from_param(param: &str) -> Self {
        let mut ids = Vec::new();
        for id in param.split(',').filter_map(|s| s.trim().parse::<u64>().ok()) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { ids }
    }

    pub fn from_ids(ids: impl IntoIterator<Item = u64>) -> Self {
        let mut selection = Self::all();
        for id in ids {
            if !selection.ids.contains(&id) {
                selection.ids.push(id);
            }
        }
        selection
    }

    pub fn is_all(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    /// Whether `id` is shown under this selection.
    pub fn includes(&self, id: u64) -> bool {
        self.is_all() || self.ids.contains(&id)
    }

    /// Whether the checkbox for `choice` is ticked.
    pub fn is_checked(&self, choice: CategoryChoice) -> bool {
        match choice {
            CategoryChoice::All => self.is_all(),
            CategoryChoice::Id(id) => self.ids.contains(&id),
        }
    }

    /// State after clicking `choice`.
    ///
    /// In search mode any click replaces the selection with exactly the
    /// clicked entry. Otherwise "all" resets, and a specific id is toggled;
    /// removing the last id falls back to "all".
    pub fn select(&self, choice: CategoryChoice, search_mode: bool) -> Self {
        match choice {
            CategoryChoice::All => Self::all(),
            CategoryChoice::Id(id) if search_mode => Self::only(id),
            CategoryChoice::Id(id) => {
                let mut ids = self.ids.clone();
                match ids.iter().position(|x| *x == id) {
                    Some(pos) => {
                        ids.remove(pos);
                    }
                    None => ids.push(id),
                }
                Self { ids }
            }
        }
    }

    /// Query value for URLs, `None` for "all".
    pub fn to_param(&self) -> Option<String> {
        if self.is_all() {
            None
        } else {
            Some(self.to_string())
        }
    }
}

impl fmt::Display for CategorySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            return f.write_str("all");
        }
        let ids: Vec<String> = self.ids.iter().map(u64::to_string).collect();
        f.write_str(&ids.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_all() {
        let sel = CategorySelection::all();
        assert!(sel.is_all());
        assert!(sel.is_checked(CategoryChoice::All));
        assert!(sel.includes(42));
        assert_eq!(sel.to_string(), "all");
    }

    #[test]
    fn test_specific_replaces_all() {
        let sel = CategorySelection::all().select(CategoryChoice::Id(3), false);
        assert_eq!(sel.ids(), &[3]);
        assert!(!sel.is_checked(CategoryChoice::All));
    }

    #[test]
    fn test_all_clears_specific() {
        let sel = CategorySelection::all()
            .select(CategoryChoice::Id(3), false)
            .select(CategoryChoice::Id(5), false)
            .select(CategoryChoice::All, false);
        assert!(sel.is_all());
    }

    #[test]
    fn test_toggle_off_last_returns_to_all() {
        let sel = CategorySelection::only(3).select(CategoryChoice::Id(3), false);
        assert!(sel.is_all());
    }

    #[test]
    fn test_search_mode_sets_exactly_clicked() {
        let sel = CategorySelection::from_ids([1, 2]).select(CategoryChoice::Id(2), true);
        assert_eq!(sel.ids(), &[2]);
        let sel = CategorySelection::from_ids([1, 2]).select(CategoryChoice::All, true);
        assert!(sel.is_all());
    }

    #[test]
    fn test_param_round_trip() {
        let sel = CategorySelection::from_param("4, 7,x,4,all");
        assert_eq!(sel.ids(), &[4, 7]);
        assert_eq!(sel.to_param().as_deref(), Some("4,7"));
        assert_eq!(CategorySelection::all().to_param(), None);
    }
}
