//! Model picker state: filter text and cursor over the fetched catalog.

use crate::catalog::Model;

/// State for the model picker overlay.
///
/// The picker does not own the catalog; every query takes the current model
/// list so a refresh mid-picker cannot leave a stale copy behind.
#[derive(Debug, Default)]
pub struct ModelPickerState {
    /// Current filter text for model search
    pub filter: String,

    /// Currently selected index in the filtered list
    pub selected: usize,
}

impl ModelPickerState {
    /// Create a new picker state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filter: String::new(),
            selected: 0,
        }
    }

    /// Start the picker with the committed selection highlighted
    pub fn start(&mut self, models: &[Model], current_id: &str) {
        self.filter.clear();
        self.selected = models
            .iter()
            .position(|m| m.id == current_id)
            .unwrap_or(0);
    }

    /// Models matching the current filter, in catalog order
    #[must_use]
    pub fn filtered<'a>(&self, models: &'a [Model]) -> Vec<&'a Model> {
        let filter_lower = self.filter.to_ascii_lowercase();
        models
            .iter()
            .filter(|m| {
                filter_lower.is_empty()
                    || m.display_name.to_ascii_lowercase().contains(&filter_lower)
                    || m.id.to_ascii_lowercase().contains(&filter_lower)
            })
            .collect()
    }

    /// Select the next item in the filtered list, wrapping at the end
    pub fn select_next(&mut self, models: &[Model]) {
        let count = self.filtered(models).len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// Select the previous item in the filtered list, wrapping at the start
    pub fn select_prev(&mut self, models: &[Model]) {
        let count = self.filtered(models).len();
        if count > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// The model currently under the cursor, if any
    #[must_use]
    pub fn selected_entry<'a>(&self, models: &'a [Model]) -> Option<&'a Model> {
        self.filtered(models).get(self.selected).copied()
    }

    /// Handle character input in the filter
    pub fn handle_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.selected = 0;
    }

    /// Handle backspace in the filter
    pub fn handle_filter_backspace(&mut self) {
        self.filter.pop();
        self.selected = 0;
    }

    /// Clear all picker state
    pub fn clear(&mut self) {
        self.filter.clear();
        self.selected = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn model(id: &str, display_name: &str) -> Model {
        Model {
            id: id.to_string(),
            display_name: display_name.to_string(),
        }
    }

    fn catalog() -> Vec<Model> {
        vec![
            model("a", "Alpha"),
            model("b", "Beta"),
            model("g", "Gamma"),
        ]
    }

    #[test]
    fn test_new() {
        let state = ModelPickerState::new();
        assert!(state.filter.is_empty());
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_start_highlights_current() {
        let mut state = ModelPickerState::new();
        state.start(&catalog(), "b");
        assert_eq!(state.selected, 1);
        assert!(state.filter.is_empty());
    }

    #[test]
    fn test_start_unknown_id_defaults_to_first() {
        let mut state = ModelPickerState::new();
        state.start(&catalog(), "missing");
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_start_clears_filter() {
        let mut state = ModelPickerState::new();
        state.filter = "something".to_string();
        state.start(&catalog(), "a");
        assert!(state.filter.is_empty());
    }

    #[test]
    fn test_filtered_matches_display_name() {
        let mut state = ModelPickerState::new();
        state.filter = "bet".to_string();
        let models = catalog();
        let filtered = state.filtered(&models);
        assert_eq!(filtered, vec![&models[1]]);
    }

    #[test]
    fn test_filtered_matches_id() {
        let mut state = ModelPickerState::new();
        state.filter = "g".to_string();
        let models = catalog();
        let filtered = state.filtered(&models);
        assert_eq!(filtered, vec![&models[2]]);
    }

    #[test]
    fn test_filtered_case_insensitive() {
        let mut state = ModelPickerState::new();
        state.filter = "ALPH".to_string();
        let models = catalog();
        let filtered = state.filtered(&models);
        assert_eq!(filtered, vec![&models[0]]);
    }

    #[test]
    fn test_filtered_empty_filter_returns_all() {
        let state = ModelPickerState::new();
        let models = catalog();
        assert_eq!(state.filtered(&models).len(), 3);
    }

    #[test]
    fn test_select_next_wraps() {
        let mut state = ModelPickerState::new();
        state.selected = 2;
        state.select_next(&catalog());
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_select_next_increments() {
        let mut state = ModelPickerState::new();
        state.select_next(&catalog());
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn test_select_prev_wraps() {
        let mut state = ModelPickerState::new();
        state.select_prev(&catalog());
        assert_eq!(state.selected, 2);
    }

    #[test]
    fn test_select_on_empty_catalog_is_noop() {
        let mut state = ModelPickerState::new();
        state.select_next(&[]);
        state.select_prev(&[]);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_selected_entry_none_when_filter_excludes_all() {
        let mut state = ModelPickerState::new();
        state.filter = "nope".to_string();
        assert!(state.selected_entry(&catalog()).is_none());
    }

    #[test]
    fn test_selected_entry_returns_correct() {
        let mut state = ModelPickerState::new();
        state.selected = 1;
        let models = catalog();
        assert_eq!(state.selected_entry(&models), Some(&models[1]));
    }

    #[test]
    fn test_handle_filter_char_resets_cursor() {
        let mut state = ModelPickerState::new();
        state.selected = 2;
        state.handle_filter_char('a');
        assert_eq!(state.filter, "a");
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_handle_filter_backspace() {
        let mut state = ModelPickerState::new();
        state.filter = "abc".to_string();
        state.selected = 2;
        state.handle_filter_backspace();
        assert_eq!(state.filter, "ab");
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_handle_filter_backspace_empty() {
        let mut state = ModelPickerState::new();
        state.handle_filter_backspace();
        assert!(state.filter.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut state = ModelPickerState::new();
        state.filter = "test".to_string();
        state.selected = 2;
        state.clear();
        assert!(state.filter.is_empty());
        assert_eq!(state.selected, 0);
    }
}
