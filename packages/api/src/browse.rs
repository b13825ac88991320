//! Browse-side view state: the detailed item, the search dialog and the
//! sign-in / sign-up dialog pair.

use store::ItemId;

/// Which authentication dialog is open. One variant per state, so the two
/// dialogs can never be open together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthDialog {
    #[default]
    Closed,
    SignIn,
    SignUp,
}

impl AuthDialog {
    /// Swap sign-in for sign-up and back. No effect when closed.
    pub fn switched(self) -> Self {
        match self {
            AuthDialog::Closed => AuthDialog::Closed,
            AuthDialog::SignIn => AuthDialog::SignUp,
            AuthDialog::SignUp => AuthDialog::SignIn,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrowseState {
    selected: Option<ItemId>,
    search_open: bool,
    search_query: String,
    auth_dialog: AuthDialog,
}

impl BrowseState {
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    /// Select `id` for the detail view, replacing any previous selection.
    pub fn select(&mut self, id: ItemId) {
        self.selected = Some(id);
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    pub fn is_search_open(&self) -> bool {
        self.search_open
    }

    pub fn set_search_open(&mut self, open: bool) {
        self.search_open = open;
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Close the dialog and return the query as typed, unless it is blank.
    pub fn submit_search(&mut self) -> Option<String> {
        self.search_open = false;
        if self.search_query.trim().is_empty() {
            None
        } else {
            Some(self.search_query.clone())
        }
    }

    pub fn auth_dialog(&self) -> AuthDialog {
        self.auth_dialog
    }

    pub fn set_auth_dialog(&mut self, dialog: AuthDialog) {
        self.auth_dialog = dialog;
    }

    pub fn switch_auth_dialog(&mut self) {
        self.auth_dialog = self.auth_dialog.switched();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_replaces_and_clears() {
        let mut state = BrowseState::default();
        state.select(1);
        assert_eq!(state.selected(), Some(1));
        state.select(2);
        assert_eq!(state.selected(), Some(2));
        state.deselect();
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_submit_search_skips_blank_and_closes() {
        let mut state = BrowseState::default();
        state.set_search_open(true);
        state.set_search_query("  teacups ");
        assert_eq!(state.submit_search(), Some("  teacups ".to_string()));
        assert!(!state.is_search_open());

        state.set_search_open(true);
        state.set_search_query("   ");
        assert_eq!(state.submit_search(), None);
        assert!(!state.is_search_open());
    }

    #[test]
    fn test_switching_auth_dialogs() {
        let mut state = BrowseState::default();
        state.switch_auth_dialog();
        assert_eq!(state.auth_dialog(), AuthDialog::Closed);

        state.set_auth_dialog(AuthDialog::SignIn);
        state.switch_auth_dialog();
        assert_eq!(state.auth_dialog(), AuthDialog::SignUp);
        state.switch_auth_dialog();
        assert_eq!(state.auth_dialog(), AuthDialog::SignIn);
    }
}
