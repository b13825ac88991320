//! # Application state container
//!
//! [`Marketplace`] owns every piece of client state: favorites, session,
//! the listing form, browse state and the notification sink. Views hold it
//! in a single signal and call its methods from event handlers. Each method
//! runs to completion, writes through to storage where the state is durable,
//! and reports the outcome as a notification.
//!
//! Collaborators are injected:
//!
//! | Seam | Default |
//! |------|---------|
//! | [`KeyValueStore`] | supplied by the platform |
//! | [`CatalogSource`] | [`StaticCatalog`] |
//! | [`AuthProvider`] | [`MockAuth`] |
//! | [`Notifier`] | [`NotificationQueue`] |

use std::rc::Rc;

use store::{
    Favorites, Item, ItemId, KeyValueStore, ListingError, ListingForm, NotificationQueue,
    Notifier, PhotoRef, SessionStore, SiteConfig, User,
};

use crate::auth::{AuthError, AuthProvider, MockAuth};
use crate::browse::{AuthDialog, BrowseState};
use crate::catalog::{CatalogSource, StaticCatalog};

/// Shared handle to the platform storage.
pub type Storage = Rc<dyn KeyValueStore>;

pub struct Marketplace<N: Notifier = NotificationQueue> {
    config: SiteConfig,
    catalog: Rc<dyn CatalogSource>,
    auth: Rc<dyn AuthProvider>,
    favorites: Favorites<Storage>,
    session: SessionStore<Storage>,
    listing: ListingForm,
    browse: BrowseState,
    notifier: N,
}

impl Marketplace<NotificationQueue> {
    /// Restore state from `storage` using the default collaborators. The
    /// queue keeps only as many notifications as can be shown at once.
    pub fn new(storage: Storage, config: SiteConfig) -> Self {
        let queue = NotificationQueue::with_capacity(config.notifications.visible_limit);
        Self::with_notifier(storage, config, queue)
    }

    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifier
    }

    /// The newest notifications up to the configured limit.
    pub fn visible_notifications(&self) -> &[store::Notification] {
        self.notifier.visible(self.config.notifications.visible_limit)
    }

    pub fn dismiss_notification(&mut self, id: u64) {
        self.notifier.dismiss(id);
    }
}

impl<N: Notifier> Marketplace<N> {
    pub fn with_notifier(storage: Storage, config: SiteConfig, notifier: N) -> Self {
        let favorites = Favorites::load(storage.clone(), config.storage.favorites_key.clone());
        let session = SessionStore::load(storage, config.storage.user_key.clone());
        tracing::info!(
            favorites = favorites.len(),
            signed_in = session.is_signed_in(),
            "Restored client state"
        );
        Self {
            listing: ListingForm::new(config.listing),
            config,
            catalog: Rc::new(StaticCatalog::default()),
            auth: Rc::new(MockAuth),
            favorites,
            session,
            browse: BrowseState::default(),
            notifier,
        }
    }

    /// Builder method to swap the listing source.
    pub fn with_catalog(mut self, catalog: impl CatalogSource + 'static) -> Self {
        self.catalog = Rc::new(catalog);
        self
    }

    /// Builder method to swap the authentication provider.
    pub fn with_auth(mut self, auth: impl AuthProvider + 'static) -> Self {
        self.auth = Rc::new(auth);
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    // ── Catalog ──

    pub fn items(&self) -> Vec<Item> {
        self.catalog.list_items()
    }

    pub fn item(&self, id: ItemId) -> Option<Item> {
        self.catalog.item(id)
    }

    /// Open the detail view for `id`. Unknown ids leave the selection as is.
    pub fn select_item(&mut self, id: ItemId) -> bool {
        if self.catalog.item(id).is_none() {
            tracing::warn!(item = id, "Selected unknown item");
            return false;
        }
        self.browse.select(id);
        true
    }

    pub fn close_item(&mut self) {
        self.browse.deselect();
    }

    pub fn selected_item(&self) -> Option<Item> {
        self.browse.selected().and_then(|id| self.catalog.item(id))
    }

    /// Confirm an inquiry. Nothing is transmitted.
    pub fn contact_seller(&mut self, item: &Item) {
        tracing::info!(item = item.id, "Contacted seller");
        self.notifier.success(
            "Message sent! ✉️",
            &format!(
                "{} will receive your inquiry about \"{}\"",
                item.seller_name, item.title
            ),
        );
    }

    // ── Search ──

    pub fn is_search_open(&self) -> bool {
        self.browse.is_search_open()
    }

    pub fn set_search_open(&mut self, open: bool) {
        self.browse.set_search_open(open);
    }

    pub fn search_query(&self) -> &str {
        self.browse.search_query()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.browse.set_search_query(query);
    }

    /// Close the search dialog and echo the query as typed when it is not
    /// blank. Returns the query when the caller should bring the featured
    /// list into view.
    pub fn submit_search(&mut self) -> Option<String> {
        let query = self.browse.submit_search()?;
        tracing::info!(%query, "Search submitted");
        self.notifier
            .success("Search Results", &format!("Showing stories for \"{query}\""));
        Some(query)
    }

    // ── Favorites ──

    pub fn is_favorite(&self, id: ItemId) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorites_count(&self) -> usize {
        self.favorites.len()
    }

    pub fn favorite_ids(&self) -> &[ItemId] {
        self.favorites.ids()
    }

    /// Flip membership of `id`. Returns whether it is now a favorite.
    pub fn toggle_favorite(&mut self, id: ItemId) -> bool {
        let added = self.favorites.toggle(id);
        if added {
            self.notifier.success(
                "Added to favorites! ❤️",
                "You can find this story in your saved items.",
            );
        } else {
            self.notifier
                .success("Removed from favorites", "Item removed from your collection.");
        }
        added
    }

    // ── Session ──

    pub fn user(&self) -> Option<&User> {
        self.session.user()
    }

    pub fn auth_dialog(&self) -> AuthDialog {
        self.browse.auth_dialog()
    }

    pub fn open_sign_in(&mut self) {
        self.browse.set_auth_dialog(AuthDialog::SignIn);
    }

    pub fn open_sign_up(&mut self) {
        self.browse.set_auth_dialog(AuthDialog::SignUp);
    }

    /// Close whichever auth dialog is open and open the other one.
    pub fn switch_auth_dialog(&mut self) {
        self.browse.switch_auth_dialog();
    }

    pub fn close_auth_dialog(&mut self) {
        self.browse.set_auth_dialog(AuthDialog::Closed);
    }

    pub fn sign_in(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        match self.auth.sign_in(email, password) {
            Ok(user) => {
                self.session.sign_in(user);
                self.close_auth_dialog();
                self.notifier
                    .success("Welcome back! 🎉", "Ready to discover more amazing stories?");
                Ok(())
            }
            Err(e) => {
                self.notifier.error("Sign in failed", &e.to_string());
                Err(e)
            }
        }
    }

    pub fn sign_up(&mut self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        match self.auth.sign_up(name, email, password) {
            Ok(user) => {
                self.session.sign_in(user);
                self.close_auth_dialog();
                self.notifier.success(
                    "Welcome to StorySwap! 🌟",
                    "Start sharing and discovering amazing stories.",
                );
                Ok(())
            }
            Err(e) => {
                self.notifier.error("Sign up failed", &e.to_string());
                Err(e)
            }
        }
    }

    pub fn sign_out(&mut self) {
        self.session.sign_out();
        self.notifier
            .success("Signed out successfully", "See you again soon!");
    }

    // ── Listing form ──

    pub fn listing(&self) -> &ListingForm {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut ListingForm {
        &mut self.listing
    }

    /// Photos chosen with the file picker.
    pub fn attach_photos(&mut self, photos: Vec<PhotoRef>) {
        if let Some(count) = self.listing.attach_photos(photos) {
            self.notify_photos(count);
        }
    }

    pub fn drag_enter(&mut self) {
        self.listing.drop_zone_mut().drag_enter();
    }

    pub fn drag_over(&mut self) {
        self.listing.drop_zone_mut().drag_over();
    }

    pub fn drag_leave(&mut self) {
        self.listing.drop_zone_mut().drag_leave();
    }

    /// Photos dropped on the drop target.
    pub fn drop_photos(&mut self, photos: Vec<PhotoRef>) {
        tracing::debug!(files = photos.len(), "Photos dropped");
        if let Some(count) = self.listing.drop_photos(photos) {
            self.notify_photos(count);
        }
    }

    fn notify_photos(&mut self, count: usize) {
        self.notifier.success(
            "Photos uploaded!",
            &format!("{count} {} ready to share your story.", photo_noun(count)),
        );
    }

    /// Validate and, on success, reset the listing form.
    pub fn submit_listing(&mut self) -> Result<(), ListingError> {
        match self.listing.submit() {
            Ok(()) => {
                self.notifier.success(
                    "Story Shared Successfully! 🎉",
                    "Your item is now live. Someone will love giving it a new chapter!",
                );
                Ok(())
            }
            Err(e) => {
                tracing::debug!(error = %e, "Listing rejected");
                self.notifier.error(e.title(), &e.to_string());
                Err(e)
            }
        }
    }
}

/// `photo` for one, `photos` otherwise.
pub fn photo_noun(count: usize) -> &'static str {
    if count == 1 {
        "photo"
    } else {
        "photos"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{Category, Condition, ListingDraft, MemoryStorage, Severity};

    fn market_with(storage: &MemoryStorage) -> Marketplace {
        Marketplace::new(Rc::new(storage.clone()), SiteConfig::default())
    }

    fn market() -> Marketplace {
        market_with(&MemoryStorage::new())
    }

    fn latest(market: &Marketplace) -> (String, String, Severity) {
        let n = market.notifications().latest().expect("a notification");
        (n.title.clone(), n.body.clone(), n.severity)
    }

    #[test]
    fn test_toggle_favorite_notifies_and_persists() {
        let storage = MemoryStorage::new();
        let mut market = market_with(&storage);

        assert!(market.toggle_favorite(2));
        assert_eq!(latest(&market).0, "Added to favorites! ❤️");
        assert_eq!(storage.get("storyswap-favorites").as_deref(), Some("[2]"));

        assert!(!market.toggle_favorite(2));
        assert_eq!(latest(&market).0, "Removed from favorites");
        assert_eq!(market.favorites_count(), 0);
    }

    #[test]
    fn test_state_restored_on_startup() {
        let storage = MemoryStorage::new();
        {
            let mut market = market_with(&storage);
            market.toggle_favorite(1);
            market.toggle_favorite(4);
            market.sign_in("emma@example.com", "x").unwrap();
        }
        let market = market_with(&storage);
        assert_eq!(market.favorite_ids(), &[1, 4]);
        assert_eq!(market.user().map(|u| u.name.as_str()), Some("emma"));
    }

    #[test]
    fn test_malformed_storage_starts_clean() {
        let storage = MemoryStorage::new();
        storage.set("storyswap-favorites", "{oops");
        storage.set("storyswap-user", "[]");
        let market = market_with(&storage);
        assert_eq!(market.favorites_count(), 0);
        assert!(market.user().is_none());
        assert!(market.notifications().is_empty());
    }

    #[test]
    fn test_sign_in_closes_dialog_and_welcomes() {
        let mut market = market();
        market.open_sign_in();
        market.sign_in("emma@example.com", "x").unwrap();

        assert_eq!(market.user().map(|u| u.name.as_str()), Some("emma"));
        assert_eq!(market.auth_dialog(), AuthDialog::Closed);
        assert_eq!(latest(&market).0, "Welcome back! 🎉");
    }

    #[test]
    fn test_sign_up_then_sign_out() {
        let storage = MemoryStorage::new();
        let mut market = market_with(&storage);
        market.open_sign_up();
        market.sign_up("Sarah", "sarah@example.com", "pw").unwrap();
        assert_eq!(market.user().map(|u| u.name.as_str()), Some("Sarah"));
        assert_eq!(market.auth_dialog(), AuthDialog::Closed);
        assert_eq!(latest(&market).0, "Welcome to StorySwap! 🌟");

        market.sign_out();
        assert!(market.user().is_none());
        assert!(storage.get("storyswap-user").is_none());
        assert_eq!(latest(&market).0, "Signed out successfully");
    }

    #[test]
    fn test_failed_sign_in_keeps_dialog_open() {
        let mut market = market();
        market.open_sign_in();
        assert_eq!(market.sign_in("", "x"), Err(AuthError::MissingField("Email")));
        assert_eq!(market.auth_dialog(), AuthDialog::SignIn);
        assert_eq!(latest(&market).2, Severity::Destructive);
    }

    #[test]
    fn test_switching_between_auth_dialogs() {
        let mut market = market();
        market.open_sign_in();
        market.switch_auth_dialog();
        assert_eq!(market.auth_dialog(), AuthDialog::SignUp);
        market.switch_auth_dialog();
        assert_eq!(market.auth_dialog(), AuthDialog::SignIn);
        market.close_auth_dialog();
        assert_eq!(market.auth_dialog(), AuthDialog::Closed);
    }

    #[test]
    fn test_select_a_then_b_then_close() {
        let mut market = market();
        assert!(market.select_item(1));
        assert!(market.select_item(2));
        assert_eq!(market.selected_item().map(|i| i.id), Some(2));
        market.close_item();
        assert!(market.selected_item().is_none());
    }

    #[test]
    fn test_select_does_not_change_views() {
        let mut market = market();
        let before = market.item(3).map(|i| i.views);
        market.select_item(3);
        market.close_item();
        market.select_item(3);
        assert_eq!(market.selected_item().map(|i| i.views), before);
    }

    #[test]
    fn test_select_unknown_item_keeps_selection() {
        let mut market = market();
        market.select_item(1);
        assert!(!market.select_item(99));
        assert_eq!(market.selected_item().map(|i| i.id), Some(1));
    }

    #[test]
    fn test_contact_seller_names_seller_and_title() {
        let mut market = market();
        let item = market.item(1).unwrap();
        market.contact_seller(&item);
        let (title, body, _) = latest(&market);
        assert_eq!(title, "Message sent! ✉️");
        assert_eq!(
            body,
            "Emma Chen will receive your inquiry about \"Grandmother's Poetry Collection\""
        );
    }

    #[test]
    fn test_search_echoes_query_without_filtering() {
        let mut market = market();
        market.set_search_open(true);
        market.set_search_query(" camera ");
        assert_eq!(market.submit_search(), Some(" camera ".to_string()));
        assert!(!market.is_search_open());
        assert_eq!(latest(&market).1, "Showing stories for \" camera \"");
        assert_eq!(market.items().len(), 4);
    }

    #[test]
    fn test_blank_search_is_silent() {
        let mut market = market();
        market.set_search_open(true);
        market.set_search_query("  ");
        assert_eq!(market.submit_search(), None);
        assert!(!market.is_search_open());
        assert!(market.notifications().is_empty());
    }

    #[test]
    fn test_photo_notifications_pluralize() {
        let mut market = market();
        market.attach_photos(vec![PhotoRef::new("a.jpg", 1)]);
        assert_eq!(latest(&market).1, "1 photo ready to share your story.");

        market.drag_enter();
        market.drop_photos(vec![PhotoRef::new("a.jpg", 1), PhotoRef::new("b.jpg", 1)]);
        assert!(!market.listing().drop_zone().is_active());
        assert_eq!(market.listing().draft().photos.len(), 2);
        assert_eq!(latest(&market).1, "2 photos ready to share your story.");

        let before = market.notifications().len();
        market.attach_photos(Vec::new());
        assert_eq!(market.notifications().len(), before);
    }

    #[test]
    fn test_submit_listing_outcomes() {
        let mut market = market();
        market.listing_mut().draft_mut().story = "too short".to_string();
        assert!(matches!(
            market.submit_listing(),
            Err(ListingError::StoryTooShort { min: 150, actual: 9 })
        ));
        assert_eq!(latest(&market).0, "Story too short");
        assert_eq!(latest(&market).2, Severity::Destructive);

        market.listing_mut().draft_mut().story = "x".repeat(200);
        assert_eq!(market.submit_listing(), Err(ListingError::MissingRequiredField));
        assert_eq!(latest(&market).0, "Missing information");

        let draft = market.listing_mut().draft_mut();
        draft.category = Some(Category::Collectibles);
        draft.condition = Some(Condition::Fair);
        assert_eq!(market.submit_listing(), Ok(()));
        assert_eq!(market.listing().draft(), &ListingDraft::default());
        assert_eq!(latest(&market).0, "Story Shared Successfully! 🎉");
        assert_eq!(latest(&market).2, Severity::Default);
    }

    #[test]
    fn test_custom_catalog_source() {
        struct Empty;
        impl CatalogSource for Empty {
            fn list_items(&self) -> Vec<Item> {
                Vec::new()
            }
        }
        let mut market = market().with_catalog(Empty);
        assert!(market.items().is_empty());
        assert!(!market.select_item(1));

        let camera = StaticCatalog::default().item(3).unwrap();
        let mut market = market.with_catalog(StaticCatalog::new(vec![camera]));
        assert_eq!(market.items().len(), 1);
        assert!(!market.select_item(1));
        assert!(market.select_item(3));
    }

    #[test]
    fn test_dismissed_toasts_do_not_resurface() {
        let mut market = market();
        for id in 1..=5 {
            market.toggle_favorite(id);
        }
        assert_eq!(market.notifications().len(), 3);
        let visible: Vec<u64> = market.visible_notifications().iter().map(|n| n.id).collect();
        assert_eq!(visible, vec![3, 4, 5]);

        for id in visible {
            market.dismiss_notification(id);
        }
        assert!(market.visible_notifications().is_empty());
        assert!(market.notifications().is_empty());
    }

    struct RejectingAuth;

    impl AuthProvider for RejectingAuth {
        fn sign_in(&self, _email: &str, _password: &str) -> Result<User, AuthError> {
            Err(AuthError::MissingField("Email"))
        }

        fn sign_up(&self, _name: &str, _email: &str, _password: &str) -> Result<User, AuthError> {
            Err(AuthError::MissingField("Name"))
        }
    }

    #[test]
    fn test_swapped_auth_provider_rejects() {
        let storage = MemoryStorage::new();
        let mut market = market_with(&storage).with_auth(RejectingAuth);

        market.open_sign_in();
        assert_eq!(
            market.sign_in("emma@example.com", "x"),
            Err(AuthError::MissingField("Email"))
        );
        assert_eq!(market.auth_dialog(), AuthDialog::SignIn);
        assert_eq!(
            latest(&market),
            ("Sign in failed".to_string(), "Email is required".to_string(), Severity::Destructive)
        );

        market.switch_auth_dialog();
        assert!(market.sign_up("Sarah", "sarah@example.com", "pw").is_err());
        assert_eq!(market.auth_dialog(), AuthDialog::SignUp);
        assert_eq!(latest(&market).0, "Sign up failed");
        assert_eq!(latest(&market).2, Severity::Destructive);

        assert!(market.user().is_none());
        assert!(storage.get("storyswap-user").is_none());
    }

    #[derive(Default)]
    struct Recorder(Vec<(String, Severity)>);

    impl Notifier for Recorder {
        fn notify(&mut self, title: &str, _body: &str, severity: Severity) {
            self.0.push((title.to_string(), severity));
        }
    }

    #[test]
    fn test_custom_notifier_receives_feedback() {
        let storage: Storage = Rc::new(MemoryStorage::new());
        let mut market = Marketplace::with_notifier(storage, SiteConfig::default(), Recorder::default());
        market.toggle_favorite(1);
        market.listing_mut().draft_mut().story = "short".to_string();
        let _ = market.submit_listing();

        assert_eq!(
            market.notifier().0,
            vec![
                ("Added to favorites! ❤️".to_string(), Severity::Default),
                ("Story too short".to_string(), Severity::Destructive),
            ]
        );
    }
}
