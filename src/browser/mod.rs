//! Organization browser - the coordinator between the remote API, the local
//! favorites store, and whatever renders the result
//!
//! Owns the in-memory organization list and the favorite set. All state
//! mutation goes through `&mut self`, so callers get one serialized logical
//! thread of execution; a re-fetch that overlaps an older one simply wins by
//! being the last writer.

use std::sync::Arc;

use crate::client::{Organization, OrganizationsApi};
use crate::error::ApiError;
use crate::store::{FavoriteOrganization, FavoritesStore};

/// Fetch lifecycle of the browser
///
/// Re-entrant: fetching again from `Populated` or `Failed` goes back through
/// `Fetching`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchState {
    #[default]
    Idle,
    Fetching,
    Populated,
    Failed,
}

/// Observer interface for fetch progress and completion
///
/// All methods default to no-ops so implementors pick what they care about.
pub trait BrowserObserver: Send + Sync {
    fn loading_started(&self) {}
    fn loading_ended(&self) {}
    fn organizations_fetched(&self) {}
    fn fetch_failed(&self, _error: &ApiError) {}
}

/// Stateful coordinator over the organizations API and the favorites store
pub struct OrganizationBrowser {
    client: Arc<dyn OrganizationsApi>,
    store: FavoritesStore,
    organizations: Vec<Organization>,
    favorites: Vec<FavoriteOrganization>,
    state: FetchState,
    observers: Vec<Box<dyn BrowserObserver>>,
}

impl OrganizationBrowser {
    /// Create a browser over an injected client and store.
    ///
    /// Favorites are loaded up front; mutations issued before the first
    /// fetch operate on the persisted set.
    pub fn new(client: Arc<dyn OrganizationsApi>, store: FavoritesStore) -> Self {
        let favorites = store.load();
        Self {
            client,
            store,
            organizations: Vec::new(),
            favorites,
            state: FetchState::Idle,
            observers: Vec::new(),
        }
    }

    /// Register an observer for fetch notifications
    pub fn subscribe(&mut self, observer: Box<dyn BrowserObserver>) {
        self.observers.push(observer);
    }

    /// Current fetch state
    pub fn state(&self) -> FetchState {
        self.state
    }

    /// Fetch the organization list and merge in persisted favorites.
    ///
    /// On success the in-memory list is replaced wholesale and favorites are
    /// reloaded from the store. On failure the previous list is kept; the
    /// error is reported once, to observers and to the caller, and never
    /// retried here.
    pub async fn fetch_organizations(&mut self) -> Result<(), ApiError> {
        self.state = FetchState::Fetching;
        for observer in &self.observers {
            observer.loading_started();
        }

        let result = self.client.list_organizations().await;

        let outcome = match result {
            Ok(organizations) => {
                self.organizations = organizations;
                self.favorites = self.store.load();
                self.state = FetchState::Populated;
                for observer in &self.observers {
                    observer.organizations_fetched();
                }
                Ok(())
            }
            Err(error) => {
                self.state = FetchState::Failed;
                for observer in &self.observers {
                    observer.fetch_failed(&error);
                }
                Err(error)
            }
        };

        for observer in &self.observers {
            observer.loading_ended();
        }

        outcome
    }

    /// Current in-memory list, in the order the API returned it
    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    /// Number of organizations currently held
    pub fn len(&self) -> usize {
        self.organizations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty()
    }

    /// Organization at `index`, or `None` when out of range
    pub fn organization_at(&self, index: usize) -> Option<&Organization> {
        self.organizations.get(index)
    }

    /// Favorites as currently held in memory
    pub fn favorites(&self) -> &[FavoriteOrganization] {
        &self.favorites
    }

    /// Whether `organization_id` is in the favorite set
    pub fn is_favorite(&self, organization_id: u64) -> bool {
        self.favorites
            .iter()
            .any(|f| f.organization_id == organization_id)
    }

    /// Mark an organization as favorite. No-op when already favorite.
    pub fn add_to_favorites(&mut self, org: &Organization) {
        if self.is_favorite(org.id) {
            return;
        }
        self.favorites.push(FavoriteOrganization::from(org));
        self.store.save(&self.favorites);
    }

    /// Remove an organization from favorites. No-op when not favorite.
    pub fn remove_from_favorites(&mut self, org: &Organization) {
        self.favorites.retain(|f| f.organization_id != org.id);
        self.store.save(&self.favorites);
    }

    /// Flip the favorite status of an organization.
    ///
    /// The single entry point the presentation layer uses on interaction.
    /// Returns the new status.
    pub fn toggle_favorite(&mut self, org: &Organization) -> bool {
        if self.is_favorite(org.id) {
            self.remove_from_favorites(org);
            false
        } else {
            self.add_to_favorites(org);
            true
        }
    }
}
