//! Event store — the four event use-cases over a [`DocumentStore`].
//!
//! Every mutation re-reads the whole collection afterwards and hands that back,
//! so all operations answer with the same `{events: [...]}` shape.

use std::str::FromStr;

use serde::Deserialize;

use eventboard_domain::error::{EventBoardError, NotFoundError};
use eventboard_domain::event::{Event, EventCollection, NewEvent};
use eventboard_domain::record::{self, LikeChange};

use crate::ports::DocumentStore;

/// Name of the collection holding events.
pub const EVENTS_COLLECTION: &str = "Events";

/// What `add_like` / `remove_like` answer when the store fails mid-change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LikeFailureMode {
    /// Log the failure and return it to the caller.
    #[default]
    Propagate,
    /// Log the failure and answer with a fresh listing, like a failed read.
    Refresh,
}

/// Unrecognised [`LikeFailureMode`] name.
#[derive(Debug, thiserror::Error)]
#[error("unknown like failure mode: {0}")]
pub struct UnknownLikeFailureMode(pub String);

impl FromStr for LikeFailureMode {
    type Err = UnknownLikeFailureMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "propagate" => Ok(Self::Propagate),
            "refresh" => Ok(Self::Refresh),
            other => Err(UnknownLikeFailureMode(other.to_string())),
        }
    }
}

/// Application service for listing, adding and liking events.
pub struct EventStore<S> {
    store: S,
    on_like_failure: LikeFailureMode,
}

impl<S: DocumentStore> EventStore<S> {
    /// Create a new service backed by the given document store.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            on_like_failure: LikeFailureMode::default(),
        }
    }

    /// Choose how like changes report store failures.
    #[must_use]
    pub fn with_like_failure(mut self, mode: LikeFailureMode) -> Self {
        self.on_like_failure = mode;
        self
    }

    /// Borrow the underlying document store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// List every stored event.
    ///
    /// Serves [`EventCollection::fallback`] when the collection is empty or
    /// the store cannot be read. Read failures are logged, never returned.
    #[tracing::instrument(skip(self))]
    pub async fn list_events(&self) -> EventCollection {
        match self.store.get_all(EVENTS_COLLECTION).await {
            Ok(snapshot) if snapshot.is_empty() => {
                tracing::debug!("no stored events, serving fallback");
                EventCollection::fallback()
            }
            Ok(snapshot) => {
                tracing::debug!(count = snapshot.len(), "loaded events");
                snapshot.docs.iter().map(Event::from_document).collect()
            }
            Err(err) => {
                tracing::error!(error = ?err, "error getting events, serving fallback");
                EventCollection::fallback()
            }
        }
    }

    /// Insert a new event with zero likes, then list all events.
    ///
    /// # Errors
    ///
    /// Returns the store error when the insert fails.
    #[tracing::instrument(skip(self, new_event), fields(title = %new_event.title))]
    pub async fn add_event(&self, new_event: NewEvent) -> Result<EventCollection, EventBoardError> {
        let id = self
            .store
            .add(EVENTS_COLLECTION, new_event.into_record())
            .await?;
        tracing::debug!(%id, "event added");
        Ok(self.list_events().await)
    }

    /// Add one like to the event `id`, then list all events.
    ///
    /// # Errors
    ///
    /// With [`LikeFailureMode::Propagate`], returns [`EventBoardError::NotFound`]
    /// when `id` does not exist or the store error when the change fails.
    #[tracing::instrument(skip(self))]
    pub async fn add_like(&self, id: &str) -> Result<EventCollection, EventBoardError> {
        tracing::info!(%id, "adding like");
        self.change_likes(id, LikeChange::Increment).await
    }

    /// Remove one like from the event `id` unless it has none, then list all
    /// events.
    ///
    /// # Errors
    ///
    /// Same as [`EventStore::add_like`].
    #[tracing::instrument(skip(self))]
    pub async fn remove_like(&self, id: &str) -> Result<EventCollection, EventBoardError> {
        tracing::info!(%id, "removing like");
        self.change_likes(id, LikeChange::Decrement).await
    }

    async fn change_likes(
        &self,
        id: &str,
        change: LikeChange,
    ) -> Result<EventCollection, EventBoardError> {
        match self.write_likes(id, change).await {
            Ok(likes) => {
                tracing::debug!(%id, likes, "likes updated");
                Ok(self.list_events().await)
            }
            Err(err) => {
                tracing::error!(error = ?err, %id, "error changing likes");
                match self.on_like_failure {
                    LikeFailureMode::Propagate => Err(err),
                    LikeFailureMode::Refresh => Ok(self.list_events().await),
                }
            }
        }
    }

    /// Read-modify-write of a single document. Not atomic across callers.
    async fn write_likes(&self, id: &str, change: LikeChange) -> Result<u64, EventBoardError> {
        let Some(mut document) = self.store.get(EVENTS_COLLECTION, id).await? else {
            return Err(NotFoundError {
                entity: "Event",
                id: id.to_string(),
            }
            .into());
        };

        let likes = record::change_likes(&mut document.data, change);
        self.store
            .update(EVENTS_COLLECTION, id, document.data)
            .await?;
        Ok(likes)
    }
}
