// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Registry of covers keyed by device host.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;
use serde_json::Value;
use tokio::sync::{RwLock, broadcast};

use super::dispatch::{DispatchFailure, DispatchReport};
use super::entity_id::generate_entity_id;
use crate::cover::Cover;
use crate::error::{Error, Result};
use crate::event::{CoverEvent, EventBus};
use crate::service::ServiceCall;
use crate::state::CoverState;

/// Interval between two polling rounds when the host does not override it.
pub const DEFAULT_SCAN_INTERVAL: Duration = Duration::from_secs(15);

#[derive(Debug)]
struct RegisteredCover<C> {
    entity_id: String,
    cover: Arc<C>,
}

/// Covers known to the host, keyed by device host address.
///
/// Registering a second cover for the same host replaces the first one.
#[derive(Debug)]
pub struct CoverRegistry<C: Cover> {
    covers: RwLock<HashMap<String, RegisteredCover<C>>>,
    event_bus: EventBus,
}

impl<C: Cover> CoverRegistry<C> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            covers: RwLock::new(HashMap::new()),
            event_bus: EventBus::new(),
        }
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Subscribes to cover events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<CoverEvent> {
        self.event_bus.subscribe()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Registers a cover for `host` and returns its entity id.
    pub async fn register(&self, host: impl Into<String>, cover: C) -> String {
        let host = host.into();
        let mut covers = self.covers.write().await;

        if let Some(previous) = covers.remove(&host) {
            tracing::info!(host = %host, entity_id = %previous.entity_id, "Replacing cover");
            self.event_bus.publish(CoverEvent::CoverRemoved {
                entity_id: previous.entity_id,
            });
        }

        let entity_id = generate_entity_id(cover.name(), |candidate| {
            covers.values().any(|entry| entry.entity_id == candidate)
        });

        tracing::info!(host = %host, entity_id = %entity_id, "Registered cover");

        covers.insert(
            host,
            RegisteredCover {
                entity_id: entity_id.clone(),
                cover: Arc::new(cover),
            },
        );
        drop(covers);

        self.event_bus.publish(CoverEvent::CoverAdded {
            entity_id: entity_id.clone(),
        });
        entity_id
    }

    /// Removes the cover registered for `host`.
    ///
    /// Returns `true` if a cover was removed.
    pub async fn remove(&self, host: &str) -> bool {
        let removed = self.covers.write().await.remove(host);

        match removed {
            Some(entry) => {
                tracing::info!(host = %host, entity_id = %entry.entity_id, "Removed cover");
                self.event_bus.publish(CoverEvent::CoverRemoved {
                    entity_id: entry.entity_id,
                });
                true
            }
            None => false,
        }
    }

    /// Returns the cover registered for `host`.
    pub async fn get(&self, host: &str) -> Option<Arc<C>> {
        self.covers
            .read()
            .await
            .get(host)
            .map(|entry| Arc::clone(&entry.cover))
    }

    /// Returns the cover with the given entity id.
    pub async fn get_entity(&self, entity_id: &str) -> Option<Arc<C>> {
        self.covers
            .read()
            .await
            .values()
            .find(|entry| entry.entity_id == entity_id)
            .map(|entry| Arc::clone(&entry.cover))
    }

    /// Returns the entity id of the cover registered for `host`.
    pub async fn entity_id(&self, host: &str) -> Option<String> {
        self.covers
            .read()
            .await
            .get(host)
            .map(|entry| entry.entity_id.clone())
    }

    /// Returns all entity ids, sorted.
    pub async fn entity_ids(&self) -> Vec<String> {
        self.snapshot()
            .await
            .into_iter()
            .map(|(entity_id, _)| entity_id)
            .collect()
    }

    /// Returns the number of registered covers.
    pub async fn len(&self) -> usize {
        self.covers.read().await.len()
    }

    /// Returns `true` if no cover is registered.
    pub async fn is_empty(&self) -> bool {
        self.covers.read().await.is_empty()
    }

    /// Clones out every entry, sorted by entity id, so no lock is held while
    /// talking to devices.
    async fn snapshot(&self) -> Vec<(String, Arc<C>)> {
        let mut entries: Vec<_> = self
            .covers
            .read()
            .await
            .values()
            .map(|entry| (entry.entity_id.clone(), Arc::clone(&entry.cover)))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    // =========================================================================
    // Refresh
    // =========================================================================

    /// Refreshes one cover.
    ///
    /// # Errors
    ///
    /// Returns `Error::EntityNotFound` for an unknown entity id, or the
    /// refresh failure.
    pub async fn refresh(&self, entity_id: &str) -> Result<CoverState> {
        let cover = self
            .get_entity(entity_id)
            .await
            .ok_or_else(|| Error::EntityNotFound(entity_id.to_string()))?;
        self.refresh_cover(entity_id, &cover).await
    }

    /// Refreshes every cover concurrently.
    ///
    /// Failures are logged and published; returns the number of covers that
    /// refreshed successfully.
    pub async fn refresh_all(&self) -> usize {
        let entries = self.snapshot().await;
        let results = join_all(
            entries
                .iter()
                .map(|(entity_id, cover)| self.refresh_cover(entity_id, cover)),
        )
        .await;
        results.iter().filter(|result| result.is_ok()).count()
    }

    /// Refreshes every cover each `interval`, forever.
    ///
    /// The first round runs immediately. Intended to be spawned or raced
    /// against a shutdown signal by the host.
    pub async fn run_polling(&self, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            let refreshed = self.refresh_all().await;
            tracing::trace!(refreshed, "Polling round complete");
        }
    }

    async fn refresh_cover(&self, entity_id: &str, cover: &C) -> Result<CoverState> {
        let old_state = cover.state();

        match cover.update().await {
            Ok(new_state) => {
                if new_state.position() != old_state.position() {
                    self.event_bus.publish(CoverEvent::StateChanged {
                        entity_id: entity_id.to_string(),
                        old_state,
                        new_state: new_state.clone(),
                    });
                }
                Ok(new_state)
            }
            Err(e) => {
                tracing::warn!(entity_id = %entity_id, error = %e, "Failed to refresh cover");
                self.event_bus.publish(CoverEvent::UpdateFailed {
                    entity_id: entity_id.to_string(),
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }

    // =========================================================================
    // Service dispatch
    // =========================================================================

    /// Parses and dispatches a service call.
    ///
    /// # Errors
    ///
    /// Returns `Error::Service` if the service name or data is invalid.
    /// Failures of individual covers are reported in the [`DispatchReport`].
    pub async fn call_service(&self, service: &str, data: Value) -> Result<DispatchReport> {
        let call = ServiceCall::parse(service, data)?;
        Ok(self.handle_service(&call).await)
    }

    /// Dispatches a validated service call.
    ///
    /// Commands are sent one cover at a time. Every cover that accepted its
    /// command is then refreshed, concurrently, and all refreshes complete
    /// before this returns. Covers lacking the feature are skipped silently.
    pub async fn handle_service(&self, call: &ServiceCall) -> DispatchReport {
        let service = call.service();
        let targets: Vec<_> = self
            .snapshot()
            .await
            .into_iter()
            .filter(|(entity_id, _)| call.targets(entity_id))
            .collect();

        tracing::debug!(service = %service, targets = targets.len(), "Dispatching cover service");

        let mut report = DispatchReport::default();
        let mut to_refresh = Vec::new();

        for (entity_id, cover) in targets {
            if !cover.features().supports(service) {
                tracing::debug!(entity_id = %entity_id, service = %service, "Cover does not support service");
                report.skipped.push(entity_id);
                continue;
            }

            match cover.call_service(call).await {
                Ok(()) => {
                    report.commanded.push(entity_id.clone());
                    to_refresh.push((entity_id, cover));
                }
                Err(error) => {
                    tracing::warn!(entity_id = %entity_id, service = %service, error = %error, "Cover command failed");
                    report.failed.push(DispatchFailure { entity_id, error });
                }
            }
        }

        let refreshes = join_all(
            to_refresh
                .iter()
                .map(|(entity_id, cover)| self.refresh_cover(entity_id, cover)),
        )
        .await;

        report.refresh_failed = to_refresh
            .into_iter()
            .zip(refreshes)
            .filter_map(|((entity_id, _), result)| {
                result
                    .err()
                    .map(|error| DispatchFailure { entity_id, error })
            })
            .collect();

        report
    }
}

impl<C: Cover> Default for CoverRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}
