// ABOUTME: Binding between the UI side and a live recording service
// ABOUTME: Cloneable handle that is either bound to a service or empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use super::service::TrackRecordingService;

/// Shared, late-bound reference to the recording service
///
/// Clones observe the same binding.
#[derive(Clone, Default)]
pub struct RecordingServiceConnection {
    service: Arc<RwLock<Option<Arc<dyn TrackRecordingService>>>>,
}

impl RecordingServiceConnection {
    /// Unbound connection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connection already bound to `service`
    #[must_use]
    pub fn bound_to(service: Arc<dyn TrackRecordingService>) -> Self {
        Self {
            service: Arc::new(RwLock::new(Some(service))),
        }
    }

    /// Bind to `service`, replacing any previous binding
    pub async fn bind(&self, service: Arc<dyn TrackRecordingService>) {
        *self.service.write().await = Some(service);
        debug!("Recording service bound");
    }

    /// Drop the binding
    pub async fn unbind(&self) {
        if self.service.write().await.take().is_some() {
            debug!("Recording service unbound");
        }
    }

    /// The bound service, if any
    pub async fn service_if_bound(&self) -> Option<Arc<dyn TrackRecordingService>> {
        self.service.read().await.clone()
    }

    /// True while a service is bound
    pub async fn is_bound(&self) -> bool {
        self.service.read().await.is_some()
    }
}
