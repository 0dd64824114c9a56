//! Transport trait
//!
//! Defines the one operation every transport offers: push a command line to
//! Audacity and hand back whatever it answers.

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Request/response channel to a running Audacity instance
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one command line (without terminator) and return the raw response text
    async fn send(&self, command: &str) -> Result<String>;

    /// Check whether the other end looks reachable
    async fn is_connected(&self) -> bool;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, command: &str) -> Result<String> {
        (**self).send(command).await
    }

    async fn is_connected(&self) -> bool {
        (**self).is_connected().await
    }
}
