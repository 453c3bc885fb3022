//! Shared contract for records held by the resource store.

use chrono::{DateTime, Utc};

/// A record type the store can own.
///
/// The store assigns `id` and `created_at`; everything else comes from the
/// caller's [`Resource::Input`] payload.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Caller-supplied fields for create and update.
    type Input: Send + 'static;

    /// Display name used in log fields and not-found messages.
    const NAME: &'static str;

    fn id(&self) -> i64;

    fn created_at(&self) -> DateTime<Utc>;

    /// Assemble a stored record from store-owned identity and caller input.
    fn build(id: i64, created_at: DateTime<Utc>, input: Self::Input) -> Self;
}
