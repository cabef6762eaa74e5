//! Attributes store trait.
//!
//! Defines the per-user persistence interface. Implementations live in
//! taskkeeper-infra.

use taskkeeper_types::attributes::PersistentAttributes;
use taskkeeper_types::error::RepositoryError;

/// Trait for per-user persisted attributes, keyed by the platform-supplied
/// user id.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
///
/// Handlers use this as a plain load/mutate/save cycle with no concurrency
/// control: two concurrent requests for the same user race, and the second
/// save overwrites the first's update. Single-turn voice sessions make that
/// window negligible; the store itself never sees a torn write.
pub trait AttributesStore: Send + Sync {
    /// Load a user's attributes. Returns None when the user has no record.
    fn load(
        &self,
        user_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<PersistentAttributes>, RepositoryError>> + Send;

    /// Save a user's attributes (upsert).
    fn save(
        &self,
        user_id: &str,
        attributes: &PersistentAttributes,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
