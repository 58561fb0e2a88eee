//! Domain factories for creating domain entities and value objects.

use super::NoticeId;

/// Factory for generating NoticeId instances.
///
/// Keeps id generation out of the `Notice` constructor so tests can build
/// notices with fixed ids.
pub struct NoticeIdFactory;

impl NoticeIdFactory {
    /// Generate a new NoticeId with a random UUID v4.
    pub fn generate() -> NoticeId {
        NoticeId::from_uuid(uuid::Uuid::new_v4())
    }
}
