use super::domain::{Garment, OwnerId};

/// Storage abstraction for wardrobes so the service module can be exercised
/// in isolation; backed by an in-memory list today, a database later.
///
/// Implementations must reject garments whose `owner_id` does not match the
/// wardrobe being written; the engine assumes every supplied garment belongs
/// to the requesting owner.
pub trait WardrobeRepository: Send + Sync {
    fn replace_wardrobe(
        &self,
        owner: &OwnerId,
        garments: Vec<Garment>,
    ) -> Result<usize, RepositoryError>;
    fn wardrobe(&self, owner: &OwnerId) -> Result<Vec<Garment>, RepositoryError>;
}

/// Error enumeration for wardrobe storage failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("garment {0} belongs to another wardrobe")]
    ForeignGarment(String),
    #[error("wardrobe storage unavailable: {0}")]
    Unavailable(String),
}
