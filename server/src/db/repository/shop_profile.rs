//! Shop Profile Repository
//!
//! The profile is a singleton stored under a fixed record key.

use super::{now_millis, BaseRepository, RepoError, RepoResult};
use crate::db::models::{ShopProfile, ShopProfileUpdate, PROFILE_KEY};
use crate::utils::validation;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "shop_profile";

#[derive(Clone)]
pub struct ShopProfileRepository {
    base: BaseRepository,
}

impl ShopProfileRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn record() -> RecordId {
        RecordId::from_table_key(TABLE, PROFILE_KEY)
    }

    /// Read the profile, an empty placeholder before first save
    pub async fn get(&self) -> RepoResult<ShopProfile> {
        let profile: Option<ShopProfile> = self.base.db().select(Self::record()).await?;
        Ok(profile.unwrap_or_else(|| ShopProfile::empty(now_millis())))
    }

    /// Overwrite the profile
    pub async fn save(&self, data: ShopProfileUpdate) -> RepoResult<ShopProfile> {
        validation::validate_required_text("name", &data.name, validation::MAX_NAME_LEN)
            .map_err(RepoError::Validation)?;
        validation::validate_optional_text("website", &data.website, validation::MAX_URL_LEN)
            .map_err(RepoError::Validation)?;
        validation::validate_optional_text("description", &data.description, validation::MAX_NOTE_LEN)
            .map_err(RepoError::Validation)?;

        let profile = ShopProfile {
            id: None,
            name: data.name,
            tagline: data.tagline.unwrap_or_default(),
            description: data.description.unwrap_or_default(),
            address: data.address.unwrap_or_default(),
            phone: data.phone.unwrap_or_default(),
            email: data.email.unwrap_or_default(),
            website: data.website.unwrap_or_default(),
            opening_hours: data.opening_hours.unwrap_or_default(),
            certifications: data.certifications.unwrap_or_default(),
            specialties: data.specialties.unwrap_or_default(),
            languages: data.languages.unwrap_or_default(),
            updated_at: now_millis(),
        };

        let saved: Option<ShopProfile> = self
            .base
            .db()
            .upsert(Self::record())
            .content(profile)
            .await?;
        saved.ok_or_else(|| RepoError::Database("Failed to save profile".to_string()))
    }
}
