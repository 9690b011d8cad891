use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::assistant::{AssistantService, HttpTextGenerator, ScriptedRecommender};
use crate::auth::JwtService;
use crate::core::Config;
use crate::db::repository::OperatorRepository;
use crate::db::DbService;
use crate::utils::AppResult;

/// Shared server state
///
/// Holds the shared handles every request needs. Cloning is shallow,
/// all members are either cheap clones or behind an Arc.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub jwt_service: Arc<JwtService>,
    pub assistant: Arc<AssistantService>,
}

impl ServerState {
    /// Open the database, apply the schema and seed the admin account
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| crate::utils::AppError::internal(format!("Work dir setup failed: {e}")))?;

        let db = DbService::new(&config.database_dir()).await?;

        OperatorRepository::new(db.db()).ensure_default_admin().await?;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let generator = HttpTextGenerator::new(
            config.text_api_url.clone(),
            config.text_api_key.clone(),
        );
        let assistant = Arc::new(AssistantService::new(
            Box::new(generator),
            Box::new(ScriptedRecommender::new()),
            config.text_max_tokens,
        ));

        Ok(Self {
            config: config.clone(),
            db,
            jwt_service,
            assistant,
        })
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.db()
    }

    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
