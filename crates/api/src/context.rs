//! Application context (dependency injection)

use std::sync::Arc;

use inficard_core::card::ports::{CardRecordStore, ProfileStore, QrImageStore, QrRenderer};
use inficard_core::CardService;
use inficard_domain::{Config, Result};
use inficard_infra::qr::QrPngRenderer;
use inficard_infra::supabase::{SupabaseRestClient, SupabaseStorageClient};

/// Shared application state handed to every handler.
pub struct AppContext {
    /// Card workflows over the configured store adapters.
    pub cards: Arc<CardService>,
    /// Loaded application configuration.
    pub config: Config,
}

impl AppContext {
    /// Wire the production adapters into the card service.
    pub fn new(config: Config) -> Result<Self> {
        let rest = Arc::new(SupabaseRestClient::new(&config.supabase)?);
        let storage = Arc::new(SupabaseStorageClient::new(&config.supabase)?);
        let renderer = Arc::new(QrPngRenderer::new());

        let cards = Arc::new(CardService::new(
            rest.clone() as Arc<dyn ProfileStore>,
            storage as Arc<dyn QrImageStore>,
            rest as Arc<dyn CardRecordStore>,
            renderer as Arc<dyn QrRenderer>,
            config.server.public_origin.clone(),
        ));

        Ok(Self { cards, config })
    }

    /// Build a context around an existing service (used by tests to inject
    /// fake store adapters).
    pub fn with_service(cards: Arc<CardService>, config: Config) -> Self {
        Self { cards, config }
    }
}
