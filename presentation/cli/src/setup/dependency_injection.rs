use std::sync::Arc;

use anyhow::Context;

use backend::catalog::repository::CatalogRepositoryRest;
use backend::client::BackendClient;
use logger::{TracingLogger, TracingNotifier};
use persistence::cart::repository::CartRepositoryLocal;
use persistence::local_storage::LocalStorage;

use business::application::cart::manager::CartManager;
use business::application::catalog::get_by_id::GetProductByIdUseCaseImpl;
use business::application::catalog::get_categories::GetCategoriesUseCaseImpl;
use business::application::catalog::get_products::GetProductsUseCaseImpl;
use business::application::pull_refresh::handler::PullToRefreshHandler;
use business::domain::cart::repository::CartStore;
use business::domain::catalog::use_cases::get_by_id::GetProductByIdUseCase;
use business::domain::catalog::use_cases::get_categories::GetCategoriesUseCase;
use business::domain::catalog::use_cases::get_products::GetProductsUseCase;
use business::domain::logger::Logger;
use business::domain::notifier::Notifier;
use business::domain::pull_refresh::model::PullConfig;

use crate::config::app_config::AppConfig;
use crate::config::backend_config::BackendConfig;

pub struct CatalogUseCases {
    pub get_products: Arc<dyn GetProductsUseCase>,
    pub get_product_by_id: Arc<dyn GetProductByIdUseCase>,
    pub get_categories: Arc<dyn GetCategoriesUseCase>,
}

pub struct DependencyContainer {
    logger: Arc<dyn Logger>,
    notifier: Arc<dyn Notifier>,
    cart_store: Arc<dyn CartStore>,
    catalog: Option<CatalogUseCases>,
    pull_config: PullConfig,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);

        // Infrastructure adapters
        let storage = LocalStorage::open(&config.storage.data_dir).with_context(|| {
            format!(
                "cannot open local storage at {}",
                config.storage.data_dir.display()
            )
        })?;
        let cart_store: Arc<dyn CartStore> = Arc::new(CartRepositoryLocal::new(storage));

        let catalog = config
            .backend
            .as_ref()
            .map(|backend| Self::catalog_use_cases(backend, &logger));

        Ok(Self {
            logger,
            notifier,
            cart_store,
            catalog,
            pull_config: config.gesture,
        })
    }

    fn catalog_use_cases(config: &BackendConfig, logger: &Arc<dyn Logger>) -> CatalogUseCases {
        let client = BackendClient::new(config.url.clone(), config.api_key.clone());
        let repository = Arc::new(CatalogRepositoryRest::new(client));

        CatalogUseCases {
            get_products: Arc::new(GetProductsUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            get_product_by_id: Arc::new(GetProductByIdUseCaseImpl {
                repository: repository.clone(),
                logger: logger.clone(),
            }),
            get_categories: Arc::new(GetCategoriesUseCaseImpl {
                repository,
                logger: logger.clone(),
            }),
        }
    }

    /// Catalog use cases, or an error explaining how to configure them.
    pub fn catalog(&self) -> anyhow::Result<&CatalogUseCases> {
        self.catalog
            .as_ref()
            .context("no backend configured: set BACKEND_URL and BACKEND_ANON_KEY")
    }

    /// The single cart owner for this process.
    pub fn cart_manager(&self) -> CartManager {
        CartManager::load(
            self.cart_store.clone(),
            self.notifier.clone(),
            self.logger.clone(),
        )
    }

    pub fn pull_handler(&self) -> PullToRefreshHandler {
        PullToRefreshHandler::new(self.pull_config, self.logger.clone())
    }
}
