use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use shared_database::ClinicStore;
use shared_models::clinic::{Provider, Service};

#[derive(Debug)]
pub enum CatalogLoad {
    Found {
        service: Service,
        providers: Vec<Provider>,
    },
    ServiceNotFound,
}

/// Loads a service together with the providers who offer it.
pub struct ProviderCatalog {
    store: Arc<dyn ClinicStore>,
}

impl ProviderCatalog {
    pub fn new(store: Arc<dyn ClinicStore>) -> Self {
        Self { store }
    }

    /// Both reads are issued together; the first failure fails the load.
    pub async fn load(&self, service_id: &str) -> Result<CatalogLoad> {
        debug!("Loading service {} and its providers", service_id);

        let (service, providers) = tokio::try_join!(
            self.store.get_service(service_id),
            self.store.get_providers_by_service(service_id),
        )?;

        let Some(service) = service else {
            return Ok(CatalogLoad::ServiceNotFound);
        };
        service.validate()?;

        let providers = providers
            .into_iter()
            .filter(|provider| match provider.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!("Skipping provider {}: {}", provider.id, e);
                    false
                }
            })
            .collect();

        Ok(CatalogLoad::Found { service, providers })
    }
}
