pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::aggregator::Aggregator;
use crate::application::controller::{DashboardState, RunOutcome, SelectionController};
use crate::application::view_model::{assemble, ViewModel};
use crate::domain::entities::health::HealthStatus;
use crate::domain::entities::selection::Selection;
use crate::domain::error::DomainError;
use crate::domain::ports::remittance_api::RemittanceApi;
use crate::domain::values::amount::TransferAmount;
use crate::domain::values::corridor::{Corridor, CorridorInfo};
use crate::infrastructure::http::client::HttpRemittanceApi;
use crate::infrastructure::http::config::ClientConfig;
use std::sync::Arc;
use tokio::sync::watch;

/// Dashboard backend: wires the HTTP client, aggregator and selection
/// controller together.
pub struct RemitLens {
    api: Arc<dyn RemittanceApi>,
    aggregator: Arc<Aggregator>,
    controller: Arc<SelectionController>,
}

impl RemitLens {
    /// Build against the service configured in the environment.
    pub fn new() -> Result<Self, DomainError> {
        Self::with_config(ClientConfig::from_env())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, DomainError> {
        let api: Arc<dyn RemittanceApi> = Arc::new(HttpRemittanceApi::new(config)?);
        Ok(Self::with_api(api))
    }

    pub fn with_api(api: Arc<dyn RemittanceApi>) -> Self {
        let aggregator = Arc::new(Aggregator::new(api.clone()));
        let controller = Arc::new(SelectionController::new(aggregator.clone()));
        Self {
            api,
            aggregator,
            controller,
        }
    }

    pub fn corridors() -> Vec<CorridorInfo> {
        Corridor::ALL.into_iter().map(CorridorInfo::from).collect()
    }

    /// One-off aggregation outside the controller. Carries token 0.
    pub async fn snapshot(&self, selection: Selection) -> ViewModel {
        let bundle = self.aggregator.run(&selection).await;
        assemble(0, selection, bundle)
    }

    pub async fn health(&self) -> Result<HealthStatus, DomainError> {
        self.api
            .health()
            .await
            .map_err(|e| DomainError::Http(e.to_string()))
    }

    pub fn controller(&self) -> Arc<SelectionController> {
        self.controller.clone()
    }

    // Delegating methods
    pub async fn select(&self, selection: Selection) -> RunOutcome {
        self.controller.select(selection).await
    }

    pub async fn set_corridor(&self, corridor: Corridor) -> RunOutcome {
        self.controller.set_corridor(corridor).await
    }

    pub async fn set_amount(&self, amount: Option<TransferAmount>) -> RunOutcome {
        self.controller.set_amount(amount).await
    }

    pub async fn refresh(&self) -> RunOutcome {
        self.controller.refresh().await
    }

    pub fn state(&self) -> DashboardState {
        self.controller.state()
    }

    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.controller.subscribe()
    }
}
