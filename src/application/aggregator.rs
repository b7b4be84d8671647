use crate::application::sources;
use crate::domain::entities::bundle::RawBundle;
use crate::domain::entities::selection::Selection;
use crate::domain::ports::remittance_api::RemittanceApi;
use std::sync::Arc;
use std::time::Instant;

/// Fans a selection out to every source and waits for all of them to
/// settle. A slow or failing source delays the bundle but never empties
/// another slot.
pub struct Aggregator {
    api: Arc<dyn RemittanceApi>,
}

impl Aggregator {
    pub fn new(api: Arc<dyn RemittanceApi>) -> Self {
        Self { api }
    }

    pub async fn run(&self, selection: &Selection) -> RawBundle {
        let corridor = selection.corridor;
        let amount = selection.request_amount();
        let api = self.api.as_ref();
        let started = Instant::now();

        let (cost_analysis, insight, p2p, stablecoin, card_premiums) = tokio::join!(
            sources::fetch_cost_analysis(api, corridor),
            sources::fetch_insight(api, corridor),
            sources::fetch_p2p(api, corridor, amount),
            sources::fetch_stablecoin(api, corridor),
            sources::fetch_card_premiums(api, corridor, amount),
        );

        let bundle = RawBundle {
            cost_analysis,
            insight,
            p2p,
            stablecoin,
            card_premiums,
        };

        tracing::info!(
            corridor = %corridor,
            amount = %amount,
            absent = bundle.absent_sources().len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "aggregation settled"
        );
        bundle
    }
}
