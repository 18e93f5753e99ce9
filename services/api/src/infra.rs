use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use freight_ai::error::AppError;
use freight_ai::workflows::dispatch::DispatchService;
use freight_ai::workflows::leads::LeadDiscoveryService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the two stateless workflow services with production defaults.
/// Weight-table validation happens here, so a bad configuration stops the
/// process before it serves traffic.
pub(crate) fn build_services() -> Result<(Arc<DispatchService>, Arc<LeadDiscoveryService>), AppError>
{
    let dispatch = Arc::new(DispatchService::standard()?);
    let leads = Arc::new(LeadDiscoveryService::standard());
    Ok((dispatch, leads))
}
