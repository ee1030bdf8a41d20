//! The estimation pipeline.

use std::sync::Arc;
use std::time::Duration;

use estimate_core::{
    CalculationRequest, CalculationResult, EstimationError, EstimationSource, HistoryRecord,
    IdentityProvider, NewHistoryRecord, PersistenceError,
};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::gateway::HistoryGateway;

/// Tunables for the pipeline.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Upper bound on a single estimation source call.
    pub estimate_timeout: Duration,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            estimate_timeout: Duration::from_secs(10),
        }
    }
}

/// An estimate together with the fate of its history write.
#[derive(Debug, Clone)]
pub struct CalculationOutcome {
    /// The estimate. Present whether or not saving succeeded.
    pub result: CalculationResult,
    /// The stored record, or why it was not stored.
    pub saved: Result<HistoryRecord, PersistenceError>,
}

impl CalculationOutcome {
    /// Whether the calculation made it into history.
    pub fn is_saved(&self) -> bool {
        self.saved.is_ok()
    }
}

/// Validates requests, dispatches them to an estimation source, and
/// records results.
///
/// All collaborators are injected; the pipeline holds no mutable state, so
/// concurrent calls on one instance are independent.
#[derive(Clone)]
pub struct EstimationPipeline {
    source: Arc<dyn EstimationSource>,
    gateway: HistoryGateway,
    identity: Arc<dyn IdentityProvider>,
    settings: PipelineSettings,
}

impl EstimationPipeline {
    /// Create a pipeline with default settings.
    pub fn new(
        source: Arc<dyn EstimationSource>,
        gateway: HistoryGateway,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self::with_settings(source, gateway, identity, PipelineSettings::default())
    }

    /// Create a pipeline with custom settings.
    pub fn with_settings(
        source: Arc<dyn EstimationSource>,
        gateway: HistoryGateway,
        identity: Arc<dyn IdentityProvider>,
        settings: PipelineSettings,
    ) -> Self {
        Self {
            source,
            gateway,
            identity,
            settings,
        }
    }

    /// The history gateway this pipeline writes through.
    pub fn gateway(&self) -> &HistoryGateway {
        &self.gateway
    }

    /// Estimate a request.
    ///
    /// Validation failures are returned before the source is called. A
    /// source that errors, times out, or returns figures that break the
    /// result invariants yields [`EstimationError::EstimationUnavailable`].
    pub async fn estimate(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationResult, EstimationError> {
        request.validate()?;

        let kind = request.kind();
        debug!(kind = %kind, source = self.source.name(), "Dispatching estimate");

        let dispatch = async {
            match request {
                CalculationRequest::Solar(req) => {
                    self.source.solar(req).await.map(CalculationResult::Solar)
                }
                CalculationRequest::Wind(req) => {
                    self.source.wind(req).await.map(CalculationResult::Wind)
                }
                CalculationRequest::Efficiency(req) => {
                    self.source.efficiency(req).await.map(CalculationResult::Efficiency)
                }
            }
        };

        let result = match timeout(self.settings.estimate_timeout, dispatch).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    kind = %kind,
                    timeout_ms = self.settings.estimate_timeout.as_millis() as u64,
                    "Estimation source timed out"
                );
                return Err(EstimationError::EstimationUnavailable(format!(
                    "{} timed out after {:?}",
                    self.source.name(),
                    self.settings.estimate_timeout
                )));
            }
        };

        if let Some(field) = result.invalid_field() {
            warn!(kind = %kind, field, "Estimation source returned an invalid result");
            return Err(EstimationError::EstimationUnavailable(format!(
                "{} returned an invalid {}",
                self.source.name(),
                field
            )));
        }

        Ok(result)
    }

    /// Save a request and its result as a history record owned by the
    /// current identity.
    ///
    /// The kind comes from the request itself. The write runs on its own
    /// task, so dropping this future does not abort a write already handed
    /// to the gateway. Failures come back as values and leave `result`
    /// untouched.
    pub async fn record_calculation(
        &self,
        request: &CalculationRequest,
        result: &CalculationResult,
    ) -> Result<HistoryRecord, PersistenceError> {
        let record = NewHistoryRecord::new(
            self.identity.current_user(),
            request.clone(),
            result.clone(),
        );

        let gateway = self.gateway.clone();
        let write = tokio::spawn(async move { gateway.insert(record).await });

        match write.await {
            Ok(saved) => saved,
            Err(err) => Err(PersistenceError::StoreUnavailable(format!(
                "history write did not complete: {}",
                err
            ))),
        }
    }

    /// Estimate a request, then record it.
    ///
    /// Fails only if estimation fails. A failed save is reported in the
    /// outcome alongside the estimate.
    pub async fn calculate_and_record(
        &self,
        request: &CalculationRequest,
    ) -> Result<CalculationOutcome, EstimationError> {
        let result = self.estimate(request).await?;
        let saved = self.record_calculation(request, &result).await;

        match &saved {
            Ok(record) => info!(id = %record.id, kind = %record.calculation_type, "Calculation complete"),
            Err(err) => warn!(kind = %request.kind(), error = %err, "Calculation complete, history not saved"),
        }

        Ok(CalculationOutcome { result, saved })
    }

    /// History of the current identity, newest first.
    pub async fn history(&self) -> Result<Vec<HistoryRecord>, PersistenceError> {
        self.gateway.list_for_current_user().await
    }
}
