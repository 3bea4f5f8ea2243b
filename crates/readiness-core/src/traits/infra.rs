use crate::errors::CollectorResult;
use crate::models::InfraContext;

/// Builds the read-only infra lookup tables for one compartment.
pub trait IInfraCollector: Send + Sync {
    fn build_context(&self, compartment_id: &str) -> CollectorResult<InfraContext>;
}
