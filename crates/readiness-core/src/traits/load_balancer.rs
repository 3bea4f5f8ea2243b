use crate::api::{HealthResponse, LoadBalancerResource, LoadBalancerSummary};
use crate::errors::CollectorResult;

/// Load balancer inventory and health.
pub trait ILoadBalancerCollector: Send + Sync {
    fn list_load_balancers(&self, compartment_id: &str) -> CollectorResult<Vec<LoadBalancerSummary>>;

    fn get_load_balancer(&self, load_balancer_id: &str) -> CollectorResult<LoadBalancerResource>;

    fn get_backend_set_health(
        &self,
        load_balancer_id: &str,
        backend_set_name: &str,
    ) -> CollectorResult<HealthResponse>;

    fn get_backend_health(
        &self,
        load_balancer_id: &str,
        backend_set_name: &str,
        backend_name: &str,
    ) -> CollectorResult<HealthResponse>;
}
