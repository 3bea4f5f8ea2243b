use crate::errors::CollectorResult;
use crate::models::Compartment;

/// Compartment hierarchy lookups.
pub trait IIdentityCollector: Send + Sync {
    /// Resolve the tenancy itself as a compartment.
    fn get_tenancy(&self, tenancy_id: &str) -> CollectorResult<Compartment>;

    fn get_compartment(&self, compartment_id: &str) -> CollectorResult<Compartment>;

    /// All pages of active, accessible compartments under `parent_id`.
    /// With `subtree`, every descendant is returned; otherwise direct children only.
    fn list_compartments(&self, parent_id: &str, subtree: bool)
        -> CollectorResult<Vec<Compartment>>;
}
