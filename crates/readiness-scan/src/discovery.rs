//! Compartment hierarchy discovery.
//!
//! Resolves the scan root, expands it flat or recursively, deduplicates by
//! id, and returns compartments sorted by case-insensitive name.

use std::collections::{HashMap, HashSet, VecDeque};

use readiness_core::errors::CollectorResult;
use readiness_core::models::Compartment;
use readiness_core::traits::IIdentityCollector;

/// Walks the compartment tree through an identity collector.
pub struct CompartmentDiscoverer<'a> {
    identity: &'a dyn IIdentityCollector,
}

impl<'a> CompartmentDiscoverer<'a> {
    pub fn new(identity: &'a dyn IIdentityCollector) -> Self {
        Self { identity }
    }

    /// Discover the compartments to scan.
    ///
    /// The result always contains the root. Any listing failure aborts
    /// discovery and is returned to the caller.
    pub fn discover(
        &self,
        tenancy_id: &str,
        root_compartment_id: Option<&str>,
        include_descendants: bool,
    ) -> CollectorResult<Vec<Compartment>> {
        let root = match root_compartment_id {
            Some(id) => self.identity.get_compartment(id)?,
            None => self.identity.get_tenancy(tenancy_id)?,
        };

        let mut found = vec![root.clone()];
        if !include_descendants {
            found.extend(self.identity.list_compartments(&root.id, false)?);
        } else if root.id == tenancy_id {
            found.extend(self.identity.list_compartments(&root.id, true)?);
        } else {
            found.extend(self.walk(&root.id)?);
        }

        tracing::debug!(root_id = %root.id, raw_count = found.len(), "compartment listing complete");
        Ok(dedupe_and_sort(found))
    }

    /// Breadth-first expansion of a sub-root, one direct-children listing per node.
    fn walk(&self, root_id: &str) -> CollectorResult<Vec<Compartment>> {
        let mut discovered = Vec::new();
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<String> = VecDeque::from([root_id.to_string()]);

        while let Some(parent_id) = queue.pop_front() {
            if !visited.insert(parent_id.clone()) {
                continue;
            }
            for child in self.identity.list_compartments(&parent_id, false)? {
                queue.push_back(child.id.clone());
                discovered.push(child);
            }
        }

        Ok(discovered)
    }
}

/// Keep the last entry per id, then order by lowercase name (id breaks ties).
pub fn dedupe_and_sort(compartments: Vec<Compartment>) -> Vec<Compartment> {
    let mut by_id: HashMap<String, Compartment> = HashMap::with_capacity(compartments.len());
    for compartment in compartments {
        by_id.insert(compartment.id.clone(), compartment);
    }

    let mut unique: Vec<Compartment> = by_id.into_values().collect();
    unique.sort_by(|a, b| {
        a.sort_key()
            .cmp(&b.sort_key())
            .then_with(|| a.id.cmp(&b.id))
    });
    unique
}
