//! Capability selector: which processes a depth tier switches on.
//!
//! ```text
//! registry.processes()  (declared layer order)
//!        │
//!        ├─ filter: tier.includes(process.tier)
//!        │
//!        ▼
//! Selection { tier, active }   foundation → cognitive → relational → generative
//! ```
//!
//! Selection reads the registry through `&` only; the same registry and tier
//! always give the same ordered list.

use crate::registry::{Layer, ProcessDef, Registry, Tier};

/// The processes active at one depth, in render order.
#[derive(Debug, Clone)]
pub struct Selection<'r> {
    pub tier: Tier,
    pub active: Vec<&'r ProcessDef>,
    /// Every process, active or not, in render order.
    all: Vec<&'r ProcessDef>,
}

/// Select the processes a tier includes.
///
/// Output is grouped by [`Layer::ALL`] order and keeps declaration order
/// within a layer, independently of how the source data is arranged.
pub fn select(registry: &Registry, tier: Tier) -> Selection<'_> {
    let all: Vec<&ProcessDef> = Layer::ALL
        .iter()
        .flat_map(|layer| registry.processes().iter().filter(move |p| p.layer == *layer))
        .collect();
    let active: Vec<&ProcessDef> = all
        .iter()
        .copied()
        .filter(|p| tier.includes(p.tier))
        .collect();
    log::debug!(
        "Selected {} of {} processes at depth '{}'",
        active.len(),
        all.len(),
        tier
    );
    Selection { tier, active, all }
}

impl<'r> Selection<'r> {
    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.iter().any(|p| p.id == id)
    }

    /// Active processes paired with their layer, skipping empty layers.
    pub fn grouped(&self) -> Vec<(Layer, Vec<&'r ProcessDef>)> {
        Layer::ALL
            .iter()
            .map(|layer| {
                let members: Vec<&ProcessDef> = self
                    .active
                    .iter()
                    .copied()
                    .filter(|p| p.layer == *layer)
                    .collect();
                (*layer, members)
            })
            .filter(|(_, members)| !members.is_empty())
            .collect()
    }

    /// Every process with its activity flag, in render order.
    pub fn catalog(&self) -> Vec<(&'r ProcessDef, bool)> {
        self.all
            .iter()
            .map(|p| (*p, self.tier.includes(p.tier)))
            .collect()
    }

    /// Processes that a deeper tier would switch on.
    pub fn deferred(&self) -> Vec<&'r ProcessDef> {
        self.all
            .iter()
            .copied()
            .filter(|p| !self.tier.includes(p.tier))
            .collect()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> &'static Registry {
        Registry::builtin().unwrap()
    }

    fn ids(selection: &Selection<'_>) -> Vec<String> {
        selection.active.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_counts_per_tier() {
        let reg = registry();
        assert_eq!(select(reg, Tier::Essential).len(), 8);
        assert_eq!(select(reg, Tier::Full).len(), 12);
        assert_eq!(select(reg, Tier::Maximum).len(), 16);
    }

    #[test]
    fn test_tiers_nest_strictly() {
        let reg = registry();
        let essential = ids(&select(reg, Tier::Essential));
        let full = ids(&select(reg, Tier::Full));
        let maximum = ids(&select(reg, Tier::Maximum));

        assert!(essential.iter().all(|id| full.contains(id)));
        assert!(full.iter().all(|id| maximum.contains(id)));
        assert!(full.len() > essential.len());
        assert!(maximum.len() > full.len());
    }

    #[test]
    fn test_layer_order_preserved() {
        let sel = select(registry(), Tier::Maximum);
        let layers: Vec<Layer> = sel.active.iter().map(|p| p.layer).collect();
        let mut sorted = layers.clone();
        sorted.sort();
        assert_eq!(layers, sorted);
        assert_eq!(sel.active[0].id, "interoception");
    }

    #[test]
    fn test_within_layer_declaration_order() {
        let reg = registry();
        let sel = select(reg, Tier::Maximum);
        let declared: Vec<&str> = reg
            .processes()
            .iter()
            .filter(|p| p.layer == Layer::Cognitive)
            .map(|p| p.id.as_str())
            .collect();
        let selected: Vec<&str> = sel
            .active
            .iter()
            .filter(|p| p.layer == Layer::Cognitive)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(declared, selected);
    }

    #[test]
    fn test_grouped_covers_every_layer() {
        let sel = select(registry(), Tier::Essential);
        let grouped = sel.grouped();
        assert_eq!(grouped.len(), 4);
        assert_eq!(grouped.iter().map(|(_, m)| m.len()).sum::<usize>(), 8);
    }

    #[test]
    fn test_catalog_and_deferred_partition() {
        let sel = select(registry(), Tier::Essential);
        let catalog = sel.catalog();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.iter().filter(|(_, on)| *on).count(), 8);
        assert_eq!(sel.deferred().len(), 8);
        assert!(sel.is_active("salience"));
        assert!(!sel.is_active("play"));
    }

    #[test]
    fn test_selection_is_repeatable() {
        let reg = registry();
        assert_eq!(ids(&select(reg, Tier::Full)), ids(&select(reg, Tier::Full)));
    }
}
