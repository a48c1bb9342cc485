use model::FilterKind;
use std::collections::BTreeMap;
use tracing::debug;

/// One filter kind of a store: the column it targets and whether the
/// store can currently serve it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capability {
    pub kind: FilterKind,
    pub column: &'static str,
    pub available: bool,
}

/// Answers the store-shape questions capability detection asks.
///
/// The inspector is the only point where the store is touched; the
/// resulting [`CapabilitySet`] is read-only afterwards and can be shared
/// across threads for the lifetime of the store handle.
pub trait StoreInspector {
    /// True when the store carries MS/MS spectra alongside compounds.
    fn has_msms_spectra(&self) -> bool;
}

/// The capability table of a concrete store, keyed by kind.
#[derive(Debug, Clone, Default)]
pub struct CapabilitySet {
    capabilities: BTreeMap<FilterKind, Capability>,
}

impl CapabilitySet {
    /// True when the store knows the kind and can currently serve it.
    pub fn supports(&self, kind: FilterKind) -> bool {
        self.capabilities.get(&kind).is_some_and(|c| c.available)
    }

    pub fn capability(&self, kind: FilterKind) -> Option<&Capability> {
        self.capabilities.get(&kind)
    }

    /// Column the store serves this kind from, if registered.
    pub fn column(&self, kind: FilterKind) -> Option<&'static str> {
        self.capabilities.get(&kind).map(|c| c.column)
    }

    pub fn insert(&mut self, capability: Capability) {
        self.capabilities.insert(capability.kind, capability);
    }

    /// Marks a kind available, registering it if the store grew the
    /// optional dataset after the set was built.
    pub fn enable(&mut self, kind: FilterKind) {
        self.insert(Capability {
            kind,
            column: kind.column(),
            available: true,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.capabilities.values()
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

/// Probes a store once and builds its capability table.
///
/// Every kind is registered; the ones gated on MS/MS data are marked
/// unavailable for stores that only hold compound annotations.
pub fn detect(inspector: &dyn StoreInspector) -> CapabilitySet {
    let mut capabilities = CapabilitySet::default();
    let has_msms = inspector.has_msms_spectra();

    for kind in FilterKind::ALL {
        capabilities.insert(Capability {
            kind,
            column: kind.column(),
            available: !kind.msms_gated() || has_msms,
        });
    }

    let available = capabilities.iter().filter(|c| c.available).count();
    debug!(available, has_msms, "detected store filter capabilities");
    capabilities
}

/// The full capability table of a store, sorted by field name for stable
/// self-describing listings.
pub fn list_supported_filters(capabilities: &CapabilitySet) -> Vec<Capability> {
    let mut listed: Vec<Capability> = capabilities.iter().copied().collect();
    listed.sort_by_key(|c| c.kind.name());
    listed
}
