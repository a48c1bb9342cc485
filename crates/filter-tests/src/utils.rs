use translator::{CapabilitySet, StoreInspector, detect};

/// In-memory stand-in for an annotation store handle, shaped only by
/// whether it carries MS/MS spectra.
pub struct StubStore {
    msms: bool,
}

impl StubStore {
    pub fn compounds_only() -> Self {
        StubStore { msms: false }
    }

    pub fn with_spectra() -> Self {
        StubStore { msms: true }
    }
}

impl StoreInspector for StubStore {
    fn has_msms_spectra(&self) -> bool {
        self.msms
    }
}

pub fn compound_caps() -> CapabilitySet {
    detect(&StubStore::compounds_only())
}

pub fn spectra_caps() -> CapabilitySet {
    detect(&StubStore::with_spectra())
}

/// Parses, validates and renders an expression against a capability set.
pub fn translate(expression: &str, capabilities: &CapabilitySet) -> String {
    let tree = afql_syntax::parse(expression).expect("parse expression");
    translator::validate(&tree, capabilities)
        .expect("validate expression")
        .to_sql()
}
