pub mod capabilities;
pub mod render;
pub mod validate;

pub use capabilities::{Capability, CapabilitySet, StoreInspector, detect, list_supported_filters};
pub use validate::{ValidatedTree, ValidationError, validate};
