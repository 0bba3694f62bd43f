pub mod aggregate;
pub mod draft;

pub use aggregate::{Product, ProductCondition, ProductPayload};
pub use draft::{ProductDraft, SubmitGate};
