//! Filesystem operations: preparing the destination, classifying entries,
//! picking collision-free names and copying with metadata.

mod classify;
mod copy;
mod duplicate;
pub mod helpers;
mod metadata;
mod prepare;

pub use classify::{Classifier, CopyDecision, ScanEntry};
pub use copy::copy_with_metadata;
pub(crate) use duplicate::resolve_destination_within;
pub use duplicate::{
    is_dockerfile, resolve_destination, DOCKERFILE_TEXT_NAME, MAX_COLLISION_ATTEMPTS,
};
pub use metadata::preserve_metadata;
pub use prepare::prepare_destination;
