pub mod error;
pub mod handles;
pub mod record_list;
pub mod shared_list;
mod slots;

// Foundation crate: small, well-tested primitives only.
pub use error::*;
pub use handles::*;
pub use record_list::*;
pub use shared_list::*;
