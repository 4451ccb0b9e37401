//! Movie catalogue where actors are shared records.
//!
//! Movies are owned by the [`Catalogue`]; each movie holds shared handles to
//! its actors, and an actor appearing in several movies is one record. New
//! actors go through [`ActorGraph::resolve_actor`] (directly or via
//! [`Catalogue::attach_actor`]) so that a name always maps to one record.

pub mod actor_graph;
pub mod catalogue;
pub mod config;
pub mod document;
pub mod error;
pub mod movie;
pub mod records;

pub use actor_graph::*;
pub use catalogue::*;
pub use config::*;
pub use document::*;
pub use error::*;
pub use movie::*;
pub use records::*;
