use serde::{Deserialize, Serialize};

use crate::movie::ActorList;

/// How each movie's actor list is allocated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActorListPolicy {
    /// Lists double their capacity when full.
    Growable { initial_capacity: usize },
    /// Lists are sized to the cast known when the movie is built and never
    /// grow; attaching past that panics.
    Fixed,
}

impl Default for ActorListPolicy {
    fn default() -> Self {
        ActorListPolicy::Growable {
            initial_capacity: 0,
        }
    }
}

impl ActorListPolicy {
    /// Empty actor list for a movie expected to hold `cast_size` actors.
    pub fn new_list(self, cast_size: usize) -> ActorList {
        match self {
            ActorListPolicy::Growable { initial_capacity } => {
                ActorList::with_capacity(initial_capacity)
            }
            ActorListPolicy::Fixed => ActorList::fixed(cast_size),
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueConfig {
    #[serde(default)]
    pub actor_lists: ActorListPolicy,
}

impl CatalogueConfig {
    pub fn fixed_actor_lists() -> Self {
        Self {
            actor_lists: ActorListPolicy::Fixed,
        }
    }
}
