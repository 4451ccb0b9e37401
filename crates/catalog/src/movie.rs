use foundation::{Shared, SharedList};

use crate::records::{Actor, Item};

pub type ActorList = SharedList<Actor>;

/// A movie and the actors appearing in it.
///
/// Cloning a movie copies its attributes and shares its cast: the clone's
/// actor list holds the same actor records.
#[derive(Debug, Clone, Default)]
pub struct Movie {
    pub item: Item,
    pub director: String,
    /// Worldwide gross, in millions of dollars.
    pub revenue: u32,
    actors: ActorList,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        year: i32,
        director: impl Into<String>,
        revenue: u32,
    ) -> Self {
        Self::with_actors(title, year, director, revenue, ActorList::new())
    }

    pub fn with_actors(
        title: impl Into<String>,
        year: i32,
        director: impl Into<String>,
        revenue: u32,
        actors: ActorList,
    ) -> Self {
        Self {
            item: Item::new(title, year),
            director: director.into(),
            revenue,
            actors,
        }
    }

    pub fn title(&self) -> &str {
        self.item.title()
    }

    pub fn year(&self) -> i32 {
        self.item.year()
    }

    pub fn actors(&self) -> &ActorList {
        &self.actors
    }

    /// Direct access to the cast.
    ///
    /// Handles appended here bypass name deduplication; go through
    /// `ActorGraph::resolve_actor` or `Catalogue::attach_actor` first.
    pub fn actors_mut(&mut self) -> &mut ActorList {
        &mut self.actors
    }

    pub fn set_actors(&mut self, actors: ActorList) {
        self.actors = actors;
    }

    pub fn has_actor(&self, name: &str) -> bool {
        self.actor(name).is_some()
    }

    pub fn actor(&self, name: &str) -> Option<&Shared<Actor>> {
        self.actors.iter().find(|a| a.borrow().name == name)
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} ({}), {}, ${}M",
            self.item.title, self.item.year, self.director, self.revenue
        )?;
        for actor in &self.actors {
            writeln!(f, "  {}", actor.borrow())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Movie;
    use crate::records::{Actor, Sex};
    use foundation::Shared;

    #[test]
    fn clone_shares_cast() {
        let mut heat = Movie::new("Heat", 1995, "Michael Mann", 187);
        heat.actors_mut()
            .append(Shared::new(Actor::new("Al Pacino", 1940, Sex::Male)));

        let copy = heat.clone();
        let a = heat.actors().at(0).expect("in bounds");
        let b = copy.actors().at(0).expect("in bounds");
        assert!(Shared::ptr_eq(a, b));

        b.borrow_mut().birth_year = 1939;
        assert_eq!(a.borrow().birth_year, 1939);
    }

    #[test]
    fn display_lists_cast() {
        let mut heat = Movie::new("Heat", 1995, "Michael Mann", 187);
        heat.actors_mut()
            .append(Shared::new(Actor::new("Al Pacino", 1940, Sex::Male)));

        let text = heat.to_string();
        assert_eq!(text, "Heat (1995), Michael Mann, $187M\n  Al Pacino, 1940 M\n");
        assert!(heat.has_actor("Al Pacino"));
        assert!(!heat.has_actor("Robert De Niro"));
    }
}
