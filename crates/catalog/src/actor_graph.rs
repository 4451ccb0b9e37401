//! Actor identity across a list of movies.
//!
//! Actors are not kept in a separate identity map: a name is looked up by
//! scanning every movie's cast, in list order. Each lookup costs
//! O(movies × actors per movie), which is fine at catalogue scale.

use std::collections::{BTreeMap, HashSet};

use foundation::{RecordList, RecordPtr, Shared};

use crate::movie::Movie;
use crate::records::Actor;

pub type MovieList = RecordList<Box<Movie>>;
pub type MovieIndex<'a> = RecordList<&'a Movie>;

pub trait ActorGraph {
    /// First actor named `name`, scanning movies and casts in order.
    fn find_actor(&self, name: &str) -> Option<Shared<Actor>>;

    fn find_movie(&self, pred: impl FnMut(&Movie) -> bool) -> Option<&Movie>;

    /// Existing record for `actor.name` if there is one, otherwise a new
    /// shared record built from `actor`.
    ///
    /// Every actor attached to a movie must come from here, or two records
    /// with the same name can end up in the catalogue.
    fn resolve_actor(&self, actor: Actor) -> Shared<Actor> {
        match self.find_actor(&actor.name) {
            Some(existing) => {
                tracing::debug!(name = %actor.name, "reusing shared actor record");
                existing
            }
            None => Shared::new(actor),
        }
    }

    fn distinct_actor_count(&self) -> usize;

    /// Names carried by more than one distinct record, with how many records
    /// share each name. Empty when actor identity holds.
    fn identity_conflicts(&self) -> BTreeMap<String, usize>;
}

impl<P> ActorGraph for RecordList<P>
where
    P: RecordPtr<Target = Movie>,
{
    fn find_actor(&self, name: &str) -> Option<Shared<Actor>> {
        self.iter()
            .flat_map(|movie| movie.actors().iter())
            .find(|actor| actor.borrow().name == name)
            .cloned()
    }

    fn find_movie(&self, pred: impl FnMut(&Movie) -> bool) -> Option<&Movie> {
        self.find(pred)
    }

    fn distinct_actor_count(&self) -> usize {
        self.iter()
            .flat_map(|movie| movie.actors().iter())
            .map(Shared::as_ptr)
            .collect::<HashSet<_>>()
            .len()
    }

    fn identity_conflicts(&self) -> BTreeMap<String, usize> {
        let mut records: BTreeMap<String, HashSet<*const Actor>> = BTreeMap::new();
        for actor in self.iter().flat_map(|movie| movie.actors().iter()) {
            records
                .entry(actor.borrow().name.clone())
                .or_default()
                .insert(Shared::as_ptr(actor));
        }
        records
            .into_iter()
            .filter(|(_, ptrs)| ptrs.len() > 1)
            .map(|(name, ptrs)| (name, ptrs.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{ActorGraph, MovieIndex, MovieList};
    use crate::movie::Movie;
    use crate::records::{Actor, Sex};
    use foundation::Shared;

    fn alice() -> Actor {
        Actor::new("Alice", 1980, Sex::Female)
    }

    #[test]
    fn empty_catalogue_has_no_actors() {
        let movies = MovieList::new();
        assert!(movies.find_actor("Alice").is_none());
        assert_eq!(movies.distinct_actor_count(), 0);
    }

    #[test]
    fn resolve_reuses_the_existing_record() {
        let mut movies = MovieList::new();

        let mut first = Movie::new("First", 2001, "Someone", 10);
        let handle = movies.resolve_actor(alice());
        first.actors_mut().append(handle.clone());
        movies.append(Box::new(first));

        let found = movies.find_actor("Alice").expect("listed");
        assert!(Shared::ptr_eq(&found, &handle));

        let mut second = Movie::new("Second", 2005, "Someone Else", 20);
        second
            .actors_mut()
            .append(movies.resolve_actor(Actor::new("Alice", 1900, Sex::Unknown)));
        movies.append(Box::new(second));

        let a = movies.at(0).expect("in bounds").actors().at(0).expect("in bounds");
        let b = movies.at(1).expect("in bounds").actors().at(0).expect("in bounds");
        assert!(Shared::ptr_eq(a, b));
        assert_eq!(b.borrow().birth_year, 1980);

        a.borrow_mut().birth_year = 1981;
        assert_eq!(b.borrow().birth_year, 1981);

        assert_eq!(movies.distinct_actor_count(), 1);
        assert!(movies.identity_conflicts().is_empty());
    }

    #[test]
    fn bypassing_the_protocol_is_detected() {
        let mut movies = MovieList::new();
        for title in ["One", "Two"] {
            let mut movie = Movie::new(title, 2000, "Director", 1);
            movie.actors_mut().append(Shared::new(alice()));
            movies.append(Box::new(movie));
        }

        assert_eq!(movies.distinct_actor_count(), 2);
        let conflicts = movies.identity_conflicts();
        assert_eq!(conflicts.get("Alice"), Some(&2));
    }

    #[test]
    fn borrowed_index_answers_the_same_lookups() {
        let mut movies = MovieList::new();
        let mut heat = Movie::new("Heat", 1995, "Michael Mann", 187);
        heat.actors_mut()
            .append(Shared::new(Actor::new("Al Pacino", 1940, Sex::Male)));
        movies.append(Box::new(heat));
        movies.append(Box::new(Movie::new("Ronin", 1998, "John Frankenheimer", 70)));

        let index: MovieIndex<'_> = movies.borrow_view();
        let from_index = index.find_actor("Al Pacino").expect("listed");
        let from_owner = movies.find_actor("Al Pacino").expect("listed");
        assert!(Shared::ptr_eq(&from_index, &from_owner));

        let ronin = index.find_movie(|m| m.year() > 1997).expect("match");
        assert_eq!(ronin.title(), "Ronin");
        assert!(index.find_movie(|m| m.revenue > 1000).is_none());
    }
}
