use foundation::{IndexOutOfBounds, Shared};

use crate::actor_graph::{ActorGraph, MovieList};
use crate::config::{ActorListPolicy, CatalogueConfig};
use crate::error::CatalogError;
use crate::movie::Movie;
use crate::records::Actor;

/// The movie collection. Owns every movie; actors are shared between movies
/// and there is exactly one actor record per name.
#[derive(Debug, Default)]
pub struct Catalogue {
    movies: MovieList,
    config: CatalogueConfig,
}

impl Catalogue {
    pub fn new(config: CatalogueConfig) -> Self {
        Self {
            movies: MovieList::new(),
            config,
        }
    }

    pub fn config(&self) -> &CatalogueConfig {
        &self.config
    }

    pub fn movies(&self) -> &MovieList {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movie(&self, index: usize) -> Result<&Movie, IndexOutOfBounds> {
        self.movies.at(index)
    }

    pub fn movie_mut(&mut self, index: usize) -> Result<&mut Movie, IndexOutOfBounds> {
        let len = self.movies.len();
        self.movies
            .get_mut(index)
            .ok_or(IndexOutOfBounds { index, len })
    }

    /// Appends `movie` as is and returns its index.
    ///
    /// The movie's current cast is trusted; use [`Catalogue::add_movie_with_cast`]
    /// when its actors still need deduplicating against the catalogue.
    pub fn add_movie(&mut self, movie: Movie) -> usize {
        self.movies.append(Box::new(movie));
        self.movies.len() - 1
    }

    /// Builds `movie`'s actor list from `cast`, reusing existing actor records
    /// by name, then appends the movie.
    ///
    /// The list is allocated per the configured [`crate::ActorListPolicy`],
    /// sized for the actors already on `movie` plus `cast`. An actor named
    /// twice in the same cast is attached once; a fixed list is then trimmed
    /// so it holds exactly the attached cast.
    pub fn add_movie_with_cast(
        &mut self,
        mut movie: Movie,
        cast: Vec<Actor>,
    ) -> Result<usize, CatalogError> {
        let mut actors = self
            .config
            .actor_lists
            .new_list(movie.actors().len() + cast.len());
        for existing in movie.actors() {
            actors.append(existing.clone());
        }
        movie.set_actors(actors);

        for actor in cast {
            validate_actor(&actor)?;
            if movie.has_actor(&actor.name) {
                tracing::warn!(
                    movie = %movie.title(),
                    name = %actor.name,
                    "actor listed twice in the same cast, keeping the first"
                );
                continue;
            }
            let handle = self.resolve(actor);
            movie.actors_mut().append(handle);
        }
        if self.config.actor_lists == ActorListPolicy::Fixed {
            let attached = movie.actors().len();
            movie.actors_mut().resize(attached);
        }

        tracing::debug!(
            title = %movie.title(),
            cast = movie.actors().len(),
            "adding movie"
        );
        Ok(self.add_movie(movie))
    }

    /// Attaches `actor` to the movie at `movie_index`, reusing the catalogue's
    /// record for that name when there is one.
    ///
    /// # Panics
    ///
    /// Panics if the movie's actor list has a fixed capacity and is full.
    pub fn attach_actor(
        &mut self,
        movie_index: usize,
        actor: Actor,
    ) -> Result<Shared<Actor>, CatalogError> {
        validate_actor(&actor)?;
        let title = self.movie(movie_index)?.title().to_string();
        let handle = self.resolve(actor);

        let movie = self.movie_mut(movie_index)?;
        if movie.actors().contains(&handle) {
            return Err(CatalogError::AlreadyInCast {
                movie: title,
                actor: handle.borrow().name.clone(),
            });
        }
        movie.actors_mut().append(handle.clone());
        Ok(handle)
    }

    /// Takes the movie at `record` out of the catalogue and hands it back.
    ///
    /// Its actors stay alive for as long as other movies (or the caller) hold
    /// them. Returns `None` if the movie is not in this catalogue.
    pub fn remove_movie(&mut self, record: *const Movie) -> Option<Box<Movie>> {
        self.movies.remove(record)
    }

    pub fn find_actor(&self, name: &str) -> Option<Shared<Actor>> {
        self.movies.find_actor(name)
    }

    pub fn find_movie(&self, pred: impl FnMut(&Movie) -> bool) -> Option<&Movie> {
        self.movies.find_movie(pred)
    }

    pub fn movies_with_actor(&self, name: &str) -> Vec<&Movie> {
        self.movies.iter().filter(|m| m.has_actor(name)).collect()
    }

    pub fn distinct_actor_count(&self) -> usize {
        self.movies.distinct_actor_count()
    }

    /// Destroys every movie. Actor records go away with their last movie.
    pub fn clear(&mut self) {
        tracing::debug!(movies = self.movies.len(), "destroying catalogue");
        self.movies.destroy();
    }

    fn resolve(&self, actor: Actor) -> Shared<Actor> {
        let handle = self.movies.resolve_actor(actor.clone());
        {
            let stored = handle.borrow();
            let kept: &Actor = &stored;
            if stored.birth_year != actor.birth_year || stored.sex != actor.sex {
                tracing::warn!(
                    name = %actor.name,
                    kept = %kept,
                    ignored = %actor,
                    "actor attributes differ from the catalogue record, keeping the catalogue's"
                );
            }
        }
        handle
    }
}

fn validate_actor(actor: &Actor) -> Result<(), CatalogError> {
    if actor.name.trim().is_empty() {
        return Err(CatalogError::InvalidRecord(
            "actor name must not be empty".to_string(),
        ));
    }
    Ok(())
}
