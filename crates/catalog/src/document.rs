use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalogue::Catalogue;
use crate::config::CatalogueConfig;
use crate::error::CatalogError;
use crate::movie::Movie;
use crate::records::{Actor, Sex};

/// On-disk form of a catalogue. Actors are written out in full under every
/// movie they appear in; sharing is rebuilt by name on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogueDocument {
    pub movies: Vec<MovieEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieEntry {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub revenue: u32,
    #[serde(default)]
    pub actors: Vec<ActorEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorEntry {
    pub name: String,
    pub birth_year: i32,
    #[serde(default)]
    pub sex: Sex,
}

impl From<ActorEntry> for Actor {
    fn from(entry: ActorEntry) -> Self {
        Actor::new(entry.name, entry.birth_year, entry.sex)
    }
}

impl From<&Actor> for ActorEntry {
    fn from(actor: &Actor) -> Self {
        Self {
            name: actor.name.clone(),
            birth_year: actor.birth_year,
            sex: actor.sex,
        }
    }
}

impl From<&Movie> for MovieEntry {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.item.title.clone(),
            year: movie.item.year,
            director: movie.director.clone(),
            revenue: movie.revenue,
            actors: movie
                .actors()
                .iter()
                .map(|a| ActorEntry::from(&*a.borrow()))
                .collect(),
        }
    }
}

impl Catalogue {
    /// Builds a catalogue movie by movie. Each movie is complete, with its
    /// actors resolved against everything loaded before it, when appended.
    pub fn from_document(
        document: CatalogueDocument,
        config: CatalogueConfig,
    ) -> Result<Self, CatalogError> {
        let mut catalogue = Catalogue::new(config);
        for entry in document.movies {
            let movie = Movie::new(entry.title, entry.year, entry.director, entry.revenue);
            let cast = entry.actors.into_iter().map(Actor::from).collect();
            catalogue.add_movie_with_cast(movie, cast)?;
        }
        Ok(catalogue)
    }

    pub fn to_document(&self) -> CatalogueDocument {
        CatalogueDocument {
            movies: self.movies().iter().map(MovieEntry::from).collect(),
        }
    }
}

pub fn load_catalogue_from_str(
    payload: &str,
    config: CatalogueConfig,
) -> Result<Catalogue, CatalogError> {
    let document: CatalogueDocument =
        serde_json::from_str(payload).map_err(CatalogError::Parse)?;
    Catalogue::from_document(document, config)
}

pub fn load_catalogue(
    path: impl AsRef<Path>,
    config: CatalogueConfig,
) -> Result<Catalogue, CatalogError> {
    let path = path.as_ref();
    let payload = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalogue = load_catalogue_from_str(&payload, config)?;
    tracing::info!(
        path = %path.display(),
        movies = catalogue.len(),
        actors = catalogue.distinct_actor_count(),
        "loaded catalogue"
    );
    Ok(catalogue)
}

pub fn save_catalogue(catalogue: &Catalogue, path: impl AsRef<Path>) -> Result<(), CatalogError> {
    let path = path.as_ref();
    let payload =
        serde_json::to_string_pretty(&catalogue.to_document()).map_err(CatalogError::Parse)?;
    fs::write(path, payload).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), movies = catalogue.len(), "saved catalogue");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_catalogue, load_catalogue_from_str, save_catalogue};
    use crate::actor_graph::ActorGraph;
    use crate::config::CatalogueConfig;
    use crate::error::CatalogError;
    use foundation::{GrowthPolicy, Shared};
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;

    const HEAT_AND_IRISHMAN: &str = r#"{
        "movies": [
            {
                "title": "Heat", "year": 1995, "director": "Michael Mann", "revenue": 187,
                "actors": [
                    { "name": "Al Pacino", "birth_year": 1940, "sex": "M" },
                    { "name": "Robert De Niro", "birth_year": 1943, "sex": "M" }
                ]
            },
            {
                "title": "The Irishman", "year": 2019, "director": "Martin Scorsese", "revenue": 97,
                "actors": [
                    { "name": "Robert De Niro", "birth_year": 1943, "sex": "M" },
                    { "name": "Al Pacino", "birth_year": 1940, "sex": "M" },
                    { "name": "Anna Paquin", "birth_year": 1982, "sex": "F" }
                ]
            }
        ]
    }"#;

    fn temp_dir(label: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        let id = format!("catalogue_document_{label}_{}", std::process::id());
        dir.push(id);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn loading_shares_actors_across_movies() {
        let catalogue =
            load_catalogue_from_str(HEAT_AND_IRISHMAN, CatalogueConfig::default()).expect("load");
        assert_eq!(catalogue.len(), 2);
        assert_eq!(catalogue.distinct_actor_count(), 3);
        assert!(catalogue.movies().identity_conflicts().is_empty());

        let heat = catalogue.movie(0).expect("heat");
        let irishman = catalogue.movie(1).expect("irishman");
        let pacino_heat = heat.actor("Al Pacino").expect("cast");
        let pacino_irishman = irishman.actor("Al Pacino").expect("cast");
        assert!(Shared::ptr_eq(pacino_heat, pacino_irishman));
        assert_eq!(catalogue.movies_with_actor("Anna Paquin").len(), 1);
    }

    #[test]
    fn fixed_policy_sizes_each_cast_exactly() {
        let catalogue =
            load_catalogue_from_str(HEAT_AND_IRISHMAN, CatalogueConfig::fixed_actor_lists())
                .expect("load");
        for movie in catalogue.movies().iter() {
            assert_eq!(movie.actors().policy(), GrowthPolicy::Fixed);
            assert!(movie.actors().is_full());
        }
    }

    #[test]
    fn rejects_empty_actor_names() {
        let payload = r#"{"movies":[{"title":"Heat","year":1995,"director":"Michael Mann",
            "revenue":187,"actors":[{"name":"","birth_year":1940}]}]}"#;
        let err = load_catalogue_from_str(payload, CatalogueConfig::default())
            .expect_err("empty name");
        assert!(matches!(err, CatalogError::InvalidRecord(_)));
    }

    #[test]
    fn reports_parse_errors() {
        let err = load_catalogue_from_str("{\"movies\": 3}", CatalogueConfig::default())
            .expect_err("not a list");
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn reports_missing_file() {
        let root = temp_dir("missing");
        let path = root.join("nope.json");
        let err = load_catalogue(&path, CatalogueConfig::default()).expect_err("missing");
        match err {
            CatalogError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn loads_demo_catalogue() {
        let path =
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../tools/data/catalogue.json");
        let catalogue = load_catalogue(path, CatalogueConfig::default()).expect("load demo");
        assert_eq!(catalogue.len(), 3);
        assert_eq!(catalogue.distinct_actor_count(), 6);

        let kilmer = catalogue.find_actor("Val Kilmer").expect("listed");
        assert_eq!(Shared::holders(&kilmer), 3);
        let titles: Vec<&str> = catalogue
            .movies_with_actor("Val Kilmer")
            .into_iter()
            .map(|m| m.title())
            .collect();
        assert_eq!(titles, vec!["Heat", "Top Gun"]);
    }

    #[test]
    fn save_then_load_keeps_sharing() {
        let root = temp_dir("save");
        let path = root.join("catalogue.json");
        let catalogue =
            load_catalogue_from_str(HEAT_AND_IRISHMAN, CatalogueConfig::default()).expect("load");

        save_catalogue(&catalogue, &path).expect("save");
        let reloaded = load_catalogue(&path, CatalogueConfig::default()).expect("reload");

        assert_eq!(reloaded.to_document(), catalogue.to_document());
        assert_eq!(reloaded.distinct_actor_count(), 3);
        let de_niro = reloaded.find_actor("Robert De Niro").expect("listed");
        assert_eq!(Shared::holders(&de_niro), 3);
    }
}
