use std::path::{Path, PathBuf};

use catalog::{Actor, ActorGraph, Catalogue, CatalogueConfig, Sex};
use clap::{Parser, Subcommand};
use foundation::{GrowthPolicy, Shared};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect and edit a movie catalogue")]
struct Args {
    /// Size each movie's actor list to its loaded cast and never grow it
    #[arg(long)]
    fixed_actor_lists: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every movie with its cast
    List { catalogue: PathBuf },

    /// Show an actor and the movies they appear in
    Actor { catalogue: PathBuf, name: String },

    /// Verify that each actor name maps to a single shared record
    Check { catalogue: PathBuf },

    /// Add an actor to a movie's cast and write the catalogue back
    Attach {
        catalogue: PathBuf,

        /// Title of the movie to attach to
        #[arg(long)]
        movie: String,

        #[arg(long)]
        name: String,

        /// Only used when the actor is new to the catalogue
        #[arg(long, default_value_t = 0)]
        birth_year: i32,

        /// M, F or x
        #[arg(long, default_value_t = 'x')]
        sex: char,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main(Args::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main(args: Args) -> Result<(), String> {
    let config = if args.fixed_actor_lists {
        CatalogueConfig::fixed_actor_lists()
    } else {
        CatalogueConfig::default()
    };

    match args.command {
        Command::List { catalogue } => cmd_list(&load(&catalogue, config)?),
        Command::Actor { catalogue, name } => cmd_actor(&load(&catalogue, config)?, &name),
        Command::Check { catalogue } => cmd_check(&load(&catalogue, config)?),
        Command::Attach {
            catalogue,
            movie,
            name,
            birth_year,
            sex,
        } => {
            let sex = Sex::try_from(sex)?;
            let mut loaded = load(&catalogue, config)?;
            cmd_attach(&mut loaded, &movie, Actor::new(name, birth_year, sex))?;
            catalog::save_catalogue(&loaded, &catalogue).map_err(|e| e.to_string())
        }
    }
}

fn load(path: &Path, config: CatalogueConfig) -> Result<Catalogue, String> {
    catalog::load_catalogue(path, config).map_err(|e| e.to_string())
}

fn cmd_list(catalogue: &Catalogue) -> Result<(), String> {
    for movie in catalogue.movies().iter() {
        print!("{movie}");
    }
    println!(
        "{} movies, {} actors",
        catalogue.len(),
        catalogue.distinct_actor_count()
    );
    Ok(())
}

fn cmd_actor(catalogue: &Catalogue, name: &str) -> Result<(), String> {
    let actor = catalogue
        .find_actor(name)
        .ok_or_else(|| format!("no actor named {name:?}"))?;
    println!("{}", actor.borrow());
    for movie in catalogue.movies_with_actor(name) {
        println!("  {} ({})", movie.title(), movie.year());
    }
    // One holder per movie plus `actor` itself.
    println!("  shared by {} movies", Shared::holders(&actor) - 1);
    Ok(())
}

fn cmd_check(catalogue: &Catalogue) -> Result<(), String> {
    let conflicts = catalogue.movies().identity_conflicts();
    if conflicts.is_empty() {
        info!(
            actors = catalogue.distinct_actor_count(),
            "actor identity holds"
        );
        println!("ok");
        return Ok(());
    }
    for (name, records) in &conflicts {
        println!("{name}: {records} distinct records");
    }
    Err(format!("{} actor names have duplicate records", conflicts.len()))
}

fn cmd_attach(catalogue: &mut Catalogue, title: &str, actor: Actor) -> Result<(), String> {
    let index = catalogue
        .movies()
        .iter()
        .position(|m| m.title() == title)
        .ok_or_else(|| format!("no movie titled {title:?}"))?;
    let movie = catalogue.movie(index).map_err(|e| e.to_string())?;
    if movie.actors().is_full() && movie.actors().policy() == GrowthPolicy::Fixed {
        return Err(format!("the cast of {title:?} is fixed and full"));
    }

    let handle = catalogue
        .attach_actor(index, actor)
        .map_err(|e| e.to_string())?;
    info!(
        movie = title,
        actor = %handle.borrow(),
        holders = Shared::holders(&handle),
        "attached actor"
    );
    Ok(())
}
