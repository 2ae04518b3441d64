//! Command table and handlers.
//!
//! Handlers write user-facing text to the writer they are given and report
//! failures through [`CommandError`]; the loop prints those and carries on.

use crate::app::{CatchOutcome, Session};
use crate::app::pokedex::roll_catch;
use crate::catalog::{LocationArea, LocationAreaPage, Pokemon};
use crate::net::LoadError;
use std::io::{self, Write};
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    Load(#[from] LoadError),
    #[error("Please provide {0}")]
    MissingArgument(&'static str),
    #[error("you're on the first page")]
    FirstPage,
    #[error("you have not caught {0}")]
    NotCaught(String),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub type Handler = fn(&mut Session, &[String], &mut dyn Write) -> Result<Flow, CommandError>;

pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    pub handler: Handler,
}

pub const COMMANDS: &[Command] = &[
    Command {
        name: "help",
        description: "Displays a help message",
        handler: help,
    },
    Command {
        name: "exit",
        description: "Exit the Pokedex",
        handler: exit,
    },
    Command {
        name: "map",
        description: "Show the next page of location areas",
        handler: map,
    },
    Command {
        name: "mapb",
        description: "Show the previous page of location areas",
        handler: mapb,
    },
    Command {
        name: "explore",
        description: "List the Pokemon found in a location area: explore <area>",
        handler: explore,
    },
    Command {
        name: "catch",
        description: "Try to catch a Pokemon: catch <name>",
        handler: catch,
    },
    Command {
        name: "inspect",
        description: "Show details of a caught Pokemon: inspect <name>",
        handler: inspect,
    },
    Command {
        name: "pokedex",
        description: "List every Pokemon you have caught",
        handler: pokedex,
    },
];

pub fn find(name: &str) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.name == name)
}

fn help(_session: &mut Session, _args: &[String], out: &mut dyn Write) -> Result<Flow, CommandError> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in COMMANDS {
        writeln!(out, "{}: {}", command.name, command.description)?;
    }
    Ok(Flow::Continue)
}

fn exit(_session: &mut Session, _args: &[String], out: &mut dyn Write) -> Result<Flow, CommandError> {
    writeln!(out, "Closing the Pokedex... Goodbye!")?;
    Ok(Flow::Exit)
}

fn map(session: &mut Session, _args: &[String], out: &mut dyn Write) -> Result<Flow, CommandError> {
    // Past the last page there is no next link, so this starts over.
    let url = match session.pager.next() {
        Some(next) => Url::parse(next).map_err(LoadError::from)?,
        None => session.endpoints.location_areas(0, session.settings.page_size)?,
    };
    show_page(session, &url, out)
}

fn mapb(session: &mut Session, _args: &[String], out: &mut dyn Write) -> Result<Flow, CommandError> {
    let url = match session.pager.previous() {
        Some(previous) => Url::parse(previous).map_err(LoadError::from)?,
        None => return Err(CommandError::FirstPage),
    };
    show_page(session, &url, out)
}

fn show_page(session: &mut Session, url: &Url, out: &mut dyn Write) -> Result<Flow, CommandError> {
    let page: LocationAreaPage = session.fetch(url)?;
    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    session.pager.update(&page);
    Ok(Flow::Continue)
}

fn explore(session: &mut Session, args: &[String], out: &mut dyn Write) -> Result<Flow, CommandError> {
    let name = args.first().ok_or(CommandError::MissingArgument("a location area"))?;
    let url = session.endpoints.location_area(name)?;
    let area: LocationArea = session.fetch(&url)?;

    writeln!(out, "Exploring {}...", name)?;
    if area.pokemon_encounters.is_empty() {
        writeln!(out, "No Pokemon encounters found")?;
        return Ok(Flow::Continue);
    }
    writeln!(out, "Found Pokemon:")?;
    for pokemon in area.pokemon_names() {
        writeln!(out, " - {}", pokemon)?;
    }
    Ok(Flow::Continue)
}

fn catch(session: &mut Session, args: &[String], out: &mut dyn Write) -> Result<Flow, CommandError> {
    let name = args.first().ok_or(CommandError::MissingArgument("a Pokemon"))?;
    let url = session.endpoints.pokemon(name)?;
    let pokemon: Pokemon = session.fetch(&url)?;

    writeln!(out, "Throwing a Pokeball at {}...", name)?;
    let roll = roll_catch(&mut rand::thread_rng(), pokemon.base_experience.unwrap_or(0));
    match session.pokedex.try_catch(pokemon, roll) {
        CatchOutcome::Caught => {
            writeln!(out, "{} was caught!", name)?;
            writeln!(out, "You may now inspect it with the inspect command.")?;
        }
        CatchOutcome::Escaped => writeln!(out, "{} escaped!", name)?,
        CatchOutcome::AlreadyCaught => writeln!(out, "{} is already caught!", name)?,
    }
    Ok(Flow::Continue)
}

fn inspect(session: &mut Session, args: &[String], out: &mut dyn Write) -> Result<Flow, CommandError> {
    let name = args.first().ok_or(CommandError::MissingArgument("a Pokemon"))?;
    let pokemon = session
        .pokedex
        .get(name)
        .ok_or_else(|| CommandError::NotCaught(name.clone()))?;

    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for slot in &pokemon.types {
        writeln!(out, "  - {}", slot.kind.name)?;
    }
    Ok(Flow::Continue)
}

fn pokedex(session: &mut Session, _args: &[String], out: &mut dyn Write) -> Result<Flow, CommandError> {
    let names = session.pokedex.names();
    if names.is_empty() {
        writeln!(out, "No Pokemon caught yet!")?;
        return Ok(Flow::Continue);
    }
    writeln!(out, "Your Pokedex:")?;
    for name in names {
        writeln!(out, " - {}", name)?;
    }
    Ok(Flow::Continue)
}
