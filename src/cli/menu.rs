//! Numeric menu loop.

use crate::graph::{Limits, StationGraph};
use crate::types::GraphResult;

use super::commands;
use super::console::{Console, Tone};

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateStation,
    ConnectStations,
    PrintConnections,
    DeleteStation,
    DeleteConnection,
    Exit,
}

/// Menu entries in display order.
pub const MENU: &[(MenuChoice, &str)] = &[
    (MenuChoice::CreateStation, "Create station"),
    (MenuChoice::ConnectStations, "Create station connection"),
    (MenuChoice::PrintConnections, "Print all station connections"),
    (MenuChoice::DeleteStation, "Delete a station"),
    (MenuChoice::DeleteConnection, "Delete a station connection"),
    (MenuChoice::Exit, "Terminate program"),
];

impl MenuChoice {
    /// Map a typed number to a menu entry.
    pub fn from_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(Self::CreateStation),
            2 => Some(Self::ConnectStations),
            3 => Some(Self::PrintConnections),
            4 => Some(Self::DeleteStation),
            5 => Some(Self::DeleteConnection),
            0 => Some(Self::Exit),
            _ => None,
        }
    }

    /// The number the user types for this entry.
    pub fn number(self) -> u8 {
        match self {
            Self::CreateStation => 1,
            Self::ConnectStations => 2,
            Self::PrintConnections => 3,
            Self::DeleteStation => 4,
            Self::DeleteConnection => 5,
            Self::Exit => 0,
        }
    }
}

fn describe_limit(limit: Option<usize>, noun: &str) -> String {
    match limit {
        Some(n) => format!("{n} {noun}"),
        None => format!("unlimited {noun}"),
    }
}

fn print_banner(console: &mut impl Console, limits: Limits) -> GraphResult<()> {
    console.write_line(
        Tone::Notice,
        &format!(
            "stations v{} ({}, {})",
            env!("CARGO_PKG_VERSION"),
            describe_limit(limits.stations, "stations"),
            describe_limit(limits.connections, "connections"),
        ),
    )?;
    Ok(())
}

fn display_menu(console: &mut impl Console) -> GraphResult<()> {
    console.write_line(Tone::Plain, "Please select an option")?;
    for (choice, label) in MENU {
        console.write_line(Tone::Plain, &format!(" {}) {label}", choice.number()))?;
    }
    Ok(())
}

/// Run one menu action. Returns `true` if input ended during the action.
pub fn dispatch(
    choice: MenuChoice,
    graph: &mut StationGraph,
    console: &mut impl Console,
) -> GraphResult<bool> {
    let names = graph.stations().iter().map(|s| s.name.clone()).collect();
    console.set_completions(names);

    let ended = match choice {
        MenuChoice::CreateStation => commands::create_station(graph, console)?,
        MenuChoice::ConnectStations => commands::connect_stations(graph, console)?,
        MenuChoice::PrintConnections => {
            commands::separator(console)?;
            commands::print_connections(graph, console)?;
            false
        }
        MenuChoice::DeleteStation => commands::delete_station(graph, console)?,
        MenuChoice::DeleteConnection => commands::delete_connection(graph, console)?,
        MenuChoice::Exit => return Ok(true),
    };
    commands::separator(console)?;
    Ok(ended)
}

/// Run the menu until the user picks 0 or input ends.
pub fn run(graph: &mut StationGraph, console: &mut impl Console) -> GraphResult<()> {
    print_banner(console, graph.limits())?;

    loop {
        display_menu(console)?;
        commands::separator(console)?;

        let Some(answer) = console.read_line("Choice: ")? else {
            log::debug!("input ended at the menu prompt");
            break;
        };

        // Non-numeric answers just show the menu again.
        let Ok(number) = answer.trim().parse::<i64>() else {
            continue;
        };

        match MenuChoice::from_number(number) {
            Some(MenuChoice::Exit) => break,
            Some(choice) => {
                if dispatch(choice, graph, console)? {
                    log::debug!("input ended during {:?}", choice);
                    break;
                }
            }
            None => console.write_line(Tone::Error, "Please select a valid option.")?,
        }
    }

    Ok(())
}
