//! Menu action implementations.
//!
//! Each action returns `Ok(true)` when input ran out mid-prompt, so the menu
//! loop can stop instead of spinning on an exhausted stream.

use crate::graph::StationGraph;
use crate::types::{GraphError, GraphResult};

use super::console::{Console, Tone};

const SEPARATOR_WIDTH: usize = 50;

/// Write the 50-dash separator line.
pub fn separator(console: &mut impl Console) -> GraphResult<()> {
    console.write_line(Tone::Plain, &"-".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}

/// Ask for a new station name and add it.
pub fn create_station(graph: &mut StationGraph, console: &mut impl Console) -> GraphResult<bool> {
    if graph.stations_full() {
        console.write_line(Tone::Error, "Station list is full")?;
        return Ok(false);
    }

    loop {
        let Some(given) = console.read_line("Station name: ")? else {
            return Ok(true);
        };

        if graph.station_exists(&given) {
            console.write_line(
                Tone::Notice,
                &format!("Station name {} already exists!", given.trim()),
            )?;
            continue;
        }

        match graph.add_station(&given) {
            Ok(index) => {
                let name = graph
                    .stations()
                    .get(index)
                    .map(|s| s.name.as_str())
                    .unwrap_or_default();
                console.write_line(Tone::Success, &format!("Station {name} created"))?;
                return Ok(false);
            }
            Err(GraphError::EmptyName) => {
                console.write_line(Tone::Error, "Station name cannot be empty")?;
            }
            Err(e) => {
                console.write_line(Tone::Error, &e.to_string())?;
                return Ok(false);
            }
        }
    }
}

/// Ask for two station names and connect them.
pub fn connect_stations(
    graph: &mut StationGraph,
    console: &mut impl Console,
) -> GraphResult<bool> {
    if graph.connections_full() {
        console.write_line(Tone::Error, "The connections list is full!")?;
        return Ok(false);
    }

    let Some(first) = console.read_line("Connect which station? ")? else {
        return Ok(true);
    };
    let Some(second) = console.read_line(&format!("Connect {} to ...? ", first.trim()))? else {
        return Ok(true);
    };

    match graph.connect(&first, &second) {
        Ok(connection) => {
            let message = connection.to_string();
            console.write_line(Tone::Success, &message)?;
        }
        Err(e) => console.write_line(Tone::Error, &e.to_string())?,
    }
    Ok(false)
}

/// Print every connection with its index.
pub fn print_connections(graph: &StationGraph, console: &mut impl Console) -> GraphResult<()> {
    console.write_line(Tone::Plain, "|Stations|\t|Connections|")?;
    if graph.connections().is_empty() {
        console.write_line(Tone::Plain, "No connections yet.")?;
        return Ok(());
    }
    for (i, c) in graph.connections().iter().enumerate() {
        console.write_line(Tone::Plain, &format!("{i} {}\t{i} {}", c.a, c.b))?;
    }
    Ok(())
}

/// Print every station with its index and degree.
pub fn print_stations(graph: &StationGraph, console: &mut impl Console) -> GraphResult<()> {
    for (i, s) in graph.stations().iter().enumerate() {
        let degree = graph.degree(&s.name);
        console.write_line(
            Tone::Plain,
            &format!(
                "Station {i}: {} ({degree} connection(s), added {})",
                s.name,
                format_timestamp(s.created_at)
            ),
        )?;
    }
    Ok(())
}

/// Ask which station to delete, then delete it and its connections.
pub fn delete_station(graph: &mut StationGraph, console: &mut impl Console) -> GraphResult<bool> {
    if graph.stations().is_empty() {
        console.write_line(Tone::Warning, "There are no stations to delete.")?;
        return Ok(false);
    }

    let answer = loop {
        separator(console)?;
        console.write_line(Tone::Plain, "Which station to delete?")?;
        print_stations(graph, console)?;
        match read_number(console)? {
            Some(Some(n)) => break n,
            Some(None) => continue,
            None => return Ok(true),
        }
    };

    let Some(index) = to_index(answer) else {
        console.write_line(Tone::Error, "Given number is out of bounds.")?;
        return Ok(false);
    };

    match graph.delete_station(index) {
        Ok(removal) => {
            for c in &removal.connections {
                console.write_line(
                    Tone::Error,
                    &format!("Deleted connection {}-{} from the connection list.", c.a, c.b),
                )?;
            }
            console.write_line(
                Tone::Warning,
                &format!(
                    "Deleted station {} from entry position number : {}",
                    removal.station.name, removal.index
                ),
            )?;
        }
        Err(GraphError::IndexOutOfBounds { .. }) => {
            console.write_line(Tone::Error, "Given number is out of bounds.")?;
        }
        Err(e) => return Err(e),
    }
    Ok(false)
}

/// Ask which connection to delete, then delete it.
pub fn delete_connection(
    graph: &mut StationGraph,
    console: &mut impl Console,
) -> GraphResult<bool> {
    if graph.connections().is_empty() {
        console.write_line(Tone::Warning, "There are no connections to delete.")?;
        return Ok(false);
    }

    let answer = loop {
        separator(console)?;
        console.write_line(Tone::Plain, "Which connection to delete?")?;
        print_connections(graph, console)?;
        match read_number(console)? {
            Some(Some(n)) => break n,
            Some(None) => continue,
            None => return Ok(true),
        }
    };

    let Some(index) = to_index(answer) else {
        console.write_line(Tone::Error, "Given number is out of bounds.")?;
        return Ok(false);
    };

    match graph.disconnect(index) {
        Ok(removed) => {
            console.write_line(
                Tone::Warning,
                &format!(
                    "Deleted connection {}-{} from entry position number : {index}",
                    removed.a, removed.b
                ),
            )?;
        }
        Err(GraphError::IndexOutOfBounds { .. }) => {
            console.write_line(Tone::Error, "Given number is out of bounds.")?;
        }
        Err(e) => return Err(e),
    }
    Ok(false)
}

/// Read one answer and parse it as an integer.
///
/// `None` at end of input, `Some(None)` when the answer is not a number.
fn read_number(console: &mut impl Console) -> GraphResult<Option<Option<i64>>> {
    Ok(console
        .read_line("")?
        .map(|answer| answer.trim().parse::<i64>().ok()))
}

fn format_timestamp(micros: u64) -> String {
    let secs = (micros / 1_000_000) as i64;
    match chrono::DateTime::from_timestamp(secs, 0) {
        Some(dt) => dt.format("%H:%M:%S UTC").to_string(),
        None => format!("{} us", micros),
    }
}

fn to_index(answer: i64) -> Option<usize> {
    usize::try_from(answer).ok()
}
