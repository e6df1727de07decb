//! EFT2: the heading-delimited fitting format. Markdown-flavored, with a
//! `# ship, name` header and explicit `## Section` headings, so membership
//! never depends on line position. Unlike EFT, unrecognized headings are a
//! hard error; unambiguous sectioning is the whole point of the format.

use crate::codec::classify::{self, CombatKind};
use crate::codec::{split_module_line, split_quantity_line, ParseError};
use crate::fit::{Cargo, Drone, Fighter, Fit, Module, Rig, ServiceSlot, Subsystem};
use crate::sde::SdeCatalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    LowSlots,
    MidSlots,
    HighSlots,
    Rigs,
    Subsystems,
    ServiceSlots,
    Drones,
    Fighters,
    Cargo,
}

fn section_for(heading: &str) -> Option<Section> {
    match heading.to_ascii_lowercase().as_str() {
        "low slots" => Some(Section::LowSlots),
        "mid slots" => Some(Section::MidSlots),
        "high slots" => Some(Section::HighSlots),
        "rigs" => Some(Section::Rigs),
        "subsystems" => Some(Section::Subsystems),
        "service slots" => Some(Section::ServiceSlots),
        "drones" => Some(Section::Drones),
        "fighters" => Some(Section::Fighters),
        "cargo" => Some(Section::Cargo),
        _ => None,
    }
}

/// Decode EFT2 text into a fit. `is_structure` comes straight from which of
/// the Subsystems/Service Slots headings appeared; drone/fighter membership
/// is still refined per item through the catalog.
pub fn decode(input: &str, catalog: &SdeCatalog) -> Result<Fit, ParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut lines = text.lines().map(str::trim);
    let header = lines.next().ok_or(ParseError::EmptyInput)?;
    let (ship, fit_name) = parse_header(header)?;

    let mut fit = Fit::new(ship, fit_name);
    let mut saw_service_slots = false;
    let mut subsystem_lines: Vec<String> = Vec::new();
    let mut combat_lines: Vec<(String, u32, CombatKind)> = Vec::new();
    let mut current: Option<Section> = None;

    for line in lines {
        if line.is_empty() {
            continue;
        }
        if let Some(heading) = line.strip_prefix("##") {
            let heading = heading.trim();
            let section = section_for(heading)
                .ok_or_else(|| ParseError::UnknownSection(heading.to_string()))?;
            if section == Section::ServiceSlots {
                saw_service_slots = true;
            }
            current = Some(section);
            continue;
        }
        let Some(section) = current else {
            tracing::warn!(line, "content before first section heading, ignoring");
            continue;
        };
        match section {
            Section::LowSlots => fit.low_slots.push(module_from_line(line)),
            Section::MidSlots => fit.mid_slots.push(module_from_line(line)),
            Section::HighSlots => fit.high_slots.push(module_from_line(line)),
            Section::Rigs => fit.rigs.push(Rig { name: line.to_string() }),
            Section::Subsystems => subsystem_lines.push(line.to_string()),
            Section::ServiceSlots => {
                fit.service_slots.push(ServiceSlot { name: line.to_string() })
            }
            Section::Drones => {
                let (name, quantity) = split_quantity_line(line);
                combat_lines.push((name, quantity, CombatKind::Drone));
            }
            Section::Fighters => {
                let (name, quantity) = split_quantity_line(line);
                combat_lines.push((name, quantity, CombatKind::Fighter));
            }
            Section::Cargo => {
                let (name, quantity) = split_quantity_line(line);
                fit.cargo.push(Cargo { name, quantity });
            }
        }
    }

    fit.is_structure = saw_service_slots;
    if fit.is_structure {
        // Contradictory input: a Subsystems section on a structure fit.
        // Service slots win; stray subsystem lines are dropped.
        for line in subsystem_lines {
            tracing::warn!(line, "subsystem entry in a structure fit, dropping");
        }
    } else {
        fit.subsystems = subsystem_lines.into_iter().map(|name| Subsystem { name }).collect();
    }

    for (name, quantity, default) in combat_lines {
        match classify::combat_kind(catalog, &name, default) {
            CombatKind::Fighter => fit.fighters.push(Fighter { name, quantity }),
            CombatKind::Drone => fit.drones.push(Drone { name, quantity }),
        }
    }

    Ok(fit)
}

/// Encode a fit as EFT2 text. Only non-empty sections are written; section
/// identity is explicit, so no placeholders are needed.
pub fn encode(fit: &Fit) -> String {
    let mut out = format!("# {}, {}\n", fit.ship, fit.name);

    push_section(&mut out, "Low Slots", fit.low_slots.iter().map(render_module));
    push_section(&mut out, "Mid Slots", fit.mid_slots.iter().map(render_module));
    push_section(&mut out, "High Slots", fit.high_slots.iter().map(render_module));
    push_section(&mut out, "Rigs", fit.rigs.iter().map(|r| r.name.clone()));
    if fit.is_structure {
        push_section(&mut out, "Service Slots", fit.service_slots.iter().map(|s| s.name.clone()));
    } else {
        push_section(&mut out, "Subsystems", fit.subsystems.iter().map(|s| s.name.clone()));
    }
    push_section(&mut out, "Drones", fit.drones.iter().map(|d| render_quantity(&d.name, d.quantity)));
    push_section(
        &mut out,
        "Fighters",
        fit.fighters.iter().map(|f| render_quantity(&f.name, f.quantity)),
    );
    push_section(&mut out, "Cargo", fit.cargo.iter().map(|c| render_quantity(&c.name, c.quantity)));

    out
}

fn push_section(out: &mut String, heading: &str, lines: impl Iterator<Item = String>) {
    let mut lines = lines.peekable();
    if lines.peek().is_none() {
        return;
    }
    out.push('\n');
    out.push_str("## ");
    out.push_str(heading);
    out.push('\n');
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
}

fn parse_header(line: &str) -> Result<(String, String), ParseError> {
    let rest = line
        .strip_prefix('#')
        .ok_or_else(|| ParseError::MalformedHeader(line.to_string()))?;
    if rest.starts_with('#') {
        // A `##` heading where the fit header should be.
        return Err(ParseError::MalformedHeader(line.to_string()));
    }
    let (ship, name) =
        rest.split_once(',').ok_or_else(|| ParseError::MalformedHeader(line.to_string()))?;
    let ship = ship.trim();
    if ship.is_empty() {
        return Err(ParseError::MalformedHeader(line.to_string()));
    }
    Ok((ship.to_string(), name.trim().to_string()))
}

fn module_from_line(line: &str) -> Module {
    let (name, charge) = split_module_line(line);
    Module { name, charge }
}

fn render_module(module: &Module) -> String {
    match &module.charge {
        Some(charge) => format!("{}, {}", module.name, charge),
        None => module.name.clone(),
    }
}

fn render_quantity(name: &str, quantity: u32) -> String {
    if quantity == 1 {
        name.to_string()
    } else {
        format!("{name}, {quantity}")
    }
}
