//! Classic positional EFT format. Sections carry no labels; membership is
//! a cursor over a fixed order (low, mid, high, rigs, subsystem-or-service,
//! combat units, cargo) that advances on every blank line after the header.
//! The encoder writes exactly one blank line per section boundary, so empty
//! middle sections round-trip; empty slot sections additionally emit an
//! `[Empty <X> slot]` placeholder to stay visible in hand-edited files.

use crate::codec::classify::{self, CombatKind};
use crate::codec::{split_module_line, split_quantity_line, ParseError};
use crate::fit::{Cargo, Drone, Fighter, Fit, Module, Rig, ServiceSlot, Subsystem};
use crate::sde::SdeCatalog;

const SECTION_COUNT: usize = 7;
const LOW: usize = 0;
const MID: usize = 1;
const HIGH: usize = 2;
const RIGS: usize = 3;
const FLEX: usize = 4;
const COMBAT: usize = 5;
const CARGO: usize = 6;

/// Decode EFT text into a fit. The fifth block and the combat block are
/// resolved through the catalog (subsystems vs service slots, drones vs
/// fighters); an unknown hull parses with ship defaults.
pub fn decode(input: &str, catalog: &SdeCatalog) -> Result<Fit, ParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut lines = text.lines().map(str::trim);
    let header = lines.next().ok_or(ParseError::EmptyInput)?;
    let (ship, fit_name) = parse_header(header)?;

    let mut sections: [Vec<&str>; SECTION_COUNT] = Default::default();
    let mut cursor = 0;
    let mut seen_content = false;
    for line in lines {
        if line.is_empty() {
            // Blank lines before the first item are export noise, not
            // section boundaries.
            if seen_content && cursor < SECTION_COUNT - 1 {
                cursor += 1;
            }
            continue;
        }
        seen_content = true;
        if is_empty_slot_placeholder(line) {
            continue;
        }
        sections[cursor].push(line);
    }

    let mut fit = Fit::new(ship, fit_name);
    fit.is_structure = classify::is_structure_hull(catalog, &fit.ship);

    fit.low_slots = sections[LOW].iter().map(|l| module_from_line(l)).collect();
    fit.mid_slots = sections[MID].iter().map(|l| module_from_line(l)).collect();
    fit.high_slots = sections[HIGH].iter().map(|l| module_from_line(l)).collect();
    fit.rigs = sections[RIGS].iter().map(|l| Rig { name: l.to_string() }).collect();

    if fit.is_structure {
        fit.service_slots =
            sections[FLEX].iter().map(|l| ServiceSlot { name: l.to_string() }).collect();
    } else {
        fit.subsystems = sections[FLEX].iter().map(|l| Subsystem { name: l.to_string() }).collect();
    }

    for line in &sections[COMBAT] {
        let (name, quantity) = split_quantity_line(line);
        match classify::combat_kind(catalog, &name, CombatKind::Drone) {
            CombatKind::Fighter => fit.fighters.push(Fighter { name, quantity }),
            CombatKind::Drone => fit.drones.push(Drone { name, quantity }),
        }
    }

    fit.cargo = sections[CARGO]
        .iter()
        .map(|l| {
            let (name, quantity) = split_quantity_line(l);
            Cargo { name, quantity }
        })
        .collect();

    Ok(fit)
}

/// Encode a fit as EFT text. All seven sections are written in order,
/// separated by exactly one blank line each, so positions stay decodable
/// even when middle sections are empty.
pub fn encode(fit: &Fit) -> String {
    let mut sections: Vec<Vec<String>> = Vec::with_capacity(SECTION_COUNT);
    sections.push(slot_section(&fit.low_slots, "Low"));
    sections.push(slot_section(&fit.mid_slots, "Mid"));
    sections.push(slot_section(&fit.high_slots, "High"));
    sections.push(fit.rigs.iter().map(|r| r.name.clone()).collect());
    if fit.is_structure {
        sections.push(fit.service_slots.iter().map(|s| s.name.clone()).collect());
    } else {
        sections.push(fit.subsystems.iter().map(|s| s.name.clone()).collect());
    }
    let mut combat: Vec<String> =
        fit.drones.iter().map(|d| render_quantity(&d.name, d.quantity)).collect();
    combat.extend(fit.fighters.iter().map(|f| render_quantity(&f.name, f.quantity)));
    sections.push(combat);
    sections.push(fit.cargo.iter().map(|c| render_quantity(&c.name, c.quantity)).collect());

    let mut out = format!("[{}, {}]\n", fit.ship, fit.name);
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for line in section {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn parse_header(line: &str) -> Result<(String, String), ParseError> {
    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| ParseError::MalformedHeader(line.to_string()))?;
    let (ship, name) =
        inner.split_once(',').ok_or_else(|| ParseError::MalformedHeader(line.to_string()))?;
    let ship = ship.trim();
    if ship.is_empty() {
        return Err(ParseError::MalformedHeader(line.to_string()));
    }
    Ok((ship.to_string(), name.trim().to_string()))
}

fn is_empty_slot_placeholder(line: &str) -> bool {
    line.strip_prefix("[Empty ").map_or(false, |rest| rest.ends_with("slot]"))
}

fn module_from_line(line: &str) -> Module {
    let (name, charge) = split_module_line(line);
    Module { name, charge }
}

fn slot_section(slots: &[Module], kind: &str) -> Vec<String> {
    if slots.is_empty() {
        return vec![format!("[Empty {kind} slot]")];
    }
    slots.iter().map(render_module).collect()
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
        format!("{name} x{quantity}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sde::Category;

    #[test]
    fn empty_input_is_fatal() {
        let catalog = SdeCatalog::empty();
        assert_eq!(decode("", &catalog), Err(ParseError::EmptyInput));
        assert_eq!(decode("  \n\n  ", &catalog), Err(ParseError::EmptyInput));
    }

    #[test]
    fn missing_brackets_or_comma_is_a_malformed_header() {
        let catalog = SdeCatalog::empty();
        assert!(matches!(
            decode("Invalid EFT data", &catalog),
            Err(ParseError::MalformedHeader(_))
        ));
        assert!(matches!(decode("[Venture]", &catalog), Err(ParseError::MalformedHeader(_))));
        assert!(matches!(decode("[, no ship]", &catalog), Err(ParseError::MalformedHeader(_))));
    }

    #[test]
    fn header_fields_are_trimmed() {
        let fit = decode("[ Venture ,  Venture - Mining ]", &SdeCatalog::empty()).unwrap();
        assert_eq!(fit.ship, "Venture");
        assert_eq!(fit.name, "Venture - Mining");
    }

    #[test]
    fn blank_lines_advance_the_section_cursor() {
        let input = "[Venture, Test Fit]\nMining Laser Upgrade II\n\n\nMining Laser II\n";
        let fit = decode(input, &SdeCatalog::empty()).unwrap();
        assert_eq!(fit.low_slots.len(), 1);
        assert!(fit.mid_slots.is_empty());
        assert_eq!(fit.high_slots[0].name, "Mining Laser II");
    }

    #[test]
    fn empty_slot_placeholders_are_dropped() {
        let input = "[Venture, Test Fit]\n[Empty Low slot]\n\n[Empty Mid slot]\n\nMining Laser II\n";
        let fit = decode(input, &SdeCatalog::empty()).unwrap();
        assert!(fit.low_slots.is_empty());
        assert!(fit.mid_slots.is_empty());
        assert_eq!(fit.high_slots.len(), 1);
    }

    #[test]
    fn combat_block_defaults_to_drones_without_catalog_answer() {
        let input = "[Venture, Test Fit]\n[Empty Low slot]\n\n\n\n\n\nHobgoblin II x5\n";
        let fit = decode(input, &SdeCatalog::empty()).unwrap();
        assert_eq!(fit.drones.len(), 1);
        assert_eq!(fit.drones[0].name, "Hobgoblin II");
        assert_eq!(fit.drones[0].quantity, 5);
        assert!(fit.fighters.is_empty());
    }

    #[test]
    fn fighters_are_split_out_by_catalog_lookup() {
        let catalog = SdeCatalog::from_entries([
            ("Einherji I", Category::Fighter),
            ("Hobgoblin II", Category::Drone),
        ]);
        let input = "[Nyx, Carrier]\n[Empty Low slot]\n\n\n\n\n\nHobgoblin II x5\nEinherji I x9\n";
        let fit = decode(input, &catalog).unwrap();
        assert_eq!(fit.drones.len(), 1);
        assert_eq!(fit.fighters.len(), 1);
        assert_eq!(fit.fighters[0].name, "Einherji I");
        assert_eq!(fit.fighters[0].quantity, 9);
    }

    #[test]
    fn encode_writes_placeholders_for_empty_slot_sections() {
        let fit = Fit::new("Venture", "Empty Hull");
        let text = encode(&fit);
        assert!(text.contains("[Empty Low slot]"));
        assert!(text.contains("[Empty Mid slot]"));
        assert!(text.contains("[Empty High slot]"));
        let again = decode(&text, &SdeCatalog::empty()).unwrap();
        assert_eq!(again, fit);
    }

    #[test]
    fn quantity_one_is_rendered_bare() {
        assert_eq!(render_quantity("Hornet I", 1), "Hornet I");
        assert_eq!(render_quantity("Hornet I", 5), "Hornet I x5");
    }
}
