//! EFT2 round trips and cross-format conversion.

use std::path::{Path, PathBuf};

use eftkit::{
    eft, eft2, Cargo, Drone, Fighter, Fit, Module, ParseError, Rig, SdeCatalog, ServiceSlot,
    Subsystem,
};

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn catalog() -> SdeCatalog {
    SdeCatalog::load(fixture_path("sde_index.json")).expect("load SDE index fixture")
}

fn pve_tengu() -> Fit {
    let mut fit = Fit::new("Tengu", "PVE Tengu");
    fit.low_slots.push(Module { name: "Ballistic Control System II".to_string(), charge: None });
    fit.low_slots.push(Module { name: "Damage Control II".to_string(), charge: None });
    fit.mid_slots.push(Module { name: "10MN Afterburner II".to_string(), charge: None });
    fit.high_slots.push(Module {
        name: "Heavy Missile Launcher II".to_string(),
        charge: Some("Scourge Heavy Missile".to_string()),
    });
    fit.rigs.push(Rig { name: "Medium Warhead Rigor Catalyst I".to_string() });
    fit.subsystems.push(Subsystem { name: "Tengu Core - Augmented Graviton Reactor".to_string() });
    fit.drones.push(Drone { name: "Hornet I".to_string(), quantity: 5 });
    fit.cargo.push(Cargo { name: "Scourge Heavy Missile".to_string(), quantity: 2000 });
    fit
}

fn tatara() -> Fit {
    let mut fit = Fit::new("Tatara", "Ore Refinery");
    fit.is_structure = true;
    fit.mid_slots.push(Module { name: "Standup Warp Scrambler I".to_string(), charge: None });
    fit.service_slots.push(ServiceSlot { name: "Standup Moon Drill I".to_string() });
    fit.service_slots.push(ServiceSlot { name: "Standup Reprocessing Facility I".to_string() });
    fit.fighters.push(Fighter { name: "Standup Einherji I".to_string(), quantity: 9 });
    fit
}

#[test]
fn ship_fit_round_trips() {
    let fit = pve_tengu();
    let text = eft2::encode(&fit);
    let again = eft2::decode(&text, &catalog()).expect("reparse");
    assert_eq!(again, fit);
}

#[test]
fn structure_fit_round_trips() {
    let fit = tatara();
    let text = eft2::encode(&fit);
    assert!(text.contains("## Service Slots"));
    assert!(!text.contains("## Subsystems"));
    let again = eft2::decode(&text, &catalog()).expect("reparse");
    assert!(again.is_structure);
    assert_eq!(again, fit);
}

#[test]
fn round_trip_with_every_section_empty() {
    let fit = Fit::new("Venture", "");
    let text = eft2::encode(&fit);
    let again = eft2::decode(&text, &catalog()).expect("reparse");
    assert_eq!(again, fit);
}

#[test]
fn eft_fixture_converts_to_eft2_and_back() {
    let catalog = catalog();
    let raw = std::fs::read_to_string(fixture_path("pve_tengu.eft")).expect("read fixture");
    let fit = eft::decode(&raw, &catalog).expect("parse EFT");
    let again = eft2::decode(&fit.to_eft2(), &catalog).expect("parse EFT2");
    assert_eq!(again, fit);
}

#[test]
fn unknown_heading_fails_the_whole_parse() {
    let input = "# Tengu, PVE Tengu\n## Low Slots\nDamage Control II\n## Ammo Bay\nStuff\n";
    assert_eq!(
        eft2::decode(input, &catalog()),
        Err(ParseError::UnknownSection("Ammo Bay".to_string()))
    );
}

#[test]
fn quantities_render_with_commas_and_reparse() {
    let fit = pve_tengu();
    let text = eft2::encode(&fit);
    assert!(text.contains("Hornet I, 5"));
    assert!(text.contains("Scourge Heavy Missile, 2000"));
}
