mod common;

use std::thread;

use approx::assert_relative_eq;
use common::sample_db;
use xraydb_core::{ElementId, ErrorCategory, XrayDbError};

#[test]
fn test_element_count() {
    let db = sample_db();
    assert_eq!(db.raw().elements.len(), 3);
    assert_eq!(db.raw().version[0].tag, "test-1");
}

#[test]
fn test_atomic_number_by_symbol() {
    let db = sample_db();
    assert_eq!(db.atomic_number("H").unwrap(), 1);
    assert_eq!(db.atomic_number("Fe").unwrap(), 26);
    assert_eq!(db.atomic_number("cu").unwrap(), 29);
    assert_eq!(db.atomic_number("CU").unwrap(), 29);
}

#[test]
fn test_atomic_number_by_name() {
    let db = sample_db();
    assert_eq!(db.atomic_number("iron").unwrap(), 26);
    assert_eq!(db.atomic_number("Copper").unwrap(), 29);
    assert_eq!(db.atomic_number("hydrogen").unwrap(), 1);
}

#[test]
fn test_atomic_number_by_z() {
    let db = sample_db();
    assert_eq!(db.atomic_number("26").unwrap(), 26);
    assert_eq!(db.atomic_number(29_u16).unwrap(), 29);
    assert_eq!(db.atomic_number(1).unwrap(), 1);
    assert_eq!(db.atomic_number(26_usize).unwrap(), 26);
}

#[test]
fn test_atomic_number_by_invalid_z() {
    let db = sample_db();
    for id in [ElementId::from("0"), ElementId::from("999"), ElementId::from(999)] {
        assert!(matches!(
            db.atomic_number(id),
            Err(XrayDbError::UnknownElement(_))
        ));
    }
    // negative integers never resolve
    assert!(db.atomic_number(-26).is_err());
    // a Z that is valid in general but missing from this store
    assert!(db.atomic_number(79).is_err());
}

#[test]
fn test_unknown_element() {
    let db = sample_db();
    let err = db.resolve("Xx").unwrap_err();
    assert!(matches!(err, XrayDbError::UnknownElement(ref id) if id == "Xx"));
    assert_eq!(err.category(), ErrorCategory::NotFound);
    assert!(err.is_not_found());
}

#[test]
fn test_resolve_record() {
    let db = sample_db();
    let cu = db.resolve(29).unwrap();
    assert_eq!(cu.atomic_number, 29);
    assert_eq!(cu.symbol, "Cu");
    assert_eq!(cu.name, "Copper");
    assert_relative_eq!(cu.molar_mass, 63.546);
    assert_relative_eq!(cu.density, 8.96);

    assert_eq!(db.resolve("copper").unwrap(), cu);
    assert_eq!(db.resolve(" 29 ").unwrap(), cu);
}

#[test]
fn test_symbol_and_name() {
    let db = sample_db();
    assert_eq!(db.symbol("26").unwrap(), "Fe");
    assert_eq!(db.symbol("iron").unwrap(), "Fe");
    assert_eq!(db.symbol("fe").unwrap(), "Fe");
    assert_eq!(db.atomic_name(26).unwrap(), "Iron");
    assert_eq!(db.atomic_name("Cu").unwrap(), "Copper");
}

#[test]
fn test_molar_mass() {
    let db = sample_db();
    assert_relative_eq!(db.molar_mass("Fe").unwrap(), 55.845, epsilon = 0.01);
    assert_relative_eq!(db.molar_mass("H").unwrap(), 1.008, epsilon = 0.001);
}

#[test]
fn test_density() {
    let db = sample_db();
    assert_relative_eq!(db.density("Fe").unwrap(), 7.874, epsilon = 0.001);
    assert_relative_eq!(db.density(29).unwrap(), 8.96, epsilon = 0.001);
}

#[test]
fn test_unknown_molar_mass_and_density() {
    let db = sample_db();
    assert!(matches!(
        db.molar_mass("Xx"),
        Err(XrayDbError::UnknownElement(_))
    ));
    assert!(matches!(
        db.density("Xx"),
        Err(XrayDbError::UnknownElement(_))
    ));
}

#[test]
fn test_concurrent_lookups_share_one_store() {
    let db = sample_db();
    let mut handles = Vec::new();
    for i in 0..8 {
        let db = db.clone();
        handles.push(thread::spawn(move || {
            assert_eq!(db.atomic_number("Fe").unwrap(), 26);
            assert_eq!(db.symbol("29").unwrap(), "Cu");
            let mu = db
                .mu_elam("Cu", 1000.0 + i as f64, Default::default())
                .unwrap();
            assert!(mu > 0.0);
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
