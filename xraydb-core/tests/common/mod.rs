#![allow(dead_code)]

//! Small synthetic reference store shared by the integration tests.
//!
//! Elam curves carry zero second derivatives, so they are piecewise linear in
//! log-log space and every value below can be worked out by hand. Chantler
//! columns are power laws (f1 is linear), which log-log interpolation and the
//! smoothing spline reproduce exactly.

use xraydb_core::xraydb_store::{
    ChantlerRecord, CoreWidthRecord, CosterKronigRecord, ElementRecord, PhotoabsorptionRecord,
    ScatteringRecord, VersionRecord, WaasmaierRecord, XrayDatabase, XrayLevelRecord,
    XrayTransitionRecord,
};
use xraydb_core::{XrayDb, XrayDbConfig};

pub const CU_K_EDGE: f64 = 8978.9;
pub const CU_KA1: f64 = 8047.8;

/// Photoabsorption knots for Cu: (energy eV, cm²/g). The K edge sits
/// between 8975 and 8979.5.
pub const CU_PHOTO: [(f64, f64); 6] = [
    (100.0, 1.0e5),
    (1000.0, 2000.0),
    (8975.0, 50.0),
    (8979.5, 400.0),
    (30000.0, 20.0),
    (100000.0, 1.0),
];

/// Scattering knots for Cu: (energy eV, coherent, incoherent).
pub const CU_SCATTER: [(f64, f64, f64); 4] = [
    (100.0, 10.0, 0.1),
    (1000.0, 5.0, 0.5),
    (10000.0, 1.0, 0.8),
    (100000.0, 0.1, 0.3),
];

pub const CHANTLER_SAMPLES: usize = 40;

/// Chantler energy grid for Cu: 1000 eV growing by 10% per sample.
pub fn chantler_energy(i: usize) -> f64 {
    1000.0 * 1.1_f64.powi(i as i32)
}

pub fn chantler_f1(e: f64) -> f64 {
    29.0 - 1.0e-4 * e
}

pub fn chantler_f2(e: f64) -> f64 {
    1.0e4 * (e / 1000.0).powf(-1.5)
}

pub fn chantler_mu_total(e: f64) -> f64 {
    5.0e3 * (e / 1000.0).powf(-2.5)
}

pub fn chantler_mu_photo(e: f64) -> f64 {
    0.9 * chantler_mu_total(e)
}

pub fn chantler_mu_incoh(e: f64) -> f64 {
    0.01 * (e / 1000.0).sqrt()
}

fn element(atomic_number: u16, symbol: &str, name: &str, molar_mass: f64, density: f64) -> ElementRecord {
    ElementRecord {
        atomic_number,
        symbol: symbol.to_string(),
        name: name.to_string(),
        molar_mass,
        density,
    }
}

fn level(element: &str, label: &str, edge: f64, yield_: f64, jump: f64) -> XrayLevelRecord {
    XrayLevelRecord {
        element: element.to_string(),
        iupac_symbol: label.to_string(),
        absorption_edge: edge,
        fluorescence_yield: yield_,
        jump_ratio: jump,
    }
}

fn line(
    element: &str,
    siegbahn: &str,
    initial: &str,
    final_level: &str,
    energy: f64,
    intensity: f64,
) -> XrayTransitionRecord {
    XrayTransitionRecord {
        element: element.to_string(),
        iupac_symbol: format!("{initial}-{final_level}"),
        siegbahn_symbol: siegbahn.to_string(),
        initial_level: initial.to_string(),
        final_level: final_level.to_string(),
        emission_energy: energy,
        intensity,
    }
}

fn ck(element: &str, initial: &str, final_level: &str, p: f64, total: f64) -> CosterKronigRecord {
    CosterKronigRecord {
        element: element.to_string(),
        initial_level: initial.to_string(),
        final_level: final_level.to_string(),
        transition_probability: p,
        total_transition_probability: total,
    }
}

fn photo(element: &str, knots: &[(f64, f64)]) -> PhotoabsorptionRecord {
    PhotoabsorptionRecord {
        element: element.to_string(),
        log_energy: knots.iter().map(|k| k.0.ln()).collect(),
        log_photoabsorption: knots.iter().map(|k| k.1.ln()).collect(),
        log_photoabsorption_spline: vec![0.0; knots.len()],
    }
}

fn scatter(element: &str, knots: &[(f64, f64, f64)]) -> ScatteringRecord {
    ScatteringRecord {
        element: element.to_string(),
        log_energy: knots.iter().map(|k| k.0.ln()).collect(),
        log_coherent_scatter: knots.iter().map(|k| k.1.ln()).collect(),
        log_coherent_scatter_spline: vec![0.0; knots.len()],
        log_incoherent_scatter: knots.iter().map(|k| k.2.ln()).collect(),
        log_incoherent_scatter_spline: vec![0.0; knots.len()],
    }
}

fn chantler_cu() -> ChantlerRecord {
    let energy: Vec<f64> = (0..CHANTLER_SAMPLES).map(chantler_energy).collect();
    let column = |f: fn(f64) -> f64| energy.iter().map(|&e| f(e)).collect::<Vec<f64>>();
    ChantlerRecord {
        element: "Cu".to_string(),
        sigma_mu: 105.5,
        mue_f2: 22.6,
        density: 8.96,
        corr_henke: 0.0,
        corr_cl35: 0.0,
        corr_nucl: 0.0,
        f1: column(chantler_f1),
        f2: column(chantler_f2),
        mu_photo: column(chantler_mu_photo),
        mu_incoh: column(chantler_mu_incoh),
        mu_total: column(chantler_mu_total),
        energy,
    }
}

fn waasmaier(z: u16, element: &str, ion: &str, scale: [f64; 5]) -> WaasmaierRecord {
    WaasmaierRecord {
        atomic_number: z,
        element: element.to_string(),
        ion: ion.to_string(),
        offset: 1.0,
        scale: scale.to_vec(),
        exponents: vec![4.0, 0.5, 12.0, 30.0, 80.0],
    }
}

fn width(z: u16, element: &str, edge: &str, width: f64) -> CoreWidthRecord {
    CoreWidthRecord {
        atomic_number: z,
        element: element.to_string(),
        edge: edge.to_string(),
        width,
    }
}

pub fn sample_database() -> XrayDatabase {
    XrayDatabase {
        version: vec![VersionRecord {
            tag: "test-1".to_string(),
            date: "2026-01-01".to_string(),
            notes: "synthetic".to_string(),
        }],
        elements: vec![
            element(1, "H", "Hydrogen", 1.008, 8.99e-5),
            element(26, "Fe", "Iron", 55.845, 7.874),
            element(29, "Cu", "Copper", 63.546, 8.96),
        ],
        xray_levels: vec![
            level("H", "K", 13.6, 0.0, 1.0),
            level("Fe", "K", 7112.0, 0.351, 8.1),
            level("Fe", "L3", 706.8, 0.0063, 3.1),
            level("Cu", "K", CU_K_EDGE, 0.441, 7.7),
            level("Cu", "L1", 1096.1, 0.001, 1.16),
            level("Cu", "L2", 951.0, 0.006, 1.4),
            level("Cu", "L3", 931.1, 0.016, 2.8),
        ],
        xray_transitions: vec![
            line("Fe", "Ka1", "K", "L3", 6403.8, 0.58),
            line("Cu", "Ka1", "K", "L3", CU_KA1, 0.577),
            line("Cu", "Ka2", "K", "L2", 8027.8, 0.294),
            line("Cu", "Kb1", "K", "M3", 8905.3, 0.0788),
            line("Cu", "La1", "L3", "M5", 929.7, 0.9),
            line("Cu", "Lb1", "L2,3", "M4", 949.8, 0.5),
            line("Cu", "Mz", "M1", "N3", 120.0, 0.01),
        ],
        coster_kronig: vec![
            ck("Cu", "L1", "L2", 0.1, 0.1),
            ck("Cu", "L1", "L3", 0.6, 0.681),
            ck("Cu", "L2", "L3", 0.1, 0.1),
        ],
        photoabsorption: vec![
            photo("Fe", &[(100.0, 8.0e4), (7110.0, 60.0), (7114.0, 450.0), (100000.0, 1.0)]),
            photo("Cu", &CU_PHOTO),
        ],
        scattering: vec![
            scatter("Fe", &[(100.0, 9.0, 0.1), (100000.0, 0.1, 0.3)]),
            scatter("Cu", &CU_SCATTER),
        ],
        chantler: vec![chantler_cu()],
        waasmaier: vec![
            waasmaier(26, "Fe", "Fe", [10.0, 8.0, 4.0, 2.0, 1.0]),
            waasmaier(26, "Fe", "Fe2+", [10.0, 7.0, 3.0, 2.0, 1.0]),
            waasmaier(26, "Fe", "Fe3+", [10.0, 6.0, 3.0, 2.0, 1.0]),
            waasmaier(29, "Cu", "Cu", [12.0, 8.0, 5.0, 2.0, 1.0]),
        ],
        keski_rahkonen_krause: vec![
            width(26, "Fe", "K", 1.19),
            width(26, "Fe", "L3", 0.2),
            width(29, "Cu", "K", 1.55),
            width(29, "Cu", "L1", 3.7),
            width(29, "Cu", "L3", 0.56),
        ],
    }
}

pub fn sample_db() -> XrayDb {
    sample_db_with(XrayDbConfig::default())
}

pub fn sample_db_with(config: XrayDbConfig) -> XrayDb {
    XrayDb::from_database(sample_database(), config).unwrap()
}
