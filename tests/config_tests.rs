/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Configured runs loaded from JSON files

use phonon_dsf::phonon::nacl_model;
use phonon_dsf::spectrum::{run_config, AmplitudeConfig, DsfConfig, PathReport, SpectrumError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_and_run() {
    let file = write_config(
        r#"{
            "temperature": 100.0,
            "mesh": [2, 2, 2],
            "n_points": 3,
            "g_points": [[7, 1, 1], [4, 0, 0]],
            "directions": [[0.5, 0.5, 0.5]],
            "amplitude": {"scattering_lengths": {"Na": 3.63, "Cl": 9.577}}
        }"#,
    );
    let config = DsfConfig::from_file(file.path()).unwrap();
    assert_eq!(config.g_points.len(), 2);

    let model = nacl_model().unwrap();
    let results = run_config(&model, &config).unwrap();
    assert_eq!(results.len(), 2);
    for r in &results {
        assert_eq!(r.result.intensities.dim(), (2, 6));
        assert_eq!(r.result.temperature, 100.0);
    }
    assert_eq!(results[1].path.g_point, [4.0, 0.0, 0.0]);

    let reports: Vec<PathReport> = results.iter().map(PathReport::from).collect();
    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["intensities"].as_array().unwrap().len(), 2);
    assert_eq!(json[0]["intensities"][0].as_array().unwrap().len(), 6);
}

#[test]
fn test_explicit_form_factors() {
    let file = write_config(
        r#"{
            "mesh": [2, 2, 2],
            "n_points": 2,
            "amplitude": {"form_factors": {
                "Na": [3.148690, 2.594987, 4.073989, 6.046925, 0.767888, 0.070139,
                       0.995612, 14.1226457, 0.968249, 0.217037, 0.045300],
                "Cl": [1.061802, 0.144727, 7.139886, 1.171795, 6.524271, 19.467656,
                       2.355626, 60.320301, 35.829404, 0.000436, -34.916604]
            }}
        }"#,
    );
    let config = DsfConfig::from_file(file.path()).unwrap();
    assert!(matches!(config.amplitude, AmplitudeConfig::FormFactors(_)));

    let from_file = run_config(&nacl_model().unwrap(), &config).unwrap();
    let builtin = DsfConfig {
        amplitude: AmplitudeConfig::Wk1995,
        ..config
    };
    let from_table = run_config(&nacl_model().unwrap(), &builtin).unwrap();
    assert_eq!(
        from_file[0].result.intensities,
        from_table[0].result.intensities
    );
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        DsfConfig::from_file(dir.path().join("absent.json")),
        Err(SpectrumError::Io(_))
    ));
}

#[test]
fn test_missing_species_in_config() {
    let config = DsfConfig {
        mesh: [1, 1, 1],
        amplitude: AmplitudeConfig::ScatteringLengths([("Na".to_string(), 3.63)].into()),
        ..DsfConfig::default()
    };
    assert!(matches!(
        run_config(&nacl_model().unwrap(), &config),
        Err(SpectrumError::Scattering(_))
    ));
}
