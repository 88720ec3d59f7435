use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;

use crate::analysis::FlightStats;
use crate::dynamics::PhysicsParams;
use crate::error::IoError;
use crate::sim::SimulationResult;

// ---------------------------------------------------------------------------
// Parameter files
// ---------------------------------------------------------------------------

/// Parse and validate a parameter set. Missing fields take the cannon
/// preset's values.
pub fn read_params<R: Read>(reader: R) -> Result<PhysicsParams, IoError> {
    let params: PhysicsParams = serde_json::from_reader(reader)?;
    params.validate()?;
    Ok(params)
}

pub fn read_params_file(path: impl AsRef<Path>) -> Result<PhysicsParams, IoError> {
    read_params(BufReader::new(File::open(path)?))
}

// ---------------------------------------------------------------------------
// Result reports
// ---------------------------------------------------------------------------

/// Summary fields of a result, without the path.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub max_range: f64,
    pub max_height: f64,
    pub time_of_flight: f64,
    pub impact_velocity: f64,
}

impl From<&SimulationResult> for Summary {
    fn from(r: &SimulationResult) -> Self {
        Summary {
            max_range: r.max_range,
            max_height: r.max_height,
            time_of_flight: r.time_of_flight,
            impact_velocity: r.impact_velocity,
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum Outcome<'a> {
    Full(&'a SimulationResult),
    Summary(Summary),
}

#[derive(Serialize)]
struct Report<'a> {
    mode: &'a str,
    params: &'a PhysicsParams,
    result: Outcome<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stats: Option<FlightStats>,
}

/// Write a pretty-printed JSON report: parameters, summary, secondary
/// statistics, and the full path when `include_path` is set.
pub fn write_report<W: Write>(
    writer: W,
    mode: &str,
    params: &PhysicsParams,
    result: &SimulationResult,
    include_path: bool,
) -> Result<(), IoError> {
    let report = Report {
        mode,
        params,
        result: if include_path {
            Outcome::Full(result)
        } else {
            Outcome::Summary(Summary::from(result))
        },
        stats: FlightStats::from_result(result),
    };
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}

pub fn write_report_file(
    path: impl AsRef<Path>,
    mode: &str,
    params: &PhysicsParams,
    result: &SimulationResult,
    include_path: bool,
) -> Result<(), IoError> {
    let mut file = BufWriter::new(File::create(path)?);
    write_report(&mut file, mode, params, result, include_path)?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::presets::LaunchMode;
    use crate::sim::simulate;

    #[test]
    fn params_file_is_validated() {
        let json = r#"{ "mass": 0, "initialVelocity": 20 }"#;
        match read_params(json.as_bytes()) {
            Err(IoError::Config(ConfigError::NonPositiveMass(m))) => assert_eq!(m, 0.0),
            other => panic!("expected mass error, got {:?}", other),
        }
    }

    #[test]
    fn malformed_params_are_json_errors() {
        assert!(matches!(read_params("{ mass: ".as_bytes()), Err(IoError::Json(_))));
    }

    #[test]
    fn params_read_with_vectors() {
        let json = r#"{
            "gravity": 3.71, "windSpeed": { "x": 2, "y": 0, "z": -1 },
            "mass": 0.5, "launchAngle": 60
        }"#;
        let p = read_params(json.as_bytes()).unwrap();
        assert_eq!(p.gravity, 3.71);
        assert_eq!(p.wind_speed.z, -1.0);
        assert_eq!(p.launch_angle, 60.0);
    }

    #[test]
    fn summary_report_omits_path() {
        let p = LaunchMode::Throw.params();
        let r = simulate(&p).unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, "THROW", &p, &r, false).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["mode"], "THROW");
        assert_eq!(v["params"]["initialVelocity"], 40.0);
        assert_eq!(v["result"]["maxRange"], r.max_range);
        assert!(v["result"].get("path").is_none());
        assert!(v["stats"]["impactAngle"].is_number());
    }

    #[test]
    fn full_report_carries_path() {
        let p = LaunchMode::Kick.params();
        let r = simulate(&p).unwrap();
        let mut buf = Vec::new();
        write_report(&mut buf, "KICK", &p, &r, true).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let path = v["result"]["path"].as_array().unwrap();
        assert_eq!(path.len(), r.path.len());
        assert_eq!(v["result"]["timeOfFlight"], r.time_of_flight);
        assert_eq!(path[3]["position"]["y"], r.path[3].position.y);
        assert_eq!(path[3]["velocity"]["x"], r.path[3].velocity.x);
    }
}
