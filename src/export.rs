use crate::errors::SimulationError;
use crate::models::trajectory::Trajectory;
use chrono::Local;
use csv::WriterBuilder;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes each successful trajectory to
/// `<dir>/trajectory_<YYYY-MM-DD-HH-MM-SS>_<id>.csv`, one row per sample,
/// three columns x,y,z in meters. No header row; the column convention is
/// out-of-band. Failed satellites are skipped. Returns the written paths.
pub fn save_trajectories(
    dir: &Path,
    results: &HashMap<String, Result<Trajectory, SimulationError>>,
) -> Result<Vec<PathBuf>, SimulationError> {
    fs::create_dir_all(dir)?;
    let stamp = Local::now().format("%Y-%m-%d-%H-%M-%S");

    let mut written = Vec::new();
    for trajectory in results.values().filter_map(|r| r.as_ref().ok()) {
        let path = dir.join(format!(
            "trajectory_{}_{}.csv",
            stamp, trajectory.satellite_id
        ));
        let mut writer = WriterBuilder::new().has_headers(false).from_path(&path)?;
        for p in &trajectory.positions {
            writer.serialize((p.x, p.y, p.z))?;
        }
        writer.flush()?;
        written.push(path);
    }
    Ok(written)
}
