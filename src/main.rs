use leoprop::export::save_trajectories;
use leoprop::physics::orbital::circular_orbit_state;
use leoprop::{NoControl, PhysicalConstants, Satellite, Simulator};
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    let constants = PhysicalConstants::default();

    let (pos_a, vel_a) = circular_orbit_state(constants.r_earth + 500e3, 0.0, constants.mu);
    let sat_a = Satellite::new("leo-500", pos_a, vel_a, 500.0);

    let (pos_b, vel_b) = circular_orbit_state(
        constants.r_earth + 520e3,
        51.6_f64.to_radians(),
        constants.mu,
    );
    let sat_b = Satellite::new("iss-like", pos_b, vel_b, 420.0);

    let simulator =
        Simulator::new(vec![sat_a, sat_b], Box::new(NoControl)).with_constants(constants);

    let tf = 3;
    let results = simulator.run(tf);

    for (id, result) in &results {
        match result {
            Ok(trajectory) => {
                if let (Some(first), Some(last)) = (trajectory.first(), trajectory.last()) {
                    println!(
                        "{}: {} samples over {} orbits, closure error {:.1} m",
                        id,
                        trajectory.len(),
                        tf,
                        (last - first).magnitude()
                    );
                }
            }
            Err(e) => eprintln!("{}: propagation failed: {}", id, e),
        }
    }

    let written = save_trajectories(Path::new("output"), &results)?;
    for path in &written {
        println!("Trajectory data has been written to {}", path.display());
    }

    Ok(())
}
