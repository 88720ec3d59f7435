use std::io::{self, Write};
use std::path::Path;

use crate::dynamics::ProjectileState;

/// Write trajectory samples in CSV format.
///
/// Columns: time, pos_x, pos_y, pos_z, vel_x, vel_y, vel_z, speed
pub fn write_trajectory<W: Write>(writer: &mut W, path: &[ProjectileState]) -> io::Result<()> {
    writeln!(writer, "time,pos_x,pos_y,pos_z,vel_x,vel_y,vel_z,speed")?;

    for s in path {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
            s.time,
            s.position.x, s.position.y, s.position.z,
            s.velocity.x, s.velocity.y, s.velocity.z,
            s.speed(),
        )?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: impl AsRef<Path>, trajectory: &[ProjectileState]) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_trajectory(&mut file, trajectory)?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    #[test]
    fn csv_output_has_header_and_rows() {
        let path = vec![
            ProjectileState {
                position: Vector3::new(0.0, 1.5, 0.0),
                velocity: Vector3::new(3.0, 4.0, 0.0),
                time: 0.0,
            },
            ProjectileState {
                position: Vector3::new(0.03, 1.54, 0.0),
                velocity: Vector3::new(3.0, 3.9, 0.0),
                time: 0.01,
            },
        ];

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &path).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("time,"));
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert_eq!(lines[1], "0.0000,0.0000,1.5000,0.0000,3.0000,4.0000,0.0000,5.0000");
        assert!(lines[2].starts_with("0.0100,0.0300,1.5400,"));
    }

    #[test]
    fn empty_path_writes_header_only() {
        let mut buf = Vec::new();
        write_trajectory(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }
}
