use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::Context;
    use clap::{Parser, Subcommand};
    use pinecone_math::{Degrees, Quaternion, Radians, Vector3};

    #[derive(Debug, Parser)]
    #[command(about = "The Pinecone math library", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Compute the unsigned angle in degrees between two 3D vectors
        Angle {
            /// First vector, as comma-separated components
            #[arg(value_parser = parse_vector3, allow_hyphen_values = true)]
            from: Vector3,

            /// Second vector, as comma-separated components
            #[arg(value_parser = parse_vector3, allow_hyphen_values = true)]
            to: Vector3,
        },
        /// Compute the cross product of two 3D vectors
        Cross {
            #[arg(value_parser = parse_vector3, allow_hyphen_values = true)]
            a: Vector3,

            #[arg(value_parser = parse_vector3, allow_hyphen_values = true)]
            b: Vector3,
        },
        /// Compute the quaternion for a set of Euler angles
        Euler {
            /// Euler angles about the x-, y- and z-axis, as comma-separated
            /// components
            #[arg(value_parser = parse_vector3, allow_hyphen_values = true)]
            angles: Vector3,

            /// Interpret the angles as degrees rather than radians
            #[arg(short, long)]
            degrees: bool,
        },
        /// Rotate a 3D vector about an axis
        Rotate {
            /// Vector to rotate, as comma-separated components
            #[arg(value_parser = parse_vector3, allow_hyphen_values = true)]
            vector: Vector3,

            /// Rotation axis (need not be normalized)
            #[arg(short, long, value_parser = parse_vector3, allow_hyphen_values = true)]
            axis: Vector3,

            /// Rotation angle in degrees
            #[arg(short = 'd', long, allow_negative_numbers = true)]
            angle: f32,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Angle { from, to } => {
                let angle = pinecone_log::with_timing_info_logging!(
                    "Computing angle between {} and {}", from, to; {
                    from.angle_to(&to)
                });
                println!("{angle}");
            }
            Command::Cross { a, b } => {
                println!("{}", a.cross(&b));
            }
            Command::Euler { angles, degrees } => {
                let angles = if degrees {
                    angles.mapped(|angle| Radians::from(Degrees(angle)).radians())
                } else {
                    angles
                };
                let rotation = pinecone_log::with_timing_info_logging!(
                    "Converting Euler angles {}", angles; {
                    Quaternion::from_euler_angles(&angles)
                });
                println!("{rotation}");
            }
            Command::Rotate {
                vector,
                axis,
                angle,
            } => {
                if axis.normalized() == Vector3::zeros() {
                    anyhow::bail!("The rotation axis {axis} has no direction");
                }
                let rotation = Quaternion::from_axis_angle(&axis, Degrees(angle).radians());
                let rotated = pinecone_log::with_trace_logging!(
                    "Rotating {} by {}", vector, rotation;
                    rotation.rotate_vector(&vector)
                );
                println!("{rotated}");
            }
        }

        Ok(())
    }

    fn parse_vector3(arg: &str) -> Result<Vector3> {
        let components = arg
            .split(',')
            .map(|component| {
                component
                    .trim()
                    .parse::<f32>()
                    .with_context(|| format!("Invalid vector component `{component}`"))
            })
            .collect::<Result<Vec<_>>>()?;

        match *components.as_slice() {
            [x, y, z] => Ok(Vector3::new(x, y, z)),
            _ => anyhow::bail!("Expected 3 vector components, got {}", components.len()),
        }
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
