use anyhow::{bail, Context, Result};
use boing::{Boundary, Playground, SceneConfigs, SceneKind, Snapshot, StepStats};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "boing")]
#[command(about = "Run the boing physics scenes headless and print what they do", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available scenes
    List,
    /// Step a scene and print periodic summaries
    Run {
        /// Scene name: balls, cloth or softbody
        scene: SceneKind,
        /// Number of frames to simulate
        #[arg(short, long, default_value_t = 600)]
        frames: u32,
        /// Print a summary every N frames
        #[arg(short, long, default_value_t = 60)]
        every: u32,
        /// YAML file overriding scene parameters
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_scene_file(path: &Path) -> Result<SceneConfigs<f64>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let configs = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(configs)
}

fn describe(frame: u32, snapshot: &Snapshot<f64>) -> String {
    let boundary = match snapshot.boundary {
        Boundary::Circle(c) => format!("circle r={:.1}", c.radius),
        Boundary::Floor(f) => format!("floor y={:.1}", f.y),
        Boundary::Open => "open".to_string(),
    };
    match snapshot.extent() {
        Some((min, max)) => format!(
            "frame {:>5}  bodies {:>3}  links {:>3}  extent ({:.1}, {:.1})..({:.1}, {:.1})  {}",
            frame,
            snapshot.bodies.len(),
            snapshot.links.len(),
            min.x,
            min.y,
            max.x,
            max.y,
            boundary,
        ),
        None => format!("frame {:>5}  empty  {}", frame, boundary),
    }
}

fn run(kind: SceneKind, frames: u32, every: u32, config: Option<&Path>) -> Result<()> {
    if every == 0 {
        bail!("--every must be at least 1");
    }
    let configs = match config {
        Some(path) => load_scene_file(path)?,
        None => SceneConfigs::default(),
    };
    let mut scene = Playground::from_configs(kind, &configs)
        .with_context(|| format!("building {}", kind))?;
    let dt = kind.default_timestep::<f64>().fixed_dt();
    let mut stats = StepStats::default();

    println!("{} ({}), dt = {:.4}", kind, kind.description(), dt);
    println!("{}", describe(0, &scene.snapshot()));
    for frame in 1..=frames {
        scene.step(dt, &mut stats);
        if frame % every == 0 {
            println!("{}", describe(frame, &scene.snapshot()));
        }
    }
    println!("{:#?}", stats);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List => {
            for kind in SceneKind::ALL {
                println!("{:<10} {}", kind, kind.description());
            }
            Ok(())
        }
        Commands::Run { scene, frames, every, config } => run(scene, frames, every, config.as_deref()),
    }
}
