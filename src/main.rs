//! Circle Drop entry point
//!
//! Headless native driver: a fixed-rate ticker stands in for the browser's
//! animation frames, and frames are optionally dumped as JSON lines.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::{BufWriter, Write};
    use std::path::PathBuf;

    use clap::Parser;

    use circle_drop::consts::TARGET_HZ;
    use circle_drop::platform::{FixedRateTicker, drive};
    use circle_drop::renderer::{JsonLinesRenderer, NullRenderer, Renderer};
    use circle_drop::{Result, SimConfig, Simulation};

    /// Falling circles in a box, driven at a fixed frame rate
    #[derive(Parser, Debug)]
    #[command(name = "circle-drop", version)]
    pub struct Args {
        /// JSON config file (defaults are used when omitted)
        pub config: Option<PathBuf>,

        /// Seed for the spawn RNG
        #[arg(long, default_value_t = 0x5eed)]
        pub seed: u64,

        /// Number of frames to run
        #[arg(long, default_value_t = 600)]
        pub frames: u64,

        /// Target frame rate
        #[arg(long, default_value_t = TARGET_HZ)]
        pub hz: f64,

        /// Write every frame to stdout as a JSON line
        #[arg(long)]
        pub dump: bool,
    }

    pub fn run(args: Args) -> Result<()> {
        let config = match &args.config {
            Some(path) => SimConfig::load(path)?,
            None => SimConfig::default(),
        };
        let mut sim = Simulation::new(config, args.seed)?;
        let mut ticker = FixedRateTicker::new(args.hz).with_max_frames(args.frames);

        let stdout = std::io::stdout();
        let mut json = JsonLinesRenderer::new(BufWriter::new(stdout.lock()));
        let mut null = NullRenderer;
        let renderer: &mut dyn Renderer = if args.dump { &mut json } else { &mut null };

        log::info!(
            "Running {} frames at {} Hz (seed {})",
            args.frames,
            args.hz,
            args.seed
        );
        let ticks = drive(&mut sim, &mut ticker, renderer);

        if json.failed() {
            log::warn!("Some frames could not be written to stdout");
        }
        json.into_inner().flush()?;

        log::info!(
            "Done: {ticks} ticks, {} bodies in {}x{}, kinetic energy {:.1}",
            sim.body_count(),
            sim.arena().width,
            sim.arena().height,
            sim.kinetic_energy()
        );
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_defaults() {
            let args = Args::try_parse_from(["circle-drop"]).unwrap();
            assert!(args.config.is_none());
            assert_eq!(args.seed, 0x5eed);
            assert_eq!(args.frames, 600);
            assert_eq!(args.hz, TARGET_HZ);
            assert!(!args.dump);
        }

        #[test]
        fn test_all_flags() {
            let args = Args::try_parse_from([
                "circle-drop",
                "scene.json",
                "--seed",
                "7",
                "--frames",
                "30",
                "--hz",
                "120",
                "--dump",
            ])
            .unwrap();
            assert_eq!(args.config, Some(PathBuf::from("scene.json")));
            assert_eq!(args.seed, 7);
            assert_eq!(args.frames, 30);
            assert_eq!(args.hz, 120.0);
            assert!(args.dump);
        }

        #[test]
        fn test_rejects_bad_input() {
            assert!(Args::try_parse_from(["circle-drop", "--bogus"]).is_err());
            assert!(Args::try_parse_from(["circle-drop", "--seed", "abc"]).is_err());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Circle Drop (native) starting...");

    if let Err(e) = native::run(native::Args::parse()) {
        log::error!("{e}");
        eprintln!("circle-drop: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is driven by the host page
}
