use airfoil_rs::airfoil::FoilGeometry;
use airfoil_rs::buffers::FoilBuffers;
use airfoil_rs::config::GeneratorConfig;
use std::env;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: airfoil [--config <path>] <designation>...";

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1).peekable();
    let config = if args.peek().map(String::as_str) == Some("--config") {
        args.next();
        let Some(path) = args.next() else {
            error!("{}", USAGE);
            return ExitCode::FAILURE;
        };
        match GeneratorConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                error!(%path, error = %e, "could not load configuration");
                return ExitCode::FAILURE;
            }
        }
    } else {
        GeneratorConfig::default()
    };

    let designations: Vec<String> = args.collect();
    if designations.is_empty() {
        error!("{}", USAGE);
        return ExitCode::FAILURE;
    }

    let mut buffers = FoilBuffers::new(config);
    for designation in designations.iter() {
        // Rejections are logged by the buffers and the previous geometry is kept
        if let Ok(geometry) = buffers.regenerate(designation) {
            summarize(designation, &geometry);
        }
    }

    ExitCode::SUCCESS
}

fn summarize(designation: &str, geometry: &FoilGeometry) {
    info!(
        designation,
        outline = geometry.outline.len(),
        camber = geometry.camber.len(),
        "NACA 4 series"
    );

    if let [leading, trailing] = &geometry.chord[..] {
        info!(
            "chord: ({:.5}, {:.5}) -> ({:.5}, {:.5})",
            leading.x, leading.y, trailing.x, trailing.y
        );
    }

    if let Some((lo, hi)) = geometry.bounds() {
        info!(
            "bounds: x [{:.5}, {:.5}], y [{:.5}, {:.5}]",
            lo.x, hi.x, lo.y, hi.y
        );
    }
}
