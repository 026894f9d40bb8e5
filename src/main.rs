use std::{io, path::Path};

use clap::Parser;

use linefit::{PointSet, RegressionConfig, plot};

const DATA_PATH: &str = "data.txt";
const PLOT_PATH: &str = "output.png";
const LEARNING_RATE: f64 = 0.01;

/// Fits a straight line to the points in data.txt and plots both to
/// output.png.
#[derive(Parser)]
#[command(name = "linefit")]
struct Cli {
    /// Number of gradient-descent iterations.
    #[arg(short = 'n', default_value_t = 1000)]
    iterations: usize,
}

fn main() -> io::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let points = PointSet::from_path(DATA_PATH)?;
    let config = RegressionConfig::new(LEARNING_RATE, cli.iterations);
    let model = config.fit(&points)?;
    plot::render(&points, &model, Path::new(PLOT_PATH))?;

    Ok(())
}
