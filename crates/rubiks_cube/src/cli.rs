/// 3D Rubik's Cube simulator
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Show the unfolded 2D net instead of the 3D view.
    #[arg(long)]
    pub fallback: bool,
    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(long)]
    pub debug: bool,
    /// Seed for the scramble generator, for reproducible scrambles.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}
