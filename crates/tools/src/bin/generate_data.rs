use clap::Parser;

/// Writes `data_<size>.txt` pair files into `data_dir`, one per requested
/// size, in the delimiter format `tally` reads.
fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    let data_dir = &config.data_dir;
    let sizes = config.sizes.iter().copied();
    std::fs::create_dir_all(data_dir)?;
    loc_tally_model::generate_data(data_dir, sizes)?;
    Ok(())
}

#[derive(Clone, Debug, Parser)]
#[command()]
struct Config {
    #[arg()]
    data_dir: Box<std::path::Path>,
    #[arg()]
    sizes: Vec<usize>,
}
