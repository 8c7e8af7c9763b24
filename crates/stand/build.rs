fn main() -> anyhow::Result<()> {
    let sizes = (500..10_000).step_by(1_000);
    let out_dir = loc_tally_model::out_dir_path();
    loc_tally_model::generate_data(&out_dir, sizes)?;
    Ok(())
}
