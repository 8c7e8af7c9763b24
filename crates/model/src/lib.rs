pub mod lists;
pub mod pairs;

use std::io::Write;

pub fn out_dir_path() -> Box<std::path::Path> {
    let out_dir = env!("OUT_DIR");
    std::path::Path::new(out_dir).into()
}

pub fn generate_data(
    out_dir: &std::path::Path,
    sizes: impl Iterator<Item = usize>,
) -> anyhow::Result<()> {
    for size in sizes {
        let file_name = format!("data_{}.txt", size);
        let file_path = out_dir.join(file_name.as_str());
        if let Ok(file) = std::fs::File::create_new(file_path) {
            write_data_file(&file, size)?;
        }
    }
    Ok(())
}

fn write_data_file(file: &std::fs::File, size: usize) -> anyhow::Result<()> {
    let mut writer = std::io::BufWriter::new(file);
    let pairs = pairs::PairGenerator::new();
    for (left, right) in pairs.take(size) {
        writeln!(writer, "{left}{}{right}", lists::DEFAULT_DELIMITER)?;
    }
    Ok(())
}

pub fn list_data_files() -> anyhow::Result<impl Iterator<Item = (u64, std::path::PathBuf)>> {
    // Iterate over the entries eagerly so io errors surface here instead of
    // inside a consumer holding an iterator of unwrapped paths.

    let out_dir = out_dir_path();

    let mut files = vec![];
    for entry in std::fs::read_dir(out_dir)? {
        let path = entry?.path();
        if path.is_file() {
            let size = get_size(&path)?;
            files.push((size, path));
        }
    }

    files.sort();

    Ok(files.into_iter())
}

fn get_size(path: &std::path::Path) -> anyhow::Result<u64> {
    let Some(stem) = path.file_stem() else {
        anyhow::bail!("invalid data file path: {}", path.display());
    };
    let Some(stem) = stem.to_str() else {
        anyhow::bail!("non ascii character in data file path");
    };
    let size = stem[5..].parse::<u64>()?;
    Ok(size)
}
