use loc_tally_model::lists::{self, LocationLists};

use crate::application::ports::Loader;
use crate::config::InputConfig;

/// Loads the two location lists from a delimiter-separated text file.
pub struct FileLoader {
    config: InputConfig,
}

impl FileLoader {
    pub fn new(config: &InputConfig) -> Self {
        let config = config.clone();
        Self { config }
    }
}

impl Loader for FileLoader {
    fn load(&self) -> anyhow::Result<LocationLists> {
        tracing::debug!("Reading input file {:?}", self.config.path);
        let lines = lists::read_lines(&self.config.path)?;
        let lists = LocationLists::from_lines(&lines, &self.config.delimiter)?;
        Ok(lists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loc_tally_model::lists::LoadError;

    fn write_test_file(file_name: &str, content: &str) -> anyhow::Result<std::path::PathBuf> {
        let file_dir = std::env::temp_dir().join("loc-tally");
        std::fs::create_dir_all(&file_dir)?;
        let file_path = file_dir.join(file_name);
        std::fs::write(&file_path, content)?;
        Ok(file_path)
    }

    #[test]
    fn loads_pairs_from_a_file() -> anyhow::Result<()> {
        let path = write_test_file("loader_round_trip.txt", "10   20\n-3   7\n")?;
        let config = InputConfig {
            path: path.clone(),
            delimiter: "   ".to_owned(),
        };

        let lists = FileLoader::new(&config).load()?;
        assert_eq!(lists.len(), 2);

        std::fs::remove_file(path)?;
        Ok(())
    }

    #[test]
    fn reads_crlf_files() -> anyhow::Result<()> {
        let path = write_test_file("loader_crlf.txt", "10   20\r\n30   40\r\n")?;
        let config = InputConfig {
            path: path.clone(),
            delimiter: "   ".to_owned(),
        };

        let lists = FileLoader::new(&config).load()?;
        assert_eq!(lists.len(), 2);

        std::fs::remove_file(path)?;
        Ok(())
    }

    #[test]
    fn missing_file_is_source_unavailable() {
        let config = InputConfig {
            path: "definitely/not/a/real/input".into(),
            delimiter: "   ".to_owned(),
        };

        let err = FileLoader::new(&config).load().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::SourceUnavailable(_))
        ));
    }
}
