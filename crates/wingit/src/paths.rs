//! Path resolution for the user-level wingit directory

use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Paths {
    pub home_wingit: PathBuf,
}

impl Paths {
    /// Resolve `~/.wingit`
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;
        Ok(Self::at(home.join(".wingit")))
    }

    pub fn at(root: impl AsRef<Path>) -> Self {
        Self {
            home_wingit: root.as_ref().to_path_buf(),
        }
    }

    /// Get config.json path
    pub fn config_file(&self) -> PathBuf {
        self.home_wingit.join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_new() {
        let paths = Paths::new().unwrap();
        assert!(paths.home_wingit.ends_with(".wingit"));
    }

    #[test]
    fn test_config_file() {
        let paths = Paths::at("/tmp/wingit-home");
        assert_eq!(
            paths.config_file(),
            PathBuf::from("/tmp/wingit-home/config.json")
        );
    }
}
