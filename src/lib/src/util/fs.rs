use std::fs;
use std::path::{Path, PathBuf};

use crate::constants;
use crate::error::PagePatchError;

/// $HOME/.config/pagepatch
pub fn pagepatch_config_dir() -> Result<PathBuf, PagePatchError> {
    match dirs::home_dir() {
        Some(home_dir) => Ok(home_dir
            .join(constants::CONFIG_DIR)
            .join(constants::PAGEPATCH)),
        None => Err(PagePatchError::config_dir_not_found()),
    }
}

pub fn read_from_path(path: &Path) -> Result<String, PagePatchError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(err) => {
            log::debug!("read_from_path {:?} failed: {}", path, err);
            Err(PagePatchError::basic_str(format!(
                "Could not read file {}",
                path.display()
            )))
        }
    }
}

pub fn write_to_path(path: &Path, value: impl AsRef<str>) -> Result<(), PagePatchError> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, value.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::PagePatchError;
    use crate::util;

    #[test]
    fn test_write_then_read_creates_parent_dirs() -> Result<(), PagePatchError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("config.toml");

        util::fs::write_to_path(&path, "api_host = \"http://localhost\"\n")?;
        let contents = util::fs::read_from_path(&path)?;

        assert_eq!(contents, "api_host = \"http://localhost\"\n");
        Ok(())
    }

    #[test]
    fn test_read_missing_file_is_error() {
        let result = util::fs::read_from_path(std::path::Path::new("does/not/exist.toml"));
        assert!(result.is_err());
    }
}
