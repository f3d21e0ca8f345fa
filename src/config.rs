use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct UserdbConfig {
    pub database: Option<String>,
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("userdb.toml")
}

pub fn default_database_path() -> PathBuf {
    PathBuf::from("users.db")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<UserdbConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: UserdbConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

/// `--database` wins over the config file, which wins over `users.db`.
pub fn resolve_database_path(cli: Option<PathBuf>, config: Option<&UserdbConfig>) -> PathBuf {
    cli.or_else(|| config.and_then(|c| c.database.as_ref()).map(PathBuf::from))
        .unwrap_or_else(default_database_path)
}

pub fn ensure_db_dir(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_config(Some(dir.path().join("userdb.toml").as_path())).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_reads_database_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("userdb.toml");
        std::fs::write(&path, "database = \"data/people.db\"\n").unwrap();

        let expected = UserdbConfig {
            database: Some("data/people.db".to_string()),
        };
        assert_eq!(load_config(Some(path.as_path())).unwrap(), Some(expected));
    }

    #[test]
    fn test_empty_file_has_no_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("userdb.toml");
        std::fs::write(&path, "").unwrap();

        assert_eq!(load_config(Some(path.as_path())).unwrap(), Some(UserdbConfig::default()));
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("userdb.toml");
        std::fs::write(&path, "database = [").unwrap();

        assert!(load_config(Some(path.as_path())).is_err());
    }

    #[test]
    fn test_database_path_precedence() {
        let config = UserdbConfig {
            database: Some("from-config.db".to_string()),
        };

        assert_eq!(
            resolve_database_path(Some(PathBuf::from("cli.db")), Some(&config)),
            PathBuf::from("cli.db")
        );
        assert_eq!(
            resolve_database_path(None, Some(&config)),
            PathBuf::from("from-config.db")
        );
        assert_eq!(
            resolve_database_path(None, Some(&UserdbConfig::default())),
            PathBuf::from("users.db")
        );
        assert_eq!(resolve_database_path(None, None), PathBuf::from("users.db"));
    }

    #[test]
    fn test_ensure_db_dir_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("deeper").join("users.db");

        ensure_db_dir(&db_path).unwrap();
        assert!(db_path.parent().unwrap().is_dir());

        ensure_db_dir(Path::new("users.db")).unwrap();
    }
}
