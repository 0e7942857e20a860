use std::{collections::HashMap, env, fs, path::PathBuf};

use anyhow::{Context, Result};

/// Where the studio keeps its per-user files. Everything hangs off the
/// config directory: patterns, persisted outputs and logs.
#[derive(Debug, Clone)]
pub struct StudioPaths {
    pub config_dir: PathBuf,
    pub patterns_dir: PathBuf,
    pub log_dir: PathBuf,
}

/// Resolution order for each path: CLI flag, then environment, then the
/// optional `studio.toml` in the config directory, then the built-in
/// default.
pub fn resolve_paths(
    cli_config_dir: Option<PathBuf>,
    cli_patterns_dir: Option<PathBuf>,
) -> Result<StudioPaths> {
    resolve_paths_from(
        cli_config_dir,
        cli_patterns_dir,
        env::var_os("PATTERN_STUDIO_CONFIG_DIR").map(PathBuf::from),
        env::var_os("PATTERN_STUDIO_PATTERNS_DIR").map(PathBuf::from),
    )
}

fn resolve_paths_from(
    cli_config_dir: Option<PathBuf>,
    cli_patterns_dir: Option<PathBuf>,
    env_config_dir: Option<PathBuf>,
    env_patterns_dir: Option<PathBuf>,
) -> Result<StudioPaths> {
    let config_dir = match cli_config_dir.or(env_config_dir) {
        Some(dir) => dir,
        None => default_config_dir()?,
    };

    let mut patterns_dir = config_dir.join("patterns");
    if let Ok(raw) = fs::read_to_string(config_dir.join("studio.toml")) {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("patterns_dir") {
                patterns_dir = PathBuf::from(v);
            }
        }
    }
    if let Some(dir) = env_patterns_dir {
        patterns_dir = dir;
    }
    if let Some(dir) = cli_patterns_dir {
        patterns_dir = dir;
    }

    let log_dir = config_dir.join("logs");
    Ok(StudioPaths {
        config_dir,
        patterns_dir,
        log_dir,
    })
}

fn default_config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("unable to resolve the per-user config directory")?;
    Ok(base.join("pattern-studio"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_everything_from_the_config_dir_by_default() {
        let paths = resolve_paths_from(Some(PathBuf::from("/tmp/studio")), None, None, None)
            .expect("resolve");
        assert_eq!(paths.config_dir, PathBuf::from("/tmp/studio"));
        assert_eq!(paths.patterns_dir, PathBuf::from("/tmp/studio/patterns"));
        assert_eq!(paths.log_dir, PathBuf::from("/tmp/studio/logs"));
    }

    #[test]
    fn cli_flags_win_over_environment() {
        let paths = resolve_paths_from(
            Some(PathBuf::from("/cli/config")),
            Some(PathBuf::from("/cli/patterns")),
            Some(PathBuf::from("/env/config")),
            Some(PathBuf::from("/env/patterns")),
        )
        .expect("resolve");
        assert_eq!(paths.config_dir, PathBuf::from("/cli/config"));
        assert_eq!(paths.patterns_dir, PathBuf::from("/cli/patterns"));
    }

    #[test]
    fn environment_overrides_the_default_patterns_dir() {
        let paths = resolve_paths_from(
            Some(PathBuf::from("/cfg")),
            None,
            None,
            Some(PathBuf::from("/elsewhere/patterns")),
        )
        .expect("resolve");
        assert_eq!(paths.patterns_dir, PathBuf::from("/elsewhere/patterns"));
    }

    #[test]
    fn studio_toml_can_relocate_the_patterns_dir() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join("studio.toml"),
            "patterns_dir = \"/from/file\"\n",
        )
        .expect("write toml");

        let paths = resolve_paths_from(Some(dir.path().to_path_buf()), None, None, None)
            .expect("resolve");
        assert_eq!(paths.patterns_dir, PathBuf::from("/from/file"));
    }

    #[test]
    fn malformed_studio_toml_is_ignored() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("studio.toml"), "patterns_dir = [broken").expect("write toml");

        let paths = resolve_paths_from(Some(dir.path().to_path_buf()), None, None, None)
            .expect("resolve");
        assert_eq!(paths.patterns_dir, dir.path().join("patterns"));
    }
}
