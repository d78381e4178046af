use aether_release::{Packager, ReleaseConfig};
use anyhow::Context;

use super::args::PackageArgs;

/// Load the config file (or the built-in release) and apply flag overrides.
pub fn load_config(args: &PackageArgs) -> anyhow::Result<ReleaseConfig> {
    tracing::debug!(config = ?args.config, sources = args.sources.len(), "loading release config");
    let mut config = match &args.config {
        Some(path) => ReleaseConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ReleaseConfig::default(),
    };

    if let Some(output) = &args.output {
        config.output_zip_name = output.clone();
    }
    if let Some(dir) = &args.release_dir {
        config.release_dir_name = dir.clone();
    }
    for (name, path) in &args.sources {
        config = config
            .with_source(name, path)
            .with_context(|| format!("invalid --source {}={}", name, path.display()))?;
    }

    config.validate()?;
    Ok(config)
}

pub fn build_packager(args: &PackageArgs) -> anyhow::Result<Packager> {
    let config = load_config(args)?;
    let packager = Packager::new(config);
    Ok(match &args.base_dir {
        Some(dir) => packager.with_base_dir(dir),
        None => packager,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_without_flags() {
        let config = load_config(&PackageArgs::default()).unwrap();
        assert_eq!(config, ReleaseConfig::default());
    }

    #[test]
    fn test_flag_overrides() {
        let args = PackageArgs {
            output: Some("nightly.zip".into()),
            release_dir: Some("staging".into()),
            sources: vec![("AetherGUI.dll".into(), PathBuf::from("build/gui.dll"))],
            ..PackageArgs::default()
        };
        let config = load_config(&args).unwrap();
        assert_eq!(config.output_zip_name, "nightly.zip");
        assert_eq!(config.release_dir_name, "staging");
        assert!(!config.manifest.get("AetherGUI.dll").unwrap().is_placeholder());
    }

    #[test]
    fn test_unknown_source_name_is_config_error() {
        let args = PackageArgs {
            sources: vec![("nope.dll".into(), PathBuf::from("x"))],
            ..PackageArgs::default()
        };
        let err = load_config(&args).unwrap_err();
        assert_eq!(crate::exit_codes::for_error(&err), crate::exit_codes::CONFIG_ERROR);
    }

    #[test]
    fn test_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("release.yaml");
        std::fs::write(
            &path,
            "output_zip_name: custom.zip\nmanifest:\n  - name: A.bin\n    description: desc A\n",
        )
        .unwrap();

        let args = PackageArgs {
            config: Some(path),
            ..PackageArgs::default()
        };
        let config = load_config(&args).unwrap();
        assert_eq!(config.output_zip_name, "custom.zip");
        assert_eq!(config.manifest.len(), 1);
    }
}
