use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use kind_metadata::Shape;
use std::{env, path::PathBuf};

/// Centralized CLI configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub pretty: bool,
    pub default_shape: Shape,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Decode, normalize and inspect kind metadata")]
pub struct Args {
    /// Pretty-print JSON output (overrides KINDMETA_PRETTY)
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Decode a payload and print its normalized encoding
    Decode {
        /// `metadata` or `kube-object` (overrides KINDMETA_SHAPE)
        #[arg(long)]
        shape: Option<Shape>,
        /// Input file; stdin when omitted or `-`
        input: Option<PathBuf>,
    },
    /// Decode full metadata and print its API-server subset
    Project { input: Option<PathBuf> },
    /// Split a raw API server `metadata` object into modeled and extra fields
    Split { input: Option<PathBuf> },
    /// Print the JSON Schema for a metadata shape
    Schema {
        #[arg(long)]
        shape: Option<Shape>,
    },
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig and the command to run.
    pub fn from_env_and_args() -> Result<(Self, Command)> {
        let args = Args::parse();
        let cfg = Self::resolve(&args, |key| env::var(key).ok())?;
        Ok((cfg, args.command))
    }

    /// Merge CLI args over values produced by `lookup`.
    pub fn resolve(args: &Args, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // --- Environment fallback ---
        let env_pretty = match lookup("KINDMETA_PRETTY") {
            Some(value) => parse_bool(&value)
                .with_context(|| format!("parsing KINDMETA_PRETTY value `{}`", value))?,
            None => false,
        };
        let env_shape = match lookup("KINDMETA_SHAPE") {
            Some(value) => value
                .parse::<Shape>()
                .with_context(|| format!("parsing KINDMETA_SHAPE value `{}`", value))?,
            None => Shape::Metadata,
        };

        // --- Merge ---
        Ok(Self {
            pretty: args.pretty || env_pretty,
            default_shape: env_shape,
        })
    }

    /// Shape given on the command line, else the configured default.
    pub fn shape(&self, flag: Option<Shape>) -> Shape {
        flag.unwrap_or(self.default_shape)
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("expected a boolean, got `{}`", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("kindmeta").chain(argv.iter().copied())).unwrap()
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = AppConfig::resolve(&args(&["schema"]), env(&[])).unwrap();
        assert_eq!(
            cfg,
            AppConfig {
                pretty: false,
                default_shape: Shape::Metadata
            }
        );
    }

    #[test]
    fn env_supplies_defaults_and_flags_win() {
        let lookup = env(&[("KINDMETA_PRETTY", "1"), ("KINDMETA_SHAPE", "kube-object")]);
        let parsed = args(&["decode", "--shape", "metadata", "in.json"]);
        let cfg = AppConfig::resolve(&parsed, lookup).unwrap();

        assert!(cfg.pretty);
        assert_eq!(cfg.default_shape, Shape::KubeObjectMetadata);
        let Command::Decode { shape, input } = parsed.command else {
            panic!("expected decode");
        };
        assert_eq!(cfg.shape(shape), Shape::Metadata);
        assert_eq!(input, Some(PathBuf::from("in.json")));
    }

    #[test]
    fn malformed_env_values_are_reported() {
        let err = AppConfig::resolve(&args(&["schema"]), env(&[("KINDMETA_PRETTY", "maybe")]))
            .unwrap_err();
        assert!(format!("{err:#}").contains("KINDMETA_PRETTY"));

        let err = AppConfig::resolve(&args(&["schema"]), env(&[("KINDMETA_SHAPE", "pod")]))
            .unwrap_err();
        assert!(format!("{err:#}").contains("KINDMETA_SHAPE"));
    }

    #[test]
    fn global_pretty_flag_after_subcommand() {
        let cfg = AppConfig::resolve(&args(&["split", "--pretty"]), env(&[])).unwrap();
        assert!(cfg.pretty);
    }
}
