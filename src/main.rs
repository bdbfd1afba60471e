//! labelnoise CLI: corrupt a label file with pairflip or symmetric noise.

use clap::{ArgAction, Parser};
use labelnoise::config::{NoiseConfig, NoiseTopology};
use labelnoise::error::Result;
use labelnoise::utils::{parse_bool_str, parse_labels};
use ndarray::ArrayView1;
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "labelnoise")]
#[command(about = "Inject seeded label noise into a classification label file")]
#[command(version)]
struct Cli {
    /// Input file of integer labels, separated by whitespace or commas
    labels: PathBuf,

    /// JSON noise configuration; overrides the noise flags below
    #[arg(long)]
    config: Option<PathBuf>,

    /// Noise topology: pairflip or symmetric
    #[arg(long, default_value = "symmetric")]
    noise_type: String,

    /// Probability that a label is flipped
    #[arg(long, default_value = "0.2")]
    noise_rate: f64,

    /// Number of classes
    #[arg(long, default_value = "10")]
    nb_classes: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Fail if a positive noise rate flips no label (true/false)
    #[arg(long, default_value = "true", value_parser = parse_bool_str, action = ArgAction::Set)]
    require_flips: bool,

    /// Output file for noisy labels, one per line (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    /// Noise configuration from `--config`, or from the individual flags.
    fn noise_config(&self) -> Result<NoiseConfig> {
        if let Some(path) = &self.config {
            return NoiseConfig::from_json_file(path);
        }
        let topology: NoiseTopology = self.noise_type.parse()?;
        let mut config = NoiseConfig::new(topology, self.nb_classes, self.noise_rate)
            .with_require_flips(self.require_flips);
        config.seed = self.seed;
        config.validate()?;
        Ok(config)
    }
}

/// Write one label per line.
fn write_labels(out: &mut impl Write, labels: &ArrayView1<usize>) -> std::io::Result<()> {
    for label in labels.iter() {
        writeln!(out, "{label}")?;
    }
    out.flush()
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.noise_config()?;

    let labels = parse_labels(&std::fs::read_to_string(&cli.labels)?)?;
    let noisy = config.apply(&labels.view())?;

    match &cli.output {
        Some(path) => {
            let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
            write_labels(&mut out, &noisy.labels.view())?;
        }
        None => write_labels(&mut std::io::stdout().lock(), &noisy.labels.view())?,
    }

    match noisy.actual_noise_rate {
        Some(rate) => tracing::info!(
            n_labels = noisy.len(),
            actual_noise_rate = rate,
            "wrote noisy labels"
        ),
        None => tracing::info!(n_labels = noisy.len(), "noise rate is zero, labels unchanged"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelnoise::error::LabelNoiseError;
    use ndarray::array;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("labelnoise").chain(args.iter().copied()))
    }

    #[test]
    fn test_require_flips_defaults_to_true() {
        let cli = parse(&["labels.txt"]).unwrap();
        assert!(cli.require_flips);
        assert!(cli.noise_config().unwrap().require_flips);
    }

    #[test]
    fn test_require_flips_false_relaxes_invariant() {
        let cli = parse(&["labels.txt", "--require-flips", "false"]).unwrap();
        assert!(!cli.require_flips);
        assert!(!cli.noise_config().unwrap().require_flips);
    }

    #[test]
    fn test_require_flips_accepts_any_case() {
        let cli = parse(&["labels.txt", "--require-flips", "TRUE"]).unwrap();
        assert!(cli.require_flips);
    }

    #[test]
    fn test_require_flips_rejects_garbage() {
        assert!(parse(&["labels.txt", "--require-flips", "maybe"]).is_err());
    }

    #[test]
    fn test_flags_build_config() {
        let cli = parse(&[
            "labels.txt",
            "--noise-type",
            "pairflip",
            "--noise-rate",
            "0.45",
            "--nb-classes",
            "3",
            "--seed",
            "7",
        ])
        .unwrap();
        let config = cli.noise_config().unwrap();
        assert_eq!(config.topology, NoiseTopology::Pairflip);
        assert_eq!(config.nb_classes, 3);
        assert_eq!(config.noise_rate, 0.45);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_unknown_noise_type_flag() {
        let cli = parse(&["labels.txt", "--noise-type", "gaussian"]).unwrap();
        assert!(matches!(
            cli.noise_config(),
            Err(LabelNoiseError::UnsupportedTopology(_))
        ));
    }

    #[test]
    fn test_config_file_overrides_flags() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"topology": "pairflip", "nb_classes": 4, "noise_rate": 0.1, "seed": 3,
                "require_flips": false}"#,
        )
        .unwrap();
        file.flush().unwrap();

        let config_path = file.path().to_str().unwrap();
        let cli = parse(&[
            "labels.txt",
            "--config",
            config_path,
            "--noise-type",
            "symmetric",
            "--nb-classes",
            "9",
            "--require-flips",
            "true",
        ])
        .unwrap();
        let config = cli.noise_config().unwrap();
        assert_eq!(config.topology, NoiseTopology::Pairflip);
        assert_eq!(config.nb_classes, 4);
        assert_eq!(config.seed, Some(3));
        assert!(!config.require_flips);
    }

    #[test]
    fn test_write_labels_one_per_line() {
        let mut out = Vec::new();
        write_labels(&mut out, &array![1_usize, 0, 2].view()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n0\n2\n");
    }
}
