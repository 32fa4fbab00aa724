//! Command-line entry point: grows a disk-confined tree and saves it as SVG.
//!
//! Growth parameters come from [`Config::default`], optionally replaced by
//! a JSON file (`--config`) and then overridden by individual flags. The
//! loop runs for `--duration-seconds` (60 by default) and/or
//! `--max-iterations` growth calls.

mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use grow_core::config::Config;
use grow_core::driver::{Budget, Driver};
use grow_core::sampler::RandomSampler;
use grow_core::tree::Tree;
use rand::SeedableRng;
use rand::rngs::StdRng;
use render::SvgStyle;
use tracing_subscriber::EnvFilter;

const DEFAULT_DURATION_SECS: f64 = 60.0;

#[derive(Parser, Debug)]
#[command(name = "disk_tree")]
#[command(about = "Grow a non-crossing branching tree inside a disk and draw it as SVG")]
struct Cli {
    /// Output SVG path
    #[arg(default_value = "tree.svg")]
    output: PathBuf,

    /// JSON file with growth parameters; flags below take precedence
    #[arg(long)]
    config: Option<PathBuf>,

    /// Radius of the bounding disk
    #[arg(long)]
    radius: Option<f64>,

    /// RNG seed; a random one is chosen and logged when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Wall-clock growth budget
    #[arg(long)]
    duration_seconds: Option<f64>,

    /// Maximum number of growth calls
    #[arg(long)]
    max_iterations: Option<u64>,

    /// Margin around the disk in the drawing
    #[arg(long, default_value_t = 1.0)]
    border: f64,

    #[arg(long, default_value_t = 0.01)]
    stroke_width: f64,

    /// Log growth progress every N calls at debug level (0 disables it)
    #[arg(long, default_value_t = 1000)]
    progress_every: u64,
}

impl Cli {
    fn growth_config(&self) -> Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => load_config(path)?,
            None => Config::default(),
        };
        if let Some(radius) = self.radius {
            cfg.disk_radius = radius;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// With no limit given, growth runs for [`DEFAULT_DURATION_SECS`].
    fn budget(&self) -> Result<Budget> {
        let duration = match (self.duration_seconds, self.max_iterations) {
            (None, None) => Some(Duration::from_secs_f64(DEFAULT_DURATION_SECS)),
            (Some(secs), _) => Some(
                Duration::try_from_secs_f64(secs)
                    .with_context(|| format!("invalid --duration-seconds {secs}"))?,
            ),
            (None, Some(_)) => None,
        };
        Ok(Budget {
            duration,
            max_iterations: self.max_iterations,
        })
    }

    fn style(&self) -> Result<SvgStyle> {
        if !(self.border.is_finite() && self.border >= 0.0) {
            bail!("--border must be a non-negative number, got {}", self.border);
        }
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            bail!("--stroke-width must be positive, got {}", self.stroke_width);
        }
        Ok(SvgStyle {
            border: self.border,
            stroke_width: self.stroke_width,
            ..SvgStyle::default()
        })
    }
}

fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let cfg = cli.growth_config()?;
    let budget = cli.budget()?;
    let style = cli.style()?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, radius = cfg.disk_radius, output = %cli.output.display(), "run");

    let mut rng = StdRng::seed_from_u64(seed);
    let root_length = cfg.sample_root_length(&mut rng);
    let mut tree = Tree::with_vertical_root(root_length, cfg.disk_radius)
        .context("building root branch")?;

    let mut sampler = RandomSampler::new(&cfg, rng)?;
    let report = Driver::new(budget)?
        .with_progress_every(cli.progress_every)
        .run(&mut tree, &mut sampler)?;

    render::save(&cli.output, &tree, &style)
        .with_context(|| format!("writing {}", cli.output.display()))?;
    tracing::info!(
        branches = tree.len(),
        rejected = report.rejected(),
        output = %cli.output.display(),
        "drawing saved"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("disk_tree").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_match_reference_run() {
        let cli = parse(&[]);
        assert_eq!(cli.output, PathBuf::from("tree.svg"));
        assert_eq!(cli.growth_config().unwrap(), Config::default());
        assert_eq!(cli.budget().unwrap(), Budget::duration(Duration::from_secs(60)));
        assert_eq!(cli.style().unwrap(), SvgStyle::default());
        assert_eq!(cli.progress_every, 1000);
    }

    #[test]
    fn iteration_limit_alone_drops_default_duration() {
        let cli = parse(&["--max-iterations", "250"]);
        assert_eq!(cli.budget().unwrap(), Budget::iterations(250));
    }

    #[test]
    fn both_limits_are_kept() {
        let cli = parse(&["--max-iterations", "10", "--duration-seconds", "1.5"]);
        let budget = cli.budget().unwrap();
        assert_eq!(budget.max_iterations, Some(10));
        assert_eq!(budget.duration, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn negative_duration_is_rejected() {
        let cli = parse(&["--duration-seconds=-1"]);
        assert!(cli.budget().is_err());
    }

    #[test]
    fn radius_flag_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg.json");
        fs::write(&path, r#"{ "disk_radius": 3.0, "length": { "min": 0.2, "max": 0.4 } }"#)
            .unwrap();

        let cli = parse(&["--config", path.to_str().unwrap()]);
        let cfg = cli.growth_config().unwrap();
        assert_eq!(cfg.disk_radius, 3.0);
        assert_eq!(cfg.length.min, 0.2);

        let cli = parse(&["--config", path.to_str().unwrap(), "--radius", "7"]);
        assert_eq!(cli.growth_config().unwrap().disk_radius, 7.0);
    }

    #[test]
    fn invalid_radius_is_rejected() {
        let cli = parse(&["--radius", "0"]);
        assert!(cli.growth_config().is_err());
    }

    #[test]
    fn bad_style_is_rejected() {
        assert!(parse(&["--stroke-width", "0"]).style().is_err());
        assert!(parse(&["--border=-2"]).style().is_err());
    }

    #[test]
    fn same_seed_reproduces_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let render_with_seed = |name: &str| {
            let out = dir.path().join(name);
            let cli = parse(&[out.to_str().unwrap(), "--seed", "17", "--max-iterations", "40"]);
            run(&cli).unwrap();
            fs::read_to_string(&out).unwrap()
        };

        let first = render_with_seed("a.svg");
        assert_eq!(first, render_with_seed("b.svg"));
    }

    #[test]
    fn run_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.svg");
        let cli = parse(&[
            out.to_str().unwrap(),
            "--seed",
            "3",
            "--max-iterations",
            "25",
            "--progress-every",
            "0",
        ]);

        run(&cli).unwrap();

        let svg = fs::read_to_string(&out).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.matches("<line").count() >= 1);
    }
}
