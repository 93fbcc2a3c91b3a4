//! Command line front end for the telescope/eyepiece calculator

use clap::{Parser, Subcommand, ValueEnum};
use scope_optics::display::render_report;
use scope_optics::presets::QuickSetting;
use scope_optics::sweep::{render_table, sweep_eyepieces};
use scope_optics::telescope::{models, TelescopeConfig, TelescopeSummary};
use scope_optics::input::is_positive_finite;
use scope_optics::{compute_raw, OpticalInputs, RangeArg, RawInputs};
use serde::Serialize;

/// Reference telescope models that can stand in for explicit dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TelescopeModel {
    /// 80mm f/5 refractor
    Refractor80,
    /// 114mm f/7.9 Newtonian
    Newtonian114,
    /// 200mm f/6 Dobsonian
    Dobsonian200,
    /// 203mm f/10 Schmidt-Cassegrain
    Sct203,
}

impl TelescopeModel {
    /// Get the corresponding TelescopeConfig for the selected model
    fn to_config(self) -> &'static TelescopeConfig {
        match self {
            TelescopeModel::Refractor80 => &models::REFRACTOR_80MM,
            TelescopeModel::Newtonian114 => &models::NEWTONIAN_114MM,
            TelescopeModel::Dobsonian200 => &models::DOBSONIAN_200MM,
            TelescopeModel::Sct203 => &models::SCT_203MM,
        }
    }
}

/// Telescope selection shared by the preset and sweep commands
#[derive(clap::Args, Debug, Clone)]
struct TelescopeArgs {
    /// Reference telescope model (overridden by explicit dimensions)
    #[arg(long)]
    telescope: Option<TelescopeModel>,

    /// Telescope focal length in millimeters
    #[arg(long)]
    scope_fl: Option<f64>,

    /// Telescope aperture in millimeters
    #[arg(long)]
    aperture: Option<f64>,
}

impl TelescopeArgs {
    fn resolve(&self) -> Option<TelescopeConfig> {
        let model = self.telescope.map(TelescopeModel::to_config);
        let focal_length = self.scope_fl.or(model.map(|m| m.focal_length_mm))?;
        let aperture = self.aperture.or(model.map(|m| m.aperture_mm))?;
        let name = match (model, self.scope_fl, self.aperture) {
            (Some(m), None, None) => m.name.clone(),
            _ => format!("{aperture}/{focal_length}"),
        };
        Some(TelescopeConfig::new(name, aperture, focal_length))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Telescope and eyepiece optical calculator")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute magnification, exit pupil, max useful magnification and true field
    Calc {
        /// Reference telescope model used for any dimension not given explicitly
        #[arg(long)]
        telescope: Option<TelescopeModel>,

        /// Telescope focal length in millimeters
        #[arg(long, allow_hyphen_values = true)]
        scope_fl: Option<String>,

        /// Telescope aperture in millimeters
        #[arg(long, allow_hyphen_values = true)]
        aperture: Option<String>,

        /// Eyepiece focal length in millimeters
        #[arg(long, allow_hyphen_values = true)]
        eyepiece_fl: String,

        /// Eyepiece apparent field of view in degrees
        #[arg(long, allow_hyphen_values = true)]
        afov: Option<String>,

        /// Print the report as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show recommended exit pupils for the quick-setting presets
    Preset {
        /// Preset to show (all presets when omitted)
        #[arg(ignore_case = true)]
        preset: Option<QuickSetting>,

        #[command(flatten)]
        scope: TelescopeArgs,
    },

    /// Tabulate results over a range of eyepiece focal lengths
    Sweep {
        #[command(flatten)]
        scope: TelescopeArgs,

        /// Eyepiece focal length range in mm (start:stop:step)
        #[arg(long, default_value = "4:40:2")]
        eyepiece_range: RangeArg,

        /// Eyepiece apparent field of view in degrees
        #[arg(long)]
        afov: Option<f64>,

        /// Print the rows as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Serialize)]
struct CalcOutput<'a> {
    inputs: &'a RawInputs,
    report: &'a scope_optics::OpticalReport,
}

/// `f/N` label, or `None` when the dimensions give no usable focal ratio
fn focal_ratio_label(telescope: &TelescopeConfig) -> Option<String> {
    let ratio = telescope.focal_ratio();
    is_positive_finite(ratio).then(|| format!("f/{ratio:.1}"))
}

fn run_calc(
    telescope: Option<TelescopeModel>,
    scope_fl: Option<String>,
    aperture: Option<String>,
    eyepiece_fl: String,
    afov: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let model = telescope.map(TelescopeModel::to_config);
    let scope_fl = scope_fl
        .or_else(|| model.map(|m| m.focal_length_mm.to_string()))
        .unwrap_or_default();
    let aperture = aperture
        .or_else(|| model.map(|m| m.aperture_mm.to_string()))
        .unwrap_or_default();

    let raw = RawInputs::new(scope_fl, aperture, eyepiece_fl, afov);
    let report = compute_raw(&raw);

    if json {
        let output = CalcOutput {
            inputs: &raw,
            report: &report,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}

fn run_preset(
    preset: Option<QuickSetting>,
    scope: &TelescopeArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let telescope = scope.resolve();
    let presets = match preset {
        Some(p) => vec![p],
        None => QuickSetting::ALL.to_vec(),
    };

    if let Some(telescope) = &telescope {
        match focal_ratio_label(telescope) {
            Some(ratio) => println!("{} ({ratio})", telescope.name),
            None => println!("{}", telescope.name),
        }
    }

    for preset in presets {
        let label = preset.label();
        let recommendation = preset.recommendation();
        match telescope.as_ref().and_then(|t| preset.recommended_eyepiece_range_mm(t)) {
            Some((min, max)) => {
                println!("{label:<10} {recommendation}  (eyepieces {min:.1}-{max:.1} mm)")
            }
            None => println!("{label:<10} {recommendation}"),
        }
    }

    Ok(())
}

fn run_sweep(
    scope: &TelescopeArgs,
    eyepiece_range: &RangeArg,
    afov: Option<f64>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let telescope = scope
        .resolve()
        .ok_or("sweep needs --telescope or both --scope-fl and --aperture")?;
    log::info!("Sweeping eyepieces {eyepiece_range} on {}", telescope.name);

    let base = OpticalInputs::new(
        telescope.focal_length_mm,
        telescope.aperture_mm,
        f64::NAN,
        afov,
    );
    let rows = sweep_eyepieces(&base, eyepiece_range)?;

    if json {
        #[derive(Serialize)]
        struct SweepOutput<'a> {
            telescope: TelescopeSummary,
            rows: &'a [scope_optics::sweep::SweepRow],
        }
        let output = SweepOutput {
            telescope: TelescopeSummary::from(&telescope),
            rows: &rows,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!(
            "{}: {:.0} mm aperture, {:.0} mm focal length, {}",
            telescope.name,
            telescope.aperture_mm,
            telescope.focal_length_mm,
            focal_ratio_label(&telescope).unwrap_or_else(|| "no focal ratio".to_string())
        );
        print!("{}", render_table(&rows));
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    log::debug!("{args:?}");

    match args.command {
        Command::Calc {
            telescope,
            scope_fl,
            aperture,
            eyepiece_fl,
            afov,
            json,
        } => run_calc(telescope, scope_fl, aperture, eyepiece_fl, afov, json),
        Command::Preset { preset, scope } => run_preset(preset, &scope),
        Command::Sweep {
            scope,
            eyepiece_range,
            afov,
            json,
        } => run_sweep(&scope, &eyepiece_range, afov, json),
    }
}
