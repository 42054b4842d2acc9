use earthpres::graphs::save_figures;
use earthpres::*;
use log::LevelFilter;
use std::io::Write;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "earth_pressure",
    about = "Computes the earth pressure coefficient and the Mohr circles behind a retaining wall"
)]
struct Options {
    /// JSON file with the soil data (overrides the soil flags)
    #[structopt(long)]
    params: Option<String>,

    /// Normalized wall displacement u/h
    #[structopt(long, default_value = "0.0", allow_hyphen_values = true)]
    u_r: f64,

    /// Height of the wall (m)
    #[structopt(long, default_value = "10.0")]
    height: f64,

    /// Effective friction angle (degrees)
    #[structopt(long, default_value = "30.0")]
    phi: f64,

    /// Dry unit weight (kN/m³)
    #[structopt(long, default_value = "18.0")]
    gamma_d: f64,

    /// Saturated unit weight (kN/m³)
    #[structopt(long, default_value = "19.0")]
    gamma_sat: f64,

    /// Depth of the water table from the surface (m)
    #[structopt(long, default_value = "0.0")]
    water_table: f64,

    /// Effective cohesion (kPa)
    #[structopt(long, default_value = "0.0")]
    cohesion: f64,

    /// Reference u/h on the active side (default: from the friction angle)
    #[structopt(long, allow_hyphen_values = true)]
    u_r_min: Option<f64>,

    /// Reference u/h on the passive side (default: from the friction angle)
    #[structopt(long)]
    u_r_max: Option<f64>,

    /// Interpolation law: decay or exponential
    #[structopt(long, default_value = "decay")]
    law: String,

    /// Number of samples of the K versus u/h curve
    #[structopt(long, default_value = "500")]
    samples: usize,

    /// Writes the results to this JSON file
    #[structopt(long)]
    json: Option<String>,

    /// Saves the figures (SVG)
    #[structopt(long)]
    figures: bool,

    /// Directory of the figures (default: /tmp/earthpres/results)
    #[structopt(long)]
    out_dir: Option<String>,

    /// Logging level (error, warn, info, debug, trace); RUST_LOG is used if absent
    #[structopt(long)]
    log_level: Option<String>,
}

/// Returns the directory of the figures
fn figure_dir(options: &Options) -> &str {
    options.out_dir.as_deref().unwrap_or(DEFAULT_OUT_DIR)
}

/// Initializes env_logger with the given level, RUST_LOG, or Info
fn init_logging(level: Option<&str>) {
    let log_level = level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| std::env::var("RUST_LOG").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();
    log::debug!("logger initialized (level: {})", log_level);
}

fn main() -> Result<(), Error> {
    // parse options
    let options = Options::from_args();
    init_logging(options.log_level.as_deref());

    // soil data
    let soil = match &options.params {
        Some(path) => {
            let mut soil = SoilState::read_json(path)?;
            soil.displacement_ratio = options.u_r;
            soil
        }
        None => SoilState {
            wall_height: options.height,
            friction_angle: options.phi,
            dry_unit_weight: options.gamma_d,
            saturated_unit_weight: options.gamma_sat,
            water_table_depth: options.water_table,
            cohesion: options.cohesion,
            displacement_ratio: options.u_r,
        },
    };
    soil.validate()?;

    // displacement range
    let default_range = DisplacementRange::for_friction_angle(soil.friction_angle)?;
    let range = DisplacementRange::new(
        options.u_r_min.unwrap_or(default_range.u_r_min),
        options.u_r_max.unwrap_or(default_range.u_r_max),
    )?;

    // configuration
    let law = match options.law.as_str() {
        "decay" => ParamInterpolation::default_decay(),
        "exponential" => ParamInterpolation::UltimateExponential,
        _ => return Err(Error::InvalidParameter("law must be 'decay' or 'exponential'")),
    };
    let mut config = Config::new();
    config.set_interpolation(law)?.set_n_curve_sample(options.samples)?;
    log::info!("evaluating u/h = {} with the {} law", soil.displacement_ratio, law.name());

    // evaluate
    let eval = evaluate(&soil, &range, &config)?;

    // output
    if let Some(path) = &options.json {
        eval.write_json(path)?;
        log::info!("results written to {}", path);
    }
    if options.figures {
        save_figures(&eval, figure_dir(&options), "earth_pressure")?;
    }

    // message
    let summary = format!("{}", eval);
    let width = summary.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let thin_line = format!("{:─^1$}", "", width);
    println!("\n{}", thin_line);
    print!("{}", summary);
    println!("{}\n", thin_line);
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
