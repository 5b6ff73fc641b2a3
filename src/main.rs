use chrono::Weekday;
use clap::Parser;
use plannergen::{PlannerBuilder, PlannerError, PlannerParams};
use std::path::PathBuf;

/// Generates the LaTeX sources of a hyperlinked planner.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON file with planner parameters; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Device identifier, e.g. supernote_a5x
    #[arg(short, long)]
    device: Option<String>,

    #[arg(short, long)]
    year: Option<i32>,

    /// First day of the week, e.g. mon or sun
    #[arg(long, value_parser = parse_weekday)]
    first_weekday: Option<Weekday>,

    /// Comma separated sections in output order; all others are disabled
    #[arg(short, long, value_delimiter = ',')]
    sections: Vec<String>,

    /// Directory receiving the .tex files
    #[arg(short, long, default_value = "out")]
    out: PathBuf,

    /// Build sections in parallel
    #[arg(long)]
    parallel: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn parse_weekday(s: &str) -> Result<Weekday, String> {
    s.parse::<Weekday>()
        .map_err(|_| format!("'{s}' is not a weekday"))
}

fn main() -> Result<(), PlannerError> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let params = match &args.config {
        Some(path) => PlannerParams::from_json_file(path)?,
        None => PlannerParams::default(),
    };

    let mut builder = PlannerBuilder::new().with_params(params);
    if let Some(device) = args.device {
        builder = builder.with_device(device);
    }
    if let Some(year) = args.year {
        builder = builder.with_year(year);
    }
    if let Some(weekday) = args.first_weekday {
        builder = builder.with_first_weekday(weekday);
    }
    if !args.sections.is_empty() {
        builder = builder.with_sections(args.sections).disable_remaining();
    }
    if args.parallel {
        builder = builder.with_parallel(true);
    }

    let planner = builder.build()?;
    let outputs = planner.build_data()?;
    let root = outputs.write_tex_to(&args.out, planner.layout())?;

    println!(
        "Wrote {} pages in {} sections. Compile {}",
        outputs.page_count(),
        outputs.len(),
        root.display()
    );
    Ok(())
}
