use crate::config::Config;
use crate::model::{Enrollment, Student};
use crate::resources::Resources;
use clap::Parser;
use eyre::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::{Level, info};

mod config;
mod display;
mod error;
mod loaders;
mod model;
mod random;
mod resources;
mod stats;

#[derive(Parser)]
#[command(author, version, about)]
struct Options {
    #[arg(short, long)]
    /// Use FILE as TOML configuration file
    config: Option<PathBuf>,
    #[arg(short, long)]
    /// Read students from CSV FILE instead of using the built-in ones
    students: Option<PathBuf>,
    #[arg(long)]
    /// Seed for the random sample
    seed: Option<u64>,
    #[arg(short, long)]
    /// Name of the resource to filter
    resource: Option<String>,
    #[arg(short, action = clap::ArgAction::Count)]
    /// Set verbosity level
    verbose: u8,
}

fn sample_students(ifm_cps: [u32; 2]) -> Vec<Student> {
    vec![
        Student::new("A", ifm_cps[0], Enrollment::Ifm),
        Student::new("B", ifm_cps[1], Enrollment::Ifm),
        Student::new("C", 60, Enrollment::Elt),
        Student::new("D", 45, Enrollment::Arch),
        Student::new("E", 80, Enrollment::Ifm),
    ]
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = match &options.config {
        Some(file_name) => Config::load(file_name)?,
        None => Config::default(),
    };

    let (students, ifm_students) = match &options.students {
        Some(path) => {
            let students = loaders::load_students(path)?;
            (students.clone(), students)
        }
        None => (sample_students([30, 45]), sample_students([35, 35])),
    };
    display::display_total(stats::total_credits(&students));
    display::display_ifm_credits(&stats::distinct_ifm_credits(&ifm_students));

    let sample = match options.seed.or(config.random.seed) {
        Some(seed) => {
            info!(seed, "using seeded random generator");
            random::random_even_sample_with(&mut StdRng::seed_from_u64(seed))
        }
        None => random::random_even_sample(),
    };
    display::display_sample(&sample);

    let resources = config
        .resources
        .root
        .map_or_else(Resources::bundled, Resources::new);
    let resource = options.resource.unwrap_or(config.resources.file);
    info!(%resources, resource = %resource, "reading resource");
    let lines = resources.read_filtered_lines(&resource)?;
    display::display_lines(&resource, lines.as_deref());
    Ok(())
}
