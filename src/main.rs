use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use env_logger::{Builder, Env};
use std::io;
use std::path::PathBuf;

use intersection_sim::arrivals::{ArrivalSource, NoArrivals, UniformArrivals, DEFAULT_MAX_ARRIVALS};
use intersection_sim::input;
use intersection_sim::report;
use intersection_sim::simulation::{self, LaneIndex, SimIntersection, LANES};

#[derive(Parser)]
#[command(name = "intersection_sim")]
#[command(about = "Adaptive signal timing simulation for a single intersection")]
struct Cli {
    /// Name of the intersection, used in the report
    #[arg(long, default_value = "Main Intersection")]
    name: String,

    /// Number of lanes (approaches) at the intersection
    #[arg(long, default_value_t = LANES)]
    lanes: usize,

    /// Initial queue per lane, comma separated. Prompted for if omitted
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    queues: Option<Vec<i64>>,

    /// Number of signal cycles to simulate. Prompted for if omitted
    #[arg(long, allow_negative_numbers = true)]
    cycles: Option<i64>,

    /// Seed for the arrival generator, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum vehicles arriving per lane per cycle
    #[arg(long, default_value_t = DEFAULT_MAX_ARRIVALS)]
    max_arrivals: u32,

    /// Do not add any vehicles between cycles
    #[arg(long)]
    no_arrivals: bool,

    /// File the final report is appended to
    #[arg(long, default_value = report::DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Only print the final summary
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn,intersection_sim=info")).init();

    let cli = Cli::parse();

    let mut intersection = SimIntersection::with_lanes(&cli.name, cli.lanes)?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    let queues = match &cli.queues {
        Some(queues) => queues.clone(),
        None => input::read_initial_queues(&mut reader, &mut stdout, cli.lanes)?,
    };
    if queues.len() != cli.lanes {
        anyhow::bail!(
            "Expected {} initial queue values, got {}",
            cli.lanes,
            queues.len()
        );
    }
    for (idx, &count) in queues.iter().enumerate() {
        intersection.set_initial_queue(LaneIndex(idx), count)?;
    }

    let cycles = match cli.cycles {
        Some(cycles) => input::validate_cycle_count(cycles)?,
        None => input::read_cycle_count(&mut reader, &mut stdout)?,
    };

    let mut arrivals: Box<dyn ArrivalSource> = if cli.no_arrivals {
        Box::new(NoArrivals)
    } else {
        let source = match cli.seed {
            Some(seed) => UniformArrivals::new_with_seed(seed),
            None => UniformArrivals::new(),
        };
        Box::new(source.with_max_per_lane(cli.max_arrivals))
    };

    println!("Simulating {} cycles at {}", cycles, intersection.name());
    println!("Initial state: {}", report::status_line(0, &intersection.snapshot()));
    println!();

    let quiet = cli.quiet;
    let snapshot = simulation::run_cycles(
        &mut intersection,
        cycles,
        arrivals.as_mut(),
        |cycle, snapshot, drawn| {
            if !quiet {
                println!("{}", report::status_line(cycle, snapshot));
                println!("  arrivals: {:?}", drawn);
            }
        },
    )?;

    let block = report::render_report(intersection.name(), &Local::now(), &snapshot);
    println!();
    print!("{}", block);

    report::append_report(&cli.log_file, &block)
        .context("Could not save the simulation report")?;

    Ok(())
}
