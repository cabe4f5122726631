use clap::Parser;

use chart_version_check::cli::{run_check, CheckArgs};
use chart_version_check::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "chart_check_version",
    version,
    about = "Fail unless a chart version is greater than the latest one published on an index"
)]
struct Args {
    #[arg(value_name = "APP_NAME", help = "Entry name to look up in the index")]
    app_name: String,

    #[arg(value_name = "CHART", help = "Path to the chart descriptor (Chart.yaml)")]
    chart: String,

    #[arg(value_name = "INDEX", help = "Path to the index descriptor (index.yaml)")]
    index: String,

    #[arg(short, long, help = "Log each step to stderr")]
    verbose: bool,

    #[arg(short, long, help = "Print nothing on success")]
    quiet: bool,
}

impl From<&Args> for CheckArgs {
    fn from(args: &Args) -> Self {
        CheckArgs {
            app_name: args.app_name.clone(),
            chart_path: args.chart.clone(),
            index_path: args.index.clone(),
        }
    }
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    match run_check(&CheckArgs::from(&args)) {
        Ok(outcome) => {
            if !args.quiet {
                ui::display_outcome(&outcome);
            }
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}
