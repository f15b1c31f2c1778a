use anyhow::Result;
use clap::{Arg, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use vendalytics_cli::report::{run_chart, run_report, run_synth};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(
            env_logger::Env::default().filter_or("VENDALYTICS_LOG", "error,vendalytics=info"),
        )
        .init();

    let matches = Command::new("vendalytics")
        .version(clap::crate_version!())
        .about("Descriptive statistics and business aggregations over a sales dataset")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("report")
                .about("Run the full ten-question report against a dataset")
                .arg(
                    Arg::new("data")
                        .help("Path to the sales dataset (delimited text)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .help("JSON file overriding analysis thresholds")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("html")
                        .long("html")
                        .help("Also write the report as an HTML page with the revenue chart")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("delimiter")
                        .short('d')
                        .long("delimiter")
                        .help("Field delimiter of the dataset")
                        .value_parser(clap::value_parser!(char))
                        .default_value(","),
                ),
        )
        .subcommand(
            Command::new("chart")
                .about("Write the revenue-per-product bar chart as an HTML page")
                .arg(
                    Arg::new("data")
                        .help("Path to the sales dataset (delimited text)")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output HTML file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("delimiter")
                        .short('d')
                        .long("delimiter")
                        .help("Field delimiter of the dataset")
                        .value_parser(clap::value_parser!(char))
                        .default_value(","),
                ),
        )
        .subcommand(
            Command::new("synth")
                .about("Generate a synthetic sales dataset")
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output dataset file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("rows")
                        .long("rows")
                        .help("Number of rows to generate")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("1000"),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Random seed, for reproducible datasets")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("42"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("report", sub)) => {
            let data = sub.get_one::<PathBuf>("data").expect("required");
            let config = sub.get_one::<PathBuf>("config");
            let html = sub.get_one::<PathBuf>("html");
            let delimiter = *sub.get_one::<char>("delimiter").expect("defaulted");
            run_report(data, config, html, delimiter)
        }
        Some(("chart", sub)) => {
            let data = sub.get_one::<PathBuf>("data").expect("required");
            let output = sub.get_one::<PathBuf>("output").expect("required");
            let delimiter = *sub.get_one::<char>("delimiter").expect("defaulted");
            run_chart(data, output, delimiter)
        }
        Some(("synth", sub)) => {
            let output = sub.get_one::<PathBuf>("output").expect("required");
            let rows = *sub.get_one::<usize>("rows").expect("defaulted");
            let seed = *sub.get_one::<u64>("seed").expect("defaulted");
            run_synth(output, rows, seed)
        }
        _ => unreachable!("subcommand_required is set"),
    }
}
