use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::{Path, PathBuf};

use intmat::{LoadMode, MatrixConfig};
use intmat_cli::commands;
use intmat_cli::config::resolve_config;

fn output_arg() -> Arg {
    Arg::new("output_file")
        .short('o')
        .long("output_file")
        .help("File the result is written to. Prints to stdout when omitted.")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn matrix_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn count_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(usize))
}

fn build_cli() -> Command {
    Command::new("intmat")
        .version(clap::crate_version!())
        .about("Dense integer matrix tool: generate, combine, compare and inspect matrix files")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to a JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("lax")
                .long("lax")
                .global(true)
                .action(ArgAction::SetTrue)
                .help(
                    "Read input files as a flat token stream instead of rejecting \
                     rows whose length differs from the first row.",
                ),
        )
        .subcommand(
            Command::new("random")
                .about("Generate a matrix of uniformly distributed integers")
                .arg(count_arg("rows", "Number of rows"))
                .arg(count_arg("columns", "Number of columns"))
                .arg(
                    Arg::new("min")
                        .allow_negative_numbers(true)
                        .long("min")
                        .help("Smallest value (inclusive). Overrides the config file.")
                        .value_parser(clap::value_parser!(i32)),
                )
                .arg(
                    Arg::new("max")
                        .allow_negative_numbers(true)
                        .long("max")
                        .help("Largest value (inclusive). Overrides the config file.")
                        .value_parser(clap::value_parser!(i32)),
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .help("Seed for a reproducible matrix. Overrides the config file.")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("identity")
                .about("Generate an n x n identity matrix")
                .arg(count_arg("n", "Number of rows and columns"))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("constant")
                .about("Generate a matrix with every cell set to one value")
                .arg(count_arg("rows", "Number of rows"))
                .arg(count_arg("columns", "Number of columns"))
                .arg(
                    Arg::new("value")
                        .allow_negative_numbers(true)
                        .help("Cell value")
                        .required(true)
                        .value_parser(clap::value_parser!(i32)),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("sum")
                .about("Add two matrices of the same shape")
                .arg(matrix_arg("a", "Left operand"))
                .arg(matrix_arg("b", "Right operand"))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("product")
                .about("Multiply two matrices")
                .arg(matrix_arg("a", "Left operand"))
                .arg(matrix_arg("b", "Right operand"))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("transpose")
                .about("Transpose a matrix")
                .arg(matrix_arg("a", "Input matrix"))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("scale")
                .about("Multiply every cell by a scalar")
                .arg(matrix_arg("a", "Input matrix"))
                .arg(
                    Arg::new("scalar")
                        .allow_negative_numbers(true)
                        .help("Scalar factor")
                        .required(true)
                        .value_parser(clap::value_parser!(i32)),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("equal")
                .about("Compare two matrices; exits with status 1 when they differ")
                .arg(matrix_arg("a", "Left operand"))
                .arg(matrix_arg("b", "Right operand")),
        )
        .subcommand(
            Command::new("show")
                .about("Print a matrix with its shape")
                .arg(matrix_arg("a", "Input matrix"))
                .arg(
                    Arg::new("max_rows")
                        .long("max-rows")
                        .help("Print at most this many rows")
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("max_cols")
                        .long("max-cols")
                        .help("Elide the middle of rows wider than twice this many cells")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("INTMAT_LOG", "error,intmat=info"))
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some((name, sub_m)) => {
            // Global args are propagated into the subcommand matches.
            let config = resolve_config(
                sub_m.get_one::<PathBuf>("config").map(PathBuf::as_path),
                sub_m.get_flag("lax"),
            )?;
            log::debug!("[intmat] {} with {:?}", name, config);
            run(name, sub_m, &config)
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn path<'a>(matches: &'a ArgMatches, name: &str) -> &'a Path {
    matches
        .get_one::<PathBuf>(name)
        .map(PathBuf::as_path)
        .expect("required by clap")
}

fn count(matches: &ArgMatches, name: &str) -> usize {
    *matches.get_one::<usize>(name).expect("required by clap")
}

fn run(name: &str, matches: &ArgMatches, config: &MatrixConfig) -> Result<()> {
    let mode: LoadMode = config.load_mode;
    let output = matches
        .try_get_one::<PathBuf>("output_file")
        .ok()
        .flatten()
        .map(PathBuf::as_path);

    let result = match name {
        "random" => {
            let mut fill = config.random.clone();
            if let Some(&min) = matches.get_one::<i32>("min") {
                fill.min = min;
            }
            if let Some(&max) = matches.get_one::<i32>("max") {
                fill.max = max;
            }
            if let Some(&seed) = matches.get_one::<u64>("seed") {
                fill.seed = Some(seed);
            }
            commands::random_matrix(count(matches, "rows"), count(matches, "columns"), &fill)?
        }
        "identity" => commands::identity_matrix(count(matches, "n"))?,
        "constant" => commands::constant_matrix(
            count(matches, "rows"),
            count(matches, "columns"),
            *matches.get_one::<i32>("value").expect("required by clap"),
        )?,
        "sum" => commands::sum_files(path(matches, "a"), path(matches, "b"), mode)?,
        "product" => commands::product_files(path(matches, "a"), path(matches, "b"), mode)?,
        "transpose" => commands::transpose_file(path(matches, "a"), mode)?,
        "scale" => commands::scale_file(
            path(matches, "a"),
            *matches.get_one::<i32>("scalar").expect("required by clap"),
            mode,
        )?,
        "equal" => {
            let same = commands::equal_files(path(matches, "a"), path(matches, "b"), mode)?;
            println!("{}", same);
            if !same {
                std::process::exit(1);
            }
            return Ok(());
        }
        "show" => {
            return commands::show_file(
                path(matches, "a"),
                mode,
                matches.get_one::<usize>("max_rows").copied(),
                matches.get_one::<usize>("max_cols").copied(),
            );
        }
        _ => unreachable!(),
    };

    commands::emit(&result, output)
}
