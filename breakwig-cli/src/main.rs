mod bed2wig;

use anyhow::Result;
use clap::{ArgAction, ArgMatches, Command, arg};
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "breakwig";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Aggregate stranded genomic breakpoints into sliding-window coverage tracks for genome browsers.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Log debug messages (overridden by RUST_LOG)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(bed2wig::cli::create_bed2wig_cli())
}

fn init_logging(matches: &ArgMatches) {
    let default_level = if matches.get_flag("verbose") {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(&matches);

    match matches.subcommand() {
        //
        // BED2WIG
        //
        Some((bed2wig::cli::BED2WIG_CMD, matches)) => {
            bed2wig::handlers::run_bed2wig(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
