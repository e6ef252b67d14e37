use clap::{Arg, Command, arg, value_parser};

pub use breakwig_bed2wig::consts::*;

pub fn create_bed2wig_cli() -> Command {
    Command::new(BED2WIG_CMD)
        .author("Databio")
        .about("Use a sliding window to aggregate stranded breaks into positive and negative strand coverage tracks.")
        .arg_required_else_help(true)
        .arg(
            // inputs are variadic and followed by two more positionals, so they share one arg
            Arg::new("paths")
                .num_args(3..)
                .required(true)
                .value_names(["INPUTS", "CHROMSIZES", "OUTPUT_PATH"])
                .help("Breaks files or glob patterns (e.g. path/to/*.bed), then the tab separated chromosome sizes file, then the folder the tracks are written to"),
        )
        .arg(arg!(--"track-name" <NAME> "Name of the genome browser track (default: output folder name)"))
        .arg(
            arg!(-w --"window-size" <WINDOW_SIZE> "Window at which to aggregate breaks (default: 100000)")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            arg!(-s --"window-step" <WINDOW_STEP> "Step after each window (default: 10000)")
                .value_parser(value_parser!(u32)),
        )
        .arg(arg!(-o --"output-type" <OUTPUT_TYPE> "Track format: bigwig or bedgraph (default: bigwig)"))
        .arg(
            arg!(-z --zoom <ZOOM> "Number of zoom levels of the bigWig tracks (default: 5)")
                .value_parser(value_parser!(u32)),
        )
}
