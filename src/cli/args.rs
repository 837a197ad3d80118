use std::path::PathBuf;

use clap::Parser;
use prop_witness::config::Config;

/// Determines whether a formula is well-formed, true in an interpretation, and otherwise satisfiable
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The file of declared constants, separated by whitespace
    #[arg(long, default_value = "names.txt")]
    pub names: PathBuf,

    /// The file of declared predicates, as whitespace separated `name/arity` pairs
    #[arg(long, default_value = "predicates.txt")]
    pub predicates: PathBuf,

    /// The file of atoms true in the interpretation, separated by whitespace
    #[arg(long, default_value = "true_atoms.txt")]
    pub true_atoms: PathBuf,

    /// The file to write a minimal witness to, one atom per line
    #[arg(long, default_value = "witnesses_satisfiability.txt")]
    pub witness: PathBuf,

    /// A file to read the formula from, otherwise all of standard input is read
    #[arg(short, long)]
    pub formula: Option<PathBuf>,

    /// The maximum count of distinct atoms to search for a witness over
    #[arg(short, long)]
    pub atom_limit: Option<usize>,

    /// Display a minimal witness, if one is found
    #[arg(short, long, default_value_t = false)]
    pub model: bool,
}

/// Builds a [Config] from the arguments.
///
/// If an invalid option is found a message is sent and the process is terminated.
pub fn config_from_args(args: &Args) -> Config {
    let mut the_config = Config::default();

    if let Some(limit) = args.atom_limit {
        if let Err((min, max)) = the_config.atom_limit.set(limit) {
            println!(
                "{} requires a value between {min} and {max}",
                the_config.atom_limit.name
            );
            std::process::exit(1);
        }
    }

    the_config
}
