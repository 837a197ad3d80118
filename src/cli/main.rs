#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use std::{
    io::{BufRead, Write},
    path::Path,
};

use clap::Parser;
use prop_witness::{context::Context, io::write_witness, types::err};

mod args;
mod read;

use args::{config_from_args, Args};

/// Loads the file at `path` with `read`, or terminates the process noting the kind of file which failed to load.
fn load(
    path: &Path,
    kind: &str,
    read: impl FnOnce(Box<dyn BufRead>) -> Result<usize, err::ErrorKind>,
) {
    let reader = match read::open(path) {
        Ok(reader) => reader,
        Err(e) => {
            log::error!("{path:?}: {e}");
            println!("Could not open {kind} file. Bye!");
            std::process::exit(1);
        }
    };

    if let Err(e) = read(reader) {
        println!("Could not read {kind} file, {e}. Bye!");
        std::process::exit(1);
    }
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();
    let mut the_context = Context::from_config(config_from_args(&args));

    load(&args.names, "names", |reader| {
        the_context.read_constants(reader)
    });
    load(&args.predicates, "predicates", |reader| {
        the_context.read_predicates(reader)
    });

    print!("Input possible formula: ");
    if let Err(e) = std::io::stdout().flush() {
        log::warn!("Failed to flush prompt: {e}");
    }

    let text = match read::read_formula(args.formula.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            println!("\n{e} Bye!");
            std::process::exit(1);
        }
    };

    let formula = match the_context
        .parse_formula(&text)
        .and_then(|formula| the_context.check_formula(&formula).map(|_| formula))
    {
        Ok(formula) => formula,
        Err(e) => {
            log::info!("{e}");
            println!("Possible formula is not a formula.");
            std::process::exit(0);
        }
    };
    println!("Possible formula is indeed a formula.");

    load(&args.true_atoms, "interpretation", |reader| {
        the_context.read_interpretation(reader)
    });

    if the_context.evaluate(&formula) {
        println!("Formula is true in given interpretation.");
        std::process::exit(0);
    }
    println!("Formula is false in given interpretation.");

    match the_context.find_minimal_witness(&formula) {
        Ok(Some(witness)) => {
            let written = std::fs::File::create(&args.witness)
                .and_then(|file| write_witness(std::io::BufWriter::new(file), &witness));
            if written.is_err() {
                println!("Could not write witness file. Bye!");
                std::process::exit(1);
            }

            if args.model {
                println!("v {}", witness.atoms().join(" "));
            }
            println!("Formula is satisfiable.");
        }

        Ok(None) => println!("Formula is not satisfiable."),

        Err(e) => {
            println!("Satisfiability is unknown, {e}.");
            std::process::exit(2);
        }
    }
}
