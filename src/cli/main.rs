use std::path::PathBuf;

use dpll_sat::{config::Config, context::Context, reports::Report};
use parse_args::parse_args;

mod parse_args;

#[derive(Default)]
struct CliOptions {
    dump: bool,
    model: bool,
}

fn main() {
    #[cfg(feature = "logger")]
    env_logger::init();

    let mut config = Config::default();
    let mut cli_options = CliOptions::default();

    let args: Vec<String> = std::env::args().collect();

    parse_args(&args, &mut config, &mut cli_options);

    let path = match args.last() {
        Some(path) if args.len() > 1 && !path.starts_with("--") => PathBuf::from(path),
        _ => {
            println!("c Path to CNF required");
            std::process::exit(1);
        }
    };

    println!("c Reading DIMACS file from {path:?}");

    let mut ctx = match Context::from_dimacs_path(config, &path) {
        Ok(ctx) => ctx,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    let metadata = ctx.metadata();
    println!("c Atoms:   {}", metadata.atoms);
    println!("c Clauses: {}", metadata.clauses);

    let result = ctx.solve();

    println!(
        "c {} decisions, {} conflicts, {} propagations in {:?}",
        ctx.counters.decisions, ctx.counters.conflicts, ctx.counters.propagations, ctx.counters.time
    );

    if cli_options.dump {
        for line in ctx.clause_db.to_string().lines() {
            println!("c | {line}");
        }
    }

    match result {
        Report::Satisfiable => println!("s SATISFIABLE"),
        Report::Unsatisfiable => println!("s UNSATISFIABLE"),
        Report::Unknown => println!("s UNKNOWN"),
    }

    if result == Report::Satisfiable && cli_options.model {
        println!("v {} 0", ctx.valuation_string())
    }
}
