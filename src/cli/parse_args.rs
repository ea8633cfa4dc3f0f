use dpll_sat::config::Config;

use crate::CliOptions;

/// Parse CLI arguments to a [Config] struct or a [CliOptions] struct.
///
/// The final argument is taken to be the path to a formula, and is skipped.
///
/// If an unrecognised argument or invalid option is found a message is sent and the process is terminated.
pub fn parse_args(args: &[String], cfg: &mut Config, cli_options: &mut CliOptions) {
    'arg_examination: for arg in args.iter().skip(1).rev().skip(1) {
        let mut split = arg.split("=");
        match split.next() {
            Some("--dump") => {
                println!("c The formula will be written after the solve.");
                cli_options.dump = true;
            }

            Some("--model") | Some("--valuation") => {
                println!("c A model will be written, if one exists.");
                cli_options.model = true;
            }

            // The remaining cases follow a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            // Otherwise, a message is sent.
            Some("--reseed") => {
                let (min, max) = cfg.reseed.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<bool>() {
                        if cfg.reseed.set(value) {
                            println!("c reseed set to: {value}");
                            continue 'arg_examination;
                        }
                    }
                }

                println!("reseed requires a value between {min} and {max}");
                std::process::exit(1);
            }

            Some("--seed") => {
                let (min, max) = cfg.seed.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<u64>() {
                        if cfg.seed.set(value) {
                            println!("c seed set to: {value}");
                            continue 'arg_examination;
                        }
                    }
                }

                println!("seed requires a value between {min} and {max}");
                std::process::exit(1);
            }

            _ => {
                println!("c Unrecognised argument: {arg}");
                std::process::exit(1);
            }
        }
    }
}
