//! Runs the numkit methods from the command line.
//!
//! # Usage
//!
//! ```text
//! numkit-demo [MODE] [PARAMS.json] [--json]
//! ```
//!
//! `MODE` is one of `all` (default), `bisect`, `newton`, `secant`,
//! `false-position`, `simpson`, `euler`, or `rk4`. `PARAMS.json` overrides
//! any subset of the default inputs. `--json` prints the report as JSON.

use std::{error::Error, fs};

use numkit_demo::{Mode, Params, run};

const USAGE: &str = "Usage: numkit-demo [MODE] [PARAMS.json] [--json]";

fn main() -> Result<(), Box<dyn Error>> {
    let mut json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else {
            positional.push(arg);
        }
    }

    if positional.len() > 2 {
        eprintln!("{USAGE}");
        std::process::exit(1);
    }

    let mode = match positional.first() {
        Some(mode) => mode.parse()?,
        None => Mode::All,
    };

    let params = match positional.get(1) {
        Some(path) => Params::from_json(&fs::read_to_string(path)?)?,
        None => Params::default(),
    };

    let report = run(mode, &params);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
