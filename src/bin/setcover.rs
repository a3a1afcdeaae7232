//! Command-line front end: load an instance, run the greedy solver, print
//! the elapsed time, the cover size, and the chosen subsets.

use std::env;
use std::path::Path;
use std::process;
use std::time::Instant;

use setcover::io::{orfile, OptimaTable};
use setcover::{greedy_cover, verify_cover};

const USAGE: &str = "usage: setcover <input> [--check] [--skip-print] [--optima <csv>]

  <input>         instance file in OR-library or setfile format
  --check         verify the cover and report the approximation ratio
  --skip-print    do not print the chosen subsets
  --optima <csv>  CSV of known optimal cover sizes (instance,optimum)";

struct Args {
    input: String,
    check: bool,
    skip_print: bool,
    optima: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut input = None;
    let mut check = false;
    let mut skip_print = false;
    let mut optima = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--check" => check = true,
            "--skip-print" => skip_print = true,
            "--optima" => {
                optima = Some(args.next().ok_or("--optima requires a file argument")?);
            }
            flag if flag.starts_with("--") => {
                return Err(format!("unknown flag {}", flag));
            }
            positional => {
                if input.replace(positional.to_string()).is_some() {
                    return Err("only one input file is accepted".into());
                }
            }
        }
    }

    Ok(Args {
        input: input.ok_or("missing input file")?,
        check,
        skip_print,
        optima,
    })
}

fn run(args: &Args) -> setcover::Result<bool> {
    let instance = orfile::load(&args.input)?;

    let known_optimum = match &args.optima {
        Some(path) => {
            let table = OptimaTable::load(path)?;
            instance_name(&args.input).and_then(|name| table.lookup(&name))
        }
        None => None,
    };

    let start = Instant::now();
    let cover = greedy_cover(&instance)?;
    let elapsed = start.elapsed();

    let mut valid = true;
    if args.check {
        let report = verify_cover(&instance, &cover, known_optimum)?;
        valid = report.valid;
        if !report.valid {
            println!("*** Not a solution! ***");
            println!("missing elements: {:?}", report.missing_elements);
        }
        if let Some(ratio) = report.ratio {
            println!("approximation ratio: {:.3}", ratio);
        }
    }

    println!("{}", elapsed.as_secs_f64());
    println!("{}", cover.len());
    if !args.skip_print {
        for &idx in &cover {
            let mut elements: Vec<usize> = instance.subsets()[idx].iter().copied().collect();
            elements.sort_unstable();
            let line: Vec<String> = elements.iter().map(usize::to_string).collect();
            println!("{}", line.join(" "));
        }
    }

    Ok(valid)
}

fn instance_name(input: &str) -> Option<String> {
    Path::new(input)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}\n\n{}", msg, USAGE);
            process::exit(2);
        }
    };

    match run(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
