use std::fs;
use std::io::{self, Read};
use std::path::Path;

use clap::Parser;
use gridwalk_demos::args::Args;
use gridwalk_demos::{AsciiMap, describe};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_map(args.map.as_deref())?;
    let map = AsciiMap::parse(&text)?;
    log::info!(
        "map {}x{}, {} blocked, {} -> {}",
        map.width(),
        map.height(),
        map.blocked().len(),
        map.start(),
        map.goal()
    );

    for &solver in args.solver.solvers() {
        let report = solver.search(
            map.start(),
            map.goal(),
            map.blocked(),
            map.width(),
            map.height(),
        )?;
        if !args.quiet {
            println!("{}\n", map.render(report.path.as_deref(), !args.no_color));
        }
        println!("{}", describe(&report));
    }
    Ok(())
}

fn read_map(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
