extern crate clap;
extern crate env_logger;
extern crate fractalflame;
#[macro_use]
extern crate log;

use std::path::Path;
use std::process;

use clap::{App, Arg, ArgMatches};

use fractalflame::{config, render, savers};

const CONFIG: &str = "config";
const OUTPUT: &str = "output";

fn args<'a>() -> ArgMatches<'a> {
    App::new("flame")
        .version("0.1.0")
        .about("Fractal flame renderer")
        .arg(
            Arg::with_name(CONFIG)
                .required(false)
                .long(CONFIG)
                .short("c")
                .takes_value(true)
                .default_value("config.json")
                .help("Path to the JSON configuration file"),
        )
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output image file (defaults to FractalFlame.png or .jpg by format)"),
        )
        .get_matches()
}

fn main() {
    env_logger::init();
    let matches = args();

    let config = match config::read(matches.value_of(CONFIG).unwrap()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration failure: {}", err);
            process::exit(1);
        }
    };

    let buffer = match render(&config) {
        Ok(buffer) => buffer,
        Err(err) => {
            eprintln!("render failure: {}", err);
            process::exit(1);
        }
    };

    let format = &config.application.format;
    let output = matches
        .value_of(OUTPUT)
        .unwrap_or_else(|| savers::default_output(format));
    let saver = savers::for_format(format);

    if let Err(err) = saver.save(&buffer, Path::new(output)) {
        eprintln!("{}", err);
        process::exit(1);
    }

    info!("image saved as {}", output);
    println!("Image saved as {}", output);
}
