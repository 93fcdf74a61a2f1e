extern crate clap;
use std::time::Instant;

use clap::{App, Arg};
use tracing_subscriber::EnvFilter;
use xwords_csp::{
    image::{load_font, save_png},
    Crossword, FillerConfig, Rendered, Solver, Strategy, ValueOrder, VariableOrder, Vocabulary,
};

fn main() -> Result<(), String> {
    let matches = App::new("generate")
        .about("Fill a crossword structure with words from a word list")
        .arg(
            Arg::with_name("structure")
                .value_name("STRUCTURE")
                .help("Grid structure; `_` marks an open cell")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("words")
                .value_name("WORDS")
                .help("Word list, one word per line")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("output")
                .value_name("OUTPUT")
                .help("Where to save the filled grid; a `.png` path gets an image")
                .index(3),
        )
        .arg(
            Arg::with_name("font")
                .long("font")
                .value_name("FONT")
                .help("TrueType font for the letters of a `.png` output"),
        )
        .arg(
            Arg::with_name("variable-order")
                .long("variable-order")
                .value_name("ORDER")
                .possible_values(&["unordered", "mrv"])
                .default_value("unordered")
                .help("How to pick the next slot to fill"),
        )
        .arg(
            Arg::with_name("value-order")
                .long("value-order")
                .value_name("ORDER")
                .possible_values(&["domain", "lcv"])
                .default_value("domain")
                .help("How to order the words tried for a slot"),
        )
        .arg(
            Arg::with_name("strategy")
                .long("strategy")
                .value_name("STRATEGY")
                .possible_values(&["recursive", "stack"])
                .default_value("recursive"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .takes_value(false),
        )
        .get_matches();

    let default_level = if matches.is_present("verbose") {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = FillerConfig {
        variable_order: matches
            .value_of("variable-order")
            .unwrap_or("unordered")
            .parse::<VariableOrder>()?,
        value_order: matches
            .value_of("value-order")
            .unwrap_or("domain")
            .parse::<ValueOrder>()?,
        strategy: matches
            .value_of("strategy")
            .unwrap_or("recursive")
            .parse::<Strategy>()?,
    };

    let structure = matches
        .value_of("structure")
        .ok_or_else(|| String::from("Structure not included"))?;
    let words = matches
        .value_of("words")
        .ok_or_else(|| String::from("Word list not included"))?;

    let crossword = Crossword::load(structure).map_err(|e| e.to_string())?;
    let vocabulary = Vocabulary::load(words).map_err(|e| e.to_string())?;

    let now = Instant::now();
    let assignment = Solver::with_config(&crossword, &vocabulary, config).solve();
    let elapsed = now.elapsed();

    match assignment {
        None => println!("No solution."),
        Some(assignment) => {
            let rendered = Rendered::new(&crossword, &assignment);
            print!("{}", rendered);
            println!("Filled in {}ms.", elapsed.as_millis());
            match matches.value_of("output") {
                Some(output) if output.to_lowercase().ends_with(".png") => {
                    let font = match matches.value_of("font") {
                        Some(path) => Some(load_font(path).map_err(|e| e.to_string())?),
                        None => None,
                    };
                    save_png(output, &crossword, &assignment, font.as_ref())
                        .map_err(|e| e.to_string())?;
                }
                Some(output) => rendered.save(output).map_err(|e| e.to_string())?,
                None => {}
            }
        }
    }
    Ok(())
}
