#[cfg(test)]
#[path = "../../tests/unit/commands/tour_test.rs"]
mod tour_test;

use super::*;
use clap::{Arg, ArgAction, Command};
use std::io::{BufReader, BufWriter, Write};

use adm_cli::extensions::tour::{TourReport, create_tour_report, write_json_report, write_text_report};
use adm_core::construction::{GeneratorSettings, generate_point_set};
use adm_core::format::{GridSettings, read_point_set, write_point_set};
use adm_core::models::PointSet;
use adm_core::utils::{DefaultRandom, ExerciseResult};

const SIZE_ARG_NAME: &str = "size";
const WIDTH_ARG_NAME: &str = "width";
const HEIGHT_ARG_NAME: &str = "height";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const POINTS_ARG_NAME: &str = "points";
const PLACEHOLDER_ARG_NAME: &str = "placeholder";
const NO_ANCHOR_ORIGIN_ARG_NAME: &str = "no-anchor-origin";
const FORMAT_ARG_NAME: &str = "format";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const OUT_POINTS_ARG_NAME: &str = "out-points";
const LOG_ARG_NAME: &str = "log";

pub fn get_tour_app() -> Command {
    Command::new("tour")
        .about("Draws points on a grid and builds a greedy nearest neighbour tour over them")
        .arg(
            Arg::new(SIZE_ARG_NAME)
                .help("Amount of randomly generated points")
                .short('s')
                .long(SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(WIDTH_ARG_NAME)
                .help("Exclusive upper bound of generated x coordinates")
                .short('x')
                .long(WIDTH_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(HEIGHT_ARG_NAME)
                .help("Exclusive upper bound of generated y coordinates")
                .short('y')
                .long(HEIGHT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(POINTS_ARG_NAME)
                .help("Specifies path to json file with labeled points to use instead of generated ones")
                .short('p')
                .long(POINTS_ARG_NAME)
                .required(false)
                .conflicts_with_all([SIZE_ARG_NAME, WIDTH_ARG_NAME, HEIGHT_ARG_NAME, RANDOM_SEED_ARG_NAME]),
        )
        .arg(
            Arg::new(PLACEHOLDER_ARG_NAME)
                .help("A single character drawn in empty grid cells")
                .long(PLACEHOLDER_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(NO_ANCHOR_ORIGIN_ARG_NAME)
                .help("Crops the drawn grid to the points instead of starting it at the origin")
                .long(NO_ANCHOR_ORIGIN_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies output format")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_POINTS_ARG_NAME)
                .help("Specifies path to the file where used points are saved as json")
                .long(OUT_POINTS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_tour(matches: &ArgMatches, out_writer: &mut dyn Write) -> Result<(), String> {
    let logger = get_logger(matches.get_flag(LOG_ARG_NAME));

    let points = get_points(matches, &logger)?;
    save_points(matches, &points, &logger)?;
    let settings = GridSettings::default()
        .with_placeholder(parse_placeholder(matches)?)
        .with_anchor_origin(!matches.get_flag(NO_ANCHOR_ORIGIN_ARG_NAME));

    let report = create_tour_report(points, &settings, &logger).map_err(|err| format!("cannot build tour: '{err}'"))?;

    let format = matches.get_one::<String>(FORMAT_ARG_NAME).map(|format| format.as_str()).unwrap_or("text");
    let result = match matches.get_one::<String>(OUT_RESULT_ARG_NAME) {
        Some(path) => {
            let mut out_file = BufWriter::new(create_file(path, "out result")?);
            write_report(&mut out_file, format, &report).and_then(|_| Ok(out_file.flush()?))
        }
        None => write_report(out_writer, format, &report),
    };

    result.map_err(|err| format!("cannot write result: '{err}'"))
}

fn get_points(matches: &ArgMatches, logger: &InfoLogger) -> Result<PointSet, String> {
    if let Some(path) = matches.get_one::<String>(POINTS_ARG_NAME) {
        let points =
            read_point_set(BufReader::new(open_file(path, "points")?)).map_err(|err| format!("cannot read points: '{err}'"))?;
        (logger)(format!("{} points read from '{path}'", points.len()).as_str());

        return Ok(points);
    }

    let settings = GeneratorSettings::default()
        .with_size(parse_int_value::<usize>(matches, SIZE_ARG_NAME, "size")?)
        .with_bounds(
            parse_int_value::<i32>(matches, WIDTH_ARG_NAME, "width")?,
            parse_int_value::<i32>(matches, HEIGHT_ARG_NAME, "height")?,
        );
    let random = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")?
        .map_or_else(DefaultRandom::default, DefaultRandom::new_with_seed);

    let points = generate_point_set(&settings, &random).map_err(|err| format!("cannot generate points: '{err}'"))?;
    (logger)(format!("{} points generated within {}x{}", points.len(), settings.max_x, settings.max_y).as_str());

    Ok(points)
}

fn save_points(matches: &ArgMatches, points: &PointSet, logger: &InfoLogger) -> Result<(), String> {
    if let Some(path) = matches.get_one::<String>(OUT_POINTS_ARG_NAME) {
        write_point_set(BufWriter::new(create_file(path, "out points")?), points)
            .map_err(|err| format!("cannot write points: '{err}'"))?;
        (logger)(format!("{} points saved to '{path}'", points.len()).as_str());
    }

    Ok(())
}

fn parse_placeholder(matches: &ArgMatches) -> Result<Option<char>, String> {
    matches
        .get_one::<String>(PLACEHOLDER_ARG_NAME)
        .map(|value| {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(placeholder), None) => Ok(placeholder),
                _ => Err(format!("placeholder must be a single character, got: '{value}'")),
            }
        })
        .transpose()
}

fn write_report(writer: &mut dyn Write, format: &str, report: &TourReport) -> ExerciseResult<()> {
    match format {
        "json" => write_json_report(writer, report),
        _ => write_text_report(writer, report),
    }
}
