// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use dagseam::dump::{energy_to_image, seam_overlay};
use dagseam::{Direction, SeamCarver};

use clap::{App, Arg};
use itertools::Itertools;
use tracing::{info, Level};

fn log_level(verbosity: u64) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<(), failure::Error> {
    let matches = App::new("dagseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Find the lowest-energy seam of an image")
        .arg(
            Arg::with_name("image")
                .help("The image to examine")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("horizontal")
                .long("horizontal")
                .short("H")
                .help("Find a left-to-right seam instead of a top-to-bottom one"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .short("e")
                .takes_value(true)
                .value_name("FILE")
                .help("Write the energy map, in grey, to FILE"),
        )
        .arg(
            Arg::with_name("overlay")
                .long("overlay")
                .short("o")
                .takes_value(true)
                .value_name("FILE")
                .help("Write the image with the seam drawn in red to FILE"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Log more (repeat for more still)"),
        )
        .get_matches();

    tracing_subscriber::fmt()
        .with_max_level(log_level(matches.occurrences_of("verbose")))
        .with_writer(std::io::stderr)
        .init();

    let direction = direction_of(matches.is_present("horizontal"));
    // "image" is required, so clap has already refused to get this far
    // without it.
    let path = matches.value_of("image").unwrap_or_default();

    let image = image::open(path)?.to_rgb8();
    let carver = SeamCarver::new(&image)?;
    info!(path, width = carver.width(), height = carver.height(), "loaded");

    let found = carver.find_seam(direction);
    info!(%direction, cost = found.cost, "seam");
    println!("{}", found.seam.iter().join(" "));

    if let Some(out) = matches.value_of("energy") {
        energy_to_image(carver.energy_map()).save(out)?;
        info!(out, "wrote energy map");
    }
    if let Some(out) = matches.value_of("overlay") {
        seam_overlay(carver.picture(), &found.seam, direction)?.save(out)?;
        info!(out, "wrote seam overlay");
    }
    Ok(())
}

fn direction_of(horizontal: bool) -> Direction {
    if horizontal {
        Direction::Horizontal
    } else {
        Direction::Vertical
    }
}
