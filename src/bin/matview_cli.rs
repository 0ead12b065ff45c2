//! CLI tool for matview - browses a generated matrix and prints a window
//!
//! Usage:
//!   matview_cli <height> <width> <row,col>          # Output JSON to stdout
//!   matview_cli 1000 1000 50,50
//!
//! Runs the deterministic in-memory provider, moves the view to the given
//! focal cell and prints the fetched window plus its response.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::rc::Rc;

use matview::config::RawOptions;
use matview::geometry::parse_position;
use matview::provider::SequentialProvider;
use matview::MatrixView;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        eprintln!("Usage: matview_cli <height> <width> <row,col>");
        std::process::exit(1);
    }

    let height: u32 = match args[1].parse() {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Error parsing height {}: {}", args[1], e);
            std::process::exit(1);
        }
    };
    let width: u32 = match args[2].parse() {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error parsing width {}: {}", args[2], e);
            std::process::exit(1);
        }
    };
    let focal = match parse_position(&args[3]) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error parsing focal position: {}", e);
            std::process::exit(1);
        }
    };

    let provider = Rc::new(SequentialProvider::new(height, width));
    let options = RawOptions {
        active: Some(true),
        api: Some("memory://sequential".to_string()),
        ..RawOptions::default()
    };

    let view = match MatrixView::new(options, provider) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error building view: {}", e);
            std::process::exit(1);
        }
    };

    view.set_render_callback(|window, response| {
        let output = serde_json::json!({
            "window": window,
            "response": response,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error serializing JSON: {}", e),
        }
    });

    if let Err(e) = view.move_to(focal) {
        eprintln!("Error browsing to {},{}: {}", focal.row, focal.col, e);
        std::process::exit(1);
    }
}
