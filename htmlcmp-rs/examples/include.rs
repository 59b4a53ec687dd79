//! Example: Check that a table of one document is included in another
//!
//! Both documents are searched for the same `<table class="fixed">`, then the
//! first table is checked to be a prefix of the second one.
//!
//! Usage: cargo run --example include <reference.html> <candidate.html>

use std::env;

use htmlcmp::{find_node, included_node, parse_file, print_data, NodeContent};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 3 {
        let program = args.first().map_or("include", String::as_str);
        eprintln!("Usage: {} <reference.html> <candidate.html>", program);
        std::process::exit(1);
    }

    let to_find = NodeContent::element("table").with_attribute("class", "fixed");

    eprintln!("Parsing reference: {}", args[1]);
    let Some(m) = find_node(&parse_file(&args[1])?, &to_find) else {
        eprintln!("{} not found in {}", print_data(&to_find), args[1]);
        std::process::exit(1);
    };

    eprintln!("Parsing candidate: {}", args[2]);
    let Some(n) = find_node(&parse_file(&args[2])?, &to_find) else {
        eprintln!("{} not found in {}", print_data(&to_find), args[2]);
        std::process::exit(1);
    };

    match included_node(Some(&m), Some(&n)) {
        None => eprintln!("Reference table is included in the candidate."),
        Some(f) => println!(
            "nodes structures diverge from: {}",
            print_data(f.borrow().content())
        ),
    }

    Ok(())
}
