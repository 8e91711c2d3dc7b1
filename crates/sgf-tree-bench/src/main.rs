//! Benchmark for SGF parsing and validation.
//!
//! Reads an SGF file (or synthesizes a large branching record), then times
//! the parse and validation passes separately.
//!
//! ```text
//! bench-sgf [FILE] [--dot OUT] [--json]
//! ```

use std::fs;
use std::time::{Duration, Instant};

use serde::Serialize;
use sgf_tree::{DotBuilder, GameTree, ParseOptions, parse_collection_with, parse_with_options};
use tracing::{info, warn};

// =============================================================================
// INPUT
// =============================================================================

const MOVES_PER_LINE: usize = 200;
const BRANCHES: usize = 50;

/// Builds one game with `BRANCHES` variations of `MOVES_PER_LINE` moves each.
fn synthesize_record() -> Vec<u8> {
    let letter = |i: usize| (b'a' + (i % 19) as u8) as char;
    let mut sgf = String::from("(;FF[4]GM[1]SZ[19]CA[UTF-8]PB[Black]PW[White]KM[6.5]");
    for branch in 0..BRANCHES {
        sgf.push('(');
        for mv in 0..MOVES_PER_LINE {
            let color = if mv % 2 == 0 { 'B' } else { 'W' };
            let x = letter(mv + branch);
            let y = letter(mv * 7 + branch * 3);
            sgf.push_str(&format!(";{color}[{x}{y}]"));
            if mv % 25 == 0 {
                sgf.push_str("C[Move comment with an escaped \\] bracket\\\nand a soft break]");
            }
        }
        sgf.push(')');
    }
    sgf.push(')');
    sgf.into_bytes()
}

// =============================================================================
// SUMMARY
// =============================================================================

#[derive(Debug, Serialize)]
struct Summary {
    source: String,
    bytes: usize,
    trees: usize,
    nodes: usize,
    properties: usize,
    parse_ms: f64,
    validate_ms: f64,
    dot_ms: f64,
    mb_per_sec: f64,
}

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}

fn count_properties(trees: &[GameTree]) -> usize {
    trees
        .iter()
        .flat_map(|tree| tree.iter_preorder().filter_map(move |id| tree.node(id)))
        .map(|node| node.len())
        .sum()
}

struct Args {
    path: Option<String>,
    dot: Option<String>,
    json: bool,
}

fn parse_args() -> Args {
    let mut args = Args {
        path: None,
        dot: None,
        json: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dot" => args.dot = iter.next(),
            "--json" => args.json = true,
            _ => args.path = Some(arg),
        }
    }
    args
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = parse_args();
    let (source, input) = match &args.path {
        Some(path) => {
            info!(path, "loading record");
            (path.clone(), fs::read(path).expect("Failed to read SGF file"))
        }
        None => {
            info!(branches = BRANCHES, moves = MOVES_PER_LINE, "synthesizing record");
            ("synthetic".to_string(), synthesize_record())
        }
    };

    // Parse only
    let parse_start = Instant::now();
    let mut trees = parse_with_options(&input, ParseOptions::unvalidated())
        .unwrap_or_else(|e| panic!("Failed to parse {source}: {e}"));
    let parse_time = parse_start.elapsed();

    let nodes: usize = trees.iter().map(GameTree::len).sum();
    let properties = count_properties(&trees);
    println!(
        "Parsed {} trees, {} nodes, {} properties from {} bytes in {:?}",
        trees.len(),
        nodes,
        properties,
        input.len(),
        parse_time
    );

    // Validate
    let validate_start = Instant::now();
    if let Err(e) = sgf_tree::validate_collection(&mut trees) {
        warn!(error = %e, code = e.code().code(), "validation failed");
    }
    let validate_time = validate_start.elapsed();
    println!("Validated in {:?}", validate_time);

    // DOT rendering
    let dot_start = Instant::now();
    let dots = parse_collection_with(&input, DotBuilder::new)
        .unwrap_or_else(|e| panic!("Failed to render {source}: {e}"));
    let dot_time = dot_start.elapsed();
    println!("Rendered {} graphs in {:?}", dots.len(), dot_time);

    if let Some(out) = &args.dot {
        fs::write(out, dots.concat()).expect("Failed to write DOT output");
        info!(path = out, "wrote graph");
    }

    let total = parse_time + validate_time;
    let summary = Summary {
        source,
        bytes: input.len(),
        trees: trees.len(),
        nodes,
        properties,
        parse_ms: millis(parse_time),
        validate_ms: millis(validate_time),
        dot_ms: millis(dot_time),
        mb_per_sec: input.len() as f64 / total.as_secs_f64().max(f64::EPSILON) / 1_000_000.0,
    };
    println!(
        "Throughput: {:.1} MB/s (parse + validate)",
        summary.mb_per_sec
    );

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).expect("Failed to serialize summary")
        );
    }
}
