//! Reads a delimited text file and writes a serialized trie index.
//!
//! `compile [-d DELIM] [-e] [-h] INPUT OUTPUT`

use std::{
    ffi::OsString,
    io::{BufRead, IsTerminal, Write},
};

use log::{info, warn};

use trie_index::{trie::BuildTrie, BuildConfig};

struct Args {
    delimiter: u8,
    with_content: bool,
    input: OsString,
    output: OsString,
}

enum Parsed {
    Run(Args),
    Help,
}

fn usage(prog: &str) -> String {
    format!("Usage: {} [OPTIONS...] INPUT OUTPUT\n", prog)
}

fn help_text(prog: &str) -> String {
    format!(
        "{}\nAvailable options:\n  -d DELIMITER    set delimiter between key and value\n  -e              do not store data associated with keys\n  -h              print this help\n",
        usage(prog)
    )
}

/// Parse argv (excluding argv[0]) per the `compile` CLI contract.
/// Factored out of `main` so it is unit-testable without a process.
fn parse_args(prog: &str, args: &[String]) -> Result<Parsed, String> {
    let mut delimiter = b':';
    let mut with_content = true;
    let mut operands = Vec::new();

    let mut it = args.iter();
    while let Some(arg) = it.next() {
        if arg == "-h" {
            return Ok(Parsed::Help);
        } else if arg == "-e" {
            with_content = false;
        } else if let Some(rest) = arg.strip_prefix("-d") {
            let d = if rest.is_empty() {
                it.next().ok_or_else(|| usage(prog))?
            } else {
                rest
            };
            delimiter = *d.as_bytes().first().ok_or_else(|| usage(prog))?;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(usage(prog));
        } else {
            operands.push(arg.clone());
        }
    }

    if operands.len() != 2 {
        return Err(format!("Expected input and output file names\n{}", usage(prog)));
    }

    Ok(Parsed::Run(Args {
        delimiter,
        with_content,
        input: OsString::from(&operands[0]),
        output: OsString::from(&operands[1]),
    }))
}

/// Parse one input line into `(key, value)` per the record grammar, or
/// `None` if the line should be skipped.
fn parse_record(line: &str, delimiter: u8, with_content: bool) -> Option<(Vec<u8>, Vec<u8>)> {
    if line.len() <= 1 {
        return None;
    }
    let bytes = line.as_bytes();
    match bytes.iter().position(|&b| b == delimiter) {
        Some(pos) => Some((bytes[..pos].to_vec(), bytes[pos + 1..].to_vec())),
        None if !with_content => Some((bytes.to_vec(), Vec::new())),
        None => None,
    }
}

fn load(input: &OsString, config: BuildConfig, delimiter: u8) -> trie_index::Result<BuildTrie> {
    let file = trie_index::util::open_file_r(input)?;
    let reader = std::io::BufReader::new(file);
    let isatty = std::io::stdout().is_terminal();

    let mut trie = BuildTrie::from_config(config);
    let mut count: u32 = 0;
    let mut stdout = std::io::stdout();

    for line in reader.lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        match parse_record(&line, delimiter, config.with_content) {
            Some((key, value)) => {
                trie.insert(&key, &value)?;
                count += 1;
                if isatty && count % 1000 == 0 {
                    print!("\rInserted {} items", count);
                    let _ = stdout.flush();
                }
            }
            None => warn!("skipped malformed line"),
        }
    }

    if isatty {
        print!("\r");
    }
    println!("Inserted {} items", count);
    info!("compile: {} records inserted", count);

    Ok(trie)
}

fn run() -> i32 {
    env_logger::init();
    let prog = std::env::args().next().unwrap_or_else(|| "compile".to_string());
    let args: Vec<String> = std::env::args().skip(1).collect();

    let parsed = match parse_args(&prog, &args) {
        Ok(p) => p,
        Err(msg) => {
            eprint!("{}", msg);
            return 1;
        }
    };

    let args = match parsed {
        Parsed::Help => {
            print!("{}", help_text(&prog));
            return 0;
        }
        Parsed::Run(a) => a,
    };

    let config = BuildConfig::new(args.with_content, false);
    let trie = match load(&args.input, config, args.delimiter) {
        Ok(t) => t,
        Err(err) => {
            eprintln!("Failed to open input file: {}", err);
            return 2;
        }
    };

    info!("compile: sealing and serializing to {:?}", args.output);
    match trie.seal().and_then(|sealed| sealed.serialize(&args.output)) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Failed to write output file: {}", err);
            2
        }
    }
}

fn main() {
    std::process::exit(run());
}

#[cfg(test)]
#[path = "main_test.rs"]
mod compile_test;
