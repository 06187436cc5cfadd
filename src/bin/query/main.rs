//! Answers point lookups against a serialized trie index, one per
//! line of standard input.
//!
//! `query FILE`

use std::{
    ffi::OsString,
    io::{self, BufRead, Write},
};

use log::info;

use trie_index::trie::ReaderTrie;

enum Parsed {
    Run(OsString),
    Help,
}

fn usage(prog: &str) -> String {
    format!("Usage: {} FILE\n", prog)
}

fn help_text(prog: &str) -> String {
    format!("{}This program has no other options.\n", usage(prog))
}

/// Parse argv (excluding argv[0]) per the `query` CLI contract.
fn parse_args(prog: &str, args: &[String]) -> Result<Parsed, String> {
    if args.len() == 1 && args[0] == "-h" {
        return Ok(Parsed::Help);
    }
    if args.len() != 1 {
        return Err(usage(prog));
    }
    if args[0].starts_with('-') {
        return Err(usage(prog));
    }
    Ok(Parsed::Run(OsString::from(&args[0])))
}

fn run_loop<R: BufRead, W: Write>(trie: &ReaderTrie, input: R, mut out: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        match trie.lookup(line.as_bytes()) {
            Some(result) => {
                out.write_all(result.as_bytes())?;
                out.write_all(b"\n")?;
            }
            None => out.write_all(b"Not found\n")?,
        }
    }
    Ok(())
}

fn run() -> i32 {
    env_logger::init();
    let prog = std::env::args().next().unwrap_or_else(|| "query".to_string());
    let args: Vec<String> = std::env::args().skip(1).collect();

    let path = match parse_args(&prog, &args) {
        Ok(Parsed::Help) => {
            print!("{}", help_text(&prog));
            return 0;
        }
        Ok(Parsed::Run(path)) => path,
        Err(msg) => {
            eprint!("{}", msg);
            return 1;
        }
    };

    let trie = match ReaderTrie::open(&path) {
        Ok(t) => t,
        Err(err) => {
            eprintln!("Failed to load trie: {}", err);
            return 2;
        }
    };
    info!("query: loaded {:?}", path);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run_loop(&trie, stdin.lock(), stdout.lock()) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("I/O error: {}", err);
            2
        }
    }
}

fn main() {
    std::process::exit(run());
}

#[cfg(test)]
#[path = "main_test.rs"]
mod query_test;
