#![allow(clippy::uninlined_format_args)]

use rxlite::{Flags, RegExp};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Instant,
};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "rxlite-tool")]
struct Opt {
    /// The regular expression, or wildcard pattern with the 'w' flag.
    pattern: String,

    /// The flags of the regular expression: 'i' for case-insensitive, 'w' for
    /// wildcard.
    #[structopt(long, short, parse(from_str = Flags::from))]
    flags: Option<Flags>,

    /// Disable the start-position prefilter.
    #[structopt(long)]
    no_opt: bool,

    /// Dump the bytecode to stdout.
    #[structopt(long)]
    dump_bytecode: bool,

    /// Print the number of overlapping matches instead of the first match.
    #[structopt(long, conflicts_with_all = &["replace", "reverse"])]
    count: bool,

    /// Print each input with every match replaced.
    #[structopt(long, conflicts_with_all = &["count", "reverse"])]
    replace: Option<String>,

    /// Search backwards from the end of each input.
    #[structopt(long, conflicts_with_all = &["count", "replace"])]
    reverse: bool,

    /// The input values to match against.
    #[structopt(conflicts_with_all = &["bench", "file"])]
    inputs: Vec<String>,

    /// Match against the contents of a specified file.
    #[structopt(long, conflicts_with_all = &["bench", "inputs"])]
    file: Option<PathBuf>,

    /// Benchmark the matches of the specified file.
    #[structopt(long, conflicts_with_all = &["file", "inputs"])]
    bench: Option<PathBuf>,
}

/// How each input is examined.
#[derive(Debug)]
enum Mode {
    First,
    Count,
    Replace(String),
    Reverse,
}

fn format_match(r: &rxlite::Match, input: &str) -> String {
    // Matches are byte ranges, which need not fall on char boundaries.
    let text = String::from_utf8_lossy(&input.as_bytes()[r.range()]);
    format!("\"{}\" ({}..{})", text, r.start(), r.end())
}

fn exec_re_on_string(re: &RegExp, mode: &Mode, input: &str) {
    match mode {
        Mode::First => {
            let mut matches = re.find_iter(input);
            if let Some(res) = matches.next() {
                let count = 1 + matches.count();
                println!("Match: {}, total: {}", format_match(&res, input), count);
            } else {
                println!("No match");
            }
        }
        Mode::Count => println!("Count: {}", re.count(input)),
        Mode::Replace(with) => println!("{}", re.replace_all(input, with)),
        Mode::Reverse => match re.find_rev(input, None) {
            Some(res) => println!("Match: {}", format_match(&res, input)),
            None => println!("No match"),
        },
    }
}

fn bench_re_on_path(re: &RegExp, path: &Path) {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            println!("{}: {}", err, path.display());
            return;
        }
    };
    let input = contents.as_str();
    // Warmup
    re.find_iter(input).count();
    let start = Instant::now();
    for _ in 0..25 {
        re.find_iter(input).count();
    }
    let duration = start.elapsed();
    println!("{} ms", duration.as_millis());
}

fn dump_bytecode(re: &RegExp) {
    let Some(cr) = re.compiled() else {
        return;
    };
    println!("{:#?}", cr);
    let words: Vec<String> = cr.encode().iter().map(|w| format!("{:04x}", w)).collect();
    for line in words.chunks(8) {
        println!("  {}", line.join(" "));
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));
    let args = Opt::from_args();

    let mut flags = args.flags.unwrap_or_default();
    flags.no_opt = args.no_opt;
    let re = RegExp::with_flags(&args.pattern, flags);
    if let Some(err) = re.error() {
        println!("{:?}: {}", err.kind, err);
        std::process::exit(1);
    }
    log::debug!("compiled {} with flags {:?}", re, re.flags());

    if args.dump_bytecode {
        dump_bytecode(&re);
    }

    let mode = if args.count {
        Mode::Count
    } else if let Some(with) = args.replace {
        Mode::Replace(with)
    } else if args.reverse {
        Mode::Reverse
    } else {
        Mode::First
    };

    if let Some(ref path) = args.bench {
        bench_re_on_path(&re, path);
    } else if let Some(ref path) = args.file {
        match fs::read_to_string(path) {
            Ok(contents) => exec_re_on_string(&re, &mode, contents.as_str()),
            Err(err) => println!("{}: {}", err, path.display()),
        };
    } else {
        for input in args.inputs {
            exec_re_on_string(&re, &mode, &input);
        }
    }
}
