//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use huffman_text::tools::cli::{huffopts_init, HuffOpts};
use huffman_text::tools::data_in::read_text;
use huffman_text::{HuffmanCodec, HuffmanError};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), HuffmanError> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger already initialized");
    }

    let options = huffopts_init();

    let result = run(&options);
    if let Err(e) = &result {
        error!("{}", e);
    }
    info!("Done.");
    result
}

/// Read the text, build its code and do whatever the options ask for.
fn run(opts: &HuffOpts) -> Result<(), HuffmanError> {
    let text = read_text(&opts.file)?;
    let codec = HuffmanCodec::build(&text);

    if opts.show_table {
        if let Some(tree) = codec.tree() {
            println!("tree weight {}, depth {}", tree.weight(), tree.depth());
        }
        for (symbol, code) in codec.table().entries() {
            println!(
                "{:>8}  {:>8}  {}",
                format!("{:?}", symbol),
                codec.freqs().get(symbol).unwrap_or(0),
                code
            );
        }
    }

    let bits = codec.encode(&text)?;
    if opts.show_bits {
        println!("{}", bits);
    }

    if opts.check {
        codec.verify(&text, &bits)?;
        println!("Round trip OK");
    }

    println!("{}", codec.report(&text));
    Ok(())
}
