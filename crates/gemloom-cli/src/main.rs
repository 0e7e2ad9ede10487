use anyhow::{Context, Result};
use gemloom_engine::io::{read_lines, write_blocks};
use gemloom_engine::pipeline::{reassemble, send_lines};
use std::fs::File;
use std::io::{BufWriter, stdin, stdout};
use std::{env, process};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let (input, output) = match args.len() {
        1 => (None, None),
        2 => (Some(args[1].clone()), None),
        3 => (Some(args[1].clone()), Some(args[2].clone())),
        _ => {
            eprintln!("Usage: {} [input.md|-] [output|-]", args[0]);
            process::exit(1);
        }
    };
    // "-" means stdio on either side
    let input = input.filter(|p| p != "-");
    let output = output.filter(|p| p != "-");

    let lines = match &input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file '{path}'"))?;
            read_lines(file).with_context(|| format!("failed to read input file '{path}'"))?
        }
        None => read_lines(stdin().lock()).context("failed to read stdin")?,
    };
    log::info!(
        "read {} lines from {}",
        lines.len(),
        input.as_deref().unwrap_or("stdin")
    );

    let blocks = reassemble(send_lines(lines));

    let written = match &output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file '{path}'"))?;
            write_blocks(blocks, &mut BufWriter::new(file))
                .with_context(|| format!("failed to write output file '{path}'"))?
        }
        None => write_blocks(blocks, &mut stdout().lock()).context("failed to write stdout")?,
    };
    log::info!("wrote {written} reassembled blocks");

    Ok(())
}
