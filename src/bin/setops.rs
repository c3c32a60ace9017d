use anyhow::{Context, Result};
use clap::Parser;
use simple_set::ops::Op;
use simple_set::{IntSet, resolve_capacity};

#[derive(Parser, Debug)]
#[command(version, about = "Replay add/remove/contains operations against an IntSet", long_about = None)]
struct Args {
    /// Initial capacity [default: $SIMPLE_SET_CAPACITY or 5]
    ///
    /// Must be a positive integer.
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Print a summary to stderr when done
    #[arg(short, long)]
    verbose: bool,

    /// Operations: add:<n>, remove:<n>, contains:<n>, size, empty
    #[arg(required = true)]
    ops: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let ops = args
        .ops
        .iter()
        .map(|t| Op::parse(t).with_context(|| format!("failed to parse operation {:?}", t)))
        .collect::<Result<Vec<_>>>()?;

    let capacity = resolve_capacity(args.capacity)?;
    let mut set = IntSet::with_capacity(capacity)?;

    for op in &ops {
        if let Some(line) = op.apply(&mut set) {
            println!("{}", line);
        }
    }

    if args.verbose {
        eprintln!("size={} capacity={}", set.len(), set.capacity());
    }

    Ok(())
}
