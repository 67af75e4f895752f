use {
    crate::common::{debug_println, DEBUG},
    anyhow::Context,
    clap::Parser,
    std::{path::PathBuf, sync::atomic::Ordering},
};

// Keeps the up-front buffer allocation at 64 MiB at most.
const MAX_CAPACITY: i64 = 1 << 24;

/// Read integers from a file and print them in reverse order
#[derive(Debug, Parser)]
pub struct Cli {
    /// Input file of whitespace-separated integers
    #[arg(default_value = "task1.txt")]
    input_path: PathBuf,

    /// Maximum number of integers to read
    #[arg(
        long,
        default_value_t = sequence::DEFAULT_CAPACITY as u32,
        value_parser = clap::value_parser!(u32).range(0..=MAX_CAPACITY)
    )]
    capacity: u32,

    /// Output file for the reversed sequence [leave unspecified for stdout]
    #[arg(short)]
    output_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

pub(crate) fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    DEBUG.store(cli.debug, Ordering::Relaxed);
    debug_println!("reading {}", cli.input_path.display());
    let loaded = loader::load_path(&cli.input_path, usize::try_from(cli.capacity)?)?;
    debug_println!(
        "read {} of at most {} integers, stopped at {}",
        loaded.sequence.len(),
        loaded.sequence.capacity(),
        loaded.stop
    );
    let mut sequence = loaded.sequence;
    debug_println!("{:?}", sequence.as_slice());
    sequence.reverse();
    debug_println!("{:?}", sequence.as_slice());
    if let Some(output_path) = cli.output_path {
        let mut file = std::fs::File::create(&output_path)
            .with_context(|| format!("failed to create output file {}", output_path.display()))?;
        printer::print_sequence(&sequence, &mut file)?;
    } else {
        printer::print_sequence(&sequence, &mut std::io::stdout().lock())?;
    }
    Ok(())
}
