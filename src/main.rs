mod cli;
mod common;

fn main() -> anyhow::Result<()> {
    cli::run()
}
