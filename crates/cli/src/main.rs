use clap::Parser;

mod cli;
mod commands;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    alyomi_observability::init_with(cli.log_format);

    let stdout = std::io::stdout();
    commands::run(&cli, &mut stdout.lock())
}
