use clap::Parser;
use std::io;

use namecraft::cli::Args;
use namecraft::{app, log, provider, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log::init_logger(args.debug);

    let stdin = io::stdin();
    let code = app::run(
        &args,
        Config::load,
        provider::make_provider,
        &mut stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    )
    .await?;

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
