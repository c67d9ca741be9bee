use clap::Parser;
use finboard::app::{cli::Args, logging, server};

#[tokio::main]
async fn main() {
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();
    logging::init();

    let args = Args::parse();
    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = server::run(config).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
