use clap::Parser;
use pokedex::app::settings::{DEFAULT_BASE_URL, DEFAULT_CACHE_INTERVAL, DEFAULT_PAGE_SIZE};
use pokedex::app::Settings;
use pokedex::Session;
use std::io;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Explore the Pokemon catalog from your terminal")]
struct Args {
    /// Root URL of the catalog API
    #[arg(long = "base-url", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Seconds a response stays cached (also how often stale entries are swept)
    #[arg(long = "cache-interval", default_value_t = DEFAULT_CACHE_INTERVAL.as_secs(), value_parser = clap::value_parser!(u64).range(1..))]
    cache_interval: u64,

    /// Location areas shown per page
    #[arg(long = "page-size", default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    page_size: u32,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let settings = Settings {
        base_url: args.base_url,
        cache_interval: Duration::from_secs(args.cache_interval),
        page_size: args.page_size,
    };

    let mut session = match Session::new(settings) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = pokedex::repl::run(&mut session, stdin.lock(), &mut stdout) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
