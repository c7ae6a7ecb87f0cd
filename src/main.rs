use clap::Parser;

fn main() {
    // Load .env early; ignore if missing.
    dotenvy::dotenv().ok();

    marquee::init_tracing();

    let cli = marquee::Cli::parse();
    if let Err(err) = marquee::run(cli) {
        // Alternate form prints the context chain; bare alerts print as-is.
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
