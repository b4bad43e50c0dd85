use clap::Parser;
use t1ax::cli::Args;
use t1ax::config::ExportConfig;
use t1ax::export;

fn main() {
    let args = Args::parse();

    setup_logging(args.verbose);

    if !args.source_root.is_dir() {
        eprintln!("Error: {} is not a directory", args.source_root.display());
        std::process::exit(1);
    }

    let config = ExportConfig::new(args.source_root, args.output_root);

    match export::run_export(&config) {
        Ok(summary) => export::print_summary(&summary, &config),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Warn)
            .init();
    }
}
