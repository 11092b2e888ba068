use clap::Parser;
use wp2middleman::application::{ConvertService, Progress};
use wp2middleman::cli::{format_output_dir_created, format_summary, Cli};
use wp2middleman::error::Error;
use wp2middleman::infrastructure::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let cwd = std::env::current_dir()?;

    // Defaults, then config file, then flags
    let config = Config::discover(&cwd, cli.config.as_deref())?;
    let config = cli.apply(config).resolve_paths(&cwd);

    let service = ConvertService::new(config);
    let report = service.execute(|progress| match progress {
        Progress::OutputDirCreated(dir) => println!("{}", format_output_dir_created(dir)),
        Progress::Written(path) => println!("{}", path.display()),
    })?;

    println!("{}", format_summary(&report));
    Ok(())
}
