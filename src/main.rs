use clap::Parser;
use page_testgen::cli::commands::{cmd_analyze, cmd_generate, cmd_pipeline};
use page_testgen::cli::config::{
    Cli, Commands, resolve_browser, resolve_server_script, resolve_url,
};
use page_testgen::cli::logging::init_logging;
use page_testgen::config::loader::load_config;
use tracing::error;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        error!(error = %e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref());
    let server_script = resolve_server_script(cli.server_script.as_deref(), &config);

    match cli.command {
        Commands::Analyze {
            url,
            output_dir,
            audit,
            browser,
        } => {
            let url = resolve_url(url.as_deref(), &config);
            let browser = resolve_browser(browser, &config);
            cmd_analyze(&url, &output_dir, audit, browser, &server_script)?;
        }
        Commands::Generate {
            snapshot,
            output_dir,
        } => {
            cmd_generate(&snapshot, &output_dir, &config.suite)?;
        }
        Commands::Pipeline {
            url,
            analysis_dir,
            output_dir,
            audit,
            browser,
        } => {
            let url = resolve_url(url.as_deref(), &config);
            let browser = resolve_browser(browser, &config);
            cmd_pipeline(
                &url,
                &analysis_dir,
                &output_dir,
                audit,
                &config.suite,
                browser,
                &server_script,
            )?;
        }
    }

    Ok(())
}
