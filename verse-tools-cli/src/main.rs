use clap::Parser;
use verse_tools_core::{dotenv, execute_tool, style, CoreCliArgs};

/// exit status for a completed run that found problems under --strict
const PROBLEMS_EXIT_CODE: i32 = 2;

fn main() {
    // .env may carry VERSE_TOOLS_CONFIG
    dotenv().ok();

    let cli_args = CoreCliArgs::parse();
    match execute_tool(&cli_args) {
        Ok(outcome) => {
            if cli_args.strict && outcome.has_problems() {
                if !cli_args.json {
                    eprintln!(
                        "\n{}",
                        style("--strict: problems detected, exiting with status 2").yellow()
                    );
                }
                std::process::exit(PROBLEMS_EXIT_CODE);
            }
        }
        Err(e) => {
            eprintln!(
                "{} {} {}",
                style("❌"),
                style("verse-tools failed:").red().bold(),
                style(format!("{e:#}")).red()
            );
            std::process::exit(1);
        }
    }
}
