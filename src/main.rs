use clap::Parser;
use quickbase_engine::cli::{
    self,
    parsers::{CliMode, CliParser},
};

fn main() {
    dotenvy::dotenv().ok();

    let args = CliParser::parse();

    let outcome = match args.mode {
        CliMode::Client => {
            cli::run_client();
            Ok(())
        }
        CliMode::Demo => cli::run_demo(),
        CliMode::Bench(bench_args) => cli::run_bench(&bench_args),
    };

    if let Err(message) = outcome {
        eprintln!("{}", message);
        std::process::exit(1);
    }
}
