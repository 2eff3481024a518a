mod completer;
mod config;
mod repl;

use tracing_subscriber::EnvFilter;

fn main() -> rustyline::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = config::CliConfig::load();
    let mut repl = repl::Repl::new(config);
    repl.run()
}
