use lambda_one::config::Config;
use lambda_one::event::EventSource;
use lambda_one::Error;
use lambda_runtime::{Context, LambdaEvent};
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::process;
use structopt::StructOpt;

/// Runs Lambda One locally against a single event and prints its response
#[derive(StructOpt, Debug)]
struct Opt {
    /// Config with [invoke] settings and named [events] (defaults to ./Lambda.toml when present)
    #[structopt(long, parse(from_os_str))]
    config: Option<PathBuf>,
    /// Log level: off, error, warn, info, debug or trace (overrides [invoke] log_level)
    #[structopt(long)]
    log_level: Option<String>,
    /// Pretty-print the response
    #[structopt(long)]
    pretty: bool,
    /// Event to invoke with: `-` for stdin, a key in table [events] of the config,
    /// or a path to a JSON file
    #[structopt(name = "EVENT", default_value = "-")]
    event: String,
}

#[tokio::main]
async fn main() {
    let opt = Opt::from_args();

    if let Err(e) = run(opt).await {
        eprintln!("Invoke failed: {}", e);
        process::exit(1);
    }
}

async fn run(opt: Opt) -> lambda_one::Result<()> {
    let config = Config::load(opt.config.as_deref())?;
    let level = config.log_level(opt.log_level.as_deref())?;
    SimpleLogger::new().with_level(level).init()?;

    let source = EventSource::parse(&opt.event, &config);
    log::debug!("Reading event from {}", source);
    let event = source.read()?;

    let response = lambda_one::handler(LambdaEvent::new(event, Context::default()))
        .await
        .map_err(Error::Handler)?;

    let output = if opt.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);
    Ok(())
}
