mod cfg;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::{init_config, Config};

use hyquery::{query_with, QueryOptions, ServerStatus};

use crate::cfg::CliConfig;

#[derive(Parser, Debug)]
#[command(name = "hyquery", about = "Query a Hytale server for live status over UDP")]
struct Args {
    /// Server hostname or IP address
    host: String,

    #[arg(short, long, help = "Server query port (default: 5520)")]
    port: Option<u16>,

    #[arg(short, long, help = "Response timeout in milliseconds (default: 5000)")]
    timeout: Option<u64>,

    #[arg(short, long, help = "Request the full listing (players and plugins)")]
    full: bool,

    #[arg(long, help = "Print the response as JSON")]
    json: bool,

    #[arg(short, long, help = "Defaults file (toml)")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Log protocol traffic")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    configure_logging(args.verbose);

    let defaults = match &args.config {
        Some(path) => CliConfig::load(path).await?,
        None => CliConfig::default(),
    };

    let port = args.port.unwrap_or(defaults.port);
    let options = QueryOptions {
        timeout: Duration::from_millis(args.timeout.unwrap_or(defaults.timeout_ms)),
        full: args.full || defaults.full,
    };

    let status = query_with(&args.host, port, options).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        print_status(&status);
    }

    Ok(())
}

fn configure_logging(verbose: bool) {
    let pattern = "[{d(%Y-%m-%d %H:%M:%S)}] <{M}> {h([{l}])}: {m}\n";
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .expect("Could not build logger config");

    init_config(config).expect("Could not initialize logger config");
}

fn print_status(status: &ServerStatus) {
    let info = status.info();

    println!("{} - {}", info.server_name, info.motd);
    println!(
        "players: {}/{}  port: {}",
        info.current_players, info.max_players, info.host_port
    );
    println!(
        "version: {} (protocol {}, hash {})",
        info.version, info.protocol_version, info.protocol_hash
    );

    if let Some(full) = status.as_full() {
        println!("online ({}):", full.players.len());
        for player in &full.players {
            println!("  {} [{}]", player.name, player.uuid);
        }

        println!("plugins ({}):", full.plugins.len());
        for plugin in &full.plugins {
            let state = if plugin.enabled { "" } else { " (disabled)" };
            println!("  {} {}{}", plugin.id, plugin.version, state);
        }
    }
}
