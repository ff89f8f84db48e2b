//! # ArmPanel Main Entry Point
//!
//! Console host for the arm/disarm panel: wires the local transport, the
//! stdin event source, and the INI configuration store into the
//! application controller.

use anyhow::Result;
use std::time::Duration;

use armpanel::cmd_args::CommandLineArgs;
use armpanel::config;
use armpanel::{AppController, IniConfigStore, LocalTransport, StdinEventSource, Subscription};

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .init();
}

/// Print records delivered to the echoed topic as JSON lines
fn spawn_echo_listener(subscription: Subscription) {
    tokio::spawn(async move {
        let mut tick = tokio::time::interval(Duration::from_millis(50));
        loop {
            tick.tick().await;
            while let Some(record) = subscription.try_recv() {
                match serde_json::to_string(&record) {
                    Ok(json) => println!("[{}] {json}", subscription.topic()),
                    Err(e) => tracing::warn!("failed to encode record: {e}"),
                }
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = CommandLineArgs::parse();

    let transport = LocalTransport::new();
    if let Some(listen) = args.listen() {
        spawn_echo_listener(transport.subscribe(listen));
    }

    let config_path = args
        .config()
        .map(str::to_string)
        .unwrap_or_else(config::get_config_path);
    let store = IniConfigStore::new(config_path);

    let mut app = AppController::new(transport, StdinEventSource::new(), store);
    app.set_initial_topic(args.topic().map(str::to_string));
    app.set_repeat_interval(args.repeat_ms().map(Duration::from_millis));

    println!("ArmPanel command console");
    println!("  topic [NAME]   set the destination topic (no NAME unbinds)");
    println!("  arm            send an arm command");
    println!("  disarm         send a disarm command");
    println!("  quit           end the session");

    app.run().await?;

    println!("Session ended.");
    Ok(())
}
