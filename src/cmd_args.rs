use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Initial destination topic committed before the session starts.
    /// Overrides a topic restored from the configuration file.
    #[clap(short = 't', long, help = "initial destination topic")]
    topic: Option<String>,

    /// Topic to echo on the console: records delivered to it are printed
    /// as JSON. Useful for watching the panel's own output locally.
    #[clap(short = 'l', long, help = "topic to echo as JSON")]
    listen: Option<String>,

    /// Re-send the last arm/disarm command every N milliseconds.
    /// Disabled when omitted.
    #[clap(long, value_name = "MS", help = "repeat cadence in milliseconds")]
    repeat_ms: Option<u64>,

    /// Configuration file path, overriding ARMPANEL_CONFIG_PATH and the
    /// built-in default.
    #[clap(short = 'c', long, help = "configuration file path")]
    config: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    topic: Option<String>,
    listen: Option<String>,
    repeat_ms: Option<u64>,
    config: Option<String>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        Self {
            topic: args.topic,
            listen: args.listen,
            repeat_ms: args.repeat_ms,
            config: args.config,
        }
    }

    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref()
    }

    pub fn listen(&self) -> Option<&str> {
        self.listen.as_deref()
    }

    pub fn repeat_ms(&self) -> Option<u64> {
        self.repeat_ms
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
