use clap::{Parser, Subcommand};

/// "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "pattern-practice", version = get_version())]
#[command(about = "Observer and Decorator pattern practice", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the newsletter screen through a sequence of steps
    #[command(alias = "news")]
    Newsletter {
        /// Steps: subscribe, unsubscribe, toggle or post:<text>
        steps: Vec<String>,
    },

    /// Fill in the flower form and show the decorated result
    Flower {
        /// Flower name
        #[arg(long, default_value = "")]
        name: String,

        /// Base description
        #[arg(long, default_value = "")]
        description: String,

        /// Region of origin
        #[arg(long, default_value = "")]
        region: String,

        /// Tick the pH box with this value (invalid numbers become 0)
        #[arg(long, allow_hyphen_values = true)]
        ph: Option<String>,

        /// Tick the temperature box with this value (invalid numbers become 0)
        #[arg(long, allow_hyphen_values = true)]
        temperature: Option<String>,

        /// Tick the season box with this many months (invalid numbers become 0)
        #[arg(long, allow_hyphen_values = true)]
        season: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (resident-name, guest-name, empty-news)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
