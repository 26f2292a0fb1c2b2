use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the HTTP API
    Serve {
        #[arg(long, env = "ONTOLOGIA_HOST", default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, env = "ONTOLOGIA_PORT", default_value = "8080")]
        port: u16,
    },

    /// Print row counts per entity family
    Stats,
}
