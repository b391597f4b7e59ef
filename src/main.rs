use binpipe::cli::{
    Cli, Commands, convert_command, decoders_command, rand_command, ulid_command, uuid_command,
};
use clap::Parser;
use tracing::error;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .with_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                ),
        )
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> binpipe::Result<()> {
    let args = Cli::parse();
    match &args.cmd {
        Some(Commands::Decoders) => decoders_command(),
        Some(Commands::Ulid {
            encoder,
            no_newline,
        }) => ulid_command(encoder, *no_newline),
        Some(Commands::Uuid {
            encoder,
            no_newline,
        }) => uuid_command(encoder, *no_newline),
        Some(Commands::Rand {
            size,
            encoder,
            no_newline,
        }) => rand_command(*size, encoder, *no_newline),
        None => convert_command(&args),
    }
}
