//! Packstore CLI - administer the pack store

use clap::Parser;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use packstore::cli::{Args, SubCommand};
use packstore::store::Document;
use packstore::{
    format_output, Config, OutputFormat, PackError, PackHandle, PackStore, Report, Tier,
};

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose {
        "packstore=debug"
    } else {
        "packstore=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> packstore::Result<()> {
    let config = Config::new(
        args.data_dir
            .clone()
            .unwrap_or_else(Config::default_data_dir),
    );
    let store = PackStore::open_at(&config.data_dir)?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Human
    };

    let report = match args.command {
        SubCommand::Give { tier } => {
            let tier =
                Tier::from_name(&tier).ok_or_else(|| PackError::UnknownTier(tier.clone()))?;
            let handle = PackHandle::new(tier);
            // First-open the container so the identity enumerates right away.
            store.open(handle.identity(), tier.slots());
            Report::Handle(handle)
        }

        SubCommand::Open { identity } => {
            let identity = parse_identity(&identity)?;
            if !store.exists(identity) {
                return Err(PackError::ExecutionError(format!(
                    "no pack stored under {}",
                    identity
                )));
            }
            // Read-only peek; opening through the store would resize to a
            // guessed capacity, and the tier is not known from the identity.
            let slots = Document::read(store.path())
                .contents(identity)
                .unwrap_or_default();
            Report::Contents { identity, slots }
        }

        SubCommand::Clear { identity } => {
            let identity = parse_identity(&identity)?;
            store.clear(identity);
            Report::Message(format!("Cleared pack {}", identity))
        }

        SubCommand::Clone { identity } => {
            let identity = parse_identity(&identity)?;
            Report::Handle(PackHandle::with_identity(Tier::Enderpack, identity))
        }

        SubCommand::List => Report::Identities(store.identities()),

        SubCommand::Guide => Report::Guide,
    };

    println!("{}", format_output(&report, &format));

    // Shutdown safety net; every mutation above is already durable.
    store.save_all();
    Ok(())
}

fn parse_identity(raw: &str) -> packstore::Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| PackError::InvalidIdentity(raw.to_string()))
}
