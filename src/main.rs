use clap::Parser;
use graceway::cli::{Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "graceway=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List { collection }) => {
            graceway::cli::list::run(&cli.config, &collection).await?;
        }
        Some(Commands::Post {
            title,
            author,
            body,
            body_file,
            image,
        }) => {
            graceway::cli::post::run(&cli.config, title, author, body, body_file, image).await?;
        }
        Some(Commands::Remove {
            collection,
            id,
            yes,
        }) => {
            graceway::cli::remove::run(&cli.config, &collection, &id, yes).await?;
        }
        Some(Commands::RotateLesson) => {
            graceway::cli::rotate::run(&cli.config).await?;
        }
        Some(Commands::Upload { file }) => {
            graceway::cli::upload::run(&cli.config, &file).await?;
        }
        Some(Commands::Watch { collection }) => {
            graceway::cli::watch::run(&cli.config, &collection).await?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
