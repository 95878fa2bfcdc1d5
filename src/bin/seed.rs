use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use seeder::cli::Args;
use seeder::generator::{RngSource, TaskNamePool};
use seeder::{write_user_ids, ApiClient, SeedConfig, SeedError, SeedSummary, Seeder};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Usage errors exit 2, --help and --version exit 0
    let args = Args::parse();

    let _guard = match seeder::logging::init_logging("seed", args.log_file) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to set up logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let config = args.to_config();
    let result = if args.list_users {
        list_users(&config).await
    } else {
        seed(&config).await.map(|summary| {
            info!(
                "Success! Created {} users and {} tasks ({} assigned) at {}",
                summary.users_created,
                summary.tasks_created,
                summary.tasks_assigned,
                config.target()
            );
        })
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn seed(config: &SeedConfig) -> Result<SeedSummary, SeedError> {
    let task_names = TaskNamePool::load(&config.tasks_file)?;
    let rng = match config.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    info!("Seeding {config}");
    info!("Connecting to {} via HTTPS...", config.host);
    let client = ApiClient::connect(&config.host)?;

    let result = Seeder::new(&task_names, rng).run(&client, config).await;
    client.close();
    result
}

async fn list_users(config: &SeedConfig) -> Result<(), SeedError> {
    info!("Connecting to {} via HTTPS...", config.host);
    let client = ApiClient::connect(&config.host)?;

    let mut stdout = std::io::stdout();
    let result = write_user_ids(&client, &mut stdout).await;
    client.close();

    let count = result?;
    info!("{} users at {}", count, config.target());
    Ok(())
}
