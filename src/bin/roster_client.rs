use activity_roster::utils::error::{ErrorSeverity, Result, RosterError};
use activity_roster::utils::logger;
use activity_roster::RosterClient;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "roster-client")]
#[command(about = "Command-line client for the activity-roster service")]
struct Args {
    /// Base URL of the running service
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show every activity with its roster
    List,
    /// Sign a student up for an activity
    Signup {
        #[arg(short, long)]
        activity: String,
        #[arg(short, long)]
        email: String,
    },
    /// Remove a student from an activity
    Unregister {
        #[arg(short, long)]
        activity: String,
        #[arg(short, long)]
        email: String,
    },
}

async fn run(args: Args) -> Result<()> {
    let client = RosterClient::new(&args.base_url)?;

    match args.command {
        Command::List => {
            let snapshot = client.list_activities().await?;
            println!("📋 {} activities at {}", snapshot.len(), client.base_url());
            for activity in snapshot.iter() {
                println!(
                    "\n{} ({}/{}, {} spots left)",
                    activity.name,
                    activity.participants.len(),
                    activity.max_participants,
                    activity.spots_left()
                );
                println!("  {}", activity.description);
                println!("  🕒 {}", activity.schedule);
                for email in &activity.participants {
                    println!("  - {}", email);
                }
            }
        }
        Command::Signup { activity, email } => {
            let message = client.signup(&activity, &email).await?;
            println!("✅ {}", message);
        }
        Command::Unregister { activity, email } => {
            let message = client.unregister(&activity, &email).await?;
            println!("✅ {}", message);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    if let Err(e) = run(args).await {
        tracing::debug!("Request failed: {:?}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 請求被拒絕 (404/400) 與連線失敗使用不同的退出碼
        let exit_code = match (&e, e.severity()) {
            (RosterError::Api { .. }, _) => 2,
            (_, ErrorSeverity::Low) => 1,
            (_, ErrorSeverity::Medium) => 2,
            (_, _) => 3,
        };
        std::process::exit(exit_code);
    }
}
