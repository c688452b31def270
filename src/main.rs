use clap::Parser;
use qavec::cli::commands::{Cli, Commands};
use qavec::Qavec;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let qa = match Qavec::connect().await {
        Ok(qa) => qa,
        Err(e) => {
            eprintln!("Error initializing qavec: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(qa, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(qa: Qavec, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Add { question, answer } => {
            let record = qa.add_qa(question, answer).await?;
            println!("{}", serde_json::to_string_pretty(&record).unwrap());
        }
        Commands::Ask { question } => {
            let result = qa.ask(&question).await?;
            println!("{}", result.answer);
        }
        Commands::List => {
            let questions = qa.questions().await?;
            println!("{}", serde_json::to_string_pretty(&questions).unwrap());
        }
    }
    Ok(())
}
