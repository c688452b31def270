use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qavec", about = "Embedding-backed question/answer store")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store a question/answer pair
    Add {
        /// Question text (embedded for later similarity search)
        question: String,
        /// Answer returned when this question wins a search
        answer: String,
    },
    /// Find the stored question closest to the query and print its answer
    Ask {
        question: String,
    },
    /// List stored questions
    List,
}
