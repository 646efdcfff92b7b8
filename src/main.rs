use std::path::PathBuf;

use blank_quiz::Quiz;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from, instead of the bundled set
    #[arg(short, long)]
    questions: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let quiz = match args.questions {
        Some(path) => Quiz::from_json(path),
        None => Quiz::bundled(),
    };

    let quiz = match quiz {
        Ok(quiz) => quiz,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
