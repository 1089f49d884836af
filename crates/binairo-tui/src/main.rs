use clap::Parser;

use binairo_core::Difficulty;

mod app;
mod game;
mod records;
mod ui;

#[derive(Parser)]
#[command(name = "binairo", about = "Binairo (Takuzu) puzzles in the terminal")]
struct Args {
    /// Skip the menu and start a game at this level (easy or hard)
    #[arg(long)]
    level: Option<String>,
}

fn main() {
    let args = Args::parse();

    let start_level = match args.level.as_deref().map(|s| s.parse::<Difficulty>()).transpose() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = app::run(start_level) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
