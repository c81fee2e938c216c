use clap::Subcommand;
use kittyden_core::games::nhie::{NhieGame, QUESTIONS};

#[derive(Subcommand)]
pub enum NhieAction {
    /// Print the whole deck
    Questions,
    /// Play a round non-interactively from a comma-separated answer list
    Play {
        /// Answers in order, e.g. "y,n,y" (y scores a point)
        answers: String,
        /// Cycle the deck instead of ending after the last question
        #[arg(long)]
        infinite: bool,
    },
}

pub fn run(action: NhieAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        NhieAction::Questions => {
            for (i, question) in QUESTIONS.iter().enumerate() {
                println!("{:2}. {question}", i + 1);
            }
        }
        NhieAction::Play { answers, infinite } => {
            let mut game = NhieGame::new();
            if infinite {
                game.toggle_infinite();
            }

            let mut answered = 0;
            for answer in answers.split(',') {
                if game.is_finished() {
                    break;
                }
                let yes = matches!(answer.trim(), "y" | "yes" | "true" | "1");
                game.answer(yes);
                answered += 1;
            }

            let out = serde_json::json!({
                "answered": answered,
                "score": game.score(),
                "finished": game.is_finished(),
                "next_question": game.current_question(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
    }
    Ok(())
}
