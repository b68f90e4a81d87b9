//! Line-oriented front end.
//!
//! A stand-in renderer: it paints the controller's view-models to stdout and
//! translates typed commands into [`Command`] intents. All study logic stays
//! behind the controller.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vocab_study::{
    default_state_dir, shared, AppError, Command, Dataset, DispatchOutcome, FileStorage,
    NullSpeech, StudyController, Theme,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("VOCAB_DATA").ok())
        .unwrap_or_else(|| "data.json".to_string());

    let state_dir = std::env::var("VOCAB_STATE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_state_dir());

    // A failed load is fatal: report and stop, no retry.
    let dataset = match Dataset::load(data_path.as_ref()) {
        Ok(dataset) => dataset,
        Err(err) => {
            eprintln!("error: could not load {data_path}: {err}");
            std::process::exit(1);
        }
    };

    let storage = shared(FileStorage::open(state_dir)?);
    let mut controller = StudyController::new(dataset, storage)?;
    let mut speech = NullSpeech;

    print_overview(&controller);
    print_grid(&controller);
    print_help();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let command = match parse(input) {
            Input::Quit => break,
            Input::Help => {
                print_help();
                continue;
            }
            Input::Show => {
                print_overview(&controller);
                print_grid(&controller);
                continue;
            }
            Input::Invalid(msg) => {
                println!("{msg}");
                continue;
            }
            Input::Command(command) => command,
        };

        if command == Command::ResetProgress && !confirm(&mut lines)? {
            println!("reset cancelled");
            continue;
        }

        match controller.dispatch(command, &mut speech) {
            Ok(DispatchOutcome::SessionComplete) => {
                println!("🎉 set finished!");
                controller.dispatch(Command::CloseSession, &mut speech).ok();
            }
            Ok(DispatchOutcome::Done) => {}
            Err(AppError::Session(err)) => println!("{err}"),
            Err(err) => tracing::warn!(%err, "command rejected"),
        }

        if controller.has_session() {
            print_card(&controller);
        } else {
            print_grid(&controller);
        }
    }

    Ok(())
}

enum Input {
    Command(Command),
    Show,
    Help,
    Quit,
    Invalid(String),
}

fn parse(input: &str) -> Input {
    let mut parts = input.split_whitespace();
    let verb = parts.next().unwrap_or_default();
    let arg = parts.next();

    let command = match (verb, arg) {
        ("level", Some(level)) => Command::SetLevel {
            level: level.to_string(),
        },
        ("set", Some(n)) => match n.parse::<usize>() {
            // Sets are shown 1-based.
            Ok(n) if n > 0 => Command::SetChunk { index: n - 1 },
            _ => return Input::Invalid(format!("not a set number: {n}")),
        },
        ("toggle", Some(id)) => match id.parse::<u32>() {
            Ok(id) => Command::ToggleEntry { id },
            Err(_) => return Input::Invalid(format!("not an entry id: {id}")),
        },
        ("all", None) => Command::ToggleAllInSet,
        ("reset", None) => Command::ResetProgress,
        ("practice", None) => Command::StartPractice,
        ("flip", None) => Command::FlipCard,
        ("next", None) => Command::NextCard,
        ("prev", None) => Command::PrevCard,
        ("close", None) => Command::CloseSession,
        ("speak", None) => Command::Speak,
        ("theme", None) => Command::ToggleTheme,
        ("show", None) => return Input::Show,
        ("help", None) => return Input::Help,
        ("quit", None) | ("exit", None) => return Input::Quit,
        _ => return Input::Invalid(format!("unknown command: {input} (try 'help')")),
    };
    Input::Command(command)
}

fn confirm(lines: &mut impl Iterator<Item = io::Result<String>>) -> io::Result<bool> {
    print!("delete all progress and start over? type 'yes' to confirm: ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().eq_ignore_ascii_case("yes")),
        None => Ok(false),
    }
}

fn print_overview(controller: &StudyController) {
    let theme = match controller.theme() {
        Theme::Dark => "dark",
        Theme::Light => "light",
    };
    println!(
        "levels: {} | mastered: {} | theme: {theme}",
        controller.levels().join(", "),
        controller.mastered_count()
    );
    let summaries = controller.chunk_summaries();
    if summaries.is_empty() {
        println!("level {}: no words", controller.active_level());
        return;
    }
    let bar: Vec<String> = summaries
        .iter()
        .map(|s| format!("set {} {}%", s.index + 1, s.percent))
        .collect();
    println!("level {}: {}", controller.active_level(), bar.join(" | "));
}

fn print_grid(controller: &StudyController) {
    let Some(range) = controller.title_range() else {
        println!("no words to show");
        return;
    };
    println!(
        "words {}–{} (level {})",
        range.start,
        range.end,
        controller.active_level()
    );
    for view in controller.visible_entries() {
        let mark = if view.mastered { "x" } else { " " };
        let pos = if view.entry.part_of_speech.is_empty() {
            String::new()
        } else {
            format!(" ({})", view.entry.part_of_speech)
        };
        println!("[{mark}] {:>4}  {}{pos}", view.entry.id, view.entry.word);
    }
}

fn print_card(controller: &StudyController) {
    let Ok(card) = controller.card_view() else {
        return;
    };
    println!("card {}/{}", card.position, card.total);
    if card.revealed {
        println!("  {} — {} [{}]", card.definition, card.part_of_speech, card.level);
    } else {
        println!("  {}", card.word);
    }
}

fn print_help() {
    println!(
        "commands: level <tag> | set <n> | toggle <id> | all | reset | practice \
         | flip | next | prev | speak | close | theme | show | help | quit"
    );
}
