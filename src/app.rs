//! Interactive Shell
//!
//! Terminal rendition of the assessment flow: intro card, one question at a
//! time on the four-point scale, and the results screen with compass export.
//! Input is line-based; every action maps onto a named command, so the shell
//! holds no assessment logic of its own.

use std::io::{self, BufRead, Write};
use std::path::Path;

use pragvalues_compass::DEFAULT_EXPORT_FILENAME;
use pragvalues_core::{Answer, Axis, Stage, QUESTIONS_PER_AXIS};

use crate::commands::{assessment, export};
use crate::models::ViewSnapshot;
use crate::state::AppState;
use crate::utils::error::AppResult;

/// Drive the assessment until the user quits
pub fn run(state: &mut AppState) -> AppResult<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        let snapshot = assessment::view(state);
        match snapshot.stage {
            Stage::Intro => print_intro(),
            Stage::Strategic | Stage::Cultural => print_question(&snapshot),
            Stage::Results => print_results(state)?,
        }
        let Some(line) = read_line(&mut input)? else {
            break;
        };
        if !dispatch(state, snapshot.stage, line.trim())? {
            break;
        }
    }
    Ok(())
}

/// Apply one line of input; returns false when the user quits
fn dispatch(state: &mut AppState, stage: Stage, input: &str) -> AppResult<bool> {
    if input == "q" {
        return Ok(false);
    }
    match stage {
        Stage::Intro => {
            assessment::begin(state);
        }
        Stage::Strategic | Stage::Cultural => handle_question_input(state, input),
        Stage::Results => match input {
            "r" => assessment::reset(state),
            "d" => {
                export::export_result(state, Path::new(DEFAULT_EXPORT_FILENAME))?;
                println!("Saved {DEFAULT_EXPORT_FILENAME}");
            }
            _ => {}
        },
    }
    Ok(true)
}

fn handle_question_input(state: &mut AppState, input: &str) {
    match input {
        "n" | "" => {
            if !assessment::next(state) {
                println!("Answer the question before continuing.");
            }
        }
        "b" => {
            if !assessment::back(state) {
                println!("Already at the first question.");
            }
        }
        "r" => assessment::reset(state),
        other => match other.parse::<u32>().ok().and_then(Answer::from_points) {
            Some(answer) => {
                assessment::answer(state, answer);
            }
            None => println!("Enter 1-4 to answer, n next, b back, r restart, q quit."),
        },
    }
}

fn print_intro() {
    println!();
    println!("PragValues");
    println!();
    println!("Discover where you stand on the political compass of libertarian thought.");
    println!("This test evaluates your position across two key dimensions: Strategic");
    println!("philosophy and Cultural alignment.");
    println!();
    println!("What to expect:");
    println!("  * 20 questions across two axes based on \"Anatomy of the Celebritarian\"");
    println!("  * Strategic Axis: Principled vs. Pragmatist approach");
    println!("  * Cultural Axis: Cosmopolitan vs. Paleo-Libertarian");
    println!("  * Estimated time: 5-7 minutes");
    println!();
    println!("Press Enter to begin, or q to quit.");
}

fn print_question(snapshot: &ViewSnapshot) {
    let part = snapshot.part_label.as_deref().unwrap_or_default();
    println!();
    println!(
        "{} | Question {}/{} | Overall progress: {}%",
        part,
        snapshot.current_index + 1,
        QUESTIONS_PER_AXIS,
        snapshot.progress_percent
    );
    println!();
    if let Some(prompt) = &snapshot.prompt {
        println!("  {prompt}");
    }
    println!();
    for answer in Answer::ALL {
        let mark = if snapshot.answer == Some(answer) { ">" } else { " " };
        println!(" {mark}[{}] {}", answer.points(), answer.label());
    }
    println!();
    let next_label = if snapshot.stage == Stage::Cultural
        && snapshot.current_index == QUESTIONS_PER_AXIS - 1
    {
        "n view results"
    } else {
        "n next"
    };
    let mut commands = format!("1-4 answer, {next_label}");
    if snapshot.is_retreat_allowed {
        commands.push_str(", b back");
    }
    commands.push_str(", r restart, q quit");
    println!("Commands: {commands}");
}

fn print_results(state: &AppState) -> AppResult<()> {
    let summary = assessment::results(state)?;
    println!();
    println!("Your Results");
    println!();
    println!("{}", summary.title);
    println!(
        "  {} [{}]: {}/40 ({})",
        Axis::Strategic.display_name(),
        Axis::Strategic.dichotomy(),
        summary.strategic_score,
        summary.strategic_pole
    );
    println!(
        "  {} [{}]: {}/40 ({})",
        Axis::Cultural.display_name(),
        Axis::Cultural.dichotomy(),
        summary.cultural_score,
        summary.cultural_pole
    );
    println!();
    println!("{}", summary.description);
    println!();
    println!("Commands: d download compass image, r retake, q quit");
    Ok(())
}

fn read_line(input: &mut impl BufRead) -> AppResult<Option<String>> {
    print!("> ");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
