use std::io::Read;
use std::process::ExitCode;

use moebius::{Board, Signal, Solution};

fn main() -> ExitCode {
    let mut input = String::new();
    if let Err(err) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("Failed to read input: {err}");
        return ExitCode::FAILURE;
    }

    let board = match Board::parse(&input) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Failed to parse input: {err}");
            return ExitCode::FAILURE;
        }
    };

    board.solve(&mut |solution: &Solution| {
        println!("-- SOLUTION --\n{solution}");
        Signal::Continue
    });
    ExitCode::SUCCESS
}
