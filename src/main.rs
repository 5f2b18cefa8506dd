use std::io::{self, BufRead, Write};

use rollerball::game_state::board_state::BoardState;
use rollerball::game_state::board_types::{BoardShape, Color};
use rollerball::move_generation::legal_moves::{in_check, legal_moves};
use rollerball::move_generation::move_applier::apply_move;
use rollerball::moves::move_codec::{move_from_text, move_to_text};
use rollerball::utils::render_board::render_board;

/// Line-driven console for playing Rollerball by hand. Commands:
/// `new <7_3|8_4|8_2>`, `move <text>`, `moves`, `show`, `quit`.
fn main() {
    let stdin = io::stdin();
    let mut state = BoardState::new(BoardShape::SevenThree);
    println!("rollerball console, board 7_3");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let mut words = line.split_whitespace();
        match words.next() {
            Some("new") => match words.next() {
                Some("7_3") => state = BoardState::new(BoardShape::SevenThree),
                Some("8_4") => state = BoardState::new(BoardShape::EightFour),
                Some("8_2") => state = BoardState::new(BoardShape::EightTwo),
                _ => println!("usage: new <7_3|8_4|8_2>"),
            },
            Some("move") => match words.next().map(move_from_text) {
                Some(Ok(mv)) => {
                    if legal_moves(&state).contains(&mv) {
                        apply_move(&mut state, mv);
                    } else {
                        println!("illegal move");
                    }
                }
                Some(Err(err)) => println!("bad move: {err}"),
                None => println!("usage: move <text>"),
            },
            Some("moves") => {
                let texts: Vec<String> =
                    legal_moves(&state).iter().map(|m| move_to_text(*m)).collect();
                println!("{}", texts.join(" "));
            }
            Some("show") => {
                print!("{}", render_board(&state));
                let side = match state.side_to_move {
                    Color::White => "white",
                    Color::Black => "black",
                };
                if in_check(&state, state.side_to_move) {
                    println!("{side} to move (in check)");
                } else {
                    println!("{side} to move");
                }
            }
            Some("quit") | Some("exit") => break,
            Some(other) => println!("unknown command: {other}"),
            None => {}
        }
        io::stdout().flush().ok();
    }
}
