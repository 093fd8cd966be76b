// Simple command-line application to play chess

use duelchess::{Game, Move, MoveStatus, PieceKind, PrettyStyle};
use std::io::{self, BufRead, Write};

fn read_line(stdin: &mut impl BufRead) -> Option<String> {
    let mut s = String::new();
    if stdin.read_line(&mut s).unwrap() == 0 {
        return None;
    }
    Some(s.trim().to_string())
}

fn main() {
    let mut stdin = io::stdin().lock();
    let mut game = Game::new();

    while !game.is_game_over() {
        println!("{}", game.board().pretty(PrettyStyle::Ascii));
        print!("{}, enter your move: ", game.current_player().name());
        io::stdout().flush().unwrap();

        let line = match read_line(&mut stdin) {
            Some(line) => line,
            None => return,
        };
        if line == "quit" {
            return;
        }

        let mv: Move = match line.parse() {
            Ok(mv) => mv,
            Err(e) => {
                println!("Bad move: {}", e);
                continue;
            }
        };

        let status = match game.make_move(mv) {
            Ok(status) => status,
            Err(e) => {
                println!("Bad move: {}", e);
                continue;
            }
        };

        if status == MoveStatus::Promotion {
            loop {
                print!("Promote to (Q/R/B/N): ");
                io::stdout().flush().unwrap();
                let line = match read_line(&mut stdin) {
                    Some(line) => line,
                    None => return,
                };
                let kind = match line.parse::<PieceKind>() {
                    Ok(kind) => kind,
                    Err(e) => {
                        println!("Bad choice: {}", e);
                        continue;
                    }
                };
                match game.promote_pawn(mv.to, kind) {
                    Ok(()) => break,
                    Err(e) => println!("Bad choice: {}", e),
                }
            }
        }
    }

    println!("{}", game.board().pretty(PrettyStyle::Ascii));
    match game.status().winner() {
        Some(color) => println!("Game over after {} moves: {} wins!", game.moves().count(), color),
        None => println!("Game over after {} moves: draw", game.moves().count()),
    }
}
