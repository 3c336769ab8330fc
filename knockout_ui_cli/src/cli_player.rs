use std::io::{self, BufRead, Write};

use itertools::Itertools;

use knockout_core::{
    card::Card,
    event::Event,
    player::{Action, Player, PlayerData, PlayerId},
};

pub struct CliPlayer {
    pub data: PlayerData,
}

impl CliPlayer {
    pub fn new(id: PlayerId) -> CliPlayer {
        print!("Enter name for Player {}: ", id + 1);
        io::stdout().flush().unwrap();

        let name = match io::stdin().lock().lines().next() {
            Some(Ok(line)) if !line.trim().is_empty() => line.trim().to_string(),
            _ => format!("Player {}", id + 1),
        };

        CliPlayer {
            data: PlayerData::new(name),
        }
    }

    fn format_hand(hand: &[Card]) -> String {
        format!("[{}]", hand.iter().map(|c| c.to_string()).join(", "))
    }

    fn prompt_yes_no(&self, prompt: &str) -> bool {
        print!("\n{} (yes/no): ", prompt);
        io::stdout().flush().unwrap();
        loop {
            let line = read_line();
            match line.trim().to_lowercase().as_str() {
                "yes" | "y" => return true,
                "no" | "n" => return false,
                _ => {
                    print!("Invalid input. Please enter 'yes' or 'no' (or 'y' or 'n'): ");
                    io::stdout().flush().unwrap();
                }
            }
        }
    }

    fn prompt_index(&self, hand_size: usize) -> usize {
        print!(
            "Please enter the index from [0-{}] of the card you want to replace: ",
            hand_size - 1
        );
        io::stdout().flush().unwrap();
        loop {
            if let Ok(index) = read_line().trim().parse::<usize>() {
                if index < hand_size {
                    return index;
                }
            }
            print!(
                "Invalid input. Please enter a number between 0 and {}: ",
                hand_size - 1
            );
            io::stdout().flush().unwrap();
        }
    }

    fn print_event(&self, event: &Event, players: &[&String]) {
        match event {
            Event::RoundStarted(round) => println!("\n=== Round {} ===", round),
            Event::Dealt(pl, hand) => {
                println!("{}'s hand: {}", players[*pl], Self::format_hand(hand))
            }
            Event::Replaced(pl, discarded, drawn, hand) => {
                println!("{} replaced {} with {}", players[*pl], discarded, drawn);
                println!("After replacement: {}", Self::format_hand(hand));
            }
            Event::ReplacementRejected(pl, index) => {
                println!("{}: invalid card index: {}", players[*pl], index)
            }
            Event::Scored(pl, hand, points) => println!(
                "{}'s hand: {} - Points: {}",
                players[*pl],
                Self::format_hand(hand),
                points
            ),
            Event::Eliminated(pl) => println!("\n{} is eliminated", players[*pl]),
            Event::Winner(ids) => match ids.as_slice() {
                [winner] => println!("\nThe winner is {}!", players[*winner]),
                _ => println!(
                    "\nIt's a tie between {}!",
                    ids.iter().map(|&id| players[id].as_str()).join(" and ")
                ),
            },
        }
    }
}

impl Player for CliPlayer {
    fn data(&self) -> &PlayerData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut PlayerData {
        &mut self.data
    }

    fn notify(&self, game_log: &[Event], players: &[&String]) {
        for event in game_log {
            self.print_event(event, players);
        }
    }

    fn obtain_action(&self, hand: &[Card], _players: &[&String], _game_log: &[Event]) -> Action {
        println!("\n{}'s hand: {}", self.name(), Self::format_hand(hand));
        let prompt = format!("{}, do you want to replace a card?", self.name());
        if self.prompt_yes_no(&prompt) {
            Action::Replace(self.prompt_index(hand.len()))
        } else {
            Action::Keep
        }
    }
}

fn read_line() -> String {
    match io::stdin().lock().lines().next() {
        Some(Ok(line)) => line,
        _ => String::new(),
    }
}
