use std::io::{self, BufRead, Write};

use cli_player::CliPlayer;
use knockout_core::{
    deck::Deck, game_lobby::GameLobby, random_playing_computer::RandomPlayingComputer,
    PLAYER_COUNT,
};

mod cli_player;

fn main() {
    env_logger::init();

    let humans = prompt_human_count();
    let mut lobby = GameLobby::new();
    for id in 0..PLAYER_COUNT {
        if id < humans {
            lobby.add_player(|| CliPlayer::new(id));
        } else {
            lobby.add_player(|| RandomPlayingComputer::new(id));
        }
    }

    let showdown = prompt_showdown();
    println!("\nGame started!");
    let result = if showdown {
        lobby.run_showdown(Deck::new()).map(|_| ())
    } else {
        lobby.run(Deck::new()).map(|_| ())
    };

    if let Err(e) = result {
        log::error!("session aborted: {}", e);
        eprintln!("Fatal: {}", e);
        std::process::exit(1);
    }
}

fn prompt_human_count() -> usize {
    print!("How many human players? [1-{}]: ", PLAYER_COUNT);
    io::stdout().flush().unwrap();
    loop {
        if let Ok(count) = read_line().trim().parse::<usize>() {
            if (1..=PLAYER_COUNT).contains(&count) {
                return count;
            }
        }
        print!(
            "Invalid input. Please enter a number between 1 and {}: ",
            PLAYER_COUNT
        );
        io::stdout().flush().unwrap();
    }
}

fn prompt_showdown() -> bool {
    print!("Play (e)limination rounds or a single (s)howdown? ");
    io::stdout().flush().unwrap();
    loop {
        match read_line().trim().to_lowercase().as_str() {
            "e" | "elimination" => return false,
            "s" | "showdown" => return true,
            _ => {
                print!("Invalid input. Please enter 'e' or 's': ");
                io::stdout().flush().unwrap();
            }
        }
    }
}

fn read_line() -> String {
    match io::stdin().lock().lines().next() {
        Some(Ok(line)) => line,
        _ => String::new(),
    }
}
