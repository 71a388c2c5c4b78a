use crossbeam_channel::Sender;
use log::{debug, warn};
use rexec_core::constants::keys;
use std::io::BufRead;

/// Maps a console character onto its DSKY key code
pub fn key_code(key: char) -> Option<u16> {
    let code = match key.to_ascii_lowercase() {
        '0' => keys::KEY_0,
        '1' => keys::KEY_1,
        '2' => keys::KEY_2,
        '3' => keys::KEY_3,
        '4' => keys::KEY_4,
        '5' => keys::KEY_5,
        '6' => keys::KEY_6,
        '7' => keys::KEY_7,
        '8' => keys::KEY_8,
        '9' => keys::KEY_9,
        'v' => keys::KEY_VERB,
        'n' => keys::KEY_NOUN,
        '+' => keys::KEY_PLUS,
        '-' => keys::KEY_MINUS,
        'e' => keys::KEY_ENTR,
        'c' => keys::KEY_CLR,
        'r' => keys::KEY_RSET,
        'k' => keys::KEY_KREL,
        _ => return None,
    };
    Some(code)
}

// Reads stdin line by line and forwards every mapped key to the loop
fn keyboard_thread(tx: Sender<u16>) {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Keyboard read failed: {}", e);
                break;
            }
        };

        for key in line.chars().filter(|c| !c.is_whitespace()) {
            match key_code(key) {
                Some(code) => {
                    if tx.send(code).is_err() {
                        return;
                    }
                }
                None => debug!("Ignoring key {:?}", key),
            }
        }
    }
}

pub fn spawn_reader(tx: Sender<u16>) {
    std::thread::spawn(move || keyboard_thread(tx));
}
