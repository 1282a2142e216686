//! The main menu keyboard shown on /start.

use teloxide::types::{KeyboardButton, KeyboardMarkup as ReplyKeyboardMarkup};

/// Button labels, row by row.
const MENU_LAYOUT: [[&str; 2]; 2] = [["📚 Help", "ℹ️ About"], ["🔍 Search", "⚙️ Settings"]];

/// Build the 2x2 main menu keyboard.
pub fn main_keyboard() -> ReplyKeyboardMarkup {
    let rows = MENU_LAYOUT
        .iter()
        .map(|row| row.iter().map(|label| KeyboardButton::new(*label)).collect::<Vec<_>>());
    ReplyKeyboardMarkup::new(rows).resize_keyboard()
}
