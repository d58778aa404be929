//! Static Vietnamese character and keycode data

pub mod chars;
pub mod constants;
pub mod keys;
pub mod vowel;

pub use chars::{get_d, to_char};
pub use keys::{is_break, is_letter, is_vowel};
