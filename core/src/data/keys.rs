//! Key codes and key classification
//!
//! Uses macOS virtual keycodes (`kVK_ANSI_*`) directly so host code can pass
//! through `NSEvent.keyCode` without translation.

pub const A: u16 = 0x00;
pub const S: u16 = 0x01;
pub const D: u16 = 0x02;
pub const F: u16 = 0x03;
pub const H: u16 = 0x04;
pub const G: u16 = 0x05;
pub const Z: u16 = 0x06;
pub const X: u16 = 0x07;
pub const C: u16 = 0x08;
pub const V: u16 = 0x09;
pub const B: u16 = 0x0B;
pub const Q: u16 = 0x0C;
pub const W: u16 = 0x0D;
pub const E: u16 = 0x0E;
pub const R: u16 = 0x0F;
pub const Y: u16 = 0x10;
pub const T: u16 = 0x11;
pub const N1: u16 = 0x12;
pub const N2: u16 = 0x13;
pub const N3: u16 = 0x14;
pub const N4: u16 = 0x15;
pub const N6: u16 = 0x16;
pub const N5: u16 = 0x17;
pub const EQUAL: u16 = 0x18;
pub const N9: u16 = 0x19;
pub const N7: u16 = 0x1A;
pub const MINUS: u16 = 0x1B;
pub const N8: u16 = 0x1C;
pub const N0: u16 = 0x1D;
pub const RBRACKET: u16 = 0x1E;
pub const O: u16 = 0x1F;
pub const U: u16 = 0x20;
pub const LBRACKET: u16 = 0x21;
pub const I: u16 = 0x22;
pub const P: u16 = 0x23;
pub const RETURN: u16 = 0x24;
pub const L: u16 = 0x25;
pub const J: u16 = 0x26;
pub const QUOTE: u16 = 0x27;
pub const K: u16 = 0x28;
pub const SEMICOLON: u16 = 0x29;
pub const BACKSLASH: u16 = 0x2A;
pub const COMMA: u16 = 0x2B;
pub const SLASH: u16 = 0x2C;
pub const N: u16 = 0x2D;
pub const M: u16 = 0x2E;
pub const DOT: u16 = 0x2F;
pub const TAB: u16 = 0x30;
pub const SPACE: u16 = 0x31;
pub const BACKQUOTE: u16 = 0x32;
pub const DELETE: u16 = 0x33;
pub const ESC: u16 = 0x35;
pub const ENTER: u16 = 0x4C;
pub const LEFT: u16 = 0x7B;
pub const RIGHT: u16 = 0x7C;

/// Letter keys that can appear in a Vietnamese syllable (consonants + vowels)
const LETTERS: &[u16] = &[
    A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
];

const VOWELS: &[u16] = &[A, E, I, O, U, Y];

const CONSONANTS: &[u16] = &[
    B, C, D, F, G, H, J, K, L, M, N, P, Q, R, S, T, V, W, X, Z,
];

const NUMBERS: &[u16] = &[N0, N1, N2, N3, N4, N5, N6, N7, N8, N9];

pub fn is_letter(key: u16) -> bool {
    LETTERS.contains(&key)
}

pub fn is_vowel(key: u16) -> bool {
    VOWELS.contains(&key)
}

pub fn is_consonant(key: u16) -> bool {
    CONSONANTS.contains(&key)
}

pub fn is_number(key: u16) -> bool {
    NUMBERS.contains(&key)
}

/// Keys that end a word: whitespace and punctuation.
/// Plain digits are NOT break keys — VNI uses them as mark/tone modifiers,
/// so they must reach the input method dispatch first. Does not include
/// ESC or DELETE, which the engine handles separately.
pub fn is_break(key: u16) -> bool {
    matches!(
        key,
        SPACE
            | RETURN
            | ENTER
            | TAB
            | DOT
            | COMMA
            | SEMICOLON
            | QUOTE
            | MINUS
            | EQUAL
            | LBRACKET
            | RBRACKET
            | BACKSLASH
            | SLASH
            | BACKQUOTE
    )
}

/// Same as [`is_break`] but lets a caller account for Shift, since
/// Shift+number produces a symbol rather than a digit.
pub fn is_break_ext(key: u16, shift: bool) -> bool {
    if shift && is_number(key) {
        return true;
    }
    is_break(key)
}
