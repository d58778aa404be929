//! Phonotactic constant tables for syllable validation
//!
//! See https://vi.wikipedia.org/wiki/Âm_vị_học_tiếng_Việt for the underlying
//! inventory of initial/final consonants this is drawn from.

use super::keys;

/// Single-letter initial consonants (phụ âm đầu 1 chữ cái)
pub const VALID_INITIALS_1: &[u16] = &[
    keys::B,
    keys::C,
    keys::D,
    keys::G,
    keys::H,
    keys::K,
    keys::L,
    keys::M,
    keys::N,
    keys::P,
    keys::R,
    keys::S,
    keys::T,
    keys::V,
    keys::X,
];

/// Two-letter initial consonant clusters (ch, gh, gi, kh, ng, nh, ph, qu, th, tr)
pub const VALID_INITIALS_2: &[[u16; 2]] = &[
    [keys::C, keys::H],
    [keys::G, keys::H],
    [keys::G, keys::I],
    [keys::K, keys::H],
    [keys::N, keys::G],
    [keys::N, keys::H],
    [keys::P, keys::H],
    [keys::Q, keys::U],
    [keys::T, keys::H],
    [keys::T, keys::R],
];

/// Single-letter final consonants (âm cuối)
pub const VALID_FINALS_1: &[u16] = &[keys::C, keys::M, keys::N, keys::P, keys::T];

/// Two-letter final consonant clusters
pub const VALID_FINALS_2: &[[u16; 2]] = &[
    [keys::C, keys::H],
    [keys::N, keys::G],
    [keys::N, keys::H],
];

/// (initial, allowed-vowels, reason) — spelling rule violations.
/// `c` never precedes i/e/y (use `k`); `g` never precedes i/e/y bare (use `gh`);
/// `ng` never precedes i/e/y bare (use `ngh`); `k`/`gh`/`ngh` never precede
/// back vowels a/o/u/ơ/ă/â/ô/ư (use c/g/ng instead).
pub const SPELLING_RULES: &[(&[u16], &[u16], &str)] = &[
    (&[keys::C], &[keys::I, keys::E, keys::Y], "c+i/e/y should be k"),
    (&[keys::G], &[keys::I, keys::E, keys::Y], "g+i/e/y should be gh"),
    (&[keys::N, keys::G], &[keys::I, keys::E, keys::Y], "ng+i/e/y should be ngh"),
    (&[keys::K], &[keys::A, keys::O, keys::U], "k+a/o/u should be c"),
];

/// Vowel pairs that never occur together in Vietnamese (foreign-word tells)
pub const INVALID_VOWEL_PATTERNS: &[[u16; 2]] = &[
    [keys::O, keys::U], // "ou": you, our, house
    [keys::Y, keys::O], // "yo": yoke, beyond
];
