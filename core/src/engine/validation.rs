//! Vietnamese Syllable Validation
//!
//! Rule-based validation for Vietnamese syllables.
//! Each rule is a simple function that returns Some(error) if invalid, None if OK.

use super::syllable::{parse, Syllable};
use crate::data::constants;
use crate::data::keys;

/// Validation result
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    Valid,
    InvalidInitial,
    InvalidFinal,
    InvalidSpelling,
    InvalidVowelPattern,
    NoVowel,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }
}

// =============================================================================
// VALIDATION RULES - Each rule is a simple check function
// =============================================================================

/// Rule type: takes buffer keys, parsed syllable, and the `allow_foreign_consonants`
/// flag; returns an error or None
type Rule = fn(&[u16], &Syllable, bool) -> Option<ValidationResult>;

/// All validation rules in order of priority
const RULES: &[Rule] = &[
    rule_has_vowel,
    rule_valid_initial,
    rule_all_chars_parsed,
    rule_spelling,
    rule_valid_final,
    rule_valid_vowel_pattern,
];

/// Initials that only appear in loanwords (dz, jeep, w-as-ư already handled
/// elsewhere, fan/fax) but that some users still want accepted as plain
/// consonants when typing foreign names.
const FOREIGN_INITIALS_1: &[u16] = &[keys::Z, keys::W, keys::J, keys::F];

// =============================================================================
// RULE IMPLEMENTATIONS
// =============================================================================

/// Rule 1: Must have at least one vowel
fn rule_has_vowel(_keys: &[u16], syllable: &Syllable, _allow_foreign: bool) -> Option<ValidationResult> {
    if syllable.is_empty() {
        return Some(ValidationResult::NoVowel);
    }
    None
}

/// Rule 2: Initial consonant must be valid Vietnamese
fn rule_valid_initial(keys: &[u16], syllable: &Syllable, allow_foreign: bool) -> Option<ValidationResult> {
    if syllable.initial.is_empty() {
        return None; // No initial = starts with vowel, OK
    }

    let initial: Vec<u16> = syllable.initial.iter().map(|&i| keys[i]).collect();

    let is_valid = match initial.len() {
        1 => {
            constants::VALID_INITIALS_1.contains(&initial[0])
                || (allow_foreign && FOREIGN_INITIALS_1.contains(&initial[0]))
        }
        2 => constants::VALID_INITIALS_2
            .iter()
            .any(|p| p[0] == initial[0] && p[1] == initial[1]),
        3 => initial[0] == keys::N && initial[1] == keys::G && initial[2] == keys::H,
        _ => false,
    };

    if !is_valid {
        return Some(ValidationResult::InvalidInitial);
    }
    None
}

/// Rule 3: All characters must be parsed into syllable structure
fn rule_all_chars_parsed(keys: &[u16], syllable: &Syllable, _allow_foreign: bool) -> Option<ValidationResult> {
    let parsed = syllable.initial.len()
        + syllable.glide.map_or(0, |_| 1)
        + syllable.vowel.len()
        + syllable.final_c.len();

    if parsed != keys.len() {
        return Some(ValidationResult::InvalidFinal);
    }
    None
}

/// Rule 4: Vietnamese spelling rules (c/k, g/gh, ng/ngh)
fn rule_spelling(keys: &[u16], syllable: &Syllable, _allow_foreign: bool) -> Option<ValidationResult> {
    if syllable.initial.is_empty() || syllable.vowel.is_empty() {
        return None;
    }

    let initial: Vec<u16> = syllable.initial.iter().map(|&i| keys[i]).collect();
    let first_vowel = keys[syllable.glide.unwrap_or(syllable.vowel[0])];

    // Check all spelling rules
    for &(consonant, vowels, _msg) in constants::SPELLING_RULES {
        if initial == consonant && vowels.contains(&first_vowel) {
            return Some(ValidationResult::InvalidSpelling);
        }
    }

    None
}

/// Rule 5: Final consonant must be valid
fn rule_valid_final(keys: &[u16], syllable: &Syllable, _allow_foreign: bool) -> Option<ValidationResult> {
    if syllable.final_c.is_empty() {
        return None;
    }

    let final_c: Vec<u16> = syllable.final_c.iter().map(|&i| keys[i]).collect();

    let is_valid = match final_c.len() {
        1 => constants::VALID_FINALS_1.contains(&final_c[0]),
        2 => constants::VALID_FINALS_2
            .iter()
            .any(|p| p[0] == final_c[0] && p[1] == final_c[1]),
        _ => false,
    };

    if !is_valid {
        return Some(ValidationResult::InvalidFinal);
    }
    None
}

/// Rule 6: Vowel patterns must be valid Vietnamese
///
/// Vietnamese has specific valid vowel combinations. Some patterns common
/// in English/foreign words don't exist in Vietnamese:
/// - "ou" (you, our, out, house, about) - Vietnamese uses "ô", "ơ", "ươ" instead
/// - "yo" (yoke, York, beyond, your) - Vietnamese "y" combines with ê (yêu, yến)
///
/// Exception: "uou" is valid (becomes ươu: hươu, rượu, bướu)
fn rule_valid_vowel_pattern(keys: &[u16], syllable: &Syllable, _allow_foreign: bool) -> Option<ValidationResult> {
    if syllable.vowel.len() < 2 {
        return None;
    }

    // Get consecutive vowel keys
    let vowels: Vec<u16> = syllable.vowel.iter().map(|&i| keys[i]).collect();

    // Check for invalid vowel patterns
    for i in 0..vowels.len() - 1 {
        let pair = [vowels[i], vowels[i + 1]];

        // Skip if this pair is part of valid triphthong "uou" → ươu
        if pair == [keys::O, keys::U] && i > 0 && vowels[i - 1] == keys::U {
            continue;
        }

        if constants::INVALID_VOWEL_PATTERNS
            .iter()
            .any(|p| p[0] == pair[0] && p[1] == pair[1])
        {
            return Some(ValidationResult::InvalidVowelPattern);
        }
    }

    None
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Validate buffer as Vietnamese syllable - runs all rules
pub fn validate(buffer_keys: &[u16]) -> ValidationResult {
    validate_ext(buffer_keys, false)
}

/// Validate buffer as Vietnamese syllable, optionally accepting loanword
/// initials (z, w, j, f) as valid.
pub fn validate_ext(buffer_keys: &[u16], allow_foreign_consonants: bool) -> ValidationResult {
    if buffer_keys.is_empty() {
        return ValidationResult::NoVowel;
    }

    let syllable = parse(buffer_keys);

    // Run all rules in order
    for rule in RULES {
        if let Some(error) = rule(buffer_keys, &syllable, allow_foreign_consonants) {
            return error;
        }
    }

    ValidationResult::Valid
}

/// Quick check if buffer could be valid Vietnamese
pub fn is_valid(buffer_keys: &[u16]) -> bool {
    validate(buffer_keys).is_valid()
}

/// Quick check, optionally accepting loanword initials as valid.
pub fn is_valid_ext(buffer_keys: &[u16], allow_foreign_consonants: bool) -> bool {
    validate_ext(buffer_keys, allow_foreign_consonants).is_valid()
}

/// Check if the buffer shows patterns that suggest foreign word input.
///
/// This is a heuristic to detect when the user is likely typing a foreign word
/// rather than Vietnamese. It checks for:
/// 1. Invalid vowel patterns (ou, yo) that don't exist in Vietnamese
/// 2. Consonant clusters after finals that are common in English (T+R, P+R, C+R)
///
/// Returns true if the pattern suggests foreign word input.
pub fn is_foreign_word_pattern(buffer_keys: &[u16], modifier_key: u16) -> bool {
    let syllable = parse(buffer_keys);

    // Check 1: Invalid vowel patterns in current buffer
    if syllable.vowel.len() >= 2 {
        let vowels: Vec<u16> = syllable.vowel.iter().map(|&i| buffer_keys[i]).collect();
        for i in 0..vowels.len() - 1 {
            let pair = [vowels[i], vowels[i + 1]];
            if constants::INVALID_VOWEL_PATTERNS
                .iter()
                .any(|p| p[0] == pair[0] && p[1] == pair[1])
            {
                return true;
            }
        }
    }

    // Check 2: Consonant clusters common in foreign words
    // Only applies when:
    // - Buffer has a final consonant (T, P, or C)
    // - Modifier key is R (forms T+R, P+R, C+R clusters common in English)
    if modifier_key == keys::R && syllable.final_c.len() == 1 && !syllable.initial.is_empty() {
        let final_key = buffer_keys[syllable.final_c[0]];
        if matches!(final_key, keys::T | keys::P | keys::C) {
            return true;
        }
    }

    // Check 3: Detect common English prefix patterns
    // "de" + 's' often leads to words like "describe", "destroy", "design"
    // Only apply if buffer is exactly consonant + single vowel (likely prefix)
    if modifier_key == keys::S
        && syllable.initial.len() == 1
        && syllable.vowel.len() == 1
        && syllable.final_c.is_empty()
    {
        let initial = buffer_keys[syllable.initial[0]];
        let vowel = buffer_keys[syllable.vowel[0]];

        // Common English prefixes: de-, re-, pre-
        // "de" + 's' → describe, destroy, design, desk
        // "re" + 's' → respond, result, restore (but Vietnamese "rẻ" exists)
        // Be conservative: only block "de" + 's' pattern
        if initial == keys::D && vowel == keys::E {
            return true;
        }
    }

    false
}

// =============================================================================
// TESTS
// =============================================================================
