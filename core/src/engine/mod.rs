//! Vietnamese IME Engine

pub mod buffer;
pub mod shortcut;
pub mod syllable;
pub mod validation;

use buffer::{Buffer, Char, MAX};
use crate::data::{chars, keys, vowel};
use crate::input::{self, ToneType};
use crate::utils;
use shortcut::ShortcutTable;

const HISTORY_CAPACITY: usize = 10;

/// Engine action result
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    None = 0,    // Pass through
    Send = 1,    // Delete + send new chars
    Restore = 2, // Invalid, restore original
}

/// Result for FFI - layout MUST match the host's ImeResult exactly
#[repr(C, packed)]
pub struct Result {
    pub action: u8, // Action as u8
    pub backspace: u8,
    pub chars: [u32; MAX],
    pub count: u8,
}

impl Result {
    pub fn none() -> Self {
        Self {
            action: Action::None as u8,
            backspace: 0,
            chars: [0; MAX],
            count: 0,
        }
    }

    pub fn send(backspace: u8, chars: &[char]) -> Self {
        Self::with_action(Action::Send, backspace, chars)
    }

    pub fn restore(backspace: u8, chars: &[char]) -> Self {
        Self::with_action(Action::Restore, backspace, chars)
    }

    fn with_action(action: Action, backspace: u8, chars: &[char]) -> Self {
        let mut result = Self {
            action: action as u8,
            backspace,
            chars: [0; MAX],
            count: chars.len() as u8,
        };
        for (i, &c) in chars.iter().enumerate() {
            if i < MAX {
                result.chars[i] = c as u32;
            }
        }
        result
    }
}

/// Word-at-a-time history, used to restore a previously committed word when
/// the user backspaces through the space that followed it.
#[derive(Default)]
struct WordHistory {
    words: Vec<Buffer>,
}

impl WordHistory {
    fn push(&mut self, buf: Buffer) {
        if self.words.len() == HISTORY_CAPACITY {
            self.words.remove(0);
        }
        self.words.push(buf);
    }

    fn pop(&mut self) -> Option<Buffer> {
        self.words.pop()
    }

    fn clear(&mut self) {
        self.words.clear();
    }
}

fn render_char(c: &Char) -> Option<char> {
    if c.key == keys::D && c.stroke {
        return Some(chars::get_d(c.caps));
    }
    chars::to_char(c.key, c.caps, c.tone, c.mark).or_else(|| utils::key_to_char(c.key, c.caps))
}

fn shifted_symbol(key: u16) -> Option<char> {
    match key {
        keys::N1 => Some('!'),
        keys::N2 => Some('@'),
        keys::N3 => Some('#'),
        keys::N4 => Some('$'),
        keys::N5 => Some('%'),
        keys::N6 => Some('^'),
        keys::N7 => Some('&'),
        keys::N8 => Some('*'),
        keys::N9 => Some('('),
        keys::N0 => Some(')'),
        keys::SLASH => Some('?'),
        _ => None,
    }
}

fn ends_sentence(key: u16, boundary_char: Option<char>) -> bool {
    key == keys::RETURN
        || key == keys::ENTER
        || matches!(boundary_char, Some('.') | Some('!') | Some('?'))
}

/// Main engine
pub struct Engine {
    buf: Buffer,
    /// Keys (with caps flag) typed since the last word boundary, in order.
    /// Used to reconstruct the raw ASCII a user actually typed for ESC-restore
    /// and English auto-restore.
    raw: Vec<(u16, bool)>,
    method: u8, // 0=Telex, 1=VNI
    enabled: bool,
    modern: bool, // oà vs òa
    free_tone: bool,
    skip_w_shortcut: bool,
    esc_restore_enabled: bool,
    english_auto_restore: bool,
    bracket_shortcut: bool,
    auto_capitalize: bool,
    allow_foreign_consonants: bool,
    pending_capitalize: bool,
    shortcuts: ShortcutTable,
    word_history: WordHistory,
    spaces_after_commit: u8,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            buf: Buffer::new(),
            raw: Vec::new(),
            method: 0,
            enabled: true,
            modern: true,
            free_tone: false,
            skip_w_shortcut: false,
            esc_restore_enabled: true,
            english_auto_restore: false,
            bracket_shortcut: false,
            auto_capitalize: false,
            allow_foreign_consonants: false,
            pending_capitalize: false,
            shortcuts: ShortcutTable::new(),
            word_history: WordHistory::default(),
            spaces_after_commit: 0,
        }
    }

    pub fn set_method(&mut self, method: u8) {
        self.method = method;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.clear_all();
        }
    }

    pub fn set_modern_tone(&mut self, modern: bool) {
        self.modern = modern;
    }

    pub fn set_free_tone(&mut self, enabled: bool) {
        self.free_tone = enabled;
    }

    pub fn set_skip_w_shortcut(&mut self, skip: bool) {
        self.skip_w_shortcut = skip;
    }

    pub fn set_esc_restore(&mut self, enabled: bool) {
        self.esc_restore_enabled = enabled;
    }

    pub fn set_english_auto_restore(&mut self, enabled: bool) {
        self.english_auto_restore = enabled;
    }

    /// Enable `[` → ơ, `]` → ư as an alternate horn shortcut (Telex only).
    pub fn set_bracket_shortcut(&mut self, enabled: bool) {
        self.bracket_shortcut = enabled;
    }

    /// Capitalise the first letter after `. ! ?` or Enter.
    pub fn set_auto_capitalize(&mut self, enabled: bool) {
        self.auto_capitalize = enabled;
    }

    /// Accept z/w/j/f as valid initial consonants (loanwords, foreign names).
    pub fn set_allow_foreign_consonants(&mut self, enabled: bool) {
        self.allow_foreign_consonants = enabled;
    }

    pub fn shortcuts(&self) -> &ShortcutTable {
        &self.shortcuts
    }

    pub fn shortcuts_mut(&mut self) -> &mut ShortcutTable {
        &mut self.shortcuts
    }

    /// Current buffer rendered as Vietnamese text, diacritics included.
    pub fn get_buffer_string(&self) -> String {
        self.buf.to_full_string()
    }

    /// Rebuild buffer state from an already-composed Vietnamese word.
    ///
    /// Used when the host detects the cursor sitting inside a previously
    /// typed word (e.g. after arrow-key or backspace navigation) and wants
    /// the engine to resume editing it.
    pub fn restore_word(&mut self, word: &str) {
        self.buf.clear();
        self.raw.clear();
        for ch in word.chars() {
            if let Some(p) = chars::parse_char(ch) {
                self.buf.push(Char {
                    key: p.key,
                    caps: p.caps,
                    tone: p.tone,
                    mark: p.mark,
                    stroke: p.stroke,
                    last_key: 0,
                });
                self.raw.push((p.key, p.caps));
            }
        }
    }

    /// Clear the current word, keeping cross-word state (history, shortcuts).
    pub fn clear(&mut self) {
        self.buf.clear();
        self.raw.clear();
    }

    /// Clear everything, including word history. Call on cursor moves that
    /// aren't a simple backspace (mouse click, arrow keys, focus change).
    pub fn clear_all(&mut self) {
        self.clear();
        self.word_history.clear();
        self.spaces_after_commit = 0;
        self.pending_capitalize = false;
    }

    pub fn on_key(&mut self, key: u16, caps: bool, ctrl: bool) -> Result {
        self.on_key_ext(key, caps, ctrl, false)
    }

    pub fn on_key_ext(&mut self, key: u16, caps: bool, ctrl: bool, shift: bool) -> Result {
        if !self.enabled || ctrl {
            self.clear();
            return Result::none();
        }

        if key == keys::DELETE {
            return self.handle_delete();
        }

        if key == keys::ESC {
            let result = if self.esc_restore_enabled {
                self.restore_to_raw()
            } else {
                Result::none()
            };
            self.clear_all();
            return result;
        }

        if shift && keys::is_number(key) {
            self.commit_word(false);
            return Result::none();
        }

        if self.bracket_shortcut
            && self.method == 0
            && (key == keys::LBRACKET || key == keys::RBRACKET)
        {
            if let Some(result) = self.try_bracket_horn(key) {
                return result;
            }
        }

        if key == keys::SPACE {
            if let Some(result) = self.try_boundary_shortcut(Some(' ')) {
                self.commit_word(true);
                return result;
            }
            if let Some(result) = self.try_english_restore() {
                self.clear();
                return result;
            }
            self.commit_word(true);
            return Result::none();
        }

        if keys::is_break(key) {
            let boundary_char = if shift {
                shifted_symbol(key)
            } else {
                utils::key_to_char(key, false)
            };
            if self.auto_capitalize && ends_sentence(key, boundary_char) {
                self.pending_capitalize = true;
            }
            if let Some(result) = self.try_boundary_shortcut(boundary_char) {
                self.commit_word(false);
                return result;
            }
            if let Some(result) = self.try_english_restore() {
                self.clear();
                return result;
            }
            self.commit_word(false);
            return Result::none();
        }

        self.raw.push((key, caps));
        self.process(key, caps)
    }

    /// Like `on_key_ext`, but lets the host supply the Unicode scalar the OS
    /// layout actually produced for `key`. Used for modifier-altered keys
    /// (e.g. an option-mapped key yielding `√`) the engine's own virtual-key
    /// tables don't cover: if `scalar` resolves to a known ASCII letter or
    /// digit, it's treated as that key; otherwise behaves like `on_key_ext`.
    pub fn on_key_with_char(
        &mut self,
        key: u16,
        caps: bool,
        ctrl: bool,
        shift: bool,
        scalar: char,
    ) -> Result {
        if !keys::is_letter(key) && !keys::is_number(key) {
            if let Some(mapped) = utils::scalar_to_key(scalar) {
                return self.on_key_ext(mapped, scalar.is_uppercase(), ctrl, shift);
            }
        }
        self.on_key_ext(key, caps, ctrl, shift)
    }

    fn commit_word(&mut self, track_space: bool) {
        if !self.buf.is_empty() {
            self.word_history.push(self.buf.clone());
        }
        if track_space {
            self.spaces_after_commit = self.spaces_after_commit.saturating_add(1);
        }
        self.clear();
    }

    fn handle_delete(&mut self) -> Result {
        if self.buf.pop().is_some() {
            self.raw.pop();
            return Result::none();
        }

        if self.spaces_after_commit == 0 {
            return Result::none();
        }

        self.spaces_after_commit -= 1;
        if self.spaces_after_commit == 0 {
            if let Some(word) = self.word_history.pop() {
                self.raw = word.iter().map(|c| (c.key, c.caps)).collect();
                self.buf = word;
            }
        }
        Result::send(1, &[])
    }

    fn try_boundary_shortcut(&mut self, boundary_char: Option<char>) -> Option<Result> {
        if self.buf.is_empty() {
            return None;
        }
        let buffer_str = self.buf.to_full_string();
        let method = match self.method {
            1 => shortcut::InputMethod::Vni,
            _ => shortcut::InputMethod::Telex,
        };
        let m = self
            .shortcuts
            .try_match_for_method(&buffer_str, boundary_char, true, method)?;
        let output_chars: Vec<char> = m.output.chars().collect();
        Some(Result::send(m.backspace_count as u8, &output_chars))
    }

    /// If the committed buffer doesn't look like valid Vietnamese and the
    /// raw keystrokes diverge from it, restore the plain ASCII the user typed.
    fn try_english_restore(&mut self) -> Option<Result> {
        if !self.english_auto_restore || self.raw.len() < 2 {
            return None;
        }

        let raw_str: String = self
            .raw
            .iter()
            .filter_map(|&(k, c)| utils::key_to_char(k, c))
            .collect();
        let buffer_str = self.buf.to_full_string();
        if raw_str == buffer_str {
            return None;
        }

        let buffer_keys: Vec<u16> = self.buf.iter().map(|c| c.key).collect();
        if validation::is_valid_ext(&buffer_keys, self.allow_foreign_consonants) {
            return None;
        }

        let backspace = buffer_str.chars().count() as u8;
        let restore_chars: Vec<char> = raw_str.chars().collect();
        Some(Result::restore(backspace, &restore_chars))
    }

    fn restore_to_raw(&mut self) -> Result {
        if self.raw.is_empty() {
            return Result::none();
        }
        let ascii: Vec<char> = self
            .raw
            .iter()
            .filter_map(|&(k, c)| utils::key_to_char(k, c))
            .collect();
        if ascii.is_empty() {
            return Result::none();
        }
        let backspace = self.buf.to_full_string().chars().count() as u8;
        Result::restore(backspace, &ascii)
    }

    fn process(&mut self, key: u16, caps: bool) -> Result {
        let m = input::get(self.method);

        if m.stroke(key) {
            if keys::is_letter(key) {
                // Telex: 'dd' must be adjacent, since 'd' is also a plain letter.
                if let Some(last) = self.buf.last() {
                    if last.key == keys::D && !last.stroke {
                        return self.handle_stroke(self.buf.len() - 1, caps);
                    }
                }
                // No preceding unstroked 'd': falls through as a plain consonant below.
            } else {
                // VNI: '9' is a pure modifier, so it strokes the nearest
                // unstroked 'd' anywhere in the buffer, not just the last slot.
                let pos = self
                    .buf
                    .iter()
                    .enumerate()
                    .rev()
                    .find(|(_, c)| c.key == keys::D && !c.stroke)
                    .map(|(i, _)| i);
                return match pos {
                    Some(pos) => self.handle_stroke(pos, caps),
                    None => Result::none(),
                };
            }
        }

        if self.method == 0 && key == keys::W && self.buf.is_empty() {
            if self.skip_w_shortcut {
                self.push_literal_key(key, caps);
                return Result::none();
            }
            let caps = self.consume_pending_capitalize(caps);
            self.buf.push(Char {
                key: keys::U,
                caps,
                tone: chars::tone::HORN,
                mark: 0,
                stroke: false,
                last_key: key,
            });
            let ch = render_char(self.buf.last().unwrap());
            return match ch {
                Some(c) => Result::send(0, &[c]),
                None => Result::none(),
            };
        }

        if let Some(tone_type) = m.tone(key) {
            return self.handle_tone(key, caps, tone_type);
        }

        if let Some(mark_value) = m.mark(key) {
            return self.handle_mark(key, caps, mark_value);
        }

        if m.remove(key) {
            return self.handle_remove(key, caps);
        }

        if keys::is_letter(key) {
            self.push_literal_key(key, caps);
        }

        Result::none()
    }

    fn push_literal_key(&mut self, key: u16, caps: bool) {
        let caps = self.consume_pending_capitalize(caps);
        self.buf.push(Char::new(key, caps));
    }

    /// If auto-capitalize armed a sentence-start and this is the first
    /// letter of a new word, force it uppercase and disarm.
    fn consume_pending_capitalize(&mut self, caps: bool) -> bool {
        if self.pending_capitalize && self.buf.is_empty() {
            self.pending_capitalize = false;
            return true;
        }
        caps
    }

    fn reject_modifier(&mut self, key: u16, caps: bool) -> Result {
        if keys::is_letter(key) {
            self.push_literal_key(key, caps);
        }
        Result::none()
    }

    fn looks_foreign(&self, key: u16) -> bool {
        if self.free_tone {
            return false;
        }
        let buffer_keys: Vec<u16> = self.buf.iter().map(|c| c.key).collect();
        validation::is_foreign_word_pattern(&buffer_keys, key)
    }

    /// Handle đ (dd in Telex, d+9 in VNI). `pos` is the buffer slot of the
    /// unstroked 'd' being converted, which need not be the last slot typed
    /// (VNI's `9` strokes the most recent 'd' wherever it sits).
    fn handle_stroke(&mut self, pos: usize, caps: bool) -> Result {
        if let Some(c) = self.buf.get_mut(pos) {
            c.stroke = true;
            c.caps = caps;
        }
        self.rebuild_from(pos)
    }

    /// Handle vowel modifier (circumflex ^, horn móc, breve trăng)
    fn handle_tone(&mut self, key: u16, caps: bool, tone_type: ToneType) -> Result {
        let m = input::get(self.method);
        let targets = m.tone_targets(key);
        self.apply_tone(key, caps, tone_type, targets)
    }

    /// `[` and `]` in Telex optionally act as an alternate horn trigger
    /// (`[` → ơ, `]` → ư) when the preceding vowel matches and is untoned.
    fn try_bracket_horn(&mut self, key: u16) -> Option<Result> {
        let target = if key == keys::LBRACKET { keys::O } else { keys::U };
        let last = self.buf.last()?;
        if last.key != target || last.has_tone() {
            return None;
        }
        let caps = last.caps;
        Some(self.apply_tone(key, caps, ToneType::Horn, &[target]))
    }

    /// Find the nucleus slot a tone/horn/breve with no pattern-table match
    /// falls back to: the last buffer vowel matching `targets`, wherever it
    /// sits (not necessarily the last buffer slot — a final consonant may
    /// already follow it, e.g. "tieng" + circumflex → the 'e' in "tiếng").
    fn find_target_position(&self, targets: &[u16]) -> Option<usize> {
        self.buf
            .find_vowels()
            .into_iter()
            .rev()
            .find(|&p| self.buf.get(p).map_or(false, |c| targets.contains(&c.key)))
    }

    fn find_tone_positions(&self, tone_type: ToneType, targets: &[u16]) -> Option<Vec<usize>> {
        match tone_type {
            ToneType::Circumflex => self.find_target_position(targets).map(|p| vec![p]),
            ToneType::Horn | ToneType::Breve => {
                let buffer_keys: Vec<u16> = self.buf.iter().map(|c| c.key).collect();
                let vowel_positions = self.buf.find_vowels();
                let horn = vowel::Phonology::find_horn_positions(&buffer_keys, &vowel_positions);
                if horn.is_empty() {
                    self.find_target_position(targets).map(|p| vec![p])
                } else {
                    Some(horn)
                }
            }
        }
    }

    fn apply_tone(&mut self, key: u16, caps: bool, tone_type: ToneType, targets: &[u16]) -> Result {
        if self.buf.is_empty() {
            return self.reject_modifier(key, caps);
        }

        if self.looks_foreign(key) {
            return self.reject_modifier(key, caps);
        }

        let positions = match self.find_tone_positions(tone_type, targets) {
            Some(p) if !p.is_empty() => p,
            _ => return self.reject_modifier(key, caps),
        };

        let new_tone = tone_type.value();

        // Double-key revert: re-pressing the trigger that set this exact
        // tone strips it and appends the literal trigger letter instead.
        let is_revert = positions
            .iter()
            .all(|&p| self.buf.get(p).map_or(false, |c| c.tone == new_tone && c.last_key == key));

        if is_revert {
            let from = *positions.iter().min().unwrap();
            let old_len = self.buf.len();
            for &p in &positions {
                if let Some(c) = self.buf.get_mut(p) {
                    c.tone = 0;
                    c.last_key = 0;
                }
            }
            self.push_literal_key(key, caps);
            return self.rebuild_range(from, (old_len - from) as u8);
        }

        if positions.iter().any(|&p| self.buf.get(p).map_or(false, |c| c.has_tone())) {
            return self.reject_modifier(key, caps);
        }

        let from = *positions.iter().min().unwrap();
        for &p in &positions {
            if let Some(c) = self.buf.get_mut(p) {
                c.tone = new_tone;
                c.last_key = key;
            }
        }
        self.rebuild_from(from)
    }

    /// Handle tone mark (sắc, huyền, hỏi, ngã, nặng)
    fn handle_mark(&mut self, key: u16, caps: bool, mark_value: u8) -> Result {
        let vowels = utils::collect_vowels(&self.buf);
        if vowels.is_empty() {
            return self.reject_modifier(key, caps);
        }

        if self.looks_foreign(key) {
            return self.reject_modifier(key, caps);
        }

        let last_vowel_pos = vowels.last().unwrap().pos;
        let has_final = utils::has_final_consonant(&self.buf, last_vowel_pos);
        let has_qu = utils::has_qu_initial(&self.buf);
        let has_gi = utils::has_gi_initial(&self.buf);
        let pos =
            vowel::Phonology::find_tone_position(&vowels, has_final, self.modern, has_qu, has_gi);

        let current = match self.buf.get(pos) {
            Some(c) => *c,
            None => return Result::none(),
        };

        // Double-key revert: re-pressing the key that set this exact mark
        // strips it and appends the literal trigger letter instead.
        if current.mark == mark_value && current.last_key == key {
            let old_len = self.buf.len();
            if let Some(c) = self.buf.get_mut(pos) {
                c.mark = 0;
                c.last_key = 0;
            }
            self.push_literal_key(key, caps);
            return self.rebuild_range(pos, (old_len - pos) as u8);
        }

        if let Some(c) = self.buf.get_mut(pos) {
            c.mark = mark_value;
            c.last_key = key;
            return self.rebuild_from(pos);
        }

        Result::none()
    }

    /// Handle mark/tone removal (z in Telex, 0 in VNI)
    fn handle_remove(&mut self, key: u16, caps: bool) -> Result {
        let vowels = self.buf.find_vowels();
        if vowels.is_empty() {
            return self.reject_modifier(key, caps);
        }

        for &i in vowels.iter().rev() {
            if let Some(c) = self.buf.get_mut(i) {
                if c.has_mark() {
                    c.mark = 0;
                    return self.rebuild_from(i);
                }
                if c.has_tone() {
                    c.tone = 0;
                    return self.rebuild_from(i);
                }
            }
        }

        self.reject_modifier(key, caps)
    }

    /// Re-render the buffer from `from` to the end and emit the diff.
    fn rebuild_from(&self, from: usize) -> Result {
        let backspace = (self.buf.len() - from) as u8;
        self.rebuild_range(from, backspace)
    }

    /// Like `rebuild_from`, but with an explicit backspace count. Used by
    /// double-key revert, where a literal char is appended to the buffer
    /// for the *current* keystroke — it was never on screen, so it must not
    /// be counted among the characters being deleted.
    fn rebuild_range(&self, from: usize, backspace: u8) -> Result {
        let mut output = Vec::new();

        for i in from..self.buf.len() {
            if let Some(c) = self.buf.get(i) {
                if let Some(ch) = render_char(c) {
                    output.push(ch);
                }
            }
        }

        if output.is_empty() {
            Result::none()
        } else {
            Result::send(backspace, &output)
        }
    }
}
