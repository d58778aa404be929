//! Shortcut table — abbreviation expansion
//!
//! Lets users define shortcuts like "vn" → "Việt Nam". Shortcuts can be
//! scoped to an input method or apply to all of them.
//!
//! Matching is suffix-based against the rendered buffer: the longest
//! registered trigger that is a suffix of the buffer wins, and on a tie
//! the most recently inserted trigger wins. This table is insertion-ordered
//! on purpose — a plain `HashMap` cannot express the tie-break, since it
//! has no notion of "which entry was added last".

/// Input method that a shortcut applies to
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputMethod {
    #[default]
    All,
    Telex,
    Vni,
}

/// Trigger condition for a shortcut
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerCondition {
    /// Trigger immediately when the buffer matches
    Immediate,
    /// Trigger only when a word boundary (space, punctuation) is pressed
    OnWordBoundary,
}

/// Case handling mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaseMode {
    /// Keep replacement exactly as defined
    Exact,
    /// Match case of trigger: "VN" → "VIỆT NAM", "Vn" → "Việt Nam"
    MatchCase,
}

/// A single shortcut entry
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Trigger string (lowercase for matching)
    pub trigger: String,
    pub replacement: String,
    pub condition: TriggerCondition,
    pub case_mode: CaseMode,
    pub enabled: bool,
    pub input_method: InputMethod,
}

impl Shortcut {
    /// Word-boundary trigger, case-matched, applies to all input methods
    pub fn new(trigger: &str, replacement: &str) -> Self {
        Self {
            trigger: trigger.to_lowercase(),
            replacement: replacement.to_string(),
            condition: TriggerCondition::OnWordBoundary,
            case_mode: CaseMode::MatchCase,
            enabled: true,
            input_method: InputMethod::All,
        }
    }

    /// Immediate trigger, exact case, applies to all input methods
    pub fn immediate(trigger: &str, replacement: &str) -> Self {
        Self {
            trigger: trigger.to_lowercase(),
            replacement: replacement.to_string(),
            condition: TriggerCondition::Immediate,
            case_mode: CaseMode::Exact,
            enabled: true,
            input_method: InputMethod::All,
        }
    }

    pub fn telex(trigger: &str, replacement: &str) -> Self {
        Self {
            input_method: InputMethod::Telex,
            ..Self::immediate(trigger, replacement)
        }
    }

    pub fn vni(trigger: &str, replacement: &str) -> Self {
        Self {
            input_method: InputMethod::Vni,
            ..Self::immediate(trigger, replacement)
        }
    }

    pub fn for_method(mut self, method: InputMethod) -> Self {
        self.input_method = method;
        self
    }

    /// Does this shortcut apply to the given query method?
    pub fn applies_to(&self, query_method: InputMethod) -> bool {
        match self.input_method {
            InputMethod::All => true,
            InputMethod::Telex => {
                query_method == InputMethod::Telex || query_method == InputMethod::All
            }
            InputMethod::Vni => {
                query_method == InputMethod::Vni || query_method == InputMethod::All
            }
        }
    }
}

/// Result of a successful shortcut match
#[derive(Debug)]
pub struct ShortcutMatch {
    /// Number of characters to backspace (counts the matched trigger)
    pub backspace_count: usize,
    pub output: String,
    pub include_trigger_key: bool,
}

/// Shortcut table manager
///
/// Entries are kept in insertion order. `add()` removes any existing
/// entry for the same trigger and appends, so re-adding a trigger moves
/// it to "most recently inserted" for tie-breaking purposes.
#[derive(Debug, Default)]
pub struct ShortcutTable {
    entries: Vec<Shortcut>,
}

impl ShortcutTable {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Common Vietnamese abbreviations, applying to all input methods
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.add(Shortcut::new("vn", "Việt Nam"));
        table.add(Shortcut::new("hcm", "Hồ Chí Minh"));
        table.add(Shortcut::new("hn", "Hà Nội"));
        table.add(Shortcut::new("dc", "được"));
        table.add(Shortcut::new("ko", "không"));
        table
    }

    pub fn add(&mut self, shortcut: Shortcut) {
        self.entries.retain(|s| s.trigger != shortcut.trigger);
        self.entries.push(shortcut);
    }

    pub fn remove(&mut self, trigger: &str) -> Option<Shortcut> {
        let trigger = trigger.to_lowercase();
        let pos = self.entries.iter().position(|s| s.trigger == trigger)?;
        Some(self.entries.remove(pos))
    }

    /// Find the best shortcut matching the end of `buffer` for any input method
    pub fn lookup(&self, buffer: &str) -> Option<(&str, &Shortcut)> {
        self.lookup_for_method(buffer, InputMethod::All)
    }

    /// Find the best shortcut matching the end of `buffer` for the given method
    ///
    /// Among all enabled, applicable triggers that are a suffix of `buffer`,
    /// picks the longest one; ties go to whichever was inserted most recently.
    pub fn lookup_for_method(
        &self,
        buffer: &str,
        method: InputMethod,
    ) -> Option<(&str, &Shortcut)> {
        let buffer_lower = buffer.to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, s)| s.enabled && s.applies_to(method) && buffer_lower.ends_with(&s.trigger))
            .max_by_key(|(idx, s)| (s.trigger.chars().count(), *idx))
            .map(|(_, s)| (s.trigger.as_str(), s))
    }

    pub fn try_match(
        &self,
        buffer: &str,
        key_char: Option<char>,
        is_word_boundary: bool,
    ) -> Option<ShortcutMatch> {
        self.try_match_for_method(buffer, key_char, is_word_boundary, InputMethod::All)
    }

    pub fn try_match_for_method(
        &self,
        buffer: &str,
        key_char: Option<char>,
        is_word_boundary: bool,
        method: InputMethod,
    ) -> Option<ShortcutMatch> {
        let (trigger, shortcut) = self.lookup_for_method(buffer, method)?;
        let backspace_count = trigger.chars().count();

        match shortcut.condition {
            TriggerCondition::Immediate => {
                let output = Self::apply_case(trigger, &shortcut.replacement, shortcut.case_mode);
                Some(ShortcutMatch {
                    backspace_count,
                    output,
                    include_trigger_key: false,
                })
            }
            TriggerCondition::OnWordBoundary => {
                if !is_word_boundary {
                    return None;
                }
                let mut output =
                    Self::apply_case(trigger, &shortcut.replacement, shortcut.case_mode);
                if let Some(ch) = key_char {
                    output.push(ch);
                }
                Some(ShortcutMatch {
                    backspace_count,
                    output,
                    include_trigger_key: true,
                })
            }
        }
    }

    fn apply_case(trigger: &str, replacement: &str, mode: CaseMode) -> String {
        match mode {
            CaseMode::Exact => replacement.to_string(),
            CaseMode::MatchCase => {
                if trigger.chars().all(|c| c.is_uppercase()) {
                    replacement.to_uppercase()
                } else if trigger.chars().next().map(|c| c.is_uppercase()).unwrap_or(false) {
                    let mut chars = replacement.chars();
                    match chars.next() {
                        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                        None => String::new(),
                    }
                } else {
                    replacement.to_string()
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
