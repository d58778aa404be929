//! Gõ Nhanh Vietnamese IME Core
//!
//! Simple Vietnamese input method engine supporting Telex and VNI.
//!
//! # FFI Usage
//!
//! ```c
//! // Initialize once at app start
//! ime_init();
//! ime_method(0);  // 0=Telex, 1=VNI
//!
//! // Process each keystroke
//! ImeResult* r = ime_key(keycode, is_shift, is_ctrl);
//! if (r && r->action == 1) {
//!     // Send r->backspace deletes, then r->chars
//! }
//! ime_free(r);
//!
//! // Clean up on word boundary
//! ime_clear();
//! ```

pub mod data;
pub mod engine;
pub mod input;
pub mod utils;

use engine::{Engine, Result};
use std::sync::Mutex;

// Global engine instance (thread-safe via Mutex)
static ENGINE: Mutex<Option<Engine>> = Mutex::new(None);

/// Lock the engine mutex, recovering from poisoned state if needed (for tests)
fn lock_engine() -> std::sync::MutexGuard<'static, Option<Engine>> {
    ENGINE.lock().unwrap_or_else(|e| e.into_inner())
}

// ============================================================
// FFI Interface
// ============================================================

/// Initialize the IME engine.
///
/// Must be called exactly once before any other `ime_*` functions.
/// Thread-safe: uses internal mutex.
///
/// # Panics
/// Panics if mutex is poisoned (only if previous call panicked).
#[no_mangle]
pub extern "C" fn ime_init() {
    let mut guard = lock_engine();
    *guard = Some(Engine::new());
}

/// Process a key event and return the result.
///
/// # Arguments
/// * `key` - macOS virtual keycode (0-127 for standard keys)
/// * `caps` - true if CapsLock is pressed (for uppercase letters)
/// * `ctrl` - true if Cmd/Ctrl/Alt is pressed (bypasses IME)
///
/// # Returns
/// * Pointer to `Result` struct (caller must free with `ime_free`)
/// * `null` if engine not initialized
///
/// # Result struct
/// * `action`: 0=None (pass through), 1=Send (replace text), 2=Restore
/// * `backspace`: number of characters to delete
/// * `chars`: UTF-32 codepoints to insert
/// * `count`: number of valid chars
///
/// # Note
/// For VNI mode with Shift+number keys (to type @, #, $ etc.),
/// use `ime_key_ext` with the shift parameter.
#[no_mangle]
pub extern "C" fn ime_key(key: u16, caps: bool, ctrl: bool) -> *mut Result {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        let r = e.on_key(key, caps, ctrl);
        Box::into_raw(Box::new(r))
    } else {
        std::ptr::null_mut()
    }
}

/// Process a key event with extended parameters.
///
/// # Arguments
/// * `key` - macOS virtual keycode (0-127 for standard keys)
/// * `caps` - true if CapsLock is pressed (for uppercase letters)
/// * `ctrl` - true if Cmd/Ctrl/Alt is pressed (bypasses IME)
/// * `shift` - true if Shift key is pressed (for symbols like @, #, $)
///
/// # Returns
/// * Pointer to `Result` struct (caller must free with `ime_free`)
/// * `null` if engine not initialized
///
/// # VNI Shift+number behavior
/// In VNI mode, when `shift=true` and key is a number (0-9), the engine
/// will NOT apply VNI marks/tones. This allows typing symbols:
/// - Shift+2 → @ (not huyền mark)
/// - Shift+3 → # (not hỏi mark)
/// - etc.
#[no_mangle]
pub extern "C" fn ime_key_ext(key: u16, caps: bool, ctrl: bool, shift: bool) -> *mut Result {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        let r = e.on_key_ext(key, caps, ctrl, shift);
        Box::into_raw(Box::new(r))
    } else {
        std::ptr::null_mut()
    }
}

/// Process a key event, additionally passing the Unicode scalar the OS
/// layout produced for it.
///
/// Lets a host route modifier-altered keys (e.g. an option-mapped key that
/// yields `√`) into the engine without the engine needing to know the OS
/// keyboard layout: if `scalar` is a plain ASCII letter/digit, it is treated
/// as that key; otherwise this behaves exactly like `ime_key_ext`.
///
/// # Returns
/// * Pointer to `Result` struct (caller must free with `ime_free`)
/// * `null` if engine not initialized
#[no_mangle]
pub extern "C" fn ime_key_with_char(
    key: u16,
    caps: bool,
    ctrl: bool,
    shift: bool,
    scalar: u32,
) -> *mut Result {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        let scalar = char::from_u32(scalar).unwrap_or('\0');
        let r = e.on_key_with_char(key, caps, ctrl, shift, scalar);
        Box::into_raw(Box::new(r))
    } else {
        std::ptr::null_mut()
    }
}

/// Set the input method.
///
/// # Arguments
/// * `method` - 0 for Telex, 1 for VNI
///
/// No-op if engine not initialized.
#[no_mangle]
pub extern "C" fn ime_method(method: u8) {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.set_method(method);
    }
}

/// Enable or disable the engine.
///
/// When disabled, `ime_key` returns action=0 (pass through).
/// No-op if engine not initialized.
#[no_mangle]
pub extern "C" fn ime_enabled(enabled: bool) {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.set_enabled(enabled);
    }
}

/// Set whether to skip w→ư shortcut in Telex mode.
///
/// When `skip` is true, typing 'w' at word start stays as 'w'
/// instead of converting to 'ư'.
/// No-op if engine not initialized.
#[no_mangle]
pub extern "C" fn ime_skip_w_shortcut(skip: bool) {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.set_skip_w_shortcut(skip);
    }
}

/// Set whether ESC key restores raw ASCII input.
///
/// When `enabled` is true (default), pressing ESC restores original keystrokes.
/// When `enabled` is false, ESC key is passed through without restoration.
/// No-op if engine not initialized.
#[no_mangle]
pub extern "C" fn ime_esc_restore(enabled: bool) {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.set_esc_restore(enabled);
    }
}

/// Set whether to enable free tone placement (skip validation).
///
/// When `enabled` is true, allows placing diacritics anywhere without
/// spelling validation (e.g., "Zìa" is allowed).
/// When `enabled` is false (default), validates Vietnamese spelling rules.
/// No-op if engine not initialized.
#[no_mangle]
pub extern "C" fn ime_free_tone(enabled: bool) {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.set_free_tone(enabled);
    }
}

/// Set whether to use modern orthography for tone placement.
///
/// When `modern` is true: hoà, thuý (tone on second vowel - new style)
/// When `modern` is false (default): hòa, thúy (tone on first vowel - traditional)
/// No-op if engine not initialized.
#[no_mangle]
pub extern "C" fn ime_modern(modern: bool) {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.set_modern_tone(modern);
    }
}

/// Enable/disable English auto-restore (experimental feature).
///
/// When `enabled` is true, automatically restores English words that were
/// accidentally transformed (e.g., "tẽt" → "text", "ễpct" → "expect").
/// When `enabled` is false (default), no auto-restore happens.
/// No-op if engine not initialized.
#[no_mangle]
pub extern "C" fn ime_english_auto_restore(enabled: bool) {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.set_english_auto_restore(enabled);
    }
}

/// Enable or disable the `[`/`]` → ơ/ư bracket shortcut (Telex only).
///
/// No-op if engine not initialized.
#[no_mangle]
pub extern "C" fn ime_bracket_shortcut(enabled: bool) {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.set_bracket_shortcut(enabled);
    }
}

/// Capitalize the first letter after `. ! ?` or Enter.
///
/// No-op if engine not initialized.
#[no_mangle]
pub extern "C" fn ime_auto_capitalize(enabled: bool) {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.set_auto_capitalize(enabled);
    }
}

/// Accept z/w/j/f as valid initial consonants (loanwords, foreign names).
///
/// No-op if engine not initialized.
#[no_mangle]
pub extern "C" fn ime_allow_foreign_consonants(enabled: bool) {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.set_allow_foreign_consonants(enabled);
    }
}

/// Clear the input buffer.
///
/// Call on word boundaries (space, punctuation).
/// Preserves word history for backspace-after-space feature.
/// No-op if engine not initialized.
#[no_mangle]
pub extern "C" fn ime_clear() {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.clear();
    }
}

/// Clear everything including word history.
///
/// Call when cursor position changes (mouse click, arrow keys, focus change).
/// This prevents accidental restore from stale history.
/// No-op if engine not initialized.
#[no_mangle]
pub extern "C" fn ime_clear_all() {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.clear_all();
    }
}

/// Get the full composed buffer as UTF-32 codepoints.
///
/// Used for "Select All + Replace" injection method where the entire
/// buffer content is needed instead of incremental backspace + chars.
///
/// # Arguments
/// * `out` - Pointer to output buffer for UTF-32 codepoints
/// * `max_len` - Maximum number of codepoints to write
///
/// # Returns
/// Number of codepoints written to `out`.
///
/// # Safety
/// `out` must point to valid memory of at least `max_len * sizeof(u32)` bytes.
#[no_mangle]
pub unsafe extern "C" fn ime_get_buffer(out: *mut u32, max_len: i64) -> i64 {
    if out.is_null() || max_len <= 0 {
        return 0;
    }

    let guard = lock_engine();
    if let Some(ref e) = *guard {
        let full = e.get_buffer_string();
        let utf32: Vec<u32> = full.chars().map(|c| c as u32).collect();
        let len = utf32.len().min(max_len as usize);
        std::ptr::copy_nonoverlapping(utf32.as_ptr(), out, len);
        len as i64
    } else {
        0
    }
}

/// Free a result pointer returned by `ime_key`.
///
/// # Safety
/// * `r` must be a pointer returned by `ime_key`, or null
/// * Must be called exactly once per non-null `ime_key` return
/// * Do not use `r` after calling this function
#[no_mangle]
pub unsafe extern "C" fn ime_free(r: *mut Result) {
    if !r.is_null() {
        drop(Box::from_raw(r));
    }
}

// ============================================================
// Shortcut FFI
// ============================================================

/// Add a shortcut to the engine.
///
/// # Arguments
/// * `trigger` - C string for trigger (e.g., "vn")
/// * `replacement` - C string for replacement (e.g., "Việt Nam")
///
/// # Safety
/// Both pointers must be valid null-terminated UTF-8 strings.
#[no_mangle]
pub unsafe extern "C" fn ime_add_shortcut(
    trigger: *const std::os::raw::c_char,
    replacement: *const std::os::raw::c_char,
) {
    if trigger.is_null() || replacement.is_null() {
        return;
    }

    let trigger_str = match std::ffi::CStr::from_ptr(trigger).to_str() {
        Ok(s) => s,
        Err(_) => return,
    };
    let replacement_str = match std::ffi::CStr::from_ptr(replacement).to_str() {
        Ok(s) => s,
        Err(_) => return,
    };

    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.shortcuts_mut().add(engine::shortcut::Shortcut::new(
            trigger_str,
            replacement_str,
        ));
    }
}

/// Remove a shortcut from the engine.
///
/// # Arguments
/// * `trigger` - C string for trigger to remove
///
/// # Safety
/// Pointer must be a valid null-terminated UTF-8 string.
#[no_mangle]
pub unsafe extern "C" fn ime_remove_shortcut(trigger: *const std::os::raw::c_char) {
    if trigger.is_null() {
        return;
    }

    let trigger_str = match std::ffi::CStr::from_ptr(trigger).to_str() {
        Ok(s) => s,
        Err(_) => return,
    };

    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.shortcuts_mut().remove(trigger_str);
    }
}

/// Clear all shortcuts from the engine.
#[no_mangle]
pub extern "C" fn ime_clear_shortcuts() {
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.shortcuts_mut().clear();
    }
}

// ============================================================
// Word Restore FFI
// ============================================================

/// Restore buffer from a Vietnamese word string.
///
/// Used when native app detects cursor at word boundary and user
/// wants to continue editing (e.g., backspace into previous word).
/// Parses Vietnamese characters back to buffer components.
///
/// # Arguments
/// * `word` - C string containing the Vietnamese word to restore
///
/// # Safety
/// Pointer must be a valid null-terminated UTF-8 string.
#[no_mangle]
pub unsafe extern "C" fn ime_restore_word(word: *const std::os::raw::c_char) {
    if word.is_null() {
        return;
    }
    let word_str = match std::ffi::CStr::from_ptr(word).to_str() {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut guard = lock_engine();
    if let Some(ref mut e) = *guard {
        e.restore_word(word_str);
    }
}

// ============================================================
// Tests
// ============================================================
