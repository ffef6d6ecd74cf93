//! Raw key model and normalization to canonical display labels

use evdev::Key;

/// A raw key event payload as delivered by the capture layer.
///
/// Modifier, navigation and function keys arrive as `Symbolic` with their
/// platform name; printable keys arrive as `Character` with the decoded
/// char and, for letters and digits, the ASCII virtual code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawKey {
    Symbolic {
        name: String,
    },
    Character {
        ch: Option<char>,
        virtual_code: Option<u32>,
    },
}

impl RawKey {
    /// Classify an evdev key into the raw key model.
    ///
    /// Keys with no printable or symbolic representation (media keys,
    /// vendor buttons) become an empty `Character`, which [`normalize`]
    /// maps to `None`.
    pub fn from_evdev(key: Key) -> RawKey {
        if is_symbolic(key) {
            return RawKey::Symbolic {
                name: format!("{:?}", key),
            };
        }

        match character_payload(key) {
            Some((ch, virtual_code)) => RawKey::Character {
                ch: Some(ch),
                virtual_code,
            },
            None => RawKey::Character {
                ch: None,
                virtual_code: None,
            },
        }
    }
}

/// Map a raw key to its canonical display label.
///
/// Returns `None` for keys that must not be tracked or displayed. The
/// returned label is never empty, whitespace-only or a control character.
pub fn normalize(raw: &RawKey) -> Option<String> {
    match raw {
        RawKey::Symbolic { name } => {
            let name = name.strip_prefix("KEY_").unwrap_or(name);
            Some(match special_label(name) {
                Some(label) => label.to_string(),
                None => name.to_uppercase(),
            })
        }
        RawKey::Character { ch, virtual_code } => {
            // Virtual codes in the A-Z / 0-9 range win over the decoded
            // char, so Ctrl-modified letters still show the letter.
            if let Some(code) = virtual_code {
                if (b'A' as u32..=b'Z' as u32).contains(code)
                    || (b'0' as u32..=b'9' as u32).contains(code)
                {
                    return char::from_u32(*code).map(|c| c.to_string());
                }
            }
            match ch {
                Some(c) if !c.is_control() && !c.is_whitespace() => {
                    Some(c.to_uppercase().to_string())
                }
                _ => None,
            }
        }
    }
}

/// Static label map for symbolic keys, keyed by the evdev name with the
/// `KEY_` prefix stripped. Names not listed here are shown uppercased
/// verbatim (F1..F12 rely on that).
fn special_label(name: &str) -> Option<&'static str> {
    Some(match name {
        "LEFTCTRL" | "RIGHTCTRL" => "Ctrl",
        "LEFTSHIFT" | "RIGHTSHIFT" => "Shift",
        "LEFTALT" | "RIGHTALT" => "Alt",
        "LEFTMETA" | "RIGHTMETA" => "Super",
        "SPACE" => "Space",
        "ENTER" => "Enter",
        "ESC" => "Esc",
        "TAB" => "Tab",
        "BACKSPACE" => "Backspace",
        "DELETE" => "Delete",
        "INSERT" => "Insert",
        "UP" => "↑",
        "DOWN" => "↓",
        "LEFT" => "←",
        "RIGHT" => "→",
        "PAGEUP" => "PgUp",
        "PAGEDOWN" => "PgDn",
        "HOME" => "Home",
        "END" => "End",
        "NUMLOCK" => "NumLock",
        "CAPSLOCK" => "CapsLock",
        "SCROLLLOCK" => "ScrollLock",
        "SYSRQ" => "PrtSc",
        "PAUSE" => "Pause",
        _ => return None,
    })
}

fn is_symbolic(key: Key) -> bool {
    matches!(
        key,
        Key::KEY_ESC
            | Key::KEY_TAB
            | Key::KEY_ENTER
            | Key::KEY_SPACE
            | Key::KEY_BACKSPACE
            | Key::KEY_DELETE
            | Key::KEY_INSERT
            | Key::KEY_UP
            | Key::KEY_DOWN
            | Key::KEY_LEFT
            | Key::KEY_RIGHT
            | Key::KEY_PAGEUP
            | Key::KEY_PAGEDOWN
            | Key::KEY_HOME
            | Key::KEY_END
            | Key::KEY_LEFTCTRL
            | Key::KEY_RIGHTCTRL
            | Key::KEY_LEFTSHIFT
            | Key::KEY_RIGHTSHIFT
            | Key::KEY_LEFTALT
            | Key::KEY_RIGHTALT
            | Key::KEY_LEFTMETA
            | Key::KEY_RIGHTMETA
            | Key::KEY_CAPSLOCK
            | Key::KEY_NUMLOCK
            | Key::KEY_SCROLLLOCK
            | Key::KEY_SYSRQ
            | Key::KEY_PAUSE
            | Key::KEY_F11
            | Key::KEY_F12
    ) || (key.code() >= Key::KEY_F1.code() && key.code() <= Key::KEY_F10.code())
}

fn character_payload(key: Key) -> Option<(char, Option<u32>)> {
    Some(match key {
        Key::KEY_A => ('a', Some(b'A' as u32)),
        Key::KEY_B => ('b', Some(b'B' as u32)),
        Key::KEY_C => ('c', Some(b'C' as u32)),
        Key::KEY_D => ('d', Some(b'D' as u32)),
        Key::KEY_E => ('e', Some(b'E' as u32)),
        Key::KEY_F => ('f', Some(b'F' as u32)),
        Key::KEY_G => ('g', Some(b'G' as u32)),
        Key::KEY_H => ('h', Some(b'H' as u32)),
        Key::KEY_I => ('i', Some(b'I' as u32)),
        Key::KEY_J => ('j', Some(b'J' as u32)),
        Key::KEY_K => ('k', Some(b'K' as u32)),
        Key::KEY_L => ('l', Some(b'L' as u32)),
        Key::KEY_M => ('m', Some(b'M' as u32)),
        Key::KEY_N => ('n', Some(b'N' as u32)),
        Key::KEY_O => ('o', Some(b'O' as u32)),
        Key::KEY_P => ('p', Some(b'P' as u32)),
        Key::KEY_Q => ('q', Some(b'Q' as u32)),
        Key::KEY_R => ('r', Some(b'R' as u32)),
        Key::KEY_S => ('s', Some(b'S' as u32)),
        Key::KEY_T => ('t', Some(b'T' as u32)),
        Key::KEY_U => ('u', Some(b'U' as u32)),
        Key::KEY_V => ('v', Some(b'V' as u32)),
        Key::KEY_W => ('w', Some(b'W' as u32)),
        Key::KEY_X => ('x', Some(b'X' as u32)),
        Key::KEY_Y => ('y', Some(b'Y' as u32)),
        Key::KEY_Z => ('z', Some(b'Z' as u32)),

        Key::KEY_0 => ('0', Some(b'0' as u32)),
        Key::KEY_1 => ('1', Some(b'1' as u32)),
        Key::KEY_2 => ('2', Some(b'2' as u32)),
        Key::KEY_3 => ('3', Some(b'3' as u32)),
        Key::KEY_4 => ('4', Some(b'4' as u32)),
        Key::KEY_5 => ('5', Some(b'5' as u32)),
        Key::KEY_6 => ('6', Some(b'6' as u32)),
        Key::KEY_7 => ('7', Some(b'7' as u32)),
        Key::KEY_8 => ('8', Some(b'8' as u32)),
        Key::KEY_9 => ('9', Some(b'9' as u32)),

        // Numpad digits have no locale-independent virtual code here
        Key::KEY_KP0 => ('0', None),
        Key::KEY_KP1 => ('1', None),
        Key::KEY_KP2 => ('2', None),
        Key::KEY_KP3 => ('3', None),
        Key::KEY_KP4 => ('4', None),
        Key::KEY_KP5 => ('5', None),
        Key::KEY_KP6 => ('6', None),
        Key::KEY_KP7 => ('7', None),
        Key::KEY_KP8 => ('8', None),
        Key::KEY_KP9 => ('9', None),

        Key::KEY_COMMA => (',', None),
        Key::KEY_DOT => ('.', None),
        Key::KEY_SLASH => ('/', None),
        Key::KEY_SEMICOLON => (';', None),
        Key::KEY_APOSTROPHE => ('\'', None),
        Key::KEY_LEFTBRACE => ('[', None),
        Key::KEY_RIGHTBRACE => (']', None),
        Key::KEY_BACKSLASH => ('\\', None),
        Key::KEY_MINUS => ('-', None),
        Key::KEY_EQUAL => ('=', None),
        Key::KEY_GRAVE => ('`', None),
        Key::KEY_KPPLUS => ('+', None),
        Key::KEY_KPMINUS => ('-', None),
        Key::KEY_KPASTERISK => ('*', None),
        Key::KEY_KPSLASH => ('/', None),
        Key::KEY_KPDOT => ('.', None),

        _ => return None,
    })
}
