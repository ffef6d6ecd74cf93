use std::time::Duration;

use evdev::{EventType, InputEvent, Key};
use keyshow::display::{format_keys, IDLE_PLACEHOLDER};
use keyshow::history::{KeyHistory, HISTORY_LIMIT};
use keyshow::input::parse_input_event;
use keyshow::keys::normalize;
use keyshow::tracker::KeyTracker;

/// Push an evdev event through the capture -> normalize pipeline.
fn label_for(key: Key, value: i32) -> Option<(String, bool)> {
    let event = InputEvent::new(EventType::KEY, key.code(), value);
    let key_event = parse_input_event(event)?;
    let label = normalize(&key_event.raw)?;
    Some((label, key_event.pressed))
}

/// Apply a press through tracker, renderer and history, the way the
/// overlay does it for every valid press.
fn press(tracker: &mut KeyTracker, history: &mut KeyHistory, key: Key) -> Option<String> {
    let (label, pressed) = label_for(key, 1)?;
    assert!(pressed);
    tracker.on_press(&label);
    let text = format_keys(tracker.displayed());
    if let Some(ref text) = text {
        history.push(text.clone());
    }
    text
}

fn release(tracker: &mut KeyTracker, key: Key) {
    if let Some((label, pressed)) = label_for(key, 0) {
        assert!(!pressed);
        tracker.on_release(&label);
    }
}

#[test]
fn test_single_letter_flow() {
    let mut tracker = KeyTracker::new(Duration::from_secs(1));
    let mut history = KeyHistory::default();

    let text = press(&mut tracker, &mut history, Key::KEY_A);
    assert_eq!(text.as_deref(), Some("A"));
    assert_eq!(history.lines().next(), Some("A"));
}

#[test]
fn test_modifier_combination_flow() {
    let mut tracker = KeyTracker::new(Duration::from_secs(1));
    let mut history = KeyHistory::default();

    let _ = press(&mut tracker, &mut history, Key::KEY_LEFTCTRL);
    let text = press(&mut tracker, &mut history, Key::KEY_A);
    assert_eq!(text.as_deref(), Some("Ctrl + A"));

    let lines: Vec<&str> = history.lines().collect();
    assert_eq!(lines, ["Ctrl + A", "Ctrl"]);
}

#[test]
fn test_two_modifiers_sort_lexically() {
    let mut tracker = KeyTracker::new(Duration::from_secs(1));
    let mut history = KeyHistory::default();

    let _ = press(&mut tracker, &mut history, Key::KEY_LEFTSHIFT);
    let text = press(&mut tracker, &mut history, Key::KEY_LEFTCTRL);
    assert_eq!(text.as_deref(), Some("Ctrl + Shift"));
}

#[test]
fn test_quick_digit_typing_shows_latest_only() {
    let mut tracker = KeyTracker::new(Duration::from_secs(1));
    let mut history = KeyHistory::default();

    let _ = press(&mut tracker, &mut history, Key::KEY_1);
    let text = press(&mut tracker, &mut history, Key::KEY_2);
    assert_eq!(text.as_deref(), Some("2"));
}

#[test]
fn test_release_does_not_change_display() {
    let mut tracker = KeyTracker::new(Duration::from_secs(1));
    let mut history = KeyHistory::default();

    let _ = press(&mut tracker, &mut history, Key::KEY_LEFTCTRL);
    let _ = press(&mut tracker, &mut history, Key::KEY_C);
    release(&mut tracker, Key::KEY_C);
    release(&mut tracker, Key::KEY_LEFTCTRL);

    // The snapshot still renders the full combination
    assert_eq!(
        format_keys(tracker.displayed()).as_deref(),
        Some("Ctrl + C")
    );
}

#[test]
fn test_idle_timeout_returns_to_placeholder() {
    let mut tracker = KeyTracker::new(Duration::from_millis(5));
    let mut history = KeyHistory::default();

    let _ = press(&mut tracker, &mut history, Key::KEY_A);
    release(&mut tracker, Key::KEY_A);
    let entries_before = history.len();

    std::thread::sleep(Duration::from_millis(20));
    assert!(tracker.idle_tick());

    // Empty display renders the placeholder and is not logged
    assert_eq!(format_keys(tracker.displayed()), None);
    assert_ne!(IDLE_PLACEHOLDER, "");
    assert_eq!(history.len(), entries_before);
}

#[test]
fn test_media_key_is_ignored_end_to_end() {
    let mut tracker = KeyTracker::new(Duration::from_secs(1));
    let history = KeyHistory::default();

    let event = InputEvent::new(EventType::KEY, Key::KEY_VOLUMEUP.code(), 1);
    let key_event = parse_input_event(event).unwrap();
    assert_eq!(normalize(&key_event.raw), None);

    // Nothing was tracked, displayed or logged
    assert!(tracker.displayed().is_empty());
    assert!(history.is_empty());
    assert!(!tracker.idle_tick());
}

#[test]
fn test_history_is_bounded() {
    let mut tracker = KeyTracker::new(Duration::from_secs(1));
    let mut history = KeyHistory::default();

    for _ in 0..(HISTORY_LIMIT + 10) {
        let _ = press(&mut tracker, &mut history, Key::KEY_A);
        release(&mut tracker, Key::KEY_A);
    }

    assert_eq!(history.len(), HISTORY_LIMIT);
}

#[test]
fn test_fresh_press_after_release_drops_released_key() {
    let mut tracker = KeyTracker::new(Duration::from_secs(1));
    let mut history = KeyHistory::default();

    let _ = press(&mut tracker, &mut history, Key::KEY_LEFTCTRL);
    let _ = press(&mut tracker, &mut history, Key::KEY_A);
    release(&mut tracker, Key::KEY_A);

    let text = press(&mut tracker, &mut history, Key::KEY_B);
    assert_eq!(text.as_deref(), Some("Ctrl + B"));
}

#[test]
fn test_arrow_keys_render_symbols() {
    let mut tracker = KeyTracker::new(Duration::from_secs(1));
    let mut history = KeyHistory::default();

    let text = press(&mut tracker, &mut history, Key::KEY_UP);
    assert_eq!(text.as_deref(), Some("↑"));

    release(&mut tracker, Key::KEY_UP);

    let _ = press(&mut tracker, &mut history, Key::KEY_LEFTCTRL);
    let text = press(&mut tracker, &mut history, Key::KEY_PAGEUP);
    assert_eq!(text.as_deref(), Some("Ctrl + PgUp"));
}
