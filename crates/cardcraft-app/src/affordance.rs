//! Page affordances: enter animation and tap haptics.
//!
//! Independent of the editor; listens only for page load and taps.

use std::collections::BTreeSet;
use std::time::Duration;

/// Class added to the body when the page has entered.
pub const PAGE_ENTER_CLASS: &str = "page-enter-active";

/// Initial opacity class removed on enter.
pub const PAGE_HIDDEN_CLASS: &str = "opacity-0";

/// Element classes that trigger a haptic pulse on tap.
pub const TAP_TARGET_CLASSES: [&str; 6] = [
    "interactive-tap",
    "btn-primary",
    "btn-ghost",
    "nav-chip",
    "card-hover",
    "card-hover-small",
];

/// Duration of the tap pulse.
pub const TAP_PULSE: Duration = Duration::from_millis(12);

/// Body class state driving the page-enter animation.
#[derive(Debug, Clone)]
pub struct PageAffordance {
    body_classes: BTreeSet<&'static str>,
}

impl Default for PageAffordance {
    fn default() -> Self {
        Self::new()
    }
}

impl PageAffordance {
    /// A freshly loaded page: body starts hidden.
    pub fn new() -> Self {
        let mut body_classes = BTreeSet::new();
        body_classes.insert(PAGE_HIDDEN_CLASS);
        Self { body_classes }
    }

    /// Trigger the enter animation: add the entered class, drop the
    /// initial opacity class. Idempotent.
    pub fn enter(&mut self) {
        self.body_classes.insert(PAGE_ENTER_CLASS);
        self.body_classes.remove(PAGE_HIDDEN_CLASS);
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }

    pub fn entered(&self) -> bool {
        self.has_class(PAGE_ENTER_CLASS) && !self.has_class(PAGE_HIDDEN_CLASS)
    }
}

/// Vibration capability of the platform.
pub trait Haptics {
    fn vibrate(&mut self, duration: Duration);
}

/// Tap feedback over an optionally present vibration capability.
///
/// Platforms without vibration construct this with `None`; taps then do
/// nothing, with no error and no fallback.
#[derive(Debug, Default)]
pub struct TapFeedback<H> {
    haptics: Option<H>,
}

impl<H: Haptics> TapFeedback<H> {
    pub fn new(haptics: Option<H>) -> Self {
        Self { haptics }
    }

    pub fn supported(&self) -> bool {
        self.haptics.is_some()
    }

    /// A tap landed on an element with the given class. Pulses only for
    /// the fixed set of interactive classes, and only when the platform
    /// supports vibration. Returns whether a pulse fired.
    pub fn on_tap(&mut self, element_class: &str) -> bool {
        if !TAP_TARGET_CLASSES.contains(&element_class) {
            return false;
        }
        match self.haptics.as_mut() {
            Some(haptics) => {
                haptics.vibrate(TAP_PULSE);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_is_idempotent() {
        let mut page = PageAffordance::new();
        assert!(!page.entered());
        assert!(page.has_class(PAGE_HIDDEN_CLASS));

        page.enter();
        page.enter();

        assert!(page.entered());
        assert!(page.has_class(PAGE_ENTER_CLASS));
        assert!(!page.has_class(PAGE_HIDDEN_CLASS));
    }

    #[derive(Default)]
    struct RecordingHaptics {
        pulses: Vec<Duration>,
    }

    impl Haptics for RecordingHaptics {
        fn vibrate(&mut self, duration: Duration) {
            self.pulses.push(duration);
        }
    }

    #[test]
    fn test_tap_pulses_for_listed_classes() {
        let mut feedback = TapFeedback::new(Some(RecordingHaptics::default()));
        assert!(feedback.supported());

        assert!(feedback.on_tap("btn-primary"));
        assert!(feedback.on_tap("nav-chip"));
        assert!(!feedback.on_tap("sidebar")); // unlisted class

        let haptics = feedback.haptics.as_ref().unwrap();
        assert_eq!(haptics.pulses, vec![TAP_PULSE, TAP_PULSE]);
        assert_eq!(TAP_PULSE, Duration::from_millis(12));
    }

    #[test]
    fn test_no_vibration_support_is_silent() {
        let mut feedback: TapFeedback<RecordingHaptics> = TapFeedback::new(None);
        assert!(!feedback.supported());
        assert!(!feedback.on_tap("btn-primary"));
    }
}
