//=========================================================================
// QTE Challenge
//=========================================================================
//
// Description of a single quick-time event: which key, how long, what
// to show, and what to do on each outcome.
//
// Defaults are applied once in build(); the manager never re-derives
// them.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::input::KeyCode;

//=== Constants ===========================================================

/// Countdown window used when none is given.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

//=== QteCallback =========================================================

/// One-shot outcome callback. Receives the host the manager was driven
/// with, never the manager itself.
pub type QteCallback<H> = Box<dyn FnOnce(&mut H) + Send>;

fn noop<H: 'static>() -> QteCallback<H> {
    Box::new(|_: &mut H| {})
}

//=== QteChallenge ========================================================

pub struct QteChallenge<H> {
    pub(crate) key: KeyCode,
    pub(crate) label: String,
    pub(crate) duration: Duration,
    pub(crate) prompt: String,
    pub(crate) on_success: QteCallback<H>,
    pub(crate) on_fail: QteCallback<H>,
}

impl<H: 'static> QteChallenge<H> {
    /// Starts describing a challenge for `key`.
    pub fn builder(key: KeyCode) -> QteChallengeBuilder<H> {
        QteChallengeBuilder {
            key,
            label: None,
            duration: DEFAULT_DURATION,
            prompt: None,
            on_success: None,
            on_fail: None,
        }
    }

    /// A challenge with every default and no-op callbacks.
    pub fn new(key: KeyCode) -> Self {
        Self::builder(key).build()
    }
}

impl<H> QteChallenge<H> {
    pub fn key(&self) -> KeyCode {
        self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Duration in whole milliseconds, saturating.
    pub(crate) fn duration_ms(&self) -> u64 {
        u64::try_from(self.duration.as_millis()).unwrap_or(u64::MAX)
    }
}

impl<H> fmt::Debug for QteChallenge<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QteChallenge")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("duration", &self.duration)
            .field("prompt", &self.prompt)
            .finish_non_exhaustive()
    }
}

//=== QteChallengeBuilder =================================================

pub struct QteChallengeBuilder<H> {
    key: KeyCode,
    label: Option<String>,
    duration: Duration,
    prompt: Option<String>,
    on_success: Option<QteCallback<H>>,
    on_fail: Option<QteCallback<H>>,
}

impl<H: 'static> QteChallengeBuilder<H> {
    /// Name of the key in the default prompt. Defaults to the key's label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Countdown window. A zero duration times out on the first tick.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Text shown to the player. Defaults to `Press {label}!`.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn on_success(mut self, callback: impl FnOnce(&mut H) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Runs on wrong input and on timeout alike.
    pub fn on_fail(mut self, callback: impl FnOnce(&mut H) + Send + 'static) -> Self {
        self.on_fail = Some(Box::new(callback));
        self
    }

    pub fn build(self) -> QteChallenge<H> {
        let label = self.label.unwrap_or_else(|| self.key.label().to_string());
        let prompt = self.prompt.unwrap_or_else(|| format!("Press {}!", label));

        QteChallenge {
            key: self.key,
            label,
            duration: self.duration,
            prompt,
            on_success: self.on_success.unwrap_or_else(noop),
            on_fail: self.on_fail.unwrap_or_else(noop),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Host {
        hits: Vec<&'static str>,
    }

    #[test]
    fn defaults_are_applied_in_build() {
        let challenge: QteChallenge<Host> = QteChallenge::new(KeyCode::Space);

        assert_eq!(challenge.key(), KeyCode::Space);
        assert_eq!(challenge.label(), "SPACE");
        assert_eq!(challenge.prompt(), "Press SPACE!");
        assert_eq!(challenge.duration(), Duration::from_millis(2000));
        assert_eq!(challenge.duration_ms(), 2000);
    }

    #[test]
    fn label_feeds_default_prompt() {
        let challenge: QteChallenge<Host> = QteChallenge::builder(KeyCode::KeyE)
            .with_label("the E key")
            .build();

        assert_eq!(challenge.prompt(), "Press the E key!");
    }

    #[test]
    fn explicit_prompt_wins_over_label() {
        let challenge: QteChallenge<Host> = QteChallenge::builder(KeyCode::Space)
            .with_label("space bar")
            .with_prompt("Press SPACE to begin!")
            .with_duration(Duration::from_millis(750))
            .build();

        assert_eq!(challenge.label(), "space bar");
        assert_eq!(challenge.prompt(), "Press SPACE to begin!");
        assert_eq!(challenge.duration_ms(), 750);
    }

    #[test]
    fn callbacks_receive_the_host() {
        let challenge = QteChallenge::builder(KeyCode::Enter)
            .on_success(|host: &mut Host| host.hits.push("success"))
            .on_fail(|host: &mut Host| host.hits.push("fail"))
            .build();

        let mut host = Host { hits: Vec::new() };
        (challenge.on_fail)(&mut host);
        assert_eq!(host.hits, vec!["fail"]);
    }

    #[test]
    fn missing_callbacks_are_noops() {
        let challenge: QteChallenge<Host> = QteChallenge::new(KeyCode::Enter);
        let mut host = Host { hits: Vec::new() };

        (challenge.on_success)(&mut host);
        assert!(host.hits.is_empty());
    }

    #[test]
    fn huge_durations_saturate() {
        let challenge: QteChallenge<Host> = QteChallenge::builder(KeyCode::Space)
            .with_duration(Duration::MAX)
            .build();
        assert_eq!(challenge.duration_ms(), u64::MAX);
    }
}
