//=========================================================================
// QTE Manager
//=========================================================================
//
// Arms one challenge at a time and resolves it exactly once.
//
// Lifecycle:
//   idle ──start()──► armed ──qualifying key──► success ─┐
//    ▲                  │ ├──other key────────► failed  ─┼─► teardown ─► callback
//    │                  │ └──tick past deadline► failed ─┘
//    └──────cancel()────┘  (teardown, no callback)
//
// `runtime` is the single source of truth for "armed". Resolution takes
// it out of the Option before anything else happens, so a second
// notification for the same key press finds the manager idle.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use super::challenge::{QteCallback, QteChallenge};
use super::{FailReason, QteHost, QteStyle, Resolution};
use crate::core::display::{Origin, RectSpec, TextSpec, VisualHandle};
use crate::core::input::{KeyCode, KeyNotification, SubscriptionId};
use crate::core::notification::Notification;
use crate::core::timing::TimerId;

//=== Runtime =============================================================

#[derive(Debug, Clone, Copy)]
struct Visuals {
    overlay: VisualHandle,
    bar_background: VisualHandle,
    bar_fill: VisualHandle,
    prompt: VisualHandle,
}

/// Everything allocated for the armed challenge.
struct Runtime<H> {
    key: KeyCode,
    armed_at: u64,
    duration_ms: u64,
    visuals: Visuals,
    tick: TimerId,
    qualifying: SubscriptionId,
    any_key: SubscriptionId,
    on_success: QteCallback<H>,
    on_fail: QteCallback<H>,
}

impl<H: QteHost> Runtime<H> {
    /// Releases every host resource and hands back the callbacks.
    fn teardown(self, host: &mut H) -> (QteCallback<H>, QteCallback<H>) {
        // The qualifying one-shot may already be gone after it fired.
        host.unsubscribe(self.qualifying);
        host.unsubscribe(self.any_key);
        host.cancel_timer(self.tick);

        let Visuals {
            overlay,
            bar_background,
            bar_fill,
            prompt,
        } = self.visuals;
        for handle in [overlay, bar_background, bar_fill, prompt] {
            host.destroy(handle);
        }

        (self.on_success, self.on_fail)
    }
}

/// Fraction of the countdown still left, in `[0, 1]`.
fn remaining_fraction(elapsed_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 0.0;
    }
    let progress = (elapsed_ms as f64 / duration_ms as f64).min(1.0);
    (1.0 - progress).clamp(0.0, 1.0)
}

//=== QteManager ==========================================================

pub struct QteManager<H> {
    style: QteStyle,
    runtime: Option<Runtime<H>>,
}

impl<H: QteHost> QteManager<H> {
    pub fn new() -> Self {
        Self::with_style(QteStyle::default())
    }

    pub fn with_style(style: QteStyle) -> Self {
        Self {
            style,
            runtime: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.runtime.is_some()
    }

    //--- Start ------------------------------------------------------------

    /// Arms `challenge`. A challenge that is already armed is cancelled
    /// first, without running its callbacks.
    pub fn start(&mut self, host: &mut H, challenge: QteChallenge<H>) {
        if self.is_active() {
            debug!(target: "qte", "Superseding active challenge");
            self.cancel(host);
        }

        let armed_at = host.now_ms();
        let duration_ms = challenge.duration_ms();
        let visuals = self.create_visuals(host, &challenge.prompt);

        let qualifying = host.subscribe_key_once(challenge.key);
        let any_key = host.subscribe_any_key();
        let tick = host.schedule_repeating(self.style.tick_interval_ms);

        debug!(
            target: "qte",
            "Armed {} for {} ms at {} ms",
            challenge.key, duration_ms, armed_at
        );

        self.runtime = Some(Runtime {
            key: challenge.key,
            armed_at,
            duration_ms,
            visuals,
            tick,
            qualifying,
            any_key,
            on_success: challenge.on_success,
            on_fail: challenge.on_fail,
        });
    }

    fn create_visuals(&self, host: &mut H, prompt: &str) -> Visuals {
        let style = &self.style;
        let (cx, cy) = style.center();
        let bar_y = cy + style.bar_offset_y;

        let overlay = host.create_rect(
            RectSpec::new(cx, cy, style.viewport_width, style.viewport_height)
                .with_fill(style.overlay_color)
                .with_alpha(style.overlay_alpha)
                .with_depth(style.base_depth)
                .fixed(),
        );
        let bar_background = host.create_rect(
            RectSpec::new(cx, bar_y, style.bar_width, style.bar_height)
                .with_fill(style.bar_background)
                .with_depth(style.base_depth + 1)
                .fixed(),
        );
        let bar_fill = host.create_rect(
            RectSpec::new(cx - style.bar_width / 2.0, bar_y, style.bar_width, style.bar_height)
                .with_origin(Origin::LEFT_CENTER)
                .with_fill(style.bar_fill)
                .with_depth(style.base_depth + 2)
                .fixed(),
        );
        let prompt = host.create_text(
            TextSpec::new(cx, cy + style.prompt_offset_y, prompt)
                .with_font_size(style.prompt_font_size)
                .with_color(style.prompt_color)
                .bold()
                .monospace()
                .with_depth(style.base_depth + 3)
                .fixed(),
        );

        Visuals {
            overlay,
            bar_background,
            bar_fill,
            prompt,
        }
    }

    //--- Notifications ----------------------------------------------------

    /// Feeds one notification to the armed challenge.
    ///
    /// Returns the resolution it caused, if any. Notifications for ids
    /// this challenge does not own are ignored, as is everything while
    /// idle.
    pub fn handle(&mut self, host: &mut H, notification: &Notification) -> Option<Resolution> {
        let runtime = self.runtime.as_ref()?;

        let resolution = match *notification {
            Notification::Key(KeyNotification { subscription, .. })
                if subscription == runtime.qualifying =>
            {
                Resolution::Success
            }
            Notification::Key(KeyNotification { subscription, key })
                if subscription == runtime.any_key =>
            {
                // The qualifying key is settled by its own subscription.
                if key == runtime.key {
                    return None;
                }
                Resolution::Failed(FailReason::WrongInput(key))
            }
            Notification::Timer(id) if id == runtime.tick => {
                let elapsed = host.now_ms().saturating_sub(runtime.armed_at);
                let remaining = remaining_fraction(elapsed, runtime.duration_ms);
                let width = self.style.bar_width * remaining as f32;
                host.set_rect_width(runtime.visuals.bar_fill, width);
                trace!(target: "qte", "Tick at {} ms, {:.3} remaining", elapsed, remaining);

                if remaining > 0.0 {
                    return None;
                }
                Resolution::Failed(FailReason::Timeout)
            }
            _ => return None,
        };

        self.finish(host, resolution);
        Some(resolution)
    }

    //--- Resolution -------------------------------------------------------

    fn finish(&mut self, host: &mut H, resolution: Resolution) {
        let Some(runtime) = self.runtime.take() else {
            return;
        };

        debug!(target: "qte", "{} resolved: {:?}", runtime.key, resolution);
        let (on_success, on_fail) = runtime.teardown(host);

        match resolution {
            Resolution::Success => on_success(host),
            Resolution::Failed(_) => on_fail(host),
        }
    }

    /// Tears down the armed challenge without running any callback.
    pub fn cancel(&mut self, host: &mut H) {
        let Some(runtime) = self.runtime.take() else {
            return;
        };

        debug!(target: "qte", "{} cancelled", runtime.key);
        runtime.teardown(host);
    }
}

impl<H: QteHost> Default for QteManager<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> Drop for QteManager<H> {
    fn drop(&mut self) {
        if self.runtime.is_some() {
            warn!(target: "qte", "QteManager dropped while armed; host resources leak");
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
