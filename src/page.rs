// Page lifecycle rules, kept free of `web_sys` so host tests can include them.

use skyplane_core::Phase;

/// A `pagehide` with `persisted` set parks the page in the back/forward
/// cache; it may come back, so the session must stay alive.
#[inline]
pub fn releases_on_pagehide(persisted: bool) -> bool {
    !persisted
}

/// The start button starts a session once: only from `Created`, and not
/// while the permission prompt from an earlier click is still pending.
#[inline]
pub fn accepts_start(phase: Phase, prompt_pending: bool) -> bool {
    phase == Phase::Created && !prompt_pending
}
