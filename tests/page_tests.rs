// Host-side tests for the page lifecycle rules.
// The main crate is wasm-only, so we include the pure-Rust module directly.

mod page {
    include!("../src/page.rs");
}

use page::*;
use skyplane_core::Phase;

#[test]
fn cached_page_keeps_its_session() {
    assert!(!releases_on_pagehide(true));
}

#[test]
fn discarded_page_releases_its_session() {
    assert!(releases_on_pagehide(false));
}

#[test]
fn start_is_accepted_once_from_created() {
    assert!(accepts_start(Phase::Created, false));
    assert!(!accepts_start(Phase::Running, false));
    assert!(!accepts_start(Phase::TornDown, false));
}

#[test]
fn double_click_during_prompt_is_ignored() {
    assert!(!accepts_start(Phase::Created, true));
}
