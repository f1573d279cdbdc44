// Host-side checks that the static page matches what the frontend looks up.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
}

use crate::core::constants::*;

const PAGE: &str = include_str!("../index.html");

fn position(needle: &str) -> usize {
    PAGE.find(needle)
        .unwrap_or_else(|| panic!("index.html is missing {}", needle))
}

#[test]
fn reveal_roots_exist_and_start_transparent() {
    for root in REVEAL_ROOTS {
        position(&format!("id=\"{}\"", root));
        let hidden = PAGE
            .lines()
            .filter(|l| l.contains("opacity: 0;"))
            .any(|l| l.contains(&format!("#{}", root)));
        assert!(hidden, "#{} does not start at opacity 0", root);
    }
}

#[test]
fn scene_fades_in_with_the_panels() {
    let scene_root = position("id=\"scene-root\"");
    let canvas = position("id=\"app-canvas\"");
    let labels = position("id=\"marker-labels\"");
    let loading = position("id=\"loading-screen\"");
    assert!(scene_root < canvas && canvas < labels);
    // the scene root closes before the next top-level block opens
    let closes = scene_root
        + PAGE[scene_root..]
            .find("</div>\n    </div>")
            .expect("scene root is not closed");
    assert!(closes > labels && closes < loading);
}

#[test]
fn frontend_element_ids_are_present() {
    for id in [
        "loading-screen",
        "clock-time",
        "clock-date",
        "player-panel",
        "play-toggle",
        "volume",
        "volume-value",
        "legend-items",
    ] {
        position(&format!("id=\"{}\"", id));
    }
}
