//! Falling confetti shown once on the booking success page.
//!
//! Pieces are spread deterministically so the burst looks random without a
//! random source. The container removes itself after [`CONFETTI_LIFETIME`].

#[cfg(test)]
#[path = "confetti_test.rs"]
mod confetti_test;

use std::time::Duration;

use leptos::prelude::*;

pub const CONFETTI_PIECES: u32 = 100;
pub const CONFETTI_LIFETIME: Duration = Duration::from_secs(4);

const COLORS: [&str; 6] = ["#ff0000", "#00ff00", "#0000ff", "#ffff00", "#ff00ff", "#00ffff"];

/// One falling square.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    /// Horizontal start, percent of the viewport width.
    pub left: f64,
    pub color: &'static str,
    /// Fall time in seconds, between 2 and 4.
    pub duration: f64,
    /// Final rotation in degrees.
    pub rotation: u32,
}

impl ConfettiPiece {
    pub fn style(&self) -> String {
        format!(
            "left:{:.1}%;background:{};animation-duration:{:.2}s;--confetti-rotate:{}deg",
            self.left, self.color, self.duration, self.rotation
        )
    }
}

/// `count` pieces spread over the width by the golden ratio.
pub fn confetti_pieces(count: u32) -> Vec<ConfettiPiece> {
    const GOLDEN: f64 = 0.618_033_988_75;
    (0..count)
        .map(|i| {
            let n = f64::from(i);
            ConfettiPiece {
                left: (n * GOLDEN).fract() * 100.0,
                color: COLORS[i as usize % COLORS.len()],
                duration: 2.0 + ((n * GOLDEN * 7.0).fract() * 2.0),
                rotation: (i * 137) % 720,
            }
        })
        .collect()
}

#[component]
pub fn Confetti() -> impl IntoView {
    let visible = RwSignal::new(true);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(CONFETTI_LIFETIME).await;
        visible.try_set(false);
    });

    view! {
        <Show when=move || visible.get()>
            <div class="confetti" aria-hidden="true">
                {confetti_pieces(CONFETTI_PIECES)
                    .into_iter()
                    .map(|piece| view! { <div class="confetti-piece" style=piece.style()></div> })
                    .collect_view()}
            </div>
        </Show>
    }
}
