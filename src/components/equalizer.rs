use crate::api::CatalogStatus;
use crate::config::PlayerConfig;
use dioxus::prelude::*;
use rand::Rng;

const BAR_START_PERCENT: f64 = 50.0;
const BAR_MIN_PERCENT: f64 = 20.0;
const BAR_MAX_PERCENT: f64 = 100.0;

/// Context handle for the catalog load status.
#[derive(Clone, Copy)]
pub struct CatalogStatusSignal(pub Signal<CatalogStatus>);

/// Bar heights (percent of the overlay) for the loading animation.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualizerBars {
    heights: Vec<f64>,
}

impl EqualizerBars {
    pub fn new(count: usize) -> Self {
        Self {
            heights: vec![BAR_START_PERCENT; count.max(1)],
        }
    }

    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// Give every bar a fresh height in `[20, 100)` percent.
    pub fn reroll<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for height in &mut self.heights {
            *height = rng.gen_range(BAR_MIN_PERCENT..BAR_MAX_PERCENT);
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

/// Full-screen bars that bounce while the catalog request is in flight.
#[component]
pub fn Equalizer() -> Element {
    let config = use_context::<PlayerConfig>();
    let status = use_context::<CatalogStatusSignal>().0;
    let bar_count = config.equalizer_bars;
    let tick_ms = config.equalizer_tick_ms;
    let mut bars = use_signal(|| EqualizerBars::new(bar_count));

    use_future(move || async move {
        while status.peek().is_loading() {
            sleep_ms(tick_ms).await;
            bars.write().reroll(&mut rand::thread_rng());
        }
    });

    if !status.read().is_loading() {
        return rsx! {};
    }
    let heights = bars.read().heights().to_vec();

    rsx! {
        div { class: "equalizer-overlay",
            for (index, height) in heights.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: "equalizer-bar",
                    style: "height: {height}%;",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn bars_start_level() {
        let bars = EqualizerBars::new(20);
        assert_eq!(bars.heights().len(), 20);
        assert!(bars.heights().iter().all(|h| *h == BAR_START_PERCENT));
        assert_eq!(EqualizerBars::new(0).heights().len(), 1);
    }

    #[test]
    fn reroll_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut bars = EqualizerBars::new(20);
        for _ in 0..50 {
            bars.reroll(&mut rng);
            assert!(bars
                .heights()
                .iter()
                .all(|h| (BAR_MIN_PERCENT..BAR_MAX_PERCENT).contains(h)));
        }
    }
}
