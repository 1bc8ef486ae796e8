use serde::{Deserialize, Serialize};

/// Endpoint serving the song catalog as a JSON array.
pub const DEFAULT_CATALOG_URL: &str = "https://robo-music-api.onrender.com/music/my-api";

const DEFAULT_VOLUME: f64 = 1.0;
const DEFAULT_EQUALIZER_BARS: usize = 20;
const DEFAULT_EQUALIZER_TICK_MS: u32 = 200;
const MIN_EQUALIZER_TICK_MS: u32 = 16;

/// Session configuration. Nothing here is persisted; values come from
/// defaults plus optional build-time overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub catalog_url: String,
    pub initial_volume: f64,
    pub equalizer_bars: usize,
    pub equalizer_tick_ms: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            initial_volume: DEFAULT_VOLUME,
            equalizer_bars: DEFAULT_EQUALIZER_BARS,
            equalizer_tick_ms: DEFAULT_EQUALIZER_TICK_MS,
        }
    }
}

impl PlayerConfig {
    /// Defaults, with `MUSIC_CATALOG_URL` honoured when set at build time.
    /// The browser has no process environment, so the override is baked in.
    pub fn from_build_env() -> Self {
        Self::with_catalog_override(option_env!("MUSIC_CATALOG_URL"))
    }

    fn with_catalog_override(catalog_url: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = catalog_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.catalog_url = url.to_string();
        }
        config.normalized()
    }

    /// Pull every field back into its usable range.
    pub fn normalized(mut self) -> Self {
        self.initial_volume = normalize_volume(self.initial_volume);
        self.equalizer_bars = self.equalizer_bars.max(1);
        self.equalizer_tick_ms = self.equalizer_tick_ms.max(MIN_EQUALIZER_TICK_MS);
        self
    }
}

/// Accepts either a 0..1 level or a percentage and returns a 0..1 level.
pub fn normalize_volume(mut value: f64) -> f64 {
    if !value.is_finite() {
        return DEFAULT_VOLUME;
    }
    let mut passes = 0;
    while value > 1.0 && passes < 4 {
        value /= 100.0;
        passes += 1;
    }
    value.clamp(0.0, 1.0)
}
