pub const MAX_FILE_BYTES: u64 = 3 * 1024 * 1024;
pub const UPLOAD_MAX_EDGE: u32 = 600;
pub const BLANK_CANVAS_EDGE: u32 = 300;
pub const BLANK_CANVAS_FILL: &str = "#f5f5f5";
pub const RESIZE_DEBOUNCE_MS: u32 = 100;
pub const COUNTER_WARMUP_MS: u32 = 30_000;
pub const COUNTER_STEADY_POLL_MS: u32 = 1_000;
pub const CELEBRATE_EVERY: i64 = 10;

// Browser timers clamp delays to a signed 32-bit millisecond count.
pub const MAX_TIMER_MS: u32 = i32::MAX as u32;

pub const CONFIG_KEYS: &[&str] = &[
    "max_file_bytes",
    "upload_max_edge",
    "blank_canvas_edge",
    "resize_debounce_ms",
    "warmup_ms",
    "steady_poll_ms",
    "celebrate_every",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub max_file_bytes: u64,
    pub upload_max_edge: u32,
    pub blank_canvas_edge: u32,
    pub resize_debounce_ms: u32,
    pub warmup_ms: u32,
    pub steady_poll_ms: u32,
    pub celebrate_every: i64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: MAX_FILE_BYTES,
            upload_max_edge: UPLOAD_MAX_EDGE,
            blank_canvas_edge: BLANK_CANVAS_EDGE,
            resize_debounce_ms: RESIZE_DEBOUNCE_MS,
            warmup_ms: COUNTER_WARMUP_MS,
            steady_poll_ms: COUNTER_STEADY_POLL_MS,
            celebrate_every: CELEBRATE_EVERY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RejectedOverride {
    pub key: &'static str,
    pub value: f64,
}

impl PageConfig {
    pub fn with_overrides<F>(mut self, lookup: F) -> (Self, Vec<RejectedOverride>)
    where
        F: Fn(&str) -> Option<f64>,
    {
        let mut rejected = Vec::new();
        for key in CONFIG_KEYS {
            let Some(value) = lookup(key) else {
                continue;
            };
            let applied = match *key {
                "max_file_bytes" => whole_number(value).map(|v| self.max_file_bytes = v),
                "upload_max_edge" => as_u32(value).map(|v| self.upload_max_edge = v),
                "blank_canvas_edge" => as_u32(value).map(|v| self.blank_canvas_edge = v),
                "resize_debounce_ms" => as_timer_ms(value).map(|v| self.resize_debounce_ms = v),
                "warmup_ms" => as_timer_ms(value).map(|v| self.warmup_ms = v),
                "steady_poll_ms" => as_timer_ms(value).map(|v| self.steady_poll_ms = v),
                "celebrate_every" => whole_number(value)
                    .and_then(|v| i64::try_from(v).ok())
                    .map(|v| self.celebrate_every = v),
                _ => None,
            };
            if applied.is_none() {
                rejected.push(RejectedOverride { key, value });
            }
        }
        (self, rejected)
    }
}

fn whole_number(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 1.0 || value.fract() != 0.0 || value > u64::MAX as f64 {
        return None;
    }
    Some(value as u64)
}

fn as_u32(value: f64) -> Option<u32> {
    whole_number(value).and_then(|v| u32::try_from(v).ok())
}

fn as_timer_ms(value: f64) -> Option<u32> {
    as_u32(value).filter(|ms| *ms <= MAX_TIMER_MS)
}
