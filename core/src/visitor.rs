use thiserror::Error;

use crate::config::CELEBRATE_EVERY;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountParseError {
    #[error("counter text is empty")]
    Empty,
    #[error("counter text has no leading digits")]
    NotNumeric,
    #[error("counter value out of range")]
    OutOfRange,
}

pub fn parse_count(text: &str) -> Result<i64, CountParseError> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return Err(CountParseError::Empty);
    }
    let (sign, rest) = match trimmed.as_bytes()[0] {
        b'-' => ("-", &trimmed[1..]),
        b'+' => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(CountParseError::NotNumeric);
    }
    format!("{sign}{}", &rest[..digits_len])
        .parse::<i64>()
        .map_err(|_| CountParseError::OutOfRange)
}

pub fn welcome_message(count: i64) -> String {
    format!("🎉 Warm welcome to visitor #{count}!")
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BannerUpdate {
    Unchanged,
    Show { count: i64, message: String },
    Hide,
}

#[derive(Clone, Debug)]
pub struct VisitorCount {
    last: i64,
    every: i64,
}

impl Default for VisitorCount {
    fn default() -> Self {
        Self::new(CELEBRATE_EVERY)
    }
}

impl VisitorCount {
    pub fn new(every: i64) -> Self {
        Self {
            last: 0,
            every: every.max(1),
        }
    }

    pub fn last(&self) -> i64 {
        self.last
    }

    pub fn observe(&mut self, text: Option<&str>) -> BannerUpdate {
        let Some(text) = text else {
            return BannerUpdate::Unchanged;
        };
        let Ok(count) = parse_count(text) else {
            return BannerUpdate::Unchanged;
        };
        if count == self.last {
            return BannerUpdate::Unchanged;
        }
        self.last = count;
        if count % self.every == 0 {
            BannerUpdate::Show {
                count,
                message: welcome_message(count),
            }
        } else {
            BannerUpdate::Hide
        }
    }
}
