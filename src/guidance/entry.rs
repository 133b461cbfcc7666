//! The guidance record produced for one journaling submission.

use super::theme::ThemeCategory;
use crate::constants::DATE_FORMAT_ISO;
use chrono::{Local, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Theme label stored on an entry.
///
/// The local engine always produces a [`ThemeCategory`]; the remote model may
/// name a theme of its own. Both serialize as the plain label, and a missing or
/// empty label reads back as the default category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Theme {
    Category(ThemeCategory),
    Freeform(String),
}

impl Theme {
    pub fn label(&self) -> &str {
        match self {
            Theme::Category(category) => category.label(),
            Theme::Freeform(label) => label,
        }
    }

    /// The category this label names, if any.
    pub fn category(&self) -> Option<ThemeCategory> {
        match self {
            Theme::Category(category) => Some(*category),
            Theme::Freeform(_) => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Category(ThemeCategory::DEFAULT)
    }
}

impl From<ThemeCategory> for Theme {
    fn from(category: ThemeCategory) -> Self {
        Theme::Category(category)
    }
}

impl From<String> for Theme {
    fn from(label: String) -> Self {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Theme::default();
        }
        match ThemeCategory::from_label(trimmed) {
            Some(category) => Theme::Category(category),
            None => Theme::Freeform(trimmed.to_string()),
        }
    }
}

impl From<&str> for Theme {
    fn from(label: &str) -> Self {
        Theme::from(label.to_string())
    }
}

impl From<Theme> for String {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Category(category) => category.label().to_string(),
            Theme::Freeform(label) => label,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which engine produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuidanceOrigin {
    #[default]
    Local,
    Remote,
}

/// One complete guidance response, as persisted in the history.
///
/// Every field except `id` defaults when it is missing, `null` or of the
/// wrong type, so that hand-edited or older history files still load; see
/// the journey analysis for how such entries are treated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidanceEntry {
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub created_at_epoch_ms: i64,
    #[serde(
        default = "epoch_date",
        serialize_with = "iso_date::serialize",
        deserialize_with = "lenient::date"
    )]
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub input_text: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub theme: Theme,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub verse_text: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub citation: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub meaning_text: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub affirmation_text: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub origin: GuidanceOrigin,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::or_default"
    )]
    pub mood: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::or_default"
    )]
    pub is_venting: Option<bool>,
}

fn epoch_date() -> NaiveDate {
    NaiveDate::default()
}

/// Field readers that substitute the default for `null` or mistyped values.
mod lenient {
    use super::{epoch_date, DATE_FORMAT_ISO};
    use chrono::NaiveDate;
    use serde::de::IgnoredAny;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient<T> {
        Value(T),
        Other(IgnoredAny),
    }

    pub fn or_default<'de, D, T>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        Ok(match Lenient::<T>::deserialize(d)? {
            Lenient::Value(value) => value,
            Lenient::Other(_) => T::default(),
        })
    }

    pub fn date<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw: String = or_default(d)?;
        Ok(NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT_ISO).unwrap_or_else(|_| epoch_date()))
    }
}

mod iso_date {
    use super::DATE_FORMAT_ISO;
    use chrono::NaiveDate;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format(DATE_FORMAT_ISO))
    }
}

static LAST_STAMP_MS: AtomicI64 = AtomicI64::new(i64::MIN);

/// Returns a millisecond timestamp strictly greater than any previously
/// returned in this process, tracking the wall clock when it moves forward.
pub fn next_timestamp_ms() -> i64 {
    let now = Local::now().timestamp_millis();
    let mut last = LAST_STAMP_MS.load(Ordering::Relaxed);
    loop {
        let next = if now > last { now } else { last + 1 };
        match LAST_STAMP_MS.compare_exchange_weak(last, next, Ordering::AcqRel, Ordering::Relaxed)
        {
            Ok(_) => return next,
            Err(observed) => last = observed,
        }
    }
}

/// Local calendar date of a millisecond timestamp.
pub fn local_date_for(epoch_ms: i64) -> NaiveDate {
    Local
        .timestamp_millis_opt(epoch_ms)
        .single()
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}
