//! Seven-day emotional forecast from tone and journal history.
//!
//! The forecast starts from the dominant voice tone, leans Thursday/Friday towards tense or
//! reflective and the weekend towards calm, then, when journals show more than one mood,
//! rotates through those moods by frequency so the week reads varied. The rotation wins over
//! the weekday lean. `today` is always passed in; nothing here reads the clock except
//! [`today_local`].

use std::fmt;

use chrono::{Datelike, Local, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::state::{AudioEntry, JournalEntry, UserState};
use crate::tone::Tone;

pub const FORECAST_DAYS: usize = 7;
pub const TONE_WINDOW: usize = 14;
pub const JOURNAL_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Calm,
    Tense,
    Neutral,
    Positive,
    Reflective,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Calm => "calm",
            Mood::Tense => "tense",
            Mood::Neutral => "neutral",
            Mood::Positive => "positive",
            Mood::Reflective => "reflective",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Calm => "😌",
            Mood::Tense => "😰",
            Mood::Neutral => "🙂",
            Mood::Positive => "😊",
            Mood::Reflective => "🌧️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Calm => "Calm",
            Mood::Tense => "Stressed",
            Mood::Neutral => "Content",
            Mood::Positive => "Happy",
            Mood::Reflective => "Reflective",
        }
    }
}

impl From<Tone> for Mood {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Calm => Mood::Calm,
            Tone::Tense => Mood::Tense,
            Tone::Neutral => Mood::Neutral,
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastDay {
    pub day: Weekday,
    pub emoji: &'static str,
    pub label: &'static str,
    pub highlight: bool,
}

impl ForecastDay {
    fn from_mood(day: Weekday, mood: Mood, highlight: bool) -> Self {
        Self {
            day,
            emoji: mood.emoji(),
            label: mood.label(),
            highlight,
        }
    }
}

// Checked in order; the first match decides the entry's mood.
static JOURNAL_PATTERNS: Lazy<Vec<(Mood, Regex)>> = Lazy::new(|| {
    [
        (Mood::Positive, r"\b(happy|joy|excited|great|wonderful|good)\b"),
        (Mood::Tense, r"\b(stressed|anxious|worried|tense|difficult)\b"),
        (Mood::Calm, r"\b(calm|peaceful|relaxed|content)\b"),
        (Mood::Reflective, r"\b(reflect|think|wonder|ponder)\b"),
    ]
    .into_iter()
    .map(|(mood, pattern)| (mood, Regex::new(pattern).expect("static journal pattern")))
    .collect()
});

/// Shown when there is no tone or journal history at all.
pub fn default_forecast() -> Vec<ForecastDay> {
    vec![
        ForecastDay::from_mood(Weekday::Mon, Mood::Calm, false),
        ForecastDay::from_mood(Weekday::Tue, Mood::Positive, false),
        ForecastDay::from_mood(Weekday::Wed, Mood::Neutral, false),
        ForecastDay::from_mood(Weekday::Thu, Mood::Tense, true),
        ForecastDay::from_mood(Weekday::Fri, Mood::Reflective, true),
        ForecastDay {
            day: Weekday::Sat,
            emoji: "😴",
            label: "Rest Day",
            highlight: false,
        },
        ForecastDay {
            day: Weekday::Sun,
            emoji: "⚡",
            label: "Energized",
            highlight: false,
        },
    ]
}

pub fn today_local() -> Weekday {
    Local::now().weekday()
}

pub fn classify_journal(text: &str) -> Mood {
    let lowered = text.to_lowercase();
    JOURNAL_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(&lowered))
        .map(|(mood, _)| *mood)
        .unwrap_or(Mood::Neutral)
}

/// Most frequent tone among the last [`TONE_WINDOW`] recordings; ties go to the tone seen first.
pub fn dominant_tone(audios: &[AudioEntry]) -> Tone {
    let recent = &audios[audios.len().saturating_sub(TONE_WINDOW)..];
    let mut counts = FrequencyTable::default();
    for entry in recent {
        counts.add(entry.tone.unwrap_or_default());
    }
    counts.by_frequency().first().copied().unwrap_or_default()
}

pub fn journal_moods(journals: &[JournalEntry]) -> Vec<Mood> {
    let recent = &journals[journals.len().saturating_sub(JOURNAL_WINDOW)..];
    recent.iter().map(|j| classify_journal(j.text())).collect()
}

pub fn generate_forecast(state: &UserState, today: Weekday) -> Vec<ForecastDay> {
    if !state.has_history() {
        log::debug!("forecast: no history, using default week");
        return default_forecast();
    }

    let dominant = Mood::from(dominant_tone(&state.audios));
    let mut moods = FrequencyTable::default();
    for mood in journal_moods(&state.journals) {
        moods.add(mood);
    }
    let rotation = moods.by_frequency();

    log::debug!(
        "forecast: today={} dominant={} journal_moods={:?}",
        today,
        dominant,
        moods.entries
    );

    let mut day = today;
    let mut forecast = Vec::with_capacity(FORECAST_DAYS);
    for offset in 0..FORECAST_DAYS {
        let (mut mood, highlight) = match day {
            Weekday::Thu | Weekday::Fri => {
                let lean = if moods.count(Mood::Tense) > moods.count(Mood::Positive) {
                    Mood::Tense
                } else if moods.count(Mood::Reflective) > 0 {
                    Mood::Reflective
                } else {
                    dominant
                };
                (lean, true)
            }
            Weekday::Sat | Weekday::Sun => {
                let lean = if moods.count(Mood::Calm) > 0 {
                    Mood::Calm
                } else {
                    Mood::Positive
                };
                (lean, false)
            }
            _ => (dominant, false),
        };

        if rotation.len() > 1 {
            mood = rotation[offset % rotation.len()];
        }

        forecast.push(ForecastDay::from_mood(day, mood, highlight));
        day = day.succ();
    }

    forecast
}

/// Counts kept in first-seen order so that stable sorting breaks ties by encounter.
#[derive(Debug)]
struct FrequencyTable<T> {
    entries: Vec<(T, usize)>,
}

impl<T> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Copy + PartialEq> FrequencyTable<T> {
    fn add(&mut self, value: T) {
        match self.entries.iter_mut().find(|(v, _)| *v == value) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((value, 1)),
        }
    }

    fn count(&self, value: T) -> usize {
        self.entries
            .iter()
            .find(|(v, _)| *v == value)
            .map_or(0, |(_, count)| *count)
    }

    fn by_frequency(&self) -> Vec<T> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted.into_iter().map(|(value, _)| value).collect()
    }
}
