//! The fixed set of publisher channels searched every week.
//!
//! Each channel carries a query template whose `{placeholder}` fields are
//! filled from the lesson period and the lesson title. Templates are checked
//! once at startup by [`validate_templates`] so a typo in a placeholder name is
//! a configuration error, not a silently wrong search query.

use std::fmt;

use crate::types::{ChannelQuerySpec, LessonPeriod};

pub const PLACEHOLDER_LESSON_TITLE: &str = "lesson_title";
pub const PLACEHOLDER_LESSON_NUMBER: &str = "lesson_number";
pub const PLACEHOLDER_QUARTER: &str = "quarter";
pub const PLACEHOLDER_YEAR: &str = "year";

pub const PLACEHOLDERS: [&str; 4] = [
    PLACEHOLDER_LESSON_TITLE,
    PLACEHOLDER_LESSON_NUMBER,
    PLACEHOLDER_QUARTER,
    PLACEHOLDER_YEAR,
];

pub const CHANNELS: [ChannelQuerySpec; 6] = [
    ChannelQuerySpec {
        key: "3abn",
        channel_id: "UCw_AthKfwqB3XYpboTFZFmg",
        query_template: "{lesson_title} | Sabbath School Panel by 3ABN - Lesson {lesson_number} Q{quarter} {year}",
    },
    ChannelQuerySpec {
        key: "itiswritten",
        channel_id: "UCtWyoUrGPAkZgnp2486Ir4w",
        query_template: "Sabbath School - {year} Q{quarter} Lesson {lesson_number}: {lesson_title}",
    },
    ChannelQuerySpec {
        key: "hopess",
        channel_id: "UCm34NbuHzE9t9hHutOxwIOA",
        query_template: "Lesson {lesson_number}: {lesson_title}",
    },
    ChannelQuerySpec {
        key: "claudiocarneiro",
        channel_id: "UCvJRu-jirSkv6yuxakirENg",
        query_template: "{year} Q{quarter} Lesson {lesson_number} – {lesson_title} – Audio by Percy Harrold",
    },
    ChannelQuerySpec {
        key: "HopeLives365",
        channel_id: "UCOuDMda3jxj-g_iI1P2d2zw",
        query_template: "Sabbath School with Mark Finley | Lesson {lesson_number} — Q{quarter} – {year}",
    },
    ChannelQuerySpec {
        key: "egwhiteaudio",
        channel_id: "UCPS3A-60tKmKTCKWZMT9upA",
        query_template: "{year} Q{quarter} Lesson {lesson_number} – EGW Notes – {lesson_title}",
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    UnknownPlaceholder { channel: String, name: String },
    Unclosed { channel: String },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnknownPlaceholder { channel, name } => write!(
                f,
                "query template for '{}' uses unknown placeholder '{{{}}}'",
                channel, name
            ),
            TemplateError::Unclosed { channel } => {
                write!(f, "query template for '{}' has an unclosed '{{'", channel)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Values substituted into a channel's query template.
#[derive(Debug, Clone)]
pub struct QueryFields<'a> {
    pub lesson_title: &'a str,
    pub period: LessonPeriod,
}

impl QueryFields<'_> {
    fn value(&self, name: &str) -> Option<String> {
        match name {
            PLACEHOLDER_LESSON_TITLE => Some(self.lesson_title.to_string()),
            PLACEHOLDER_LESSON_NUMBER => Some(self.period.week.to_string()),
            PLACEHOLDER_QUARTER => Some(self.period.quarter.to_string()),
            PLACEHOLDER_YEAR => Some(self.period.year.to_string()),
            _ => None,
        }
    }
}

/// Lists the placeholder names used by `template`, in order of appearance.
pub fn placeholders(template: &str) -> Result<Vec<&str>, usize> {
    let mut names = Vec::new();
    let mut rest = template;
    let mut offset = 0;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or(offset + open)?;
        names.push(&after[..close]);
        let consumed = open + 1 + close + 1;
        offset += consumed;
        rest = &rest[consumed..];
    }

    Ok(names)
}

pub fn validate_template(spec: &ChannelQuerySpec) -> Result<(), TemplateError> {
    let names = placeholders(spec.query_template).map_err(|_| TemplateError::Unclosed {
        channel: spec.key.to_string(),
    })?;

    match names.into_iter().find(|name| !PLACEHOLDERS.contains(name)) {
        Some(name) => Err(TemplateError::UnknownPlaceholder {
            channel: spec.key.to_string(),
            name: name.to_string(),
        }),
        None => Ok(()),
    }
}

pub fn validate_templates(specs: &[ChannelQuerySpec]) -> Result<(), TemplateError> {
    specs.iter().try_for_each(validate_template)
}

/// Fills every `{placeholder}` of `template`. Unknown names are left as written;
/// [`validate_templates`] rejects those before the pipeline runs.
pub fn format_query(template: &str, fields: &QueryFields<'_>) -> String {
    let mut query = String::with_capacity(template.len() + fields.lesson_title.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        query.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match fields.value(name) {
                    Some(value) => query.push_str(&value),
                    None => query.push_str(&rest[open..open + close + 2]),
                }
                rest = &after[close + 1..];
            }
            None => {
                query.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    query.push_str(rest);

    query
}
