use lessoncli::channels::*;
use lessoncli::types::{ChannelQuerySpec, LessonPeriod};

fn period() -> LessonPeriod {
    LessonPeriod {
        year: 2025,
        quarter: 1,
        week: 5,
    }
}

#[test]
fn test_channel_table_order() {
    let keys: Vec<&str> = CHANNELS.iter().map(|c| c.key).collect();
    assert_eq!(
        keys,
        vec![
            "3abn",
            "itiswritten",
            "hopess",
            "claudiocarneiro",
            "HopeLives365",
            "egwhiteaudio"
        ]
    );
}

#[test]
fn test_builtin_templates_are_valid() {
    assert_eq!(validate_templates(&CHANNELS), Ok(()));
}

#[test]
fn test_format_query() {
    let fields = QueryFields {
        lesson_title: "Lesson 5",
        period: period(),
    };

    assert_eq!(
        format_query(CHANNELS[0].query_template, &fields),
        "Lesson 5 | Sabbath School Panel by 3ABN - Lesson 5 Q1 2025"
    );
    assert_eq!(
        format_query(CHANNELS[1].query_template, &fields),
        "Sabbath School - 2025 Q1 Lesson 5: Lesson 5"
    );
    assert_eq!(
        format_query(CHANNELS[4].query_template, &fields),
        "Sabbath School with Mark Finley | Lesson 5 — Q1 – 2025"
    );
}

#[test]
fn test_format_query_keeps_unknown_placeholders() {
    let fields = QueryFields {
        lesson_title: "Rest",
        period: period(),
    };
    assert_eq!(format_query("{speaker} {year}", &fields), "{speaker} 2025");
    assert_eq!(format_query("open {year", &fields), "open {year");
    assert_eq!(format_query("no fields", &fields), "no fields");
}

#[test]
fn test_placeholders() {
    assert_eq!(
        placeholders("Lesson {lesson_number} Q{quarter} – {lesson_title}"),
        Ok(vec!["lesson_number", "quarter", "lesson_title"])
    );
    assert_eq!(placeholders("plain"), Ok(vec![]));
    assert!(placeholders("broken {year").is_err());
}

#[test]
fn test_validate_template_rejects_unknown_placeholder() {
    let spec = ChannelQuerySpec {
        key: "test",
        channel_id: "UC_test",
        query_template: "Lesson {lesson} Q{quarter}",
    };

    assert_eq!(
        validate_template(&spec),
        Err(TemplateError::UnknownPlaceholder {
            channel: "test".to_string(),
            name: "lesson".to_string(),
        })
    );
}

#[test]
fn test_validate_template_rejects_unclosed_brace() {
    let spec = ChannelQuerySpec {
        key: "test",
        channel_id: "UC_test",
        query_template: "Lesson {lesson_number",
    };

    let err = validate_template(&spec).unwrap_err();
    assert_eq!(
        err,
        TemplateError::Unclosed {
            channel: "test".to_string()
        }
    );
    assert!(err.to_string().contains("unclosed"));
}
