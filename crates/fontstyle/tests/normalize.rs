//! Integration tests for option normalization.

use fontstyle::{
    normalize_options, ConfigError, MarkupDescriptor, OptionDefinition, RawOption, StyleOption,
    DEFAULT_PRIORITY,
};
use proptest::prelude::*;

fn full(title: &str, model: &str, view: MarkupDescriptor) -> RawOption {
    OptionDefinition::new(model).title(title).view(view).into()
}

#[test]
fn test_full_definitions_only_gain_priority() {
    let mut prioritized = MarkupDescriptor::with_style_value("11px");
    prioritized.priority = Some(2);
    let raw = vec![
        full("Fine", "fine", MarkupDescriptor::with_class("fine")),
        full("Eleven", "11px", prioritized.clone()),
    ];

    let options = normalize_options(&raw).unwrap();

    let mut expected_fine = MarkupDescriptor::with_class("fine");
    expected_fine.priority = Some(DEFAULT_PRIORITY);
    assert_eq!(
        options,
        vec![
            StyleOption {
                title: "Fine".to_string(),
                model: Some("fine".to_string()),
                view: Some(expected_fine),
            },
            StyleOption {
                title: "Eleven".to_string(),
                model: Some("11px".to_string()),
                view: Some(prioritized),
            },
        ]
    );
}

#[test]
fn test_default_sentinel_position() {
    let raw: Vec<RawOption> = vec![10.into(), "default".into(), "huge".into()];
    let options = normalize_options(&raw).unwrap();
    assert_eq!(options[1].model, None);
    assert_eq!(options[1].title, "Default");
    assert_eq!(options[1].view, None);
}

#[test]
fn test_numeric_synthesis() {
    let options = normalize_options(&[RawOption::from(12)]).unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].model.as_deref(), Some("12px"));

    let options = normalize_options(&[RawOption::from("12.5")]).unwrap();
    assert_eq!(options[0].model.as_deref(), Some("12.5px"));

    assert!(normalize_options(&[RawOption::from("abc")]).unwrap().is_empty());
}

#[test]
fn test_small_preset() {
    let options = normalize_options(&[RawOption::from("small")]).unwrap();
    let view = options[0].view.as_ref().unwrap();
    assert!(view.classes().unwrap().contains("text-small"));
    assert_eq!(options[0].model.as_deref(), Some("small"));
}

#[test]
fn test_missing_model_is_error() {
    let raw = vec![RawOption::from(OptionDefinition::default().title("X"))];
    let err = normalize_options(&raw).unwrap_err();
    assert_eq!(err.code(), "invalid-option-definition");
    match err {
        ConfigError::InvalidOptionDefinition { definition } => {
            assert_eq!(definition.title.as_deref(), Some("X"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_missing_model_error_beats_later_entries() {
    let raw = vec![
        RawOption::from("small"),
        RawOption::from(OptionDefinition::default()),
        RawOption::from(12),
    ];
    assert!(normalize_options(&raw).is_err());
}

#[test]
fn test_results_do_not_share_state() {
    let mut first = normalize_options(&[RawOption::from("tiny")]).unwrap();
    let second = normalize_options(&[RawOption::from("tiny")]).unwrap();

    first[0].title = "Mutated".to_string();
    if let Some(view) = first[0].view.as_mut() {
        view.priority = Some(1);
    }

    assert_eq!(second[0].title, "Tiny");
    assert_eq!(second[0].view.as_ref().unwrap().priority, Some(DEFAULT_PRIORITY));
    assert_eq!(normalize_options(&[RawOption::from("tiny")]).unwrap()[0].title, "Tiny");
}

fn raw_entry() -> impl Strategy<Value = RawOption> {
    prop_oneof![
        prop::sample::select(vec!["tiny", "small", "default", "big", "huge", "abc", ""])
            .prop_map(RawOption::from),
        (1u32..100).prop_map(|n| RawOption::from(f64::from(n))),
        "[0-9]{1,2}(\\.[0-9])?[a-z]{0,2}".prop_map(RawOption::from),
    ]
}

/// The model an entry normalizes to, or `None` when it is dropped.
fn expected_model(entry: &RawOption) -> Option<Option<String>> {
    let options = normalize_options(std::slice::from_ref(entry)).unwrap();
    assert!(options.len() <= 1);
    options.into_iter().next().map(|option| option.model)
}

proptest! {
    #[test]
    fn normalization_preserves_order(entries in prop::collection::vec(raw_entry(), 0..12)) {
        let options = normalize_options(&entries).unwrap();
        let expected: Vec<Option<String>> = entries.iter().filter_map(expected_model).collect();
        let actual: Vec<Option<String>> = options.into_iter().map(|option| option.model).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn default_sentinel_anywhere(
        before in prop::collection::vec(1u32..50, 0..4),
        after in prop::collection::vec(1u32..50, 0..4),
    ) {
        let mut raw: Vec<RawOption> =
            before.iter().map(|n| RawOption::from(f64::from(*n))).collect();
        raw.push("default".into());
        raw.extend(after.iter().map(|n| RawOption::from(f64::from(*n))));

        let options = normalize_options(&raw).unwrap();
        prop_assert_eq!(options.len(), raw.len());
        prop_assert!(options[before.len()].model.is_none());
        prop_assert_eq!(options.iter().filter(|option| option.model.is_none()).count(), 1);
    }
}
