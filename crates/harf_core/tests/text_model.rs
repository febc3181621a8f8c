use harf_core::{BuildError, Letter, LetterKind, MarkGroup, MarkKind, Text, TextBuilder};

#[test]
fn builder_rejects_exclusive_marks_and_keeps_prior_appends() {
    let mut builder = TextBuilder::new();
    builder
        .add(LetterKind::Dal, &[MarkKind::Damma])
        .expect("valid letter");

    let err = builder
        .add(LetterKind::Dal, &[MarkKind::Fathatan, MarkKind::Sukun])
        .expect_err("nunation and sukun are exclusive");
    assert_eq!(
        err,
        BuildError::InvalidMarkCombination {
            group: MarkGroup::Vowel,
            first: MarkKind::Fathatan,
            second: MarkKind::Sukun,
        }
    );

    assert_eq!(builder.len(), 1);
    assert_eq!(builder.to_text().to_buckwalter(), "du");
}

#[test]
fn builder_snapshots_are_independent() {
    let mut builder = TextBuilder::new();
    builder.add(LetterKind::Qaf, &[]).expect("valid letter");
    let before = builder.to_text();

    builder.add(LetterKind::Lam, &[]).expect("valid letter");
    builder.clear();
    builder.add(LetterKind::Meem, &[]).expect("valid letter");

    assert_eq!(before.to_buckwalter(), "q");
    assert_eq!(builder.to_text().to_buckwalter(), "m");
}

#[test]
fn builder_extends_from_existing_text() {
    let prefix = Text::from_buckwalter("{l").expect("valid input");
    let mut builder = TextBuilder::new();
    builder.extend_from_text(&prefix);
    builder.push(Letter::new(LetterKind::Qaf, &[MarkKind::Damma]).expect("valid letter"));
    assert_eq!(builder.into_text().to_buckwalter(), "{lqu");
}

#[test]
fn letter_accessors_report_marks_by_group() {
    let letter = Letter::new(LetterKind::Ra, &[MarkKind::Fatha, MarkKind::Shadda])
        .expect("valid letter");
    assert_eq!(letter.kind(), LetterKind::Ra);
    assert!(letter.has_mark(MarkKind::Shadda));
    assert_eq!(letter.mark_in(MarkGroup::Vowel), Some(MarkKind::Fatha));
    assert_eq!(letter.mark_in(MarkGroup::Placement), None);
    assert!(letter.without_marks().marks().is_empty());
}

#[test]
fn text_serializes_as_letter_records() {
    let text = Text::from_buckwalter("<iy~a").expect("valid input");
    let json = serde_json::to_value(&text).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            { "kind": "alif", "marks": ["hamza_below", "kasra"] },
            { "kind": "ya", "marks": ["shadda", "fatha"] }
        ])
    );

    let decoded: Text = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, text);
}

#[test]
fn deserialize_accepts_missing_marks() {
    let letter: Letter = serde_json::from_str(r#"{ "kind": "small_high_noon" }"#).unwrap();
    assert_eq!(letter, Letter::plain(LetterKind::SmallHighNoon));
}

#[test]
fn deserialize_rejects_exclusive_marks() {
    let value = serde_json::json!({
        "kind": "ba",
        "marks": ["fatha", "kasra"]
    });

    let err = serde_json::from_value::<Letter>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("Fatha and Kasra are both vowel marks"),
        "unexpected error: {err}"
    );
}

#[test]
fn recitation_mark_with_marks_is_rejected() {
    let mut builder = TextBuilder::new();
    let err = builder
        .add(LetterKind::SmallHighSeen, &[MarkKind::Shadda])
        .expect_err("recitation marks take no marks");
    assert_eq!(
        err,
        BuildError::MarkOnRecitationMark {
            kind: LetterKind::SmallHighSeen,
            mark: MarkKind::Shadda,
        }
    );
    assert!(builder.is_empty());

    let value = serde_json::json!({
        "kind": "small_high_noon",
        "marks": ["sukun"]
    });
    let err = serde_json::from_value::<Letter>(value).unwrap_err();
    assert!(
        err.to_string()
            .contains("recitation mark SmallHighNoon cannot carry Sukun"),
        "unexpected error: {err}"
    );
}
