mod support;

use article_kit::{ArticleField, ArticleIdSequence, DomainError, FieldValue};
use once_cell::sync::Lazy;
use support::ArticleBuilder;

static SUBTITLE: Lazy<ArticleField<String>> = Lazy::new(|| ArticleField::new("subtitle"));
static VIEWS: Lazy<ArticleField<u64>> = Lazy::new(|| ArticleField::new("views"));

#[test]
fn reading_before_writing_is_not_initialized() {
    let ids = ArticleIdSequence::new();
    let article = ArticleBuilder::new().build(&ids);
    assert_eq!(
        SUBTITLE.get(&article).unwrap_err(),
        DomainError::not_initialized("subtitle")
    );
}

#[test]
fn correctly_typed_value_round_trips() {
    let ids = ArticleIdSequence::new();
    let mut article = ArticleBuilder::new().build(&ids);
    SUBTITLE
        .set(&mut article, FieldValue::new(String::from("A deep dive")))
        .unwrap();
    assert_eq!(SUBTITLE.get(&article).unwrap(), "A deep dive");
}

#[test]
fn wrong_type_is_rejected_without_changing_state() {
    let ids = ArticleIdSequence::new();
    let mut article = ArticleBuilder::new().build(&ids);
    VIEWS.set_value(&mut article, 10).unwrap();

    let err = VIEWS.set(&mut article, FieldValue::new(-3_i32)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "expected an instance of type 'u64' for attribute 'views', got 'i32' instead"
    );
    assert_eq!(*VIEWS.get(&article).unwrap(), 10);
}

#[test]
fn fields_share_definition_but_not_storage() {
    let ids = ArticleIdSequence::new();
    let mut first = ArticleBuilder::new().build(&ids);
    let second = ArticleBuilder::new().build(&ids);

    SUBTITLE.set_value(&mut first, "only on first".to_string()).unwrap();
    VIEWS.set_value(&mut first, 1).unwrap();

    assert!(SUBTITLE.is_set(&first));
    assert!(!SUBTITLE.is_set(&second));
    assert!(VIEWS.get(&second).is_err());
    assert_eq!(first.fields().len(), 2);
    assert_eq!(*VIEWS.get(&first).unwrap(), 1);
    assert_eq!(SUBTITLE.get(&first).unwrap(), "only on first");
}
