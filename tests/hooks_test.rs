use scone::config::{Question, ValueType};
use scone::context::Configurator;
use scone::error::{Error, Result};
use scone::hooks::{
    post_package_name, post_package_type, post_profile, post_subtemplate_warning,
    post_testing, post_travis, suggest_name, suggest_namespace, suggest_namespace2,
    suggest_package_type, to_boolean, Outcome, TRAVIS_PLACEHOLDER_DESTINATION,
};
use scone::parser::QuestionType;
use scone::prompt::Prompter;
use serde_json::json;

fn text_question() -> Question {
    Question {
        help: String::new(),
        value_type: ValueType::Str,
        default: None,
        choices: Vec::new(),
        suggest: None,
        post: None,
    }
}

// Prompter answering every confirmation with a canned value.
struct StaticPrompter {
    confirm_answer: bool,
}

impl Prompter for StaticPrompter {
    fn answer(
        &self,
        _question_type: QuestionType,
        default_value: serde_json::Value,
        _help: String,
        _question: &Question,
    ) -> Result<serde_json::Value> {
        Ok(default_value)
    }

    fn confirm(&self, _message: String, _default: bool) -> Result<bool> {
        Ok(self.confirm_answer)
    }
}

#[test]
fn test_to_boolean_accepts_truthy_strings() {
    for value in ["y", "Y", "yes", "YES", "true", "True", "1"] {
        assert!(to_boolean(&json!(value)).unwrap(), "'{}' should be true", value);
    }
}

#[test]
fn test_to_boolean_accepts_falsy_strings() {
    for value in ["n", "N", "no", "NO", "false", "False", "0"] {
        assert!(!to_boolean(&json!(value)).unwrap(), "'{}' should be false", value);
    }
}

#[test]
fn test_to_boolean_passes_booleans_through() {
    assert!(to_boolean(&json!(true)).unwrap());
    assert!(!to_boolean(&json!(false)).unwrap());
}

#[test]
fn test_to_boolean_rejects_other_strings() {
    let result = to_boolean(&json!("maybe"));
    match result {
        Err(Error::ValidationError(message)) => {
            assert_eq!(message, "Value must be a boolean (y/n)");
        }
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_suggest_package_type_from_directory_name() {
    let mut question = text_question();

    let configurator = Configurator::new("/tmp/collective.behavior.task");
    suggest_package_type(&configurator, &mut question);
    assert_eq!(question.default, Some(json!("nested")));

    let configurator = Configurator::new("/tmp/collective.task");
    suggest_package_type(&configurator, &mut question);
    assert_eq!(question.default, Some(json!("normal")));

    let configurator = Configurator::new("/tmp/myaddon");
    suggest_package_type(&configurator, &mut question);
    assert_eq!(question.default, Some(json!("normal")));
}

#[test]
fn test_suggest_namespace_and_name() {
    let configurator = Configurator::new("/tmp/collective.task");

    let mut question = text_question();
    suggest_namespace(&configurator, &mut question);
    assert_eq!(question.default, Some(json!("collective")));

    let mut question = text_question();
    suggest_name(&configurator, &mut question);
    assert_eq!(question.default, Some(json!("task")));
}

#[test]
fn test_suggest_namespace2_needs_second_segment() {
    let configurator = Configurator::new("/tmp/collective.behavior.task");
    let mut question = text_question();
    suggest_namespace2(&configurator, &mut question).unwrap();
    assert_eq!(question.default, Some(json!("behavior")));

    let configurator = Configurator::new("/tmp/myaddon");
    let mut question = text_question();
    let result = suggest_namespace2(&configurator, &mut question);
    match result {
        Err(Error::ConfigError(message)) => {
            assert!(message.contains("myaddon"));
            assert!(message.contains("second namespace segment"));
        }
        other => panic!("Expected ConfigError, got {:?}", other),
    }
}

#[test]
fn test_post_package_type_lowercases_and_skips_namespace2() {
    let mut configurator = Configurator::new("/tmp/collective.task");
    let outcome = post_package_type(&mut configurator, &json!("NORMAL")).unwrap();

    assert_eq!(outcome, Outcome::Accepted(json!("normal")));
    assert_eq!(configurator.get("package.namespace2"), Some(&json!(false)));
}

#[test]
fn test_post_package_type_keeps_namespace2_for_nested() {
    let mut configurator = Configurator::new("/tmp/collective.behavior.task");
    let outcome = post_package_type(&mut configurator, &json!("nested")).unwrap();

    assert_eq!(outcome, Outcome::Accepted(json!("nested")));
    assert!(!configurator.contains("package.namespace2"));
}

#[test]
fn test_post_package_name_accepts_matching_directory() {
    let mut configurator = Configurator::new("/tmp/collective.task");
    configurator.set("package.type", "normal");
    configurator.set("package.namespace", "collective");

    // The prompter would decline, but no confirmation is needed on a match.
    let prompt = StaticPrompter { confirm_answer: false };
    let outcome = post_package_name(&mut configurator, &json!("task"), &prompt).unwrap();

    assert_eq!(outcome, Outcome::Accepted(json!("task")));
}

#[test]
fn test_post_package_name_rejects_invalid_identifier() {
    let mut configurator = Configurator::new("/tmp/collective.task");
    configurator.set("package.type", "normal");
    configurator.set("package.namespace", "collective");

    let prompt = StaticPrompter { confirm_answer: true };
    let result = post_package_name(&mut configurator, &json!("Bad Name"), &prompt);

    assert!(matches!(result, Err(Error::ValidationError(_))));
}

#[test]
fn test_post_package_name_mismatch_confirmed() {
    let mut configurator = Configurator::new("/tmp/collective.task");
    configurator.set("package.type", "normal");
    configurator.set("package.namespace", "collective");

    let prompt = StaticPrompter { confirm_answer: true };
    let outcome = post_package_name(&mut configurator, &json!("other"), &prompt).unwrap();

    assert_eq!(outcome, Outcome::Accepted(json!("other")));
}

#[test]
fn test_post_package_name_mismatch_declined() {
    let mut configurator = Configurator::new("/tmp/collective.task");
    configurator.set("package.type", "nested");
    configurator.set("package.namespace", "collective");
    configurator.set("package.namespace2", "behavior");

    let prompt = StaticPrompter { confirm_answer: false };
    let outcome = post_package_name(&mut configurator, &json!("task"), &prompt).unwrap();

    // Directory is collective.task, expected name collective.behavior.task.
    assert_eq!(outcome, Outcome::Rejected);
}

#[test]
fn test_post_profile_disables_dependent_features() {
    let mut configurator = Configurator::new("/tmp/collective.task");
    configurator.set("package.theme", true);
    configurator.set("package.testing", true);

    let outcome = post_profile(&mut configurator, &json!("n")).unwrap();

    assert_eq!(outcome, Outcome::Accepted(json!(false)));
    for key in [
        "package.theme",
        "package.setuphandlers",
        "package.testing",
        "travis.integration.enabled",
        "travis.notifications.type",
        "travis.notifications.destination",
    ] {
        assert_eq!(configurator.get(key), Some(&json!(false)), "{} should be false", key);
    }
}

#[test]
fn test_post_profile_enabled_leaves_features_alone() {
    let mut configurator = Configurator::new("/tmp/collective.task");

    let outcome = post_profile(&mut configurator, &json!("yes")).unwrap();

    assert_eq!(outcome, Outcome::Accepted(json!(true)));
    assert!(!configurator.contains("package.theme"));
    assert!(!configurator.contains("package.testing"));
}

#[test]
fn test_post_testing_disables_travis() {
    let mut configurator = Configurator::new("/tmp/collective.task");

    let outcome = post_testing(&mut configurator, &json!(false)).unwrap();

    assert_eq!(outcome, Outcome::Accepted(json!(false)));
    assert_eq!(configurator.get("travis.integration.enabled"), Some(&json!(false)));
    assert_eq!(configurator.get("travis.notifications.type"), Some(&json!(false)));
    assert_eq!(configurator.get("travis.notifications.destination"), Some(&json!(false)));
}

#[test]
fn test_post_travis_keeps_valid_notification_values() {
    let mut configurator = Configurator::new("/tmp/collective.task");

    let outcome = post_travis(&mut configurator, &json!("no")).unwrap();

    assert_eq!(outcome, Outcome::Accepted(json!(false)));
    assert_eq!(configurator.get("travis.notifications.type"), Some(&json!("email")));
    assert_eq!(
        configurator.get("travis.notifications.destination"),
        Some(&json!(TRAVIS_PLACEHOLDER_DESTINATION))
    );
}

#[test]
fn test_post_travis_enabled_forces_nothing() {
    let mut configurator = Configurator::new("/tmp/collective.task");

    let outcome = post_travis(&mut configurator, &json!("y")).unwrap();

    assert_eq!(outcome, Outcome::Accepted(json!(true)));
    assert!(!configurator.contains("travis.notifications.type"));
}

#[test]
fn test_post_subtemplate_warning_gates_the_run() {
    assert_eq!(post_subtemplate_warning(&json!("y")).unwrap(), Outcome::Accepted(json!(true)));
    assert_eq!(post_subtemplate_warning(&json!("n")).unwrap(), Outcome::Rejected);
    assert_eq!(post_subtemplate_warning(&json!(false)).unwrap(), Outcome::Rejected);
}
