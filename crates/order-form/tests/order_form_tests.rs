use order_form::{
    FieldChangeError, FieldError, FieldName, FormCommand, FormConfig, OrderFormValidator,
    PizzaSize, SubmitEnablement, SubmitOutcome, Topping, ValidationSchema,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn form_with(name: &str, size: &str, toppings: &[&str]) -> OrderFormValidator {
    let mut form = OrderFormValidator::default();
    form.on_field_change("fullName", name, false).unwrap();
    form.on_field_change("size", size, false).unwrap();
    for topping in toppings {
        form.on_field_change(topping, "", true).unwrap();
    }
    form
}

// ============================================================================
// Submit gate
// ============================================================================

#[rstest]
#[case("")]
#[case(" ")]
#[case("\t  \n")]
fn blank_name_disables_submit(#[case] name: &str) {
    for size in ["S", "M", "L"] {
        let form = form_with(name, size, &["Ham"]);
        assert_eq!(form.submit_enablement(), SubmitEnablement::Disabled);
        assert_eq!(form.errors().get(FieldName::FullName), "full name is required");
    }
}

#[rstest]
#[case("A")]
#[case("Al")]
#[case("  Al  ")]
#[case("Jo ")]
fn short_name_disables_submit_with_too_short(#[case] name: &str) {
    let form = form_with(name, "M", &[]);
    assert_eq!(form.submit_enablement(), SubmitEnablement::Disabled);

    let failure = form
        .schema()
        .validate_field(FieldName::FullName, form.values())
        .unwrap_err();
    assert_eq!(failure.error, FieldError::TooShort { min: 3 });
    assert_eq!(
        form.errors().get(FieldName::FullName),
        "full name must be at least 3 characters"
    );
}

#[rstest]
fn valid_name_and_size_enable_submit_regardless_of_toppings(
    #[values("Bob", "Alice", "  Zoë ")] name: &str,
    #[values("S", "M", "L")] size: &str,
    #[values(0, 1, 5)] topping_count: usize,
) {
    let toppings: Vec<&str> = Topping::CATALOG
        .iter()
        .take(topping_count)
        .map(|t| t.name())
        .collect();
    let form = form_with(name, size, &toppings);
    assert_eq!(form.submit_enablement(), SubmitEnablement::Enabled);
    assert!(!form.errors().has_errors());
}

#[test]
fn missing_size_keeps_submit_disabled() {
    let mut form = OrderFormValidator::default();
    form.on_field_change("fullName", "Alice", false).unwrap();
    assert_eq!(form.submit_enablement(), SubmitEnablement::Disabled);
    // Size was never touched, so its message stays hidden
    assert_eq!(form.errors().get(FieldName::Size), "");
}

#[test]
fn gate_follows_every_edit() {
    let mut form = form_with("Alice", "S", &[]);
    assert!(form.submit_enablement().is_enabled());

    form.on_field_change("fullName", "Al", false).unwrap();
    assert!(!form.submit_enablement().is_enabled());

    form.on_field_change("fullName", "Ali", false).unwrap();
    assert!(form.submit_enablement().is_enabled());

    form.on_field_change("size", "", false).unwrap();
    assert!(!form.submit_enablement().is_enabled());
}

// ============================================================================
// Submission
// ============================================================================

#[test]
fn submit_with_short_name_reports_and_keeps_values() {
    let mut form = form_with("Al", "S", &[]);
    let before = form.values().clone();

    let SubmitOutcome::Rejected(errors) = form.on_submit() else {
        panic!("expected rejection");
    };
    assert_eq!(
        errors.get(FieldName::FullName),
        "full name must be at least 3 characters"
    );
    assert_eq!(errors.get(FieldName::Size), "");
    assert_eq!(form.submit_enablement(), SubmitEnablement::Disabled);
    assert!(form.message().is_none());
    assert_eq!(form.values(), &before);
}

#[test]
fn submit_pristine_form_reports_every_field() {
    let mut form = OrderFormValidator::default();

    let SubmitOutcome::Rejected(errors) = form.on_submit() else {
        panic!("pristine form must not submit");
    };
    assert_eq!(
        errors.failing().collect::<Vec<_>>(),
        vec![
            (FieldName::FullName, "full name is required"),
            (FieldName::Size, "size must be S or M or L"),
        ]
    );
    // Revealed messages stay in step with later edits
    form.on_field_change("size", "L", false).unwrap();
    assert_eq!(form.errors().get(FieldName::Size), "");
    assert_eq!(form.errors().get(FieldName::FullName), "full name is required");
}

#[test]
fn submit_alice_medium_two_toppings() {
    let mut form = form_with("Alice", "M", &["Pepperoni", "Ham"]);

    let SubmitOutcome::Confirmed(message) = form.on_submit() else {
        panic!("expected confirmation");
    };
    assert_eq!(
        message.as_str(),
        "Thank you for your order, Alice!\nYour medium pizza with 2 toppings is on the way!"
    );
    assert_eq!(form.message(), Some(&message));
    assert!(form.values().is_initial());
    assert!(!form.errors().has_errors());
    assert_eq!(form.submit_enablement(), SubmitEnablement::Disabled);
}

#[test]
fn submit_bob_large_no_toppings() {
    let mut form = form_with("Bob", "L", &[]);

    let SubmitOutcome::Confirmed(message) = form.on_submit() else {
        panic!("expected confirmation");
    };
    assert!(message
        .as_str()
        .ends_with("large pizza with no toppings is on the way!"));
}

#[test]
fn submit_small_single_topping() {
    let mut form = form_with("Cyd", "S", &["Green Peppers"]);

    let SubmitOutcome::Confirmed(message) = form.on_submit() else {
        panic!("expected confirmation");
    };
    assert_eq!(
        message.lines().last(),
        Some("Your small pizza with 1 topping is on the way!")
    );
}

#[test]
fn confirmation_uses_trimmed_name() {
    let mut form = form_with("   Dana   ", "M", &[]);
    let SubmitOutcome::Confirmed(message) = form.on_submit() else {
        panic!("expected confirmation");
    };
    assert_eq!(message.lines().next(), Some("Thank you for your order, Dana!"));
}

#[test]
fn successful_submit_hides_messages_until_next_edit() {
    let mut form = form_with("Alice", "M", &[]);
    form.on_submit();

    assert!(!form.errors().has_errors());

    form.on_field_change("fullName", "A", false).unwrap();
    assert_eq!(
        form.errors().get(FieldName::FullName),
        "full name must be at least 3 characters"
    );
    assert_eq!(form.errors().get(FieldName::Size), "");
}

// ============================================================================
// Toppings
// ============================================================================

#[test]
fn toggling_topping_twice_restores_state() {
    let mut form = OrderFormValidator::default();
    form.on_field_change("fullName", "Al", false).unwrap();
    form.on_field_change("Ham", "", true).unwrap();

    let values_before = form.values().clone();
    let errors_before = form.errors().clone();
    let gate_before = form.submit_enablement();

    form.on_field_change("Mushrooms", "", true).unwrap();
    assert!(form.values().toppings.contains(&Topping::Mushrooms));
    form.on_field_change("Mushrooms", "", true).unwrap();

    assert_eq!(form.values(), &values_before);
    assert_eq!(form.errors(), &errors_before);
    assert_eq!(form.submit_enablement(), gate_before);
}

#[test]
fn topping_changes_do_not_reveal_errors() {
    let mut form = OrderFormValidator::default();
    form.on_field_change("Pineapple", "", true).unwrap();
    assert!(!form.errors().has_errors());
}

// ============================================================================
// Rejected input
// ============================================================================

#[rstest]
#[case("X")]
#[case("XL")]
#[case("m")]
fn size_outside_select_choices_is_rejected(#[case] code: &str) {
    let mut form = form_with("Alice", "S", &[]);

    let err = form.on_field_change("size", code, false).unwrap_err();

    assert!(matches!(err, FieldChangeError::UnknownSize(_)));
    assert_eq!(form.values().size, Some(PizzaSize::Small));
    assert!(form.submit_enablement().is_enabled());
}

#[test]
fn unknown_field_and_topping_are_rejected() {
    let mut form = OrderFormValidator::default();

    assert_eq!(
        form.on_field_change("email", "a@b.c", false),
        Err(FieldChangeError::UnknownField("email".to_string()))
    );
    assert!(matches!(
        form.on_field_change("Anchovies", "", true),
        Err(FieldChangeError::UnknownTopping(_))
    ));
    assert!(form.values().is_initial());
}

// ============================================================================
// Event surface and configuration
// ============================================================================

#[test]
fn replaying_a_command_script() {
    let script = r#"
        {"kind":"field","name":"fullName","value":"  Alice "}
        {"kind":"field","name":"size","value":"M","type":"select-one"}
        {"kind":"field","name":"Pepperoni","type":"checkbox","checked":true}
        {"kind":"field","name":"Ham","type":"checkbox","checked":true}
        {"kind":"submit"}
    "#;

    let mut form = OrderFormValidator::default();
    let mut outcome = None;
    for line in script.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match serde_json::from_str::<FormCommand>(line).unwrap() {
            FormCommand::Field(event) => form.apply_event(&event).unwrap(),
            FormCommand::Submit => outcome = Some(form.on_submit()),
            FormCommand::Reset => form.reset(),
        }
    }

    let Some(SubmitOutcome::Confirmed(message)) = outcome else {
        panic!("script should end in a confirmed order");
    };
    assert!(message.as_str().starts_with("Thank you for your order, Alice!"));
    assert!(message.as_str().contains("medium pizza with 2 toppings"));
}

#[test]
fn snapshot_json_shape() {
    let form = form_with("Al", "", &["Ham"]);
    let json = serde_json::to_value(form.snapshot()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "values": { "fullName": "Al", "size": null, "toppings": ["Ham"] },
            "errors": {
                "fullName": "full name must be at least 3 characters",
                "size": "size must be S or M or L",
            },
            "submit": "disabled",
            "message": null,
        })
    );
}

#[test]
fn configured_schema_changes_rules_and_messages() {
    let config = FormConfig::from_toml_str(
        r#"
        [validation]
        full_name_min_length = 5

        [messages]
        full_name_too_short = "name too short"
        "#,
    )
    .unwrap();

    let mut form = OrderFormValidator::new(ValidationSchema::from_config(&config));
    form.on_field_change("fullName", "Alex", false).unwrap();
    form.on_field_change("size", "S", false).unwrap();

    assert_eq!(form.errors().get(FieldName::FullName), "name too short");
    assert_eq!(form.submit_enablement(), SubmitEnablement::Disabled);

    form.on_field_change("fullName", "Alexa", false).unwrap();
    assert_eq!(form.submit_enablement(), SubmitEnablement::Enabled);
}
