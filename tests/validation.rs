use manifest_validation::manifest::{Manifest, find_missing_keys, is_valid_json, parse_manifest_str};
use manifest_validation::rules::{Catalog, Category, REQUIRED_FIELDS, Rule, Verdict, check};
use manifest_validation::utils::is_valid_url;
use manifest_validation::validation::Validator;
use manifest_validation::{
    is_install_ready, report_missing, validate_improvements, validate_manifest,
    validate_required_fields, validate_single_field,
};
use proptest::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;

const WEBBOARD: &str = r##"{
    "name": "Webboard",
    "short_name": "Webboard",
    "description": "Whiteboard for the web",
    "start_url": "/?source=pwa",
    "scope": "/",
    "display": "standalone",
    "orientation": "any",
    "background_color": "#FFFFFF",
    "theme_color": "#2196F3",
    "lang": "en",
    "dir": "ltr",
    "id": "/",
    "categories": ["productivity", "education"],
    "icons": [
        { "src": "icons/icon-192.png", "sizes": "192x192", "type": "image/png", "purpose": "any" },
        { "src": "icons/icon-512.png", "sizes": "512x512", "type": "image/png", "purpose": "any" },
        { "src": "icons/maskable-512.png", "sizes": "512x512", "type": "image/png", "purpose": "maskable" }
    ],
    "screenshots": [
        { "src": "screens/wide.png", "sizes": "1280x720", "type": "image/png", "form_factor": "wide" }
    ],
    "shortcuts": [
        {
            "name": "New board",
            "url": "/new",
            "icons": [{ "src": "icons/new-96.png", "sizes": "96x96", "type": "image/png" }]
        }
    ],
    "launch_handler": { "client_mode": "focus-existing" }
}"##;

fn webboard() -> Manifest {
    parse_manifest_str(WEBBOARD).unwrap()
}

#[tokio::test]
async fn missing_required_field_fails_required_pass() {
    let validator = Validator::default();
    for field in REQUIRED_FIELDS {
        let manifest = Manifest::from_map({
            let mut map = webboard().as_map().clone();
            map.remove(*field);
            map
        });

        let report = validator.loop_through_required_keys(&manifest).await;
        let result = report
            .results()
            .iter()
            .find(|v| v.member == *field)
            .unwrap_or_else(|| panic!("no result for {field}"));
        assert!(!result.valid, "{field} should fail when absent");
        assert!(!report.is_install_ready());
    }
}

#[tokio::test]
async fn well_formed_required_fields_all_pass() {
    let report = Validator::default().loop_through_required_keys(&webboard()).await;
    assert_eq!(report.len(), REQUIRED_FIELDS.len());
    assert!(report.results().iter().all(|v| v.valid), "{:?}", report.failed().collect::<Vec<_>>());
}

#[tokio::test]
async fn complete_manifest_passes_every_primary_rule() {
    let report = validate_manifest(WEBBOARD).await.unwrap();
    let summary = report.summary();
    assert_eq!(summary.required.failed, 0);
    assert_eq!(summary.recommended.failed, 0, "{:?}", report.failed().collect::<Vec<_>>());
    assert_eq!(report.len(), Catalog::builtin().len());
}

#[test]
fn missing_keys_of_empty_manifest() {
    assert_eq!(find_missing_keys(&Manifest::new()), REQUIRED_FIELDS.to_vec());
    assert_eq!(report_missing(&Manifest::new()), REQUIRED_FIELDS.to_vec());
    assert!(report_missing(&webboard()).is_empty());
}

#[tokio::test]
async fn single_field_name() {
    assert!(!validate_single_field("name", json!("")).await.valid);
    assert!(validate_single_field("name", json!("My App")).await.valid);
}

#[tokio::test]
async fn single_field_unknown_is_vacuous_pass() {
    for value in [json!(null), json!(42), json!({ "nested": [1, 2] }), json!("")] {
        let result = validate_single_field("nonexistent_field", value).await;
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }
}

#[tokio::test]
async fn icon_shape_property() {
    let icons = |value: Value| async move {
        let report = Validator::default()
            .loop_through_required_keys(&webboard().with("icons", value))
            .await;
        report.results().iter().find(|v| v.member == "icons").map(|v| v.valid)
    };

    assert_eq!(icons(json!([{ "src": "a.png", "sizes": "48x48" }])).await, Some(true));
    assert_eq!(icons(json!([{ "src": "a.png" }])).await, Some(false));
    assert_eq!(icons(json!([{ "src": "not a url", "sizes": "48x48" }])).await, Some(false));
    assert_eq!(icons(json!([])).await, Some(false));
}

#[tokio::test]
async fn screenshot_shape_property() {
    let shots = |value: Value| async move {
        validate_single_field("screenshots", value).await.valid
    };

    assert!(shots(json!([{ "src": "a.png", "sizes": "48x48" }])).await);
    assert!(!shots(json!([{ "src": "a.png" }])).await);
    assert!(!shots(json!([{ "src": "not a url", "sizes": "48x48" }])).await);
    assert!(!shots(json!([])).await);
}

#[test]
fn url_predicate() {
    assert!(is_valid_url("https://example.com"));
    assert!(!is_valid_url("not a url"));
}

#[test]
fn json_precheck() {
    assert!(is_valid_json(WEBBOARD));
    assert!(!is_valid_json("{ name: 'x' }"));
}

#[tokio::test]
async fn repeated_passes_are_identical() {
    let validator = Validator::default();
    let manifest = webboard().with("lang", json!("xx-invalid-"));

    let first = validator.loop_through_keys(&manifest).await;
    let second = validator.loop_through_keys(&manifest).await;

    assert_eq!(first.results(), second.results());
    assert_eq!(first.digest(), second.digest());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn order_holds_on_a_multi_threaded_runtime() {
    let validator = Validator::default();
    let expected: Vec<&str> = Catalog::builtin().rules().iter().map(Rule::id).collect();

    for _ in 0..10 {
        let report = validator.loop_through_keys(&webboard()).await;
        let ids: Vec<&str> = report.results().iter().map(|v| v.test_name).collect();
        assert_eq!(ids, expected);
    }
}

fn explode(_: Option<&Value>, _: &Manifest) -> Verdict {
    panic!("predicate fault")
}

#[tokio::test]
async fn panicking_predicate_only_fails_its_own_rule() {
    let catalog = Catalog::extended([Rule::new("exploding", "name", Category::Optional, explode)]);
    let builtin_len = Catalog::builtin().len();
    let validator = Validator::new(Arc::new(catalog));

    let report = validator.loop_through_keys(&webboard()).await;
    assert_eq!(report.len(), builtin_len + 1);

    let exploding = report.results().last().unwrap();
    assert_eq!(exploding.test_name, "exploding");
    assert!(!exploding.valid);
    assert_eq!(exploding.error_string.as_deref(), Some("name could not be validated"));

    assert!(report.results()[..builtin_len].iter().filter(|v| v.category == Category::Required).all(|v| v.valid));
}

#[tokio::test]
async fn async_rules_take_part_in_the_pass() {
    let lookup = Rule::new_async("lang-known", "lang", Category::Optional, |value, _| async move {
        tokio::task::yield_now().await;
        check(value.as_ref().and_then(Value::as_str) == Some("en"))
    });
    let validator = Validator::new(Arc::new(Catalog::extended([lookup])));

    let report = validator.loop_through_keys(&webboard()).await;
    assert!(report.results().last().unwrap().valid);

    let field = validator.find_single_field("lang", json!("fr")).await;
    assert!(!field.valid);
    assert_eq!(field.validations.len(), 2);
}

#[tokio::test]
async fn improvements_and_install_readiness() {
    let manifest = webboard()
        .with("iarc_rating_id", json!(""))
        .with("dir", json!("sideways"));
    let improvements = validate_improvements(&manifest).await;
    let members: Vec<&str> = improvements.iter().map(|v| v.member).collect();
    assert_eq!(members, vec!["iarc_rating_id", "dir"]);

    assert!(is_install_ready(&manifest).await);
    assert!(!is_install_ready(&Manifest::new()).await);
}

#[tokio::test]
async fn required_entry_point_rejects_bad_input() {
    assert!(validate_required_fields("not json").await.is_err());
    assert!(validate_manifest("\"a string\"").await.is_err());
    assert!(validate_required_fields(WEBBOARD).await.unwrap().is_install_ready());
}

fn arbitrary_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        ".{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[a-z_]{1,8}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn arbitrary_values_never_abort_a_pass(
        member in prop::sample::select(Catalog::builtin().members()),
        value in arbitrary_json(),
    ) {
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
        let manifest = webboard().with(member, value.clone());

        let report = runtime.block_on(Validator::default().loop_through_keys(&manifest));
        let ids: Vec<&str> = report.results().iter().map(|v| v.test_name).collect();
        let expected: Vec<&str> = Catalog::builtin().rules().iter().map(Rule::id).collect();
        prop_assert_eq!(ids, expected);
        prop_assert!(report.results().iter().all(|v| v.valid || v.error_string.is_some()));

        let field = runtime.block_on(validate_single_field(member, value));
        prop_assert_eq!(field.valid, field.errors.is_empty());
    }
}
