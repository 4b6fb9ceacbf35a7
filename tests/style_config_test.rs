//! Behaviour of the validated style configuration as seen by a build tool

mod common;

use common::{complete_theme, scenario_declaration, setup_test_logging, write_temp, MYTHEME};
use std::sync::Arc;
use std::thread;
use styleconf::{
    Breakpoint, ConfigDeclaration, ConfigLoader, ConfigValidator, LoadError, SemanticRole,
    StyleConfig, Violation, ViolationKind,
};

#[test]
fn test_scenario_construction_preserves_values() {
    setup_test_logging();
    let config = StyleConfig::try_from(scenario_declaration()).expect("scenario should be valid");

    assert_eq!(config.content_patterns(), ["./src/**/*.html"]);
    assert_eq!(config.plugin_activation_order(), ["daisyui", "typography"]);

    let theme = config.color_theme("mytheme").unwrap();
    assert_eq!(theme.colors().len(), 9);
    for (role, color) in MYTHEME {
        assert_eq!(theme.get(role).map(|c| c.as_str()), Some(color), "role {role}");
    }
}

#[test]
fn test_spacing_always_has_default() {
    let config = StyleConfig::try_from(scenario_declaration()).unwrap();
    assert_eq!(config.spacing_scale().get(Breakpoint::Default).unwrap().as_str(), "1rem");

    let mut decl = scenario_declaration();
    decl.container.padding.clear();
    let err = ConfigValidator::validate(&decl).unwrap_err();
    assert_eq!(err.violations(), [Violation::MissingDefaultSpacing]);
}

#[test]
fn test_theme_missing_role_fails_construction() {
    for role in SemanticRole::ALL {
        let mut decl = scenario_declaration();
        decl.themes[0].colors.remove(role.as_str());

        let err = ConfigValidator::validate(&decl).unwrap_err();
        assert_eq!(
            err.violations(),
            [Violation::IncompleteTheme {
                theme: "mytheme".to_string(),
                missing: vec![role],
            }]
        );
    }
}

#[test]
fn test_unknown_theme_lookup() {
    let config = StyleConfig::try_from(scenario_declaration()).unwrap();

    let err = config.color_theme("doesNotExist").unwrap_err();
    assert_eq!(err.violations(), [Violation::UnknownTheme("doesNotExist".to_string())]);
    assert!(err.to_string().contains("theme 'doesNotExist' is not registered"));
}

#[test]
fn test_duplicate_plugin_fails_and_valid_order_is_kept() {
    let mut decl = scenario_declaration();
    decl.plugins = vec![
        "typography".to_string(),
        "daisyui".to_string(),
        "typography".to_string(),
    ];
    let err = ConfigValidator::validate(&decl).unwrap_err();
    assert!(err.contains(ViolationKind::DuplicatePlugin));

    decl.plugins.pop();
    let config = ConfigValidator::validate(&decl).unwrap();
    assert_eq!(config.plugin_activation_order(), ["typography", "daisyui"]);
}

#[test]
fn test_multiple_themes_and_default_theme() {
    let mut decl = scenario_declaration();
    decl.themes.push(complete_theme("dark"));

    let config = StyleConfig::try_from(&decl).unwrap();
    assert_eq!(config.default_theme().map(|t| t.name()), Some("mytheme"));
    assert_eq!(config.color_theme("dark").unwrap().name(), "dark");

    decl.themes.push(complete_theme("dark"));
    let err = StyleConfig::try_from(&decl).unwrap_err();
    assert_eq!(err.violations(), [Violation::DuplicateTheme("dark".to_string())]);
}

#[test]
fn test_every_violation_reported_at_once() {
    let mut decl = scenario_declaration();
    decl.content.clear();
    decl.container.padding = [("sm".to_string(), "huge".to_string())].into();
    decl.themes[0].colors.remove("info");
    decl.plugins.push("daisyui".to_string());

    let err = ConfigValidator::validate(&decl).unwrap_err();
    let kinds: Vec<_> = err.kinds().collect();
    assert_eq!(
        kinds,
        vec![
            ViolationKind::EmptyContentPatterns,
            ViolationKind::InvalidLength,
            ViolationKind::MissingDefaultSpacing,
            ViolationKind::IncompleteTheme,
            ViolationKind::DuplicatePlugin,
        ]
    );

    let message = err.to_string();
    assert!(message.starts_with("invalid style configuration (5 violations):"));
}

#[test]
fn test_builtin_declaration_is_valid_and_cascades() {
    let config = ConfigLoader::builtin().unwrap();

    assert!(config.container().center);
    assert_eq!(
        config.content_patterns(),
        ["./web/src/**/*.rs", "./web/**/*.{scss,css,html}"]
    );
    let scale = config.spacing_scale();
    assert_eq!(scale.resolve(Breakpoint::Sm).as_str(), "2rem");
    assert_eq!(scale.resolve(Breakpoint::Xxl).as_str(), "16rem");
}

#[test]
fn test_to_declaration_reproduces_literal() {
    let decl = ConfigDeclaration::builtin();
    let config = StyleConfig::try_from(&decl).unwrap();
    assert_eq!(config.to_declaration(), decl);
}

#[test]
fn test_config_is_shareable_between_threads() {
    let config = Arc::new(ConfigLoader::builtin().unwrap());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let config = Arc::clone(&config);
            thread::spawn(move || config.color_theme("mytheme").map(|t| t.colors().len()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 9);
    }
}

#[test]
fn test_load_file_with_violations() {
    let file = write_temp(
        ".yaml",
        "content: []\ncontainer:\n  padding:\n    DEFAULT: 1rem\nthemes:\n  - name: mytheme\n    colors:\n      primary: blue\n",
    );

    let err = match ConfigLoader::load_from_file(file.path()) {
        Err(LoadError::Invalid(err)) => err,
        other => panic!("Expected Invalid error, got {other:?}"),
    };
    assert!(err.contains(ViolationKind::EmptyContentPatterns));
    assert!(err.contains(ViolationKind::InvalidColor));
    assert!(err.contains(ViolationKind::IncompleteTheme));
}
