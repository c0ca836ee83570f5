//! Theme tests - built-in themes and tag colors

use quill::syntax::Tag;
use quill::theme::{list_available_themes, Color, Theme, ThemeSource, BUILTIN_THEMES};

#[test]
fn test_builtin_themes_parse() {
    for builtin in BUILTIN_THEMES {
        let theme = Theme::from_yaml(builtin.yaml)
            .unwrap_or_else(|e| panic!("theme {} failed: {}", builtin.id, e));
        for tag in Tag::ALL {
            assert!(
                theme.color_for(tag).is_some(),
                "theme {} has no color for {}",
                builtin.id,
                tag
            );
        }
    }
}

#[test]
fn test_dark_theme_colors() {
    let theme = Theme::from_builtin("dark").unwrap();
    assert_eq!(theme.background, Color::rgb(0x1E, 0x1E, 0x1E));
    assert_eq!(theme.color_for(Tag::Keyword), Some(Color::rgb(0x56, 0x9C, 0xD6)));
    assert_eq!(
        theme.color_for(Tag::ParenUnmatched),
        Some(Color::rgb(0xFF, 0x63, 0x47))
    );
}

#[test]
fn test_def_class_is_display_only() {
    let theme = Theme::from_builtin("light").unwrap();
    assert!(theme.color_named("def_class").is_some());
    assert_eq!(Tag::from_name("def_class"), None);
}

#[test]
fn test_unknown_builtin_is_an_error() {
    assert!(Theme::from_builtin("solarized-neon").is_err());
}

#[test]
fn test_default_is_dark() {
    assert_eq!(Theme::default().name, Theme::dark().name);
}

#[test]
fn test_list_includes_builtins() {
    let themes = list_available_themes();
    for id in ["dark", "light"] {
        assert!(themes.iter().any(|t| t.id == id), "missing {}", id);
    }
    assert!(themes
        .iter()
        .filter(|t| t.source == ThemeSource::Builtin)
        .all(|t| BUILTIN_THEMES.iter().any(|b| b.id == t.id)));
}
