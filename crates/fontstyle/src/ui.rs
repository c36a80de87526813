//! Dropdown model for the font style UI.
//!
//! Rendering belongs to the host; this module turns normalized options and
//! the live command into list items. Titles are localized on copies, the
//! canonical option list is never modified.

use crate::command::FontStyleCommand;
use crate::option::{StyleOption, STYLE_PROPERTY};

/// Titles of the built-in options that are passed through a translator.
pub const STANDARD_TITLES: [&str; 5] = ["Default", "Tiny", "Small", "Big", "Huge"];

/// CSS class carried by every list item.
pub const ITEM_CLASS: &str = "fontstyle-option";

/// Translates UI strings.
pub trait Translator {
    fn translate(&self, text: &str) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, text: &str) -> String {
        self(text)
    }
}

/// Returns copies of `options` with standard titles translated.
///
/// Custom titles are left as configured.
///
/// # Example
///
/// ```rust
/// use fontstyle::{localize_options, normalize_options, RawOption};
///
/// let raw: Vec<RawOption> = vec!["tiny".into(), 12.into()];
/// let options = normalize_options(&raw).unwrap();
/// let localized = localize_options(&options, &|title: &str| title.to_uppercase());
///
/// assert_eq!(localized[0].title, "TINY");
/// assert_eq!(localized[1].title, "12");
/// assert_eq!(options[0].title, "Tiny");
/// ```
pub fn localize_options<T: Translator + ?Sized>(
    options: &[StyleOption],
    translator: &T,
) -> Vec<StyleOption> {
    options
        .iter()
        .map(|option| {
            let mut localized = option.clone();
            if STANDARD_TITLES.contains(&option.title.as_str()) {
                localized.title = translator.translate(&option.title);
            }
            localized
        })
        .collect()
}

/// One entry of the font style dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Value passed to the command; `None` removes the attribute.
    pub command_param: Option<String>,
    pub label: String,
    pub class: String,
    /// Inline style previewing a style-based option in its label.
    pub label_style: Option<String>,
    pub is_on: bool,
}

/// Builds dropdown items for `options`, marking the one matching the
/// command's current value.
pub fn list_items(options: &[StyleOption], command: &FontStyleCommand) -> Vec<ListItem> {
    options
        .iter()
        .map(|option| {
            let mut class = ITEM_CLASS.to_string();
            let mut label_style = None;

            if let Some(view) = &option.view {
                if let Some(value) = view.style_value() {
                    label_style = Some(format!("{}:{}", STYLE_PROPERTY, value));
                }
                if let Some(classes) = view.classes() {
                    for preset_class in classes {
                        class.push(' ');
                        class.push_str(preset_class);
                    }
                }
            }

            ListItem {
                command_param: option.model.clone(),
                label: option.title.clone(),
                class,
                label_style,
                is_on: command.value() == option.model.as_deref(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{AttributeTarget, FONT_STYLE};
    use crate::option::{normalize_options, RawOption};

    struct Fixed(Option<&'static str>);

    impl AttributeTarget for Fixed {
        fn attribute_value(&self, _key: &str) -> Option<String> {
            self.0.map(str::to_string)
        }
        fn is_attribute_allowed(&self, key: &str) -> bool {
            key == FONT_STYLE
        }
        fn set_attribute(&mut self, _key: &str, _value: &str) {}
        fn remove_attribute(&mut self, _key: &str) {}
    }

    fn options() -> Vec<StyleOption> {
        let raw: Vec<RawOption> = vec!["small".into(), "default".into(), 14.into()];
        normalize_options(&raw).unwrap()
    }

    #[test]
    fn test_localize_keeps_source_untouched() {
        let options = options();
        let localized = localize_options(&options, &|title: &str| format!("[{}]", title));
        assert_eq!(localized[0].title, "[Small]");
        assert_eq!(localized[1].title, "[Default]");
        assert_eq!(localized[2].title, "14");
        assert_eq!(options[0].title, "Small");
    }

    #[test]
    fn test_items_carry_classes_and_label_style() {
        let command = FontStyleCommand::new();
        let items = list_items(&options(), &command);

        assert_eq!(items[0].class, "fontstyle-option text-small");
        assert_eq!(items[0].label_style, None);
        assert_eq!(items[1].class, ITEM_CLASS);
        assert_eq!(items[1].command_param, None);
        assert_eq!(items[2].label_style.as_deref(), Some("font-style:14px"));
        assert_eq!(items[2].command_param.as_deref(), Some("14px"));
    }

    #[test]
    fn test_default_item_is_on_without_value() {
        let mut command = FontStyleCommand::new();
        command.refresh(&Fixed(None));
        let items = list_items(&options(), &command);
        let on: Vec<_> = items.iter().map(|item| item.is_on).collect();
        assert_eq!(on, vec![false, true, false]);
    }

    #[test]
    fn test_matching_item_is_on() {
        let mut command = FontStyleCommand::new();
        command.refresh(&Fixed(Some("14px")));
        let items = list_items(&options(), &command);
        let on: Vec<_> = items.iter().map(|item| item.is_on).collect();
        assert_eq!(on, vec![false, false, true]);
    }
}
