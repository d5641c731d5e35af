use super::model::{Settings, SettingsPatch, VisionAbility};
use crate::common::model::Tri;

/// A settings field that a patch entry can be applied to.
trait PatchField<T> {
    /// Returns whether the entry touched the field.
    fn patch(&mut self, entry: Tri<T>) -> bool;
}

impl<T> PatchField<T> for Option<T> {
    #[inline]
    fn patch(&mut self, entry: Tri<T>) -> bool { entry.merge_into(self) }
}

// Fields without an empty state reset to their default.
macro_rules! impl_patch_field_with_default {
    ($($ty:ty)*) => {
        $(
            impl PatchField<$ty> for $ty {
                #[inline]
                fn patch(&mut self, entry: Tri<$ty>) -> bool {
                    match entry.or_else_throw() {
                        Ok(raw) => {
                            *self = raw.unwrap_or_default();
                            true
                        }
                        Err(_) => false,
                    }
                }
            }
        )*
    };
}

impl_patch_field_with_default!(bool VisionAbility);

// Macro for applying patch entries in field order
macro_rules! handle_patches {
    ($settings:ident, $patch:ident, $($field:ident),* $(,)?) => {{
        let mut touched = Vec::new();
        $(
            let action = if $patch.$field.is_null() { "reset" } else { "set" };
            if $settings.$field.patch($patch.$field) {
                crate::debug!("{} {action}", stringify!($field));
                touched.push(stringify!($field));
            }
        )*
        touched
    }};
}

/// Applies `patch` to `settings` and returns the names of the fields it touched.
pub fn apply_patch(settings: &mut Settings, patch: SettingsPatch) -> Vec<&'static str> {
    handle_patches!(settings, patch,
        vision_ability,
        enable_slow_pool,
        enable_long_context,
        include_web_references,
        usage_check_models,
        dynamic_key_secret,
        share_token,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> Settings {
        Settings {
            vision_ability: VisionAbility::All,
            enable_slow_pool: true,
            enable_long_context: true,
            include_web_references: true,
            usage_check_models: Some(vec!["claude-3.5-sonnet".to_string()]),
            dynamic_key_secret: Some("dks".to_string()),
            share_token: Some("share".to_string()),
        }
    }

    fn patch(json: &str) -> SettingsPatch { serde_json::from_str(json).unwrap() }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut settings = configured();
        assert!(apply_patch(&mut settings, patch("{}")).is_empty());
        assert_eq!(settings, configured());
    }

    #[test]
    fn test_null_resets() {
        let mut settings = configured();
        let touched = apply_patch(
            &mut settings,
            patch(r#"{"share_token":null,"vision_ability":null,"enable_slow_pool":null}"#),
        );
        assert_eq!(touched, ["vision_ability", "enable_slow_pool", "share_token"]);
        assert_eq!(settings.vision_ability, VisionAbility::Base64);
        assert!(!settings.enable_slow_pool);
        assert_eq!(settings.share_token, None);
        assert!(settings.enable_long_context);
        assert_eq!(settings.dynamic_key_secret.as_deref(), Some("dks"));
    }

    #[test]
    fn test_values_replace() {
        let mut settings = Settings::default();
        let touched = apply_patch(
            &mut settings,
            patch(
                r#"{
                    "include_web_references": true,
                    "usage_check_models": ["gpt-4o", "o1"],
                    "dynamic_key_secret": "",
                    "vision_ability": "disabled"
                }"#,
            ),
        );
        assert_eq!(
            touched,
            ["vision_ability", "include_web_references", "usage_check_models", "dynamic_key_secret"]
        );
        assert_eq!(settings.vision_ability, VisionAbility::None);
        assert!(settings.include_web_references);
        assert_eq!(
            settings.usage_check_models,
            Some(vec!["gpt-4o".to_string(), "o1".to_string()])
        );
        assert_eq!(settings.dynamic_key_secret.as_deref(), Some(""));
        assert_eq!(settings.share_token, None);
    }

    #[test]
    fn test_false_is_a_value() {
        let mut settings = configured();
        let touched = apply_patch(&mut settings, patch(r#"{"enable_long_context":false}"#));
        assert_eq!(touched, ["enable_long_context"]);
        assert!(!settings.enable_long_context);
    }

    #[test]
    fn test_reset_of_unset_option_is_still_touched() {
        let mut settings = Settings::default();
        let touched = apply_patch(&mut settings, patch(r#"{"share_token":null}"#));
        assert_eq!(touched, ["share_token"]);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_patch_field_table() {
        let cases: [(Tri<bool>, bool, bool, bool); 6] = [
            (Tri::Undefined, false, false, false),
            (Tri::Undefined, true, true, false),
            (Tri::Null, true, false, true),
            (Tri::Null, false, false, true),
            (Tri::Value(true), false, true, true),
            (Tri::Value(false), true, false, true),
        ];
        for (entry, before, after, touched) in cases {
            let mut field = before;
            assert_eq!(field.patch(entry), touched, "{entry:?} on {before}");
            assert_eq!(field, after, "{entry:?} on {before}");
        }
    }
}
