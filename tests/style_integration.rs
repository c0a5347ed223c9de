// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_feedback::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_feedback::ui::styles::{button, container, overlay};

    #[test]
    fn all_button_styles_compile() {
        let theme = Theme::Dark;

        // Smoke-test all button styles compile and are callable
        let _ = button::primary(&theme, iced::widget::button::Status::Active);
        let _ = button::secondary(&theme, iced::widget::button::Status::Hovered);
    }

    #[test]
    fn overlay_styles_compile_for_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            let _ = overlay::backdrop(&theme);
            let _ = overlay::dialog(&theme);
            let _ = container::panel(&theme);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::PRIMARY_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Sizing
        let _ = sizing::TOAST_WIDTH;
    }

    #[test]
    fn severity_accents_come_from_the_shared_palette() {
        use iced_feedback::ui::notifications::Severity;

        assert_eq!(Severity::Success.color(), palette::SUCCESS_500);
        assert_eq!(Severity::Info.color(), palette::INFO_500);
        assert_eq!(Severity::Warning.color(), palette::WARNING_500);
        assert_eq!(Severity::Error.color(), palette::ERROR_500);
    }
}
