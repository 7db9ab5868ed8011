//! The widget visibility gate. Decides, per widget instance, whether
//! the wrapped content renders or a locked placeholder takes its place.
//! Presentation-layer only: the decision swaps markup, never data.

use contracts::views::{view_config, UserView, WidgetAccess, WidgetKind, WidgetRequirements};

/// Gate a widget against the view configuration.
///
/// Membership in `allowed_widgets` is checked first; a widget missing
/// from the view is restricted regardless of permission flags.
pub fn widget_access(
    widget: WidgetKind,
    view: UserView,
    requirements: WidgetRequirements,
) -> WidgetAccess {
    let cfg = view_config(view);
    if !cfg.allowed_widgets.contains(&widget) {
        return WidgetAccess::NotInView;
    }
    let p = cfg.permissions;
    let has_permission = (!requirements.requires_financials || p.can_view_financials)
        && (!requirements.requires_analytics || p.can_view_analytics)
        && (!requirements.requires_all_orders || p.can_view_all_orders);
    if has_permission {
        WidgetAccess::Granted
    } else {
        WidgetAccess::MissingPermission
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_widget_without_requirements_is_granted() {
        let access = widget_access(
            WidgetKind::Metrics,
            UserView::TorreControl,
            WidgetRequirements::NONE,
        );
        assert_eq!(access, WidgetAccess::Granted);
    }

    #[test]
    fn widget_outside_the_view_is_restricted_regardless_of_flags() {
        // Map is not part of the client view; no combination of
        // requirement flags can unlock it.
        for requirements in [
            WidgetRequirements::NONE,
            WidgetRequirements::financials(),
            WidgetRequirements::analytics(),
            WidgetRequirements {
                requires_financials: true,
                requires_analytics: true,
                requires_all_orders: true,
            },
        ] {
            let access = widget_access(WidgetKind::Map, UserView::VistaCliente, requirements);
            assert_eq!(access, WidgetAccess::NotInView);
        }
    }

    #[test]
    fn missing_capability_blocks_content() {
        // Torre de control cannot view financials.
        let access = widget_access(
            WidgetKind::Charts,
            UserView::TorreControl,
            WidgetRequirements::financials(),
        );
        assert_eq!(access, WidgetAccess::MissingPermission);

        // The client view has no analytics.
        let access = widget_access(
            WidgetKind::Orders,
            UserView::VistaCliente,
            WidgetRequirements::analytics(),
        );
        assert_eq!(access, WidgetAccess::MissingPermission);
    }

    #[test]
    fn executive_view_grants_everything() {
        for widget in WidgetKind::all() {
            let access = widget_access(
                widget,
                UserView::DireccionGeneral,
                WidgetRequirements {
                    requires_financials: true,
                    requires_analytics: true,
                    requires_all_orders: true,
                },
            );
            assert_eq!(access, WidgetAccess::Granted);
        }
    }

    #[test]
    fn restricted_messages_distinguish_the_two_cases() {
        assert_ne!(
            WidgetAccess::NotInView.restricted_message(),
            WidgetAccess::MissingPermission.restricted_message()
        );
    }
}
