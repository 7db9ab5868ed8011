//! Dashboard layout export/import. Import validates the document and
//! rejects it as a whole on failure, so the caller's previous layout is
//! never left in a partial state.

use contracts::layout::DashboardLayout;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutIoError {
    #[error("documento JSON inválido: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("el diseño no contiene ningún widget")]
    NoWidgets,
}

/// Serialize a layout for download.
pub fn export_layout(layout: &DashboardLayout) -> Result<String, LayoutIoError> {
    Ok(serde_json::to_string_pretty(layout)?)
}

/// Parse user-supplied JSON into a layout. Returns the parsed layout
/// only when the whole document is valid; callers commit on `Ok` and
/// keep their current state otherwise.
pub fn import_layout(json: &str) -> Result<DashboardLayout, LayoutIoError> {
    let layout: DashboardLayout = serde_json::from_str(json).map_err(|e| {
        log::warn!("rejected layout import: {e}");
        LayoutIoError::Parse(e)
    })?;
    if layout.widgets.is_empty() {
        log::warn!("rejected layout import: no widgets");
        return Err(LayoutIoError::NoWidgets);
    }
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::views::UserView;

    #[test]
    fn export_import_round_trip() {
        let layout = DashboardLayout::preset_for(UserView::DireccionGeneral);
        let json = export_layout(&layout).unwrap();
        let restored = import_layout(&json).unwrap();
        assert_eq!(restored, layout);
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(
            import_layout("{ not json"),
            Err(LayoutIoError::Parse(_))
        ));
        // Valid JSON, wrong shape.
        assert!(matches!(
            import_layout(r#"{"foo": 1}"#),
            Err(LayoutIoError::Parse(_))
        ));
    }

    #[test]
    fn empty_widget_list_is_rejected() {
        let mut layout = DashboardLayout::preset_for(UserView::VistaCliente);
        layout.widgets.clear();
        let json = export_layout(&layout).unwrap();
        assert!(matches!(import_layout(&json), Err(LayoutIoError::NoWidgets)));
    }
}
