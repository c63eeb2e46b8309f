//! src/view/components/form_panel.rs
//! ============================================================================
//! # FormPanel: Personal Details Inputs
//!
//! Renders the scalar fields of the draft with the focused input
//! highlighted. Choice fields render as `< value >` selectors cycled with
//! the arrow keys; mandatory fields carry a `*` marker. The advisory age
//! bounds are shown as a hint only.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::app_state::AppState;
use crate::model::registration::FieldId;
use crate::model::ui_state::Focus;
use crate::view::theme;

pub struct FormPanel;

impl FormPanel {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border_style())
            .title(" Personal details ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let draft = &app.draft;
        let focus = app.ui.focus;

        let lines = vec![
            text_line("Owner name", &draft.owner_name, true, focus == Focus::Field(FieldId::OwnerName), ""),
            text_line("Phone", &draft.phone, true, focus == Focus::Field(FieldId::Phone), "10 digits"),
            text_line("Age", &draft.age, true, focus == Focus::Field(FieldId::Age), "18-100"),
            choice_line(
                "Gender",
                draft.gender.map(|g| g.label()),
                true,
                focus == Focus::Field(FieldId::Gender),
            ),
            text_line("City", &draft.city, true, focus == Focus::Field(FieldId::City), ""),
            choice_line(
                "State",
                draft.state.map(|s| s.label()),
                true,
                focus == Focus::Field(FieldId::State),
            ),
            Line::default(),
            text_line("Email", &draft.email, false, focus == Focus::Field(FieldId::Email), "optional"),
            choice_line(
                "Experience",
                draft.experience.map(|e| e.label()),
                false,
                focus == Focus::Field(FieldId::Experience),
            ),
            choice_line(
                "Route pref.",
                draft.route_preference.map(|r| r.label()),
                false,
                focus == Focus::Field(FieldId::RoutePreference),
            ),
        ];

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn label_spans(label: &str, required: bool) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        format!("{label:<12}"),
        theme::label_style(),
    )];
    spans.push(if required {
        Span::styled("* ", theme::required_style())
    } else {
        Span::raw("  ")
    });
    spans
}

fn text_line(
    label: &str,
    value: &str,
    required: bool,
    focused: bool,
    hint: &str,
) -> Line<'static> {
    let mut spans = label_spans(label, required);

    let (content, mut style) = if value.is_empty() {
        (
            format!("({})", if hint.is_empty() { "empty" } else { hint }),
            theme::placeholder_style(),
        )
    } else {
        (value.to_owned(), theme::value_style())
    };
    if focused {
        style = theme::focused_style();
    }
    spans.push(Span::styled(content, style));
    if focused {
        spans.push(Span::styled("█", theme::focused_style()));
    }

    Line::from(spans)
}

fn choice_line(
    label: &str,
    value: Option<&'static str>,
    required: bool,
    focused: bool,
) -> Line<'static> {
    let mut spans = label_spans(label, required);

    let text = match value {
        Some(v) => format!("< {v} >"),
        None => "< — >".to_owned(),
    };
    let style = if focused {
        theme::focused_style()
    } else if value.is_some() {
        theme::value_style()
    } else {
        theme::placeholder_style()
    };
    spans.push(Span::styled(text, style));

    Line::from(spans)
}
