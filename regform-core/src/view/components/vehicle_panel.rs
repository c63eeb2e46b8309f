//! src/view/components/vehicle_panel.rs
//! ============================================================================
//! # VehiclePanel: Vehicle Slots, Picture, and Submit
//!
//! One checkbox row per fixed slot with its registration number input; the
//! "other" slot gets an extra free-text type row. Below the slots sit the
//! profile picture chooser and the submit button, which renders disabled
//! while a submission is pending.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::model::app_state::{AppState, FormPhase};
use crate::model::registration::VehicleKind;
use crate::model::ui_state::Focus;
use crate::view::theme;

pub struct VehiclePanel;

impl VehiclePanel {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::panel_border_style())
            .title(" Vehicles ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let focus = app.ui.focus;
        let mut lines: Vec<Line<'static>> = Vec::with_capacity(16);

        for kind in VehicleKind::ALL {
            let slot = app.draft.slot(kind);

            let mark = if slot.selected { "[x]" } else { "[ ]" };
            let mut mark_style = theme::checkbox_style(slot.selected);
            if focus == Focus::Slot(kind) {
                mark_style = theme::focused_style();
            }
            lines.push(Line::from(vec![
                Span::styled(mark.to_owned(), mark_style),
                Span::raw(" "),
                Span::styled(kind.label().to_owned(), theme::value_style()),
            ]));

            lines.push(input_row(
                "Reg no",
                &slot.reg_no,
                focus == Focus::SlotRegNo(kind),
            ));

            if kind == VehicleKind::Other {
                lines.push(input_row(
                    "Type",
                    &slot.custom_type,
                    focus == Focus::SlotCustomType,
                ));
            }
        }

        lines.push(Line::default());

        // Profile picture chooser
        let photo_status = match &app.draft.photo {
            Some(data_url) => format!("attached ({} KB)", data_url.len() / 1024),
            None => "none".to_owned(),
        };
        lines.push(Line::from(vec![
            Span::styled("Picture: ".to_owned(), theme::label_style()),
            Span::styled(photo_status, theme::value_style()),
            Span::raw("  "),
            Span::styled(
                "[ Choose… ]".to_owned(),
                theme::button_style(focus == Focus::Photo, true),
            ),
        ]));

        lines.push(Line::default());

        let submitting = app.phase == FormPhase::Submitting;
        let submit_text = if submitting {
            "[ Submitting… ]"
        } else {
            "[ Submit registration ]"
        };
        lines.push(Line::from(Span::styled(
            submit_text.to_owned(),
            theme::button_style(focus == Focus::Submit, !submitting),
        )));

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn input_row(label: &str, value: &str, focused: bool) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("    {label}: "),
        theme::label_style(),
    )];

    let (content, mut style) = if value.is_empty() {
        ("(empty)".to_owned(), theme::placeholder_style())
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
