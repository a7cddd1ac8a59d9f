use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::form::schema::{DATE_FORMAT, DATE_FORMAT_CHRONO, TIME_FORMAT, TIME_FORMAT_CHRONO};
use crate::form::{Field, ReminderForm, ReminderPayload, SubmitOutcome};
use crate::reminder::{Reminder, ReminderColor};
use crate::theme;

pub type OnSubmit = Box<dyn FnOnce(ReminderPayload)>;

const TIME_STEP_MINUTES: i64 = 15;

/// Which row of the form has the cursor. City is carried along but has no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Description,
    Color,
    Date,
    Time,
    Confirm,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Description => Focus::Color,
            Focus::Color => Focus::Date,
            Focus::Date => Focus::Time,
            Focus::Time => Focus::Confirm,
            Focus::Confirm => Focus::Description,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Focus::Description => Focus::Confirm,
            Focus::Color => Focus::Description,
            Focus::Date => Focus::Color,
            Focus::Time => Focus::Date,
            Focus::Confirm => Focus::Time,
        }
    }

    pub fn field(&self) -> Option<Field> {
        match self {
            Focus::Description => Some(Field::Description),
            Focus::Color => Some(Field::Color),
            Focus::Date => Some(Field::Date),
            Focus::Time => Some(Field::Time),
            Focus::Confirm => None,
        }
    }
}

/// The form controller plus the widget state wrapped around it.
pub struct ReminderFormState {
    pub form: ReminderForm<OnSubmit>,
    pub focus: Focus,
    pub is_new: bool,
}

impl ReminderFormState {
    pub fn new(reminder: &Reminder, is_new: bool, on_submit: OnSubmit) -> Self {
        Self {
            form: ReminderForm::new(reminder, on_submit),
            focus: Focus::Description,
            is_new,
        }
    }

    /// Leaving a field counts as touching it.
    pub fn focus_next(&mut self) {
        self.blur();
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.blur();
        self.focus = self.focus.prev();
    }

    fn blur(&mut self) {
        if let Some(field) = self.focus.field() {
            self.form.touch(field);
        }
    }

    pub fn input_char(&mut self, c: char) {
        let field = match self.focus {
            Focus::Description => Field::Description,
            Focus::Date => Field::Date,
            Focus::Time => Field::Time,
            Focus::Color | Focus::Confirm => return,
        };
        let mut value = self.form.value(field).to_string();
        value.push(c);
        self.form.set_field(field, value);
    }

    pub fn backspace(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if field == Field::Color {
            return;
        }
        let mut value = self.form.value(field).to_string();
        if value.pop().is_some() {
            self.form.set_field(field, value);
        }
    }

    /// Picker step: cycles the colour, moves the date by days or the time by
    /// quarter hours. Values the picker cannot parse are left alone.
    pub fn step(&mut self, delta: i64) {
        match self.focus {
            Focus::Color => {
                let current: ReminderColor = self.form.value(Field::Color).parse().unwrap_or_default();
                let next = if delta >= 0 { current.next() } else { current.prev() };
                self.form.set_field(Field::Color, next.name());
            }
            Focus::Date => {
                let stepped = NaiveDate::parse_from_str(self.form.value(Field::Date), DATE_FORMAT_CHRONO)
                    .ok()
                    .and_then(|d| d.checked_add_signed(Duration::days(delta)));
                if let Some(date) = stepped {
                    self.form
                        .set_field(Field::Date, date.format(DATE_FORMAT_CHRONO).to_string());
                }
            }
            Focus::Time => {
                if let Ok(time) =
                    NaiveTime::parse_from_str(self.form.value(Field::Time), TIME_FORMAT_CHRONO)
                {
                    let (time, _) =
                        time.overflowing_add_signed(Duration::minutes(delta * TIME_STEP_MINUTES));
                    self.form
                        .set_field(Field::Time, time.format(TIME_FORMAT_CHRONO).to_string());
                }
            }
            Focus::Description | Focus::Confirm => {}
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        let outcome = self.form.submit();
        if outcome == SubmitOutcome::Rejected {
            // Jump to the first field that needs fixing.
            if let Some(field) = self.form.errors().fields().next() {
                self.focus = match field {
                    Field::Description | Field::City => Focus::Description,
                    Field::Color => Focus::Color,
                    Field::Date => Focus::Date,
                    Field::Time => Focus::Time,
                };
            }
        }
        outcome
    }
}

pub struct ReminderFormView;

impl ReminderFormView {
    pub fn render(frame: &mut Frame, area: Rect, state: &ReminderFormState) {
        let theme = theme::current();

        let form_w = area.width.min(56).max(34).min(area.width);
        let form_h = area.height.min(16).max(12).min(area.height);
        let x = area.x + (area.width.saturating_sub(form_w)) / 2;
        let y = area.y + (area.height.saturating_sub(form_h)) / 2;
        let form_area = Rect::new(x, y, form_w, form_h);

        frame.render_widget(Clear, form_area);

        let title = if state.is_new { " New Reminder " } else { " Edit Reminder " };
        let block = Block::default()
            .title(title)
            .title_style(theme.accent.add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(theme.accent);

        let inner = block.inner(form_area);
        frame.render_widget(block, form_area);

        let rows = Layout::vertical([
            Constraint::Length(1), // label
            Constraint::Length(1), // description + color
            Constraint::Length(1), // description error
            Constraint::Length(1), // color error
            Constraint::Length(1), // label
            Constraint::Length(1), // date + time
            Constraint::Length(1), // date error
            Constraint::Length(1), // time error
            Constraint::Length(1), // spacer
            Constraint::Length(1), // confirm
            Constraint::Length(1), // help
            Constraint::Min(0),
        ])
        .split(inner);

        let form = &state.form;

        frame.render_widget(Paragraph::new(Span::styled("Enter your reminder", theme.header)), rows[0]);

        let [desc_area, color_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(12)]).areas(rows[1]);
        render_text_input(
            frame,
            desc_area,
            form.value(Field::Description),
            "e.g.: Call mom",
            state.focus == Focus::Description,
        );
        render_color_picker(frame, color_area, form.value(Field::Color), state.focus == Focus::Color);
        render_error(frame, rows[2], form.visible_error(Field::Description));
        render_error(frame, rows[3], form.visible_error(Field::Color));

        frame.render_widget(Paragraph::new(Span::styled("When", theme.header)), rows[4]);

        let [date_area, time_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(12)]).areas(rows[5]);
        render_date_picker(frame, date_area, form.value(Field::Date), state.focus == Focus::Date);
        render_text_input(
            frame,
            time_area,
            form.value(Field::Time),
            TIME_FORMAT,
            state.focus == Focus::Time,
        );
        render_error(frame, rows[6], form.visible_error(Field::Date));
        render_error(frame, rows[7], form.visible_error(Field::Time));

        let button_style = if state.focus == Focus::Confirm {
            theme.selected.add_modifier(Modifier::BOLD)
        } else {
            theme.accent.add_modifier(Modifier::BOLD)
        };
        frame.render_widget(
            Paragraph::new(Span::styled("[ \u{2713} Confirm ]", button_style)),
            rows[9],
        );

        let help = Line::from(vec![
            Span::styled("Tab", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Next ", theme.dim),
            Span::styled("\u{2190}\u{2191}\u{2192}\u{2193}", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Pick ", theme.dim),
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Save ", theme.dim),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(":Cancel", theme.dim),
        ]);
        frame.render_widget(Paragraph::new(help), rows[10]);
    }
}

fn input_style(active: bool) -> Style {
    if active {
        Style::default().fg(ratatui::style::Color::Cyan)
    } else {
        Style::default()
    }
}

fn render_text_input(frame: &mut Frame, area: Rect, value: &str, placeholder: &str, active: bool) {
    let cursor = if active { "_" } else { "" };
    let line = if value.is_empty() {
        Line::from(vec![
            Span::styled(cursor, input_style(active)),
            Span::styled(placeholder.to_string(), theme::current().dim),
        ])
    } else {
        Line::from(Span::styled(format!("{}{}", value, cursor), input_style(active)))
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_color_picker(frame: &mut Frame, area: Rect, value: &str, active: bool) {
    let swatch = match value.parse::<ReminderColor>() {
        Ok(color) => Span::styled("\u{25cf} ", Style::default().fg(color.to_ratatui())),
        Err(_) => Span::styled("? ", theme::current().error),
    };
    let arrows = if active { "\u{25c2}\u{25b8}" } else { "" };
    let line = Line::from(vec![
        swatch,
        Span::styled(value.to_string(), input_style(active)),
        Span::styled(arrows, theme::current().dim),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_date_picker(frame: &mut Frame, area: Rect, value: &str, active: bool) {
    let mut spans = Vec::new();
    if value.is_empty() {
        spans.push(Span::styled(DATE_FORMAT, theme::current().dim));
    } else {
        let cursor = if active { "_" } else { "" };
        spans.push(Span::styled(format!("{}{}", value, cursor), input_style(active)));
        if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT_CHRONO) {
            spans.push(Span::styled(format!(" {}", date.weekday()), theme::current().dim));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let line = Line::from(Span::styled(format!("! {}", message), theme::current().error));
        frame.render_widget(Paragraph::new(line), area);
    }
}
