//! View renderer - pure function from session state to a text frame

use ratatui::prelude::*;

use crate::app::state::{Pane, SessionState};
use crate::models::{Collection, ExecutionResult, RequestDefinition};

pub const HELP_TEXT: &str = "Tab: Switch Panes • ↑/↓: Navigate • Enter: Execute • q: Quit";

const ACCENT: Color = Color::Rgb(0x25, 0xA0, 0x65);
const FOREGROUND: Color = Color::Rgb(0xFF, 0xFD, 0xF5);

/// Rendering styles. Built once and handed to `render`.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub title: Style,
    pub active_title: Style,
    pub selected_item: Style,
    pub normal_item: Style,
    pub label: Style,
    pub muted: Style,
    pub error: Style,
    pub help: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            title: Style::default().fg(FOREGROUND).bg(Color::DarkGray),
            active_title: Style::default().fg(FOREGROUND).bg(ACCENT).bold(),
            selected_item: Style::default().fg(ACCENT).bold(),
            normal_item: Style::default().fg(FOREGROUND),
            label: Style::default().fg(Color::Cyan),
            muted: Style::default().fg(Color::DarkGray),
            error: Style::default().fg(Color::Red).bold(),
            help: Style::default().fg(FOREGROUND),
        }
    }
}

type Row = Vec<Span<'static>>;

/// Render the two panes side by side, padded to the viewport, with the help
/// line below. Same inputs always give the same output.
pub fn render(state: &SessionState, collection: &Collection, theme: &Theme) -> Text<'static> {
    let width = state.viewport_width as usize;
    let height = state.viewport_height as usize;
    let list_width = width / 3;
    let detail_width = width - list_width;
    let pane_height = height.saturating_sub(1);

    let list = list_pane(state, collection, theme, pane_height);
    let detail = detail_pane(state, collection, theme);

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(height.max(1));
    for row in 0..pane_height {
        let mut spans = fit(list.get(row), list_width);
        spans.extend(fit(detail.get(row), detail_width));
        lines.push(Line::from(spans));
    }
    let help = vec![Span::styled(HELP_TEXT, theme.help)];
    lines.push(Line::from(fit(Some(&help), width)));

    Text::from(lines)
}

fn title(text: &str, active: bool, theme: &Theme) -> Row {
    let style = if active { theme.active_title } else { theme.title };
    vec![Span::styled(format!(" {} ", text), style)]
}

fn list_pane(state: &SessionState, collection: &Collection, theme: &Theme, height: usize) -> Vec<Row> {
    let heading = if collection.name.is_empty() {
        "Requests".to_string()
    } else {
        format!("Requests ({})", one_line(&collection.name))
    };
    let mut rows = vec![title(&heading, state.active_pane == Pane::List, theme), Vec::new()];

    // Scroll so the cursor row stays visible
    let visible = height.saturating_sub(rows.len()).max(1);
    let offset = match state.selected {
        Some(i) if i >= visible => i + 1 - visible,
        _ => 0,
    };

    for (i, request) in collection.requests.iter().enumerate().skip(offset) {
        let is_cursor = state.selected == Some(i);
        let marker = if is_cursor { ">" } else { " " };
        let method_style = if is_cursor {
            theme.selected_item
        } else {
            Style::default().fg(method_color(request.method.as_str()))
        };
        let name_style = if is_cursor { theme.selected_item } else { theme.normal_item };

        rows.push(vec![
            Span::raw(format!("{} ", marker)),
            Span::styled(format!("{:<8}", request.method.as_str()), method_style),
            Span::styled(one_line(&request.name), name_style),
        ]);
    }

    rows
}

fn detail_pane(state: &SessionState, collection: &Collection, theme: &Theme) -> Vec<Row> {
    let mut rows = vec![
        title("Request Details", state.active_pane == Pane::Detail, theme),
        Vec::new(),
    ];

    let Some(request) = state.selected.and_then(|i| collection.get(i)) else {
        rows.push(vec![Span::styled("No request selected", theme.muted)]);
        return rows;
    };

    request_rows(request, theme, &mut rows);
    rows.push(Vec::new());

    if state.is_executing() {
        rows.push(vec![Span::styled("Executing...", theme.label)]);
    } else {
        match &state.last_result {
            Some(Ok(result)) => response_rows(result, theme, &mut rows),
            Some(Err(e)) => rows.push(vec![Span::styled(one_line(&format!("Request failed: {}", e)), theme.error)]),
            None => {}
        }
    }

    rows
}

fn request_rows(request: &RequestDefinition, theme: &Theme, rows: &mut Vec<Row>) {
    rows.push(vec![
        Span::styled("Method: ", theme.label),
        Span::styled(
            request.method.as_str().to_string(),
            Style::default().fg(method_color(request.method.as_str())).bold(),
        ),
    ]);
    rows.push(vec![Span::styled("URL: ", theme.label), Span::raw(one_line(&request.url))]);
    if !request.description.is_empty() {
        rows.push(vec![Span::styled(one_line(&request.description), theme.muted)]);
    }
    rows.push(Vec::new());

    rows.push(vec![Span::styled("Headers:", theme.label)]);
    for (key, value) in &request.headers {
        rows.push(vec![Span::raw(one_line(&format!("  {}: {}", key, value)))]);
    }

    if !request.body.is_empty() {
        rows.push(Vec::new());
        rows.push(vec![Span::styled("Body:", theme.label)]);
        for line in request.body.lines() {
            rows.push(vec![Span::raw(one_line(line))]);
        }
    }
}

fn response_rows(result: &ExecutionResult, theme: &Theme, rows: &mut Vec<Row>) {
    rows.push(vec![
        Span::styled("Response: ", theme.label),
        Span::styled(
            result.status_code.to_string(),
            Style::default().fg(status_color(result.status_code)).bold(),
        ),
        Span::styled(
            format!(
                " ({}ms at {})",
                result.duration.as_millis(),
                result.received_at.format("%H:%M:%S")
            ),
            theme.muted,
        ),
    ]);
    for (key, value) in &result.headers {
        rows.push(vec![Span::styled(one_line(&format!("  {}: {}", key, value)), theme.muted)]);
    }
    if !result.body.is_empty() {
        rows.push(Vec::new());
        for line in result.body.lines() {
            rows.push(vec![Span::raw(one_line(line))]);
        }
    }
}

/// Flatten text from the document onto a single row. Control characters
/// (line breaks, tabs) become spaces so they cannot shift the layout.
fn one_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Clip a row to `width` characters and pad it with spaces to exactly that.
fn fit(row: Option<&Row>, width: usize) -> Row {
    let mut out = Vec::new();
    let mut used = 0;

    for span in row.into_iter().flatten() {
        if used == width {
            break;
        }
        let len = span.content.chars().count();
        if used + len <= width {
            out.push(span.clone());
            used += len;
        } else {
            let clipped: String = span.content.chars().take(width - used).collect();
            out.push(Span::styled(clipped, span.style));
            used = width;
        }
    }

    if used < width {
        out.push(Span::raw(" ".repeat(width - used)));
    }
    out
}

/// Status code color
pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Red,
        500..=599 => Color::Magenta,
        _ => Color::Yellow,
    }
}

/// Method color
pub fn method_color(method: &str) -> Color {
    match method {
        "GET" => Color::Green,
        "POST" => Color::Yellow,
        "PUT" => Color::Blue,
        "PATCH" => Color::Cyan,
        "DELETE" => Color::Red,
        _ => Color::White,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecuteError;
    use crate::models::HttpMethod;
    use std::collections::BTreeMap;
    use std::time::Duration;

    fn plain(text: &Text) -> Vec<String> {
        text.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn demo() -> Collection {
        let mut collection = Collection::new("demo");
        collection.add_request(
            RequestDefinition::new("ping", HttpMethod::GET, "http://x/ping").with_header("Accept", "text/plain"),
        );
        collection.add_request(
            RequestDefinition::new("create", HttpMethod::POST, "http://x/items").with_body("{\"id\":1}"),
        );
        collection
    }

    fn sized(collection: &Collection, width: u16, height: u16) -> SessionState {
        let mut state = SessionState::new(collection);
        state.resize(width, height);
        state
    }

    #[test]
    fn test_frame_fills_viewport() {
        let collection = demo();
        let state = sized(&collection, 90, 20);
        let lines = plain(&render(&state, &collection, &Theme::default()));

        assert_eq!(lines.len(), 20);
        for line in &lines[..19] {
            assert_eq!(line.chars().count(), 90);
        }
        assert!(lines[19].starts_with("Tab: Switch Panes"));
    }

    #[test]
    fn test_panes_split_one_third() {
        let collection = demo();
        let state = sized(&collection, 90, 20);
        let lines = plain(&render(&state, &collection, &Theme::default()));

        assert!(lines[0].starts_with(" Requests (demo) "));
        assert_eq!(&lines[0][30..47], " Request Details ");
    }

    #[test]
    fn test_cursor_row_marked() {
        let collection = demo();
        let mut state = sized(&collection, 90, 20);
        let lines = plain(&render(&state, &collection, &Theme::default()));
        assert!(lines[2].starts_with("> GET     ping"));
        assert!(lines[3].starts_with("  POST    create"));

        state.move_down(&collection);
        let lines = plain(&render(&state, &collection, &Theme::default()));
        assert!(lines[2].starts_with("  GET     ping"));
        assert!(lines[3].starts_with("> POST    create"));
    }

    #[test]
    fn test_detail_shows_selected_request() {
        let collection = demo();
        let mut state = sized(&collection, 90, 20);
        state.move_down(&collection);
        let lines = plain(&render(&state, &collection, &Theme::default()));
        let panes = &lines[..lines.len() - 1];
        let detail: Vec<&str> = panes.iter().map(|l| l[30..].trim_end()).collect();

        assert!(detail.contains(&"Method: POST"));
        assert!(detail.contains(&"URL: http://x/items"));
        assert!(detail.contains(&"Body:"));
        assert!(detail.contains(&"{\"id\":1}"));
    }

    #[test]
    fn test_placeholder_when_empty() {
        let collection = Collection::new("empty");
        let state = sized(&collection, 60, 10);
        let lines = plain(&render(&state, &collection, &Theme::default()));
        assert_eq!(lines[2][20..].trim_end(), "No request selected");
    }

    #[test]
    fn test_render_is_idempotent() {
        let collection = demo();
        let state = sized(&collection, 80, 24);
        let theme = Theme::default();
        assert_eq!(render(&state, &collection, &theme), render(&state, &collection, &theme));
    }

    #[test]
    fn test_result_and_failure_rendering() {
        let collection = demo();
        let mut state = sized(&collection, 90, 24);
        state.last_result = Some(Ok(ExecutionResult {
            status_code: 200,
            headers: BTreeMap::from([("content-type".to_string(), "text/plain".to_string())]),
            body: "pong".to_string(),
            duration: Duration::from_millis(12),
            received_at: chrono::Utc::now(),
        }));
        let text = plain(&render(&state, &collection, &Theme::default())).join("\n");
        assert!(text.contains("Response: 200 (12ms at "));
        assert!(text.contains("content-type: text/plain"));
        assert!(text.contains("pong"));

        state.last_result = Some(Err(ExecuteError::Timeout(Duration::from_secs(30))));
        let text = plain(&render(&state, &collection, &Theme::default())).join("\n");
        assert!(text.contains("Request failed: request timed out after 30s"));
    }

    #[test]
    fn test_executing_indicator() {
        let collection = demo();
        let mut state = sized(&collection, 90, 24);
        state.activate(&collection);
        let text = plain(&render(&state, &collection, &Theme::default())).join("\n");
        assert!(text.contains("Executing..."));
    }

    #[test]
    fn test_list_scrolls_to_cursor() {
        let mut collection = Collection::new("many");
        for i in 0..20 {
            collection.add_request(RequestDefinition::new(format!("req{:02}", i), HttpMethod::GET, "http://x"));
        }
        let mut state = sized(&collection, 90, 8);
        for _ in 0..15 {
            state.move_down(&collection);
        }
        let lines = plain(&render(&state, &collection, &Theme::default()));
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().any(|l| l.starts_with("> GET     req15")));
    }

    #[test]
    fn test_long_methods_keep_a_gap() {
        let mut collection = Collection::new("demo");
        collection.add_request(RequestDefinition::new("preflight", HttpMethod::OPTIONS, "http://x"));
        collection.add_request(RequestDefinition::new("tunnel", HttpMethod::CONNECT, "http://x"));
        let state = sized(&collection, 90, 10);
        let lines = plain(&render(&state, &collection, &Theme::default()));

        assert!(lines[2].starts_with("> OPTIONS preflight"));
        assert!(lines[3].starts_with("  CONNECT tunnel"));
    }

    #[test]
    fn test_line_breaks_in_fields_keep_layout() {
        let mut collection = Collection::new("two\nlines");
        collection.add_request(
            RequestDefinition::new("multi\nline", HttpMethod::GET, "http://x/\r\nsplit")
                .with_header("X-Note", "a\tb"),
        );
        let state = sized(&collection, 90, 12);
        let lines = plain(&render(&state, &collection, &Theme::default()));

        assert_eq!(lines.len(), 12);
        for line in &lines[..11] {
            assert_eq!(line.chars().count(), 90);
            assert!(!line.chars().any(char::is_control));
        }
        assert!(lines[0].starts_with(" Requests (two lines) "));
        assert!(lines[2].starts_with("> GET     multi line"));
        assert!(lines.iter().any(|l| l.contains("URL: http://x/  split")));
    }

    #[test]
    fn test_zero_viewport() {
        let collection = demo();
        let state = SessionState::new(&collection);
        let lines = plain(&render(&state, &collection, &Theme::default()));
        assert_eq!(lines, vec![String::new()]);
    }
}
