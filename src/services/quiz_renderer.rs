use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    constants::ANSWER_COLOR,
    models::domain::{BodyLine, QuestionBlock, RenderedQuestion},
};

static OPTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-D]):\s*(.*)$").expect("OPTION_LINE is a valid regex pattern"));

fn is_answer_line(line: &str) -> bool {
    line.to_lowercase().starts_with("answer:")
}

fn parse_option(line: &str) -> Option<BodyLine> {
    let caps = OPTION_LINE.captures(line)?;
    let letter = caps.get(1)?.as_str().chars().next()?;
    let text = caps.get(2).map_or("", |m| m.as_str());

    Some(BodyLine::Option {
        letter,
        text: text.to_string(),
    })
}

/// Renders one block for display. Block content is never validated: a block without
/// options or an answer line is rendered as plain text.
pub fn render_block(block: &QuestionBlock) -> RenderedQuestion {
    let mut body = Vec::new();
    let mut answer = None;

    for line in block.lines().map(str::trim) {
        if is_answer_line(line) {
            // last one wins
            answer = Some(line.to_string());
            continue;
        }

        body.push(parse_option(line).unwrap_or_else(|| BodyLine::Text {
            text: line.to_string(),
        }));
    }

    let html = to_html(&body, answer.as_deref());
    RenderedQuestion { body, answer, html }
}

fn to_html(body: &[BodyLine], answer: Option<&str>) -> String {
    let body_html = body
        .iter()
        .map(|line| match line {
            BodyLine::Option { letter, text } => {
                format!("<b>{}:</b> {}", letter, html_escape::encode_text(text))
            }
            BodyLine::Text { text } => html_escape::encode_text(text).into_owned(),
        })
        .collect::<Vec<_>>()
        .join("<br>");

    let mut html = format!(
        "<div class=\"question-block\"><div class=\"question-body\">{}</div>",
        body_html
    );
    if let Some(answer) = answer {
        html.push_str(&format!(
            "<p class=\"answer\" style=\"color: {}; font-weight: bold;\">{}</p>",
            ANSWER_COLOR,
            html_escape::encode_text(answer)
        ));
    }
    html.push_str("</div>");
    html
}
