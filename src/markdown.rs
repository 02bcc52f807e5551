//! FAQ Markdown Renderer
//!
//! Renders FAQ answers with pulldown-cmark:
//! - Raw HTML in answers is shown as text, never injected
//! - Links open in a new tab; only http, https, mailto and relative URLs
//!   become anchors
//! - Images are constrained to the panel width

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Render an answer to HTML
pub fn render_answer(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

/// Plain-text preview of an answer (markup removed, whitespace collapsed)
pub fn answer_preview(text: &str, max_chars: usize) -> String {
    let mut plain = String::new();
    for event in Parser::new_ext(text, get_options()) {
        match event {
            Event::Text(t) | Event::Code(t) => plain.push_str(&t),
            Event::SoftBreak
            | Event::HardBreak
            | Event::End(TagEnd::Paragraph)
            | Event::End(TagEnd::Heading(_))
            | Event::End(TagEnd::Item) => plain.push(' '),
            _ => {}
        }
    }
    let collapsed = plain.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }
    let mut cut: String = collapsed.chars().take(max_chars).collect();
    cut.push('…');
    cut
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES
}

// State for the event transformer
enum State {
    Normal,
    InLink { anchored: bool },
    InImage { dropped_depth: usize, in_link: Option<bool> },
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    let mut state = State::Normal;

    for event in parser {
        match state {
            State::Normal => match event {
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),

                Event::Start(Tag::Link { dest_url, .. }) => {
                    let anchored = is_safe_url(&dest_url);
                    if anchored {
                        let html = format!(
                            r#"<a href="{}" target="_blank" rel="noopener noreferrer">"#,
                            escape_attr(&dest_url)
                        );
                        events.push(Event::Html(CowStr::from(html)));
                    } else {
                        log::debug!("dropping link with unsupported scheme: {}", dest_url);
                    }
                    state = State::InLink { anchored };
                }

                Event::Start(Tag::Image { dest_url, .. }) => {
                    push_image(&mut events, &dest_url);
                    state = State::InImage { dropped_depth: 0, in_link: None };
                }

                other => events.push(other),
            },

            State::InLink { anchored } => match event {
                Event::End(TagEnd::Link) => {
                    if anchored {
                        events.push(Event::Html(CowStr::from("</a>")));
                    }
                    state = State::Normal;
                }
                Event::Start(Tag::Image { dest_url, .. }) => {
                    push_image(&mut events, &dest_url);
                    state = State::InImage { dropped_depth: 0, in_link: Some(anchored) };
                }
                Event::Html(raw) | Event::InlineHtml(raw) => events.push(Event::Text(raw)),
                other => events.push(other),
            },

            State::InImage { ref mut dropped_depth, in_link } => match event {
                Event::Start(_) => *dropped_depth += 1,
                Event::End(_) => {
                    if *dropped_depth == 0 {
                        state = match in_link {
                            Some(anchored) => State::InLink { anchored },
                            None => State::Normal,
                        };
                    } else {
                        *dropped_depth -= 1;
                    }
                }
                _ => {}
            },
        }
    }

    events
}

// alt text is dropped by the caller; unsafe sources render nothing
fn push_image<'a>(events: &mut Vec<Event<'a>>, dest_url: &str) {
    if !is_safe_url(dest_url) {
        log::debug!("dropping image with unsupported scheme: {}", dest_url);
        return;
    }
    let html = format!(
        r#"<img src="{}" style="max-width: 100%; display: block; border-radius: 6px;" />"#,
        escape_attr(dest_url)
    );
    events.push(Event::Html(CowStr::from(html)));
}

/// Only `http`, `https`, `mailto` and scheme-less (relative) URLs are allowed
fn is_safe_url(url: &str) -> bool {
    let cleaned: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_control())
        .collect::<String>()
        .to_ascii_lowercase();
    match cleaned.find([':', '/', '?', '#']) {
        Some(i) if cleaned[i..].starts_with(':') => matches!(&cleaned[..i], "http" | "https" | "mailto"),
        _ => true,
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_markdown() {
        let html = render_answer("**중요**: 마이페이지에서 변경하세요.");
        assert!(html.contains("<strong>중요</strong>"));
        assert!(html.starts_with("<p>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_answer("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let inline = render_answer("hello <b>world</b>");
        assert!(!inline.contains("<b>"));
    }

    #[test]
    fn test_links_open_new_tab() {
        let html = render_answer("[도움말](https://example.com/help)");
        assert!(html.contains(r#"<a href="https://example.com/help" target="_blank" rel="noopener noreferrer">"#));
        assert!(html.contains("도움말</a>"));
    }

    #[test]
    fn test_image_drops_alt_text() {
        let html = render_answer("![설명](https://example.com/a.png)");
        assert!(html.contains(r#"<img src="https://example.com/a.png""#));
        assert!(!html.contains("설명"));
    }

    #[test]
    fn test_answer_preview() {
        assert_eq!(answer_preview("# 제목\n\n본문  **굵게**", 100), "제목 본문 굵게");
        assert_eq!(answer_preview("가나다라마", 3), "가나다…");
    }

    #[test]
    fn test_unsafe_link_schemes_render_as_text() {
        let html = render_answer("[문의](javascript:alert(document.cookie))");
        assert!(!html.contains("<a "));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("문의"));

        let mixed_case = render_answer("[x](JavaScript:alert(1)) [y](data:text/html,hi)");
        assert!(!mixed_case.contains("href"));
    }

    #[test]
    fn test_safe_link_schemes_kept() {
        assert!(render_answer("[메일](mailto:help@cookus.kr)").contains(r#"href="mailto:help@cookus.kr""#));
        assert!(render_answer("[안내](/guide?tab=1)").contains(r#"href="/guide?tab=1""#));
        assert!(is_safe_url("https://example.com/a:b"));
        assert!(!is_safe_url(" java\tscript:alert(1)"));
    }

    #[test]
    fn test_unsafe_image_dropped() {
        let html = render_answer("![x](javascript:alert(1))");
        assert!(!html.contains("<img"));
        assert!(!html.contains("javascript:"));

        let linked = render_answer("[![logo](javascript:alert(1))](https://example.com)");
        assert!(!linked.contains("javascript:"));
        assert!(linked.contains(r#"<a href="https://example.com""#));
        assert!(linked.contains("</a>"));
    }
}
