//! Markdown utilities: word counts, plain text and HTML previews

use pulldown_cmark::{html, Event, Options, Parser, TagEnd};

/// Words per minute used when none is configured
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Count whitespace-delimited tokens in a markdown body
pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

/// Estimated reading time in minutes, rounded up
///
/// An empty body reads in zero minutes.
pub fn reading_time(body: &str, words_per_minute: u32) -> u32 {
    let wpm = words_per_minute.max(1) as usize;
    word_count(body).div_ceil(wpm) as u32
}

fn parser_options() -> Options {
    // Front-matter is split off before we get here, so no metadata blocks
    Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_GFM
}

/// Render a markdown body to HTML
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, parser_options());
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Strip markup from a markdown body, keeping text and code
pub fn plain_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new_ext(markdown, parser_options()) {
        match event {
            Event::Text(t) | Event::Code(t) => {
                text.push_str(&t);
            }
            // Inline ends must not split words
            Event::End(
                TagEnd::Emphasis
                | TagEnd::Strong
                | TagEnd::Strikethrough
                | TagEnd::Link
                | TagEnd::Image,
            ) => {}
            Event::SoftBreak | Event::HardBreak | Event::Rule | Event::End(_) => {
                text.push(' ');
            }
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
