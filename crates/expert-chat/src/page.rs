//! Builder-style helper for rendering the **HTML page**.
//!
//! Writing markup inline is tedious and it is easy to forget escaping.
//! `PageBuilder` offers a fluent API where every text argument is escaped
//! and every method returns `self`:
//!
//! ```rust
//! use expert_chat::page::PageBuilder;
//!
//! let html = PageBuilder::new()
//!     .add_heading_h1("Ask <anyone>")
//!     .add_paragraph("Fish & chips")
//!     .finalize();
//!
//! assert!(html.contains("<h1>Ask &lt;anyone&gt;</h1>"));
//! assert!(html.contains("<p>Fish &amp; chips</p>"));
//! ```
//!
//! [`render`] assembles the full page for a [`View`].

use std::fmt::Display;

use expert_chat_prompt::Expert;

use crate::flow::{Outcome, View};

pub const TITLE: &str = "Expert chat app powered by an LLM";
pub const ANSWER_HEADING: &str = "Answer from the LLM";

const STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem}\
.answer{white-space:pre-wrap}\
.error{color:#b00020;border:1px solid #b00020;padding:.5rem}";

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: impl Display) -> String {
    let text = text.to_string();
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Fluent helper to produce HTML fragments.
///
/// Internally it owns a `String` buffer that grows with each chained call.
/// Once you're done, call [`Self::finalize`] to obtain the markup.
pub struct PageBuilder {
    buffer: String,
}

impl Default for PageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PageBuilder {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Append trusted markup as is.
    fn raw(mut self, markup: &str) -> Self {
        self.buffer.push_str(markup);
        self.buffer.push('\n');
        self
    }

    fn element(self, tag: &str, attrs: &str, content: impl Display) -> Self {
        let markup = format!("<{tag}{attrs}>{}</{tag}>", escape(content));
        self.raw(&markup)
    }

    pub fn add_heading_h1(self, line: impl Display) -> Self {
        self.element("h1", "", line)
    }

    pub fn add_heading_h2(self, line: impl Display) -> Self {
        self.element("h2", "", line)
    }

    pub fn add_heading_h3(self, line: impl Display) -> Self {
        self.element("h3", "", line)
    }

    pub fn add_paragraph(self, line: impl Display) -> Self {
        self.element("p", "", line)
    }

    /// Add an ordered list, one `<li>` per item.
    pub fn add_ordered_list<I>(self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let items: String = items
            .into_iter()
            .map(|item| format!("<li>{}</li>", escape(item)))
            .collect();
        self.raw(&format!("<ol>{items}</ol>"))
    }

    /// Text whose line breaks and spacing must survive.
    pub fn add_preformatted(self, class: &str, content: impl Display) -> Self {
        let attrs = format!(" class=\"{}\"", escape(class));
        self.element("div", &attrs, content)
    }

    /// An error banner.
    pub fn add_error(self, message: impl Display) -> Self {
        self.element("div", " class=\"error\" role=\"alert\"", message)
    }

    /// Insert a `<hr>` delimiter.
    pub fn add_delimiter(self) -> Self {
        self.raw("<hr>")
    }

    /// Open the submit form.
    pub fn open_form(self, action: &str) -> Self {
        let markup = format!("<form method=\"post\" action=\"{}\">", escape(action));
        self.raw(&markup)
    }

    pub fn close_form(self) -> Self {
        self.raw("</form>")
    }

    /// A radio group; `checked` selects at most one option.
    pub fn add_radio_group<'a, I>(
        self,
        legend: impl Display,
        name: &str,
        options: I,
        checked: Option<&str>,
    ) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut markup = format!("<fieldset><legend>{}</legend>", escape(legend));
        for (value, label) in options {
            let mark = if checked == Some(value) { " checked" } else { "" };
            markup.push_str(&format!(
                "<label><input type=\"radio\" name=\"{}\" value=\"{}\"{mark}> {}</label><br>",
                escape(name),
                escape(value),
                escape(label),
            ));
        }
        markup.push_str("</fieldset>");
        self.raw(&markup)
    }

    /// A labelled single-line text input.
    pub fn add_text_input(self, label: impl Display, name: &str, value: &str) -> Self {
        let markup = format!(
            "<p><label for=\"{name}\">{}</label><br><input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{}\" size=\"60\"></p>",
            escape(label),
            escape(value),
            name = escape(name),
        );
        self.raw(&markup)
    }

    pub fn add_submit(self, label: impl Display) -> Self {
        let markup = format!("<p><button type=\"submit\">{}</button></p>", escape(label));
        self.raw(&markup)
    }

    /// Wrap the accumulated body into a complete document and consume the
    /// builder.
    pub fn finalize_document(self, title: impl Display) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
            escape(title),
            self.buffer,
        )
    }

    /// Retrieve the accumulated markup and consume the builder.
    pub fn finalize(self) -> String {
        self.buffer
    }
}

/// Render the whole page for `view`.
pub fn render(view: &View) -> String {
    let options = Expert::ALL.map(|expert| (expert.tag(), expert.label()));

    let page = PageBuilder::new()
        .add_heading_h1(TITLE)
        .add_heading_h3("App overview")
        .add_paragraph(
            "This app uses a large language model to answer as either a cooking expert or a \
             travel expert. Depending on your question, an AI with that expertise gives you \
             the best advice it can.",
        )
        .add_delimiter()
        .add_heading_h3("How to use")
        .add_ordered_list([
            "Choose the kind of expert (cooking or travel).",
            "Type your question.",
            "Press \"Send\" and the expert's answer is shown below.",
        ])
        .add_delimiter()
        .add_paragraph("If information is missing, the AI may ask you a follow-up question.")
        .open_form("/")
        .add_radio_group(
            "Choose the kind of expert:",
            "expert",
            options,
            view.expert.map(Expert::tag),
        )
        .add_text_input("Enter your question:", "question", &view.question)
        .add_submit("Send")
        .close_form();

    let page = match &view.outcome {
        None => page,
        Some(Outcome::Answered(answer)) => page
            .add_heading_h2(ANSWER_HEADING)
            .add_preformatted("answer", answer),
        Some(Outcome::Invalid(message)) | Some(Outcome::Failed(message)) => {
            page.add_error(message)
        }
    };

    page.finalize_document(TITLE)
}
