//! Transcript output.
//!
//! - [`HtmlRenderer`] - reusable renderer holding the compiled template
//! - [`write_html`] / [`to_html`] - one-shot helpers
//!
//! The document is self-contained: styles and the image viewer script are
//! inlined, and attachments are referenced relative to the conversation
//! folder the HTML file is written into.

mod html_writer;

pub use html_writer::{HtmlRenderer, to_html, write_html};
