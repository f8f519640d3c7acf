//! Rendering adapters.

mod html;

pub use html::{html_escape, render_explanation, render_prompt};
