//! Output renderer seam
//!
//! The registry owns the single output entry point and picks the renderer by
//! communication mode; encoding the list is left to the implementor.

use crate::error::{Outcome, Result};
use crate::list::NodeList;
use crate::options::{JsonFormat, TextFormat};

/// Encoder for a finished node list
pub trait ListRenderer {
    /// Structured-object encoding
    fn render_json(&mut self, list: &NodeList, status: Result<Outcome>, format: JsonFormat);

    /// Line-oriented text encoding
    fn render_text(&mut self, list: &NodeList, status: Result<Outcome>, format: TextFormat);
}
