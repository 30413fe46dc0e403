//! Line-oriented front end writing to any byte sink.

use async_trait::async_trait;
use std::{
    io::Write,
    sync::{Mutex, PoisonError},
};

use crate::conversation::{
    domain::{ConversationId, MessageRef, SelectableOption},
    ports::{FrontEnd, FrontEndError, FrontEndResult},
};

/// Writes replies as plain lines, one conversation interleaved with any
/// other.
///
/// Selectable options are rendered as `[n] label` below the prompt.
#[derive(Debug)]
pub struct ConsoleFrontEnd<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> ConsoleFrontEnd<W> {
    /// Wraps a writer.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Returns the writer, consuming the front end.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lines(&self, lines: &[String]) -> FrontEndResult<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        for line in lines {
            writeln!(out, "{line}").map_err(FrontEndError::transport)?;
        }
        out.flush().map_err(FrontEndError::transport)
    }
}

#[async_trait]
impl<W: Write + Send> FrontEnd for ConsoleFrontEnd<W> {
    async fn send_text(&self, _conversation: &ConversationId, text: &str) -> FrontEndResult<()> {
        self.write_lines(&[text.to_owned()])
    }

    async fn send_selectable_list(
        &self,
        _conversation: &ConversationId,
        text: &str,
        options: &[SelectableOption],
    ) -> FrontEndResult<()> {
        let lines: Vec<String> = std::iter::once(text.to_owned())
            .chain(
                options
                    .iter()
                    .zip(1_usize..)
                    .map(|(option, number)| format!("  [{number}] {}", option.label())),
            )
            .collect();
        self.write_lines(&lines)
    }

    async fn edit_message(
        &self,
        _conversation: &ConversationId,
        message: &MessageRef,
        text: &str,
    ) -> FrontEndResult<()> {
        self.write_lines(&[format!("(edited {message}) {text}")])
    }
}
