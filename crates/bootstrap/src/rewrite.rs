//! Rewrite entry points: one-shot, reader-based, and chunked streaming.

use std::cell::Cell;
use std::io::Read;
use std::rc::Rc;

use lol_html::{HtmlRewriter, OutputSink, RewriteStrSettings, Settings, element, rewrite_str};

use crate::alerts::relabel;
use crate::defaults::{note_to_alert, warning_to_alert};
use crate::error::RewriteError;

/// Rewrites admonition markers in a complete document held in memory.
///
/// Elements whose `class` attribute carries the `note` marker gain `alert`
/// and `alert-info` and lose `note`; elements carrying `warning` gain `alert`
/// and `alert-warning` and lose `warning`. Everything else passes through
/// byte for byte. Returns the rewritten document and the number of elements
/// relabeled; an element carrying both markers counts once per rule.
///
/// # Examples
///
/// ```
/// use admonify_bootstrap::rewrite_alerts;
///
/// let (html, rewritten) = rewrite_alerts("<div class=\"note\">Heads up</div>").unwrap();
/// assert_eq!(html, "<div class=\"alert alert-info\">Heads up</div>");
/// assert_eq!(rewritten, 1);
/// ```
pub fn rewrite_alerts(input: &str) -> Result<(String, usize), RewriteError> {
    let note = note_to_alert();
    let warning = warning_to_alert();
    let rewritten = Cell::new(0usize);

    let output = rewrite_str(
        input,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!(".note", |el| {
                    if relabel(el, &note)? {
                        rewritten.set(rewritten.get() + 1);
                    }
                    Ok(())
                }),
                element!(".warning", |el| {
                    if relabel(el, &warning)? {
                        rewritten.set(rewritten.get() + 1);
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )?;

    let rewritten = rewritten.get();
    if rewritten > 0 {
        log::debug!("Relabeled {} admonition elements to alerts", rewritten);
    }
    Ok((output, rewritten))
}

/// Rewrites admonition markers in a document read from a stream.
///
/// The input is fed through the rewriter in chunks, so the document is never
/// buffered whole on the input side. Returns the rewritten document and the
/// relabel count, like [`rewrite_alerts`].
pub fn rewrite_alerts_from_reader<R: Read>(mut reader: R) -> Result<(String, usize), RewriteError> {
    let mut output = Vec::new();
    let mut rewriter = AlertRewriter::new(|c: &[u8]| output.extend_from_slice(c));

    let mut buf = [0u8; 8 * 1024];
    loop {
        let read = reader.read(&mut buf)?;
        if read == 0 {
            break;
        }
        rewriter.write(&buf[..read])?;
    }
    let rewritten = rewriter.end()?;

    Ok((String::from_utf8(output)?, rewritten))
}

/// Streaming admonition rewriter over an output sink.
///
/// Chunk boundaries are invisible: feeding a document in arbitrary byte
/// slices, even ones splitting a tag or a multi-byte character, produces
/// output identical to [`rewrite_alerts`] on the whole document.
///
/// # Examples
///
/// ```
/// use admonify_bootstrap::AlertRewriter;
///
/// let mut output = Vec::new();
/// let mut rewriter = AlertRewriter::new(|c: &[u8]| output.extend_from_slice(c));
/// rewriter.write(b"<div class=\"warning\">Mi").unwrap();
/// rewriter.write(b"nd the gap</div>").unwrap();
/// let rewritten = rewriter.end().unwrap();
///
/// assert_eq!(
///     String::from_utf8(output).unwrap(),
///     "<div class=\"alert alert-warning\">Mind the gap</div>"
/// );
/// assert_eq!(rewritten, 1);
/// ```
pub struct AlertRewriter<O: OutputSink> {
    inner: HtmlRewriter<'static, O>,
    rewritten: Rc<Cell<usize>>,
}

impl<O: OutputSink> AlertRewriter<O> {
    /// Creates a rewriter that emits rewritten output into the sink.
    pub fn new(sink: O) -> Self {
        let rewritten = Rc::new(Cell::new(0usize));
        let note = note_to_alert();
        let warning = warning_to_alert();
        let note_count = Rc::clone(&rewritten);
        let warning_count = Rc::clone(&rewritten);

        let inner = HtmlRewriter::new(
            Settings {
                element_content_handlers: vec![
                    element!(".note", move |el| {
                        if relabel(el, &note)? {
                            note_count.set(note_count.get() + 1);
                        }
                        Ok(())
                    }),
                    element!(".warning", move |el| {
                        if relabel(el, &warning)? {
                            warning_count.set(warning_count.get() + 1);
                        }
                        Ok(())
                    }),
                ],
                ..Settings::default()
            },
            sink,
        );

        Self { inner, rewritten }
    }

    /// Feeds the next chunk of the document through the rewriter.
    pub fn write(&mut self, chunk: &[u8]) -> Result<(), RewriteError> {
        Ok(self.inner.write(chunk)?)
    }

    /// Finishes the document and returns the number of elements relabeled.
    pub fn end(self) -> Result<usize, RewriteError> {
        self.inner.end()?;
        let rewritten = self.rewritten.get();
        if rewritten > 0 {
            log::debug!("Relabeled {} admonition elements to alerts", rewritten);
        }
        Ok(rewritten)
    }
}
