//! Rewrites admonition class markers (note, warning) into Bootstrap alert classes.

use lol_html::Selector;
use lol_html::errors::AttributeNameError;
use lol_html::html_content::Element;
use lol_html::{ElementContentHandlers, element};
use std::borrow::Cow;

use admonify_core::{MarkerRewrite, MarkerSet};

use crate::defaults::{note_to_alert, warning_to_alert};

/// Applies a relabel rule to the element's `class` attribute.
///
/// Returns true when the element carried the rule's marker and was relabeled.
/// Nothing but the `class` attribute is touched: tag name, other attributes,
/// and element content stay as they are.
pub(crate) fn relabel(el: &mut Element, rule: &MarkerRewrite) -> Result<bool, AttributeNameError> {
    let mut markers = MarkerSet::parse(&el.get_attribute("class").unwrap_or_default());
    if !rule.apply(&mut markers) {
        return Ok(false);
    }
    el.set_attribute("class", &markers.to_attr())?;
    Ok(true)
}

fn note_handler() -> (Cow<'static, Selector>, ElementContentHandlers<'static>) {
    element!(".note", |el| {
        relabel(el, &note_to_alert())?;
        Ok(())
    })
}

fn warning_handler() -> (Cow<'static, Selector>, ElementContentHandlers<'static>) {
    element!(".warning", |el| {
        relabel(el, &warning_to_alert())?;
        Ok(())
    })
}

/// Returns lol_html handlers for relabeling admonition markers to alert classes.
///
/// The handlers can be combined with further element handlers when embedding
/// the relabeling into a larger rewriting pass.
pub fn alert_handlers() -> Vec<(Cow<'static, Selector>, ElementContentHandlers<'static>)> {
    vec![note_handler(), warning_handler()]
}
