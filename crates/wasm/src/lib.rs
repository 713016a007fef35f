use serde::Serialize;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;

// ============================================================================
// Rewrite API Types
// ============================================================================

/// Result of rewriting a document's admonition markup.
#[derive(Debug, Clone, Serialize)]
pub struct RewriteSummary {
    /// The rewritten HTML document.
    pub html: String,
    /// Number of elements whose markers were relabeled.
    pub rewritten: usize,
}

// ============================================================================
// Rewrite API
// ============================================================================

/// Rewrites admonition markers in the given HTML into Bootstrap alert classes.
///
/// Elements whose class list carries `note` gain `alert` and `alert-info` and
/// lose `note`; elements carrying `warning` gain `alert` and `alert-warning`
/// and lose `warning`. All other markup passes through unchanged, so the
/// hosting page can call this once per document and use the result directly.
///
/// # Arguments
///
/// * `html` - The document markup to rewrite
///
/// # Returns
///
/// Returns the rewritten document as a string.
#[wasm_bindgen]
pub fn rewrite_alerts(html: &str) -> Result<String, JsError> {
    let (output, _) = admonify_bootstrap::rewrite_alerts(html)
        .map_err(|e| JsError::new(&format!("Rewrite error: {}", e)))?;
    Ok(output)
}

/// Rewrites admonition markers and reports how many elements were relabeled.
///
/// Same rewrite as [`rewrite_alerts`], returning `{ html, rewritten }` for
/// hosts that want the relabel count alongside the document.
///
/// # Example (JavaScript)
///
/// ```javascript
/// import { rewrite_alerts_summary } from './admonify_wasm';
///
/// const { html, rewritten } = rewrite_alerts_summary(document_markup);
/// ```
#[wasm_bindgen(js_name = rewrite_alerts_summary)]
pub fn rewrite_alerts_summary(html: &str) -> Result<JsValue, JsError> {
    let (output, rewritten) = admonify_bootstrap::rewrite_alerts(html)
        .map_err(|e| JsError::new(&format!("Rewrite error: {}", e)))?;

    let summary = RewriteSummary {
        html: output,
        rewritten,
    };

    serde_wasm_bindgen::to_value(&summary)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
