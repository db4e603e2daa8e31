//! Browser clipboard strategies, tried in this order:
//!
//! 1. [`AsyncClipboard`] - `navigator.clipboard.writeText`
//! 2. [`ExecCommandClipboard`] - hidden `<textarea>` + `document.execCommand("copy")`

use futures_util::future::{FutureExt, LocalBoxFuture};
use gateway_landing_core::{ClipboardChain, ClipboardStrategy, CopyError, CopyResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlDocument, HtmlElement, HtmlTextAreaElement};

use crate::platform::describe;

/// The chain used by the page
pub fn browser_clipboard() -> ClipboardChain {
    ClipboardChain::new()
        .with(AsyncClipboard)
        .with(ExecCommandClipboard)
}

fn failure(value: JsValue) -> CopyError {
    CopyError::failed(describe(&value))
}

// ─────────────────────────────────────────────────────────────────────────────
// Async Clipboard API
// ─────────────────────────────────────────────────────────────────────────────

pub struct AsyncClipboard;

impl AsyncClipboard {
    /// `navigator.clipboard`, if it exists and can write text.
    ///
    /// Missing outside secure contexts and in some embedded web views.
    fn clipboard() -> Option<web_sys::Clipboard> {
        let clipboard = web_sys::window()?.navigator().clipboard();
        let value: &JsValue = clipboard.as_ref();
        if value.is_undefined() || value.is_null() {
            return None;
        }
        Some(clipboard)
    }
}

impl ClipboardStrategy for AsyncClipboard {
    fn name(&self) -> &'static str {
        "navigator.clipboard"
    }

    fn is_available(&self) -> bool {
        Self::clipboard().is_some()
    }

    fn write<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, CopyResult<()>> {
        async move {
            let clipboard = Self::clipboard().ok_or(CopyError::Unavailable)?;
            JsFuture::from(clipboard.write_text(text))
                .await
                .map(|_| ())
                .map_err(failure)
        }
        .boxed_local()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Legacy execCommand fallback
// ─────────────────────────────────────────────────────────────────────────────

pub struct ExecCommandClipboard;

fn document() -> Option<Document> {
    web_sys::window()?.document()
}

impl ExecCommandClipboard {
    fn copy_with_textarea(text: &str) -> CopyResult<()> {
        let document = document().ok_or(CopyError::Unavailable)?;
        let body = document
            .body()
            .ok_or_else(|| CopyError::failed("document has no body"))?;

        let textarea: HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(failure)?
            .dyn_into()
            .map_err(|_| CopyError::failed("created element is not a textarea"))?;
        textarea.set_value(text);

        let style = textarea.style();
        for (property, value) in [("position", "fixed"), ("top", "0"), ("left", "0"), ("opacity", "0")] {
            style.set_property(property, value).map_err(failure)?;
        }

        body.append_child(&textarea).map_err(failure)?;
        let outcome = Self::select_and_copy(&document, &textarea);
        let _ = body.remove_child(&textarea);

        // execCommand's return value is unreliable across browsers; only a
        // thrown error counts as failure.
        match outcome {
            Ok(accepted) => {
                if !accepted {
                    log::debug!("execCommand('copy') returned false, assuming success");
                }
                Ok(())
            }
            Err(e) => Err(failure(e)),
        }
    }

    fn select_and_copy(document: &Document, textarea: &HtmlTextAreaElement) -> Result<bool, JsValue> {
        let element: &HtmlElement = textarea.as_ref();
        element.focus()?;
        textarea.select();
        document.unchecked_ref::<HtmlDocument>().exec_command("copy")
    }
}

impl ClipboardStrategy for ExecCommandClipboard {
    fn name(&self) -> &'static str {
        "document.execCommand"
    }

    fn is_available(&self) -> bool {
        document().is_some()
    }

    fn write<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, CopyResult<()>> {
        async move { Self::copy_with_textarea(text) }.boxed_local()
    }
}
