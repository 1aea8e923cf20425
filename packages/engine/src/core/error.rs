use thiserror::Error;
use wasm_bindgen::JsValue;

/// Every failure the scene, its controllers or the browser bridge can report.
///
/// None of these are fatal: a rejected spawn or a missing optional element
/// leaves the running simulation untouched.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("size `{0}` is not a whole number")]
    InvalidSize(String),

    #[error("size {size} is outside the allowed range 1..={max}")]
    SizeOutOfRange { size: i64, max: u32 },

    #[error("color `{0}` is not a #rgb or #rrggbb hex color")]
    InvalidColor(String),

    #[error("invalid settings: {0}")]
    Settings(String),

    #[error("settings are not valid JSON: {0}")]
    SettingsJson(#[from] serde_json::Error),

    #[error("no #{0} element on the page")]
    MissingElement(String),

    #[error("#{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },

    #[error("DOM call failed: {0}")]
    Dom(String),

    #[error("could not schedule periodic task: {0}")]
    Schedule(String),
}

impl SceneError {
    /// Wrap a thrown JS value from a DOM call.
    pub fn dom(err: JsValue) -> Self {
        SceneError::Dom(js_message(&err))
    }

    pub(crate) fn schedule(err: JsValue) -> Self {
        SceneError::Schedule(js_message(&err))
    }
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
