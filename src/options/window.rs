use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Window creation parameters.
pub struct WindowOptions {
    /// Logical window width in pixels.
    pub width: u32,
    /// Logical window height in pixels.
    pub height: u32,
    /// Window title.
    pub title: String,
    /// Capture and hide the cursor for fly-look.
    pub grab_cursor: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 850,
            title: "faceta".into(),
            grab_cursor: true,
        }
    }
}
