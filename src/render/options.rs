//! Rendering options and configuration.

/// Default CSS class of the container wrapping link lines.
pub const DEFAULT_LINK_LIST_CLASS: &str = "linklist";

/// Default initial capacity of the output buffer, in bytes.
pub const DEFAULT_CAPACITY: usize = 100_000;

/// Options for rendering lines to HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// CSS class of the `<ul>` wrapping consecutive link lines
    pub link_list_class: String,

    /// Initial capacity of the output buffer
    pub capacity: usize,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the link list class.
    pub fn with_link_list_class(mut self, class: impl Into<String>) -> Self {
        self.link_list_class = class.into();
        self
    }

    /// Set the initial output buffer capacity.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            link_list_class: DEFAULT_LINK_LIST_CLASS.to_string(),
            capacity: DEFAULT_CAPACITY,
        }
    }
}
