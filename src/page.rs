//! Page surface: text sinks and localizable elements
//!
//! The bootstrap never touches a concrete UI toolkit. Everything it writes goes
//! through [`RenderTarget::set_text`], and localization targets are found via
//! [`Localizable::i18n_key`].

/// Id of the element that receives the bootstrap output.
pub const OUTPUT_ELEMENT_ID: &str = "out";

/// Something whose text content can be replaced.
pub trait RenderTarget {
    /// Replace the whole text content.
    fn set_text(&mut self, value: &str);
}

/// A render target tagged with a localization key (`data-i18n`).
pub trait Localizable: RenderTarget {
    /// The localization key, if the element carries one.
    fn i18n_key(&self) -> Option<&str>;
}

impl RenderTarget for String {
    fn set_text(&mut self, value: &str) {
        self.clear();
        self.push_str(value);
    }
}

/// A single element of an in-memory page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Element id (`id="..."`)
    id: Option<String>,
    /// Localization key (`data-i18n="..."`)
    i18n_key: Option<String>,
    /// Current text content
    text: String,
}

impl Element {
    /// Create an element with the given text and no attributes.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { id: None, i18n_key: None, text: text.into() }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    #[must_use]
    pub fn with_i18n_key(mut self, key: impl Into<String>) -> Self {
        self.i18n_key = Some(key.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl RenderTarget for Element {
    fn set_text(&mut self, value: &str) {
        self.text.set_text(value);
    }
}

impl Localizable for Element {
    fn i18n_key(&self) -> Option<&str> {
        self.i18n_key.as_deref()
    }
}

/// An ordered collection of elements standing in for the HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Elements in document order
    elements: Vec<Element>,
}

impl Page {
    #[must_use]
    pub const fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Append an element (builder style).
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// All elements in document order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// First element with the given id.
    #[must_use]
    pub fn element_by_id(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == Some(id))
    }

    pub fn element_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|element| element.id() == Some(id))
    }

    /// Elements carrying a localization key, i.e. `querySelectorAll('[data-i18n]')`.
    pub fn localizable_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut().filter(|element| element.i18n_key.is_some())
    }
}

impl FromIterator<Element> for Page {
    fn from_iter<T: IntoIterator<Item = Element>>(iter: T) -> Self {
        Self { elements: iter.into_iter().collect() }
    }
}
