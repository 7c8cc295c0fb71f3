use super::*;

/// The host-side form control a binding is attached to.
///
/// Attribute names are the HTML ones (`type`, `min`, `max`, `maxlength`).
/// `attr` returns `None` for an absent attribute, which is not the same as an
/// attribute set to the empty string.
pub trait Control {
    fn attr(&self, name: &str) -> Option<String>;

    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    /// The declared type. HTML inputs default to `text`.
    fn kind(&self) -> String {
        self.attr("type").unwrap_or_else(|| "text".to_string())
    }
}

/// A plain in-memory control.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputControl {
    attrs: HashMap<String, String>,
    value: String,
}

impl InputControl {
    pub fn new(kind: &str) -> Self {
        let mut attrs = HashMap::new();
        attrs.insert("type".to_string(), kind.to_string());
        Self {
            attrs,
            value: String::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attrs
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.remove(&name.to_ascii_lowercase())
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Writes the value the way a user typing into the control would; no
    /// constraint is enforced.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}

impl Control for InputControl {
    fn attr(&self, name: &str) -> Option<String> {
        self.attrs.get(&name.to_ascii_lowercase()).cloned()
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }
}
