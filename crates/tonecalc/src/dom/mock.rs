//! Mock DOM
//!
//! A small element tree with id lookup, enough to exercise the calculator
//! markup (two display regions and the keypad buttons) without a browser.

use std::collections::HashMap;

use crate::keypad::Keypad;
use crate::render::{DisplayHost, DisplayRegion};

/// Attribute holding a button's token
pub const DATA_VALUE: &str = "data-value";

/// Number of most recent events [`MockDom`] remembers
pub const EVENT_HISTORY_LIMIT: usize = 64;

/// A DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the element ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events the calculator listens to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Keydown on the document
    KeyDown {
        /// Key name, e.g. `"7"` or `"Enter"`
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a keydown event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock DOM for driving the calculator without a browser
#[derive(Debug, Default)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator markup
    ///
    /// ```text
    /// div#calculator
    ///   div.display
    ///     div#display-input
    ///     div#display-result
    ///   div#calc-keypad
    ///     button#btn-clear[data-value=C] ...
    /// ```
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let mut display = DomElement::new("div").with_class("display");
        for region in DisplayRegion::ALL {
            let elem = DomElement::new("div")
                .with_id(region.element_id())
                .with_class(region_class(region));
            dom.register_element(elem.clone());
            display = display.with_child(elem);
        }

        let keypad = keypad_element(&Keypad::new());
        for button in &keypad.children {
            dom.register_element(button.clone());
        }

        dom.root = DomElement::new("div")
            .with_id("calculator")
            .with_class("calculator")
            .with_child(display)
            .with_child(keypad.clone());
        dom.register_element(keypad);
        dom
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Records an event, forgetting the oldest past [`EVENT_HISTORY_LIMIT`]
    pub fn dispatch_event(&mut self, event: DomEvent) {
        if self.event_history.len() == EVENT_HISTORY_LIMIT {
            self.event_history.remove(0);
        }
        self.event_history.push(event);
    }

    /// Gets the event history, oldest first
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// The `data-value` of a button element
    #[must_use]
    pub fn button_value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).and_then(|e| e.get_attr(DATA_VALUE))
    }
}

impl DisplayHost for MockDom {
    fn set_region_text(&mut self, region: DisplayRegion, text: &str) {
        self.set_element_text(region.element_id(), text);
    }
}

/// Builds `div#calc-keypad` with one button per keypad entry
#[must_use]
pub fn keypad_element(keypad: &Keypad) -> DomElement {
    keypad
        .buttons()
        .iter()
        .map(|btn| {
            DomElement::new("button")
                .with_id(&btn.id)
                .with_text(&btn.label())
                .with_class("keypad-btn")
                .with_class(&format!("keypad-row-{}", btn.row))
                .with_class(&format!("keypad-col-{}", btn.col))
                .with_attr(DATA_VALUE, &btn.value())
        })
        .fold(
            DomElement::new("div").with_id("calc-keypad").with_class("keypad"),
            DomElement::with_child,
        )
}

const fn region_class(region: DisplayRegion) -> &'static str {
    match region {
        DisplayRegion::Expression => "display-input",
        DisplayRegion::Result => "display-result",
    }
}
