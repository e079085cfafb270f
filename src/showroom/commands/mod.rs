use crate::config::ShowroomConfig;
use crate::model::{Category, Product};

pub mod config;
pub mod list;
pub mod login;
pub mod resolve;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Page heading, when the result stands for a whole page.
    pub heading: Option<String>,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub config: Option<ShowroomConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn with_products<'a, I>(mut self, products: I) -> Self
    where
        I: IntoIterator<Item = &'a Product>,
    {
        self.products = products.into_iter().cloned().collect();
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_config(mut self, config: ShowroomConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}
