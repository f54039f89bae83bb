//! Tera templates for the browser pages, compiled into the binary.
//!
//! Every template is registered under an `.html` name with autoescaping on,
//! so values scraped from the upstream or typed into a form are escaped on
//! render.

use std::sync::Arc;

use serde::Serialize;
use tera::{Context, Tera};

use weekcast_core::AppError;

pub const INDEX: &str = "index.html";
pub const CITY_FORM: &str = "city_form.html";
pub const DATE_FORM: &str = "date_form.html";
pub const WEEK: &str = "week.html";
pub const DAY: &str = "day.html";
pub const USER_AGENT: &str = "useragent.html";

mod embedded {
    pub const INDEX: &str = include_str!("../templates/index.html");
    pub const CITY_FORM: &str = include_str!("../templates/city_form.html");
    pub const DATE_FORM: &str = include_str!("../templates/date_form.html");
    pub const WEEK: &str = include_str!("../templates/week.html");
    pub const DAY: &str = include_str!("../templates/day.html");
    pub const USER_AGENT: &str = include_str!("../templates/useragent.html");
}

/// Compiled page templates, cheap to clone.
#[derive(Clone)]
pub struct Templates {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for Templates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Templates").finish_non_exhaustive()
    }
}

impl Templates {
    pub fn new() -> Result<Self, AppError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_templates(vec![
            (INDEX, embedded::INDEX),
            (CITY_FORM, embedded::CITY_FORM),
            (DATE_FORM, embedded::DATE_FORM),
            (WEEK, embedded::WEEK),
            (DAY, embedded::DAY),
            (USER_AGENT, embedded::USER_AGENT),
        ])
        .map_err(|e| AppError::ConfigError(format!("Failed to compile templates: {e}")))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Renders a template that takes no variables.
    pub fn render_static(&self, name: &str) -> Result<String, AppError> {
        self.render_context(name, &Context::new())
    }

    /// Renders `name` with the fields of `data` as template variables.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, AppError> {
        let context = Context::from_serialize(data)
            .map_err(|e| AppError::ConfigError(format!("Invalid context for {name}: {e}")))?;
        self.render_context(name, &context)
    }

    fn render_context(&self, name: &str, context: &Context) -> Result<String, AppError> {
        self.tera
            .render(name, context)
            .map_err(|e| AppError::ConfigError(format!("Failed to render {name}: {e}")))
    }
}
