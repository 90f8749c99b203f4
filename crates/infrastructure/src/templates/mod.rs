//! Template engine module for rendering the reader page
//!
//! Uses the Tera templating engine. The page is rendered server-side from a
//! [`ViewSnapshot`]; templates are embedded at compile time and can be
//! replaced from a directory at startup.
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_reader_page(&session.snapshot())?;
//! ```

use std::path::Path;
use std::sync::Arc;

use application::ViewSnapshot;
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use thiserror::Error;
use tracing::{debug, info};

/// Name of the reader page template
pub const READER_PAGE: &str = "reader/index.html";

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(format!("{e:?}")),
        }
    }
}

/// Template engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Directory whose templates take precedence over the embedded ones
    #[serde(default)]
    pub templates_dir: Option<String>,
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const READER_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{{ title }}</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; margin: 0; display: flex; }
        aside { width: 16rem; padding: 1rem; background: #f2f4f8; min-height: 100vh; }
        main { flex: 1; padding: 1rem 2rem; max-width: 60rem; }
        .notice { padding: 0.5rem 1rem; border-radius: 4px; margin-bottom: 0.5rem; }
        .notice.success { background: #e3f6e8; color: #1b5e20; }
        .notice.error { background: #fdecea; color: #b71c1c; }
        textarea { width: 100%; min-height: 14rem; font-size: 1rem; }
        fieldset { border: 1px solid #ccd; margin: 1rem 0; }
        footer { margin-top: 2rem; color: #666; text-align: center; }
        button { font-size: 1rem; padding: 0.4rem 1rem; }
    </style>
</head>
<body>
<aside aria-label="Recent uploads">
    <h2>Recent Uploads</h2>
    {% if view.recent_uploads %}
    <ul>
        {% for name in view.recent_uploads %}<li>{{ name }}</li>
        {% endfor %}
    </ul>
    {% else %}
    <p>No uploads yet.</p>
    {% endif %}
</aside>
<main>
    <h1>{{ title }}</h1>
    <p>{{ subtitle }}</p>

    {% if view.notices %}
    <section aria-live="polite">
        {% for notice in view.notices %}<div class="notice {{ notice.level }}" role="{% if notice.level == "error" %}alert{% else %}status{% endif %}">{{ notice.message }}</div>
        {% endfor %}
        <form method="post" action="/notices/dismiss"><button type="submit">Dismiss</button></form>
    </section>
    {% endif %}

    <form method="post" action="/upload" enctype="multipart/form-data">
        <label for="file">Upload your study material</label>
        <input id="file" type="file" name="file" accept="{{ accept }}" required>
        <button type="submit">Upload</button>
    </form>

    {% if view.extracted_text %}
    <section>
        <h2>Extracted Text</h2>
        {% if view.file_name %}<p>{{ view.file_name }}{% if view.document_kind %} ({{ view.document_kind }}){% endif %}</p>{% endif %}
        <textarea readonly aria-label="Extracted text">{{ view.extracted_text }}</textarea>
        <p>Word count: <strong>{{ view.word_count }}</strong></p>
        <p>Detected language: <strong>{% if view.detected_language %}{{ view.detected_language }}{% else %}Unknown{% endif %}</strong></p>
    </section>
    {% endif %}

    <form method="post" action="/controls">
        <fieldset{% if view.busy %} disabled{% endif %}>
            <legend>Speech settings</legend>
            <label for="language">Language</label>
            <select id="language" name="language">
                {% for option in view.languages %}<option value="{{ option.code }}"{% if option.selected %} selected{% endif %}>{{ option.name }}</option>
                {% endfor %}
            </select>
            <label><input type="checkbox" name="override" value="true"{% if view.override_enabled %} checked{% endif %}> Use selected language instead of the detected one</label>
            <br>
            <label for="speed">Speed</label>
            <input id="speed" type="range" name="speed" min="{{ control_min }}" max="{{ control_max }}" step="{{ control_step }}" value="{{ view.speed }}">
            <label for="pitch">Pitch</label>
            <input id="pitch" type="range" name="pitch" min="{{ control_min }}" max="{{ control_max }}" step="{{ control_step }}" value="{{ view.pitch }}">
            <br>
            <button type="submit">Save settings</button>
            <button type="submit" formaction="/convert"{% if not view.can_convert %} disabled{% endif %}>Convert to Audio</button>
        </fieldset>
    </form>

    {% if view.audio_available %}
    <section>
        <h2>Listen</h2>
        <audio controls src="/audio"></audio>
        <p><a href="/audio/download" download="{{ download_name }}">Download Audio</a>{% if view.audio_size_bytes %} ({{ view.audio_size_bytes | filesizeformat }}){% endif %}</p>
    </section>
    {% endif %}

    <footer>Made with ❤️ for AlgoArena</footer>
</main>
</body>
</html>
"#;
}

/// Page title
pub const PAGE_TITLE: &str = "EduVision - Learn Without Limits";
/// Page subtitle
pub const PAGE_SUBTITLE: &str = "Empowering Visually Impaired Students Through AI";
/// File picker filter
pub const ACCEPTED_EXTENSIONS: &str = ".pdf,.txt,.png,.jpg,.jpeg,.docx,.doc,.pptx,.ppt";

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
    config: TemplateConfig,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a new template engine with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        Self::with_config(TemplateConfig::default())
    }

    /// Create a new template engine with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to compile.
    pub fn with_config(config: TemplateConfig) -> Result<Self, TemplateError> {
        let mut tera = match config.templates_dir.as_deref() {
            Some(dir) if Path::new(dir).is_dir() => {
                let custom = Tera::parse(&format!("{dir}/**/*.html"))
                    .map_err(|e| TemplateError::Compile(format!("{e:?}")))?;
                info!(dir = %dir, "Loaded custom templates");
                custom
            },
            Some(dir) => {
                debug!(dir = %dir, "Template directory missing, using embedded");
                Tera::default()
            },
            None => Tera::default(),
        };
        tera.autoescape_on(vec![".html", ".htm"]);

        if !tera.get_template_names().any(|name| name == READER_PAGE) {
            tera.add_raw_template(READER_PAGE, embedded::READER_PAGE)
                .map_err(|e| TemplateError::Compile(format!("{e:?}")))?;
        }
        tera.build_inheritance_chains()
            .map_err(|e| TemplateError::Compile(format!("{e:?}")))?;

        Ok(Self {
            tera: Arc::new(tera),
            config,
        })
    }

    /// Render a template with the given context
    ///
    /// # Errors
    ///
    /// Returns an error if the template is missing or rendering fails.
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, context)
            .map_err(TemplateError::from)
    }

    /// Render the reader page
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_reader_page(&self, view: &ViewSnapshot) -> Result<String, TemplateError> {
        let mut context = Context::new();
        context.insert("title", PAGE_TITLE);
        context.insert("subtitle", PAGE_SUBTITLE);
        context.insert("accept", ACCEPTED_EXTENSIONS);
        context.insert("control_min", &format!("{:.1}", domain::CONTROL_MIN));
        context.insert("control_max", &format!("{:.1}", domain::CONTROL_MAX));
        context.insert("control_step", &format!("{:.1}", domain::CONTROL_STEP));
        context.insert("download_name", domain::AUDIO_DOWNLOAD_FILE_NAME);
        context.insert("view", view);

        self.render(READER_PAGE, &context)
    }

    /// Check whether a template is registered
    #[must_use]
    pub fn template_exists(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}
