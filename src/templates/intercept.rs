//! Render interception.
//!
//! Hosts call [`InFileTemplates::render`] around their own render step. The
//! builder runs first so the generated files exist by the time the host
//! resolves its templates, then control passes to the `next` continuation.

use std::path::Path;

use super::builder::{BuildOutcome, TemplateBuilder};
use super::host::TemplateHost;
use crate::config::IftConfig;
use crate::error::Result;

/// Render middleware materializing in-file templates.
#[derive(Debug)]
pub struct InFileTemplates {
    builder: TemplateBuilder,
}

impl InFileTemplates {
    /// Create the middleware from configuration.
    pub fn new(config: &IftConfig) -> Self {
        Self::from_builder(TemplateBuilder::new(config))
    }

    /// Create the middleware around an existing builder.
    pub fn from_builder(builder: TemplateBuilder) -> Self {
        Self { builder }
    }

    /// Get the underlying builder.
    pub fn builder(&mut self) -> &mut TemplateBuilder {
        &mut self.builder
    }

    /// Build the templates embedded in `source_file`, then render.
    ///
    /// A build failure is returned as is and `next` is not called.
    pub fn render<H, T, F>(&mut self, host: &mut H, source_file: &Path, next: F) -> Result<T>
    where
        H: TemplateHost + ?Sized,
        F: FnOnce(&mut H) -> Result<T>,
    {
        if let BuildOutcome::Built(report) = self.builder.build(host, source_file)? {
            tracing::debug!(
                "Rendering after writing {} and skipping {} template(s)",
                report.written.len(),
                report.skipped.len()
            );
        }
        next(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IftError;
    use crate::templates::ProjectHost;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (TempDir, IftConfig, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("products.rb");
        fs::write(
            &source,
            "class Products; end\n__END__\n@@ index.html\nHello\n",
        )
        .unwrap();
        let config = IftConfig::default().resolve(temp.path());
        (temp, config, source)
    }

    #[test]
    fn templates_exist_when_next_runs() {
        let (temp, config, source) = setup();
        let mut host = ProjectHost::new("products", &config, temp.path());
        let mut ift = InFileTemplates::new(&config);

        let body = ift
            .render(&mut host, &source, |host| {
                let path = host.path_for("index.html");
                Ok(fs::read_to_string(path)?)
            })
            .unwrap();

        assert_eq!(body, "Hello\n");
    }

    #[test]
    fn next_sees_prepared_roots() {
        let (temp, mut config, source) = setup();
        config.view_root = Some(temp.path().join("custom"));
        let mut host = ProjectHost::new("products", &config, temp.path());
        let mut ift = InFileTemplates::new(&config);

        let roots = ift
            .render(&mut host, &source, |host| Ok(host.search_roots().to_vec()))
            .unwrap();

        assert_eq!(roots[0], temp.path().join("custom"));
    }

    #[test]
    fn build_error_skips_next() {
        let (temp, config, _source) = setup();
        let mut host = ProjectHost::new("products", &config, temp.path());
        let mut ift = InFileTemplates::new(&config);
        let mut called = false;

        let result = ift.render(&mut host, &temp.path().join("missing.rb"), |_| {
            called = true;
            Ok(())
        });

        assert!(matches!(result, Err(IftError::SourceUnreadable { .. })));
        assert!(!called);
    }

    #[test]
    fn repeated_renders_build_once() {
        let (temp, config, source) = setup();
        let mut host = ProjectHost::new("products", &config, temp.path());
        let mut ift = InFileTemplates::new(&config);

        ift.render(&mut host, &source, |_| Ok(())).unwrap();
        fs::remove_file(&source).unwrap();
        ift.render(&mut host, &source, |_| Ok(())).unwrap();

        assert!(ift.builder().is_built("products"));
    }

    #[test]
    fn next_errors_propagate() {
        let (temp, config, source) = setup();
        let mut host = ProjectHost::new("products", &config, temp.path());
        let mut ift = InFileTemplates::new(&config);

        let result: Result<()> = ift.render(&mut host, &source, |_| {
            Err(IftError::TemplateNotFound {
                name: "edit.html".into(),
                source_file: source.clone(),
            })
        });

        assert!(matches!(result, Err(IftError::TemplateNotFound { .. })));
    }
}
