//! Template building from embedded blocks.
//!
//! - [`host`] - Host collaborator contract and the directory-based host
//! - [`builder`] - Writing blocks to disk, garbage collection
//! - [`intercept`] - Render middleware running the builder first
//!
//! # Example
//!
//! ```
//! use ift::config::IftConfig;
//! use ift::templates::{BuildOutcome, ProjectHost, TemplateBuilder};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let source = temp.path().join("products.rb");
//! fs::write(&source, "class Products; end\n__END__\n@@ index.html\n<h1>Hi</h1>\n").unwrap();
//!
//! let config = IftConfig::default().resolve(temp.path());
//! let mut host = ProjectHost::new("products", &config, temp.path());
//! let mut builder = TemplateBuilder::new(&config);
//!
//! let outcome = builder.build(&mut host, &source).unwrap();
//! assert!(matches!(outcome, BuildOutcome::Built(_)));
//! assert!(temp.path().join("app/views/products/index.html").exists());
//! ```

pub mod builder;
pub mod host;
pub mod intercept;

pub use builder::{render_from_file, BuildOutcome, BuildReport, TemplateBuilder};
pub use host::{ProjectHost, TemplateHost};
pub use intercept::InFileTemplates;
