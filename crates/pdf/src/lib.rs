//! # maandkal-pdf
//!
//! HTML to PDF conversion and page setup for the calendar renderer.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["PageSetup"] -->|".css()"| B["@page rules"]
//!     C["HTML document"] -->|"render_pdf()"| D["PDF bytes"]
//!     D -->|"write_pdf()"| E["output file"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use maandkal_pdf::{DocumentMeta, PageSetup, render_pdf, write_pdf};
//!
//! let css = PageSetup::a5_landscape().css();
//! // ... assemble an HTML document that embeds `css` ...
//! let meta = DocumentMeta {
//!     title: "Maandkalender 2024".to_string(),
//!     author: "maandkal".to_string(),
//! };
//! let bytes = render_pdf(&html, &meta)?;
//! write_pdf(std::path::Path::new("Maandkalender 2024.pdf"), &bytes)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `page_setup` | Page geometry as document-level CSS |
//! | `render` | HTML to PDF conversion and output writing |
//! | `error` | Error types |

mod error;
mod page_setup;
mod render;

pub use error::PdfError;
pub use page_setup::PageSetup;
pub use render::{DocumentMeta, render_pdf, write_pdf};
