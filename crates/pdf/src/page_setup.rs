//! Page geometry expressed as document-level CSS.

/// Page geometry for the rendered document.
///
/// The calendar prints on A5 landscape sheets with narrow margins. The
/// geometry is injected as an `@page` rule prepended to the user
/// stylesheet, so the rendering engine needs no engine-specific page
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    /// Page width in millimeters.
    pub width_mm: f32,
    /// Page height in millimeters.
    pub height_mm: f32,
    /// Uniform page margin in millimeters.
    pub margin_mm: f32,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::a5_landscape()
    }
}

impl PageSetup {
    /// A5 landscape (210 x 148 mm) with 5 mm margins.
    pub fn a5_landscape() -> Self {
        Self {
            width_mm: 210.0,
            height_mm: 148.0,
            margin_mm: 5.0,
        }
    }

    /// Returns the `@page` and page-break rules for this geometry.
    pub fn css(&self) -> String {
        format!(
            "@page {{ size: {}mm {}mm; margin: {}mm; }} .page {{ page-break-after: always; }}",
            self.width_mm, self.height_mm, self.margin_mm
        )
    }
}
