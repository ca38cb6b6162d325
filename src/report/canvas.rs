//! Page canvas: fixed page geometry, a vertical cursor and the text/image
//! operations placed on each page.
//!
//! Layouts are built here first and serialized to PDF afterwards, so the
//! page arithmetic can be inspected without parsing PDF output.

/// Points per centimetre.
pub const CM: f32 = 28.346_457;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageGeometry {
    /// A4 portrait with a 2 cm margin.
    pub fn a4() -> Self {
        Self {
            width: 595.2756,
            height: 841.8898,
            margin: 2.0 * CM,
        }
    }

    /// Initial cursor of every page.
    pub fn top(&self) -> f32 {
        self.height - self.margin
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
    Oblique,
}

impl Face {
    pub fn base_font(&self) -> &'static [u8] {
        match self {
            Face::Regular => b"Helvetica",
            Face::Bold => b"Helvetica-Bold",
            Face::Oblique => b"Helvetica-Oblique",
        }
    }

    /// Resource name used in page content streams.
    pub fn resource(&self) -> &'static [u8] {
        match self {
            Face::Regular => b"F1",
            Face::Bold => b"F2",
            Face::Oblique => b"F3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub face: Face,
    pub align: Align,
    pub text: String,
}

impl TextOp {
    /// Left edge of the rendered string.
    pub fn start_x(&self) -> f32 {
        match self.align {
            Align::Left => self.x,
            Align::Center => self.x - text_width(&self.text, self.size, self.face) / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageOp {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub texts: Vec<TextOp>,
    pub image: Option<ImageOp>,
}

impl PageLayout {
    pub fn contains(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t.text.contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub geometry: PageGeometry,
    pub pages: Vec<PageLayout>,
}

impl ReportLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextOp> {
        self.pages.iter().flat_map(|p| p.texts.iter())
    }
}

pub struct Canvas {
    geometry: PageGeometry,
    pages: Vec<PageLayout>,
    current: PageLayout,
    face: Face,
    size: f32,
    /// Vertical cursor on the current page, in points from the bottom edge.
    pub y: f32,
}

impl Canvas {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            current: PageLayout::default(),
            face: Face::Regular,
            size: 10.0,
            y: geometry.top(),
        }
    }

    pub fn geometry(&self) -> PageGeometry {
        self.geometry
    }

    pub fn set_font(&mut self, face: Face, size: f32) {
        self.face = face;
        self.size = size;
    }

    pub fn draw_string(&mut self, x: f32, y: f32, text: impl Into<String>) {
        self.push_text(x, y, Align::Left, text.into());
    }

    pub fn draw_centred_string(&mut self, x: f32, y: f32, text: impl Into<String>) {
        self.push_text(x, y, Align::Center, text.into());
    }

    pub fn draw_image(&mut self, image: ImageOp) {
        self.current.image = Some(image);
    }

    /// Close the current page and reset the cursor to the top margin.
    pub fn show_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
        self.y = self.geometry.top();
    }

    pub fn finish(mut self) -> ReportLayout {
        self.pages.push(self.current);
        ReportLayout {
            geometry: self.geometry,
            pages: self.pages,
        }
    }

    fn push_text(&mut self, x: f32, y: f32, align: Align, text: String) {
        self.current.texts.push(TextOp {
            x,
            y,
            size: self.size,
            face: self.face,
            align,
            text,
        });
    }
}

/// Approximate Helvetica advance width, enough to center headings.
pub fn text_width(text: &str, size: f32, face: Face) -> f32 {
    let units: u32 = text
        .chars()
        .map(|c| match c {
            ' ' | 'i' | 'j' | 'l' | '.' | ',' | ':' | ';' | '!' | '|' | '\'' => 278,
            'f' | 't' | 'r' | 'I' | '-' | '/' | '(' | ')' => 333,
            'm' | 'M' | 'W' => 833,
            'w' => 722,
            'A'..='Z' => 690,
            '0'..='9' => 556,
            _ => 540,
        })
        .sum();
    let bold = if face == Face::Bold { 1.06 } else { 1.0 };
    units as f32 * size / 1000.0 * bold
}
