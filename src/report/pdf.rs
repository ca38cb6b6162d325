use super::canvas::{Face, PageLayout, ReportLayout};
use super::logo::{Logo, LogoPixels};
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref, Str};

const FACES: [Face; 3] = [Face::Regular, Face::Bold, Face::Oblique];
const LOGO_RESOURCE: &[u8] = b"Im1";

pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,

    next_id: i32,
    font_ids: [Ref; 3],
    logo_id: Option<Ref>,
}

impl Default for PdfManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfManager {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // ID gestiti a mano
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_ids = [Ref::new(3), Ref::new(4), Ref::new(5)];
        let next_id = 6;

        // Helvetica family, WinAnsi so accented Portuguese text renders
        for (face, id) in FACES.iter().zip(font_ids) {
            pdf.type1_font(id)
                .base_font(Name(face.base_font()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            next_id,
            font_ids,
            logo_id: None,
        }
    }

    /// Genera un nuovo Ref univoco
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Embed the logo once; pages with an image op reference it.
    pub fn embed_logo(&mut self, logo: &Logo) {
        let id = self.fresh_ref();

        match &logo.pixels {
            LogoPixels::Dct { data, components } => {
                let mut image = self.pdf.image_xobject(id, data);
                image.filter(Filter::DctDecode);
                image.width(logo.width as i32);
                image.height(logo.height as i32);
                image.color_space_name(Name(device_space(*components)));
                image.bits_per_component(8);
            }
            LogoPixels::Flate {
                color,
                components,
                alpha,
            } => {
                let mask_id = alpha.as_ref().map(|_| self.fresh_ref());

                let mut image = self.pdf.image_xobject(id, color);
                image.filter(Filter::FlateDecode);
                image.width(logo.width as i32);
                image.height(logo.height as i32);
                image.color_space_name(Name(device_space(*components)));
                image.bits_per_component(8);
                if let Some(m) = mask_id {
                    image.s_mask(m);
                }
                drop(image);

                // soft mask: one gray sample per pixel
                if let (Some(m), Some(a)) = (mask_id, alpha) {
                    let mut mask = self.pdf.image_xobject(m, a);
                    mask.filter(Filter::FlateDecode);
                    mask.width(logo.width as i32);
                    mask.height(logo.height as i32);
                    mask.color_space_name(Name(b"DeviceGray"));
                    mask.bits_per_component(8);
                }
            }
        }

        self.logo_id = Some(id);
    }

    fn font_id(&self, face: Face) -> Ref {
        match face {
            Face::Regular => self.font_ids[0],
            Face::Bold => self.font_ids[1],
            Face::Oblique => self.font_ids[2],
        }
    }

    /// Scrive una pagina completa: oggetto pagina, risorse e contenuto
    fn write_page(&mut self, layout: &ReportLayout, page: &PageLayout) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();
        self.page_refs.push(page_id);

        let g = layout.geometry;
        let fonts: Vec<(Face, Ref)> = FACES.iter().map(|f| (*f, self.font_id(*f))).collect();
        let logo = self.logo_id.filter(|_| page.image.is_some());

        let mut content = Content::new();

        if let (Some(img), Some(_)) = (page.image, logo) {
            content.save_state();
            content.transform([img.width, 0.0, 0.0, img.height, img.x, img.y]);
            content.x_object(Name(LOGO_RESOURCE));
            content.restore_state();
        }

        for t in &page.texts {
            content.begin_text();
            content.set_font(Name(t.face.resource()), t.size);
            content.set_text_matrix([1.0, 0.0, 0.0, 1.0, t.start_x(), t.y]);
            content.show(Str(&encode_win_ansi(&t.text)));
            content.end_text();
        }

        {
            let mut pdf_page = self.pdf.page(page_id);
            pdf_page
                .parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, g.width, g.height))
                .contents(content_id);

            let mut resources = pdf_page.resources();
            {
                let mut dict = resources.fonts();
                for (face, id) in &fonts {
                    dict.pair(Name(face.resource()), *id);
                }
            }
            if let Some(img_id) = logo {
                resources.x_objects().pair(Name(LOGO_RESOURCE), img_id);
            }
        }

        self.pdf.stream(content_id, &content.finish());
    }

    /// Tutte le pagine del layout, nell'ordine
    pub fn write_layout(&mut self, layout: &ReportLayout) {
        for page in &layout.pages {
            self.write_page(layout, page);
        }
    }

    /// Imposta il nodo `Pages` con count e kids
    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    pub fn finish(mut self) -> Vec<u8> {
        // Catalog + Pages una sola volta, qui
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }
}

fn device_space(components: u8) -> &'static [u8] {
    match components {
        1 => b"DeviceGray",
        4 => b"DeviceCMYK",
        _ => b"DeviceRGB",
    }
}

/// Map text to WinAnsiEncoding bytes; unsupported characters become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7E}' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}
