//! Letterhead logo, JPEG or PNG.
//!
//! JPEG bytes are embedded as-is (DCTDecode), so only the frame header is
//! read. PNG is decoded to 8-bit samples and recompressed for FlateDecode,
//! with the alpha channel split off into a soft mask.

use crate::errors::{AppError, AppResult};
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Largest side accepted for a PNG logo, in pixels.
const MAX_PNG_SIDE: u32 = 8192;

/// Image samples, ready to be written as a PDF image XObject.
#[derive(Debug, Clone)]
pub enum LogoPixels {
    /// Baseline/progressive JPEG stream
    Dct { data: Vec<u8>, components: u8 },
    /// Zlib-compressed 8-bit samples; `alpha` is a compressed gray mask
    Flate {
        color: Vec<u8>,
        components: u8,
        alpha: Option<Vec<u8>>,
    },
}

#[derive(Debug, Clone)]
pub struct Logo {
    pub width: u32,
    pub height: u32,
    pub pixels: LogoPixels,
}

impl Logo {
    pub fn load(path: &Path) -> AppResult<Self> {
        let data = fs::read(path)?;
        Self::from_bytes(data).map_err(|e| AppError::Report(format!("{}: {e}", path.display())))
    }

    /// Pick the decoder from the file signature.
    pub fn from_bytes(data: Vec<u8>) -> AppResult<Self> {
        if data.starts_with(&PNG_SIGNATURE) {
            Self::from_png(&data)
        } else {
            Self::from_jpeg(data)
        }
    }

    pub fn from_jpeg(data: Vec<u8>) -> AppResult<Self> {
        let (width, height, components) = jpeg_frame(&data)
            .ok_or_else(|| AppError::Report("logo is not a baseline/progressive JPEG".into()))?;

        Ok(Self {
            width,
            height,
            pixels: LogoPixels::Dct { data, components },
        })
    }

    /// Non-interlaced PNG, 8 bits per sample (gray, RGB, palette, with or
    /// without alpha).
    pub fn from_png(data: &[u8]) -> AppResult<Self> {
        let png = PngImage::parse(data)?;
        let samples = png.unfiltered()?;
        let (color, components, alpha) = png.split_channels(&samples)?;

        Ok(Self {
            width: png.width,
            height: png.height,
            pixels: LogoPixels::Flate {
                color: deflate(&color)?,
                components,
                alpha: alpha.as_deref().map(deflate).transpose()?,
            },
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Color components per pixel (1 gray, 3 RGB, 4 CMYK).
    pub fn components(&self) -> u8 {
        match &self.pixels {
            LogoPixels::Dct { components, .. } | LogoPixels::Flate { components, .. } => {
                *components
            }
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(&self.pixels, LogoPixels::Flate { alpha: Some(_), .. })
    }
}

/// Width, height and component count from the first SOFn segment.
fn jpeg_frame(data: &[u8]) -> Option<(u32, u32, u8)> {
    if data.len() < 4 || data[0] != 0xFF || data[1] != 0xD8 {
        return None;
    }

    let mut i = 2;
    while i + 3 < data.len() {
        if data[i] != 0xFF {
            return None;
        }
        let marker = data[i + 1];

        // fill bytes and standalone markers carry no length
        if marker == 0xFF {
            i += 1;
            continue;
        }
        if marker == 0x01 || (0xD0..=0xD9).contains(&marker) {
            i += 2;
            continue;
        }

        let len = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
        let is_sof = matches!(marker, 0xC0..=0xCF) && !matches!(marker, 0xC4 | 0xC8 | 0xCC);

        if is_sof {
            let seg = data.get(i + 4..i + 10)?;
            let height = u16::from_be_bytes([seg[1], seg[2]]) as u32;
            let width = u16::from_be_bytes([seg[3], seg[4]]) as u32;
            return Some((width, height, seg[5]));
        }

        i += 2 + len;
    }

    None
}

fn png_error(msg: impl Into<String>) -> AppError {
    AppError::Report(format!("unsupported PNG logo: {}", msg.into()))
}

fn deflate(raw: &[u8]) -> AppResult<Vec<u8>> {
    let mut enc = ZlibEncoder::new(Vec::new(), Compression::default());
    enc.write_all(raw)?;
    Ok(enc.finish()?)
}

struct PngImage {
    width: u32,
    height: u32,
    color_type: u8,
    palette: Vec<u8>,
    transparency: Vec<u8>,
    idat: Vec<u8>,
}

impl PngImage {
    fn parse(data: &[u8]) -> AppResult<Self> {
        let mut png = PngImage {
            width: 0,
            height: 0,
            color_type: 0,
            palette: Vec::new(),
            transparency: Vec::new(),
            idat: Vec::new(),
        };
        let mut seen_header = false;

        let mut i = PNG_SIGNATURE.len();
        while i + 8 <= data.len() {
            let len = u32::from_be_bytes([data[i], data[i + 1], data[i + 2], data[i + 3]]) as usize;
            let kind = &data[i + 4..i + 8];
            let body = data
                .get(i + 8..i + 8 + len)
                .ok_or_else(|| png_error("truncated chunk"))?;

            match kind {
                b"IHDR" => {
                    if body.len() != 13 {
                        return Err(png_error("bad IHDR"));
                    }
                    png.width = u32::from_be_bytes([body[0], body[1], body[2], body[3]]);
                    png.height = u32::from_be_bytes([body[4], body[5], body[6], body[7]]);
                    let (depth, color_type, interlace) = (body[8], body[9], body[12]);

                    if depth != 8 {
                        return Err(png_error(format!("bit depth {depth}")));
                    }
                    if interlace != 0 {
                        return Err(png_error("interlaced"));
                    }
                    if !matches!(color_type, 0 | 2 | 3 | 4 | 6) {
                        return Err(png_error(format!("color type {color_type}")));
                    }
                    if png.width == 0
                        || png.height == 0
                        || png.width > MAX_PNG_SIDE
                        || png.height > MAX_PNG_SIDE
                    {
                        return Err(png_error(format!("size {}x{}", png.width, png.height)));
                    }
                    png.color_type = color_type;
                    seen_header = true;
                }
                b"PLTE" => png.palette = body.to_vec(),
                b"tRNS" => png.transparency = body.to_vec(),
                b"IDAT" => png.idat.extend_from_slice(body),
                b"IEND" => break,
                _ => {}
            }

            // length + type + data + crc
            i += 12 + len;
        }

        if !seen_header {
            return Err(png_error("missing IHDR"));
        }
        if png.idat.is_empty() {
            return Err(png_error("missing image data"));
        }
        if png.color_type == 3 && png.palette.is_empty() {
            return Err(png_error("palette image without PLTE"));
        }
        Ok(png)
    }

    /// Bytes per pixel of the stored scanlines.
    fn channels(&self) -> usize {
        match self.color_type {
            2 => 3,
            4 => 2,
            6 => 4,
            _ => 1,
        }
    }

    /// Inflate the image data and undo the per-scanline filters.
    fn unfiltered(&self) -> AppResult<Vec<u8>> {
        let mut raw = Vec::new();
        ZlibDecoder::new(self.idat.as_slice()).read_to_end(&mut raw)?;

        let bpp = self.channels();
        let stride = self.width as usize * bpp;
        let rows = self.height as usize;
        if raw.len() < rows * (stride + 1) {
            return Err(png_error("image data shorter than declared size"));
        }

        let mut out = vec![0u8; rows * stride];
        for y in 0..rows {
            let filter = raw[y * (stride + 1)];
            let line = &raw[y * (stride + 1) + 1..(y + 1) * (stride + 1)];
            let (done, rest) = out.split_at_mut(y * stride);
            let prev = if y == 0 { None } else { Some(&done[(y - 1) * stride..]) };
            let cur = &mut rest[..stride];

            for x in 0..stride {
                let a = if x >= bpp { cur[x - bpp] } else { 0 };
                let b = prev.map_or(0, |p| p[x]);
                let c = if x >= bpp { prev.map_or(0, |p| p[x - bpp]) } else { 0 };

                let predicted = match filter {
                    0 => 0,
                    1 => a,
                    2 => b,
                    3 => ((a as u16 + b as u16) / 2) as u8,
                    4 => paeth(a, b, c),
                    f => return Err(png_error(format!("scanline filter {f}"))),
                };
                cur[x] = line[x].wrapping_add(predicted);
            }
        }

        Ok(out)
    }

    /// Color samples, their component count and an alpha mask when the
    /// image has any transparency.
    fn split_channels(&self, samples: &[u8]) -> AppResult<(Vec<u8>, u8, Option<Vec<u8>>)> {
        let pixels = self.width as usize * self.height as usize;
        let mut alpha = Vec::with_capacity(pixels);

        let (color, components) = match self.color_type {
            0 => (samples.to_vec(), 1),
            2 => (samples.to_vec(), 3),
            4 => {
                let mut color = Vec::with_capacity(pixels);
                for px in samples.chunks_exact(2) {
                    color.push(px[0]);
                    alpha.push(px[1]);
                }
                (color, 1)
            }
            6 => {
                let mut color = Vec::with_capacity(pixels * 3);
                for px in samples.chunks_exact(4) {
                    color.extend_from_slice(&px[..3]);
                    alpha.push(px[3]);
                }
                (color, 3)
            }
            _ => {
                let mut color = Vec::with_capacity(pixels * 3);
                for &idx in samples {
                    let idx = idx as usize;
                    let rgb = self
                        .palette
                        .get(idx * 3..idx * 3 + 3)
                        .ok_or_else(|| png_error(format!("palette index {idx}")))?;
                    color.extend_from_slice(rgb);
                    if !self.transparency.is_empty() {
                        alpha.push(self.transparency.get(idx).copied().unwrap_or(255));
                    }
                }
                (color, 3)
            }
        };

        let alpha = if alpha.iter().any(|&a| a != 255) {
            Some(alpha)
        } else {
            None
        };
        Ok((color, components, alpha))
    }
}

fn paeth(a: u8, b: u8, c: u8) -> u8 {
    let p = a as i16 + b as i16 - c as i16;
    let pa = (p - a as i16).abs();
    let pb = (p - b as i16).abs();
    let pc = (p - c as i16).abs();
    if pa <= pb && pa <= pc {
        a
    } else if pb <= pc {
        b
    } else {
        c
    }
}
