//! PNG rendering of a fill: a black canvas with one white square per open cell and each placed
//! letter centred in its square.

use crate::{
    assignment::Assignment,
    crossword::Crossword,
    error::{Error, Result},
    render::letter_grid,
};
use rusttype::{point, Font, Scale};
use std::{fs::File, io::BufWriter, io::Write, path::Path};

pub const CELL_SIZE: u32 = 100;
pub const CELL_BORDER: u32 = 2;
const INTERIOR_SIZE: u32 = CELL_SIZE - 2 * CELL_BORDER;
const FONT_SIZE: f32 = 80.0;

const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

pub fn load_font<P: AsRef<Path>>(path: P) -> Result<Font<'static>> {
    let bytes = std::fs::read(path)?;
    Font::try_from_vec(bytes).ok_or(Error::Font)
}

/// RGBA pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    fn new(width: u32, height: u32, fill: [u8; 4]) -> Canvas {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for _ in 0..width * height {
            pixels.extend_from_slice(&fill);
        }
        Canvas {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    fn set(&mut self, x: u32, y: u32, color: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.pixels[i..i + 4].copy_from_slice(&color);
    }

    fn fill_rect(&mut self, left: u32, top: u32, size: u32, color: [u8; 4]) {
        for y in top..top + size {
            for x in left..left + size {
                self.set(x, y, color);
            }
        }
    }

    /// Blends black over the pixel by `coverage`.
    fn darken(&mut self, x: u32, y: u32, coverage: f32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let [r, g, b, a] = self.pixel(x, y);
        let keep = 1.0 - coverage.max(0.0).min(1.0);
        let shade = |c: u8| (c as f32 * keep).round() as u8;
        self.set(x, y, [shade(r), shade(g), shade(b), a]);
    }

    pub fn write_png<W: Write>(&self, w: W) -> Result<()> {
        let mut encoder = png::Encoder::new(w, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.pixels)?;
        Ok(())
    }
}

/// Draws `assignment` on `crossword`. Letters are only drawn when a font is given.
pub fn draw(crossword: &Crossword, assignment: &Assignment, font: Option<&Font>) -> Canvas {
    let mut canvas = Canvas::new(
        crossword.width() as u32 * CELL_SIZE,
        crossword.height() as u32 * CELL_SIZE,
        BLACK,
    );
    let letters = letter_grid(crossword, assignment);
    let scale = Scale::uniform(FONT_SIZE);

    for (row, letters) in letters.iter().enumerate() {
        for (col, letter) in letters.iter().enumerate() {
            if !crossword.is_open(row, col) {
                continue;
            }
            let left = col as u32 * CELL_SIZE + CELL_BORDER;
            let top = row as u32 * CELL_SIZE + CELL_BORDER;
            canvas.fill_rect(left, top, INTERIOR_SIZE, WHITE);

            let (font, letter) = match (font, letter) {
                (Some(font), Some(letter)) => (font, *letter),
                _ => continue,
            };
            let glyph = font
                .glyph(letter)
                .scaled(scale)
                .positioned(point(0.0, 0.0));
            if let Some(bounds) = glyph.pixel_bounding_box() {
                let glyph_width = bounds.width().max(0) as u32;
                let glyph_height = bounds.height().max(0) as u32;
                let x_offset = left + INTERIOR_SIZE.saturating_sub(glyph_width) / 2;
                let y_offset = top + INTERIOR_SIZE.saturating_sub(glyph_height) / 2;
                glyph.draw(|x, y, coverage| canvas.darken(x_offset + x, y_offset + y, coverage));
            }
        }
    }

    canvas
}

pub fn save_png<P: AsRef<Path>>(
    path: P,
    crossword: &Crossword,
    assignment: &Assignment,
    font: Option<&Font>,
) -> Result<()> {
    let file = File::create(path)?;
    draw(crossword, assignment, font).write_png(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::{draw, load_font, save_png, BLACK, WHITE};
    use crate::{
        assignment::Assignment,
        crossword::{Crossword, Direction, Variable},
        error::Error,
    };
    use std::fs::File;

    fn ring() -> Crossword {
        Crossword::new(
            "
#___#
#_##_
#_##_
#_##_
#____
",
        )
        .unwrap()
    }

    #[test]
    fn draw_lays_out_cells() {
        let canvas = draw(&ring(), &Assignment::new(), None);

        assert_eq!(500, canvas.width());
        assert_eq!(500, canvas.height());
        // blocked cell
        assert_eq!(BLACK, canvas.pixel(50, 50));
        // open cell and its border
        assert_eq!(WHITE, canvas.pixel(150, 50));
        assert_eq!(BLACK, canvas.pixel(100, 50));
        assert_eq!(BLACK, canvas.pixel(101, 50));
        assert_eq!(WHITE, canvas.pixel(102, 50));
        assert_eq!(WHITE, canvas.pixel(197, 50));
        assert_eq!(BLACK, canvas.pixel(198, 50));
    }

    #[test]
    fn save_png_writes_decodable_image() {
        let crossword = ring();
        let assignment = Assignment::new().with(Variable::new(0, 1, Direction::Across, 3), "SIX");
        let path = std::env::temp_dir().join("xwords_csp_save_png.png");

        save_png(&path, &crossword, &assignment, None).unwrap();

        let decoder = png::Decoder::new(File::open(&path).unwrap());
        let mut reader = decoder.read_info().unwrap();
        let mut buf = vec![0; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(500, info.width);
        assert_eq!(500, info.height);
        assert_eq!(png::ColorType::Rgba, info.color_type);

        let at = |x: usize, y: usize| {
            let i = (y * 500 + x) * 4;
            [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
        };
        assert_eq!(BLACK, at(50, 50));
        assert_eq!(WHITE, at(150, 150));
        assert_eq!(BLACK, at(250, 150));
        assert_eq!(WHITE, at(450, 450));
    }

    #[test]
    fn load_font_rejects_garbage() {
        let path = std::env::temp_dir().join("xwords_csp_not_a_font.ttf");
        std::fs::write(&path, b"not a font").unwrap();

        let result = load_font(&path);
        std::fs::remove_file(&path).ok();

        assert!(matches!(result, Err(Error::Font)));
    }
}
