//! Minimal WordprocessingML document model
//!
//! Builders append blocks to a [`Document`]; [`package`] turns the finished
//! document into a `.docx` zip package.

pub mod image;
pub mod package;
pub mod xml;

pub use image::{ImageData, ImageFormat};

/// English Metric Units per inch, as used by DrawingML extents
pub const EMU_PER_INCH: i64 = 914_400;

/// Twentieths of a point per centimetre (rounded)
pub const TWIPS_PER_CM: f64 = 566.929;

pub fn cm_to_twips(cm: f64) -> u32 {
    (cm * TWIPS_PER_CM).round() as u32
}

pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH as f64).round() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

/// Named paragraph styles declared in `word/styles.xml`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Heading1,
    Heading2,
    ListBullet,
    ListBullet2,
}

impl ParagraphStyle {
    pub fn style_id(&self) -> &'static str {
        match self {
            ParagraphStyle::Heading1 => "Heading1",
            ParagraphStyle::Heading2 => "Heading2",
            ParagraphStyle::ListBullet => "ListBullet",
            ParagraphStyle::ListBullet2 => "ListBullet2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub size_pt: Option<f32>,
    pub color: Option<Rgb>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn size(mut self, pt: f32) -> Self {
        self.size_pt = Some(pt);
        self
    }

    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }
}

/// Inline picture placed by [`Document::add_picture`]
#[derive(Debug, Clone, PartialEq)]
pub struct PictureRun {
    pub rel_id: String,
    pub doc_pr_id: usize,
    pub name: String,
    pub width_emu: i64,
    pub height_emu: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Run {
    Text(TextRun),
    Picture(PictureRun),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    pub style: Option<ParagraphStyle>,
    pub alignment: Alignment,
    pub space_after_pt: Option<f32>,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraph holding a single plain run
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().run(TextRun::new(text))
    }

    pub fn styled(mut self, style: ParagraphStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn space_after(mut self, pt: f32) -> Self {
        self.space_after_pt = Some(pt);
        self
    }

    pub fn run(mut self, run: TextRun) -> Self {
        self.runs.push(Run::Text(run));
        self
    }

    pub fn picture(mut self, picture: PictureRun) -> Self {
        self.runs.push(Run::Picture(picture));
        self
    }

    /// Concatenated text of all text runs
    pub fn plain_text(&self) -> String {
        self.runs
            .iter()
            .filter_map(|r| match r {
                Run::Text(t) => Some(t.text.as_str()),
                Run::Picture(_) => None,
            })
            .collect()
    }

    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.runs.iter().filter_map(|r| match r {
            Run::Text(t) => Some(t),
            Run::Picture(_) => None,
        })
    }

    pub fn has_picture(&self) -> bool {
        self.runs.iter().any(|r| matches!(r, Run::Picture(_)))
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub rows: Vec<Vec<Paragraph>>,
    pub alignment: Alignment,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn row(mut self, cells: Vec<Paragraph>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.len()).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    PageBreak,
}

/// Document-level metadata written to `docProps/core.xml`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoreProperties {
    pub title: String,
    pub author: String,
    pub comments: String,
}

/// Page size and margins, in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSetup {
    pub width: u32,
    pub height: u32,
    pub margin_top: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
    pub margin_right: u32,
}

impl PageSetup {
    pub fn a4() -> Self {
        Self {
            width: cm_to_twips(21.0),
            height: cm_to_twips(29.7),
            margin_top: cm_to_twips(3.0),
            margin_bottom: cm_to_twips(2.0),
            margin_left: cm_to_twips(2.5),
            margin_right: cm_to_twips(2.5),
        }
    }
}

impl Default for PageSetup {
    fn default() -> Self {
        Self::a4()
    }
}

/// Image bytes stored under `word/media/`
#[derive(Debug, Clone, PartialEq)]
pub struct MediaPart {
    pub rel_id: String,
    pub file_name: String,
    pub format: ImageFormat,
    pub data: Vec<u8>,
}

impl MediaPart {
    pub fn part_name(&self) -> String {
        format!("word/media/{}", self.file_name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    pub properties: CoreProperties,
    pub page: PageSetup,
    pub body: Vec<Block>,
    pub media: Vec<MediaPart>,
    picture_count: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(Block::Paragraph(paragraph));
    }

    /// Append an empty spacing paragraph
    pub fn add_blank(&mut self) {
        self.add_paragraph(Paragraph::new());
    }

    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) {
        let style = if level <= 1 {
            ParagraphStyle::Heading1
        } else {
            ParagraphStyle::Heading2
        };
        self.add_paragraph(Paragraph::text(text).styled(style));
    }

    pub fn add_table(&mut self, table: Table) {
        self.body.push(Block::Table(table));
    }

    pub fn add_page_break(&mut self) {
        self.body.push(Block::PageBreak);
    }

    /// Register image bytes as a media part and return the inline run
    /// that displays them at `width_emu`, keeping the aspect ratio.
    ///
    /// Identical bytes share one media part.
    pub fn add_picture(&mut self, image: ImageData, width_emu: i64) -> PictureRun {
        self.picture_count += 1;
        let height_emu = image.scaled_height(width_emu);

        let existing = self.media.iter().find(|m| m.data == image.data);
        let (rel_id, file_name) = match existing {
            Some(media) => (media.rel_id.clone(), media.file_name.clone()),
            None => {
                let index = self.media.len() + 1;
                let rel_id = format!("rIdImage{}", index);
                let file_name = format!("image{}.{}", index, image.format.extension());
                self.media.push(MediaPart {
                    rel_id: rel_id.clone(),
                    file_name: file_name.clone(),
                    format: image.format,
                    data: image.data,
                });
                (rel_id, file_name)
            }
        };

        PictureRun {
            rel_id,
            doc_pr_id: self.picture_count,
            name: file_name,
            width_emu,
            height_emu,
        }
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.iter().filter_map(|b| match b {
            Block::Paragraph(p) => Some(p),
            _ => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.body.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    pub fn page_break_count(&self) -> usize {
        self.body
            .iter()
            .filter(|b| matches!(b, Block::PageBreak))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_geometry() {
        let page = PageSetup::a4();
        assert_eq!(page.width, 11906);
        assert_eq!(page.height, 16838);
        assert_eq!(page.margin_left, page.margin_right);
    }

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb(220, 53, 69).hex(), "DC3545");
        assert_eq!(Rgb::BLACK.hex(), "000000");
    }

    #[test]
    fn test_plain_text_skips_pictures() {
        let mut doc = Document::new();
        let image = ImageData {
            format: ImageFormat::Png,
            width_px: 200,
            height_px: 100,
            data: vec![0u8; 4],
        };
        let picture = doc.add_picture(image, inches_to_emu(5.0));
        let para = Paragraph::text("a").picture(picture).run(TextRun::new("b"));

        assert_eq!(para.plain_text(), "ab");
        assert!(para.has_picture());
        assert_eq!(doc.media.len(), 1);
        assert_eq!(doc.media[0].part_name(), "word/media/image1.png");
    }

    #[test]
    fn test_identical_images_share_media() {
        let mut doc = Document::new();
        let image = |data: Vec<u8>| ImageData {
            format: ImageFormat::Png,
            width_px: 10,
            height_px: 10,
            data,
        };

        let first = doc.add_picture(image(vec![1, 2, 3]), 100);
        let other = doc.add_picture(image(vec![4, 5, 6]), 100);
        let again = doc.add_picture(image(vec![1, 2, 3]), 100);

        assert_eq!(doc.media.len(), 2);
        assert_eq!(again.rel_id, first.rel_id);
        assert_eq!(again.name, "image1.png");
        assert_eq!(other.rel_id, "rIdImage2");
        assert_eq!(
            (first.doc_pr_id, other.doc_pr_id, again.doc_pr_id),
            (1, 2, 3)
        );
    }

    #[test]
    fn test_heading_levels() {
        let mut doc = Document::new();
        doc.add_heading("A", 1);
        doc.add_heading("B", 2);

        let styles: Vec<_> = doc.paragraphs().map(|p| p.style).collect();
        assert_eq!(
            styles,
            vec![Some(ParagraphStyle::Heading1), Some(ParagraphStyle::Heading2)]
        );
    }
}
