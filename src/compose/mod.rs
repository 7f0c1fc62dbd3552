//! Document composition.
//!
//! The [`Composer`] owns page geometry, the default style and the title
//! block, then appends segmented blocks strictly in input order. It writes
//! through a [`DocumentBuilder`], by default the in-memory [`ModelBuilder`].
//!
//! # Example
//!
//! ```
//! use lessondoc::compose::{compose, ComposeOptions, LessonLabels};
//! use lessondoc::parser::{parse, ParseOptions};
//!
//! let blocks = parse("I. Mục tiêu\n- đọc **đúng**", &ParseOptions::default())?;
//! let labels = LessonLabels::new("Bài 1", "Lớp 4");
//! let doc = compose(&blocks, &labels, &ComposeOptions::default())?;
//! assert_eq!(doc.body.len(), 2);
//! # Ok::<(), lessondoc::Error>(())
//! ```

mod builder;
mod options;
mod table;

pub use builder::{replay, DocumentBuilder, ModelBuilder};
pub use options::{ComposeOptions, LessonLabels};
pub use table::render_table;

use crate::error::Result;
use crate::model::{Alignment, Document, Metadata, Paragraph, ParagraphRole};
use crate::parser::{format_inline, strip_bold_markers, Block};

/// Assembles a document from segmented blocks.
pub struct Composer<B: DocumentBuilder = ModelBuilder> {
    builder: B,
    options: ComposeOptions,
}

impl Composer<ModelBuilder> {
    /// Create a composer that builds the in-memory model.
    pub fn new(options: ComposeOptions) -> Result<Self> {
        Self::with_builder(ModelBuilder::new(), options)
    }
}

impl<B: DocumentBuilder> Composer<B> {
    /// Create a composer over any builder.
    ///
    /// Page geometry and default style are fixed here, before any content.
    pub fn with_builder(mut builder: B, options: ComposeOptions) -> Result<Self> {
        builder.set_page_geometry(options.geometry)?;
        builder.set_default_style(options.style.clone())?;
        Ok(Self { builder, options })
    }

    /// Write the title block: title, class line and divider.
    pub fn add_title(&mut self, labels: &LessonLabels) -> Result<()> {
        self.builder.set_metadata(Metadata {
            title: Some(labels.lesson_name.clone()),
            subject: Some(labels.class_name.clone()),
            creator: self.options.creator.clone(),
            created: self.options.created,
        })?;

        let title = format!(
            "{}: {}",
            self.options.title_prefix,
            labels.lesson_name.to_uppercase()
        );
        self.builder
            .add_bold_run(&title, ParagraphRole::Title, Alignment::Center)?;

        let class_line = format!("{}: {}", self.options.class_prefix, labels.class_name);
        self.builder
            .add_bold_run(&class_line, ParagraphRole::Subtitle, Alignment::Center)?;

        let mut divider = Paragraph::with_role(ParagraphRole::Divider).align(Alignment::Center);
        divider.add_text(self.options.divider_line());
        self.builder.add_paragraph(divider)
    }

    /// Append one block.
    pub fn add_block(&mut self, block: &Block) -> Result<()> {
        match block {
            Block::Heading(text) => self.add_formatted(ParagraphRole::Heading, text),
            Block::Paragraph(text) => self.add_formatted(ParagraphRole::Body, text),
            Block::SectionMarker(text) => self.builder.add_bold_run(
                &strip_bold_markers(text),
                ParagraphRole::SectionMarker,
                Alignment::Left,
            ),
            Block::BulletItem(content) => {
                let text = format!("{} {}", self.options.bullet_glyph, content);
                self.add_formatted(ParagraphRole::Bullet, &text)
            }
            Block::Table(table) => self.builder.add_table(render_table(table)),
        }
    }

    /// Append blocks in order.
    pub fn add_blocks<'a>(&mut self, blocks: impl IntoIterator<Item = &'a Block>) -> Result<()> {
        let mut count = 0usize;
        for block in blocks {
            self.add_block(block)?;
            count += 1;
        }
        log::debug!("Composed {} blocks", count);
        Ok(())
    }

    /// Finish the document.
    pub fn finish(self) -> Result<B::Output> {
        self.builder.finish()
    }

    fn add_formatted(&mut self, role: ParagraphRole, text: &str) -> Result<()> {
        let mut paragraph = Paragraph::with_role(role);
        paragraph.extend_runs(format_inline(text));
        self.builder.add_paragraph(paragraph)
    }
}

/// Compose a document model from blocks.
pub fn compose(blocks: &[Block], labels: &LessonLabels, options: &ComposeOptions) -> Result<Document> {
    compose_with(ModelBuilder::new(), blocks, labels, options)
}

/// Compose blocks through the given builder.
pub fn compose_with<B: DocumentBuilder>(
    builder: B,
    blocks: &[Block],
    labels: &LessonLabels,
    options: &ComposeOptions,
) -> Result<B::Output> {
    let mut composer = Composer::with_builder(builder, options.clone())?;
    composer.add_title(labels)?;
    composer.add_blocks(blocks)?;
    composer.finish()
}
