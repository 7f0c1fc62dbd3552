//! Integration tests for the text-to-document pipeline.

use lessondoc::compose::{compose, ComposeOptions, LessonLabels};
use lessondoc::model::{Alignment, Document, Element, ParagraphRole, TextRun};
use lessondoc::parser::{format_inline, parse, Block, ParseOptions};
use lessondoc::{compose_lesson_plan, ErrorMode, LessonDoc};

const LESSON: &str = "\
# KẾ HOẠCH BÀI DẠY

I. Mục tiêu
- **Kiến thức:** Đọc đúng, rành mạch
- **Năng lực:** Hợp tác nhóm

II. Chuẩn bị
Giáo viên chuẩn bị tranh minh họa.

III. Các hoạt động dạy học
| Hoạt động | **Thời gian** |
| --- | --- |
| **Khởi động:**<br>Hát tập thể | 5 phút |
| Luyện đọc<br><br>theo nhóm | 15 phút |

IV. Điều chỉnh sau bài dạy
";

fn labels() -> LessonLabels {
    LessonLabels::new("Tập đọc: Cây bàng", "Lớp 4")
}

fn doc(text: &str) -> Document {
    compose_lesson_plan(text, &labels()).unwrap()
}

fn kinds(doc: &Document) -> Vec<&'static str> {
    doc.body
        .iter()
        .map(|e| match e {
            Element::Table(_) => "table",
            Element::Paragraph(p) => match p.role() {
                ParagraphRole::Heading => "heading",
                ParagraphRole::SectionMarker => "section",
                ParagraphRole::Bullet => "bullet",
                _ => "paragraph",
            },
        })
        .collect()
}

#[test]
fn test_block_order_follows_input() {
    let doc = doc(LESSON);
    assert_eq!(
        kinds(&doc),
        vec![
            "heading",
            "section",
            "bullet",
            "bullet",
            "section",
            "paragraph",
            "section",
            "table",
            "section",
        ]
    );
}

/// Deterministic Fisher-Yates shuffle driven by xorshift.
fn shuffled<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        out.swap(i, (state % (i as u64 + 1)) as usize);
    }
    out
}

fn element_text(element: &Element) -> String {
    match element {
        Element::Paragraph(p) => p.plain_text(),
        Element::Table(t) => t.cell(1, 0).unwrap().content[0].plain_text(),
    }
}

#[test]
fn test_block_order_follows_shuffled_input() {
    let mut units = Vec::new();
    for n in 0..10 {
        let unit = match n % 5 {
            0 => ("heading", format!("# Đề mục {n}")),
            1 => ("section", format!("III. Phần {n}")),
            2 => ("bullet", format!("- Ý **chính** {n}")),
            3 => ("paragraph", format!("Đoạn **văn** {n}")),
            _ => ("table", format!("| Cột | Số |\n| --- | --- |\n| Hàng {n} | 1 |")),
        };
        units.push((n, unit.0, unit.1));
    }

    for seed in 1..=8 {
        let mix = shuffled(&units, seed);
        let text = mix
            .iter()
            .map(|(_, _, line)| line.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        let doc = doc(&text);

        let expected: Vec<&str> = mix.iter().map(|(_, kind, _)| *kind).collect();
        assert_eq!(kinds(&doc), expected, "seed {seed}");
        for ((n, _, _), element) in mix.iter().zip(&doc.body) {
            let text = element_text(element);
            assert!(text.ends_with(&format!(" {n}")), "seed {seed}: {text}");
        }
    }
}

#[test]
fn test_text_without_bold_is_unchanged() {
    for line in ["Học sinh đọc bài", "a * b", "một dấu * lẻ", ""] {
        let runs = format_inline(line);
        let joined: String = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(joined, line);
        assert!(runs.iter().all(|r| !r.bold));
    }
}

#[test]
fn test_two_bold_spans() {
    assert_eq!(
        format_inline("**A** and **B**"),
        vec![
            TextRun::bold("A"),
            TextRun::plain(" and "),
            TextRun::bold("B"),
        ]
    );
}

#[test]
fn test_bullet_glyph() {
    let doc = doc("- eat rice");
    let p = doc.body[0].as_paragraph().unwrap();
    assert!(p.plain_text().starts_with("• eat rice"));
}

#[test]
fn test_section_marker_single_bold_run() {
    let doc = doc("I. Mục tiêu");
    let p = doc.body[0].as_paragraph().unwrap();
    assert_eq!(p.runs, vec![TextRun::bold("I. Mục tiêu")]);
}

#[test]
fn test_scores_table() {
    let doc = doc("| Name | Score |\n| --- | --- |\n| Alice | 9 |\n| Bob<br>Jr | 8 |");
    let table = doc.body[0].as_table().unwrap();

    assert_eq!(table.column_count(), 2);
    assert_eq!(table.row_count(), 3);
    assert_eq!(
        table.cell(0, 0).unwrap().content[0].runs,
        vec![TextRun::bold("Name")]
    );
    assert_eq!(
        table.cell(0, 1).unwrap().content[0].runs,
        vec![TextRun::bold("Score")]
    );

    let bob: Vec<String> = table
        .cell(2, 0)
        .unwrap()
        .content
        .iter()
        .map(|p| p.plain_text())
        .collect();
    assert_eq!(bob, vec!["Bob", "Jr"]);
}

#[test]
fn test_header_only_table_is_dropped() {
    let doc = doc("Trước bảng\n| Name | Score |\n| --- | --- |\nSau bảng");
    assert_eq!(doc.tables().count(), 0);
    assert_eq!(doc.body.len(), 2);
}

#[test]
fn test_header_cells_never_bold_formatted_inline() {
    let doc = doc(LESSON);
    let table = doc.tables().next().unwrap();
    let header = table.cell(0, 1).unwrap();
    assert_eq!(header.content[0].runs, vec![TextRun::bold("Thời gian")]);

    let warmup = table.cell(1, 0).unwrap();
    assert_eq!(warmup.content.len(), 2);
    assert_eq!(warmup.content[0].runs, vec![TextRun::bold("Khởi động:")]);
    assert_eq!(warmup.content[1].runs, vec![TextRun::plain("Hát tập thể")]);

    let reading = table.cell(2, 0).unwrap();
    assert_eq!(reading.content.len(), 2);
}

#[test]
fn test_geometry_and_font_are_constant() {
    let a = doc("");
    let b = doc(LESSON);
    assert_eq!(a.geometry, b.geometry);
    assert_eq!(a.style, b.style);
    assert_eq!(a.style.font_family, "Times New Roman");
    assert_eq!(a.style.half_points(), 28);
}

#[test]
fn test_title_block() {
    let doc = doc(LESSON);
    let title: Vec<String> = doc.title.iter().map(|p| p.plain_text()).collect();
    assert_eq!(
        title,
        vec![
            "KẾ HOẠCH BÀI DẠY: TẬP ĐỌC: CÂY BÀNG".to_string(),
            "Lớp: Lớp 4".to_string(),
            "-".repeat(60),
        ]
    );
    assert!(doc.title[0].is_all_bold());
    assert!(doc.title[1].is_all_bold());
    assert!(doc.title.iter().all(|p| p.style.alignment == Alignment::Center));
}

#[test]
fn test_unsupported_markdown_is_plain_text() {
    let blocks = parse("1. first\n> quote\n*italic*", &ParseOptions::default()).unwrap();
    assert_eq!(
        blocks,
        vec![
            Block::Paragraph("1. first".to_string()),
            Block::Paragraph("> quote".to_string()),
            Block::Paragraph("*italic*".to_string()),
        ]
    );
}

#[test]
fn test_cleanup_folds_break_spellings() {
    let text = "\u{feff}| A |\r\n| x<br/>y<BR>z |\r\n";
    let doc = doc(text);
    let table = doc.tables().next().unwrap();
    let lines: Vec<String> = table
        .cell(1, 0)
        .unwrap()
        .content
        .iter()
        .map(|p| p.plain_text())
        .collect();
    assert_eq!(lines, vec!["x", "y", "z"]);

    let raw = LessonDoc::new()
        .without_cleanup()
        .compose("| A |\n| x<br/>y |", &labels())
        .unwrap();
    let cell = raw.document().tables().next().unwrap().cell(1, 0).unwrap();
    assert_eq!(cell.content.len(), 1);
}

#[test]
fn test_table_mismatch_policy() {
    let text = "| A | B |\n| --- | --- |\n| 1 | 2 | 3 |";
    assert!(compose_lesson_plan(text, &labels()).is_err());

    let options = ParseOptions::new().with_error_mode(ErrorMode::Lenient);
    let blocks = parse(text, &options).unwrap();
    let doc = compose(&blocks, &labels(), &ComposeOptions::default()).unwrap();
    let table = doc.tables().next().unwrap();
    assert_eq!(table.column_count(), 2);
    assert_eq!(table.cell(1, 1).unwrap().content[0].plain_text(), "2");
}

#[test]
fn test_stats() {
    let result = LessonDoc::new().compose(LESSON, &labels()).unwrap();
    let stats = result.stats();
    assert_eq!(stats.heading_count, 1);
    assert_eq!(stats.section_marker_count, 4);
    assert_eq!(stats.bullet_count, 2);
    assert_eq!(stats.paragraph_count, 1);
    assert_eq!(stats.table_count, 1);
    assert_eq!(stats.table_row_count, 3);
    assert_eq!(stats.block_count(), 9);
}
