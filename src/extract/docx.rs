// Word-processing (.docx) extraction via docx-rs.
//
// A .docx file is a ZIP archive of XML parts. docx-rs parses it into a
// typed tree:
//
//   Document
//     ├── Paragraph → Run → Text / Tab / Break
//     │            → Hyperlink → Run ...
//     └── Table → Row → Cell → Paragraph | Table
//
// We walk the tree and keep only the visible characters. Paragraphs and
// table rows are separated by newlines, cells within a row by tabs.

use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};
use tracing::debug;

use crate::error::ExtractError;

/// Parse a .docx buffer and return its visible text.
pub fn read_word_document(name: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(bytes).map_err(|e| ExtractError::UnreadableDocument {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    let mut blocks: Vec<String> = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => blocks.push(paragraph_text(para)),
            DocumentChild::Table(table) => blocks.push(table_text(table)),
            _ => {}
        }
    }

    debug!(document = name, blocks = blocks.len(), "Extracted docx blocks");
    Ok(blocks.join("\n"))
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut out = String::new();
    push_paragraph_children(&para.children, &mut out);
    out
}

fn push_paragraph_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, out),
            _ => {}
        }
    }
}

#[allow(irrefutable_let_patterns)]
fn table_text(table: &Table) -> String {
    let mut rows: Vec<String> = Vec::new();
    for row in &table.rows {
        let TableChild::TableRow(row) = row else {
            continue;
        };
        let mut cells: Vec<String> = Vec::new();
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell else {
                continue;
            };
            let parts: Vec<String> = cell
                .children
                .iter()
                .filter_map(|content| match content {
                    TableCellContent::Paragraph(p) => Some(paragraph_text(p)),
                    TableCellContent::Table(t) => Some(table_text(t)),
                    #[allow(unreachable_patterns)]
                    _ => None,
                })
                .collect();
            cells.push(parts.join("\n"));
        }
        rows.push(cells.join("\t"));
    }
    rows.join("\n")
}
