use crate::utils::text::to_win_ansi;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Minimal A4 report writer: title, subtitle, paginated table, closing line.
pub struct PdfManager {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    page_w: f32,
    page_h: f32,
    margin: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,

    font_size: f32,
    header_font_size: f32,
    title_font_size: f32,
    total_font_size: f32,
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
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        pdf.type1_font(font_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,
            row_h: 22.0,

            next_id,
            font_id,
            bold_font_id,

            font_size: 10.0,
            header_font_size: 11.0,
            title_font_size: 16.0,
            total_font_size: 13.0,
        }
    }

    /// Genera un nuovo Ref univoco
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Crea una nuova pagina e relativo oggetto di contenuto
    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources()
            .fonts()
            .pair(Name(b"F1"), self.font_id)
            .pair(Name(b"F2"), self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Scrive lo stream della pagina corrente
    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id.take() {
            self.pdf.stream(id, &content.finish());
        }
    }

    /// Imposta il nodo `Pages` con count e kids
    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, bold: bool, text: &str) {
        let font = if bold { Name(b"F2") } else { Name(b"F1") };
        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(&to_win_ansi(text)));
        content.end_text();
    }

    fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.53, 0.53, 0.53);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    fn fill_band(&self, content: &mut Content, y: f32, width: f32, rgb: (f32, f32, f32)) {
        content.save_state();
        content.set_fill_rgb(rgb.0, rgb.1, rgb.2);
        content.rect(self.margin, y, width, self.row_h);
        content.fill_nonzero();
        content.restore_state();
    }

    fn draw_row(
        &self,
        content: &mut Content,
        y: f32,
        col_widths: &[f32],
        row: &[String],
        font_size: f32,
        bold: bool,
    ) {
        let mut x = self.margin;

        for (i, w) in col_widths.iter().enumerate() {
            let text = row.get(i).map(String::as_str).unwrap_or("");
            self.draw_text(content, x + 6.0, y + 7.0, font_size, bold, text);
            self.draw_cell_borders(content, x, y, *w, self.row_h);
            x += w;
        }
    }

    /// Calcola larghezza colonne in base a header + contenuto e le adatta alla pagina
    fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| h.len() as f32 * 6.5 + 12.0)
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = (cell.len() as f32 * 6.2 + 12.0).max(widths[i]);
            }
        }

        // la tabella occupa tutta la larghezza utile
        let total: f32 = widths.iter().sum();
        let max = self.page_w - 2.0 * self.margin;

        if total > 0.0 {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    fn draw_footer(&self, content: &mut Content, page: usize, stamp: &str) {
        let pg = format!("Page {}", page);
        self.draw_text(
            content,
            self.page_w - self.margin - 40.0,
            self.margin - 30.0,
            self.font_size,
            false,
            &pg,
        );

        if !stamp.is_empty() {
            self.draw_text(
                content,
                self.margin,
                self.margin - 30.0,
                self.font_size,
                false,
                stamp,
            );
        }
    }

    fn draw_table_header(&self, content: &mut Content, y: f32, col_widths: &[f32], headers: &[&str]) {
        let header_row: Vec<String> = headers.iter().map(|s| s.to_string()).collect();
        self.fill_band(content, y, col_widths.iter().sum(), (0.95, 0.95, 0.95));
        self.draw_row(content, y, col_widths, &header_row, self.header_font_size, true);
    }

    /// Report multipagina: titolo e sottotitolo sulla prima pagina, tabella
    /// con intestazione ripetuta su ogni pagina, riga finale dopo la tabella.
    pub fn write_report(
        &mut self,
        title: &str,
        subtitle: &str,
        headers: &[&str],
        rows: &[Vec<String>],
        closing: &str,
        stamp: &str,
    ) {
        let col_widths = self.compute_col_widths(headers, rows);
        let table_w: f32 = col_widths.iter().sum();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_idx = 1;

        let mut content = self.new_page();
        let mut y = self.page_h - self.margin - self.title_font_size;

        self.draw_text(&mut content, self.margin, y, self.title_font_size, true, title);
        y -= 28.0;
        self.draw_text(&mut content, self.margin, y, self.header_font_size, false, subtitle);
        y -= 20.0 + self.row_h;

        loop {
            self.draw_table_header(&mut content, y, &col_widths, headers);
            y -= self.row_h;

            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y < self.margin {
                    break;
                }

                // zebra stripe
                if i % 2 == 1 {
                    self.fill_band(&mut content, y, table_w, (0.97, 0.97, 0.97));
                }

                self.draw_row(&mut content, y, &col_widths, row, self.font_size, false);

                y -= self.row_h;
                consumed += 1;
            }
            remaining = &remaining[consumed..];

            if remaining.is_empty() {
                break;
            }

            self.draw_footer(&mut content, page_idx, stamp);
            self.finalize_page(content);

            content = self.new_page();
            page_idx += 1;
            y = self.page_h - self.margin - self.row_h;
        }

        // riga del totale: se non c'è spazio va su una nuova pagina
        if y - 10.0 < self.margin {
            self.draw_footer(&mut content, page_idx, stamp);
            self.finalize_page(content);

            content = self.new_page();
            page_idx += 1;
            y = self.page_h - self.margin - self.row_h;
        }

        self.draw_text(
            &mut content,
            self.margin,
            y - 10.0,
            self.total_font_size,
            true,
            closing,
        );

        self.draw_footer(&mut content, page_idx, stamp);
        self.finalize_page(content);
    }

    pub fn finish(mut self) -> Vec<u8> {
        // Costruisci Catalog + Pages una sola volta, qui
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        let bytes = self.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
