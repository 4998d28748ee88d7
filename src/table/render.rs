//! Layout → HTML rendering.
//!
//! Pure string accumulation, no I/O. Titles and sources are written exactly
//! as they were extracted; entity text from the input is still entity text
//! in the output.

use crate::classify::ImageRecord;

use super::TableConfig;
use super::group::{Layout, PairedGroup, group_records};
use super::title::format_title;

/// Group and render sorted records.
///
/// An empty slice renders an empty table; deciding that "no images" is an
/// error is left to the caller.
///
/// # Examples
///
/// ```
/// use shotgrid::{ImageRecord, Role, TableConfig, render};
///
/// let records = [ImageRecord::new("Home", "home.png", Role::Standalone, 0)];
/// let html = render(&records, &TableConfig::default());
/// assert!(html.starts_with("<details>"));
/// assert!(html.contains(r#"<img src="home.png" width="400">"#));
/// ```
pub fn render(records: &[ImageRecord], config: &TableConfig) -> String {
    render_layout(&group_records(records), config)
}

/// Render an already grouped layout.
pub fn render_layout(layout: &Layout, config: &TableConfig) -> String {
    let mut table = TableWriter::new(config);

    for pair in layout.standalone.chunks(2) {
        table.standalone_rows(&pair[0], pair.get(1));
    }
    for group in &layout.paired {
        table.paired_rows(group);
    }

    table.finish()
}

struct TableWriter<'a> {
    config: &'a TableConfig,
    output: String,
}

impl<'a> TableWriter<'a> {
    fn new(config: &'a TableConfig) -> Self {
        let mut output = String::new();
        output.push_str("<details>\n<summary>");
        output.push_str(&config.summary);
        output.push_str("</summary>\n<table>\n");
        Self { config, output }
    }

    fn finish(mut self) -> String {
        self.output.push_str("</table>\n</details>\n");
        self.output
    }

    fn standalone_rows(&mut self, left: &ImageRecord, right: Option<&ImageRecord>) {
        self.output.push_str("<tr>\n");
        self.header_cell(Some(&format_title(left.category())));
        self.header_cell(right.map(|r| format_title(r.category())).as_deref());
        self.output.push_str("</tr>\n<tr>\n");
        self.image_cell(Some(left));
        self.image_cell(right);
        self.output.push_str("</tr>\n");
    }

    fn paired_rows(&mut self, group: &PairedGroup) {
        self.output.push_str("<tr>\n<th colspan=\"2\">");
        self.output.push_str(&format_title(&group.category));
        self.output.push_str("</th>\n</tr>\n<tr>\n");
        self.header_cell(Some("Before"));
        self.header_cell(Some("After"));
        self.output.push_str("</tr>\n<tr>\n");
        self.image_cell(group.before.as_ref());
        self.image_cell(group.after.as_ref());
        self.output.push_str("</tr>\n");
    }

    fn header_cell(&mut self, title: Option<&str>) {
        self.output.push_str("<th>");
        if let Some(title) = title {
            self.output.push_str(title);
        }
        self.output.push_str("</th>\n");
    }

    fn image_cell(&mut self, record: Option<&ImageRecord>) {
        match record {
            Some(record) => {
                self.output.push_str("<td><img src=\"");
                self.output.push_str(&record.src);
                self.output.push_str("\" width=\"");
                self.output.push_str(&self.config.image_width.to_string());
                self.output.push_str("\"></td>\n");
            }
            None => self.output.push_str("<td></td>\n"),
        }
    }
}
