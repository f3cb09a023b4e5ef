use std::fs;
use std::path::Path;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

const REPORT_CSS: &str = "
body { font-family: sans-serif; margin: 0 auto; max-width: 1100px; padding: 0 16px; color: #262730; }
header { display: flex; align-items: center; gap: 12px; border-bottom: 1px solid #e6e6e6; }
header img { height: 48px; }
section { margin: 24px 0; }
details { border: 1px solid #e6e6e6; border-radius: 5px; padding: 8px 12px; }
summary { cursor: pointer; font-weight: 600; }
table { border-collapse: collapse; font-size: 0.85em; overflow-x: auto; display: block; }
th, td { border: 1px solid #e6e6e6; padding: 4px 8px; text-align: right; white-space: nowrap; }
th { background-color: #f5f5f5; }
.metric-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; }
.metric-card { margin-bottom: 16px; }
.metric-label { font-size: 0.85em; color: #555; }
.metric-value { font-size: 1.8em; }
.delta-up { color: #09ab3b; }
.delta-down { color: #ff2b2b; }
.delta-none { color: #808495; }
.caption { font-size: 0.85em; color: #808495; }
.empty-state { background-color: #fff8e1; border-radius: 5px; padding: 10px; }
footer { font-size: 0.8em; color: #808495; border-top: 1px solid #e6e6e6; padding: 8px 0; }
";

enum Block {
    Content(Markup),
    Plot(Box<Plot>),
}

/// A titled block of markup and plots.
pub struct ReportSection {
    title: String,
    collapsible: bool,
    blocks: Vec<Block>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            collapsible: false,
            blocks: Vec::new(),
        }
    }

    /// Render the section folded behind its title.
    pub fn collapsible(mut self) -> Self {
        self.collapsible = true;
        self
    }

    pub fn add_content(&mut self, content: Markup) {
        self.blocks.push(Block::Content(content));
    }

    pub fn add_plot(&mut self, plot: Plot) {
        self.blocks.push(Block::Plot(Box::new(plot)));
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn render(&self, section_idx: usize) -> Markup {
        let body = html! {
            @for (block_idx, block) in self.blocks.iter().enumerate() {
                @match block {
                    Block::Content(markup) => {
                        div class="content" { (markup) }
                    },
                    Block::Plot(plot) => {
                        div class="plot" {
                            (PreEscaped(plot.to_inline_html(Some(&format!("plot-{}-{}", section_idx, block_idx)))))
                        }
                    },
                }
            }
        };
        html! {
            section {
                @if self.collapsible {
                    details {
                        summary { (self.title) }
                        (body)
                    }
                } @else {
                    h2 { (self.title) }
                    (body)
                }
            }
        }
    }
}

/// A self-contained HTML report.
pub struct Report {
    software_name: String,
    version: String,
    logo: Option<String>,
    title: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(software_name: &str, version: &str, logo: Option<&str>, title: &str) -> Self {
        Self {
            software_name: software_name.to_string(),
            version: version.to_string(),
            logo: logo.map(str::to_string),
            title: title.to_string(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[ReportSection] {
        &self.sections
    }

    pub fn render(&self) -> Markup {
        let generated = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) }
                    script src=(PLOTLY_CDN) {}
                    style { (PreEscaped(REPORT_CSS)) }
                }
                body {
                    header {
                        @if let Some(logo) = &self.logo {
                            img src=(logo) alt=(self.software_name);
                        }
                        h1 { (self.title) }
                    }
                    @for (idx, section) in self.sections.iter().enumerate() {
                        (section.render(idx))
                    }
                    footer {
                        (self.software_name) " v" (self.version) " \u{00B7} generated " (generated)
                    }
                }
            }
        }
    }

    pub fn to_html(&self) -> String {
        self.render().into_string()
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        fs::write(path.as_ref(), self.to_html())?;
        log::info!("Report written to {}", path.as_ref().display());
        Ok(())
    }
}
