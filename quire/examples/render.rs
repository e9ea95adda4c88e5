use std::{fs, path::PathBuf};

use quire::{text, DocumentBuilder};
use structopt::StructOpt;

/// Wrap a plain-text file and render it as a PDF.
#[derive(StructOpt, Debug)]
#[structopt(name = "render")]
struct Opt {
    /// Input text file
    #[structopt(short, long, parse(from_os_str))]
    input: PathBuf,

    /// Output file
    #[structopt(short, long, parse(from_os_str))]
    output: PathBuf,
}

pub fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    let raw = match fs::read_to_string(&opt.input) {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("Could not read {}: {}", opt.input.display(), e);
            return;
        }
    };

    let mut lines = Vec::new();
    for paragraph in raw.lines() {
        lines.extend(text::wrap_paragraph(paragraph, text::DEFAULT_WIDTH));
    }
    let pages = text::paginate(&lines, text::DEFAULT_PAGE_LINES);

    let mut builder = DocumentBuilder::new();
    for page in &pages {
        if let Err(e) = builder.add_page(page) {
            log::error!("Error while adding a page: {}", e);
            return;
        }
    }
    if let Err(e) = builder.finish(&opt.output) {
        log::error!("Error while writing: {}", e);
        return;
    }

    println!(
        "Generated {} with {} page(s).",
        opt.output.display(),
        pages.len()
    );
}
