//! Generate Playbook PDFs
//!
//! Renders every playbook in the catalog to a PDF file.
//!
//! Usage:
//!   cargo run --release --bin generate_playbooks
//!   cargo run --release --bin generate_playbooks -- --output-dir custom/path
//!   cargo run --release --bin generate_playbooks -- --catalog extra.json

use playbook_press::catalog::Catalog;
use playbook_press::compose;
use playbook_press::config::Palette;
use playbook_press::writer::DocumentAssembler;
use std::path::PathBuf;

struct GenerateConfig {
    output_dir: PathBuf,
    catalog_path: Option<PathBuf>,
    verbose: bool,
}

impl GenerateConfig {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let mut output_dir = PathBuf::from("assets/playbooks");
        let mut catalog_path = None;
        let mut verbose = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--output-dir" => {
                    i += 1;
                    if i < args.len() {
                        output_dir = PathBuf::from(&args[i]);
                    }
                },
                "--catalog" => {
                    i += 1;
                    if i < args.len() {
                        catalog_path = Some(PathBuf::from(&args[i]));
                    }
                },
                "--verbose" | "-v" => {
                    verbose = true;
                },
                _ => {},
            }
            i += 1;
        }

        Self { output_dir, catalog_path, verbose }
    }
}

fn run(config: &GenerateConfig) -> playbook_press::Result<()> {
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin(),
    };
    let palette = Palette::default();

    std::fs::create_dir_all(&config.output_dir)?;

    for book in &catalog.playbooks {
        let mut doc = DocumentAssembler::new();
        for page in compose::pages(book, &catalog.stats, &catalog.sources, palette)? {
            doc.add_page(page);
        }
        let path = config.output_dir.join(format!("{}.pdf", book.slug));
        doc.build(&path)?;
        log::info!("wrote {} ({} pages)", path.display(), doc.page_count());
        if config.verbose {
            println!("  {} -> {}", book.title, path.display());
        }
    }

    println!("Generated {} playbooks in {}", catalog.playbooks.len(), config.output_dir.display());
    Ok(())
}

fn main() {
    env_logger::init();
    let config = GenerateConfig::from_args();
    if let Err(err) = run(&config) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
