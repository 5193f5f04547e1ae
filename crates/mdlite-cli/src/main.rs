//! mdlite CLI - Render mdlite documents to HTML or dump their structure
//!
//! Usage:
//!   mdlite [OPTIONS] [COMMAND] <FILE>
//!
//! Commands:
//!   html      Render the document body as HTML (default)
//!   dump      Print the document tree as JSON
//!   meta      Print the front matter as JSON
//!   stats     Show document statistics

use std::env;
use std::fs;
use std::process;

use mdlite_core::{dump, Block, Document, HtmlRenderer, Inline, ParseResult, Parser};

fn main() {
    let args: Vec<String> = env::args().collect();

    match run(&args) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let config = parse_args(args)?;

    let input = fs::read(&config.file)
        .map_err(|e| format!("failed to read '{}': {}", config.file, e))?;

    let parser = Parser::new().with_front_matter(config.front_matter);
    let result = parser
        .parse_bytes(&input)
        .map_err(|e| format!("{}: {}", config.file, e))?;

    match config.command {
        Command::Html => cmd_html(&result, &config),
        Command::Dump => cmd_dump(&result, &config),
        Command::Meta => cmd_meta(&result, &config),
        Command::Stats => cmd_stats(&result, &input),
    }
}

#[derive(Debug)]
struct Config {
    command: Command,
    file: String,
    pretty: bool,
    escape: bool,
    front_matter: bool,
}

#[derive(Debug, Clone, Copy)]
enum Command {
    Html,
    Dump,
    Meta,
    Stats,
}

fn parse_args(args: &[String]) -> Result<Config, String> {
    let mut command = Command::Html;
    let mut pretty = false;
    let mut escape = false;
    let mut front_matter = true;
    let mut file = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("mdlite {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-p" | "--pretty" => pretty = true,
            "-e" | "--escape" => escape = true,
            "--no-front-matter" => front_matter = false,
            "html" => command = Command::Html,
            "dump" => command = Command::Dump,
            "meta" => command = Command::Meta,
            "stats" => command = Command::Stats,
            _ if arg.starts_with('-') => {
                return Err(format!("unknown option: {}", arg));
            }
            _ => {
                if file.is_some() {
                    return Err("multiple files specified".to_string());
                }
                file = Some(arg.clone());
            }
        }
    }

    let file = file.ok_or_else(|| "no input file specified".to_string())?;

    Ok(Config {
        command,
        file,
        pretty,
        escape,
        front_matter,
    })
}

fn print_help() {
    eprintln!(
        r#"mdlite - render mdlite documents to HTML

USAGE:
    mdlite [OPTIONS] [COMMAND] <FILE>

COMMANDS:
    html        Render the document body as HTML (default)
    dump        Print the document tree as JSON
    meta        Print the front matter as JSON
    stats       Show document statistics

OPTIONS:
    -p, --pretty          Indent JSON output
    -e, --escape          Escape HTML special characters in text
        --no-front-matter Treat a leading --- as body content
    -h, --help            Print help information
    -V, --version         Print version information

EXAMPLES:
    mdlite post.md              Render a post to HTML
    mdlite -e post.md           Render with text escaped
    mdlite dump -p post.md      Print the tree as indented JSON
    mdlite meta post.md         Print the front matter
"#
    );
}

// =============================================================================
// Output Commands
// =============================================================================

fn cmd_html(result: &ParseResult, config: &Config) -> Result<(), String> {
    let renderer = HtmlRenderer::new().with_escaping(config.escape);
    print!("{}", renderer.render(&result.document));
    Ok(())
}

fn cmd_dump(result: &ParseResult, config: &Config) -> Result<(), String> {
    let json = if config.pretty {
        dump::to_json_pretty(&result.document)
    } else {
        dump::to_json(&result.document)
    };
    println!("{}", json.map_err(|e| format!("failed to serialize tree: {}", e))?);
    Ok(())
}

fn cmd_meta(result: &ParseResult, config: &Config) -> Result<(), String> {
    let json = if config.pretty {
        serde_json::to_string_pretty(&result.metadata)
    } else {
        serde_json::to_string(&result.metadata)
    };
    println!(
        "{}",
        json.map_err(|e| format!("failed to serialize metadata: {}", e))?
    );
    Ok(())
}

// =============================================================================
// Stats Command
// =============================================================================

fn cmd_stats(result: &ParseResult, input: &[u8]) -> Result<(), String> {
    let stats = DocumentStats::from_document(&result.document, input);

    println!("Document Statistics");
    println!("-------------------");
    println!("Metadata keys:  {}", result.metadata.len());
    for (key, value) in &result.metadata {
        println!("  {}: {}", key, value);
    }
    println!();
    println!("Content:");
    println!("  Total blocks:   {}", stats.total_blocks);
    println!("  Headings:       {}", stats.headings);
    println!("  Paragraphs:     {}", stats.paragraphs);
    println!("  Code blocks:    {}", stats.code_blocks);
    println!("  Lists:          {}", stats.lists);
    println!("  List items:     {}", stats.list_items);
    println!("  Links:          {}", stats.links);
    println!();
    println!("Size:");
    println!("  Bytes:          {}", stats.bytes);
    println!("  Lines:          {}", stats.lines);

    Ok(())
}

#[derive(Debug, Default)]
struct DocumentStats {
    total_blocks: usize,
    headings: usize,
    paragraphs: usize,
    code_blocks: usize,
    lists: usize,
    list_items: usize,
    links: usize,
    bytes: usize,
    lines: usize,
}

impl DocumentStats {
    fn from_document(doc: &Document, input: &[u8]) -> Self {
        let mut stats = Self {
            bytes: input.len(),
            lines: input.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count(),
            ..Self::default()
        };

        for block in &doc.blocks {
            stats.total_blocks += 1;
            match block {
                Block::Heading(_) => stats.headings += 1,
                Block::Paragraph(p) => {
                    stats.paragraphs += 1;
                    stats.count_links(&p.content);
                }
                Block::CodeBlock(_) => stats.code_blocks += 1,
                Block::List(l) => {
                    stats.lists += 1;
                    stats.list_items += l.items.len();
                    for item in &l.items {
                        stats.count_links(&item.content);
                    }
                }
            }
        }

        stats
    }

    fn count_links(&mut self, inlines: &[Inline]) {
        self.links += inlines
            .iter()
            .filter(|i| matches!(i, Inline::Link(_)))
            .count();
    }
}
