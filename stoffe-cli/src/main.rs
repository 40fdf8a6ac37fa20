//! Stoffe CLI
//!
//! Renders text with one allowed kind of tag into a detached `<div>` and
//! prints the resulting tree, so link markup can be checked before it ships.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use stoffe_dom::{DomTree, NodeId};
use stoffe_html::tree_to_string;
use stoffe_utils::{RenderOptions, set_text_with_tag_opts, split};

/// Render text in which one kind of tag is honoured and the rest stays text
#[derive(Parser, Debug)]
#[command(name = "stoffe")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Render text-link anchors, drop everything else to text
    stoffe 'read <a class="text-link" href="/docs" onclick="x()">the docs</a>'

    # Render from a file, resolving relative links
    stoffe --file note.txt --base-url https://example.com/

    # Other markers and element
    stoffe --tag span --open '[[' --close ']]' 'a [[<b class="hl">bold</b>]] word'

    # Show the split fragments as JSON
    stoffe --json 'see <a class="text-link" href="/x">x</a>'
"#)]
struct Cli {
    /// Text to render
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read the text from a file instead
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Element created for each tag
    #[arg(long, default_value = "a")]
    tag: String,

    /// Marker starting a tag
    #[arg(long, default_value = r#"<a class="text-link" "#)]
    open: String,

    /// Marker ending a tag
    #[arg(long, default_value = "</a>")]
    close: String,

    /// Base URL for relative links
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Print the split fragments as JSON instead of rendering
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let text = load_text(&cli)?;

    if cli.json {
        let fragments = split(&text, &cli.open, &cli.close);
        println!("{}", serde_json::to_string_pretty(&fragments)?);
        return Ok(());
    }

    let mut tree = DomTree::new();
    let div = tree.create_element("div");
    tree.append_child(NodeId::ROOT, div);

    let options = RenderOptions {
        base_url: cli.base_url.clone(),
    };
    let report = set_text_with_tag_opts(
        &mut tree.container(div),
        &text,
        &cli.tag,
        &cli.open,
        &cli.close,
        &options,
    );

    println!("=== Rendered ===");
    print!("{}", tree_to_string(&tree, div));
    println!(
        "\n{} text nodes, {} elements",
        report.text_nodes, report.elements
    );

    if !report.issues.is_empty() || !report.markup_issues.is_empty() {
        println!("\n=== Issues ===");
        for issue in &report.issues {
            println!("  - {}", issue.yellow());
        }
        for issue in &report.markup_issues {
            println!("  - markup: {}", issue.message.yellow());
        }
    }

    Ok(())
}

/// Load the text from CLI arguments
fn load_text(cli: &Cli) -> Result<String> {
    if let Some(ref text) = cli.text {
        Ok(text.clone())
    } else if let Some(ref path) = cli.file {
        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))
    } else {
        anyhow::bail!("nothing to render: pass TEXT or --file")
    }
}
