use std::io::Read;
use std::{env, fs, process};

use anyhow::{Context, Result, bail};
use atmark_engine::{
    Direction, MentionDescriptor, MentionSet, apply_change_to_value, get_mentions, get_plain_text,
    map_index,
};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

/// Mention type definitions loaded from a TOML file:
///
/// ```toml
/// [[mention]]
/// markup = "@[__display__](__id__)"
///
/// [[mention]]
/// markup = "#[__display__](__id__)"
/// ```
#[derive(Debug, Deserialize)]
struct MentionTypes {
    #[serde(rename = "mention")]
    mentions: Vec<MentionDescriptor>,
}

fn main() -> Result<()> {
    // Route engine diagnostics (tracing warnings) to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (command, rest) = match args.split_first() {
        Some((command, rest)) => (command.as_str(), rest),
        None => usage(),
    };

    match (command, rest) {
        ("plain", [types, file @ ..]) if file.len() <= 1 => {
            let set = load_set(types)?;
            let value = read_value(file.first())?;
            println!("{}", get_plain_text(&value, &set));
        }
        ("mentions", [types, file @ ..]) if file.len() <= 1 => {
            let set = load_set(types)?;
            let value = read_value(file.first())?;
            let mentions = get_mentions(&value, &set);
            println!("{}", serde_json::to_string_pretty(&mentions)?);
        }
        ("map", [types, offset, direction, file @ ..]) if file.len() <= 1 => {
            let set = load_set(types)?;
            let value = read_value(file.first())?;
            let offset: usize = offset
                .parse()
                .with_context(|| format!("invalid offset `{offset}`"))?;
            let direction = match direction.as_str() {
                "plain-to-markup" => Direction::PlainToMarkup,
                "markup-to-plain" => Direction::MarkupToPlain,
                other => bail!("unknown direction `{other}` (expected plain-to-markup or markup-to-plain)"),
            };
            println!("{}", map_index(&value, &set, offset, direction));
        }
        ("apply", [types, new_plain, caret, file @ ..]) if file.len() <= 1 => {
            let set = load_set(types)?;
            let value = read_value(file.first())?;
            let caret: usize = caret
                .parse()
                .with_context(|| format!("invalid caret position `{caret}`"))?;
            println!("{}", apply_change_to_value(&value, &set, new_plain, caret));
        }
        _ => usage(),
    }

    Ok(())
}

fn usage() -> ! {
    eprintln!("Usage: atmark <command> <types.toml> [args] [value-file]");
    eprintln!();
    eprintln!("The markup value is read from the trailing file argument, or from");
    eprintln!("stdin when no file is given.");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  plain    <types.toml> [file]                     print the plain-text projection");
    eprintln!("  mentions <types.toml> [file]                     list mention occurrences as JSON");
    eprintln!("  map      <types.toml> <offset> <dir> [file]      map an offset between spaces");
    eprintln!("                                                   (dir: plain-to-markup | markup-to-plain)");
    eprintln!("  apply    <types.toml> <new-plain> <caret> [file] reconcile an edited plain text");
    process::exit(1);
}

fn load_set(path: &str) -> Result<MentionSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read mention types from {path}"))?;
    let types: MentionTypes = toml::from_str(&content)
        .with_context(|| format!("failed to parse mention types in {path}"))?;
    Ok(MentionSet::from_descriptors(types.mentions))
}

fn read_value(file: Option<&String>) -> Result<String> {
    let mut value = match file {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read value from stdin")?;
            buffer
        }
    };
    // A trailing newline from a file or pipe is not part of the value.
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    Ok(value)
}
