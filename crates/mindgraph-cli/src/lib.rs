//! CLI logic for the mindgraph mind-map tool.
//!
//! Every subcommand loads one document into a [`Session`], then checks,
//! converts, prints or exports it. The `watch` subcommand keeps a session
//! alive and re-exports a markdown file as its edits settle.

pub mod error_adapter;

mod args;
mod config;
mod tree_view;
mod watch;

pub use args::{Args, Command};
pub use watch::Watcher;

use std::{fs, path::Path, time::Duration};

use log::info;

use mindgraph::{
    MindgraphError, Session,
    export::{json_export_name, markdown_export_name},
};

/// Run the mindgraph CLI application
///
/// # Errors
///
/// Returns `MindgraphError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Markdown or JSON parse errors
/// - Documents that are not a single-root tree
pub fn run(args: &Args) -> Result<(), MindgraphError> {
    let app_config = config::load_config(args.config.as_ref())?;

    match &args.command {
        Command::Check { input } => {
            let session = load(input, Session::new(app_config))?;
            if let Some(tree) = session.tree() {
                info!(input_path = input, root:% = tree.root_id(), nodes = tree.len(); "Document is valid");
            }
        }
        Command::Convert { input, output } => {
            let session = load(input, Session::new(app_config))?;
            let json = session.export_json()?;
            match output {
                Some(output) => {
                    fs::write(output, json)?;
                    info!(output_file = output; "JSON exported successfully");
                }
                None => println!("{json}"),
            }
        }
        Command::Tree { input } => {
            let session = load(input, Session::new(app_config))?;
            let tree = session.tree().ok_or(MindgraphError::NoDocument)?;
            print!("{}", tree_view::render(tree));
        }
        Command::Export { input, output } => {
            export(input, Path::new(output), Session::new(app_config))?;
        }
        Command::Watch {
            input,
            output,
            poll_ms,
        } => {
            Watcher::new(input, output, app_config).run(Duration::from_millis(*poll_ms));
        }
    }

    Ok(())
}

/// Returns `true` for paths read as markdown outlines.
fn is_markdown(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}

fn load(input: &str, mut session: Session) -> Result<Session, MindgraphError> {
    info!(input_path = input; "Loading document");
    let source = fs::read_to_string(input)?;

    if is_markdown(input) {
        if !session.apply_markdown(&source)? {
            return Err(MindgraphError::NoDocument);
        }
    } else {
        session.load_json(&source)?;
    }
    Ok(session)
}

fn export(input: &str, dir: &Path, session: Session) -> Result<(), MindgraphError> {
    let session = load(input, session)?;
    fs::create_dir_all(dir)?;

    let json_path = dir.join(json_export_name(session.pipeline().config().export()));
    fs::write(&json_path, session.export_json()?)?;
    info!(output_file = json_path.display().to_string(); "JSON exported successfully");

    if is_markdown(input) {
        let text = fs::read_to_string(input)?;
        let md_path = dir.join(markdown_export_name(&text));
        fs::write(&md_path, text)?;
        info!(output_file = md_path.display().to_string(); "Markdown exported successfully");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_markdown() {
        assert!(is_markdown("notes.md"));
        assert!(is_markdown("dir/Notes.MARKDOWN"));
        assert!(!is_markdown("graph.json"));
        assert!(!is_markdown("README"));
    }

    #[test]
    fn test_export_markdown_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.md");
        fs::write(&input, "# Road trip\n- fuel\n").unwrap();
        let out = dir.path().join("out");

        export(input.to_str().unwrap(), &out, Session::default()).unwrap();

        let json = fs::read_to_string(out.join("知识图谱.json")).unwrap();
        assert!(json.contains(r#""str":"fuel""#));
        let md = fs::read_to_string(out.join("Road trip.md")).unwrap();
        assert_eq!(md, "# Road trip\n- fuel\n");
    }

    #[test]
    fn test_export_json_writes_only_json() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("graph.json");
        fs::write(&input, r#"{"verts":[{"id":"1","str":"Hi"}],"edges":[]}"#).unwrap();
        let out = dir.path().join("out");

        export(input.to_str().unwrap(), &out, Session::default()).unwrap();

        let names: Vec<_> = fs::read_dir(&out)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["知识图谱.json"]);
    }

    #[test]
    fn test_empty_markdown_is_no_document() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("empty.md");
        fs::write(&input, "\n\n").unwrap();

        let err = load(input.to_str().unwrap(), Session::default()).unwrap_err();
        assert!(matches!(err, MindgraphError::NoDocument));
    }
}
