//! Line-oriented interactive shell over a `Session`.
//!
//! Commands: `add X Y`, `list`, `clear`, `calc`, `help`, `quit`.
//! Failed actions print a message and leave the point store as it was.

use anyhow::Result;
use hullcalc::api::{render_svg, GeomCfg, RenderCfg, Session};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const HELP: &str = "\
commands:
  add X Y   append a vertex
  list      show entered vertices
  clear     remove all vertices and results
  calc      compute hull metrics and draw the chart
  help      show this text
  quit      leave the shell";

/// Shell options fixed for the lifetime of one run.
pub struct ShellOpts {
    pub svg: PathBuf,
    pub render: RenderCfg,
    pub geom: GeomCfg,
}

/// One parsed input line.
#[derive(Debug, PartialEq)]
enum Command<'a> {
    Add(&'a str, &'a str),
    List,
    Clear,
    Calc,
    Help,
    Quit,
    Empty,
    Unknown(&'a str),
}

fn parse_line(line: &str) -> Command<'_> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Command::Empty;
    };
    match head {
        "add" | "a" => {
            let x = words.next().unwrap_or("");
            let y = words.next().unwrap_or("");
            Command::Add(x, y)
        }
        "list" | "ls" => Command::List,
        "clear" => Command::Clear,
        "calc" | "c" => Command::Calc,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Unknown(other),
    }
}

/// Run the shell until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W, opts: &ShellOpts) -> Result<Session> {
    let mut session = Session::with_cfg(opts.geom);
    writeln!(out, "Convex Hull Polygon Calculator (type `help`)")?;
    write!(out, "> ")?;
    out.flush()?;
    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Command::Add(x, y) => match session.add_text(x, y) {
                Ok(p) => writeln!(out, "added ({:?}, {:?}); {} vertices", p.x, p.y, session.len())?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
            Command::List => {
                for (k, entry) in session.listing().iter().enumerate() {
                    writeln!(out, "{:>3}. {entry}", k + 1)?;
                }
            }
            Command::Clear => {
                session.clear();
                writeln!(out, "cleared")?;
            }
            Command::Calc => calc(&mut session, &mut out, opts)?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
            Command::Empty => {}
            Command::Unknown(word) => writeln!(out, "unknown command {word:?} (type `help`)")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    tracing::info!(points = session.len(), "shell_exit");
    Ok(session)
}

fn calc<W: Write>(session: &mut Session, out: &mut W, opts: &ShellOpts) -> Result<()> {
    let report = match session.calculate() {
        Ok(report) => report,
        Err(e) => {
            writeln!(out, "{}", session.result_text())?;
            tracing::warn!(error = %e, "calc_failed");
            return Ok(());
        }
    };
    writeln!(out, "{}", session.result_text())?;
    let svg = render_svg(&report, &opts.render)?;
    write_chart(&opts.svg, &svg)?;
    writeln!(out, "chart written to {}", opts.svg.display())?;
    Ok(())
}

/// Write an SVG document, creating parent directories.
pub fn write_chart(path: &Path, svg: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, svg)?;
    tracing::info!(path = %path.display(), bytes = svg.len(), "chart");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hullcalc::api::TOO_FEW_VERTICES;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_script(script: &str, svg: PathBuf) -> (Session, String) {
        run_script_with(script, svg, GeomCfg::default())
    }

    fn run_script_with(script: &str, svg: PathBuf, geom: GeomCfg) -> (Session, String) {
        let opts = ShellOpts {
            svg,
            render: RenderCfg::default(),
            geom,
        };
        let mut out = Vec::new();
        let session = run(Cursor::new(script), &mut out, &opts).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse_line("  add 1 2 "), Command::Add("1", "2"));
        assert_eq!(parse_line("add 1"), Command::Add("1", ""));
        assert_eq!(parse_line(""), Command::Empty);
        assert_eq!(parse_line("calc"), Command::Calc);
        assert_eq!(parse_line("draw"), Command::Unknown("draw"));
    }

    #[test]
    fn calc_with_two_points_reports_error_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let svg = dir.path().join("hull.svg");
        let (session, out) = run_script("add 0 0\nadd 1 1\ncalc\n", svg.clone());
        assert!(out.contains(TOO_FEW_VERTICES));
        assert_eq!(session.len(), 2);
        assert!(!svg.exists());
    }

    #[test]
    fn bad_number_is_rejected() {
        let dir = tempdir().unwrap();
        let (session, out) = run_script("add x 1\nadd 1\nadd 2 3\n", dir.path().join("h.svg"));
        assert_eq!(out.matches("error:").count(), 2);
        assert_eq!(session.points().len(), 1);
    }

    #[test]
    fn full_session_writes_chart() {
        let dir = tempdir().unwrap();
        let svg = dir.path().join("out").join("hull.svg");
        let script = "add 0 0\nadd 1 0\nadd 1 1\nadd 0 1\nlist\ncalc\nquit\nadd 5 5\n";
        let (session, out) = run_script(script, svg.clone());
        assert!(out.contains("  4. (0.0, 1.0)"));
        assert!(out.contains("Convex Hull Area: 1.000000"));
        assert!(out.contains("Incenter: (0.50, 0.50)"));
        assert!(svg.exists());
        assert_eq!(std::fs::read_dir(dir.path().join("out")).unwrap().count(), 1);
        // input after quit is ignored
        assert_eq!(session.len(), 4);
    }

    #[test]
    fn shell_uses_configured_tolerances() {
        let dir = tempdir().unwrap();
        let svg = dir.path().join("hull.svg");
        let script = "add 0 0\nadd 1 0\nadd 0 1\ncalc\n";
        let merged = GeomCfg {
            eps_dup: 2.0,
            ..GeomCfg::default()
        };
        let (_, out) = run_script_with(script, svg.clone(), merged);
        assert!(out.contains("(1 distinct)"));
        assert!(!svg.exists());

        let (_, out) = run_script(script, svg.clone());
        assert!(out.contains("Convex Hull Area: 0.500000"));
        assert!(svg.exists());
    }

    #[test]
    fn clear_empties_store_and_result() {
        let dir = tempdir().unwrap();
        let script = "add 0 0\nadd 1 0\nadd 0 1\ncalc\nclear\nlist\n";
        let (session, out) = run_script(script, dir.path().join("hull.svg"));
        assert!(out.contains("cleared"));
        assert!(session.is_empty());
        assert_eq!(session.result_text(), "");
    }
}
