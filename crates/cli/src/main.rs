use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hullcalc::api::{draw_cloud, pt, report_and_svg, CloudCfg, GeomCfg, RenderCfg, ReplayToken};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod points;
mod shell;

#[derive(Parser)]
#[command(name = "hullcalc", version = hullcalc::VERSION)]
#[command(about = "Convex hull of entered points: area, perimeter, incircle and circumcircle")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

/// Chart appearance flags shared by `shell` and `calc`.
#[derive(Args, Clone, Debug)]
struct ChartArgs {
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// Hide the background grid
    #[arg(long)]
    no_grid: bool,
    /// Hide the legend
    #[arg(long)]
    no_legend: bool,
}

impl ChartArgs {
    fn render_cfg(&self) -> RenderCfg {
        RenderCfg {
            width: self.width,
            height: self.height,
            grid: !self.no_grid,
            legend: !self.no_legend,
            ..RenderCfg::default()
        }
    }
}

/// Hull tolerances shared by `shell` and `calc`.
#[derive(Args, Clone, Debug)]
struct GeomArgs {
    /// Points closer than this count as one
    #[arg(long, default_value_t = GeomCfg::default().eps_dup)]
    eps_dup: f64,
    /// Relative area below which a hull is degenerate
    #[arg(long, default_value_t = GeomCfg::default().eps_area)]
    eps_area: f64,
}

impl GeomArgs {
    fn geom_cfg(&self) -> GeomCfg {
        GeomCfg {
            eps_dup: self.eps_dup,
            eps_area: self.eps_area,
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Enter vertices interactively, then calculate and draw
    Shell {
        /// Where `calc` writes the chart
        #[arg(long, default_value = "hull.svg")]
        svg: PathBuf,
        #[command(flatten)]
        chart: ChartArgs,
        #[command(flatten)]
        geom: GeomArgs,
    },
    /// Calculate once from an inline list or a CSV file
    Calc {
        /// Points as "x,y;x,y;..."
        #[arg(long, conflicts_with = "input", required_unless_present = "input")]
        points: Option<String>,
        /// CSV file with columns x,y
        #[arg(long)]
        input: Option<PathBuf>,
        /// Also draw the chart to this SVG file
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Print the full report as JSON instead of the text summary
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        chart: ChartArgs,
        #[command(flatten)]
        geom: GeomArgs,
    },
    /// Write a random point cloud as CSV
    Sample {
        #[arg(long, default_value_t = 20)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10.0)]
        radius: f64,
        /// Output CSV; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Shell { svg, chart, geom } => shell_cmd(svg, chart, geom),
        Action::Calc {
            points,
            input,
            svg,
            json,
            chart,
            geom,
        } => calc(points, input, svg, json, chart, geom),
        Action::Sample {
            count,
            seed,
            radius,
            out,
        } => sample(count, seed, radius, out),
    }
}

fn shell_cmd(svg: PathBuf, chart: ChartArgs, geom: GeomArgs) -> Result<()> {
    tracing::info!(svg = %svg.display(), "shell");
    let opts = shell::ShellOpts {
        svg,
        render: chart.render_cfg(),
        geom: geom.geom_cfg(),
    };
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::run(stdin.lock(), stdout.lock(), &opts)?;
    Ok(())
}

fn calc(
    points: Option<String>,
    input: Option<PathBuf>,
    svg: Option<PathBuf>,
    json: bool,
    chart: ChartArgs,
    geom: GeomArgs,
) -> Result<()> {
    let pts = match (&points, &input) {
        (Some(list), _) => points::parse_inline(list)?,
        (None, Some(path)) => points::read_csv(path)?,
        (None, None) => bail!("either --points or --input is required"),
    };
    tracing::info!(points = pts.len(), input = ?input, "calc");

    let (report, doc) = report_and_svg(&pts, &geom.geom_cfg(), &chart.render_cfg())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
    }
    if let Some(svg_path) = svg {
        shell::write_chart(&svg_path, &doc)?;
    }
    Ok(())
}

fn sample(count: usize, seed: u64, radius: f64, out: Option<PathBuf>) -> Result<()> {
    let cfg = CloudCfg {
        count,
        radius,
        center: pt(0.0, 0.0),
    };
    let cloud = draw_cloud(cfg, ReplayToken::new(seed));
    tracing::info!(count, seed, radius, "sample");
    match out {
        Some(path) => {
            points::write_csv(&path, &cloud)
                .with_context(|| format!("writing sample to {}", path.display()))?;
        }
        None => {
            println!("x,y");
            for p in &cloud {
                println!("{:?},{:?}", p.x, p.y);
            }
        }
    }
    Ok(())
}
