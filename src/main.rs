use anyhow::{bail, Context, Result};

use model_report_viz::table::render::write_csv;
use model_report_viz::{sample_report, ModelReportVisualizer, RenderOptions};

const USAGE: &str = "\
usage: model-report-viz <command> [options]

commands:
  modules    list module fqns
  features   list feature names (plottable only unless --all)
  tables     print the tensor and channel level tables
  csv        print both tables as CSV
  plot       line plot of one feature
  hist       histogram of one feature
  dump       print the sample report as JSON

options:
  --feature F   feature name filter (substring)
  --module M    module fqn filter (substring)
  --bins N      histogram bin count
  --channels    draw every channel line in plots
  --all         include non-plottable features
  --seed N      seed of the synthetic report (default 42)";

struct Args {
    command: String,
    feature: String,
    module: String,
    bins: Option<usize>,
    channels: bool,
    all: bool,
    seed: u64,
}

fn parse_args() -> Result<Args> {
    let mut raw = std::env::args().skip(1);
    let Some(command) = raw.next() else {
        bail!("missing command\n\n{USAGE}");
    };

    let mut args = Args {
        command,
        feature: String::new(),
        module: String::new(),
        bins: None,
        channels: false,
        all: false,
        seed: 42,
    };
    while let Some(flag) = raw.next() {
        match flag.as_str() {
            "--feature" => args.feature = raw.next().context("--feature needs a value")?,
            "--module" => args.module = raw.next().context("--module needs a value")?,
            "--bins" => {
                let value = raw.next().context("--bins needs a value")?;
                let bins = value
                    .parse()
                    .with_context(|| format!("invalid bin count '{value}'"))?;
                args.bins = Some(bins);
            }
            "--seed" => {
                let value = raw.next().context("--seed needs a value")?;
                args.seed = value.parse().with_context(|| format!("invalid seed '{value}'"))?;
            }
            "--channels" => args.channels = true,
            "--all" => args.all = true,
            other => bail!("unknown option {other}\n\n{USAGE}"),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args()?;
    let options = RenderOptions {
        show_channel_lines: args.channels,
        ..Default::default()
    };
    let visualizer = ModelReportVisualizer::new(sample_report(args.seed)).with_options(options);
    log::info!(
        "sample report with {} modules, capabilities {:?}",
        visualizer.report().len(),
        visualizer.capabilities()
    );

    match args.command.as_str() {
        "modules" => {
            for fqn in visualizer.list_module_ids() {
                println!("{fqn}");
            }
        }
        "features" => {
            for name in visualizer.list_feature_names(!args.all) {
                println!("{name}");
            }
        }
        "tables" => visualizer.render_tables(&args.feature, &args.module)?,
        "csv" => {
            let tables = visualizer.build_tables(&args.feature, &args.module);
            let stdout = std::io::stdout();
            write_csv(&tables.scalar, stdout.lock()).context("writing tensor level table")?;
            write_csv(&tables.channel, stdout.lock()).context("writing channel level table")?;
        }
        "plot" => visualizer
            .render_plot(&args.feature, &args.module)
            .context("plotting feature")?,
        "hist" => visualizer
            .render_histogram(&args.feature, &args.module, args.bins)
            .context("plotting histogram")?,
        "dump" => {
            let json = serde_json::to_string_pretty(visualizer.report())
                .context("serializing sample report")?;
            println!("{json}");
        }
        other => bail!("unknown command {other}\n\n{USAGE}"),
    }
    Ok(())
}
