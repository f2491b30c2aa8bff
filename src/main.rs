use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::error;

use darknet_cfg::{
    build_reference_detector, Augmentation, CfgError, ExportConfig, LineEnding, NetworkDescriptor,
    Optimizer, DEFAULT_ANCHORS,
};

/// Generate darknet network configuration files.
#[derive(Parser, Debug)]
#[command(name = "darknet-cfg", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the three-scale reference detector
    Yolov3 {
        #[command(flatten)]
        shape: ReferenceArgs,

        /// Omit the optimization parameters block
        #[arg(long)]
        no_optimizer: bool,

        /// Omit the image augmentation block
        #[arg(long)]
        no_augmentation: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Render a JSON network description as a darknet configuration
    Render {
        /// JSON file written by `dump-spec` (or by hand)
        spec: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Write the reference detector as an editable JSON description
    DumpSpec {
        #[command(flatten)]
        shape: ReferenceArgs,

        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct ReferenceArgs {
    /// Number of object classes
    #[arg(long, default_value_t = 80)]
    classes: u32,

    /// Input width
    #[arg(long, default_value_t = 608)]
    width: u32,

    /// Input height
    #[arg(long, default_value_t = 608)]
    height: u32,

    /// Input channels
    #[arg(long, default_value_t = 3)]
    channels: u32,

    /// Flattened anchor set: w0,h0,w1,h1,...
    #[arg(long, value_delimiter = ',')]
    anchors: Option<Vec<u32>>,
}

impl ReferenceArgs {
    fn network(&self) -> NetworkDescriptor {
        let anchors = self.anchors.clone().unwrap_or_else(|| DEFAULT_ANCHORS.to_vec());
        let num_anchors = (anchors.len() / 2) as u32;
        let layers = build_reference_detector(self.classes, &anchors, num_anchors);
        let optimizer = Optimizer {
            num_classes: u64::from(self.classes),
            ..Optimizer::default()
        };
        NetworkDescriptor::new(self.width, self.height, self.channels)
            .with_optimizer(optimizer)
            .with_augmentation(Augmentation::default())
            .with_layers(layers)
    }
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Output path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Line terminator
    #[arg(long, value_enum, default_value_t = LineEndingArg::Native)]
    line_ending: LineEndingArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum LineEndingArg {
    Lf,
    Crlf,
    Native,
}

impl From<LineEndingArg> for LineEnding {
    fn from(arg: LineEndingArg) -> Self {
        match arg {
            LineEndingArg::Lf => LineEnding::Lf,
            LineEndingArg::Crlf => LineEnding::CrLf,
            LineEndingArg::Native => LineEnding::Native,
        }
    }
}

fn write_cfg(net: &NetworkDescriptor, output: &OutputArgs) -> Result<(), CfgError> {
    let config = ExportConfig::new(output.line_ending.into());
    match &output.output {
        Some(path) => net.generate_config(path, &config),
        None => net.export(io::stdout().lock(), &config),
    }
}

fn write_json(net: &NetworkDescriptor, path: Option<&Path>) -> Result<(), CfgError> {
    match path {
        Some(path) => net.save_json(path),
        None => {
            serde_json::to_writer_pretty(io::stdout().lock(), net)?;
            println!();
            Ok(())
        }
    }
}

fn run(cli: Cli) -> Result<(), CfgError> {
    match cli.command {
        Command::Yolov3 {
            shape,
            no_optimizer,
            no_augmentation,
            output,
        } => {
            let mut net = shape.network();
            if no_optimizer {
                net.optimizer = None;
            }
            if no_augmentation {
                net.augmentation = None;
            }
            write_cfg(&net, &output)
        }
        Command::Render { spec, output } => {
            let net = NetworkDescriptor::load_json(&spec)?;
            write_cfg(&net, &output)
        }
        Command::DumpSpec { shape, output } => write_json(&shape.network(), output.as_deref()),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
