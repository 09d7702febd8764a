use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tilegrid::store::{JsonFileStore, MemoryStore, ParamStore};
use tilegrid::types::{
    DEFAULT_IMAGE_SOURCE, DEFAULT_PNG_FILE, DEFAULT_TILESET_NAME, DEFAULT_TSX_FILE,
    PartialParameters,
};
use tilegrid::{DescriptorOptions, GridType, Session, load_parameters};

#[derive(Parser, Debug)]
#[command(name = "tilegrid", version, about = "Tileset grid previews and Tiled descriptors")]
struct Cli {
    /// YAML file with grid parameters
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Share string to apply, e.g. "gridType=isometric&tileWidth=64"
    #[arg(long, global = true)]
    query: Option<String>,
    /// JSON file that remembers the last parameters per grid type
    #[arg(long, global = true)]
    store: Option<PathBuf>,
    #[command(flatten)]
    overrides: Overrides,
    #[command(subcommand)]
    cmd: Command,
}

/// Individual parameters; applied after config, store and query.
#[derive(Args, Debug, Default)]
struct Overrides {
    #[arg(long, global = true)]
    grid_type: Option<GridType>,
    #[arg(long, global = true)]
    tile_width: Option<i32>,
    /// Ignored for isometric grids (always half the width)
    #[arg(long, global = true)]
    tile_height: Option<i32>,
    #[arg(long, global = true)]
    margin: Option<i32>,
    #[arg(long, global = true)]
    spacing: Option<i32>,
    #[arg(long, global = true)]
    tiles_per_row: Option<i32>,
    #[arg(long, global = true)]
    tiles_per_col: Option<i32>,
    #[arg(long, global = true)]
    draw_padding: Option<i32>,
    #[arg(long, global = true)]
    extra_height: Option<i32>,
}

impl Overrides {
    fn to_partial(&self) -> PartialParameters {
        PartialParameters {
            grid_type: self.grid_type,
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            margin: self.margin,
            spacing: self.spacing,
            tiles_per_row: self.tiles_per_row,
            tiles_per_col: self.tiles_per_col,
            draw_padding: self.draw_padding,
            extra_height: self.extra_height,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Paint the grid and write it as PNG
    Render {
        #[arg(long, default_value = DEFAULT_PNG_FILE)]
        out: PathBuf,
    },
    /// Write a Tiled tileset descriptor (.tsx)
    Tsx {
        #[arg(long, default_value = DEFAULT_TSX_FILE)]
        out: PathBuf,
        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
        #[arg(long, default_value = DEFAULT_TILESET_NAME)]
        name: String,
        #[arg(long, default_value = DEFAULT_IMAGE_SOURCE)]
        image_source: String,
    },
    /// Print the share string (or a full link when a base URL is given)
    Share {
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Print canvas size and cell placements
    Show {
        /// Also list every cell
        #[arg(long)]
        cells: bool,
    },
    /// Switch grid type, restoring that type's last saved parameters
    Switch {
        #[arg(value_name = "GRID_TYPE")]
        target: GridType,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match &cli.store {
        Some(path) => {
            let store = JsonFileStore::open(path)
                .with_context(|| format!("failed to open store {}", path.display()))?;
            run(&cli, Session::open(store)?)
        }
        None => run(&cli, Session::open(MemoryStore::new())?),
    }
}

fn run<S: ParamStore>(cli: &Cli, mut session: Session<S>) -> Result<()> {
    if let Some(config) = &cli.config {
        let params = load_parameters(config)
            .with_context(|| format!("failed to load {}", config.display()))?;
        session.update(params)?;
    }
    if let Some(query) = &cli.query {
        session.apply_query(query).context("bad share string")?;
    }
    let overrides = cli.overrides.to_partial();
    if overrides != PartialParameters::default() {
        session.update(overrides.apply_to(session.params()))?;
    }

    match &cli.cmd {
        Command::Render { out } => {
            session.export_png(out)?;
            let layout = session.layout()?;
            println!(
                "Wrote {}x{} image to {}",
                layout.canvas_width(),
                layout.canvas_height(),
                out.display()
            );
        }
        Command::Tsx {
            out,
            stdout,
            name,
            image_source,
        } => {
            let options = DescriptorOptions {
                name: name.clone(),
                image_source: image_source.clone(),
            };
            if *stdout {
                println!("{}", session.descriptor(&options)?);
            } else {
                session.export_descriptor(&options, out)?;
                println!("Wrote {}", out.display());
            }
        }
        Command::Share { base_url } => {
            let query = session.share_query();
            match base_url {
                Some(base) => println!("{}?{}", base.trim_end_matches('?'), query),
                None => println!("{query}"),
            }
        }
        Command::Show { cells } => {
            let layout = session.layout()?;
            let p = layout.params();
            println!("grid: {}", p.grid_type);
            println!("  tile: {}x{}", p.tile_width, p.tile_height);
            println!(
                "  drawing rect: {}x{}",
                layout.draw_rect_width(),
                layout.draw_rect_height()
            );
            println!("  tiles: {} ({} columns x {} rows)", layout.tile_count(), layout.columns(), layout.rows());
            println!("  margin: {}, spacing: {}", p.margin, p.spacing);
            println!("  canvas: {}x{}", layout.canvas_width(), layout.canvas_height());
            if *cells {
                for cell in layout.cells() {
                    let r = cell.outer_rect;
                    println!(
                        "  [{}, {}] rect=({}, {}, {}x{}) tile=({}, {})",
                        cell.row,
                        cell.col,
                        r.x(),
                        r.y(),
                        r.width(),
                        r.height(),
                        cell.inner_origin.x,
                        cell.inner_origin.y
                    );
                }
            }
        }
        Command::Switch { target } => {
            session.switch_grid_type(*target)?;
            println!("{}", session.share_query());
        }
    }

    Ok(())
}
