use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "jungle", version)]
struct Cli {
    /// Catalog JSON (defaults to the bundled catalog).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// View configuration JSON (layout and viewport tunables).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print atom positions, tier blocks and content height as JSON.
    Layout(FilterArgs),
    /// Print resolved bond segments as JSON.
    Bonds(FilterArgs),
    /// Print the detail panel of one atom as JSON.
    Inspect {
        /// Atom id.
        id: u32,
    },
    /// List tiers in canonical order with their description and atom count.
    Tiers,
    /// Validate the catalog and report bonds that are unresolvable or declared by one side only.
    Check,
    /// Render a snapshot of the view as SVG, or PNG when the output ends in `.png`.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FilterArgs {
    /// Only show atoms of this tier (quantum, gpu, cpu, meta).
    #[arg(long)]
    tier: Option<atom_jungle::Tier>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output path (.svg or .png).
    #[arg(long)]
    out: PathBuf,

    /// Initial tier filter.
    #[arg(long)]
    tier: Option<atom_jungle::Tier>,

    /// Initially selected atom id.
    #[arg(long)]
    select: Option<u32>,

    /// JSON array of actions replayed after the initial filter and selection.
    #[arg(long)]
    events: Option<PathBuf>,

    /// Comma-separated key names pressed after the events (e.g. `ArrowUp,+,-`).
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Snapshot width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Snapshot height in pixels.
    #[arg(long, default_value_t = 800)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;
    let config = match cli.config.as_deref() {
        Some(path) => atom_jungle::JungleConfig::from_path(path)?,
        None => atom_jungle::JungleConfig::default(),
    };

    match cli.cmd {
        Command::Layout(args) => cmd_layout(&catalog, &config, args),
        Command::Bonds(args) => cmd_bonds(&catalog, &config, args),
        Command::Inspect { id } => cmd_inspect(&catalog, id),
        Command::Tiers => cmd_tiers(&catalog),
        Command::Check => cmd_check(&catalog),
        Command::Render(args) => cmd_render(&catalog, &config, args),
    }
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<atom_jungle::Catalog> {
    let catalog = match path {
        Some(p) => atom_jungle::Catalog::from_path(p)?,
        None => atom_jungle::Catalog::builtin().context("load bundled catalog")?,
    };
    Ok(catalog)
}

fn cmd_layout(
    catalog: &atom_jungle::Catalog,
    config: &atom_jungle::JungleConfig,
    args: FilterArgs,
) -> anyhow::Result<()> {
    let atoms = catalog.filtered(args.tier);
    let layout = atom_jungle::layout_atoms(atoms.iter().copied(), &config.layout);
    print_json(&layout)
}

fn cmd_bonds(
    catalog: &atom_jungle::Catalog,
    config: &atom_jungle::JungleConfig,
    args: FilterArgs,
) -> anyhow::Result<()> {
    let atoms = catalog.filtered(args.tier);
    let layout = atom_jungle::layout_atoms(atoms.iter().copied(), &config.layout);
    let bonds = atom_jungle::resolve_bonds(&atoms, &layout);
    print_json(&bonds)
}

fn cmd_inspect(catalog: &atom_jungle::Catalog, id: u32) -> anyhow::Result<()> {
    let atom = catalog
        .get(atom_jungle::AtomId(id))
        .with_context(|| format!("no atom with id {id}"))?;
    print_json(&atom_jungle::DetailPanel::for_atom(atom, catalog))
}

#[derive(serde::Serialize)]
struct TierSummary {
    tier: atom_jungle::Tier,
    label: &'static str,
    description: &'static str,
    color: String,
    atoms: usize,
}

fn cmd_tiers(catalog: &atom_jungle::Catalog) -> anyhow::Result<()> {
    let counts = catalog.tier_counts();
    let tiers: Vec<TierSummary> = atom_jungle::Tier::ALL
        .into_iter()
        .map(|tier| TierSummary {
            tier,
            label: tier.label(),
            description: tier.description(),
            color: tier.color().css(None),
            atoms: counts.get(&tier).copied().unwrap_or(0),
        })
        .collect();
    print_json(&tiers)
}

fn cmd_check(catalog: &atom_jungle::Catalog) -> anyhow::Result<()> {
    let dangling = catalog.dangling_bonds();
    for (id, symbol) in &dangling {
        tracing::warn!(%id, symbol, "bond names no atom in the catalog");
    }
    let one_sided = catalog.one_sided_bonds();
    for (from, to) in &one_sided {
        tracing::info!(%from, %to, "bond declared by one side only");
    }
    eprintln!(
        "{} atoms, {} unresolved bonds, {} one-sided bonds",
        catalog.len(),
        dangling.len(),
        one_sided.len()
    );
    Ok(())
}

fn cmd_render(
    catalog: &atom_jungle::Catalog,
    config: &atom_jungle::JungleConfig,
    args: RenderArgs,
) -> anyhow::Result<()> {
    let mut initial = Vec::new();
    if let Some(tier) = args.tier {
        initial.push(atom_jungle::Action::SelectTier(tier));
    }
    if let Some(id) = args.select {
        initial.push(atom_jungle::Action::ClickAtom(atom_jungle::AtomId(id)));
    }
    let mut events = match &args.events {
        Some(path) => read_actions(path)?,
        None => Vec::new(),
    };
    for name in &args.keys {
        match atom_jungle::Key::from_key_name(name) {
            Some(key) => events.push(atom_jungle::Action::Input(atom_jungle::InputEvent::Key(key))),
            None => tracing::warn!(key = %name, "ignoring unknown key"),
        }
    }

    let state = atom_jungle::replay(
        atom_jungle::ViewState::new(config),
        catalog,
        initial.into_iter().chain(events),
    );
    let scene = state.scene(catalog, &config.layout);

    let opts = atom_jungle::SvgOptions {
        width: args.width,
        height: args.height,
        ..atom_jungle::SvgOptions::default()
    };
    let svg = atom_jungle::render_svg(&scene, &state.viewport.viewport, &opts);

    let is_png = args
        .out
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if is_png {
        let img = atom_jungle::rasterize_svg(&svg)?;
        atom_jungle::write_png(&args.out, &img)?;
    } else {
        if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(&args.out, svg)
            .with_context(|| format!("write svg '{}'", args.out.display()))?;
    }

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn read_actions(path: &Path) -> anyhow::Result<Vec<atom_jungle::Action>> {
    let f = File::open(path).with_context(|| format!("open events '{}'", path.display()))?;
    let actions: Vec<atom_jungle::Action> =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse events JSON")?;
    Ok(actions)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{s}");
    Ok(())
}
