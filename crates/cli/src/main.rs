use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use clap::{Arg, ArgAction, ArgMatches, Command};
use fieldguide_engine::{GuideResolver, generator};
use fieldguide_registry::{GuideCatalog, GuideSettings};
use fieldguide_types::FieldDescriptor;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod render;

/// Column width used when neither `--width` nor the settings file provide one.
const DEFAULT_WRAP_WIDTH: usize = 80;

fn main() -> Result<()> {
    init_tracing();
    let matches = build_cli().get_matches();
    let settings = GuideSettings::load();

    match matches.subcommand() {
        Some(("resolve", sub)) => run_resolve(&settings, sub),
        Some(("catalog", sub)) => run_catalog(&settings, sub),
        Some(("categories", _)) => {
            print_categories();
            Ok(())
        }
        _ => bail!("expected a subcommand; run with --help for usage"),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_cli() -> Command {
    let descriptor_flag = |id: &'static str, long: &'static str, help: &'static str| {
        Arg::new(id).long(long).action(ArgAction::Set).help(help)
    };

    Command::new("fieldguide")
        .about("Explain how to obtain the value a workflow field expects")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("resolve")
                .about("Resolve one field descriptor to a guide")
                .arg(
                    Arg::new("descriptor")
                        .long("descriptor")
                        .short('d')
                        .action(ArgAction::Set)
                        .help("Path to a YAML or JSON field descriptor; flags override its members"),
                )
                .arg(descriptor_flag("node-type", "node-type", "Node type that owns the field"))
                .arg(descriptor_flag("key", "key", "Field key from the node schema"))
                .arg(descriptor_flag("label", "label", "Human label shown in the form"))
                .arg(descriptor_flag("type", "type", "Declared input type (text, number, json, ...)"))
                .arg(descriptor_flag("placeholder", "placeholder", "Placeholder text"))
                .arg(descriptor_flag("help-text", "help-text", "Free-form help text authored for the field"))
                .arg(
                    Arg::new("width")
                        .long("width")
                        .action(ArgAction::Set)
                        .value_parser(clap::value_parser!(usize))
                        .help("Wrap rendered steps at this column"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print the resolution as JSON"),
                ),
        )
        .subcommand(
            Command::new("catalog")
                .about("Inspect curated guide catalogs")
                .subcommand_required(true)
                .subcommand(
                    Command::new("list")
                        .about("List curated guides in the effective catalog")
                        .arg(descriptor_flag("node-type", "node-type", "Only list guides for this node type")),
                )
                .subcommand(
                    Command::new("check")
                        .about("Validate catalog files, or the effective catalog when none are given")
                        .arg(Arg::new("files").action(ArgAction::Append).num_args(0..).help("Catalog files (YAML or JSON)")),
                ),
        )
        .subcommand(Command::new("categories").about("Print generator categories in precedence order"))
}

fn run_resolve(settings: &GuideSettings, matches: &ArgMatches) -> Result<()> {
    let descriptor = descriptor_from_args(matches)?;
    let catalog = settings.load_catalog().context("failed to load guide catalogs")?;
    let resolution = GuideResolver::new(&catalog).resolve(&descriptor);

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    let width = matches
        .get_one::<usize>("width")
        .copied()
        .or(settings.wrap_width)
        .unwrap_or(DEFAULT_WRAP_WIDTH);
    print!("{}", render::render_resolution(&resolution, width));
    Ok(())
}

fn descriptor_from_args(matches: &ArgMatches) -> Result<FieldDescriptor> {
    let mut descriptor = match matches.get_one::<String>("descriptor") {
        Some(path) => load_descriptor(Path::new(path))?,
        None => FieldDescriptor::default(),
    };

    let flag = |id: &str| matches.get_one::<String>(id).cloned();
    if let Some(node_type) = flag("node-type") {
        descriptor.node_type = Some(node_type);
    }
    if let Some(key) = flag("key") {
        descriptor.key = Some(key);
    }
    if let Some(label) = flag("label") {
        descriptor.label = Some(label);
    }
    if let Some(field_type) = flag("type") {
        descriptor.r#type = Some(field_type);
    }
    if let Some(placeholder) = flag("placeholder") {
        descriptor.placeholder = Some(placeholder);
    }
    if let Some(help_text) = flag("help-text") {
        descriptor.help_text = Some(help_text);
    }
    Ok(descriptor)
}

fn load_descriptor(path: &Path) -> Result<FieldDescriptor> {
    let content = fs::read_to_string(path).with_context(|| format!("failed to read descriptor {}", path.display()))?;
    let is_json = path
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
    let descriptor = if is_json {
        serde_json::from_str(&content).with_context(|| format!("invalid JSON descriptor {}", path.display()))?
    } else {
        serde_yaml::from_str(&content).with_context(|| format!("invalid YAML descriptor {}", path.display()))?
    };
    Ok(descriptor)
}

fn run_catalog(settings: &GuideSettings, matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("list", sub)) => {
            let catalog = settings.load_catalog().context("failed to load guide catalogs")?;
            let only = sub.get_one::<String>("node-type");
            for (node_type, field_key, guide) in catalog.entries() {
                if only.is_some_and(|wanted| wanted != node_type) {
                    continue;
                }
                println!("{node_type}/{field_key}: {}", guide.title);
            }
            Ok(())
        }
        Some(("check", sub)) => {
            let files: Vec<&String> = sub.get_many::<String>("files").map(Iterator::collect).unwrap_or_default();
            if files.is_empty() {
                let catalog = settings.load_catalog().context("effective catalog is invalid")?;
                println!(
                    "ok: built-in catalog with {} overlay(s), {} curated guide(s)",
                    settings.overlay_catalogs.len(),
                    catalog.len()
                );
                return Ok(());
            }
            check_files(&files)
        }
        _ => bail!("expected `catalog list` or `catalog check`"),
    }
}

fn check_files(files: &[&String]) -> Result<()> {
    let mut failures = 0usize;
    for file in files {
        match GuideCatalog::from_path(file.as_str()) {
            Ok(catalog) => println!("ok: {file} ({} curated guide(s))", catalog.len()),
            Err(error) => {
                failures += 1;
                println!("error: {file}: {error}");
            }
        }
    }
    debug!(checked = files.len(), failures, "catalog check finished");
    if failures > 0 {
        bail!("{failures} catalog file(s) failed validation");
    }
    Ok(())
}

fn print_categories() {
    for (position, category) in generator::precedence().enumerate() {
        println!("{:>2}. {category}", position + 1);
    }
}
