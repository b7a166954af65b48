use anyhow::{Context, anyhow};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use estimate_core::{EstimateStore, SectionPatch, UnitOfMeasure, seed};
use estimate_ui::currency::digits_to_amount;
use estimate_ui::forms::{ItemForm, SectionForm};
use estimate_ui::picker::UomPicker;
use estimate_ui::render::EstimateView;
use estimate_ui::screen::EstimateScreen;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Construction estimate builder.
///
/// Seeds a sample estimate, runs a scripted editing session against it
/// (new rows, a new section, an edited row), and prints the result.
#[derive(Debug, Parser)]
struct Cli {
    /// Replacement title for the estimate.
    #[arg(long)]
    title: Option<String>,

    /// Print the final estimate as JSON instead of text.
    #[arg(long)]
    json: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── demo session ────────────────────────────────────────────────────────────

/// Walks the screen through a scripted editing session.
fn run_demo(screen: &mut EstimateScreen) -> anyhow::Result<()> {
    // More materials, entered through the add-item form.
    let mut form = ItemForm::new();
    form.title = "Nails".to_string();
    form.price = "3.00".to_string();
    form.set_quantity_text("10");
    let nails = form
        .validate()
        .map_err(|()| anyhow!("item form invalid: {}", form.errors.join(", ")))?;
    screen.add_item("section-materials", nails)?;
    debug!("added nails to materials");

    // A section save with nothing selected is refused and changes nothing.
    if let Err(e) = screen.save_section(SectionPatch::title("Misc")) {
        info!("save refused: {}", e);
    }

    // New labor section.
    let mut form = SectionForm::new();
    form.title = "Labor".to_string();
    let labor_title = form
        .validate()
        .map_err(|()| anyhow!("section form invalid: {}", form.errors.join(", ")))?;
    let labor_id = screen.add_section(labor_title);
    debug!(section_id = %labor_id, "added labor section");

    // Framing crew, with the unit picked through the searchable list.
    let mut picker = UomPicker::new(UnitOfMeasure::Each);
    picker.search = "hour".to_string();
    let unit = picker
        .options()
        .first()
        .copied()
        .context("no unit matched the picker search")?;
    picker.select(unit);

    let mut form = ItemForm::new();
    form.title = "Framing".to_string();
    form.price = "55.00".to_string();
    form.set_quantity_text("8");
    form.uom = picker.value;
    let framing = form
        .validate()
        .map_err(|()| anyhow!("item form invalid: {}", form.errors.join(", ")))?;
    screen.add_item(&labor_id, framing)?;
    debug!("added framing to labor");

    // Reprice the seeded lumber through an edit session. The new price is
    // typed as digits into the currency mask.
    let lumber = screen
        .estimate()
        .row("item-lumber")
        .context("seeded lumber row missing")?
        .clone();
    screen.start_item_edit(lumber.clone());

    let mut form = ItemForm::for_row(&lumber);
    form.price = digits_to_amount("1425").to_string();
    form.increment_quantity();
    let edited = form
        .validate()
        .map_err(|()| anyhow!("item form invalid: {}", form.errors.join(", ")))?;
    screen.save_item(edited.with_id(lumber.id.clone()))?;
    debug!(row_id = %lumber.id, "repriced lumber");

    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let mut screen = EstimateScreen::new(EstimateStore::new(seed::sample_estimate()));
    if let Some(title) = cli.title {
        screen.update_title(title);
    }

    run_demo(&mut screen)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(screen.estimate())?);
    } else {
        info!("{}", EstimateView(screen.estimate()));
    }

    Ok(())
}
