use anyhow::{anyhow, bail, Context, Result};
use camino::Utf8PathBuf;
use deckforge_app_core::{
    messages, results_vm, AppCommand, AppKernel, DeckServicePort, ResultsVm, WorkflowState,
};
use deckforge_core::{BuiltDeck, CommanderInfo, PartnerCompatibility};
use deckforge_infra::DeckApiClient;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::CliFormat;

/// Where the card pool comes from.
#[derive(Debug, Clone)]
pub enum CardSource {
    File(Utf8PathBuf),
    Text(String),
}

#[derive(Debug, Clone)]
pub struct BuildArgs {
    pub format: CliFormat,
    pub cards: CardSource,
    pub commander: Option<String>,
    pub partner: Option<String>,
    pub goal: Option<String>,
    pub json: bool,
}

fn api_client(api_url: &str) -> Result<DeckApiClient> {
    let http = deckforge_infra::default_http_client().context("Failed to build HTTP client")?;
    DeckApiClient::new(http, api_url).with_context(|| format!("Invalid deck service URL {api_url}"))
}

fn spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message.to_string());
    Ok(pb)
}

async fn settle<S: DeckServicePort>(
    kernel: &mut AppKernel<S>,
    message: &str,
) -> Result<WorkflowState> {
    let pb = spinner(message)?;
    kernel.settle().await;
    pb.finish_and_clear();

    let state = kernel.state();
    match &state.error {
        Some(err) => bail!("{err}"),
        None => Ok(state),
    }
}

pub async fn cmd_validate(api_url: &str, name: String, partner: bool) -> Result<CommanderInfo> {
    println!(":: Validating commander...");
    println!("   Name: {}", name);

    let client = api_client(api_url)?;
    let pb = spinner("Contacting deck service")?;
    let res = client.validate_commander(name.trim(), partner).await;
    pb.finish_and_clear();
    let info = res.map_err(|e| anyhow!(messages::commander_error(&e.to_string())))?;

    println!("\n:: Commander Accepted");
    if let Some(canonical) = &info.name {
        println!("   Card:           {}", canonical);
    }
    if let Some(colors) = &info.color_identity {
        let colors = if colors.is_empty() {
            "Colorless".to_string()
        } else {
            colors.join("")
        };
        println!("   Color Identity: {}", colors);
    }
    println!(
        "   Partner:        {}",
        if info.has_partner { "yes" } else { "no" }
    );

    Ok(info)
}

pub async fn cmd_check_partner(
    api_url: &str,
    commander1: String,
    commander2: String,
) -> Result<PartnerCompatibility> {
    println!(":: Checking partner pairing...");
    println!("   {} + {}", commander1, commander2);

    let client = api_client(api_url)?;
    let pb = spinner("Contacting deck service")?;
    let res = client
        .check_partner(commander1.trim(), commander2.trim())
        .await;
    pb.finish_and_clear();
    let compat = res.map_err(|e| anyhow!(messages::commander_error(&e.to_string())))?;

    println!("\n:: Partner Check Result");
    if compat.is_compatible {
        println!("   Status: Compatible");
    } else {
        let reason = compat
            .reason
            .as_deref()
            .unwrap_or(messages::PARTNERS_INCOMPATIBLE);
        println!("   Status: Not compatible ({reason})");
    }

    Ok(compat)
}

/// Runs the whole form workflow against the service and prints the deck.
/// Progress goes to stderr so `--json` output stays machine-readable.
pub async fn cmd_build(api_url: &str, args: BuildArgs) -> Result<BuiltDeck> {
    let mut kernel = deckforge_app_core::connect(api_url)?;
    run_build(&mut kernel, args).await
}

pub async fn run_build<S: DeckServicePort>(
    kernel: &mut AppKernel<S>,
    args: BuildArgs,
) -> Result<BuiltDeck> {
    let format = args.format.into();
    eprintln!(":: Building {} deck...", format);
    kernel.dispatch(AppCommand::SelectFormat(format));

    match args.cards {
        CardSource::File(path) => {
            eprintln!("   Cards:     {}", path);
            kernel.dispatch(AppCommand::LoadCardFile(path));
            settle(kernel, "Reading card list").await?;
        }
        CardSource::Text(text) => kernel.dispatch(AppCommand::EditCardList(text)),
    }
    if let Some(goal) = args.goal {
        eprintln!("   Goal:      {}", goal.trim());
        kernel.dispatch(AppCommand::EditDeckGoal(goal));
    }

    if let Some(commander) = args.commander {
        if format.uses_commander() {
            eprintln!("   Commander: {}", commander.trim());
            kernel.dispatch(AppCommand::EnterCommander(commander));
            settle(kernel, "Validating commander").await?;
        } else {
            tracing::warn!("{format} decks have no commander; ignoring {commander:?}");
        }
    }

    if let Some(partner) = args.partner {
        if kernel.state().partner_available() {
            eprintln!("   Partner:   {}", partner.trim());
            kernel.dispatch(AppCommand::EnterPartner(partner));
            settle(kernel, "Checking partner pairing").await?;
        } else {
            tracing::warn!("commander has no Partner ability; ignoring partner {partner:?}");
        }
    }

    kernel.dispatch(AppCommand::SubmitBuild);
    let state = settle(kernel, "Building deck").await?;

    let deck = state
        .result
        .clone()
        .ok_or_else(|| anyhow!("The deck service returned no deck"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&deck)?);
    } else if let Some(vm) = results_vm(&state) {
        print_deck(&vm);
    }

    Ok(deck)
}

fn print_deck(vm: &ResultsVm) {
    println!("\n:: Deck ({})", vm.total_label);
    for section in &vm.sections {
        println!("\n   {}", section.heading);
        for row in &section.rows {
            match &row.cmc {
                Some(cmc) => println!("     {:<34} {:<30} {}", row.name, row.type_line, cmc),
                None => println!("     {:<34} {}", row.name, row.type_line),
            }
        }
    }
}
