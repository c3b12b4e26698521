//! Webfleet Cameroun dashboard CLI
//!
//! Renders the recomputed projection table and KPIs, runs the optional
//! multi-investor split, and exports the KPI report on demand.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};

use webfleet_projection::investors::MAX_INVESTORS;
use webfleet_projection::report::{format_fcfa, KpiReport};
use webfleet_projection::simulation::engine::{
    DEFAULT_EXCHANGE_RATE, DEFAULT_GROWTH_PCT, DEFAULT_SUBSCRIPTION_PRICE_FCFA,
    DEFAULT_UNIT_PRICE_FCFA,
};
use webfleet_projection::{
    allocate, DashboardSession, InvestorAllocation, SimulationParameters, SimulationResult,
};

#[derive(Parser, Debug)]
#[command(
    name = "webfleet-dashboard",
    about = "Financial simulation dashboard for Webfleet Cameroun",
    version
)]
struct Cli {
    /// Projection workbook (sheet "Projection trimestrielle")
    #[arg(long, default_value = "App_Webfleet_Projection_FCFA.xlsx")]
    workbook: PathBuf,

    /// Load the table from a CSV export instead of the workbook
    #[arg(long, value_name = "PATH")]
    csv: Option<PathBuf>,

    /// Prix de vente boîtier (FCFA)
    #[arg(long, default_value_t = DEFAULT_UNIT_PRICE_FCFA)]
    unit_price: f64,

    /// Prix abonnement client (FCFA/mois)
    #[arg(long, default_value_t = DEFAULT_SUBSCRIPTION_PRICE_FCFA)]
    subscription_price: f64,

    /// Taux de change ZAR→FCFA
    #[arg(long, default_value_t = DEFAULT_EXCHANGE_RATE)]
    exchange_rate: f64,

    /// Croissance trimestrielle (%), between 10 and 30
    #[arg(long, default_value_t = DEFAULT_GROWTH_PCT)]
    growth: u8,

    /// Montant investi par investisseur (FCFA); repeat up to 10 times
    #[arg(long = "invest", value_name = "FCFA")]
    investments: Vec<f64>,

    /// Write the KPI report to this path
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Output format for the computed results
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let params = SimulationParameters {
        unit_price_fcfa: cli.unit_price,
        subscription_price_fcfa: cli.subscription_price,
        exchange_rate: cli.exchange_rate,
        quarterly_growth_pct: cli.growth,
    };
    params.validate().context("invalid simulation parameters")?;

    if cli.investments.len() > MAX_INVESTORS {
        bail!(
            "at most {} investors are supported, got {}",
            MAX_INVESTORS,
            cli.investments.len()
        );
    }

    let mut session = match &cli.csv {
        Some(path) => DashboardSession::from_csv(path)
            .with_context(|| format!("loading projection table from {}", path.display()))?,
        None => DashboardSession::from_workbook(&cli.workbook)
            .with_context(|| format!("loading workbook {}", cli.workbook.display()))?,
    };
    session.set_params(params);

    let result = session.run()?;

    let allocations = if cli.investments.is_empty() {
        None
    } else {
        Some(allocate(&cli.investments, result.kpis.total_revenue_fcfa)?)
    };

    match cli.format {
        OutputFormat::Table => {
            print_dashboard(session.params(), &result);
            if let Some(allocations) = &allocations {
                print_allocations(allocations, result.kpis.total_revenue_fcfa);
            }
        }
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "parameters": session.params(),
                "quarters": result.quarters,
                "kpis": result.kpis,
                "allocations": allocations,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
    }

    // Export failure is recoverable: the dashboard output above stands.
    if let Some(path) = &cli.export {
        let report = KpiReport::from_summary(&result.kpis);
        match report.write_to(path) {
            Ok(()) => println!("\nRapport écrit dans {}", path.display()),
            Err(err) => eprintln!("\nExport échoué: {err}"),
        }
    }

    Ok(())
}

fn print_dashboard(params: &SimulationParameters, result: &SimulationResult) {
    println!("Dashboard Webfleet Cameroun");
    println!("===========================\n");

    println!("Paramètres de simulation:");
    println!(
        "  Prix de vente boîtier  : {} FCFA",
        format_fcfa(params.unit_price_fcfa)
    );
    println!(
        "  Prix abonnement client : {} FCFA/mois",
        format_fcfa(params.subscription_price_fcfa)
    );
    println!("  Taux de change ZAR→FCFA: {:.2}", params.exchange_rate);
    println!(
        "  Croissance trimestrielle: {}% (réservé)\n",
        params.quarterly_growth_pct
    );

    println!(
        "{:>10} {:>10} {:>14} {:>16} {:>14} {:>16}",
        "Trimestre", "Véhicules", "CA (ZAR)", "CA (FCFA)", "Résultat (ZAR)", "Cash (FCFA)"
    );
    println!("{}", "-".repeat(86));

    for row in &result.quarters {
        println!(
            "{:>10} {:>10} {:>14.0} {:>16} {:>14.0} {:>16}",
            row.quarter_label,
            row.cumulative_vehicles,
            row.revenue_zar,
            format_fcfa(row.revenue_fcfa),
            row.net_result_zar,
            format_fcfa(row.cumulative_cash_fcfa),
        );
    }

    println!("\nSynthèse & KPIs:");
    println!(
        "  CA total (FCFA)    : {}",
        format_fcfa(result.kpis.total_revenue_fcfa)
    );
    println!(
        "  Résultat net (FCFA): {}",
        format_fcfa(result.kpis.total_net_result_fcfa)
    );
    println!("  ROI cumulé         : {:.2}", result.kpis.roi);
}

fn print_allocations(allocations: &[InvestorAllocation], baseline: f64) {
    println!("\nSimulation multi-investisseurs:");
    println!(
        "  Valorisation post-money estimée : {} FCFA",
        format_fcfa(baseline)
    );

    println!("\n{:>16} {:>16} {:>10}", "Investisseur", "Montant (FCFA)", "Part (%)");
    println!("{}", "-".repeat(44));
    for a in allocations {
        println!(
            "{:>16} {:>16} {:>10.2}",
            a.label,
            format_fcfa(a.contribution_fcfa),
            a.ownership_pct,
        );
    }
}
