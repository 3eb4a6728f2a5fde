//! Command handlers: wire the repository, the calculators, and the
//! analysis client to terminal output.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::info;

use pgc_analysis::{TextModel, analyze_financial_health};
use pgc_core::calculations::{
    calculate_indicators, calculate_payroll, estimate_fiscal,
};
use pgc_core::{Employee, FinanceRepository, FinancialRecord, NewEmployee};

use crate::benchmarks;
use crate::format::{format_kz, format_percent};
use crate::state::DashboardState;

/// The period entry form. Net revenue is not an input: it is derived from
/// the five channel figures, so the stored breakdown always reconciles.
#[derive(Debug, Clone)]
pub struct RecordForm {
    pub period: NaiveDate,
    pub current_assets: Decimal,
    pub non_current_assets: Decimal,
    pub inventory: Decimal,
    pub cash_equivalents: Decimal,
    pub current_liabilities: Decimal,
    pub non_current_liabilities: Decimal,
    pub equity: Decimal,
    pub gross_profit: Decimal,
    pub operating_profit: Decimal,
    pub net_profit: Decimal,
    pub sales: Decimal,
    pub costs: Decimal,
    pub revenue_services: Decimal,
    pub revenue_transport: Decimal,
    pub revenue_tuition: Decimal,
    pub revenue_exam_sheets: Decimal,
    pub revenue_uniforms: Decimal,
}

impl RecordForm {
    pub fn into_record(self) -> FinancialRecord {
        let mut record = FinancialRecord {
            period: self.period,
            current_assets: self.current_assets,
            non_current_assets: self.non_current_assets,
            inventory: self.inventory,
            cash_equivalents: self.cash_equivalents,
            current_liabilities: self.current_liabilities,
            non_current_liabilities: self.non_current_liabilities,
            equity: self.equity,
            net_revenue: Decimal::ZERO,
            gross_profit: self.gross_profit,
            operating_profit: self.operating_profit,
            net_profit: self.net_profit,
            sales: self.sales,
            costs: self.costs,
            revenue_services: self.revenue_services,
            revenue_transport: self.revenue_transport,
            revenue_tuition: self.revenue_tuition,
            revenue_exam_sheets: self.revenue_exam_sheets,
            revenue_uniforms: self.revenue_uniforms,
        };
        record.net_revenue = record.channel_revenue_total();
        record
    }
}

/// Picks the requested period, or the latest one when none is given.
async fn resolve_record(
    repo: &dyn FinanceRepository,
    period: Option<NaiveDate>,
) -> Result<FinancialRecord> {
    match period {
        Some(p) => Ok(repo.get_record(p).await?),
        None => {
            let records = repo.list_records().await?;
            records
                .last()
                .cloned()
                .context("no periods recorded yet; add one with `record add`")
        }
    }
}

pub async fn add_record(repo: &dyn FinanceRepository, form: RecordForm) -> Result<()> {
    let record = form.into_record();
    if repo.get_record(record.period).await.is_ok() {
        bail!(
            "a record for {} already exists; use `record edit`",
            record.period
        );
    }

    info!(period = %record.period, "adding period");
    repo.upsert_record(record.clone()).await?;
    println!(
        "Registado {} (receita líquida {}).",
        record.period,
        format_kz(record.net_revenue)
    );
    Ok(())
}

pub async fn edit_record(repo: &dyn FinanceRepository, form: RecordForm) -> Result<()> {
    let record = form.into_record();
    // Editing replaces an existing period; refuse to create one silently.
    repo.get_record(record.period).await?;

    info!(period = %record.period, "replacing period");
    repo.upsert_record(record.clone()).await?;
    println!("Actualizado {}.", record.period);
    Ok(())
}

pub async fn delete_record(repo: &dyn FinanceRepository, period: NaiveDate) -> Result<()> {
    let periods: Vec<_> = repo
        .list_records()
        .await?
        .iter()
        .map(|r| r.period)
        .collect();
    let mut state = DashboardState::new(&periods);

    repo.delete_record(period).await?;
    let remaining: Vec<_> = periods.iter().copied().filter(|p| *p != period).collect();
    state.on_record_deleted(period, &remaining);

    match state.active_period() {
        Some(active) => println!("Eliminado {period}. Período activo: {active}."),
        None => println!("Eliminado {period}. Sem períodos registados."),
    }
    Ok(())
}

pub async fn list_records(repo: &dyn FinanceRepository) -> Result<()> {
    let records = repo.list_records().await?;
    if records.is_empty() {
        println!("Sem períodos registados.");
        return Ok(());
    }

    for record in &records {
        println!(
            "{}  receita {}  resultado {}",
            record.period,
            format_kz(record.net_revenue),
            format_kz(record.net_profit)
        );
    }
    Ok(())
}

pub async fn show_indicators(
    repo: &dyn FinanceRepository,
    period: Option<NaiveDate>,
) -> Result<()> {
    let record = resolve_record(repo, period).await?;
    let indicators = calculate_indicators(&record);
    let report = benchmarks::assess(&indicators);

    println!("Indicadores de {}", record.period);
    println!(
        "  Liquidez corrente:   {:.2}  [{}]",
        indicators.current_liquidity,
        report.current_liquidity.as_str()
    );
    println!("  Liquidez seca:       {:.2}", indicators.quick_liquidity);
    println!("  Liquidez imediata:   {:.2}", indicators.immediate_liquidity);
    println!(
        "  Endividamento total: {}  [{}]",
        format_percent(indicators.total_leverage),
        report.total_leverage.as_str()
    );
    println!("  Margem bruta:        {}", format_percent(indicators.gross_margin));
    println!(
        "  Margem operacional:  {}",
        format_percent(indicators.operating_margin)
    );
    println!(
        "  Margem líquida:      {}  [{}]",
        format_percent(indicators.net_margin),
        report.net_margin.as_str()
    );
    println!(
        "  ROI:                 {}",
        format_percent(indicators.return_on_investment)
    );
    println!(
        "  ROE:                 {}  [{}]",
        format_percent(indicators.return_on_equity),
        report.return_on_equity.as_str()
    );
    println!("  Giro de activos:     {:.2}", indicators.asset_turnover);
    Ok(())
}

pub async fn show_fiscal(repo: &dyn FinanceRepository, period: Option<NaiveDate>) -> Result<()> {
    let record = resolve_record(repo, period).await?;
    let estimate = estimate_fiscal(&record);

    println!("Estimativa fiscal de {}", record.period);
    println!("  Imposto Industrial: {}", format_kz(estimate.industrial_tax));
    println!("  IVA estimado:       {}", format_kz(estimate.iva_estimate));
    println!("  Total estimado:     {}", format_kz(estimate.total_estimate));
    println!("  Estado:             {}", estimate.status.as_str());
    Ok(())
}

pub async fn show_payroll(repo: &dyn FinanceRepository) -> Result<()> {
    let employees = repo.list_employees().await?;
    if employees.is_empty() {
        println!("Sem funcionários registados.");
        return Ok(());
    }

    let mut total_cost = Decimal::ZERO;
    for employee in &employees {
        let result = calculate_payroll(employee);
        total_cost += result.total_cost;
        println!(
            "{}  bruto {}  INSS {}  IRT {}  líquido {}  custo {}",
            employee.name,
            format_kz(result.gross_salary),
            format_kz(result.inss_worker),
            format_kz(result.irt),
            format_kz(result.net_salary),
            format_kz(result.total_cost)
        );
    }
    println!("Custo total da folha: {}", format_kz(total_cost));
    Ok(())
}

pub async fn add_employee(repo: &dyn FinanceRepository, new: NewEmployee) -> Result<()> {
    let employee = repo.create_employee(new).await?;
    println!("Criado {} (id {}).", employee.name, employee.id);
    Ok(())
}

pub async fn edit_employee(repo: &dyn FinanceRepository, employee: Employee) -> Result<()> {
    repo.update_employee(&employee).await?;
    println!("Actualizado {}.", employee.name);
    Ok(())
}

pub async fn delete_employee(repo: &dyn FinanceRepository, id: &str) -> Result<()> {
    repo.delete_employee(id).await?;
    println!("Eliminado funcionário {id}.");
    Ok(())
}

pub async fn list_employees(repo: &dyn FinanceRepository) -> Result<()> {
    let employees = repo.list_employees().await?;
    if employees.is_empty() {
        println!("Sem funcionários registados.");
        return Ok(());
    }

    for employee in &employees {
        println!(
            "{}  {}  base {}  subsídios {}  bónus {}",
            employee.id,
            employee.name,
            format_kz(employee.base_salary),
            format_kz(employee.allowances),
            format_kz(employee.bonus)
        );
    }
    Ok(())
}

/// Requests an analysis for the chosen period and renders it.
///
/// The session state is threaded through so selecting a period other than
/// the latest one drops any previously cached narrative, and the fresh one
/// is cached against the now-active period. Returns the session so an
/// interactive caller can keep it across commands.
pub async fn run_analysis(
    repo: &dyn FinanceRepository,
    model: &dyn TextModel,
    period: Option<NaiveDate>,
) -> Result<DashboardState> {
    let periods: Vec<_> = repo
        .list_records()
        .await?
        .iter()
        .map(|r| r.period)
        .collect();
    let mut state = DashboardState::new(&periods);

    let record = resolve_record(repo, period).await?;
    state.select(record.period);
    let indicators = calculate_indicators(&record);

    info!(period = %record.period, "requesting analysis");
    let analysis = analyze_financial_health(model, &record, &indicators)
        .await
        .context("analysis failed; check the API key and try again")?;
    state.set_analysis(analysis);

    render_analysis(&state);
    Ok(state)
}

/// Prints the analysis cached for the active period, if the session holds one.
fn render_analysis(state: &DashboardState) {
    let (Some(period), Some(analysis)) = (state.active_period(), state.analysis()) else {
        return;
    };

    println!("Análise de {period}\n");
    for section in [
        &analysis.short_term,
        &analysis.mid_term,
        &analysis.long_term,
    ] {
        println!("{} [{}]", section.title, section.status.as_str());
        println!("  {}", section.description);
        for recommendation in &section.recommendations {
            println!("  - {recommendation}");
        }
        println!();
    }
    println!("Resumo: {}", analysis.general_summary);
}
