//! Prompt construction for the analysis request.

use pgc_core::FinancialRecord;
use pgc_core::calculations::Indicators;

/// Builds the consultant prompt for one period.
///
/// Embeds the serialized record and indicators plus the fixed Angolan
/// context the analysis must weigh: inflation, USD/AOA exposure, AGT
/// obligations, and liquidity under restricted access to foreign currency.
pub fn build_prompt(record: &FinancialRecord, indicators: &Indicators) -> String {
    // Serialization of these plain derive structs cannot fail; fall back to
    // an empty object rather than aborting the request over formatting.
    let record_json =
        serde_json::to_string(record).unwrap_or_else(|_| "{}".to_string());
    let indicators_json =
        serde_json::to_string(indicators).unwrap_or_else(|_| "{}".to_string());

    format!(
        "Aja como um Consultor Financeiro Sênior especializado no mercado de Angola \
e no Plano Geral de Contabilidade (PGC) Angolano.\n\
Analise os seguintes dados financeiros em Kwanzas (Kz) e indicadores de uma empresa:\n\
\n\
DADOS: {record_json}\n\
INDICADORES CALCULADOS: {indicators_json}\n\
\n\
Contexto Adicional para Angola:\n\
1. Considere o impacto da inflação e a necessidade de preservação de valor.\n\
2. Avalie a exposição ao risco cambial (USD/AOA), se aplicável (ex: custos de importação).\n\
3. Considere obrigações fiscais da AGT (como o IVA e Imposto Industrial).\n\
4. Analise a liquidez num contexto de acesso restrito a divisas.\n\
\n\
Forneça uma análise dividida em Curto Prazo (0-12m), Médio Prazo (1-3 anos) \
e Longo Prazo (3+ anos).\n\
A linguagem deve ser executiva, clara para gestores angolanos.\n\
Para cada período, defina um status (Otimista, Neutro, Alerta), descreva a \
situação e dê recomendações estratégicas."
    )
}
