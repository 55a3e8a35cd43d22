/// All user-facing strings shown alongside the reports.
///
/// The country table displays Portuguese names, so the shipped instance is
/// Portuguese as well. The not-found text is the only string that also ends up
/// in the store's error field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStrings {
    /// Published when a name lookup returns no records
    pub country_not_found: &'static str,

    /// Heading printed above the listing
    pub listing_header: &'static str,

    /// Shown while a fetch is in flight
    pub loading: &'static str,

    /// Shown when a completed fetch produced no reports
    pub no_reports: &'static str,

    // ==================== Report Field Labels ====================
    pub label_date: &'static str,
    pub label_confirmed: &'static str,
    pub label_deaths: &'static str,
    pub label_recovered: &'static str,
    pub label_active: &'static str,
    pub label_fatality_rate: &'static str,
}

impl MessageStrings {
    pub fn portuguese() -> &'static MessageStrings {
        &PORTUGUESE
    }
}

impl Default for MessageStrings {
    fn default() -> Self {
        PORTUGUESE.clone()
    }
}

static PORTUGUESE: MessageStrings = MessageStrings {
    country_not_found: "País não encontrado ou sem dados",
    listing_header: "Casos de COVID-19 por país",
    loading: "Carregando...",
    no_reports: "Nenhum dado disponível",
    label_date: "Data",
    label_confirmed: "Confirmados",
    label_deaths: "Mortes",
    label_recovered: "Recuperados",
    label_active: "Ativos",
    label_fatality_rate: "Taxa de letalidade",
};
