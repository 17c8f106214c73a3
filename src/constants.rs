//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and fixed strings so the
//! fetch, transform and rendering code share one source of truth.

/// Default TheSportsDB API base URL (without the API key segment)
pub const DEFAULT_API_BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json";

/// Default TheSportsDB API key (the public test key)
pub const DEFAULT_API_KEY: &str = "1";

/// TheSportsDB league id of the Peruvian Liga 1
pub const DEFAULT_LEAGUE_ID: u32 = 4391;

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Refresh cadence of the match feed
pub mod refresh {
    /// Default interval between fetch cycles
    pub const DEFAULT_INTERVAL_SECONDS: u64 = 60;

    /// Shortest interval accepted from config or CLI
    pub const MIN_INTERVAL_SECONDS: u64 = 5;

    /// Cooldown between manual refreshes ('r' key)
    pub const MANUAL_COOLDOWN_SECONDS: u64 = 10;
}

/// Placeholder values used when the API omits a field
pub mod placeholders {
    pub const LEAGUE: &str = "Liga 1";
    pub const HOME_TEAM: &str = "Equipo Casa";
    pub const AWAY_TEAM: &str = "Equipo Visitante";
    pub const DATE: &str = "Fecha no disponible";
    pub const EVENT: &str = "Partido sin datos.";
}

/// Teletext page layout
pub mod ui {
    /// Page number shown in the header
    pub const PAGE_NUMBER: u16 = 201;

    /// Page title
    pub const TITLE: &str = "FÚTBOL";

    /// Width used when rendering without a terminal (`--once`)
    pub const DEFAULT_WIDTH: u16 = 80;

    /// Height used when the terminal size cannot be read
    pub const DEFAULT_HEIGHT: u16 = 24;

    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Rows reserved for header (2) and footer (1) plus spacing
    pub const CHROME_ROWS: usize = 5;
}
