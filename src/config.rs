/// Configuration constants for the RTMS API
pub mod api {
    /// API version suffix appended to the host
    pub const BASE_PATH: &str = "/v1";

    /// Header carrying the API key
    pub const AUTH_HEADER: &str = "X-AUTH-TOKEN";

    /// Default page size for list requests
    pub const DEFAULT_PAGE_SIZE: usize = 100;

    /// Capacity of the item queue between the page worker and the consumer
    pub const STREAM_BUFFER: usize = 64;

    /// Consecutive empty pages tolerated before a stream is declared stalled
    pub const MAX_EMPTY_PAGES: u32 = 3;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the API key
    pub const API_KEY_ENV_VAR: &str = "RTMS_API_KEY";
}

/// Configuration constants for host resolution
pub mod host {
    /// Environment variable holding the API host
    pub const ENV_VAR: &str = "RTMS_HOST";
}

/// Configuration constants for the settings file
pub mod settings {
    /// Directory name under the home directory
    pub const DIR_NAME: &str = ".rtmsctl";

    /// Settings file name
    pub const FILE_NAME: &str = "config.json";
}

/// Default values for CLI
pub mod defaults {
    /// Default RTMS host
    pub const HOST: &str = "rtms-api.cloud-temple.com";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
