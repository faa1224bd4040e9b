// Versioning
pub const PAGEPATCH_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const USER_AGENT: &str = "pagepatch";

// Config
pub const CONFIG_DIR: &str = ".config";
pub const PAGEPATCH: &str = "pagepatch";
pub const API_HOST_ENV: &str = "PAGEPATCH_API_HOST";

// GitHub
pub const DEFAULT_API_HOST: &str = "https://api.github.com";
pub const GITHUB_HOST: &str = "github.com";

// Pagination relations
pub const REL_NEXT: &str = "next";
pub const REL_PREV: &str = "prev";
pub const REL_FIRST: &str = "first";
pub const REL_LAST: &str = "last";
