/// Category tag applied to products created without one
pub const DEFAULT_CATEGORY: &str = "default";

/// Suffix appended to the page `<title>` by the hydrator
pub const PAGE_TITLE_SUFFIX: &str = " – Furnistør";

/// Currency symbol applied to products created without one
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
