pub const REGISTRY_ID_COLUMN: &str = "UNIT_CODE";
pub const REGISTRY_NAME_COLUMN: &str = "UNIT_NAME";
pub const REGISTRY_STATE_COLUMN: &str = "STATE";

pub const COORDS_TYPE_COLUMN: &str = "type";
pub const COORDS_UNIT_COLUMN: &str = "unit";
pub const COORDS_CODE_COLUMN: &str = "code";
pub const COORDS_LAT_COLUMN: &str = "latitude";
pub const COORDS_LON_COLUMN: &str = "longitude";

/// Only coordinate rows of this `type` take part in the join.
pub const NATIONAL_PARK_TYPE: &str = "National Park";

/// Listed in the registry but never tracked.
pub const EXCLUDED_PARK_NAME: &str = "National Park of American Samoa";

/// `(unit, code)` pairs where the coordinate source's code differs from the
/// registry's. New divergences get a new entry here.
pub const CODE_OVERRIDES: &[(&str, &str)] = &[
    ("Kings Canyon National Park", "KICA"),
    ("Sequoia National Park", "SEQU"),
];

/// Cell values read as "no value" in the coordinate columns, alongside blanks.
pub const MISSING_VALUE_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];
