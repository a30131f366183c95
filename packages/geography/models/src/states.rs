//! US state abbreviation utilities.
//!
//! Region files key states by their two-letter postal abbreviation. These
//! helpers map those abbreviations to display names for the 50 US states
//! + DC.

/// Two-letter postal abbreviations for the 50 states + DC.
pub const STATE_ABBRS: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
    "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM",
    "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA",
    "WV", "WI", "WY",
];

/// Maps a two-letter state abbreviation to the full state name.
///
/// Matching is case-insensitive. Returns `None` for unrecognized
/// abbreviations (region files may contain non-state regions).
#[must_use]
pub fn state_name(abbr: &str) -> Option<&'static str> {
    let name = match abbr.trim().to_uppercase().as_str() {
        "AL" => "Alabama",
        "AK" => "Alaska",
        "AZ" => "Arizona",
        "AR" => "Arkansas",
        "CA" => "California",
        "CO" => "Colorado",
        "CT" => "Connecticut",
        "DE" => "Delaware",
        "DC" => "District of Columbia",
        "FL" => "Florida",
        "GA" => "Georgia",
        "HI" => "Hawaii",
        "ID" => "Idaho",
        "IL" => "Illinois",
        "IN" => "Indiana",
        "IA" => "Iowa",
        "KS" => "Kansas",
        "KY" => "Kentucky",
        "LA" => "Louisiana",
        "ME" => "Maine",
        "MD" => "Maryland",
        "MA" => "Massachusetts",
        "MI" => "Michigan",
        "MN" => "Minnesota",
        "MS" => "Mississippi",
        "MO" => "Missouri",
        "MT" => "Montana",
        "NE" => "Nebraska",
        "NV" => "Nevada",
        "NH" => "New Hampshire",
        "NJ" => "New Jersey",
        "NM" => "New Mexico",
        "NY" => "New York",
        "NC" => "North Carolina",
        "ND" => "North Dakota",
        "OH" => "Ohio",
        "OK" => "Oklahoma",
        "OR" => "Oregon",
        "PA" => "Pennsylvania",
        "RI" => "Rhode Island",
        "SC" => "South Carolina",
        "SD" => "South Dakota",
        "TN" => "Tennessee",
        "TX" => "Texas",
        "UT" => "Utah",
        "VT" => "Vermont",
        "VA" => "Virginia",
        "WA" => "Washington",
        "WV" => "West Virginia",
        "WI" => "Wisconsin",
        "WY" => "Wyoming",
        _ => return None,
    };
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abbr_count() {
        assert_eq!(STATE_ABBRS.len(), 51);
    }

    #[test]
    fn name_coverage() {
        for abbr in STATE_ABBRS {
            assert!(state_name(abbr).is_some(), "no name for {abbr}");
        }
    }

    #[test]
    fn unknown_abbr() {
        assert_eq!(state_name("XX"), None);
        assert_eq!(state_name(""), None);
    }

    #[test]
    fn case_insensitive_lookup() {
        assert_eq!(state_name("ca"), Some("California"));
        assert_eq!(state_name(" Tx "), Some("Texas"));
    }
}
