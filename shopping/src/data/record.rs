// BSD 3-Clause License
//
// Copyright (c) 2025, BlackPortal ○
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! Encoding of raw session rows into typed sessions and numeric feature vectors.
//!
//! A row carries 18 textual fields in a fixed order: 17 session attributes
//! followed by the `Revenue` label. Column order is part of the contract and
//! is never inferred from a header.

use crate::error::EncodeError;

/// Number of numeric features produced for every session.
pub const FEATURE_COUNT: usize = 17;

/// Number of textual fields in a raw row (features plus label).
pub const RECORD_WIDTH: usize = FEATURE_COUNT + 1;

/// First field of a header row.
pub const HEADER_MARKER: &str = "Administrative";

/// Column names in row order.
pub const COLUMNS: [&str; RECORD_WIDTH] = [
    "Administrative",
    "Administrative_Duration",
    "Informational",
    "Informational_Duration",
    "ProductRelated",
    "ProductRelated_Duration",
    "BounceRates",
    "ExitRates",
    "PageValues",
    "SpecialDay",
    "Month",
    "OperatingSystems",
    "Browser",
    "Region",
    "TrafficType",
    "VisitorType",
    "Weekend",
    "Revenue",
];

const TRUE_TOKEN: &str = "TRUE";
const RETURNING_VISITOR_TOKEN: &str = "Returning_Visitor";

/// One numeric row in `COLUMNS` order, without the label.
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Whether a session ended in a purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    NoPurchase,
    Purchase,
}

impl Label {
    pub fn is_purchase(self) -> bool {
        self == Label::Purchase
    }
}

impl From<bool> for Label {
    fn from(purchase: bool) -> Self {
        if purchase {
            Label::Purchase
        } else {
            Label::NoPurchase
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    // Spelled the way the session export writes them, including "Abr" and "June".
    const TOKENS: [(&'static str, Month); 12] = [
        ("Jan", Month::Jan),
        ("Feb", Month::Feb),
        ("Mar", Month::Mar),
        ("Abr", Month::Apr),
        ("May", Month::May),
        ("June", Month::Jun),
        ("Jul", Month::Jul),
        ("Aug", Month::Aug),
        ("Sep", Month::Sep),
        ("Oct", Month::Oct),
        ("Nov", Month::Nov),
        ("Dec", Month::Dec),
    ];

    /// Looks up a month by its literal token. Matching is exact and case-sensitive.
    pub fn from_token(token: &str) -> Option<Month> {
        Self::TOKENS.iter().find(|(t, _)| *t == token).map(|&(_, month)| month)
    }

    /// Zero-based index, January = 0.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitorType {
    Returning,
    Other,
}

impl VisitorType {
    /// Collapses any token other than `Returning_Visitor` into `Other`.
    pub fn from_token(token: &str) -> VisitorType {
        if token == RETURNING_VISITOR_TOKEN {
            VisitorType::Returning
        } else {
            VisitorType::Other
        }
    }
}

/// A browsing session with every attribute parsed to its own type.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub administrative: i64,
    pub administrative_duration: f64,
    pub informational: i64,
    pub informational_duration: f64,
    pub product_related: i64,
    pub product_related_duration: f64,
    pub bounce_rates: f64,
    pub exit_rates: f64,
    pub page_values: f64,
    pub special_day: f64,
    pub month: Month,
    pub operating_systems: i64,
    pub browser: i64,
    pub region: i64,
    pub traffic_type: i64,
    pub visitor_type: VisitorType,
    pub weekend: bool,
}

impl Session {
    /// Flattens the session into its numeric feature vector.
    pub fn features(&self) -> FeatureVector {
        [
            self.administrative as f64,
            self.administrative_duration,
            self.informational as f64,
            self.informational_duration,
            self.product_related as f64,
            self.product_related_duration,
            self.bounce_rates,
            self.exit_rates,
            self.page_values,
            self.special_day,
            self.month.index() as f64,
            self.operating_systems as f64,
            self.browser as f64,
            self.region as f64,
            self.traffic_type as f64,
            flag(self.visitor_type == VisitorType::Returning),
            flag(self.weekend),
        ]
    }
}

#[inline(always)]
fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

/// Returns true when `fields` is the column-name row.
pub fn is_header<S: AsRef<str>>(fields: &[S]) -> bool {
    fields.first().is_some_and(|f| f.as_ref() == HEADER_MARKER)
}

/// Encodes one raw row into a typed session and its label.
///
/// # Errors
/// - `EncodeError::FieldCount` when the row does not have exactly 18 fields.
/// - `EncodeError::MalformedInteger` / `MalformedFloat` / `NonFinite` when a
///   numeric column does not hold a valid finite literal.
/// - `EncodeError::UnknownCategory` when the month token is not recognized.
///
/// Visitor type, weekend and revenue never fail: anything other than their
/// positive token encodes as 0.
pub fn encode<S: AsRef<str>>(fields: &[S]) -> Result<(Session, Label), EncodeError> {
    if fields.len() != RECORD_WIDTH {
        return Err(EncodeError::FieldCount { actual: fields.len(), expected: RECORD_WIDTH });
    }
    let field = |i: usize| fields[i].as_ref();

    let month_token = field(10);
    let month = Month::from_token(month_token).ok_or_else(|| EncodeError::UnknownCategory {
        column: COLUMNS[10],
        value: month_token.to_string(),
    })?;

    let session = Session {
        administrative: parse_int(field(0), 0)?,
        administrative_duration: parse_float(field(1), 1)?,
        informational: parse_int(field(2), 2)?,
        informational_duration: parse_float(field(3), 3)?,
        product_related: parse_int(field(4), 4)?,
        product_related_duration: parse_float(field(5), 5)?,
        bounce_rates: parse_float(field(6), 6)?,
        exit_rates: parse_float(field(7), 7)?,
        page_values: parse_float(field(8), 8)?,
        special_day: parse_float(field(9), 9)?,
        month,
        operating_systems: parse_int(field(11), 11)?,
        browser: parse_int(field(12), 12)?,
        region: parse_int(field(13), 13)?,
        traffic_type: parse_int(field(14), 14)?,
        visitor_type: VisitorType::from_token(field(15)),
        weekend: field(16) == TRUE_TOKEN,
    };
    let label = Label::from(field(17) == TRUE_TOKEN);

    Ok((session, label))
}

fn parse_int(value: &str, col: usize) -> Result<i64, EncodeError> {
    value.parse::<i64>().map_err(|e| EncodeError::MalformedInteger {
        column: COLUMNS[col],
        value: value.to_string(),
        source: e,
    })
}

fn parse_float(value: &str, col: usize) -> Result<f64, EncodeError> {
    let parsed = value.parse::<f64>().map_err(|e| EncodeError::MalformedFloat {
        column: COLUMNS[col],
        value: value.to_string(),
        source: e,
    })?;
    if !parsed.is_finite() {
        return Err(EncodeError::NonFinite { column: COLUMNS[col], value: value.to_string() });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROW: [&str; RECORD_WIDTH] = [
        "0",
        "0.0",
        "1",
        "12.5",
        "7",
        "210.25",
        "0.02",
        "0.05",
        "3.3",
        "0.4",
        "Nov",
        "2",
        "1",
        "9",
        "3",
        "Returning_Visitor",
        "TRUE",
        "FALSE",
    ];

    fn row_with(index: usize, value: &'static str) -> Vec<&'static str> {
        let mut row = ROW.to_vec();
        row[index] = value;
        row
    }

    #[test]
    fn encode_valid_row() {
        let (session, label) = encode(&ROW).unwrap();
        assert_eq!(session.administrative, 0);
        assert_eq!(session.informational_duration, 12.5);
        assert_eq!(session.month, Month::Nov);
        assert_eq!(session.visitor_type, VisitorType::Returning);
        assert!(session.weekend);
        assert_eq!(label, Label::NoPurchase);

        let expected: FeatureVector = [
            0.0, 0.0, 1.0, 12.5, 7.0, 210.25, 0.02, 0.05, 3.3, 0.4, 10.0, 2.0, 1.0, 9.0, 3.0, 1.0,
            1.0,
        ];
        assert_eq!(session.features(), expected);
    }

    #[test]
    fn encode_is_deterministic() {
        let first = encode(&ROW).unwrap();
        let second = encode(&ROW).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn encode_revenue_true() {
        let (_, label) = encode(&row_with(17, "TRUE")).unwrap();
        assert_eq!(label, Label::Purchase);
        assert!(label.is_purchase());
    }

    #[test]
    fn boolean_tokens_are_case_sensitive() {
        let (session, label) = encode(&row_with(16, "true")).unwrap();
        assert!(!session.weekend);
        assert_eq!(label, Label::NoPurchase);

        let (_, label) = encode(&row_with(17, "yes")).unwrap();
        assert_eq!(label, Label::NoPurchase);
    }

    #[test]
    fn visitor_type_collapses_unknown_values() {
        for token in ["New_Visitor", "Other", "returning_visitor", ""] {
            let (session, _) = encode(&row_with(15, token)).unwrap();
            assert_eq!(session.visitor_type, VisitorType::Other);
            assert_eq!(session.features()[15], 0.0);
        }
    }

    #[test]
    fn month_uses_dataset_spelling() {
        assert_eq!(Month::from_token("Abr").map(Month::index), Some(3));
        assert_eq!(Month::from_token("June").map(Month::index), Some(5));
        assert_eq!(Month::from_token("Jan").map(Month::index), Some(0));
        assert_eq!(Month::from_token("Dec").map(Month::index), Some(11));
        assert_eq!(Month::from_token("Apr"), None);
        assert_eq!(Month::from_token("Jun"), None);
        assert_eq!(Month::from_token("nov"), None);
    }

    #[test]
    fn encode_abr_month() {
        let (session, _) = encode(&row_with(10, "Abr")).unwrap();
        assert_eq!(session.features()[10], 3.0);
    }

    #[test]
    fn encode_unknown_month() {
        let result = encode(&row_with(10, "Apr"));
        assert!(matches!(
            result,
            Err(EncodeError::UnknownCategory { column: "Month", ref value }) if value == "Apr"
        ));
        assert!(!result.unwrap_err().is_malformed());
    }

    #[test]
    fn encode_malformed_integer() {
        let result = encode(&row_with(4, "7.5"));
        assert!(matches!(
            result,
            Err(EncodeError::MalformedInteger { column: "ProductRelated", .. })
        ));
        assert!(result.unwrap_err().is_malformed());
    }

    #[test]
    fn encode_malformed_float() {
        let result = encode(&row_with(8, "abc"));
        assert!(matches!(result, Err(EncodeError::MalformedFloat { column: "PageValues", .. })));
    }

    #[test]
    fn encode_rejects_non_finite() {
        let result = encode(&row_with(1, "NaN"));
        assert!(matches!(
            result,
            Err(EncodeError::NonFinite { column: "Administrative_Duration", .. })
        ));
    }

    #[test]
    fn encode_wrong_field_count() {
        let result = encode(&ROW[..17]);
        assert!(matches!(result, Err(EncodeError::FieldCount { actual: 17, expected: 18 })));
    }

    #[test]
    fn header_detection() {
        assert!(is_header(&COLUMNS));
        assert!(!is_header(&ROW));
        assert!(!is_header::<&str>(&[]));
    }

    #[test]
    fn error_message_names_column_and_value() {
        let err = encode(&row_with(12, "x")).unwrap_err();
        assert!(err.to_string().contains("Browser"), "Unexpected error: {}", err);
        assert!(err.to_string().contains("'x'"), "Unexpected error: {}", err);
    }
}
